//! Integration test: boundary checking end-to-end on TypeScript source.
//!
//! Runs real source text through the extractor and the rule together,
//! covering both declaration-form and require-form imports.

use module_boundary_lint::{ModuleBoundaryRule, RuleOptions, Severity, TypeScriptExtractor};

fn check(source: &str, options: &RuleOptions) -> Vec<module_boundary_lint::Violation> {
    let refs = TypeScriptExtractor::new().extract(source);
    ModuleBoundaryRule::new().check(&refs, options)
}

fn battlestar() -> RuleOptions {
    RuleOptions::new("@battlestar")
}

#[test]
fn flags_import_reaching_into_package() {
    let src = "import x from '@battlestar/core/internal';\n";
    let findings = check(src, &battlestar());

    assert_eq!(findings.len(), 1);
    let finding = &findings[0];
    assert_eq!(
        finding.message,
        "cannot reach into package, must import package like: @battlestar/core"
    );
    assert_eq!(finding.severity, Severity::Error);
    // The finding spans the quoted specifier text.
    assert_eq!(
        &src[finding.span.start..finding.span.end],
        "'@battlestar/core/internal'"
    );
}

#[test]
fn allows_top_level_package_import() {
    assert!(check("import x from '@battlestar/core';\n", &battlestar()).is_empty());
}

#[test]
fn allows_types_submodule_in_both_forms() {
    let src = "import t from '@battlestar/core/types';\n\
               const y = require('@battlestar/core/types');\n";
    assert!(check(src, &battlestar()).is_empty());
}

#[test]
fn flags_require_reaching_into_package() {
    let src = "const internal = require('@battlestar/core/internal');\n";
    let findings = check(src, &battlestar());

    assert_eq!(findings.len(), 1);
    assert!(findings[0]
        .message
        .ends_with("must import package like: @battlestar/core"));
    assert_eq!(
        &src[findings[0].span.start..findings[0].span.end],
        "require('@battlestar/core/internal')"
    );
}

#[test]
fn ignores_imports_outside_the_namespace() {
    let src = "import other from 'other-lib/sub/path';\n\
               const fs = require('fs');\n";
    assert!(check(src, &battlestar()).is_empty());
}

#[test]
fn no_options_means_no_findings() {
    let src = "import x from '@battlestar/core/internal';\n\
               const y = require('@battlestar/ui/widgets');\n";
    assert!(check(src, &RuleOptions::disabled()).is_empty());
}

#[test]
fn options_parsed_from_host_option_array() {
    let options = RuleOptions::from_json_str(r#"[true, "@battlestar"]"#).expect("options parse");
    let findings = check("import x from '@battlestar/core/internal';\n", &options);
    assert_eq!(findings.len(), 1);
}

#[test]
fn mixed_file_reports_only_violations_in_order() {
    let src = "import a from '@battlestar/core';\n\
               import b from '@battlestar/core/internal';\n\
               import c from '@battlestar/ui/types';\n\
               const d = require('@battlestar/ui/widgets/button');\n\
               import e from 'react';\n";
    let findings = check(src, &battlestar());

    assert_eq!(findings.len(), 2);
    assert!(findings[0].message.ends_with("@battlestar/core"));
    assert_eq!(findings[0].span.line, 2);
    assert!(findings[1].message.ends_with("@battlestar/ui"));
    assert_eq!(findings[1].span.line, 4);
}

#[test]
fn repeated_runs_yield_identical_findings() {
    let src = "import b from '@battlestar/core/internal';\n\
               const d = require('@battlestar/ui/widgets');\n";
    let options = battlestar();
    assert_eq!(check(src, &options), check(src, &options));
}

#[test]
fn nested_requires_are_outside_the_rule() {
    let src =
        "export function load() {\n  return require('@battlestar/core/internal');\n}\n";
    assert!(check(src, &battlestar()).is_empty());
}
