//! The module boundary rule.
//!
//! Flags imports that reach past the first package segment under a
//! configured namespace, e.g. `@battlestar/core/internal` when the
//! namespace is `@battlestar`. Importing the package's own top-level
//! segment (`@battlestar/core`) is always allowed, as is a designated
//! shared `types` submodule.

use tracing::debug;

use crate::imports::ImportRef;
use crate::options::RuleOptions;
use crate::types::{Severity, Violation};

const FAILURE_STRING: &str = "cannot reach into package";

/// Checks import-like references against a package namespace boundary.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleBoundaryRule;

impl ModuleBoundaryRule {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Returns the kebab-case name of this rule.
    #[must_use]
    pub fn name(&self) -> &'static str {
        "module-boundary"
    }

    /// Returns the rule code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        "MB001"
    }

    /// Returns a brief description of what this rule checks.
    #[must_use]
    pub fn description(&self) -> &'static str {
        "Create strict module boundaries for packages"
    }

    /// Returns the default severity for findings from this rule.
    #[must_use]
    pub fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks one file's references against the configured namespace.
    ///
    /// Pure: the same references and options always yield the same findings,
    /// in source order. With no namespace configured, returns no findings.
    #[must_use]
    pub fn check(&self, refs: &[ImportRef], options: &RuleOptions) -> Vec<Violation> {
        let Some(namespace) = options.namespace() else {
            debug!(rule = self.name(), "no namespace configured, rule inactive");
            return Vec::new();
        };

        refs.iter()
            .filter_map(|reference| self.check_reference(reference, namespace))
            .collect()
    }

    fn check_reference(&self, reference: &ImportRef, namespace: &str) -> Option<Violation> {
        // Legacy detection: a require-form reference qualifies on textual
        // prefix alone, without verifying the callee is actually `require`.
        if let ImportRef::Required { initializer, .. } = reference {
            if !initializer.starts_with("require") {
                return None;
            }
        }

        let text = reference.raw_text();
        let first_segment = first_inner_segment(text, namespace)?;

        // Importing a package's shared `types` submodule crosses the
        // boundary legitimately. The suffix differs per form because the
        // require form's text includes the closing syntax.
        let allowed_suffix = match reference {
            ImportRef::Declared { .. } => "types",
            ImportRef::Required { .. } => "types')",
        };
        if text.ends_with(allowed_suffix) {
            return None;
        }

        Some(Violation::new(
            self.code(),
            self.name(),
            self.default_severity(),
            reference.span(),
            format!("{FAILURE_STRING}, must import package like: {namespace}/{first_segment}"),
        ))
    }
}

/// First path segment after `namespace/` in `text`, provided a further `/`
/// follows it. `None` when the reference stops at the package's top-level
/// entry point, or does not mention the namespace at all.
fn first_inner_segment<'a>(text: &'a str, namespace: &str) -> Option<&'a str> {
    let needle = format!("{namespace}/");
    let rest = &text[text.find(&needle)? + needle.len()..];
    let end = rest.find('/')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}
