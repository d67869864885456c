//! # module-boundary-lint
//!
//! A single lint rule for TypeScript projects with namespaced packages
//! (e.g. `@battlestar/*`): imports must target a package's top-level entry
//! point, never a private submodule path behind it. A designated shared
//! `types` submodule is the one allowed carve-out.
//!
//! The crate provides:
//!
//! - [`ModuleBoundaryRule`] — the boundary checker, a pure function from
//!   one file's references and a configured namespace to findings
//! - [`TypeScriptExtractor`] — Tree-sitter pass over a file's top-level
//!   statements producing [`ImportRef`]s
//! - [`RuleOptions`] — namespace configuration from the host framework's
//!   option-array convention
//!
//! ## Example
//!
//! ```
//! use module_boundary_lint::{ModuleBoundaryRule, RuleOptions, TypeScriptExtractor};
//!
//! let refs = TypeScriptExtractor::new()
//!     .extract("import x from '@battlestar/core/internal';\n");
//! let findings = ModuleBoundaryRule::new()
//!     .check(&refs, &RuleOptions::new("@battlestar"));
//! assert_eq!(findings.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod extractor;
pub mod imports;
pub mod options;
pub mod rule;
pub mod types;

pub use extractor::TypeScriptExtractor;
pub use imports::ImportRef;
pub use options::{OptionsError, RuleOptions};
pub use rule::ModuleBoundaryRule;
pub use types::{Severity, Span, Violation};
