//! Import-like references found in a source file.

use crate::types::Span;

/// One import-like reference from a file's top-level statements.
///
/// References are discovered fresh per file and evaluated independently;
/// there are no relationships between them and nothing is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRef {
    /// An import declaration's module specifier.
    Declared {
        /// Specifier token text, without quotes (e.g. `@battlestar/core`).
        specifier: String,
        /// Span of the quoted specifier in the file.
        span: Span,
    },
    /// A variable declaration initializer, recorded verbatim.
    Required {
        /// Initializer text as written (e.g. `require('@battlestar/core')`).
        initializer: String,
        /// Span of the initializer in the file.
        span: Span,
    },
}

impl ImportRef {
    /// The raw text the boundary pattern is matched against.
    #[must_use]
    pub fn raw_text(&self) -> &str {
        match self {
            Self::Declared { specifier, .. } => specifier,
            Self::Required { initializer, .. } => initializer,
        }
    }

    /// Source span used for reporting.
    #[must_use]
    pub fn span(&self) -> Span {
        match self {
            Self::Declared { span, .. } | Self::Required { span, .. } => *span,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declared_raw_text_is_the_specifier() {
        let r = ImportRef::Declared {
            specifier: "@ns/pkg".into(),
            span: Span::new(14, 23, 1, 15),
        };
        assert_eq!(r.raw_text(), "@ns/pkg");
        assert_eq!(r.span().start, 14);
    }

    #[test]
    fn required_raw_text_is_the_initializer() {
        let r = ImportRef::Required {
            initializer: "require('@ns/pkg')".into(),
            span: Span::new(10, 28, 2, 11),
        };
        assert_eq!(r.raw_text(), "require('@ns/pkg')");
        assert_eq!(r.span().line, 2);
    }
}
