//! TypeScript import extraction using Tree-sitter.
//!
//! A single explicit pass over the root node's children, so only top-level
//! statements are considered. Statement shapes the pass does not recognize
//! are skipped, never rejected.

use tree_sitter::{Language, Node, Parser};

use crate::imports::ImportRef;
use crate::types::Span;

/// Extracts import-like references from TypeScript source.
pub struct TypeScriptExtractor {
    language: Language,
}

impl TypeScriptExtractor {
    /// Creates a new TypeScript extractor.
    #[must_use]
    pub fn new() -> Self {
        Self {
            language: tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    fn text<'a>(node: &Node<'_>, src: &'a [u8]) -> &'a str {
        std::str::from_utf8(&src[node.start_byte()..node.end_byte()]).unwrap_or("")
    }

    fn span_of(node: &Node<'_>) -> Span {
        Span::new(
            node.start_byte(),
            node.end_byte(),
            node.start_position().row + 1,
            node.start_position().column + 1,
        )
    }

    /// Inner text of a string literal node, without the quote tokens.
    fn string_value(node: &Node<'_>, src: &[u8]) -> String {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "string_fragment" {
                return Self::text(&child, src).to_owned();
            }
        }
        String::new()
    }

    fn extract_import(node: &Node<'_>, src: &[u8]) -> Option<ImportRef> {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() == "string" {
                return Some(ImportRef::Declared {
                    specifier: Self::string_value(&child, src),
                    span: Self::span_of(&child),
                });
            }
        }
        None
    }

    fn extract_declarators(node: &Node<'_>, src: &[u8], refs: &mut Vec<ImportRef>) {
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.kind() != "variable_declarator" {
                continue;
            }
            if let Some(value) = child.child_by_field_name("value") {
                refs.push(ImportRef::Required {
                    initializer: Self::text(&value, src).to_owned(),
                    span: Self::span_of(&value),
                });
            }
        }
    }

    /// Collects import declarations and variable-declaration initializers
    /// from the file's top-level statements.
    #[must_use]
    pub fn extract(&self, source: &str) -> Vec<ImportRef> {
        let mut parser = Parser::new();
        parser
            .set_language(&self.language)
            .expect("failed to set typescript language");

        let src = source.as_bytes();
        let tree = parser.parse(src, None).expect("failed to parse");
        let root = tree.root_node();

        let mut refs = Vec::new();
        let mut cursor = root.walk();
        for node in root.children(&mut cursor) {
            match node.kind() {
                "import_statement" => {
                    if let Some(r) = Self::extract_import(&node, src) {
                        refs.push(r);
                    }
                }
                "lexical_declaration" | "variable_declaration" => {
                    Self::extract_declarators(&node, src, &mut refs);
                }
                _ => {}
            }
        }

        tracing::debug!(count = refs.len(), "extracted import-like references");
        refs
    }
}

impl Default for TypeScriptExtractor {
    fn default() -> Self {
        Self::new()
    }
}
