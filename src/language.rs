//! Language Support - Grammar adapter over tree-sitter
//!
//! ALL tree-sitter grammar configuration lives here. The extractor only ever
//! sees a parsed `tree_sitter::Tree`; it never touches the grammar directly.
//!
//! Parsing never fails on malformed Java: tree-sitter recovers and returns a
//! best-effort tree whose root reports `has_error()`. The only hard failure is
//! the parser returning no tree at all.

use crate::error::{ExtractError, Result};
use tree_sitter::{Node, Parser, Tree};

/// File extension of Java sources.
pub const JAVA_EXTENSION: &str = "java";

/// Get tree-sitter language parser for a given language name
///
/// Java is the only supported language.
pub fn get_tree_sitter_language(language: &str) -> Result<tree_sitter::Language> {
    match language {
        "java" => Ok(tree_sitter_java::LANGUAGE.into()),
        _ => Err(ExtractError::UnsupportedLanguage(language.to_string())),
    }
}

/// Detect language from file extension
///
/// Returns the language name that can be passed to `get_tree_sitter_language()`.
pub fn detect_language_from_extension(extension: &str) -> Option<&'static str> {
    match extension {
        "java" => Some("java"),
        _ => None,
    }
}

/// A parsed source file.
pub struct ParsedSource {
    tree: Tree,
}

impl ParsedSource {
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    pub fn root_node(&self) -> Node<'_> {
        self.tree.root_node()
    }

    /// Whether tree-sitter had to recover from any syntax error.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// 1-based line numbers of every `ERROR` or `MISSING` node, ascending and
    /// de-duplicated.
    pub fn error_lines(&self) -> Vec<u32> {
        let mut lines = Vec::new();
        collect_error_lines(self.tree.root_node(), &mut lines);
        lines.sort_unstable();
        lines.dedup();
        lines
    }
}

fn collect_error_lines(node: Node, lines: &mut Vec<u32>) {
    if node.is_error() || node.is_missing() {
        lines.push((node.start_position().row + 1) as u32);
    }
    // Only subtrees flagged by tree-sitter can contain errors
    for child in node.children(&mut node.walk()) {
        if child.has_error() || child.is_missing() {
            collect_error_lines(child, lines);
        }
    }
}

/// Owns one tree-sitter parser configured for Java.
///
/// `tree_sitter::Parser` is not `Sync`, so parallel callers create one per
/// worker.
pub struct JavaParser {
    parser: Parser,
}

impl JavaParser {
    pub fn new() -> Result<Self> {
        let mut parser = Parser::new();
        parser.set_language(&get_tree_sitter_language("java")?)?;
        Ok(Self { parser })
    }

    /// Parse Java source text. `file_path` is only used for error reporting.
    pub fn parse(&mut self, source: &str, file_path: &str) -> Result<ParsedSource> {
        let tree = self
            .parser
            .parse(source, None)
            .ok_or_else(|| ExtractError::NoTree {
                path: file_path.to_string(),
            })?;
        Ok(ParsedSource { tree })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_java_is_supported() {
        assert!(get_tree_sitter_language("java").is_ok());
        let err = get_tree_sitter_language("kotlin").unwrap_err();
        assert!(matches!(err, ExtractError::UnsupportedLanguage(ref l) if l == "kotlin"));
    }

    #[test]
    fn test_detect_language_from_extension() {
        assert_eq!(detect_language_from_extension("java"), Some("java"));
        assert_eq!(detect_language_from_extension("kt"), None);
        assert_eq!(detect_language_from_extension(""), None);
    }

    #[test]
    fn test_parse_valid_source_has_no_errors() {
        let mut parser = JavaParser::new().unwrap();
        let parsed = parser
            .parse("class A { void f() { g(); } }", "A.java")
            .unwrap();
        assert!(!parsed.has_errors());
        assert!(parsed.error_lines().is_empty());
        assert_eq!(parsed.root_node().kind(), "program");
    }

    #[test]
    fn test_parse_malformed_source_returns_tree_with_errors() {
        let mut parser = JavaParser::new().unwrap();
        let source = "class A {\n  void f() {\n    int x = ;\n  }\n";
        let parsed = parser.parse(source, "A.java").unwrap();
        assert!(parsed.has_errors());
        assert!(!parsed.error_lines().is_empty());
    }

    #[test]
    fn test_parse_empty_source() {
        let mut parser = JavaParser::new().unwrap();
        let parsed = parser.parse("", "Empty.java").unwrap();
        assert!(!parsed.has_errors());
        assert_eq!(parsed.root_node().child_count(), 0);
    }
}
