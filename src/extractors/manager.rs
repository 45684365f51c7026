//! ExtractorManager - Public API for symbol extraction
//!
//! Handles file parsing and delegates to the Java extractor. Every call is a
//! pure function of its input text, so the manager can be re-invoked on any
//! text, including files a downstream writer has just modified.

use crate::error::Result;
use crate::extractors::base::Symbol;
use crate::extractors::java::JavaExtractor;
use crate::language::JavaParser;
use serde::Serialize;

/// Manager for the Java extractor
pub struct ExtractorManager {
    // No state needed - parsers are created per call so the manager is Sync
}

impl Default for ExtractorManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of re-parsing a source text
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SyntaxReport {
    pub has_errors: bool,
    /// 1-based lines holding ERROR or MISSING nodes
    pub error_lines: Vec<u32>,
}

impl SyntaxReport {
    pub fn is_valid(&self) -> bool {
        !self.has_errors
    }
}

impl ExtractorManager {
    pub fn new() -> Self {
        Self {}
    }

    pub fn supported_languages(&self) -> Vec<&'static str> {
        vec!["java"]
    }

    /// Parse `content` and extract its class and method symbols
    ///
    /// `file_path` is stored on every symbol and used to build ids. Malformed
    /// source is not an error: extraction runs over the recovered tree.
    pub fn extract_symbols(&self, file_path: &str, content: &str) -> Result<Vec<Symbol>> {
        let mut parser = JavaParser::new()?;
        let parsed = parser.parse(content, file_path)?;

        if parsed.has_errors() {
            tracing::debug!("{} has syntax errors; extracting from recovered tree", file_path);
        }

        let mut extractor = JavaExtractor::new(file_path.to_string(), content.to_string());
        let symbols = extractor.extract_symbols(parsed.tree());

        tracing::debug!("Extracted {} symbols from {}", symbols.len(), file_path);
        Ok(symbols)
    }

    /// Re-parse `content` and report syntax errors
    pub fn check_syntax(&self, content: &str) -> Result<SyntaxReport> {
        let mut parser = JavaParser::new()?;
        let parsed = parser.parse(content, "<source>")?;

        Ok(SyntaxReport {
            has_errors: parsed.has_errors(),
            error_lines: parsed.error_lines(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_symbols_stores_file_path() {
        let manager = ExtractorManager::new();
        let symbols = manager
            .extract_symbols("src/main/java/A.java", "class A { void f() {} }")
            .unwrap();

        assert_eq!(symbols.len(), 2);
        assert!(symbols.iter().all(|s| s.file_path == "src/main/java/A.java"));
        assert_eq!(symbols[1].id, "src/main/java/A.java::A");
    }

    #[test]
    fn test_check_syntax_valid() {
        let manager = ExtractorManager::new();
        let report = manager
            .check_syntax("/** Doc. */\nclass A {\n  /** Run. */\n  void run() {}\n}\n")
            .unwrap();
        assert!(report.is_valid());
        assert!(report.error_lines.is_empty());
    }

    #[test]
    fn test_check_syntax_reports_errors() {
        let manager = ExtractorManager::new();
        let report = manager
            .check_syntax("class A {\n  Doc text inserted without comment markers\n  void run() {}\n}\n")
            .unwrap();
        assert!(!report.is_valid());
        assert!(!report.error_lines.is_empty());
    }

    #[test]
    fn test_supported_languages() {
        assert_eq!(ExtractorManager::new().supported_languages(), vec!["java"]);
    }
}
