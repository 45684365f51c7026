// Base Extractor Types
//
// The Symbol record is the interface contract with the downstream
// collaborators (documentation writer, diagram generator, vector indexer).
// Serialized field names are that contract: renaming one is a breaking change.

use serde::{Deserialize, Serialize};

/// A class or method declaration extracted from a Java source file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Symbol {
    /// Deterministic identifier: file path + qualified name (see `BaseExtractor::generate_id`)
    #[serde(rename = "chunk_id")]
    pub id: String,
    /// Simple identifier as written in source
    pub name: String,
    /// Class or method
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    /// Path of the source file, as discovered
    pub file_path: String,
    /// Exact text of the declaration, unmodified
    #[serde(rename = "code")]
    pub source_text: String,
    /// Start line number (1-based, inclusive)
    pub start_line: u32,
    /// End line number (1-based, inclusive)
    pub end_line: u32,
    /// Start column of the declaration's first token (0-based)
    #[serde(rename = "indent")]
    pub indent_column: u32,
    /// Name of the nearest enclosing class (methods only)
    pub parent_class: Option<String>,
    /// Superclass names (classes only)
    #[serde(default)]
    pub extends: Vec<String>,
    /// Interface names (classes only)
    #[serde(default)]
    pub implements: Vec<String>,
    /// Names of methods declared in this class, in source order (classes only)
    #[serde(default)]
    pub methods: Vec<String>,
    /// Bare names of every method invoked in the body, duplicates kept (methods only)
    #[serde(default)]
    pub calls: Vec<String>,
    /// Attached later by an external summarization step
    #[serde(default)]
    pub summary: Option<String>,
}

impl Symbol {
    pub fn is_class(&self) -> bool {
        self.kind == SymbolKind::Class
    }

    pub fn is_method(&self) -> bool {
        self.kind == SymbolKind::Method
    }
}

/// Symbol kinds recognized by the Java extractor
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SymbolKind {
    Class,
    Method,
}

impl SymbolKind {
    /// Convert from string representation
    pub fn from_string(s: &str) -> Option<Self> {
        match s {
            "class" => Some(SymbolKind::Class),
            "method" => Some(SymbolKind::Method),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SymbolKind::Class => "class",
            SymbolKind::Method => "method",
        }
    }
}

impl std::fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Options for creating symbols
#[derive(Debug, Clone, Default)]
pub struct SymbolOptions {
    pub parent_class: Option<String>,
    pub extends: Vec<String>,
    pub implements: Vec<String>,
    pub methods: Vec<String>,
    pub calls: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_class() -> Symbol {
        Symbol {
            id: "TestClass.java::TestClass".to_string(),
            name: "TestClass".to_string(),
            kind: SymbolKind::Class,
            file_path: "TestClass.java".to_string(),
            source_text: "public class TestClass {}".to_string(),
            start_line: 1,
            end_line: 3,
            indent_column: 0,
            parent_class: None,
            extends: Vec::new(),
            implements: Vec::new(),
            methods: Vec::new(),
            calls: Vec::new(),
            summary: None,
        }
    }

    #[test]
    fn test_symbol_kind_string_forms() {
        assert_eq!(SymbolKind::Class.to_string(), "class");
        assert_eq!(SymbolKind::Method.to_string(), "method");
        assert_eq!(SymbolKind::from_string("method"), Some(SymbolKind::Method));
        assert_eq!(SymbolKind::from_string("interface"), None);
    }

    #[test]
    fn test_symbol_serializes_with_collaborator_field_names() {
        let value = serde_json::to_value(sample_class()).unwrap();
        let object = value.as_object().unwrap();

        for field in [
            "chunk_id",
            "name",
            "type",
            "file_path",
            "code",
            "start_line",
            "end_line",
            "indent",
            "parent_class",
            "extends",
            "implements",
            "methods",
            "calls",
            "summary",
        ] {
            assert!(object.contains_key(field), "missing field {}", field);
        }
        assert_eq!(object.len(), 14);
        assert_eq!(value["type"], "class");
        assert!(value["parent_class"].is_null());
        assert_eq!(value["extends"], serde_json::json!([]));
    }

    #[test]
    fn test_symbol_deserializes_without_optional_lists() {
        let json = r#"{
            "chunk_id": "A.java::A",
            "name": "A",
            "type": "class",
            "file_path": "A.java",
            "code": "class A {}",
            "start_line": 1,
            "end_line": 1,
            "indent": 0,
            "parent_class": null
        }"#;
        let symbol: Symbol = serde_json::from_str(json).unwrap();
        assert!(symbol.is_class());
        assert!(symbol.methods.is_empty());
        assert!(symbol.summary.is_none());
    }
}
