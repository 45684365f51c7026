//! Read-only projections of symbols for the downstream collaborators
//!
//! Field names are what those collaborators consume.

use crate::extractors::{Symbol, SymbolKind};
use crate::store::SymbolStore;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Which projection of the store to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Full symbol records
    #[default]
    Symbols,
    /// `DocTarget` per symbol
    Docs,
    /// `ClassOverview` per class
    Classes,
    /// `IndexRecord` per symbol
    Index,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Symbols => "symbols",
            View::Docs => "docs",
            View::Classes => "classes",
            View::Index => "index",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "symbols" => Ok(View::Symbols),
            "docs" => Ok(View::Docs),
            "classes" => Ok(View::Classes),
            "index" => Ok(View::Index),
            other => Err(format!(
                "unknown view '{}': expected symbols, docs, classes or index",
                other
            )),
        }
    }
}

/// One view of the store as a JSON array
pub fn to_value(store: &SymbolStore, view: View) -> serde_json::Result<serde_json::Value> {
    match view {
        View::Symbols => serde_json::to_value(store),
        View::Docs => serde_json::to_value(store.doc_targets()),
        View::Classes => serde_json::to_value(store.class_overviews()),
        View::Index => serde_json::to_value(store.index_records()),
    }
}

/// Render one view of the store as pretty-printed JSON
pub fn to_json(store: &SymbolStore, view: View) -> serde_json::Result<String> {
    serde_json::to_string_pretty(&to_value(store, view)?)
}

/// Where and how to insert a generated comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocTarget {
    pub code: String,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub name: String,
    pub file_path: String,
    pub start_line: u32,
    pub indent: u32,
}

impl From<&Symbol> for DocTarget {
    fn from(symbol: &Symbol) -> Self {
        Self {
            code: symbol.source_text.clone(),
            kind: symbol.kind,
            name: symbol.name.clone(),
            file_path: symbol.file_path.clone(),
            start_line: symbol.start_line,
            indent: symbol.indent_column,
        }
    }
}

/// One node of the class diagram
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClassOverview {
    pub name: String,
    pub file_path: String,
    pub summary: Option<String>,
}

impl From<&Symbol> for ClassOverview {
    fn from(symbol: &Symbol) -> Self {
        Self {
            name: symbol.name.clone(),
            file_path: symbol.file_path.clone(),
            summary: symbol.summary.clone(),
        }
    }
}

/// Document handed to the vector indexer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexRecord {
    pub id: String,
    /// Source text, a blank line, then the summary (empty when absent)
    pub content: String,
    pub metadata: IndexMetadata,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexMetadata {
    pub chunk_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub file_path: String,
    pub start_line: u32,
    pub end_line: u32,
    /// Empty string when unset; the index store rejects nulls
    pub parent_class: String,
    pub has_extends: bool,
    pub has_implements: bool,
    pub num_methods: usize,
    pub num_calls: usize,
    /// blake3 hex digest of the source text
    pub source_hash: String,
}

impl From<&Symbol> for IndexRecord {
    fn from(symbol: &Symbol) -> Self {
        let summary = symbol.summary.as_deref().unwrap_or_default();
        Self {
            id: symbol.id.clone(),
            content: format!("{}\n\n{}", symbol.source_text, summary),
            metadata: IndexMetadata {
                chunk_id: symbol.id.clone(),
                name: symbol.name.clone(),
                kind: symbol.kind,
                file_path: symbol.file_path.clone(),
                start_line: symbol.start_line,
                end_line: symbol.end_line,
                parent_class: symbol.parent_class.clone().unwrap_or_default(),
                has_extends: !symbol.extends.is_empty(),
                has_implements: !symbol.implements.is_empty(),
                num_methods: symbol.methods.len(),
                num_calls: symbol.calls.len(),
                source_hash: source_hash(&symbol.source_text),
            },
        }
    }
}

/// Content hash used to detect unchanged chunks between runs
pub fn source_hash(code: &str) -> String {
    blake3::hash(code.as_bytes()).to_hex().to_string()
}
