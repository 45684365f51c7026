//! Symbol store
//!
//! The ordered result of one project parse. Symbols are only ever appended;
//! the single mutation after that is attaching a summary.

use crate::extractors::{Symbol, SymbolKind};
use crate::views::{ClassOverview, DocTarget, IndexRecord};
use serde::{Deserialize, Serialize};

/// Ordered, append-only collection of extracted symbols
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolStore {
    symbols: Vec<Symbol>,
}

impl SymbolStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn extend(&mut self, symbols: impl IntoIterator<Item = Symbol>) {
        self.symbols.extend(symbols);
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Symbols in emission order
    pub fn iter(&self) -> std::slice::Iter<'_, Symbol> {
        self.symbols.iter()
    }

    pub fn as_slice(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn into_vec(self) -> Vec<Symbol> {
        self.symbols
    }

    pub fn classes(&self) -> impl Iterator<Item = &Symbol> {
        self.of_kind(SymbolKind::Class)
    }

    pub fn methods(&self) -> impl Iterator<Item = &Symbol> {
        self.of_kind(SymbolKind::Method)
    }

    fn of_kind(&self, kind: SymbolKind) -> impl Iterator<Item = &Symbol> {
        self.symbols.iter().filter(move |s| s.kind == kind)
    }

    pub fn get(&self, id: &str) -> Option<&Symbol> {
        self.symbols.iter().find(|s| s.id == id)
    }

    /// Attach (or replace) the summary of the symbol with `id`.
    ///
    /// Returns false when no such symbol exists.
    pub fn attach_summary(&mut self, id: &str, summary: impl Into<String>) -> bool {
        match self.symbols.iter_mut().find(|s| s.id == id) {
            Some(symbol) => {
                symbol.summary = Some(summary.into());
                true
            }
            None => false,
        }
    }

    /// Attach the summary of the symbol at `index` in emission order
    pub(crate) fn attach_summary_at(&mut self, index: usize, summary: String) -> bool {
        match self.symbols.get_mut(index) {
            Some(symbol) => {
                symbol.summary = Some(summary);
                true
            }
            None => false,
        }
    }

    /// Distinct file paths, in first-seen order
    pub fn files(&self) -> Vec<&str> {
        let mut files: Vec<&str> = Vec::new();
        for symbol in &self.symbols {
            if !files.contains(&symbol.file_path.as_str()) {
                files.push(&symbol.file_path);
            }
        }
        files
    }

    /// Symbols of one file, in emission order
    pub fn in_file<'a>(&'a self, file_path: &'a str) -> impl Iterator<Item = &'a Symbol> {
        self.symbols.iter().filter(move |s| s.file_path == file_path)
    }

    pub fn doc_targets(&self) -> Vec<DocTarget> {
        self.symbols.iter().map(DocTarget::from).collect()
    }

    pub fn class_overviews(&self) -> Vec<ClassOverview> {
        self.classes().map(ClassOverview::from).collect()
    }

    pub fn index_records(&self) -> Vec<IndexRecord> {
        self.symbols.iter().map(IndexRecord::from).collect()
    }
}

impl From<Vec<Symbol>> for SymbolStore {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }
}

impl<'a> IntoIterator for &'a SymbolStore {
    type Item = &'a Symbol;
    type IntoIter = std::slice::Iter<'a, Symbol>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}
