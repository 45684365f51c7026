/// Class declaration extraction
use crate::extractors::base::{Symbol, SymbolKind, SymbolOptions};
use crate::extractors::java::JavaExtractor;

use super::nodes::ClassDeclaration;
use super::relationships::{self, Inheritance};

/// Accumulates one class while its subtree is walked
///
/// Name and inheritance are read on entry, before any child is visited; the
/// method list fills as the walk returns; `finish` emits the symbol once the
/// whole subtree has been seen.
pub(super) struct ClassBuilder<'tree> {
    declaration: ClassDeclaration<'tree>,
    name: String,
    inheritance: Inheritance,
    methods: Vec<String>,
}

impl<'tree> ClassBuilder<'tree> {
    pub(super) fn begin(extractor: &JavaExtractor, declaration: ClassDeclaration<'tree>) -> Self {
        let name = declaration
            .name()
            .map(|node| extractor.base().get_node_text(&node).trim().to_string())
            .unwrap_or_default();
        let inheritance = relationships::extract_inheritance(extractor, &declaration);

        Self {
            declaration,
            name,
            inheritance,
            methods: Vec::new(),
        }
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    /// Methods found in part of the subtree, in source order
    pub(super) fn record_methods(&mut self, names: Vec<String>) {
        self.methods.extend(names);
    }

    pub(super) fn finish(self, extractor: &mut JavaExtractor) -> Symbol {
        let options = SymbolOptions {
            extends: self.inheritance.extends,
            implements: self.inheritance.implements,
            methods: self.methods,
            ..Default::default()
        };

        extractor.base_mut().create_symbol(
            &self.declaration.node(),
            self.name,
            SymbolKind::Class,
            options,
        )
    }
}
