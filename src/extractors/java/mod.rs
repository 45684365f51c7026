/// Java extractor: turns one file's syntax tree into class and method symbols
///
/// This module is organized into focused sub-modules:
/// - nodes: Typed view over class, method and invocation nodes
/// - classes: Per-class builder, finalized after its subtree is walked
/// - methods: Method extraction
/// - relationships: Inheritance (extends/implements) and call extraction
mod classes;
mod methods;
mod nodes;
mod relationships;


use crate::extractors::base::{BaseExtractor, Symbol};
use tree_sitter::{Node, Tree};

use classes::ClassBuilder;
use nodes::JavaNode;

/// Java extractor for extracting symbols from Java source code
pub struct JavaExtractor {
    base: BaseExtractor,
}

impl JavaExtractor {
    pub fn new(file_path: String, content: String) -> Self {
        Self {
            base: BaseExtractor::new(file_path, content),
        }
    }

    /// Extract all class and method symbols, in emission order
    ///
    /// A method is emitted when its declaration is reached; a class after its
    /// entire subtree, so its `methods` list is already complete.
    pub fn extract_symbols(&mut self, tree: &Tree) -> Vec<Symbol> {
        let mut symbols = Vec::new();
        // Names reaching the root were declared outside any class
        let _unclaimed = self.walk_tree(tree.root_node(), &mut symbols, None);
        symbols
    }

    /// Depth-first walk of `node`
    ///
    /// Returns the names of methods in this subtree that belong to the nearest
    /// enclosing class. A class claims what its children return and passes
    /// nothing upward; a method's own subtree is never walked for further
    /// declarations.
    fn walk_tree(
        &mut self,
        node: Node,
        symbols: &mut Vec<Symbol>,
        parent_class: Option<&str>,
    ) -> Vec<String> {
        match JavaNode::classify(node) {
            JavaNode::Class(declaration) => {
                let mut builder = ClassBuilder::begin(self, declaration);
                for child in node.children(&mut node.walk()) {
                    let found = self.walk_tree(child, symbols, Some(builder.name()));
                    builder.record_methods(found);
                }
                symbols.push(builder.finish(self));
                Vec::new()
            }
            JavaNode::Method(declaration) => {
                let symbol = methods::extract_method(self, declaration, parent_class);
                let name = symbol.name.clone();
                symbols.push(symbol);
                vec![name]
            }
            JavaNode::Other(node) => {
                let mut found = Vec::new();
                for child in node.children(&mut node.walk()) {
                    found.extend(self.walk_tree(child, symbols, parent_class));
                }
                found
            }
        }
    }

    // ========================================================================
    // Accessors for sub-modules
    // ========================================================================

    pub(crate) fn base(&self) -> &BaseExtractor {
        &self.base
    }

    pub(crate) fn base_mut(&mut self) -> &mut BaseExtractor {
        &mut self.base
    }
}
