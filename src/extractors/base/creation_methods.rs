// Symbol creation methods

use tree_sitter::Node;

use super::extractor::BaseExtractor;
use super::types::{Symbol, SymbolKind, SymbolOptions};

impl BaseExtractor {
    /// Create a symbol spanning `node`
    ///
    /// Lines are 1-based and inclusive; `indent_column` is the 0-based start
    /// column of the node itself. Writers insert generated text at
    /// `start_line` padded by `indent_column`, so neither may be adjusted.
    pub fn create_symbol(
        &mut self,
        node: &Node,
        name: String,
        kind: SymbolKind,
        options: SymbolOptions,
    ) -> Symbol {
        let start_pos = node.start_position();
        let end_pos = node.end_position();

        let qualified = match (kind, options.parent_class.as_deref()) {
            (SymbolKind::Method, Some(parent)) => format!("{}.{}", parent, name),
            _ => name.clone(),
        };
        let id = self.generate_id(&qualified);

        Symbol {
            id,
            name,
            kind,
            file_path: self.file_path.clone(),
            source_text: self.get_node_text(node),
            start_line: (start_pos.row + 1) as u32,
            end_line: (end_pos.row + 1) as u32,
            indent_column: start_pos.column as u32,
            parent_class: options.parent_class,
            extends: options.extends,
            implements: options.implements,
            methods: options.methods,
            calls: options.calls,
            summary: None,
        }
    }
}
