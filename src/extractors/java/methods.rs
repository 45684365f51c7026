/// Method declaration extraction
use crate::extractors::base::{Symbol, SymbolKind, SymbolOptions};
use crate::extractors::java::JavaExtractor;

use super::nodes::MethodDeclaration;
use super::relationships;

/// Extract method declaration from a node
pub(super) fn extract_method(
    extractor: &mut JavaExtractor,
    declaration: MethodDeclaration,
    parent_class: Option<&str>,
) -> Symbol {
    let name = declaration
        .name()
        .map(|node| extractor.base().get_node_text(&node).trim().to_string())
        .unwrap_or_default();
    let calls = relationships::extract_calls(extractor, &declaration);

    let options = SymbolOptions {
        parent_class: parent_class.map(|s| s.to_string()),
        calls,
        ..Default::default()
    };

    extractor
        .base_mut()
        .create_symbol(&declaration.node(), name, SymbolKind::Method, options)
}
