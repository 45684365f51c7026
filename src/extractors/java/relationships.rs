/// Inheritance and call relationship extraction
use crate::extractors::java::JavaExtractor;

use super::nodes::{
    self, ClassDeclaration, InheritanceClause, MethodDeclaration, MethodInvocation,
};

/// Supertypes named by a class declaration
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(super) struct Inheritance {
    pub extends: Vec<String>,
    pub implements: Vec<String>,
}

/// Collect simple type names from the `extends` and `implements` clauses
///
/// Generic (`Base<T>`) and qualified (`java.util.List`) names are not
/// simple type identifiers and are left out of the lists.
pub(super) fn extract_inheritance(
    extractor: &JavaExtractor,
    declaration: &ClassDeclaration,
) -> Inheritance {
    let mut inheritance = Inheritance::default();

    for clause in declaration.inheritance_clauses() {
        let names = clause
            .entries()
            .into_iter()
            .filter(|entry| nodes::is_simple_type(entry))
            .map(|entry| extractor.base().get_node_text(&entry).trim().to_string());

        match clause {
            InheritanceClause::Extends(_) => inheritance.extends.extend(names),
            InheritanceClause::Implements(_) => inheritance.implements.extend(names),
        }
    }

    inheritance
}

/// Bare names of every method invocation anywhere under the method, in
/// pre-order, duplicates kept
///
/// The scan does not stop at lambdas, anonymous classes or local classes, so
/// their calls are attributed to the enclosing method.
pub(super) fn extract_calls(
    extractor: &JavaExtractor,
    declaration: &MethodDeclaration,
) -> Vec<String> {
    extractor
        .base()
        .find_nodes_by_type(&declaration.node(), MethodInvocation::KIND)
        .into_iter()
        .filter_map(MethodInvocation::new)
        .filter_map(|invocation| invocation.name())
        .map(|name| extractor.base().get_node_text(&name))
        .collect()
}
