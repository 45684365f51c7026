//! Typed view over the few tree-sitter node kinds the extractor recognizes
//!
//! Node kind and field names of the tree-sitter-java grammar are confined to
//! this file. Everything else works with `JavaNode` and the declaration types.

use tree_sitter::Node;

const CLASS_DECLARATION: &str = "class_declaration";
const METHOD_DECLARATION: &str = "method_declaration";
const METHOD_INVOCATION: &str = "method_invocation";
const SUPERCLASS: &str = "superclass";
const SUPER_INTERFACES: &str = "super_interfaces";
const TYPE_LIST: &str = "type_list";
const TYPE_IDENTIFIER: &str = "type_identifier";
const NAME_FIELD: &str = "name";

/// A node as the structural walk sees it
pub(super) enum JavaNode<'tree> {
    Class(ClassDeclaration<'tree>),
    Method(MethodDeclaration<'tree>),
    Other(Node<'tree>),
}

impl<'tree> JavaNode<'tree> {
    pub(super) fn classify(node: Node<'tree>) -> Self {
        match node.kind() {
            CLASS_DECLARATION => JavaNode::Class(ClassDeclaration { node }),
            METHOD_DECLARATION => JavaNode::Method(MethodDeclaration { node }),
            _ => JavaNode::Other(node),
        }
    }
}

/// `class Name extends A implements B, C { ... }`
#[derive(Clone, Copy)]
pub(super) struct ClassDeclaration<'tree> {
    node: Node<'tree>,
}

impl<'tree> ClassDeclaration<'tree> {
    pub(super) fn node(&self) -> Node<'tree> {
        self.node
    }

    pub(super) fn name(&self) -> Option<Node<'tree>> {
        self.node.child_by_field_name(NAME_FIELD)
    }

    /// The `extends` and `implements` clauses, in source order
    pub(super) fn inheritance_clauses(&self) -> Vec<InheritanceClause<'tree>> {
        self.node
            .children(&mut self.node.walk())
            .filter_map(|child| match child.kind() {
                SUPERCLASS => Some(InheritanceClause::Extends(child)),
                SUPER_INTERFACES => Some(InheritanceClause::Implements(child)),
                _ => None,
            })
            .collect()
    }
}

pub(super) enum InheritanceClause<'tree> {
    Extends(Node<'tree>),
    Implements(Node<'tree>),
}

impl<'tree> InheritanceClause<'tree> {
    /// Type entries written directly in the clause
    ///
    /// The grammar wraps the interfaces of `implements` in a `type_list`; its
    /// children count as the clause's own entries. Nothing deeper is visited,
    /// so type arguments and package qualifiers are never reached.
    pub(super) fn entries(&self) -> Vec<Node<'tree>> {
        let clause = match self {
            InheritanceClause::Extends(node) | InheritanceClause::Implements(node) => *node,
        };

        let mut entries = Vec::new();
        for child in clause.children(&mut clause.walk()) {
            if child.kind() == TYPE_LIST {
                entries.extend(child.children(&mut child.walk()));
            } else {
                entries.push(child);
            }
        }
        entries
    }
}

/// True for a bare type name (`Foo`), false for `Foo<T>`, `a.b.Foo`, keywords
/// and punctuation.
pub(super) fn is_simple_type(node: &Node) -> bool {
    node.kind() == TYPE_IDENTIFIER
}

/// `ReturnType name(params) { body }`
#[derive(Clone, Copy)]
pub(super) struct MethodDeclaration<'tree> {
    node: Node<'tree>,
}

impl<'tree> MethodDeclaration<'tree> {
    pub(super) fn node(&self) -> Node<'tree> {
        self.node
    }

    pub(super) fn name(&self) -> Option<Node<'tree>> {
        self.node.child_by_field_name(NAME_FIELD)
    }
}

/// `receiver.name(args)` or `name(args)`
pub(super) struct MethodInvocation<'tree> {
    node: Node<'tree>,
}

impl<'tree> MethodInvocation<'tree> {
    pub(super) const KIND: &'static str = METHOD_INVOCATION;

    pub(super) fn new(node: Node<'tree>) -> Option<Self> {
        (node.kind() == METHOD_INVOCATION).then_some(Self { node })
    }

    /// The callee's trailing name token; the receiver is not part of it
    pub(super) fn name(&self) -> Option<Node<'tree>> {
        self.node.child_by_field_name(NAME_FIELD)
    }
}
