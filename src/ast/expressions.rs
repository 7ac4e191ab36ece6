use std::slice::Iter;

use crate::Span;

use super::ast::Node;

/// Identifier
/// A leaf holding the raw lexeme of an IDENTIFIER token.
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub span: Span,
}

impl Identifier {
    pub fn new(name: impl Into<String>, span: Span) -> Self {
        Identifier {
            name: name.into(),
            span,
        }
    }
}

/// List
/// An ordered, non-empty collection in source order. The first item is
/// supplied on construction; later items are appended by left-recursive
/// reductions.
#[derive(Debug, Clone, PartialEq)]
pub struct List {
    items: Vec<Node>,
}

impl List {
    pub fn new(first: Node) -> Self {
        List { items: vec![first] }
    }

    pub fn push(&mut self, item: Node) {
        self.items.push(item);
    }

    pub fn items(&self) -> &[Node] {
        &self.items
    }

    pub fn iter(&self) -> Iter<'_, Node> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn last(&self) -> Option<&Node> {
        self.items.last()
    }

    pub fn into_items(self) -> Vec<Node> {
        self.items
    }

    /// Identifier items, in order. Other node kinds are skipped.
    pub fn identifiers(&self) -> impl Iterator<Item = &Identifier> {
        self.items.iter().filter_map(Node::as_identifier)
    }

    pub fn names(&self) -> Vec<&str> {
        self.identifiers().map(|ident| ident.name.as_str()).collect()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Node;
    type IntoIter = Iter<'a, Node>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
