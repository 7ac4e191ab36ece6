use super::{
    expressions::{Identifier, List},
    statements::{PathAlias, Unit, Uses},
};

/// Node Types
#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum NodeType {
    Identifier,
    List,
    Unit,
    Uses,
    PathAlias,
}

/// A node of the tree built by the parser's semantic actions.
///
/// The tree is strict: every child is owned by exactly one parent.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Identifier(Identifier),
    List(List),
    Unit(Unit),
    Uses(Uses),
    PathAlias(PathAlias),
}

impl Node {
    pub fn get_node_type(&self) -> NodeType {
        match self {
            Node::Identifier(_) => NodeType::Identifier,
            Node::List(_) => NodeType::List,
            Node::Unit(_) => NodeType::Unit,
            Node::Uses(_) => NodeType::Uses,
            Node::PathAlias(_) => NodeType::PathAlias,
        }
    }

    pub fn as_identifier(&self) -> Option<&Identifier> {
        match self {
            Node::Identifier(identifier) => Some(identifier),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Node::List(list) => Some(list),
            _ => None,
        }
    }

    pub fn as_unit(&self) -> Option<&Unit> {
        match self {
            Node::Unit(unit) => Some(unit),
            _ => None,
        }
    }

    pub fn as_uses(&self) -> Option<&Uses> {
        match self {
            Node::Uses(uses) => Some(uses),
            _ => None,
        }
    }

    pub fn as_path_alias(&self) -> Option<&PathAlias> {
        match self {
            Node::PathAlias(path_alias) => Some(path_alias),
            _ => None,
        }
    }
}

impl From<Identifier> for Node {
    fn from(identifier: Identifier) -> Self {
        Node::Identifier(identifier)
    }
}

impl From<List> for Node {
    fn from(list: List) -> Self {
        Node::List(list)
    }
}

impl From<Unit> for Node {
    fn from(unit: Unit) -> Self {
        Node::Unit(unit)
    }
}

impl From<Uses> for Node {
    fn from(uses: Uses) -> Self {
        Node::Uses(uses)
    }
}

impl From<PathAlias> for Node {
    fn from(path_alias: PathAlias) -> Self {
        Node::PathAlias(path_alias)
    }
}
