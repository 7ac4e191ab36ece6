use super::expressions::{Identifier, List};

/// `unit <path>;`
#[derive(Debug, Clone, PartialEq)]
pub struct Unit {
    /// List of Identifier
    pub path: List,
}

impl Unit {
    pub fn path_names(&self) -> Vec<&str> {
        self.path.names()
    }
}

/// `uses <import>, ...;`
#[derive(Debug, Clone, PartialEq)]
pub struct Uses {
    /// List of PathAlias
    pub imports: List,
}

impl Uses {
    pub fn imports(&self) -> impl Iterator<Item = &PathAlias> {
        self.imports.iter().filter_map(|node| node.as_path_alias())
    }
}

/// One imported path, `a.b.c`, `a.b\member` or either followed by `as alias`.
///
/// `alias` is always set: it starts as the member or the last path segment
/// and is replaced by an explicit `as` clause.
#[derive(Debug, Clone, PartialEq)]
pub struct PathAlias {
    /// List of Identifier
    pub path: List,
    pub member: Option<Identifier>,
    pub alias: Identifier,
}

impl PathAlias {
    /// Aliases the import to the last path segment. Returns `None` when that
    /// segment is not an identifier.
    pub fn new(path: List) -> Option<Self> {
        let alias = path.last()?.as_identifier()?.clone();
        Some(PathAlias {
            path,
            member: None,
            alias,
        })
    }

    pub fn with_member(path: List, member: Identifier) -> Self {
        PathAlias {
            path,
            alias: member.clone(),
            member: Some(member),
        }
    }

    pub fn set_alias(&mut self, alias: Identifier) {
        self.alias = alias;
    }

    pub fn path_names(&self) -> Vec<&str> {
        self.path.names()
    }
}
