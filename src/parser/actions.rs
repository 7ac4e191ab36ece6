//! Semantic actions, one per production.
//!
//! Each action receives the symbols popped for its production and builds a
//! single node from them. Symbols are taken right to left, so the action
//! body reads the production backwards.

use tracing::debug;

use crate::{
    ast::{
        ast::Node,
        expressions::{Identifier, List},
        statements::{PathAlias, Unit, Uses},
    },
    errors::errors::ErrorImpl,
};

use super::stack::{Lexeme, StackValue};

pub type SemanticAction = fn(&mut Rhs) -> Result<Node, ErrorImpl>;

/// The right-hand-side symbols of one reduction.
#[derive(Debug)]
pub struct Rhs {
    production: usize,
    values: Vec<StackValue>,
}

impl Rhs {
    pub fn new(production: usize, values: Vec<StackValue>) -> Self {
        Rhs { production, values }
    }

    pub fn is_exhausted(&self) -> bool {
        self.values.is_empty()
    }

    pub fn malformed(&self, message: impl Into<String>) -> ErrorImpl {
        ErrorImpl::MalformedReduction {
            production: self.production,
            message: message.into(),
        }
    }

    pub fn pop_lexeme(&mut self) -> Result<Lexeme, ErrorImpl> {
        match self.values.pop() {
            Some(StackValue::Lexeme(lexeme)) => Ok(lexeme),
            Some(StackValue::Node(_)) => Err(self.malformed("expected a lexeme, found a node")),
            None => Err(self.malformed("ran out of symbols")),
        }
    }

    pub fn pop_node(&mut self) -> Result<Node, ErrorImpl> {
        match self.values.pop() {
            Some(StackValue::Node(node)) => Ok(node),
            Some(StackValue::Lexeme(lexeme)) => Err(self.malformed(format!(
                "expected a node, found lexeme {:?}",
                lexeme.text
            ))),
            None => Err(self.malformed("ran out of symbols")),
        }
    }

    pub fn pop_list(&mut self) -> Result<List, ErrorImpl> {
        match self.pop_node()? {
            Node::List(list) => Ok(list),
            other => Err(self.malformed(format!(
                "expected a List, found {:?}",
                other.get_node_type()
            ))),
        }
    }

    pub fn pop_identifier(&mut self) -> Result<Identifier, ErrorImpl> {
        match self.pop_node()? {
            Node::Identifier(identifier) => Ok(identifier),
            other => Err(self.malformed(format!(
                "expected an Identifier, found {:?}",
                other.get_node_type()
            ))),
        }
    }

    pub fn pop_path_alias(&mut self) -> Result<PathAlias, ErrorImpl> {
        match self.pop_node()? {
            Node::PathAlias(path_alias) => Ok(path_alias),
            other => Err(self.malformed(format!(
                "expected a PathAlias, found {:?}",
                other.get_node_type()
            ))),
        }
    }
}

pub fn pass_through(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    rhs.pop_node()
}

/// `Program → Clause ;`
pub fn program_first(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    rhs.pop_lexeme()?;
    let clause = rhs.pop_node()?;
    Ok(List::new(clause).into())
}

/// `Program → Program Clause ;`
pub fn program_append(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    rhs.pop_lexeme()?;
    let clause = rhs.pop_node()?;
    let mut program = rhs.pop_list()?;
    program.push(clause);
    Ok(program.into())
}

/// `Ident → IDENTIFIER`
pub fn identifier(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let lexeme = rhs.pop_lexeme()?;
    Ok(Identifier::new(lexeme.text, lexeme.span).into())
}

/// `X → Item`, starting a list
pub fn list_first(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let item = rhs.pop_node()?;
    Ok(List::new(item).into())
}

/// `X → X SEP Item`, appending in place
pub fn list_append(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let item = rhs.pop_node()?;
    rhs.pop_lexeme()?;
    let mut list = rhs.pop_list()?;
    list.push(item);
    Ok(list.into())
}

/// `Import → Path`
pub fn path_alias(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let path = rhs.pop_list()?;
    match PathAlias::new(path) {
        Some(path_alias) => Ok(path_alias.into()),
        None => Err(rhs.malformed("path does not end in an identifier")),
    }
}

/// `Import → Path \ Ident`
pub fn path_member(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let member = rhs.pop_identifier()?;
    rhs.pop_lexeme()?;
    let path = rhs.pop_list()?;
    Ok(PathAlias::with_member(path, member).into())
}

/// `Import → Import as Ident`
pub fn explicit_alias(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let alias = rhs.pop_identifier()?;
    rhs.pop_lexeme()?;
    let mut path_alias = rhs.pop_path_alias()?;
    path_alias.set_alias(alias);
    Ok(path_alias.into())
}

/// `UnitDecl → unit Path`
pub fn unit(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let path = rhs.pop_list()?;
    rhs.pop_lexeme()?;
    debug!(length = path.len(), "unit path");
    Ok(Unit { path }.into())
}

/// `UsesDecl → uses ImportList`
pub fn uses(rhs: &mut Rhs) -> Result<Node, ErrorImpl> {
    let imports = rhs.pop_list()?;
    rhs.pop_lexeme()?;
    debug!(count = imports.len(), "uses imports");
    Ok(Uses { imports }.into())
}
