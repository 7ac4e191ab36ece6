/// AST (Abstract Syntax Tree) module
/// Contains all definitions related to the AST structure
///
/// Submodules:
/// - ast: The `Node` sum type over every node kind
/// - expressions: Leaf and collection nodes (identifiers, lists)
/// - statements: Top-level clause nodes (unit, uses, imported paths)
pub mod ast;
pub mod expressions;
pub mod statements;
