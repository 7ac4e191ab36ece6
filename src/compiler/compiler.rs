use tracing::debug;

use crate::{ast::ast::Node, errors::errors::Error, parser::parser::Parser};

/// Parses sources and runs the execution hook over the resulting tree.
#[derive(Debug, Default)]
pub struct Compiler {
    parser: Parser,
}

impl Compiler {
    pub fn new() -> Self {
        Compiler {
            parser: Parser::new(),
        }
    }

    /// Parses `source` and executes the tree, returning it.
    pub fn compile(&mut self, source: &str) -> Result<Node, Error> {
        let ast = self.parser.parse(source)?;
        self.exec(&ast);
        Ok(ast)
    }

    /// Execution hook. Nothing consumes the tree yet.
    fn exec(&self, node: &Node) {
        debug!(node = ?node.get_node_type(), "exec");
    }
}
