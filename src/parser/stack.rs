use crate::{ast::ast::Node, lexer::tokens::Token, Span};

/// Raw text of a shifted token.
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub text: String,
    pub span: Span,
}

impl From<Token> for Lexeme {
    fn from(token: Token) -> Self {
        Lexeme {
            text: token.value,
            span: token.span,
        }
    }
}

/// The grammar symbol held by a cell: a shifted terminal or a reduced node.
#[derive(Debug, Clone, PartialEq)]
pub enum StackValue {
    Lexeme(Lexeme),
    Node(Node),
}

#[derive(Debug, Clone)]
pub struct StackCell {
    pub state: usize,
    /// `None` only for the bottom sentinel
    pub value: Option<StackValue>,
}

/// Automaton states and their symbols, kept in one stack so they cannot
/// drift apart. The bottom cell is a sentinel in state 0.
#[derive(Debug, Clone)]
pub struct ParseStack {
    cells: Vec<StackCell>,
}

impl ParseStack {
    pub fn new() -> Self {
        ParseStack {
            cells: vec![StackCell {
                state: 0,
                value: None,
            }],
        }
    }

    pub fn reset(&mut self) {
        self.cells.clear();
        self.cells.push(StackCell {
            state: 0,
            value: None,
        });
    }

    pub fn top_state(&self) -> Option<usize> {
        self.cells.last().map(|cell| cell.state)
    }

    pub fn shift(&mut self, state: usize, lexeme: Lexeme) {
        self.cells.push(StackCell {
            state,
            value: Some(StackValue::Lexeme(lexeme)),
        });
    }

    pub fn push_node(&mut self, state: usize, node: Node) {
        self.cells.push(StackCell {
            state,
            value: Some(StackValue::Node(node)),
        });
    }

    /// Pops the top `count` symbols in one step, returned in source order.
    /// Returns `None` if that would reach into the sentinel.
    pub fn pop_symbols(&mut self, count: usize) -> Option<Vec<StackValue>> {
        if count > self.depth() {
            return None;
        }

        let cells = self.cells.split_off(self.cells.len() - count);
        cells.into_iter().map(|cell| cell.value).collect()
    }

    pub fn pop(&mut self) -> Option<StackCell> {
        if self.depth() == 0 {
            return None;
        }
        self.cells.pop()
    }

    /// Number of symbols above the sentinel.
    pub fn depth(&self) -> usize {
        self.cells.len().saturating_sub(1)
    }

    /// Whether only the sentinel in state 0 remains.
    pub fn is_bottom(&self) -> bool {
        self.cells.len() == 1 && self.cells[0].state == 0
    }
}

impl Default for ParseStack {
    fn default() -> Self {
        ParseStack::new()
    }
}
