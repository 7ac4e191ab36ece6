use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("unit", TokenKind::Unit);
        map.insert("uses", TokenKind::Uses);
        map.insert("as", TokenKind::As);
        map.insert("const", TokenKind::Const);
        map.insert("var", TokenKind::Var);
        map.insert("begin", TokenKind::Begin);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("case", TokenKind::Case);
        map.insert("is", TokenKind::Is);
        map.insert("end", TokenKind::End);
        map.insert("constructor", TokenKind::Constructor);
        map.insert("function", TokenKind::Function);
        map.insert("true", TokenKind::Bool);
        map.insert("false", TokenKind::Bool);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    EOF,
    Identifier,

    // Literals
    Bool,
    Int,
    Float,
    String,

    Dot,       // .
    Comma,     // ,
    Semicolon, // ;
    Backslash, // \

    // Reserved
    Unit,
    Uses,
    As,
    Const,
    Var,
    Begin,
    If,
    Then,
    Else,
    Case,
    Is,
    End,
    Constructor,
    Function,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: &[TokenKind]) -> bool {
        tokens.contains(&self.kind)
    }

    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EOF
    }

    /// One-line listing used by `pint --tokens`.
    pub fn debug(&self) -> String {
        let location = format!("{}:{}", self.span.start.line, self.span.start.column);

        if self.is_one_of_many(&[
            TokenKind::Identifier,
            TokenKind::Bool,
            TokenKind::Int,
            TokenKind::Float,
            TokenKind::String,
        ]) {
            format!("{} {} ({})", location, self.kind, self.value)
        } else {
            format!("{} {} ()", location, self.kind)
        }
    }
}
