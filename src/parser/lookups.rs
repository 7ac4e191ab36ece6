//! Pre-built LALR(1) tables for the unit grammar.
//!
//! ```text
//!  0  $accept    → Program
//!  1  Program    → Clause ;
//!  2  Program    → Program Clause ;
//!  3  Clause     → UnitDecl
//!  4  Clause     → UsesDecl
//!  5  Ident      → IDENTIFIER
//!  6  Path       → Ident
//!  7  Path       → Path . Ident
//!  8  Import     → Path
//!  9  Import     → Path \ Ident
//! 10  Import     → Import as Ident
//! 11  UnitDecl   → unit Path
//! 12  UsesDecl   → uses ImportList
//! 13  ImportList → Import
//! 14  ImportList → ImportList , Import
//! ```
//!
//! The tables are built once and only ever read, so any number of parsers
//! may share them.

use std::{collections::HashMap, fmt::Display};

use lazy_static::lazy_static;

use crate::lexer::tokens::TokenKind;

use super::actions::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NonTerminal {
    Start,
    Program,
    Clause,
    Ident,
    Import,
    UnitDecl,
    Path,
    UsesDecl,
    ImportList,
}

impl Display for NonTerminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Column of the action table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    Terminal(TokenKind),
    NonTerminal(NonTerminal),
}

impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Symbol::Terminal(kind) => write!(f, "{}", kind),
            Symbol::NonTerminal(non_terminal) => write!(f, "{}", non_terminal),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableEntry {
    /// Push the lookahead and go to the state.
    Shift(usize),
    /// Reduce by the production.
    Reduce(usize),
    /// Go to the state after a reduction.
    Transit(usize),
    Accept,
}

pub struct Production {
    pub lhs: NonTerminal,
    /// Number of stack cells popped on reduction
    pub rhs_length: usize,
    pub action: SemanticAction,
}

pub type Row = HashMap<Symbol, TableEntry>;

fn t(kind: TokenKind) -> Symbol {
    Symbol::Terminal(kind)
}

fn n(non_terminal: NonTerminal) -> Symbol {
    Symbol::NonTerminal(non_terminal)
}

fn row(entries: &[(Symbol, TableEntry)]) -> Row {
    entries.iter().copied().collect()
}

/// Every token that may follow an `Ident` inside a path or import.
const PATH_FOLLOW: [TokenKind; 5] = [
    TokenKind::Semicolon,
    TokenKind::Dot,
    TokenKind::Backslash,
    TokenKind::As,
    TokenKind::Comma,
];

/// Every token that may follow an `Import`.
const IMPORT_FOLLOW: [TokenKind; 3] = [TokenKind::Semicolon, TokenKind::As, TokenKind::Comma];

/// Every token that may follow a complete clause.
const CLAUSE_FOLLOW: [TokenKind; 3] = [TokenKind::Unit, TokenKind::Uses, TokenKind::EOF];

fn reduce_on(kinds: &[TokenKind], production: usize) -> Row {
    kinds
        .iter()
        .map(|&kind| (t(kind), TableEntry::Reduce(production)))
        .collect()
}

lazy_static! {
    pub static ref PRODUCTIONS: Vec<Production> = vec![
        Production { lhs: NonTerminal::Start, rhs_length: 1, action: pass_through },
        Production { lhs: NonTerminal::Program, rhs_length: 2, action: program_first },
        Production { lhs: NonTerminal::Program, rhs_length: 3, action: program_append },
        Production { lhs: NonTerminal::Clause, rhs_length: 1, action: pass_through },
        Production { lhs: NonTerminal::Clause, rhs_length: 1, action: pass_through },
        Production { lhs: NonTerminal::Ident, rhs_length: 1, action: identifier },
        Production { lhs: NonTerminal::Path, rhs_length: 1, action: list_first },
        Production { lhs: NonTerminal::Path, rhs_length: 3, action: list_append },
        Production { lhs: NonTerminal::Import, rhs_length: 1, action: path_alias },
        Production { lhs: NonTerminal::Import, rhs_length: 3, action: path_member },
        Production { lhs: NonTerminal::Import, rhs_length: 3, action: explicit_alias },
        Production { lhs: NonTerminal::UnitDecl, rhs_length: 2, action: unit },
        Production { lhs: NonTerminal::UsesDecl, rhs_length: 2, action: uses },
        Production { lhs: NonTerminal::ImportList, rhs_length: 1, action: list_first },
        Production { lhs: NonTerminal::ImportList, rhs_length: 3, action: list_append },
    ];

    pub static ref TABLE: Vec<Row> = {
        use NonTerminal::*;
        use TableEntry::*;

        vec![
            /*  0 */ row(&[
                (n(Program), Transit(1)),
                (n(Clause), Transit(2)),
                (n(UnitDecl), Transit(3)),
                (n(UsesDecl), Transit(4)),
                (t(TokenKind::Unit), Shift(5)),
                (t(TokenKind::Uses), Shift(6)),
            ]),
            /*  1 */ row(&[
                (n(Clause), Transit(7)),
                (n(UnitDecl), Transit(3)),
                (n(UsesDecl), Transit(4)),
                (t(TokenKind::Unit), Shift(5)),
                (t(TokenKind::Uses), Shift(6)),
                (t(TokenKind::EOF), Accept),
            ]),
            /*  2 */ row(&[(t(TokenKind::Semicolon), Shift(23))]),
            /*  3 */ row(&[(t(TokenKind::Semicolon), Reduce(3))]),
            /*  4 */ row(&[(t(TokenKind::Semicolon), Reduce(4))]),
            /*  5 */ row(&[
                (n(Ident), Transit(10)),
                (n(Path), Transit(9)),
                (t(TokenKind::Identifier), Shift(11)),
            ]),
            /*  6 */ row(&[
                (n(Ident), Transit(10)),
                (n(Import), Transit(15)),
                (n(Path), Transit(16)),
                (n(ImportList), Transit(14)),
                (t(TokenKind::Identifier), Shift(11)),
            ]),
            /*  7 */ row(&[(t(TokenKind::Semicolon), Shift(8))]),
            /*  8 */ reduce_on(&CLAUSE_FOLLOW, 2),
            /*  9 */ row(&[
                (t(TokenKind::Semicolon), Reduce(11)),
                (t(TokenKind::Dot), Shift(12)),
            ]),
            /* 10 */ reduce_on(&PATH_FOLLOW, 6),
            /* 11 */ reduce_on(&PATH_FOLLOW, 5),
            /* 12 */ row(&[
                (n(Ident), Transit(13)),
                (t(TokenKind::Identifier), Shift(11)),
            ]),
            /* 13 */ reduce_on(&PATH_FOLLOW, 7),
            /* 14 */ row(&[
                (t(TokenKind::Semicolon), Reduce(12)),
                (t(TokenKind::Comma), Shift(17)),
            ]),
            /* 15 */ row(&[
                (t(TokenKind::Semicolon), Reduce(13)),
                (t(TokenKind::As), Shift(19)),
                (t(TokenKind::Comma), Reduce(13)),
            ]),
            /* 16 */ row(&[
                (t(TokenKind::Semicolon), Reduce(8)),
                (t(TokenKind::Dot), Shift(12)),
                (t(TokenKind::Backslash), Shift(21)),
                (t(TokenKind::As), Reduce(8)),
                (t(TokenKind::Comma), Reduce(8)),
            ]),
            /* 17 */ row(&[
                (n(Ident), Transit(10)),
                (n(Import), Transit(18)),
                (n(Path), Transit(16)),
                (t(TokenKind::Identifier), Shift(11)),
            ]),
            /* 18 */ row(&[
                (t(TokenKind::Semicolon), Reduce(14)),
                (t(TokenKind::As), Shift(19)),
                (t(TokenKind::Comma), Reduce(14)),
            ]),
            /* 19 */ row(&[
                (n(Ident), Transit(20)),
                (t(TokenKind::Identifier), Shift(11)),
            ]),
            /* 20 */ reduce_on(&IMPORT_FOLLOW, 10),
            /* 21 */ row(&[
                (n(Ident), Transit(22)),
                (t(TokenKind::Identifier), Shift(11)),
            ]),
            /* 22 */ reduce_on(&IMPORT_FOLLOW, 9),
            /* 23 */ reduce_on(&CLAUSE_FOLLOW, 1),
        ]
    };
}

/// Looks up the entry for `symbol` in `state`.
pub fn lookup(state: usize, symbol: Symbol) -> Option<TableEntry> {
    TABLE.get(state)?.get(&symbol).copied()
}

pub fn production(id: usize) -> Option<&'static Production> {
    PRODUCTIONS.get(id)
}
