//! Unit tests for the parser module.
//!
//! This module contains tests for parsing the unit language including:
//! - Unit declarations
//! - Uses clauses, aliases and members
//! - Multiple clauses
//! - Syntax errors and their positions
//! - Consistency of the static tables and the parse stack

use crate::{
    ast::ast::{Node, NodeType},
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::tokens::TokenKind,
    Position, Span,
};

use super::{
    actions::{list_append, Rhs},
    lookups::{lookup, NonTerminal, Symbol, TableEntry, PRODUCTIONS, TABLE},
    parser::{parse, Parser},
    stack::{Lexeme, ParseStack, StackValue},
};

fn clauses(source: &str) -> Vec<Node> {
    match parse(source).unwrap() {
        Node::List(list) => list.into_items(),
        other => panic!("expected a root list, found {:?}", other.get_node_type()),
    }
}

#[test]
fn test_parse_unit_declaration() {
    let clauses = clauses("unit a.b.c;");
    assert_eq!(clauses.len(), 1);

    let unit = clauses[0].as_unit().unwrap();
    assert_eq!(unit.path.len(), 3);
    assert_eq!(unit.path_names(), vec!["a", "b", "c"]);
    assert!(unit
        .path
        .iter()
        .all(|node| node.get_node_type() == NodeType::Identifier));
}

#[test]
fn test_parse_single_segment_unit() {
    let clauses = clauses("unit main;");
    assert_eq!(clauses[0].as_unit().unwrap().path_names(), vec!["main"]);
}

#[test]
fn test_parse_uses_with_alias() {
    let clauses = clauses("uses a.b.c as d;");
    let uses = clauses[0].as_uses().unwrap();
    let imports: Vec<_> = uses.imports().collect();

    assert_eq!(imports.len(), 1);
    assert_eq!(imports[0].path_names(), vec!["a", "b", "c"]);
    assert_eq!(imports[0].alias.name, "d");
    assert!(imports[0].member.is_none());
}

#[test]
fn test_parse_uses_defaults_alias_to_last_segment() {
    let clauses = clauses("uses a.b.c;");
    let import = clauses[0].as_uses().unwrap().imports().next().unwrap().clone();

    assert_eq!(import.path_names(), vec!["a", "b", "c"]);
    assert_eq!(import.alias.name, "c");
}

#[test]
fn test_parse_uses_list_keeps_source_order() {
    let clauses = clauses("uses a, b as c;");
    let uses = clauses[0].as_uses().unwrap();
    let imports: Vec<_> = uses.imports().collect();

    assert_eq!(uses.imports.len(), 2);
    assert_eq!(imports[0].path_names(), vec!["a"]);
    assert_eq!(imports[0].alias.name, "a");
    assert_eq!(imports[1].path_names(), vec!["b"]);
    assert_eq!(imports[1].alias.name, "c");
}

#[test]
fn test_parse_member_import() {
    let clauses = clauses(r"uses a.b\c, d.e\f as g;");
    let imports: Vec<_> = clauses[0].as_uses().unwrap().imports().cloned().collect();

    assert_eq!(imports[0].path_names(), vec!["a", "b"]);
    assert_eq!(imports[0].member.as_ref().unwrap().name, "c");
    assert_eq!(imports[0].alias.name, "c");

    assert_eq!(imports[1].path_names(), vec!["d", "e"]);
    assert_eq!(imports[1].member.as_ref().unwrap().name, "f");
    assert_eq!(imports[1].alias.name, "g");
}

#[test]
fn test_last_alias_clause_wins() {
    let clauses = clauses("uses a as b as c;");
    let import = clauses[0].as_uses().unwrap().imports().next().unwrap().clone();

    assert_eq!(import.alias.name, "c");
}

#[test]
fn test_parse_multiple_clauses() {
    let clauses = clauses("unit app.main;\nuses std.io, std.fs as files;\nuses net;");

    assert_eq!(clauses.len(), 3);
    assert_eq!(clauses[0].get_node_type(), NodeType::Unit);
    assert_eq!(clauses[1].get_node_type(), NodeType::Uses);
    assert_eq!(clauses[2].get_node_type(), NodeType::Uses);
    assert_eq!(clauses[1].as_uses().unwrap().imports.len(), 2);
}

#[test]
fn test_identifier_spans() {
    let clauses = clauses("unit a.bc;");
    let unit = clauses[0].as_unit().unwrap();
    let last = unit.path.identifiers().last().unwrap();

    assert_eq!(
        last.span,
        Span {
            start: Position::new(7, 1, 7),
            end: Position::new(9, 1, 9),
        }
    );
}

#[test]
fn test_reparse_is_identical() {
    let source = "unit a.b;\nuses c.d as e, f\\g;";
    let mut parser = Parser::new();

    let first = parser.parse(source).unwrap();
    let second = parser.parse(source).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, parse(source).unwrap());
}

#[test]
fn test_parser_recovers_state_after_error() {
    let mut parser = Parser::new();

    assert!(parser.parse("unit 1;").is_err());
    assert!(parser.parse("unit a;").is_ok());
}

#[test]
fn test_unit_with_number_reports_digit_position() {
    let error = parse("unit 123;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "123".to_string()
        }
    );
    assert_eq!(error.get_position().line, 1);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_error_position_on_later_line() {
    let error = parse("unit a;\n\n  uses b c;").unwrap_err();

    assert_eq!(error.get_error_name(), "UnexpectedToken");
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 9);
}

#[test]
fn test_missing_semicolon_is_end_of_input() {
    let error = parse("unit a.b").unwrap_err();

    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEndOfInput);
    assert_eq!(error.kind(), ErrorKind::Syntax);
}

#[test]
fn test_empty_source_is_end_of_input() {
    let error = parse("  // nothing here\n").unwrap_err();
    assert_eq!(error.get_error(), &ErrorImpl::UnexpectedEndOfInput);
}

#[test]
fn test_unused_keyword_is_syntax_error() {
    let error = parse("begin;").unwrap_err();

    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnexpectedToken {
            token: "begin".to_string()
        }
    );
}

#[test]
fn test_dangling_separators_are_syntax_errors() {
    assert_eq!(parse("unit a.;").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(parse("uses a,;").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(parse("uses a as;").unwrap_err().kind(), ErrorKind::Syntax);
    assert_eq!(parse(r"unit a\b;").unwrap_err().kind(), ErrorKind::Syntax);
}

#[test]
fn test_lexical_error_surfaces_from_parse() {
    let error = parse("unit a;\nuses \"b;").unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);
}

#[test]
fn test_table_targets_are_in_range() {
    for (state, row) in TABLE.iter().enumerate() {
        for (symbol, entry) in row {
            match (symbol, entry) {
                (Symbol::Terminal(_), TableEntry::Shift(target)) => {
                    assert!(*target < TABLE.len(), "state {} shifts to {}", state, target)
                }
                (Symbol::Terminal(_), TableEntry::Reduce(id)) => {
                    assert!(*id > 0 && *id < PRODUCTIONS.len(), "state {} reduces {}", state, id)
                }
                (Symbol::Terminal(_), TableEntry::Accept) => (),
                (Symbol::NonTerminal(_), TableEntry::Transit(target)) => {
                    assert!(*target < TABLE.len(), "state {} transits to {}", state, target)
                }
                _ => panic!("state {} has {:?} on {:?}", state, entry, symbol),
            }
        }
    }
}

#[test]
fn test_accept_only_on_program_state() {
    let accepting: Vec<usize> = (0..TABLE.len())
        .filter(|&state| lookup(state, Symbol::Terminal(TokenKind::EOF)) == Some(TableEntry::Accept))
        .collect();

    assert_eq!(accepting, vec![1]);
    assert_eq!(
        lookup(0, Symbol::NonTerminal(NonTerminal::Program)),
        Some(TableEntry::Transit(1))
    );
}

#[test]
fn test_parse_stack_pops_in_source_order() {
    let mut stack = ParseStack::new();
    let lexeme = |text: &str| Lexeme {
        text: text.to_string(),
        span: Span::default(),
    };

    assert!(stack.is_bottom());
    stack.shift(5, lexeme("unit"));
    stack.shift(11, lexeme("a"));
    assert_eq!(stack.depth(), 2);
    assert_eq!(stack.top_state(), Some(11));

    assert!(stack.pop_symbols(3).is_none());
    let values = stack.pop_symbols(2).unwrap();
    assert_eq!(values, vec![StackValue::Lexeme(lexeme("unit")), StackValue::Lexeme(lexeme("a"))]);
    assert!(stack.is_bottom());
    assert!(stack.pop().is_none());
}

#[test]
fn test_action_rejects_mismatched_symbols() {
    let mut rhs = Rhs::new(
        7,
        vec![
            StackValue::Lexeme(Lexeme {
                text: "a".to_string(),
                span: Span::default(),
            }),
            StackValue::Lexeme(Lexeme {
                text: ".".to_string(),
                span: Span::default(),
            }),
            StackValue::Lexeme(Lexeme {
                text: "b".to_string(),
                span: Span::default(),
            }),
        ],
    );

    match list_append(&mut rhs) {
        Err(ErrorImpl::MalformedReduction { production, .. }) => assert_eq!(production, 7),
        other => panic!("expected a malformed reduction, got {:?}", other),
    }
}
