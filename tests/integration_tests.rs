//! Integration tests for the front end.
//!
//! These tests drive the public API the way the driver does: source text
//! goes in, a tree or a typed error comes out.

use indoc::indoc;
use pint::{
    ast::ast::{Node, NodeType},
    compiler::compiler::Compiler,
    errors::errors::{ErrorImpl, ErrorKind},
    lexer::{lexer::Tokenizer, tokens::TokenKind},
    parse, render_error,
};

const PROGRAM: &str = indoc! {r#"
    // Entry point of the application.
    unit app.main;

    { imports below are resolved by the loader }
    uses std.io,
         std.collections\HashMap as Map,
         app.config as cfg;
    uses app.util;
"#};

#[test]
fn test_parse_full_program() {
    let root = parse(PROGRAM).unwrap();
    let clauses = root.as_list().unwrap();

    assert_eq!(clauses.len(), 3);

    let unit = clauses.items()[0].as_unit().unwrap();
    assert_eq!(unit.path_names(), vec!["app", "main"]);

    let uses = clauses.items()[1].as_uses().unwrap();
    let imports: Vec<_> = uses.imports().collect();
    assert_eq!(imports.len(), 3);

    assert_eq!(imports[0].path_names(), vec!["std", "io"]);
    assert_eq!(imports[0].alias.name, "io");

    assert_eq!(imports[1].path_names(), vec!["std", "collections"]);
    assert_eq!(imports[1].member.as_ref().unwrap().name, "HashMap");
    assert_eq!(imports[1].alias.name, "Map");

    assert_eq!(imports[2].path_names(), vec!["app", "config"]);
    assert_eq!(imports[2].alias.name, "cfg");

    let last = clauses.items()[2].as_uses().unwrap();
    assert_eq!(last.imports().next().unwrap().alias.name, "util");
}

#[test]
fn test_identifier_locations_span_lines() {
    let root = parse(PROGRAM).unwrap();
    let uses = root.as_list().unwrap().items()[1].as_uses().unwrap();
    let cfg = &uses.imports().nth(2).unwrap().alias;

    assert_eq!(cfg.name, "cfg");
    assert_eq!(cfg.span.start.line, 7);
    assert_eq!(cfg.span.start.column, 19);
}

#[test]
fn test_parse_is_deterministic() {
    assert_eq!(parse(PROGRAM).unwrap(), parse(PROGRAM).unwrap());
}

#[test]
fn test_tokenizer_drains_after_accept() {
    let mut tokenizer = Tokenizer::new(PROGRAM);
    let mut count = 0;

    while tokenizer.has_more_tokens() {
        let token = tokenizer.next_token().unwrap();
        count += 1;
        if token.kind == TokenKind::EOF {
            break;
        }
    }

    assert!(!tokenizer.has_more_tokens());
    assert!(count > 1);
}

#[test]
fn test_comment_only_source_has_no_tokens() {
    let source = indoc! {"
        // nothing but comments
        { and an annotation }
    "};
    let tokens: Vec<_> = Tokenizer::new(source)
        .collect::<Result<Vec<_>, _>>()
        .unwrap();

    assert_eq!(tokens.len(), 1);
    assert!(tokens[0].is_eof());
}

#[test]
fn test_syntax_error_report() {
    let source = "unit a;\nunit 123;\n";
    let error = parse(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Syntax);
    assert_eq!(error.get_position().line, 2);
    assert_eq!(error.get_position().column, 5);

    let report = render_error(&error, source, "bad.pint");
    assert!(report.contains("2 | unit 123;"));
    assert!(report.contains("-----^"));
}

#[test]
fn test_lexical_error_report() {
    let source = "uses 'open;\n";
    let error = parse(source).unwrap_err();

    assert_eq!(error.kind(), ErrorKind::Lexical);
    assert_eq!(
        error.get_error(),
        &ErrorImpl::UnrecognisedToken {
            token: "'".to_string()
        }
    );

    let report = render_error(&error, source, "bad.pint");
    assert!(report.starts_with("Error: UnrecognisedToken"));
    assert!(report.contains("-> bad.pint:1:5"));
}

#[test]
fn test_compiler_round_trip() {
    let mut compiler = Compiler::new();
    let root = compiler.compile("uses a, b as c;").unwrap();

    let uses = match &root {
        Node::List(list) => list.items()[0].as_uses().unwrap().clone(),
        other => panic!("unexpected root {:?}", other.get_node_type()),
    };

    let aliases: Vec<_> = uses.imports().map(|import| import.alias.name.clone()).collect();
    assert_eq!(aliases, vec!["a", "c"]);
    assert_eq!(root.get_node_type(), NodeType::List);
}

#[test]
fn test_parses_in_parallel() {
    let handles: Vec<_> = (0..4)
        .map(|index| {
            std::thread::spawn(move || {
                let source = format!("unit worker{};\nuses shared.lib;", index);
                parse(&source).map(|root| root.as_list().map(|list| list.len()))
            })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap().unwrap(), Some(2));
    }
}
