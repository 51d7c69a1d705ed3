//! Integration tests for the end-to-end front-end pipeline.
//!
//! These tests drive the public surface the shell uses: construct a Lexer
//! over source text, hand it to a Parser, and inspect the resulting
//! Program, its rendering, and the collected error list.

use wisp::ast::ast::{Stmt, StmtType};
use wisp::lexer::lexer::Lexer;
use wisp::lexer::tokens::TokenKind;
use wisp::parser::parser::Parser;
use wisp::repl::{eval_lexer, eval_parser};

fn parse(input: &str) -> (wisp::ast::ast::Program, Parser) {
    let mut parser = Parser::new(Lexer::new(input.to_string()));
    let program = parser.parse_program();
    (program, parser)
}

#[test]
fn test_pipeline_small_program() {
    let source = "let five = 5;\nlet ten = 10;\nreturn five;\n!ten;";
    let (program, parser) = parse(source);

    assert!(parser.errors().is_empty(), "errors: {:?}", parser.errors());
    assert_eq!(program.statements.len(), 4);

    let kinds: Vec<StmtType> = program.iter().map(|stmt| stmt.get_stmt_type()).collect();
    assert_eq!(
        kinds,
        [
            StmtType::LetStmt,
            StmtType::LetStmt,
            StmtType::ReturnStmt,
            StmtType::ExpressionStmt,
        ]
    );
}

#[test]
fn test_round_trip_is_structurally_stable() {
    // Rendering need not be byte-identical to the source, but re-parsing
    // the rendering must reproduce the same statement shapes. Prefix
    // expressions are excluded: they render parenthesized and no grouping
    // rule is wired yet.
    let sources = [
        "let x = 5;",
        "return 10;",
        "foobar;",
        "let y = foo; return y; y",
        "let a = 1;\nlet b = a;\nreturn b;",
    ];

    for source in sources {
        let (first, parser) = parse(source);
        assert!(
            parser.errors().is_empty(),
            "first parse of {:?} errored: {:?}",
            source,
            parser.errors()
        );

        let rendered = first.render();
        let (second, parser) = parse(&rendered);
        assert!(
            parser.errors().is_empty(),
            "re-parse of {:?} errored: {:?}",
            rendered,
            parser.errors()
        );

        assert_eq!(first.statements.len(), second.statements.len());
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.get_stmt_type(), b.get_stmt_type());
        }
        assert_eq!(second.render(), rendered, "rendering is a fixed point");
    }
}

#[test]
fn test_lexer_feeds_parser_lazily() {
    // A parser over a half-broken input still drains the lexer exactly
    // once and terminates.
    let (program, parser) = parse("let a = 1; @ let b = 2;");

    assert_eq!(program.statements.len(), 2);
    assert_eq!(parser.errors().len(), 1);
}

#[test]
fn test_illegal_characters_become_parse_errors() {
    let (program, parser) = parse(":w");

    assert_eq!(program.statements.len(), 0);
    assert_eq!(parser.errors().len(), 1);
    assert_eq!(
        parser.errors()[0].to_string(),
        "no prefix parse function for Illegal found"
    );
}

#[test]
fn test_token_stream_terminates() {
    let mut lexer = Lexer::new("let x = 1; fn(){} <= >= ++ -- @".to_string());

    let mut count = 0;
    loop {
        let token = lexer.next_token();
        count += 1;
        assert!(count < 64, "lexer failed to reach EndOfInput");
        if token.kind == TokenKind::EndOfInput {
            break;
        }
    }
}

#[test]
fn test_eval_parser_renders_program() {
    assert_eq!(eval_parser("let x = 5;"), "let x = 5;");
    assert_eq!(eval_parser("!5;"), "(!5)");
}

#[test]
fn test_eval_parser_reports_errors() {
    let output = eval_parser("let foobar 838383;");

    assert!(output.starts_with("parser errors:"), "output: {output:?}");
    assert!(
        output.contains("expected next token to be Assign, got Integer instead"),
        "output: {output:?}"
    );
}

#[test]
fn test_eval_lexer_lists_tokens() {
    let output = eval_lexer("let five = 5;");
    let rows: Vec<&str> = output.lines().collect();

    // let, five, =, 5, ; — EndOfInput is not printed
    assert_eq!(rows.len(), 5);
    assert!(rows[0].starts_with("Let"), "row: {:?}", rows[0]);
    assert!(rows[1].starts_with("Identifier"), "row: {:?}", rows[1]);
}

#[test]
fn test_eval_lexer_empty_line() {
    assert_eq!(eval_lexer("   "), "");
}
