//! Parser tests.
//!
//! Covers: leaf and nested expressions, tree shape, unbalanced input,
//! invalid tokens, empty input, trailing input, the nesting limit, and the
//! 100-iteration determinism test.

use slisp_lexer::Lexer;
use slisp_parser::{parse_expression, parse_source};
use slisp_types::{Atom, Expression, InterpreterConfig, ParseError, Span};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

fn parse(source: &str) -> Result<Expression, ParseError> {
    parse_source(source, &InterpreterConfig::default())
}

fn parse_ok(source: &str) -> Expression {
    parse(source).unwrap_or_else(|e| panic!("unexpected parse error for '{source}': {e}"))
}

fn app(op: &str, tail: Vec<Expression>) -> Expression {
    Expression::with_tail(Atom::symbol(op), tail)
}

// ─────────────────────────────────────────────────────────────────────
// Accepted input
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_single_atoms() {
    assert_eq!(parse_ok("42"), Expression::from(42.0));
    assert_eq!(parse_ok("True"), Expression::from(true));
    assert_eq!(parse_ok("x"), Expression::from("x"));
}

#[test]
fn test_flat_application() {
    assert_eq!(parse_ok("(+ 1 2)"), app("+", vec![1.0.into(), 2.0.into()]));
}

#[test]
fn test_nested_application() {
    let expected = app(
        "define",
        vec![
            "a".into(),
            app("if", vec![app("<", vec![1.0.into(), 2.0.into()]), 3.0.into(), 4.0.into()]),
        ],
    );
    assert_eq!(parse_ok("(define a (if (< 1 2) 3 4))"), expected);
}

#[test]
fn test_zero_operand_application_is_leaf() {
    let e = parse_ok("(begin)");
    assert_eq!(e, Expression::from("begin"));
    assert!(e.is_leaf());
}

#[test]
fn test_comment_before_expression() {
    assert_eq!(
        parse_ok(";; This is a comment\n(+ 1 2)"),
        app("+", vec![1.0.into(), 2.0.into()])
    );
}

#[test]
fn test_whitespace_and_newlines_inside() {
    assert_eq!(parse_ok("(\n  +\n  1\n  2\n)"), parse_ok("(+ 1 2)"));
}

#[test]
fn test_parsed_heads_are_literal_atoms() {
    fn check(e: &Expression) {
        assert!(
            matches!(e.head, Atom::Boolean { .. } | Atom::Number { .. } | Atom::Symbol { .. }),
            "unexpected head {:?}",
            e.head
        );
        e.tail.iter().for_each(check);
    }
    check(&parse_ok("(begin (define a True) (if a (+ 1 2.5) (- 3)))"));
}

// ─────────────────────────────────────────────────────────────────────
// Rejected input
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_missing_close_paren() {
    assert!(matches!(parse("(+ 1 (- 2 3)"), Err(ParseError::UnexpectedEof { .. })));
}

#[test]
fn test_unmatched_close_paren() {
    assert!(matches!(parse(")"), Err(ParseError::UnmatchedClose { .. })));
    assert_eq!(
        parse("(+ 1 2))"),
        Err(ParseError::UnmatchedClose {
            span: Span::new(1, 8)
        })
    );
}

#[test]
fn test_empty_input() {
    assert_eq!(parse(""), Err(ParseError::Empty));
    assert_eq!(parse(";; only a comment"), Err(ParseError::Empty));
}

#[test]
fn test_empty_list_rejected() {
    assert!(matches!(parse("()"), Err(ParseError::MissingOperator { .. })));
}

#[test]
fn test_list_in_operator_position_rejected() {
    assert!(matches!(parse("((+ 1 2) 3)"), Err(ParseError::MissingOperator { .. })));
}

#[test]
fn test_invalid_token_rejected() {
    assert_eq!(
        parse("(+ 1..5 2)"),
        Err(ParseError::InvalidToken {
            token: "1..5".into(),
            span: Span::new(1, 4)
        })
    );
    assert!(matches!(parse("(define 123abc 1)"), Err(ParseError::InvalidToken { .. })));
}

#[test]
fn test_two_top_level_expressions_rejected() {
    assert!(matches!(parse("(+ 1 2) (+ 3 4)"), Err(ParseError::TrailingInput { .. })));
    assert!(matches!(parse("1 2"), Err(ParseError::TrailingInput { .. })));
}

#[test]
fn test_nesting_limit() {
    let config = InterpreterConfig { max_depth: 3 };
    assert!(parse_source("(a (b (c)))", &config).is_ok());
    assert!(matches!(
        parse_source("(a (b (c (d))))", &config),
        Err(ParseError::TooDeep { limit: 3, .. })
    ));
}

// ─────────────────────────────────────────────────────────────────────
// Token-position entry point
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parse_expression_from_position() {
    let tokens = Lexer::new("(begin (define a 1) 2)").lex();
    let mut pos = 1;
    assert_eq!(parse_expression(&tokens, &mut pos).unwrap(), Expression::from("begin"));
    assert_eq!(pos, 2);
    let define = parse_expression(&tokens, &mut pos).unwrap();
    assert_eq!(define, app("define", vec!["a".into(), 1.0.into()]));
    assert_eq!(pos, 7);
}

#[test]
fn test_parse_expression_past_end() {
    let tokens = Lexer::new("(a").lex();
    let mut pos = 0;
    assert!(matches!(
        parse_expression(&tokens, &mut pos),
        Err(ParseError::UnexpectedEof { .. })
    ));
    assert_eq!(pos, 0);
}

// ─────────────────────────────────────────────────────────────────────
// 100-iteration determinism test
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_parser_determinism_100_iterations() {
    let source = "(begin (define a 1) (define b (+ a 1)) (* b 10))";
    let first = parse_ok(source);
    for i in 0..100 {
        assert_eq!(first, parse_ok(source), "Determinism failure at iteration {i}");
    }
}
