//! Lexer and classifier tests.
//!
//! Covers: parenthesis splitting, comment stripping, whitespace handling,
//! numeric grammar edge cases, booleans, symbols, the print/re-classify
//! round trip for numbers, and the 100-iteration determinism test.

use slisp_lexer::{classify, tokenize, Lexer, TokenKind};
use slisp_types::{Atom, AtomKind};

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Lex source text and return just the token kinds.
fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::new(source).lex().into_iter().map(|t| t.kind).collect()
}

fn word(text: &str) -> TokenKind {
    TokenKind::Word(text.to_string())
}

fn number(token: &str) -> f64 {
    match classify(token) {
        Some(Atom::Number { value }) => value,
        other => panic!("expected number for '{token}', got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Tokenizer
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_input_has_no_tokens() {
    assert!(kinds("").is_empty());
    assert!(kinds("   \n\t  ").is_empty());
}

#[test]
fn test_simple_application() {
    assert_eq!(
        kinds("(+ 1 2)"),
        vec![TokenKind::Open, word("+"), word("1"), word("2"), TokenKind::Close]
    );
}

#[test]
fn test_nested_without_spaces() {
    assert_eq!(tokenize("((a)(b))"), ["(", "(", "a", ")", "(", "b", ")", ")"]);
}

#[test]
fn test_comment_line_discarded() {
    assert_eq!(tokenize(";; This is a comment\n(+ 1 2)"), ["(", "+", "1", "2", ")"]);
}

#[test]
fn test_trailing_comment_discarded() {
    assert_eq!(tokenize("(begin ;; first\n  (x) ;; second\n)"), ["(", "begin", "(", "x", ")", ")"]);
}

#[test]
fn test_only_comments() {
    assert!(tokenize(";; one\n;; two").is_empty());
}

#[test]
fn test_single_semicolon_is_part_of_word() {
    assert_eq!(tokenize("(a;b)"), ["(", "a;b", ")"]);
}

#[test]
fn test_malformed_words_are_still_tokens() {
    assert_eq!(tokenize("(1..5 123abc)"), ["(", "1..5", "123abc", ")"]);
}

#[test]
fn test_unbalanced_input_tokenizes() {
    assert_eq!(tokenize(")))"), [")", ")", ")"]);
}

// ─────────────────────────────────────────────────────────────────────
// Classifier
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_empty_and_whitespace_tokens_fail() {
    assert_eq!(classify(""), None);
    assert_eq!(classify(" "), None);
    assert_eq!(classify("\t"), None);
}

#[test]
fn test_number_formats() {
    assert_eq!(number("5"), 5.0);
    assert_eq!(number("-5.5"), -5.5);
    assert_eq!(number("1e4"), 10000.0);
    assert_eq!(number("-1.5e4"), -15000.0);
    assert_eq!(number("+2"), 2.0);
}

#[test]
fn test_multiple_decimal_points_fail() {
    assert_eq!(classify("1..5"), None);
    assert_eq!(classify("1.5.1"), None);
}

#[test]
fn test_booleans() {
    assert_eq!(classify("True"), Some(Atom::boolean(true)));
    assert_eq!(classify("False"), Some(Atom::boolean(false)));
}

#[test]
fn test_booleans_case_sensitive() {
    assert_eq!(classify("true"), Some(Atom::symbol("true")));
    assert_eq!(classify("FALSE"), Some(Atom::symbol("FALSE")));
    assert_eq!(classify("Truex"), Some(Atom::symbol("Truex")));
}

#[test]
fn test_symbols() {
    assert_eq!(classify("symbol"), Some(Atom::symbol("symbol")));
    assert_eq!(
        classify("symbol_with_underscores"),
        Some(Atom::symbol("symbol_with_underscores"))
    );
    assert_eq!(classify("a1"), Some(Atom::symbol("a1")));
    for op in ["+", "-", "*", "/", "<", "<=", ">", ">=", "="] {
        assert_eq!(classify(op).map(|a| a.kind()), Some(AtomKind::Symbol), "operator '{op}'");
    }
}

#[test]
fn test_symbol_starting_with_digit_fails() {
    assert_eq!(classify("123InvalidSymbol"), None);
    assert_eq!(classify("123 InvalidSymbol"), None);
}

#[test]
fn test_parentheses_are_not_atoms() {
    assert_eq!(classify("("), None);
    assert_eq!(classify(")"), None);
}

#[test]
fn test_number_round_trip_through_display() {
    for token in ["0", "5", "-5.5", "1e4", "-1.5e4", "3.14159", "1e308", "2.5e-7", "123456789"] {
        let atom = classify(token).unwrap();
        let printed = atom.to_string();
        let reread = tokenize(&printed);
        assert_eq!(reread.len(), 1, "'{printed}' should be one token");
        assert_eq!(classify(&reread[0]), Some(atom), "round trip of '{token}' via '{printed}'");
    }
}

#[test]
fn test_overflowing_numbers_rejected() {
    assert_eq!(classify("1e309"), None);
    assert_eq!(classify("-1e400"), None);
}

#[test]
fn test_underflow_rounds_to_zero() {
    // Too small to represent: reads as zero, which still prints as a number.
    let atom = classify("1e-400").unwrap();
    assert_eq!(atom, Atom::number(0.0));
    assert_eq!(classify(&atom.to_string()), Some(atom));
}

#[test]
fn test_control_characters_are_not_symbols() {
    assert_eq!(classify("bell\u{7}"), None);
    assert_eq!(classify("\u{0}"), None);
    assert_eq!(classify("tab\u{9}"), None);
    assert_eq!(classify("caf\u{e9}").map(|a| a.kind()), Some(AtomKind::Symbol));
}

// ─────────────────────────────────────────────────────────────────────
// 100-iteration determinism test
// ─────────────────────────────────────────────────────────────────────

#[test]
fn test_lexer_determinism_100_iterations() {
    let source = ";; header\n(begin (define a 1) (define b (+ a 1)) (* b 10))";
    let first = kinds(source);
    for i in 0..100 {
        assert_eq!(first, kinds(source), "Determinism failure at iteration {i}");
    }
}
