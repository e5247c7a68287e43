//! Core slisp lexer: converts source text to a token stream.
//!
//! - `;;` starts a comment that runs to end of line
//! - `(` and `)` are always tokens of their own
//! - any other maximal run of non-whitespace characters is one word
//!
//! Lexing never fails. Malformed words are rejected later by the classifier.

use slisp_types::Span;

use crate::token::{Token, TokenKind};

/// The slisp lexer.
pub struct Lexer<'src> {
    chars: std::iter::Peekable<std::str::Chars<'src>>,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    col: u32,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.chars().peekable(),
            line: 1,
            col: 1,
        }
    }

    /// Lex the entire source into a token stream.
    pub fn lex(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    // ─────────────────────────────────────────────────────────────
    // Character-level helpers
    // ─────────────────────────────────────────────────────────────

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.chars.next()?;
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn current_span(&self) -> Span {
        Span::new(self.line, self.col)
    }

    // ─────────────────────────────────────────────────────────────
    // Whitespace & comments
    // ─────────────────────────────────────────────────────────────

    fn skip_whitespace(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
    }

    /// Consume the rest of the current line, leaving the newline itself.
    fn skip_to_end_of_line(&mut self) {
        while self.peek().is_some_and(|ch| ch != '\n') {
            self.advance();
        }
    }

    // ─────────────────────────────────────────────────────────────
    // Scanning
    // ─────────────────────────────────────────────────────────────

    fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();
            let span = self.current_span();
            let ch = self.peek()?;

            match ch {
                '(' => {
                    self.advance();
                    return Some(Token::new(TokenKind::Open, span));
                }
                ')' => {
                    self.advance();
                    return Some(Token::new(TokenKind::Close, span));
                }
                _ => {
                    let word = self.scan_word();
                    if let Some(before_comment) = word.split_once(";;").map(|(head, _)| head) {
                        // The comment swallows the remainder of the line,
                        // including anything the word scan stopped short of.
                        let before_comment = before_comment.to_string();
                        self.skip_to_end_of_line();
                        if !before_comment.is_empty() {
                            return Some(Token::new(TokenKind::Word(before_comment), span));
                        }
                        continue;
                    }
                    return Some(Token::new(TokenKind::Word(word), span));
                }
            }
        }
    }

    fn scan_word(&mut self) -> String {
        let mut word = String::new();
        while let Some(ch) = self.peek() {
            if ch.is_whitespace() || ch == '(' || ch == ')' {
                break;
            }
            word.push(ch);
            self.advance();
        }
        word
    }
}

/// Tokenize `source` and return just the token texts.
pub fn tokenize(source: &str) -> Vec<String> {
    Lexer::new(source)
        .lex()
        .into_iter()
        .map(|t| t.text().to_string())
        .collect()
}
