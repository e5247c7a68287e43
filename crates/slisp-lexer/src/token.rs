//! Token types for the slisp lexer.

use slisp_types::Span;
use std::fmt;

/// A single token produced by the lexer.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    /// Position of the token's first character.
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The token's source text.
    pub fn text(&self) -> &str {
        match &self.kind {
            TokenKind::Open => "(",
            TokenKind::Close => ")",
            TokenKind::Word(text) => text,
        }
    }
}

/// Every token kind in slisp.
///
/// Words are left unclassified; the parser turns them into atoms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    Open,
    /// `)`
    Close,
    /// Maximal run of non-whitespace, non-parenthesis characters.
    Word(String),
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open => write!(f, "("),
            Self::Close => write!(f, ")"),
            Self::Word(text) => write!(f, "{text}"),
        }
    }
}
