use crate::Span;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

// ══════════════════════════════════════════════════════════════════════════════
// Syntax errors
// ══════════════════════════════════════════════════════════════════════════════

/// Why a parse failed.
///
/// `Interpreter::parse` reports these as a plain `false`; the value is kept
/// for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum ParseError {
    #[error("input contains no expression")]
    Empty,

    #[error("{span}: missing ')' before end of input")]
    UnexpectedEof { span: Span },

    #[error("{span}: unmatched ')'")]
    UnmatchedClose { span: Span },

    #[error("{span}: invalid token '{token}'")]
    InvalidToken { token: String, span: Span },

    #[error("{span}: expected an operator after '('")]
    MissingOperator { span: Span },

    #[error("{span}: unexpected input after the expression")]
    TrailingInput { span: Span },

    #[error("{span}: nesting deeper than {limit} levels")]
    TooDeep { limit: usize, span: Span },

    #[error("could not read input: {message}")]
    Io { message: String },
}

// ══════════════════════════════════════════════════════════════════════════════
// Semantic errors
// ══════════════════════════════════════════════════════════════════════════════

/// Category of a semantic error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SemanticErrorKind {
    /// Wrong number of operands or arguments.
    Arity,
    /// Operand or argument of the wrong atom variant.
    Type,
    UnboundSymbol,
    UnknownProcedure,
    /// `define` targeting a built-in name.
    Redefinition,
    DivisionByZero,
    /// `eval` called without a successfully parsed expression.
    NoExpression,
}

impl fmt::Display for SemanticErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Arity => "arity",
            Self::Type => "type",
            Self::UnboundSymbol => "unbound symbol",
            Self::UnknownProcedure => "unknown procedure",
            Self::Redefinition => "redefinition",
            Self::DivisionByZero => "division by zero",
            Self::NoExpression => "no expression",
        };
        f.write_str(name)
    }
}

/// The single error type produced by evaluation.
///
/// Collaborators show `message` to the user; `kind` is available for
/// programmatic checks.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[error("Error: {message}")]
pub struct InterpreterSemanticError {
    pub kind: SemanticErrorKind,
    pub message: String,
}

impl InterpreterSemanticError {
    pub fn new(kind: SemanticErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn arity(message: impl Into<String>) -> Self {
        Self::new(SemanticErrorKind::Arity, message)
    }

    pub fn type_mismatch(message: impl Into<String>) -> Self {
        Self::new(SemanticErrorKind::Type, message)
    }
}

/// Result alias for evaluator operations.
pub type EvalResult<T> = Result<T, InterpreterSemanticError>;
