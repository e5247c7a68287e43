//! Shared types for slisp.
//!
//! This crate defines the tagged atom and expression tree shared by every
//! stage, source spans, the two error channels (syntax and semantic), and
//! interpreter configuration.

mod config;
mod error;
mod expression;
mod span;

pub use config::{InterpreterConfig, DEFAULT_MAX_DEPTH};
pub use error::{EvalResult, InterpreterSemanticError, ParseError, SemanticErrorKind};
pub use expression::{Atom, AtomKind, Expression, Point};
pub use span::Span;
