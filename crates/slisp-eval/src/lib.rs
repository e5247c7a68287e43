//! slisp tree-walking evaluator.
//!
//! [`Interpreter`] ties the pipeline together: it parses one expression into
//! its `ast`, evaluates it against its own [`Environment`], and accumulates
//! drawable results.

pub mod builtins;
pub mod env;
pub mod evaluator;
pub mod interpreter;

pub use builtins::{Arity, Procedure};
pub use env::{Binding, Environment};
pub use evaluator::{evaluate, Evaluator, SpecialForm};
pub use interpreter::Interpreter;
pub use slisp_types::{EvalResult, InterpreterSemanticError, SemanticErrorKind};
