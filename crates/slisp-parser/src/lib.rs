//! slisp parser: converts a token stream into a single expression tree.

mod parser;

pub use parser::{parse_expression, parse_source, Parser};
