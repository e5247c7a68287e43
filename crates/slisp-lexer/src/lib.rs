//! slisp lexer: converts source text into a token stream and classifies
//! individual tokens into atoms.

pub mod classify;
pub mod lexer;
pub mod token;

pub use classify::{classify, is_number};
pub use lexer::{tokenize, Lexer};
pub use token::{Token, TokenKind};
