//! Tokenizer for Vesper.
//!
//! Splits source text into a flat sequence of tokens: `(` and `)` are
//! always standalone, everything else is a maximal non-whitespace run.
//! Malformed input is not a lexer concern; it is deferred to the reader.

mod lexer;
mod token;

pub use lexer::Lexer;
pub use token::{Token, TokenKind};
