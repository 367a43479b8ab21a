//! Reader for Vesper.
//!
//! This crate provides the recursive-descent reader that turns a token
//! sequence into an `Expr` tree. Reading consumes tokens from the front;
//! one call to [`Reader::read_expr`] reads exactly one top-level
//! expression and leaves the rest in place, so callers that need a whole
//! program read repeatedly until the tokens are exhausted.

mod reader;

pub use reader::{ReadError, Reader};

use vesper_lexer::Lexer;
use vesper_syntax::Expr;

/// Read the first expression from source text.
pub fn parse(source: &str) -> Result<Expr, ReadError> {
    let tokens = Lexer::new(source).tokenize();
    Reader::new(tokens).read_expr()
}

/// Read every top-level expression from source text.
pub fn parse_all(source: &str) -> Result<Vec<Expr>, ReadError> {
    let tokens = Lexer::new(source).tokenize();
    let mut reader = Reader::new(tokens);
    let mut exprs = Vec::new();
    while !reader.at_end() {
        exprs.push(reader.read_expr()?);
    }
    Ok(exprs)
}
