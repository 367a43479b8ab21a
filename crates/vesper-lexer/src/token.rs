//! Token definitions for Vesper.

use vesper_common::Span;

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// The kind of a token.
///
/// The grammar has no string literals, comments, or reader macros, so a
/// token is either a parenthesis, an undifferentiated atom (classified by
/// the reader), or end of input.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    LParen, // (
    RParen, // )
    Atom(String),
    Eof,
}
