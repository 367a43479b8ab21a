//! The Vesper reader.

use num_bigint::BigInt;
use thiserror::Error;
use vesper_common::Span;
use vesper_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use vesper_lexer::{Token, TokenKind};
use vesper_syntax::Expr;

/// Reader failures. Both are the "malformed form" family: the token
/// stream cannot be shaped into an expression.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ReadError {
    #[error("unexpected end of input while reading a form")]
    UnexpectedEof(Span),

    #[error("unexpected `)`")]
    UnexpectedClose(Span),
}

impl ReadError {
    pub fn span(&self) -> Span {
        match self {
            ReadError::UnexpectedEof(span) | ReadError::UnexpectedClose(span) => *span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let (code, label) = match self {
            ReadError::UnexpectedEof(_) => (ErrorCode::UnexpectedEof, "form is still open here"),
            ReadError::UnexpectedClose(_) => (ErrorCode::UnexpectedCloseParen, "no opener for this"),
        };
        Diagnostic::error(DiagnosticKind::Reader, self.span(), self.to_string())
            .with_code(code)
            .with_label(Label::new(self.span(), label))
    }
}

/// The Vesper reader: a cursor over a token sequence.
pub struct Reader {
    tokens: Vec<Token>,
    pos: usize,
}

impl Reader {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    /// True once only the trailing `Eof` token remains.
    pub fn at_end(&self) -> bool {
        matches!(self.current_kind(), TokenKind::Eof)
    }

    /// Read exactly one expression, consuming its tokens.
    pub fn read_expr(&mut self) -> Result<Expr, ReadError> {
        let token = self.advance();
        match token.kind {
            TokenKind::LParen => {
                let mut items = Vec::new();
                loop {
                    match self.current_kind() {
                        TokenKind::RParen => {
                            self.advance(); // discard `)`
                            return Ok(Expr::List(items));
                        }
                        TokenKind::Eof => {
                            return Err(ReadError::UnexpectedEof(self.current_span()));
                        }
                        _ => items.push(self.read_expr()?),
                    }
                }
            }
            TokenKind::RParen => Err(ReadError::UnexpectedClose(token.span)),
            TokenKind::Atom(text) => Ok(classify_atom(&text)),
            TokenKind::Eof => Err(ReadError::UnexpectedEof(token.span)),
        }
    }

    fn current_kind(&self) -> &TokenKind {
        &self.tokens[self.pos].kind
    }

    fn current_span(&self) -> Span {
        self.tokens[self.pos].span
    }

    fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        if token.kind != TokenKind::Eof {
            self.pos += 1;
        }
        token
    }
}

/// Numbers become numbers; every other token is a symbol.
fn classify_atom(text: &str) -> Expr {
    if let Ok(n) = text.parse::<BigInt>() {
        return Expr::Int(n);
    }
    if let Ok(x) = text.parse::<f64>() {
        return Expr::Float(x);
    }
    Expr::Symbol(text.to_owned())
}
