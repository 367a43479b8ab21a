//! The Vesper tokenizer.

use crate::token::{Token, TokenKind};
use vesper_common::Span;

/// The Vesper tokenizer.
///
/// Converts source text into a sequence of tokens. Whitespace (including
/// newlines) is purely a separator and never reaches the reader.
pub struct Lexer<'src> {
    /// Character iterator with position info.
    chars: std::iter::Peekable<std::str::CharIndices<'src>>,
    /// Current byte position in source.
    pos: usize,
}

impl<'src> Lexer<'src> {
    /// Create a new lexer for the given source text.
    pub fn new(source: &'src str) -> Self {
        Self {
            chars: source.char_indices().peekable(),
            pos: 0,
        }
    }

    /// Tokenize the entire source. The final token is always `Eof`.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            let token = self.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }

        tokens
    }

    fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let start = self.pos;

        let Some((_pos, ch)) = self.advance() else {
            return Token::new(TokenKind::Eof, Span::from_usize(start, start));
        };

        let kind = match ch {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            _ => {
                // Maximal run of non-whitespace, non-parenthesis characters.
                let mut text = String::new();
                text.push(ch);
                while let Some(&(_, next)) = self.chars.peek() {
                    if next.is_whitespace() || next == '(' || next == ')' {
                        break;
                    }
                    text.push(next);
                    self.advance();
                }
                TokenKind::Atom(text)
            }
        };

        Token::new(kind, Span::from_usize(start, self.pos))
    }

    fn advance(&mut self) -> Option<(usize, char)> {
        let item = self.chars.next();
        if let Some((pos, ch)) = item {
            self.pos = pos + ch.len_utf8();
        }
        item
    }

    fn skip_whitespace(&mut self) {
        while let Some(&(_, ch)) = self.chars.peek() {
            if ch.is_whitespace() {
                self.advance();
            } else {
                break;
            }
        }
    }
}
