//! Token cursor for navigating the token stream.
//!
//! Provides token access, one-token lookahead and consumption.

use lox_ir::{Token, TokenKind};
use tracing::trace;

use crate::ParseError;

/// Cursor over a scanned token slice.
///
/// The slice is expected to end with `Eof`. If it does not, reads past the
/// end see a synthetic `Eof` so the cursor never runs off the slice.
pub struct Cursor<'a> {
    tokens: &'a [Token],
    pos: usize,
    eof: Token,
}

impl<'a> Cursor<'a> {
    /// Create a cursor at the start of `tokens`.
    pub fn new(tokens: &'a [Token]) -> Self {
        let last_line = tokens.last().map_or(1, |t| t.line);
        Cursor {
            tokens,
            pos: 0,
            eof: Token::eof(last_line),
        }
    }

    /// Index of the current token.
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        self.tokens.get(self.pos).unwrap_or(&self.eof)
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    /// The most recently consumed token. Before any advance this is the
    /// synthetic `Eof`.
    #[inline]
    pub fn previous(&self) -> &Token {
        self.pos
            .checked_sub(1)
            .and_then(|i| self.tokens.get(i))
            .unwrap_or(&self.eof)
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::Eof
    }

    /// Check the current token's kind. Always false at end of input.
    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        !self.is_at_end() && self.current_kind() == kind
    }

    /// Consume the current token and return it. Stays put on `Eof`.
    pub fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            let token = self.current();
            trace!(
                pos = self.pos,
                kind = %token.kind,
                line = token.line,
                "advance"
            );
            self.pos += 1;
        }
        self.previous()
    }

    /// Consume the current token if it is any of `kinds`.
    pub fn eat_any(&mut self, kinds: &[TokenKind]) -> bool {
        if kinds.iter().any(|&kind| self.check(kind)) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consume a token of `kind`, or fail with `message` at the current token.
    pub fn expect(&mut self, kind: TokenKind, message: &str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance().clone())
        } else {
            Err(ParseError::new(self.current().clone(), message))
        }
    }
}
