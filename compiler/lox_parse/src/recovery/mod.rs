//! Error recovery for the parser.
//!
//! Provides token sets and panic-mode synchronization for continuing
//! parsing after errors. Membership uses a bitset for O(1) testing.

use lox_ir::TokenKind;
use tracing::trace;

use crate::cursor::Cursor;

/// A set of token kinds, one bit per `TokenKind` discriminant.
///
/// ```ignore
/// const OPERATORS: TokenSet = TokenSet::new()
///     .with(TokenKind::Plus)
///     .with(TokenKind::Minus);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TokenSet(u64);

impl TokenSet {
    /// Create an empty token set.
    #[inline]
    pub const fn new() -> Self {
        Self(0)
    }

    /// Add a token kind to this set (builder for const contexts).
    #[inline]
    #[must_use]
    pub const fn with(self, kind: TokenKind) -> Self {
        Self(self.0 | (1u64 << kind.discriminant_index()))
    }

    #[inline]
    pub const fn contains(&self, kind: TokenKind) -> bool {
        (self.0 & (1u64 << kind.discriminant_index())) != 0
    }
}

/// Keywords that begin a new declaration or statement. Panic mode stops
/// in front of these.
pub const DECLARATION_START: TokenSet = TokenSet::new()
    .with(TokenKind::Class)
    .with(TokenKind::Fun)
    .with(TokenKind::Var)
    .with(TokenKind::For)
    .with(TokenKind::If)
    .with(TokenKind::While)
    .with(TokenKind::Print)
    .with(TokenKind::Return);

/// Discard tokens until a statement boundary.
///
/// Always consumes the offending token first, then stops just after a `;`
/// or just before a token in [`DECLARATION_START`] or at `Eof`.
pub fn synchronize(cursor: &mut Cursor<'_>) {
    let start = cursor.position();
    cursor.advance();

    while !cursor.is_at_end() {
        if cursor.previous().kind == TokenKind::Semicolon {
            break;
        }
        if DECLARATION_START.contains(cursor.current_kind()) {
            break;
        }
        cursor.advance();
    }

    trace!(
        from = start,
        to = cursor.position(),
        "synchronized after parse error"
    );
}
