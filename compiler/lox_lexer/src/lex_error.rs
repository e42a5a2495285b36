//! Lexical errors.

use lox_diagnostic::Diagnostic;
use thiserror::Error;

/// What went wrong while scanning.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// A character that starts no token. It is skipped.
    #[error("Unexpected character.")]
    UnexpectedCharacter(char),
    /// A `"` with no closing quote before end of input.
    #[error("Unterminated string.")]
    UnterminatedString,
}

/// A lexical error and the line it was found on.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Error)]
#[error("[line {line}] {kind}")]
pub struct LexError {
    pub line: u32,
    pub kind: LexErrorKind,
}

impl LexError {
    pub fn new(line: u32, kind: LexErrorKind) -> Self {
        LexError { line, kind }
    }

    /// Lexical errors carry no location label.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_line(self.line, self.kind.to_string())
    }
}
