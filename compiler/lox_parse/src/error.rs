//! Parse error type.

use lox_diagnostic::Diagnostic;
use lox_ir::Token;
use thiserror::Error;

/// A syntax error at a specific token.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct ParseError {
    /// Token the parser was looking at when it gave up.
    pub token: Token,
    pub message: String,
}

impl ParseError {
    #[cold]
    pub fn new(token: Token, message: impl Into<String>) -> Self {
        ParseError {
            token,
            message: message.into(),
        }
    }

    /// Location label: ` at end` for `Eof`, ` at 'lexeme'` otherwise.
    pub fn location(&self) -> String {
        if self.token.is_eof() {
            " at end".to_string()
        } else {
            format!(" at '{}'", self.token.lexeme)
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::new(self.token.line, self.location(), self.message.clone())
    }
}
