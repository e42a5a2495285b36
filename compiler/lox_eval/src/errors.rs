//! Runtime errors and their constructors.
//!
//! Every runtime fault message is built here, so the wording lives in one
//! place.

use lox_diagnostic::Diagnostic;
use lox_ir::Token;
use thiserror::Error;

/// A runtime fault, carrying the token it is blamed on.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("{message}")]
pub struct RuntimeError {
    pub token: Token,
    pub message: String,
}

impl RuntimeError {
    pub fn new(token: &Token, message: impl Into<String>) -> Self {
        RuntimeError {
            token: token.clone(),
            message: message.into(),
        }
    }

    pub fn line(&self) -> u32 {
        self.token.line
    }

    /// Runtime faults carry no location label.
    pub fn to_diagnostic(&self) -> Diagnostic {
        Diagnostic::at_line(self.token.line, self.message.clone())
    }
}

/// Unary `-` on a non-number.
#[cold]
pub fn operand_must_be_number(operator: &Token) -> RuntimeError {
    RuntimeError::new(
        operator,
        format!("Operand of '{}' must be a number.", operator.lexeme),
    )
}

/// Arithmetic or comparison on non-numbers.
#[cold]
pub fn operands_must_be_numbers(operator: &Token) -> RuntimeError {
    RuntimeError::new(
        operator,
        format!("Operands of '{}' must be numbers.", operator.lexeme),
    )
}

/// `+` where neither side is a string and not both are numbers.
#[cold]
pub fn invalid_addition_operands(operator: &Token) -> RuntimeError {
    RuntimeError::new(
        operator,
        format!(
            "Operands of '{}' must be two numbers or two strings.",
            operator.lexeme
        ),
    )
}

/// Read of a name bound nowhere.
#[cold]
pub fn undefined_variable(name: &Token) -> RuntimeError {
    RuntimeError::new(name, format!("Undefined variable '{}'.", name.lexeme))
}

/// Assignment to a name bound nowhere.
#[cold]
pub fn undefined_assignment_target(name: &Token) -> RuntimeError {
    RuntimeError::new(
        name,
        format!("Cannot assign to undefined variable '{}'.", name.lexeme),
    )
}

/// Operator token that is not valid in this position. Only reachable with
/// hand-built trees.
#[cold]
pub fn unsupported_operator(operator: &Token) -> RuntimeError {
    RuntimeError::new(
        operator,
        format!("Unsupported operator '{}'.", operator.lexeme),
    )
}
