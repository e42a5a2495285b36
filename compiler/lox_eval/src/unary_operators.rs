//! Unary operator implementations for the evaluator.

use lox_ir::{Token, TokenKind};

use crate::errors::{operand_must_be_number, unsupported_operator, RuntimeError};
use crate::Value;

/// Evaluate `<operator> value`.
pub fn evaluate_unary(operator: &Token, value: Value) -> Result<Value, RuntimeError> {
    match (operator.kind, value) {
        (TokenKind::Minus, Value::Number(n)) => Ok(Value::Number(-n)),
        (TokenKind::Minus, _) => Err(operand_must_be_number(operator)),
        // Logical not applies to any value via truthiness.
        (TokenKind::Bang, value) => Ok(Value::Bool(!value.is_truthy())),
        _ => Err(unsupported_operator(operator)),
    }
}
