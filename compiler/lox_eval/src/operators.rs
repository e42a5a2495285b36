//! Binary operator implementations for the evaluator.
//!
//! Direct dispatch on the operator kind and operand variants. Operands are
//! already evaluated, left before right.

use lox_ir::{Token, TokenKind};

use crate::errors::{
    invalid_addition_operands, operands_must_be_numbers, unsupported_operator, RuntimeError,
};
use crate::Value;

/// Evaluate `left <operator> right`.
pub fn evaluate_binary(left: Value, operator: &Token, right: Value) -> Result<Value, RuntimeError> {
    match operator.kind {
        TokenKind::Plus => add(left, operator, right),
        TokenKind::Minus => arithmetic(&left, operator, &right, |a, b| a - b),
        TokenKind::Star => arithmetic(&left, operator, &right, |a, b| a * b),
        // IEEE division: dividing by zero yields an infinity or NaN.
        TokenKind::Slash => arithmetic(&left, operator, &right, |a, b| a / b),
        TokenKind::Greater => comparison(&left, operator, &right, |a, b| a > b),
        TokenKind::GreaterEqual => comparison(&left, operator, &right, |a, b| a >= b),
        TokenKind::Less => comparison(&left, operator, &right, |a, b| a < b),
        TokenKind::LessEqual => comparison(&left, operator, &right, |a, b| a <= b),
        TokenKind::EqualEqual => Ok(Value::Bool(left.equals(&right))),
        TokenKind::BangEqual => Ok(Value::Bool(!left.equals(&right))),
        _ => Err(unsupported_operator(operator)),
    }
}

/// Numbers add, strings concatenate. With exactly one string operand the
/// other side is converted to its display text first.
fn add(left: Value, operator: &Token, right: Value) -> Result<Value, RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok(Value::Number(a + b)),
        (Value::Str(mut a), Value::Str(b)) => {
            a.push_str(&b);
            Ok(Value::Str(a))
        }
        (Value::Str(mut a), other) => {
            a.push_str(&other.to_string());
            Ok(Value::Str(a))
        }
        (other, Value::Str(b)) => Ok(Value::Str(format!("{other}{b}"))),
        _ => Err(invalid_addition_operands(operator)),
    }
}

#[inline]
fn number_operands(left: &Value, operator: &Token, right: &Value) -> Result<(f64, f64), RuntimeError> {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => Ok((*a, *b)),
        _ => Err(operands_must_be_numbers(operator)),
    }
}

fn arithmetic(
    left: &Value,
    operator: &Token,
    right: &Value,
    op: fn(f64, f64) -> f64,
) -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(left, operator, right)?;
    Ok(Value::Number(op(a, b)))
}

fn comparison(
    left: &Value,
    operator: &Token,
    right: &Value,
    op: fn(f64, f64) -> bool,
) -> Result<Value, RuntimeError> {
    let (a, b) = number_operands(left, operator, right)?;
    Ok(Value::Bool(op(a, b)))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn op(kind: TokenKind, lexeme: &str) -> Token {
        Token::new(kind, lexeme, None, 1)
    }

    fn plus() -> Token {
        op(TokenKind::Plus, "+")
    }

    #[test]
    fn adds_numbers() {
        let result = evaluate_binary(Value::Number(1.0), &plus(), Value::Number(2.0));
        assert_eq!(result.unwrap(), Value::Number(3.0));
    }

    #[test]
    fn concatenates_strings() {
        let result = evaluate_binary(Value::from("foo"), &plus(), Value::from("bar"));
        assert_eq!(result.unwrap(), Value::from("foobar"));
    }

    #[test]
    fn coerces_one_string_operand() {
        let right = evaluate_binary(Value::from("foo"), &plus(), Value::Number(1.0));
        assert_eq!(right.unwrap(), Value::from("foo1"));

        let left = evaluate_binary(Value::Number(2.5), &plus(), Value::from("x"));
        assert_eq!(left.unwrap(), Value::from("2.5x"));

        let boolean = evaluate_binary(Value::Bool(true), &plus(), Value::from("!"));
        assert_eq!(boolean.unwrap(), Value::from("true!"));

        let nil = evaluate_binary(Value::from("a"), &plus(), Value::Nil);
        assert_eq!(nil.unwrap(), Value::from("anil"));
    }

    #[test]
    fn rejects_other_addition() {
        let err = evaluate_binary(Value::Number(1.0), &plus(), Value::Bool(true)).unwrap_err();
        assert_eq!(
            err.message,
            "Operands of '+' must be two numbers or two strings."
        );
        assert_eq!(err.token.lexeme, "+");
    }

    #[test]
    fn arithmetic_requires_numbers() {
        let minus = op(TokenKind::Minus, "-");
        let err = evaluate_binary(Value::from("a"), &minus, Value::Number(1.0)).unwrap_err();
        assert_eq!(err.message, "Operands of '-' must be numbers.");

        let less = op(TokenKind::Less, "<");
        let err = evaluate_binary(Value::Nil, &less, Value::Number(1.0)).unwrap_err();
        assert_eq!(err.message, "Operands of '<' must be numbers.");
    }

    #[test]
    fn division_follows_ieee() {
        let slash = op(TokenKind::Slash, "/");
        let result = evaluate_binary(Value::Number(1.0), &slash, Value::Number(0.0));
        assert_eq!(result.unwrap(), Value::Number(f64::INFINITY));
    }

    #[test]
    fn comparisons() {
        let ge = op(TokenKind::GreaterEqual, ">=");
        let result = evaluate_binary(Value::Number(2.0), &ge, Value::Number(2.0));
        assert_eq!(result.unwrap(), Value::Bool(true));
    }

    #[test]
    fn equality_across_types() {
        let eq = op(TokenKind::EqualEqual, "==");
        let ne = op(TokenKind::BangEqual, "!=");
        assert_eq!(
            evaluate_binary(Value::Nil, &eq, Value::Nil).unwrap(),
            Value::Bool(true)
        );
        assert_eq!(
            evaluate_binary(Value::Number(1.0), &eq, Value::from("1")).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            evaluate_binary(Value::Nil, &ne, Value::Bool(false)).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn non_binary_operator_is_rejected() {
        let bang = op(TokenKind::Bang, "!");
        let err = evaluate_binary(Value::Nil, &bang, Value::Nil).unwrap_err();
        assert_eq!(err.message, "Unsupported operator '!'.");
    }
}
