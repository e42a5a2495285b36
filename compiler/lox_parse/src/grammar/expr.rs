//! Expression productions.
//!
//! Binary levels fold left iteratively. Assignment recurses on its right
//! side, so it is right-associative.

use lox_ir::{Expr, Literal, LiteralValue, Token, TokenKind};
use lox_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

const EQUALITY_OPS: &[TokenKind] = &[TokenKind::BangEqual, TokenKind::EqualEqual];
const COMPARISON_OPS: &[TokenKind] = &[
    TokenKind::Greater,
    TokenKind::GreaterEqual,
    TokenKind::Less,
    TokenKind::LessEqual,
];
const TERM_OPS: &[TokenKind] = &[TokenKind::Minus, TokenKind::Plus];
const FACTOR_OPS: &[TokenKind] = &[TokenKind::Slash, TokenKind::Star];
const UNARY_OPS: &[TokenKind] = &[TokenKind::Bang, TokenKind::Minus];

type Production<'a> = fn(&mut Parser<'a>) -> Result<Expr, ParseError>;

impl<'a> Parser<'a> {
    pub(crate) fn expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.assignment())
    }

    /// The left side is parsed as an ordinary expression and only checked
    /// once an `=` shows up. A bad target is recorded but does not unwind.
    fn assignment(&mut self) -> Result<Expr, ParseError> {
        let expr = self.or()?;

        if !self.cursor.eat_any(&[TokenKind::Equal]) {
            return Ok(expr);
        }

        let equals = self.cursor.previous().clone();
        let value = self.expression()?;

        if let Expr::Variable(name) = &expr {
            return Ok(Expr::assign(name.clone(), value));
        }

        trace!(line = equals.line, "invalid assignment target");
        self.errors
            .push(ParseError::new(equals, "Invalid assignment target."));
        Ok(expr)
    }

    fn or(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.and()?;
        while self.cursor.eat_any(&[TokenKind::Or]) {
            let operator = self.cursor.previous().clone();
            let right = self.and()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    fn and(&mut self) -> Result<Expr, ParseError> {
        let mut expr = self.equality()?;
        while self.cursor.eat_any(&[TokenKind::And]) {
            let operator = self.cursor.previous().clone();
            let right = self.equality()?;
            expr = Expr::logical(expr, operator, right);
        }
        Ok(expr)
    }

    fn equality(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(EQUALITY_OPS, Parser::comparison)
    }

    fn comparison(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(COMPARISON_OPS, Parser::term)
    }

    fn term(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(TERM_OPS, Parser::factor)
    }

    fn factor(&mut self) -> Result<Expr, ParseError> {
        self.binary_level(FACTOR_OPS, Parser::unary)
    }

    /// `operand (op operand)*`, folded to the left.
    fn binary_level(
        &mut self,
        operators: &[TokenKind],
        operand: Production<'a>,
    ) -> Result<Expr, ParseError> {
        let mut expr = operand(self)?;
        while self.cursor.eat_any(operators) {
            let operator = self.cursor.previous().clone();
            let right = operand(self)?;
            expr = Expr::binary(expr, operator, right);
        }
        Ok(expr)
    }

    fn unary(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| {
            if self.cursor.eat_any(UNARY_OPS) {
                let operator = self.cursor.previous().clone();
                let right = self.unary()?;
                Ok(Expr::unary(operator, right))
            } else {
                self.primary()
            }
        })
    }

    fn primary(&mut self) -> Result<Expr, ParseError> {
        let expr = match self.cursor.current_kind() {
            TokenKind::False => Expr::Literal(LiteralValue::Bool(false)),
            TokenKind::True => Expr::Literal(LiteralValue::Bool(true)),
            TokenKind::Nil => Expr::Literal(LiteralValue::Nil),
            TokenKind::Number | TokenKind::String => {
                Expr::Literal(literal_value(self.cursor.current()))
            }
            TokenKind::Identifier => Expr::Variable(self.cursor.current().clone()),
            TokenKind::LeftParen => {
                self.cursor.advance();
                let inner = self.expression()?;
                self.cursor
                    .expect(TokenKind::RightParen, "Expect ')' after expression.")?;
                return Ok(Expr::grouping(inner));
            }
            _ => {
                return Err(ParseError::new(
                    self.cursor.current().clone(),
                    "Expect expression.",
                ));
            }
        };
        self.cursor.advance();
        Ok(expr)
    }
}

fn literal_value(token: &Token) -> LiteralValue {
    match &token.literal {
        Some(Literal::Number(n)) => LiteralValue::Number(*n),
        Some(Literal::Str(s)) => LiteralValue::Str(s.clone()),
        None => LiteralValue::Nil,
    }
}
