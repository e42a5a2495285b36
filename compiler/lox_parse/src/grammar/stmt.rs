//! Declaration and statement productions.

use lox_ir::{Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::{ParseError, Parser};

impl Parser<'_> {
    /// `declaration -> varDecl | statement`
    pub(crate) fn declaration(&mut self) -> Result<Stmt, ParseError> {
        ensure_sufficient_stack(|| {
            if self.cursor.eat_any(&[TokenKind::Var]) {
                self.var_declaration()
            } else {
                self.statement()
            }
        })
    }

    fn var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let name = self
            .cursor
            .expect(TokenKind::Identifier, "Expect variable name.")?;

        let initializer = if self.cursor.eat_any(&[TokenKind::Equal]) {
            Some(self.expression()?)
        } else {
            None
        };

        self.cursor.expect(
            TokenKind::Semicolon,
            "Expect ';' after variable declaration.",
        )?;
        Ok(Stmt::Var { name, initializer })
    }

    pub(crate) fn statement(&mut self) -> Result<Stmt, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Print => {
                self.cursor.advance();
                self.print_statement()
            }
            TokenKind::If => {
                self.cursor.advance();
                self.if_statement()
            }
            TokenKind::While => {
                self.cursor.advance();
                self.while_statement()
            }
            TokenKind::LeftBrace => {
                self.cursor.advance();
                Ok(Stmt::Block(self.block()?))
            }
            _ => self.expression_statement(),
        }
    }

    fn print_statement(&mut self) -> Result<Stmt, ParseError> {
        let value = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after value.")?;
        Ok(Stmt::Print(value))
    }

    fn if_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'if'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after if condition.")?;

        let then_branch = Box::new(self.statement()?);
        // A dangling `else` binds to the nearest `if`.
        let else_branch = if self.cursor.eat_any(&[TokenKind::Else]) {
            Some(Box::new(self.statement()?))
        } else {
            None
        };

        Ok(Stmt::If {
            condition,
            then_branch,
            else_branch,
        })
    }

    fn while_statement(&mut self) -> Result<Stmt, ParseError> {
        self.cursor
            .expect(TokenKind::LeftParen, "Expect '(' after 'while'.")?;
        let condition = self.expression()?;
        self.cursor
            .expect(TokenKind::RightParen, "Expect ')' after condition.")?;
        let body = Box::new(self.statement()?);
        Ok(Stmt::While { condition, body })
    }

    /// Statements up to the closing `}`. Errors inside the block are
    /// recorded and recovered from without abandoning the block.
    fn block(&mut self) -> Result<Vec<Stmt>, ParseError> {
        let mut statements = Vec::new();
        while !self.cursor.check(TokenKind::RightBrace) && !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration_or_recover() {
                statements.push(stmt);
            }
        }
        self.cursor
            .expect(TokenKind::RightBrace, "Expect '}' after block.")?;
        Ok(statements)
    }

    pub(crate) fn expression_statement(&mut self) -> Result<Stmt, ParseError> {
        let expr = self.expression()?;
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(Stmt::Expression(expr))
    }
}
