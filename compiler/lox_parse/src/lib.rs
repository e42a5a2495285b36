//! Recursive descent parser for Lox.
//!
//! Consumes the scanner's token slice and produces a program (a sequence of
//! statements). Parsing never stops at the first error: a malformed
//! declaration is recorded, the parser synchronizes to the next statement
//! boundary, and parsing resumes. Callers must check
//! [`ParseOutput::has_errors`] before trusting the statements.

mod cursor;
mod error;
mod grammar;
pub mod recovery;

pub use cursor::Cursor;
pub use error::ParseError;
pub use recovery::{synchronize, TokenSet, DECLARATION_START};

use lox_ir::{Expr, Stmt, Token, TokenKind};
use tracing::debug;

/// Statements and errors from parsing a whole program.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParseOutput {
    pub statements: Vec<Stmt>,
    pub errors: Vec<ParseError>,
}

impl ParseOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// What one line of interactive input turned out to be.
#[derive(Clone, Debug, PartialEq)]
pub enum ReplInput {
    /// A single expression with no trailing `;`. Its value gets printed.
    Expression(Expr),
    /// Ordinary statements, executed as a program.
    Statements(Vec<Stmt>),
}

/// Result of parsing one interactive input.
#[derive(Clone, Debug, PartialEq)]
pub struct ReplOutput {
    pub input: ReplInput,
    pub errors: Vec<ParseError>,
}

impl ReplOutput {
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Parser state.
pub struct Parser<'a> {
    pub(crate) cursor: Cursor<'a>,
    pub(crate) errors: Vec<ParseError>,
}

impl<'a> Parser<'a> {
    /// Create a parser over `tokens`, which should end with `Eof`.
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            errors: Vec::new(),
        }
    }

    /// `program -> declaration* EOF`
    pub fn parse_program(mut self) -> ParseOutput {
        let mut statements = Vec::new();
        while !self.cursor.is_at_end() {
            if let Some(stmt) = self.declaration_or_recover() {
                statements.push(stmt);
            }
        }

        debug!(
            statements = statements.len(),
            errors = self.errors.len(),
            "parsed program"
        );
        ParseOutput {
            statements,
            errors: self.errors,
        }
    }

    /// Parse one line of interactive input.
    ///
    /// Only the first declaration may be a bare expression, and only when
    /// the input ends right after it. Everything else parses as a program.
    pub fn parse_repl_input(mut self) -> ReplOutput {
        let mut statements = Vec::new();

        if !self.cursor.is_at_end() {
            match self.repl_head() {
                Ok(ReplInput::Expression(expr)) => {
                    debug!(errors = self.errors.len(), "parsed bare expression");
                    return ReplOutput {
                        input: ReplInput::Expression(expr),
                        errors: self.errors,
                    };
                }
                Ok(ReplInput::Statements(head)) => statements.extend(head),
                Err(err) => self.recover(err),
            }
        }

        let rest = self.parse_program();
        statements.extend(rest.statements);
        ReplOutput {
            input: ReplInput::Statements(statements),
            errors: rest.errors,
        }
    }

    /// First declaration of an interactive line.
    fn repl_head(&mut self) -> Result<ReplInput, ParseError> {
        let starts_statement = matches!(
            self.cursor.current_kind(),
            TokenKind::Var
                | TokenKind::Print
                | TokenKind::If
                | TokenKind::While
                | TokenKind::LeftBrace
        );
        if starts_statement {
            return Ok(ReplInput::Statements(vec![self.declaration()?]));
        }

        let expr = self.expression()?;
        if self.cursor.is_at_end() {
            return Ok(ReplInput::Expression(expr));
        }
        self.cursor
            .expect(TokenKind::Semicolon, "Expect ';' after expression.")?;
        Ok(ReplInput::Statements(vec![Stmt::Expression(expr)]))
    }

    /// Parse a declaration, entering panic mode on failure. A failed
    /// declaration yields no statement.
    pub(crate) fn declaration_or_recover(&mut self) -> Option<Stmt> {
        match self.declaration() {
            Ok(stmt) => Some(stmt),
            Err(err) => {
                self.recover(err);
                None
            }
        }
    }

    fn recover(&mut self, err: ParseError) {
        debug!(
            line = err.token.line,
            message = %err.message,
            "parse error"
        );
        self.errors.push(err);
        synchronize(&mut self.cursor);
    }
}

/// Parse a token sequence into a program.
pub fn parse(tokens: &[Token]) -> ParseOutput {
    Parser::new(tokens).parse_program()
}

/// Parse one line of interactive input.
pub fn parse_repl(tokens: &[Token]) -> ReplOutput {
    Parser::new(tokens).parse_repl_input()
}
