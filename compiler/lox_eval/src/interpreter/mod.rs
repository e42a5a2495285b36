//! The tree-walking interpreter.
//!
//! `execute` runs statements, `evaluate` computes expression values. Both
//! are exhaustive matches over the node enums and recurse under the stack
//! guard, so deeply nested programs do not overflow the native stack.

mod builder;
mod scope_guard;

pub use builder::InterpreterBuilder;
pub use scope_guard::ScopedInterpreter;

use lox_ir::{Expr, Stmt, TokenKind};
use lox_stack::ensure_sufficient_stack;

use crate::errors::{self, RuntimeError};
use crate::{evaluate_binary, evaluate_unary, AssignError, Environment, SharedPrintHandler, Value};

/// Tree-walking interpreter.
///
/// Holds the global environment, which persists across calls to
/// [`Interpreter::interpret`]. That is what lets an interactive session see
/// variables from earlier lines.
pub struct Interpreter {
    pub(crate) env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter printing to stdout with an empty global scope.
    pub fn new() -> Self {
        InterpreterBuilder::new().build()
    }

    pub fn builder() -> InterpreterBuilder {
        InterpreterBuilder::new()
    }

    pub fn environment(&self) -> &Environment {
        &self.env
    }

    pub fn environment_mut(&mut self) -> &mut Environment {
        &mut self.env
    }

    pub fn print_handler(&self) -> &SharedPrintHandler {
        &self.print_handler
    }

    /// Execute a program.
    ///
    /// Stops at the first runtime fault. Output printed before the fault
    /// stays printed and bindings made before it stay bound.
    pub fn interpret(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        for stmt in statements {
            self.execute(stmt)?;
        }
        Ok(())
    }

    /// Evaluate one expression against the current environment.
    pub fn evaluate_expression(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        self.evaluate(expr)
    }

    pub fn execute(&mut self, stmt: &Stmt) -> Result<(), RuntimeError> {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Expression(expr) => {
                self.evaluate(expr)?;
                Ok(())
            }
            Stmt::Print(expr) => {
                let value = self.evaluate(expr)?;
                self.print_handler.println(&value.to_string());
                Ok(())
            }
            Stmt::Var { name, initializer } => {
                let value = match initializer {
                    Some(expr) => self.evaluate(expr)?,
                    None => Value::Nil,
                };
                self.env.define(name.lexeme.as_str(), value);
                Ok(())
            }
            Stmt::Block(statements) => self.execute_block(statements),
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                if self.evaluate(condition)?.is_truthy() {
                    self.execute(then_branch)
                } else if let Some(else_branch) = else_branch {
                    self.execute(else_branch)
                } else {
                    Ok(())
                }
            }
            Stmt::While { condition, body } => {
                while self.evaluate(condition)?.is_truthy() {
                    self.execute(body)?;
                }
                Ok(())
            }
        })
    }

    /// Run `statements` in a fresh scope. The scope is gone afterwards,
    /// whether the block finished or faulted.
    pub fn execute_block(&mut self, statements: &[Stmt]) -> Result<(), RuntimeError> {
        self.with_env_scope(|scoped| {
            for stmt in statements {
                scoped.execute(stmt)?;
            }
            Ok(())
        })
    }

    fn evaluate(&mut self, expr: &Expr) -> Result<Value, RuntimeError> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(literal) => Ok(Value::from(literal)),
            Expr::Grouping(inner) => self.evaluate(inner),
            Expr::Unary { operator, right } => {
                let right = self.evaluate(right)?;
                evaluate_unary(operator, right)
            }
            Expr::Binary {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                let right = self.evaluate(right)?;
                evaluate_binary(left, operator, right)
            }
            Expr::Logical {
                left,
                operator,
                right,
            } => {
                let left = self.evaluate(left)?;
                // The operand that decided the outcome is the result.
                let decided = match operator.kind {
                    TokenKind::Or => left.is_truthy(),
                    _ => !left.is_truthy(),
                };
                if decided {
                    Ok(left)
                } else {
                    self.evaluate(right)
                }
            }
            Expr::Variable(name) => self
                .env
                .get(&name.lexeme)
                .cloned()
                .ok_or_else(|| errors::undefined_variable(name)),
            Expr::Assign { name, value } => {
                let value = self.evaluate(value)?;
                match self.env.assign(&name.lexeme, value.clone()) {
                    Ok(()) => Ok(value),
                    Err(AssignError::Undefined) => Err(errors::undefined_assignment_target(name)),
                }
            }
        })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests;
