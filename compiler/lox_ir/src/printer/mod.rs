//! Prefix, fully parenthesized rendering of the syntax tree.
//!
//! `-123 * (45.67)` prints as `(* (- 123) (group 45.67))`. Used by
//! `lox --ast` and by parser tests to compare tree shapes as text.

use lox_stack::ensure_sufficient_stack;

use crate::{Expr, Stmt};

/// Renders expressions and statements as S-expressions.
#[derive(Clone, Copy, Debug, Default)]
pub struct AstPrinter;

impl AstPrinter {
    pub fn new() -> Self {
        AstPrinter
    }

    /// Render one expression.
    pub fn print_expr(&self, expr: &Expr) -> String {
        let mut out = String::new();
        self.write_expr(expr, &mut out);
        out
    }

    /// Render one statement.
    pub fn print_stmt(&self, stmt: &Stmt) -> String {
        let mut out = String::new();
        self.write_stmt(stmt, &mut out);
        out
    }

    /// Render a program, one top-level statement per line.
    pub fn print_program(&self, statements: &[Stmt]) -> String {
        let mut out = String::new();
        for stmt in statements {
            self.write_stmt(stmt, &mut out);
            out.push('\n');
        }
        out
    }

    fn write_expr(&self, expr: &Expr, out: &mut String) {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal(value) => out.push_str(&value.to_string()),
            Expr::Grouping(inner) => self.parenthesize("group", &[inner.as_ref()], out),
            Expr::Unary { operator, right } => {
                self.parenthesize(&operator.lexeme, &[right.as_ref()], out);
            }
            Expr::Binary {
                left,
                operator,
                right,
            }
            | Expr::Logical {
                left,
                operator,
                right,
            } => self.parenthesize(&operator.lexeme, &[left.as_ref(), right.as_ref()], out),
            Expr::Variable(name) => out.push_str(&name.lexeme),
            Expr::Assign { name, value } => {
                out.push_str("(= ");
                out.push_str(&name.lexeme);
                out.push(' ');
                self.write_expr(value, out);
                out.push(')');
            }
        });
    }

    fn write_stmt(&self, stmt: &Stmt, out: &mut String) {
        ensure_sufficient_stack(|| match stmt {
            Stmt::Expression(expr) => self.parenthesize("expr", &[expr], out),
            Stmt::Print(expr) => self.parenthesize("print", &[expr], out),
            Stmt::Var { name, initializer } => {
                out.push_str("(var ");
                out.push_str(&name.lexeme);
                if let Some(init) = initializer {
                    out.push(' ');
                    self.write_expr(init, out);
                }
                out.push(')');
            }
            Stmt::Block(statements) => {
                out.push_str("(block");
                for inner in statements {
                    out.push(' ');
                    self.write_stmt(inner, out);
                }
                out.push(')');
            }
            Stmt::If {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push_str("(if ");
                self.write_expr(condition, out);
                out.push(' ');
                self.write_stmt(then_branch, out);
                if let Some(else_branch) = else_branch {
                    out.push(' ');
                    self.write_stmt(else_branch, out);
                }
                out.push(')');
            }
            Stmt::While { condition, body } => {
                out.push_str("(while ");
                self.write_expr(condition, out);
                out.push(' ');
                self.write_stmt(body, out);
                out.push(')');
            }
        });
    }

    fn parenthesize(&self, name: &str, exprs: &[&Expr], out: &mut String) {
        out.push('(');
        out.push_str(name);
        for expr in exprs {
            out.push(' ');
            self.write_expr(expr, out);
        }
        out.push(')');
    }
}

#[cfg(test)]
mod tests;
