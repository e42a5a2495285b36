//! Syntax tree.
//!
//! Two closed node families: [`Expr`] and [`Stmt`]. Children are owned
//! through `Box`/`Vec`, so a tree is acyclic and no node has two parents.
//! Operator nodes keep their operator [`Token`] for error positions.
//!
//! Both node types implement `Drop` by hand, so fields cannot be moved out
//! of a node by pattern; match on a reference and clone instead.

use std::{fmt, mem};

use crate::{format_number, Token};

/// Constant value appearing in source.
#[derive(Clone, PartialEq, Debug)]
pub enum LiteralValue {
    Nil,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl fmt::Display for LiteralValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralValue::Nil => f.write_str("nil"),
            LiteralValue::Bool(b) => write!(f, "{b}"),
            LiteralValue::Number(n) => f.write_str(&format_number(*n)),
            LiteralValue::Str(s) => f.write_str(s),
        }
    }
}

/// Expression node.
#[derive(Clone, PartialEq, Debug)]
pub enum Expr {
    Literal(LiteralValue),
    /// Parenthesized sub-expression. Transparent to evaluation.
    Grouping(Box<Expr>),
    /// `!` or `-` applied to one operand.
    Unary {
        operator: Token,
        right: Box<Expr>,
    },
    /// Arithmetic, comparison and equality operators.
    Binary {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    /// `and` / `or`. Kept apart from `Binary` because it short-circuits.
    Logical {
        left: Box<Expr>,
        operator: Token,
        right: Box<Expr>,
    },
    Variable(Token),
    Assign {
        name: Token,
        value: Box<Expr>,
    },
}

impl Expr {
    pub fn unary(operator: Token, right: Expr) -> Self {
        Expr::Unary {
            operator,
            right: Box::new(right),
        }
    }

    pub fn binary(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn logical(left: Expr, operator: Token, right: Expr) -> Self {
        Expr::Logical {
            left: Box::new(left),
            operator,
            right: Box::new(right),
        }
    }

    pub fn grouping(inner: Expr) -> Self {
        Expr::Grouping(Box::new(inner))
    }

    pub fn assign(name: Token, value: Expr) -> Self {
        Expr::Assign {
            name,
            value: Box::new(value),
        }
    }

    /// Move boxed children into `out`, leaving leaves in their place.
    fn detach_children(&mut self, out: &mut Vec<Expr>) {
        match self {
            Expr::Literal(_) | Expr::Variable(_) => {}
            Expr::Grouping(inner) => out.push(hollow_expr(inner)),
            Expr::Unary { right, .. } => out.push(hollow_expr(right)),
            Expr::Binary { left, right, .. } | Expr::Logical { left, right, .. } => {
                out.push(hollow_expr(left));
                out.push(hollow_expr(right));
            }
            Expr::Assign { value, .. } => out.push(hollow_expr(value)),
        }
    }
}

fn hollow_expr(slot: &mut Expr) -> Expr {
    mem::replace(slot, Expr::Literal(LiteralValue::Nil))
}

/// Nested children are freed from a worklist, so dropping a tree takes
/// constant stack whatever its depth.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

/// Statement node.
#[derive(Clone, PartialEq, Debug)]
pub enum Stmt {
    /// Evaluate and discard.
    Expression(Expr),
    Print(Expr),
    Var {
        name: Token,
        initializer: Option<Expr>,
    },
    /// A new lexical scope.
    Block(Vec<Stmt>),
    If {
        condition: Expr,
        then_branch: Box<Stmt>,
        else_branch: Option<Box<Stmt>>,
    },
    While {
        condition: Expr,
        body: Box<Stmt>,
    },
}

impl Stmt {
    /// Move nested statements into `out`. Expressions free themselves.
    fn detach_children(&mut self, out: &mut Vec<Stmt>) {
        match self {
            Stmt::Expression(_) | Stmt::Print(_) | Stmt::Var { .. } => {}
            Stmt::Block(statements) => out.append(statements),
            Stmt::If {
                then_branch,
                else_branch,
                ..
            } => {
                out.push(hollow_stmt(then_branch));
                if let Some(else_branch) = else_branch.take() {
                    out.push(*else_branch);
                }
            }
            Stmt::While { body, .. } => out.push(hollow_stmt(body)),
        }
    }
}

fn hollow_stmt(slot: &mut Stmt) -> Stmt {
    mem::replace(slot, Stmt::Block(Vec::new()))
}

impl Drop for Stmt {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        while let Some(mut stmt) = pending.pop() {
            stmt.detach_children(&mut pending);
        }
    }
}

#[cfg(test)]
mod tests;
