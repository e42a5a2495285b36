//! Lox IR - shared data types for every stage of the interpreter.
//!
//! - [`Token`] / [`TokenKind`]: scanner output, read-only afterwards
//! - [`Expr`] / [`Stmt`]: the syntax tree produced by the parser
//! - [`AstPrinter`]: prefix rendering of the tree for debugging
//!
//! Nodes are plain owned data. Each traversal (printing, evaluation) is an
//! exhaustive `match` over the node enums, so adding a variant is a compile
//! error everywhere it is not yet handled.

pub mod ast;
mod number;
pub mod printer;
pub mod token;

pub use ast::{Expr, LiteralValue, Stmt};
pub use number::format_number;
pub use printer::AstPrinter;
pub use token::{Literal, Token, TokenKind};
