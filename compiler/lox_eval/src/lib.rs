//! Tree-walking interpreter for Lox.
//!
//! Executes the parser's statements against a scope stack of variable
//! bindings. Output from `print` goes through a [`PrintHandlerImpl`] so it
//! can be captured. The first runtime fault aborts the current run and is
//! returned as a [`RuntimeError`]; side effects before it are kept.

mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

pub use environment::{AssignError, Environment};
pub use errors::RuntimeError;
pub use interpreter::{Interpreter, InterpreterBuilder, ScopedInterpreter};
pub use operators::evaluate_binary;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::Value;
