//! Diagnostic reporting for the Lox interpreter.
//!
//! Scanner, parser and interpreter never format or print errors themselves.
//! They turn each fault into a [`Diagnostic`] and hand it to a [`Reporter`],
//! so the host decides where diagnostics go:
//!
//! - [`TerminalReporter`]: `[line N] Error<location>: <message>` on a writer
//! - [`BufferReporter`]: keeps diagnostics in memory (tests, batching)
//! - [`SharedBufferReporter`]: a cloneable handle onto one buffer

mod diagnostic;
pub mod reporter;

pub use diagnostic::{Diagnostic, Styled};
pub use reporter::{BufferReporter, ColorMode, Reporter, SharedBufferReporter, TerminalReporter};
