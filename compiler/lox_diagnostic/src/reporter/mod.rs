//! Reporter capability and its implementations.
//!
//! Every stage reports through [`Reporter::report`], taking the line, the
//! location label and the message. Implementations decide on formatting
//! and destination.

mod buffer;
mod terminal;

pub use buffer::{BufferReporter, SharedBufferReporter};
pub use terminal::{ColorMode, TerminalReporter};

use crate::Diagnostic;

/// Sink for diagnostics.
pub trait Reporter {
    /// Report one fault.
    fn report(&mut self, line: u32, location: &str, message: &str);

    /// Report a prepared diagnostic.
    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.report(diagnostic.line, &diagnostic.location, &diagnostic.message);
    }
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn report(&mut self, line: u32, location: &str, message: &str) {
        (**self).report(line, location, message);
    }
}
