//! In-memory reporters.

use std::sync::Arc;

use parking_lot::Mutex;

use super::Reporter;
use crate::Diagnostic;

/// Collects diagnostics in report order.
#[derive(Clone, Debug, Default)]
pub struct BufferReporter {
    diagnostics: Vec<Diagnostic>,
}

impl BufferReporter {
    pub fn new() -> Self {
        BufferReporter::default()
    }

    /// Diagnostics reported so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Number of diagnostics reported so far.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Take all diagnostics, leaving the buffer empty.
    pub fn take(&mut self) -> Vec<Diagnostic> {
        std::mem::take(&mut self.diagnostics)
    }

    /// Render every diagnostic on its own line.
    pub fn render(&self) -> String {
        render_lines(&self.diagnostics)
    }
}

impl Reporter for BufferReporter {
    fn report(&mut self, line: u32, location: &str, message: &str) {
        self.diagnostics
            .push(Diagnostic::new(line, location, message));
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.diagnostics.push(diagnostic.clone());
    }
}

/// Cloneable handle onto one diagnostic buffer.
///
/// The owner of a pipeline keeps one clone while the pipeline holds the
/// other as its reporter.
#[derive(Clone, Debug, Default)]
pub struct SharedBufferReporter {
    inner: Arc<Mutex<Vec<Diagnostic>>>,
}

impl SharedBufferReporter {
    pub fn new() -> Self {
        SharedBufferReporter::default()
    }

    /// Snapshot of the diagnostics reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.inner.lock().clone()
    }

    /// Render every diagnostic on its own line.
    pub fn render(&self) -> String {
        render_lines(&self.inner.lock())
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }
}

impl Reporter for SharedBufferReporter {
    fn report(&mut self, line: u32, location: &str, message: &str) {
        self.inner
            .lock()
            .push(Diagnostic::new(line, location, message));
    }

    fn emit(&mut self, diagnostic: &Diagnostic) {
        self.inner.lock().push(diagnostic.clone());
    }
}

fn render_lines(diagnostics: &[Diagnostic]) -> String {
    let mut out = String::new();
    for diagnostic in diagnostics {
        out.push_str(&diagnostic.to_string());
        out.push('\n');
    }
    out
}
