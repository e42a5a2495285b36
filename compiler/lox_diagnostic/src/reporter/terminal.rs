//! Terminal Reporter
//!
//! Human-readable diagnostic output with optional ANSI color support.

use std::io::{self, Write};

use super::Reporter;
use crate::Diagnostic;

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for the terminal reporter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Automatically detect based on terminal capabilities.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

impl ColorMode {
    /// Resolve to a boolean based on terminal detection.
    ///
    /// For `Auto` mode, `is_tty` determines whether colors should be used.
    /// This parameter is ignored for `Always` and `Never` modes.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }

    /// Parse the value of a `--color=` flag.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "auto" => Some(ColorMode::Auto),
            "always" => Some(ColorMode::Always),
            "never" => Some(ColorMode::Never),
            _ => None,
        }
    }
}

/// Writes `[line N] Error<location>: <message>` lines to a writer.
pub struct TerminalReporter<W: Write> {
    writer: W,
    colors: bool,
}

impl<W: Write> TerminalReporter<W> {
    /// Create a terminal reporter with explicit color mode.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalReporter {
            writer,
            colors: mode.should_use_colors(is_tty),
        }
    }

    /// Consume the reporter and return its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TerminalReporter<io::Stderr> {
    /// Create a terminal reporter for stderr with explicit color mode.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        TerminalReporter::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> Reporter for TerminalReporter<W> {
    fn report(&mut self, line: u32, location: &str, message: &str) {
        let diagnostic = Diagnostic::new(line, location, message);
        let (open, close) = if self.colors {
            (colors::ERROR, colors::RESET)
        } else {
            ("", "")
        };
        let _ = writeln!(self.writer, "{}", diagnostic.styled(open, close));
        let _ = self.writer.flush();
    }
}
