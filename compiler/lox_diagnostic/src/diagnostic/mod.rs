//! The diagnostic record shared by every stage.

use std::fmt;

/// One reported fault.
///
/// `location` is the context label placed right after `Error`: empty for
/// lexical and runtime faults, `" at end"` or `" at 'lexeme'"` for parse
/// errors.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Diagnostic {
    /// 1-based source line.
    pub line: u32,
    pub location: String,
    pub message: String,
}

impl Diagnostic {
    /// Create a diagnostic.
    pub fn new(line: u32, location: impl Into<String>, message: impl Into<String>) -> Self {
        Diagnostic {
            line,
            location: location.into(),
            message: message.into(),
        }
    }

    /// Create a diagnostic with no location label.
    pub fn at_line(line: u32, message: impl Into<String>) -> Self {
        Diagnostic::new(line, "", message)
    }

    /// Display adapter that wraps the `Error` label in `open` / `close`.
    ///
    /// Used by terminal output to color the label; with empty codes it
    /// renders exactly like the `Display` impl.
    pub fn styled<'a>(&'a self, open: &'a str, close: &'a str) -> Styled<'a> {
        Styled {
            diagnostic: self,
            open,
            close,
        }
    }
}

/// See [`Diagnostic::styled`].
pub struct Styled<'a> {
    diagnostic: &'a Diagnostic,
    open: &'a str,
    close: &'a str,
}

impl fmt::Display for Styled<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Diagnostic {
            line,
            location,
            message,
        } = self.diagnostic;
        write!(
            f,
            "[line {line}] {}Error{}{location}: {message}",
            self.open, self.close
        )
    }
}

/// `[line N] Error<location>: <message>`
impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.styled("", ""), f)
    }
}
