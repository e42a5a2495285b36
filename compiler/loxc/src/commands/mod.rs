//! Command handlers for the `lox` binary.
//!
//! Each handler returns the process exit code instead of exiting, so the
//! binary stays a thin argument parser.

mod debug;
mod prompt;
mod run;

pub use debug::{dump_ast, dump_tokens};
pub use prompt::run_prompt;
pub use run::run_file;

use std::io::IsTerminal;

use lox_diagnostic::{ColorMode, TerminalReporter};

/// Read a script, describing the failure on stderr.
pub(crate) fn read_file(path: &str) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => Some(content),
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            None
        }
    }
}

/// Diagnostics reporter on stderr.
pub(crate) fn stderr_reporter(color: ColorMode) -> TerminalReporter<std::io::Stderr> {
    let is_tty = std::io::stderr().is_terminal();
    TerminalReporter::stderr(color, is_tty)
}
