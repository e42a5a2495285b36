//! The default command: run a script file.

use lox_diagnostic::ColorMode;

use super::{read_file, stderr_reporter};
use crate::{exit_code, Session};

/// Run the script at `path` and return its exit code.
pub fn run_file(path: &str, color: ColorMode) -> i32 {
    let Some(source) = read_file(path) else {
        return exit_code::NO_INPUT;
    };

    let mut session = Session::new(stderr_reporter(color));
    session.run(&source).exit_code()
}
