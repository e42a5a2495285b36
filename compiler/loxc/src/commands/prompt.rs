//! Interactive prompt.

use std::io::{self, BufRead, Write};

use lox_diagnostic::ColorMode;

use super::stderr_reporter;
use crate::{exit_code, Session};

const PROMPT: &str = "> ";

/// Read-eval-print loop over stdin until end of input.
///
/// Each line is scanned and parsed on its own; variables persist between
/// lines. Faults are reported and the loop carries on.
pub fn run_prompt(color: ColorMode) -> i32 {
    let mut session = Session::new(stderr_reporter(color));
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{PROMPT}");
        let _ = io::stdout().flush();

        match lines.next() {
            Some(Ok(line)) => {
                session.run_line(&line);
            }
            Some(Err(e)) => {
                eprintln!("error reading input: {e}");
                return exit_code::IO_ERROR;
            }
            None => {
                println!();
                return exit_code::SUCCESS;
            }
        }
    }
}
