//! Debug dumps: `--tokens` and `--ast`.

use lox_diagnostic::ColorMode;
use lox_ir::AstPrinter;

use super::{read_file, stderr_reporter};
use crate::{exit_code, Session};

/// Print each token of the script on its own line.
pub fn dump_tokens(path: &str, color: ColorMode) -> i32 {
    let Some(source) = read_file(path) else {
        return exit_code::NO_INPUT;
    };

    let mut session = Session::new(stderr_reporter(color));
    match session.tokens(&source) {
        Some(tokens) => {
            for token in &tokens {
                println!("{token}");
            }
            exit_code::SUCCESS
        }
        None => exit_code::DATA_ERROR,
    }
}

/// Print the parsed program, one top-level statement per line.
pub fn dump_ast(path: &str, color: ColorMode) -> i32 {
    let Some(source) = read_file(path) else {
        return exit_code::NO_INPUT;
    };

    let mut session = Session::new(stderr_reporter(color));
    match session.check(&source) {
        Some(statements) => {
            print!("{}", AstPrinter::new().print_program(&statements));
            exit_code::SUCCESS
        }
        None => exit_code::DATA_ERROR,
    }
}
