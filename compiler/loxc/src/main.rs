//! Lox interpreter CLI.
//!
//! `lox` with no script starts the interactive prompt; `lox <script>` runs
//! a file.

use lox_diagnostic::ColorMode;
use loxc::commands::{dump_ast, dump_tokens, run_file, run_prompt};
use loxc::exit_code;

const USAGE: &str = "\
Usage: lox [options] [script]

Options:
  --tokens          Print the scanned tokens instead of running
  --ast             Print the parsed syntax tree instead of running
  --color=<when>    Color diagnostics: auto, always, never
  -h, --help        Show this help";

#[derive(Clone, Copy)]
enum Mode {
    Run,
    Tokens,
    Ast,
}

fn main() {
    loxc::init_tracing();
    let args: Vec<String> = std::env::args().skip(1).collect();
    std::process::exit(dispatch(&args));
}

fn dispatch(args: &[String]) -> i32 {
    let mut mode = Mode::Run;
    let mut color = ColorMode::Auto;
    let mut scripts: Vec<&str> = Vec::new();

    for arg in args {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{USAGE}");
                return exit_code::SUCCESS;
            }
            "--tokens" => mode = Mode::Tokens,
            "--ast" => mode = Mode::Ast,
            _ => {
                if let Some(value) = arg.strip_prefix("--color=") {
                    let Some(parsed) = ColorMode::parse(value) else {
                        eprintln!("error: invalid color mode '{value}' (expected auto, always or never)");
                        return exit_code::USAGE;
                    };
                    color = parsed;
                } else if arg.starts_with('-') {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("{USAGE}");
                    return exit_code::USAGE;
                } else {
                    scripts.push(arg);
                }
            }
        }
    }

    match (scripts.as_slice(), mode) {
        ([], Mode::Run) => run_prompt(color),
        ([], Mode::Tokens | Mode::Ast) => {
            eprintln!("error: --tokens and --ast need a script");
            eprintln!("{USAGE}");
            exit_code::USAGE
        }
        ([path], Mode::Run) => run_file(path, color),
        ([path], Mode::Tokens) => dump_tokens(path, color),
        ([path], Mode::Ast) => dump_ast(path, color),
        _ => {
            println!("{USAGE}");
            exit_code::USAGE
        }
    }
}
