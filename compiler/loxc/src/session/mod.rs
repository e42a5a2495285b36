//! One interpreter session: scan, parse, interpret.
//!
//! A static fault (lexical or syntax) stops the run before anything
//! executes. A runtime fault stops the run at the faulting statement. Either
//! way the fault reaches the reporter exactly once and the outcome says
//! which kind it was.

use lox_diagnostic::Reporter;
use lox_eval::Interpreter;
use lox_ir::{Stmt, Token};
use lox_lexer::LexOutput;
use lox_parse::ReplInput;
use tracing::debug;

use crate::exit_code;

/// Error flags for one run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RunOutcome {
    /// A lexical or syntax error was reported. Nothing was executed.
    pub had_static_error: bool,
    /// Execution stopped on a runtime fault.
    pub had_runtime_error: bool,
}

impl RunOutcome {
    pub const SUCCESS: RunOutcome = RunOutcome {
        had_static_error: false,
        had_runtime_error: false,
    };

    pub const STATIC_ERROR: RunOutcome = RunOutcome {
        had_static_error: true,
        had_runtime_error: false,
    };

    pub const RUNTIME_ERROR: RunOutcome = RunOutcome {
        had_static_error: false,
        had_runtime_error: true,
    };

    pub fn is_success(self) -> bool {
        !self.had_static_error && !self.had_runtime_error
    }

    /// 65 for a static error, 70 for a runtime error, 0 otherwise.
    pub fn exit_code(self) -> i32 {
        if self.had_static_error {
            exit_code::DATA_ERROR
        } else if self.had_runtime_error {
            exit_code::SOFTWARE
        } else {
            exit_code::SUCCESS
        }
    }
}

/// Scanner, parser and interpreter bound to one reporter.
///
/// The interpreter's global scope lives as long as the session.
pub struct Session<R: Reporter> {
    reporter: R,
    interpreter: Interpreter,
}

impl<R: Reporter> Session<R> {
    /// Session printing to stdout.
    pub fn new(reporter: R) -> Self {
        Session::with_interpreter(reporter, Interpreter::new())
    }

    /// Session around a pre-configured interpreter.
    pub fn with_interpreter(reporter: R, interpreter: Interpreter) -> Self {
        Session {
            reporter,
            interpreter,
        }
    }

    pub fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }


    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Run a complete program.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = source.len()))]
    pub fn run(&mut self, source: &str) -> RunOutcome {
        let Some(statements) = self.check(source) else {
            return RunOutcome::STATIC_ERROR;
        };

        match self.interpreter.interpret(&statements) {
            Ok(()) => RunOutcome::SUCCESS,
            Err(error) => {
                debug!(line = error.line(), message = %error.message, "runtime error");
                self.reporter.emit(&error.to_diagnostic());
                RunOutcome::RUNTIME_ERROR
            }
        }
    }

    /// Run one line of interactive input.
    ///
    /// A bare expression without a trailing `;` has its value printed.
    /// Bindings persist into later lines; error flags do not.
    #[tracing::instrument(level = "debug", skip_all, fields(bytes = line.len()))]
    pub fn run_line(&mut self, line: &str) -> RunOutcome {
        let lexed = self.scan(line);
        let parsed = lox_parse::parse_repl(&lexed.tokens);
        for error in &parsed.errors {
            self.reporter.emit(&error.to_diagnostic());
        }

        if lexed.has_errors() || parsed.has_errors() {
            return RunOutcome::STATIC_ERROR;
        }

        let result = match &parsed.input {
            ReplInput::Expression(expr) => {
                self.interpreter.evaluate_expression(expr).map(|value| {
                    self.interpreter.print_handler().println(&value.to_string());
                })
            }
            ReplInput::Statements(statements) => self.interpreter.interpret(statements),
        };

        match result {
            Ok(()) => RunOutcome::SUCCESS,
            Err(error) => {
                self.reporter.emit(&error.to_diagnostic());
                RunOutcome::RUNTIME_ERROR
            }
        }
    }

    /// Scan `source`, reporting lexical errors. Returns the scan output
    /// either way so the parser can still look for syntax errors.
    pub fn scan(&mut self, source: &str) -> LexOutput {
        let lexed = lox_lexer::lex(source);
        debug!(
            tokens = lexed.tokens.len(),
            errors = lexed.errors.len(),
            "scanned"
        );
        for error in &lexed.errors {
            self.reporter.emit(&error.to_diagnostic());
        }
        lexed
    }

    /// Scan and parse `source` without executing it.
    ///
    /// Returns `None` if any static error was reported.
    pub fn check(&mut self, source: &str) -> Option<Vec<Stmt>> {
        let lexed = self.scan(source);
        let parsed = lox_parse::parse(&lexed.tokens);
        for error in &parsed.errors {
            self.reporter.emit(&error.to_diagnostic());
        }
        if lexed.has_errors() || parsed.has_errors() {
            None
        } else {
            Some(parsed.statements)
        }
    }

    /// Scan `source` for `--tokens` output. Returns `None` if any lexical
    /// error was reported.
    pub fn tokens(&mut self, source: &str) -> Option<Vec<Token>> {
        let lexed = self.scan(source);
        if lexed.has_errors() {
            None
        } else {
            Some(lexed.tokens)
        }
    }
}
