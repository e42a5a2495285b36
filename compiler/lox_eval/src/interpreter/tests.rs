#![allow(clippy::unwrap_used)]

use super::*;
use crate::{buffer_handler, errors::RuntimeError};
use pretty_assertions::assert_eq;

fn parse_program(source: &str) -> Vec<Stmt> {
    let lexed = lox_lexer::lex(source);
    assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
    let parsed = lox_parse::parse(&lexed.tokens);
    assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
    parsed.statements
}

fn buffered() -> Interpreter {
    Interpreter::builder().print_handler(buffer_handler()).build()
}

/// Run `source`, returning printed lines and the runtime error, if any.
fn run(source: &str) -> (Vec<String>, Option<RuntimeError>) {
    let mut interpreter = buffered();
    let result = interpreter.interpret(&parse_program(source));
    (interpreter.print_handler().lines(), result.err())
}

fn output(source: &str) -> Vec<String> {
    let (lines, err) = run(source);
    assert_eq!(err, None);
    lines
}

fn fault(source: &str) -> String {
    run(source).1.unwrap().to_diagnostic().to_string()
}

#[test]
fn precedence_evaluates() {
    assert_eq!(output("print 1 + 2 * 3;"), vec!["7"]);
}

#[test]
fn shadowing_in_block() {
    assert_eq!(
        output("var a = 1; { var a = 2; print a; } print a;"),
        vec!["2", "1"]
    );
}

#[test]
fn string_number_concatenation() {
    assert_eq!(output("print \"foo\" + 1;"), vec!["foo1"]);
    assert_eq!(output("print 2.5 + \"x\";"), vec!["2.5x"]);
}

#[test]
fn addition_type_fault_cites_operator() {
    let (lines, err) = run("print 1 + true;");
    assert!(lines.is_empty());
    let err = err.unwrap();
    assert_eq!(err.token.lexeme, "+");
    assert_eq!(
        err.to_diagnostic().to_string(),
        "[line 1] Error: Operands of '+' must be two numbers or two strings."
    );
}

#[test]
fn if_else() {
    assert_eq!(output("if (false) print 1; else print 2;"), vec!["2"]);
    assert_eq!(output("if (nil) print 1;"), Vec::<String>::new());
    assert_eq!(output("if (0) print \"zero is truthy\";"), vec!["zero is truthy"]);
}

#[test]
fn while_loop() {
    assert_eq!(
        output("var i = 0; while (i < 3) { print i; i = i + 1; }"),
        vec!["0", "1", "2"]
    );
}

#[test]
fn logical_operators_return_deciding_operand() {
    assert_eq!(
        output("print nil or \"yes\"; print 0 or 1; print false and 1; print 1 and 2;"),
        vec!["yes", "0", "false", "2"]
    );
}

#[test]
fn logical_operators_short_circuit() {
    assert_eq!(
        output("var a = 1; false and (a = 2); true or (a = 3); print a;"),
        vec!["1"]
    );
    assert_eq!(output("print true or undefined_name;"), vec!["true"]);
}

#[test]
fn uninitialized_variable_is_nil() {
    assert_eq!(output("var a; print a;"), vec!["nil"]);
}

#[test]
fn redeclaration_overwrites() {
    assert_eq!(output("var a = 1; var a = \"two\"; print a;"), vec!["two"]);
}

#[test]
fn assignment_is_an_expression() {
    assert_eq!(output("var a; var b; a = b = 3; print a; print b;"), vec!["3", "3"]);
}

#[test]
fn assignment_reaches_enclosing_scope() {
    assert_eq!(
        output("var a = 1; { { a = 5; } } print a;"),
        vec!["5"]
    );
}

#[test]
fn block_locals_are_not_visible_outside() {
    assert_eq!(
        fault("{ var inner = 1; } print inner;"),
        "[line 1] Error: Undefined variable 'inner'."
    );
}

#[test]
fn assignment_to_undefined_is_a_fault() {
    assert_eq!(
        fault("missing = 1;"),
        "[line 1] Error: Cannot assign to undefined variable 'missing'."
    );
}

#[test]
fn unary_faults() {
    assert_eq!(
        fault("print -\"x\";"),
        "[line 1] Error: Operand of '-' must be a number."
    );
    assert_eq!(output("print !nil; print !0;"), vec!["true", "false"]);
}

#[test]
fn comparison_faults_name_the_operator() {
    assert_eq!(
        fault("\n\nprint 1 < \"2\";"),
        "[line 3] Error: Operands of '<' must be numbers."
    );
}

#[test]
fn equality() {
    assert_eq!(
        output("print nil == nil; print nil == false; print \"a\" == \"a\"; print 1 != 2;"),
        vec!["true", "false", "true", "true"]
    );
}

#[test]
fn number_display() {
    assert_eq!(
        output("print 10 / 4; print 3 * 2; print -0; print 1 / 0; print -1 / 0;"),
        vec!["2.5", "6", "-0", "Infinity", "-Infinity"]
    );
}

#[test]
fn fault_keeps_earlier_side_effects() {
    let (lines, err) = run("print 1; print nope; print 2;");
    assert_eq!(lines, vec!["1"]);
    assert_eq!(err.unwrap().message, "Undefined variable 'nope'.");
}

#[test]
fn fault_inside_block_pops_scope() {
    let mut interpreter = buffered();
    let program = parse_program("var a = 1; { var a = 2; { print missing; } }");
    assert!(interpreter.interpret(&program).is_err());
    assert_eq!(interpreter.environment().depth(), 1);
    assert_eq!(interpreter.environment().get("a"), Some(&Value::Number(1.0)));
    assert_eq!(interpreter.environment().depth(), 1);
}

#[test]
fn deeply_nested_grouping_evaluates() {
    let depth = 50_000;
    let source = format!("print {}-2{};", "(".repeat(depth), ")".repeat(depth));
    let mut interpreter = buffered();
    interpreter.interpret(&parse_program(&source)).unwrap();
    assert_eq!(interpreter.print_handler().lines(), vec!["-2"]);
}

#[test]
fn globals_persist_across_runs() {
    let mut interpreter = buffered();
    interpreter.interpret(&parse_program("var a = 1;")).unwrap();
    interpreter.interpret(&parse_program("a = a + 1;")).unwrap();
    interpreter.interpret(&parse_program("print a;")).unwrap();
    assert_eq!(interpreter.print_handler().lines(), vec!["2"]);
}

#[test]
fn evaluate_expression_uses_environment() {
    let mut interpreter = buffered();
    interpreter.interpret(&parse_program("var x = 20;")).unwrap();
    let statements = parse_program("x + 1;");
    let Stmt::Expression(expr) = &statements[0] else {
        panic!("expected expression statement");
    };
    assert_eq!(
        interpreter.evaluate_expression(expr).unwrap(),
        Value::Number(21.0)
    );
}

#[test]
fn builder_accepts_seeded_environment() {
    let mut env = Environment::new();
    env.define("greeting", Value::from("hello"));
    let mut interpreter = Interpreter::builder()
        .environment(env)
        .print_handler(buffer_handler())
        .build();
    interpreter.interpret(&parse_program("print greeting;")).unwrap();
    assert_eq!(interpreter.print_handler().lines(), vec!["hello"]);
}

#[test]
fn scoped_guard_pops_on_drop() {
    let mut interpreter = buffered();
    {
        let mut scoped = interpreter.scoped();
        scoped.environment_mut().define("tmp", Value::Nil);
        assert_eq!(scoped.environment().depth(), 2);
    }
    assert_eq!(interpreter.environment().depth(), 1);
    assert_eq!(interpreter.environment().get("tmp"), None);
}

#[test]
fn deeply_nested_blocks_run() {
    let depth = 50_000;
    let source = format!("var a = 0; {} a = a + 1; {}", "{".repeat(depth), "}".repeat(depth));
    let mut interpreter = buffered();
    interpreter.interpret(&parse_program(&source)).unwrap();
    assert_eq!(interpreter.environment().get("a"), Some(&Value::Number(1.0)));
}
