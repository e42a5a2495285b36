use super::*;
use crate::{LiteralValue, Token, TokenKind};
use pretty_assertions::assert_eq;

fn tok(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, None, 1)
}

fn num(n: f64) -> Expr {
    Expr::Literal(LiteralValue::Number(n))
}

#[test]
fn prints_classic_example() {
    let expr = Expr::binary(
        Expr::unary(tok(TokenKind::Minus, "-"), num(123.0)),
        tok(TokenKind::Star, "*"),
        Expr::grouping(num(45.67)),
    );
    assert_eq!(
        AstPrinter::new().print_expr(&expr),
        "(* (- 123) (group 45.67))"
    );
}

#[test]
fn prints_logical_and_assignment() {
    let expr = Expr::assign(
        tok(TokenKind::Identifier, "a"),
        Expr::logical(
            Expr::Variable(tok(TokenKind::Identifier, "b")),
            tok(TokenKind::And, "and"),
            Expr::Literal(LiteralValue::Nil),
        ),
    );
    assert_eq!(AstPrinter::new().print_expr(&expr), "(= a (and b nil))");
}

#[test]
fn prints_statements() {
    let printer = AstPrinter::new();
    let var = Stmt::Var {
        name: tok(TokenKind::Identifier, "x"),
        initializer: Some(Expr::Literal(LiteralValue::Str("hi".to_string()))),
    };
    let bare = Stmt::Var {
        name: tok(TokenKind::Identifier, "y"),
        initializer: None,
    };
    let branch = Stmt::If {
        condition: Expr::Literal(LiteralValue::Bool(true)),
        then_branch: Box::new(Stmt::Print(num(1.0))),
        else_branch: Some(Box::new(Stmt::Block(vec![]))),
    };
    let looping = Stmt::While {
        condition: Expr::Variable(tok(TokenKind::Identifier, "x")),
        body: Box::new(Stmt::Expression(num(2.0))),
    };

    assert_eq!(printer.print_stmt(&var), "(var x hi)");
    assert_eq!(printer.print_stmt(&bare), "(var y)");
    assert_eq!(printer.print_stmt(&branch), "(if true (print 1) (block))");
    assert_eq!(printer.print_stmt(&looping), "(while x (expr 2))");
}

#[test]
fn prints_program_one_statement_per_line() {
    let program = vec![
        Stmt::Print(num(1.0)),
        Stmt::Block(vec![Stmt::Print(num(2.0)), Stmt::Print(num(3.0))]),
    ];
    assert_eq!(
        AstPrinter::new().print_program(&program),
        "(print 1)\n(block (print 2) (print 3))\n"
    );
}

#[test]
fn prints_deeply_nested_program() {
    let depth = 50_000;
    let mut expr = num(1.0);
    for _ in 0..depth {
        expr = Expr::grouping(expr);
    }
    let mut stmt = Stmt::Print(expr);
    for _ in 0..depth {
        stmt = Stmt::Block(vec![stmt]);
    }

    let expected = format!(
        "{}(print {}1{}){}\n",
        "(block ".repeat(depth),
        "(group ".repeat(depth),
        ")".repeat(depth),
        ")".repeat(depth)
    );
    assert_eq!(AstPrinter::new().print_program(&[stmt]), expected);
}
