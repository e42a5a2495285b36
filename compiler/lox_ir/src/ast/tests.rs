use super::*;
use crate::TokenKind;
use pretty_assertions::assert_eq;

fn op(kind: TokenKind, lexeme: &str) -> Token {
    Token::new(kind, lexeme, None, 1)
}

#[test]
fn literal_display_matches_runtime_format() {
    assert_eq!(LiteralValue::Nil.to_string(), "nil");
    assert_eq!(LiteralValue::Bool(true).to_string(), "true");
    assert_eq!(LiteralValue::Number(3.0).to_string(), "3");
    assert_eq!(LiteralValue::Number(3.25).to_string(), "3.25");
    assert_eq!(LiteralValue::Str("hi".to_string()).to_string(), "hi");
}

#[test]
fn constructors_box_children() {
    let expr = Expr::binary(
        Expr::Literal(LiteralValue::Number(1.0)),
        op(TokenKind::Plus, "+"),
        Expr::grouping(Expr::Literal(LiteralValue::Number(2.0))),
    );

    let Expr::Binary { left, operator, right } = &expr else {
        panic!("expected binary node");
    };
    assert_eq!(**left, Expr::Literal(LiteralValue::Number(1.0)));
    assert_eq!(operator.kind, TokenKind::Plus);
    assert_eq!(
        **right,
        Expr::Grouping(Box::new(Expr::Literal(LiteralValue::Number(2.0))))
    );
}

#[test]
fn structurally_equal_trees_compare_equal() {
    let build = || Stmt::While {
        condition: Expr::logical(
            Expr::Variable(op(TokenKind::Identifier, "a")),
            op(TokenKind::Or, "or"),
            Expr::Literal(LiteralValue::Bool(false)),
        ),
        body: Box::new(Stmt::Block(vec![Stmt::Print(Expr::assign(
            op(TokenKind::Identifier, "a"),
            Expr::Literal(LiteralValue::Nil),
        ))])),
    };
    assert_eq!(build(), build());
}

const DEEP: usize = 100_000;

#[test]
fn dropping_deep_expression_chain() {
    let mut expr = Expr::Literal(LiteralValue::Number(1.0));
    for i in 0..DEEP {
        expr = match i % 4 {
            0 => Expr::grouping(expr),
            1 => Expr::unary(op(TokenKind::Minus, "-"), expr),
            2 => Expr::binary(expr, op(TokenKind::Plus, "+"), Expr::Literal(LiteralValue::Nil)),
            _ => Expr::assign(op(TokenKind::Identifier, "a"), expr),
        };
    }
    drop(expr);
}

#[test]
fn dropping_deep_statement_nesting() {
    let mut stmt = Stmt::Print(Expr::Literal(LiteralValue::Nil));
    for i in 0..DEEP {
        stmt = match i % 3 {
            0 => Stmt::Block(vec![stmt, Stmt::Print(Expr::Literal(LiteralValue::Nil))]),
            1 => Stmt::If {
                condition: Expr::Literal(LiteralValue::Bool(true)),
                then_branch: Box::new(Stmt::Block(vec![])),
                else_branch: Some(Box::new(stmt)),
            },
            _ => Stmt::While {
                condition: Expr::Literal(LiteralValue::Bool(false)),
                body: Box::new(stmt),
            },
        };
    }
    drop(stmt);
}

#[test]
fn clone_survives_original_drop() {
    let original = Stmt::If {
        condition: Expr::grouping(Expr::Variable(op(TokenKind::Identifier, "x"))),
        then_branch: Box::new(Stmt::Print(Expr::Literal(LiteralValue::Number(1.0)))),
        else_branch: Some(Box::new(Stmt::Block(vec![Stmt::Print(Expr::Literal(
            LiteralValue::Number(2.0),
        ))]))),
    };
    let copy = original.clone();
    drop(original);
    assert_eq!(
        copy,
        Stmt::If {
            condition: Expr::grouping(Expr::Variable(op(TokenKind::Identifier, "x"))),
            then_branch: Box::new(Stmt::Print(Expr::Literal(LiteralValue::Number(1.0)))),
            else_branch: Some(Box::new(Stmt::Block(vec![Stmt::Print(Expr::Literal(
                LiteralValue::Number(2.0),
            ))]))),
        }
    );
}
