use std::rc::Rc;

use pretty_assertions::assert_eq;

use super::*;

fn ident(name: &str) -> Expr {
    Expr::Identifier(Identifier::new(name))
}

#[test]
fn test_let_statement_display() {
    let program = Program {
        statements: vec![Statement::Let {
            name: Identifier::new("myVar"),
            value: ident("anotherVar"),
        }],
    };
    assert_eq!(program.to_string(), "let myVar = anotherVar;");
}

#[test]
fn test_nested_infix_display() {
    let expr = Expr::Infix {
        op: InfixOp::Mul,
        left: Box::new(Expr::Prefix {
            op: PrefixOp::Neg,
            operand: Box::new(ident("a")),
        }),
        right: Box::new(ident("b")),
    };
    assert_eq!(expr.to_string(), "((-a) * b)");
}

#[test]
fn test_if_else_display() {
    let expr = Expr::If {
        condition: Box::new(Expr::Infix {
            op: InfixOp::Lt,
            left: Box::new(ident("x")),
            right: Box::new(ident("y")),
        }),
        consequence: Block {
            statements: vec![Statement::Expression(ident("x"))],
        },
        alternative: Some(Block {
            statements: vec![Statement::Expression(ident("y"))],
        }),
    };
    assert_eq!(expr.to_string(), "if(x < y) xelse y");
}

#[test]
fn test_function_call_and_index_display() {
    let func = Expr::Function(Rc::new(FunctionLiteral {
        params: vec![Identifier::new("x"), Identifier::new("y")],
        body: Block {
            statements: vec![Statement::Return(Expr::Infix {
                op: InfixOp::Add,
                left: Box::new(ident("x")),
                right: Box::new(ident("y")),
            })],
        },
    }));
    assert_eq!(func.to_string(), "fn(x, y) return (x + y);");

    let call = Expr::Call {
        callee: Box::new(ident("add")),
        args: vec![Expr::Integer(1), Expr::Integer(2)],
    };
    assert_eq!(call.to_string(), "add(1, 2)");

    let index = Expr::Index {
        collection: Box::new(Expr::Array(vec![Expr::Integer(1), Expr::Integer(2)])),
        index: Box::new(Expr::Integer(0)),
    };
    assert_eq!(index.to_string(), "([1, 2][0])");
}

#[test]
fn test_hash_display_keeps_source_order() {
    let expr = Expr::Hash(vec![
        (Expr::String(Rc::from("one")), Expr::Integer(1)),
        (Expr::Boolean(true), Expr::Integer(2)),
    ]);
    assert_eq!(expr.to_string(), "{one:1, true:2}");
}

fn nested_negation(depth: usize) -> Expr {
    let mut expr = Expr::Integer(1);
    for _ in 0..depth {
        expr = Expr::Prefix {
            op: PrefixOp::Neg,
            operand: Box::new(expr),
        };
    }
    expr
}

#[test]
fn test_deep_expression_display() {
    let rendered = nested_negation(100_000).to_string();
    assert_eq!(rendered.len(), 100_000 * 3 + 1);
    assert!(rendered.starts_with("(-(-"));
    assert!(rendered.ends_with("1))"));
}

#[test]
fn test_deep_expression_drop() {
    drop(nested_negation(100_000));

    let mut expr = ident("x");
    for _ in 0..100_000 {
        expr = Expr::If {
            condition: Box::new(ident("c")),
            consequence: Block {
                statements: vec![Statement::Expression(expr)],
            },
            alternative: None,
        };
    }
    drop(expr);
}
