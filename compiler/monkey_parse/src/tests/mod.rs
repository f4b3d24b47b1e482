//! Parser tests.
//!
//! - `statements`: `let`, `return`, and expression statements
//! - `expressions`: literals, operators, precedence, calls and indexing
//! - `errors`: recorded error messages and recovery

mod errors;

use crate::{parse, ParseOutput};
use monkey_ir::{Expr, Program, Statement};

/// Parse `source` and fail the test if any error was recorded.
fn parse_ok(source: &str) -> Program {
    let ParseOutput { program, errors } = parse(source);
    assert!(
        errors.is_empty(),
        "unexpected parse errors for {source:?}: {errors:?}"
    );
    program
}

/// Parse a source holding exactly one expression statement.
fn parse_single_expr(source: &str) -> Expr {
    let program = parse_ok(source);
    assert_eq!(program.statements.len(), 1, "source: {source:?}");
    match program.statements.into_iter().next() {
        Some(Statement::Expression(expr)) => expr,
        other => panic!("expected expression statement, got {other:?}"),
    }
}
