//! Evaluator tests.
//!
//! - `operators_tests` / `unary_operators_tests`: operator semantics on values
//! - `interpreter_tests`: whole programs through the parser and interpreter
//! - `builtins_tests`: native functions

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod unary_operators_tests;

use crate::{silent_handler, EvalError, Interpreter, Value};

/// Parse and evaluate `source` in a fresh interpreter.
pub(super) fn run(source: &str) -> Result<Option<Value>, EvalError> {
    let output = monkey_parse::parse(source);
    assert!(
        !output.has_errors(),
        "parse errors for {source:?}: {:?}",
        output.error_messages()
    );
    Interpreter::with_print_handler(silent_handler()).eval_program(&output.program)
}

/// The program's value, with "no value" read as `null`.
pub(super) fn eval(source: &str) -> Value {
    match run(source) {
        Ok(value) => value.unwrap_or(Value::Null),
        Err(error) => panic!("unexpected error for {source:?}: {error}"),
    }
}

/// The program's error message.
pub(super) fn eval_error(source: &str) -> String {
    match run(source) {
        Ok(value) => panic!("expected an error for {source:?}, got {value:?}"),
        Err(error) => error.message,
    }
}
