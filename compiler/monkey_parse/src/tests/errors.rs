use pretty_assertions::assert_eq;

use crate::{parse, ParseErrorKind};
use monkey_ir::{Span, TokenKind};

fn first_error(source: &str) -> String {
    let output = parse(source);
    assert!(output.has_errors(), "expected errors for {source:?}");
    output.error_messages().remove(0)
}

#[test]
fn test_let_missing_assign() {
    assert_eq!(
        first_error("let x 5;"),
        "expected next token to be =, got INT instead"
    );
}

#[test]
fn test_let_missing_identifier() {
    assert_eq!(
        first_error("let = 10;"),
        "expected next token to be IDENTIFIER, got = instead"
    );
    assert_eq!(
        first_error("let 838383;"),
        "expected next token to be IDENTIFIER, got INT instead"
    );
}

#[test]
fn test_missing_prefix_parse_function() {
    assert_eq!(first_error("+5"), "no prefix parse function for + found");
    assert_eq!(first_error("let a = );"), "no prefix parse function for ) found");
}

#[test]
fn test_integer_overflow() {
    assert_eq!(
        first_error("99999999999999999999"),
        "could not parse \"99999999999999999999\" as integer"
    );
}

#[test]
fn test_unclosed_group() {
    assert_eq!(
        first_error("(1 + 2"),
        "expected next token to be ), got EOF instead"
    );
}

#[test]
fn test_non_identifier_parameter() {
    assert_eq!(
        first_error("fn(1) { 1 }"),
        "expected next token to be IDENTIFIER, got INT instead"
    );
}

#[test]
fn test_hash_missing_colon() {
    assert_eq!(
        first_error(r#"{"a" 1}"#),
        "expected next token to be :, got INT instead"
    );
}

#[test]
fn test_illegal_token() {
    assert_eq!(first_error("@"), "no prefix parse function for ILLEGAL found");
}

#[test]
fn test_every_error_is_reported() {
    let output = parse("let = 1; let y 2; let z = 3;");
    assert_eq!(output.errors.len(), 3);
    assert_eq!(
        output.errors[0].kind,
        ParseErrorKind::UnexpectedToken {
            expected: TokenKind::Ident,
            found: TokenKind::Assign,
        }
    );
}

#[test]
fn test_recovery_keeps_valid_statements() {
    let output = parse("let x 5; let y = 10;");
    assert!(output.has_errors());
    assert!(output
        .program
        .statements
        .iter()
        .any(|stmt| stmt.to_string() == "let y = 10;"));
}

#[test]
fn test_error_span_points_at_offending_token() {
    let output = parse("let x 5;");
    assert_eq!(output.errors[0].span, Span::new(6, 7));
}
