//! Tests for prefix operator semantics.

use pretty_assertions::assert_eq;

use crate::unary_operators::evaluate_unary;
use crate::Value;
use monkey_ir::PrefixOp;

#[test]
fn test_not() {
    let cases = [
        (Value::Boolean(true), false),
        (Value::Boolean(false), true),
        (Value::Null, true),
        (Value::Integer(0), false),
        (Value::Integer(5), false),
        (Value::string(""), false),
        (Value::array(Vec::new()), false),
    ];
    for (value, expected) in cases {
        assert_eq!(
            evaluate_unary(&value, PrefixOp::Not).unwrap(),
            Value::Boolean(expected),
            "!{value:?}"
        );
    }
}

#[test]
fn test_negate_integer() {
    assert_eq!(
        evaluate_unary(&Value::Integer(5), PrefixOp::Neg).unwrap(),
        Value::Integer(-5)
    );
    assert_eq!(
        evaluate_unary(&Value::Integer(i64::MIN), PrefixOp::Neg).unwrap(),
        Value::Integer(i64::MIN)
    );
}

#[test]
fn test_negate_non_integer() {
    let err = evaluate_unary(&Value::Boolean(true), PrefixOp::Neg).unwrap_err();
    assert_eq!(err.message, "unknown operator: -BOOLEAN");

    let err = evaluate_unary(&Value::string("x"), PrefixOp::Neg).unwrap_err();
    assert_eq!(err.message, "unknown operator: -STRING");
}
