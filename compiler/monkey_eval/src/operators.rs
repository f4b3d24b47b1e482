//! Binary operator semantics.
//!
//! The value set is closed, so dispatch is a match on the operand pair.
//! Only integer and string pairs have operator tables; every other pair
//! supports `==`/`!=` by identity and nothing else.

use monkey_ir::InfixOp;

use crate::errors::{division_by_zero, type_mismatch, unknown_infix, EvalResult};
use crate::value::Value;

/// Evaluate `left <op> right`.
pub fn evaluate_binary(left: &Value, right: &Value, op: InfixOp) -> EvalResult {
    match (left, right) {
        (Value::Integer(a), Value::Integer(b)) => eval_integer_binary(*a, *b, op),
        (Value::String(a), Value::String(b)) => match op {
            InfixOp::Add => {
                let mut joined = String::with_capacity(a.len() + b.len());
                joined.push_str(a);
                joined.push_str(b);
                Ok(Value::string(joined))
            }
            _ => Err(unknown_infix(left, op, right)),
        },
        _ => match op {
            InfixOp::Eq => Ok(Value::Boolean(left.is_same(right))),
            InfixOp::NotEq => Ok(Value::Boolean(!left.is_same(right))),
            _ if left.type_name() != right.type_name() => Err(type_mismatch(left, op, right)),
            _ => Err(unknown_infix(left, op, right)),
        },
    }
}

/// Integer arithmetic wraps on overflow; division truncates toward zero.
fn eval_integer_binary(a: i64, b: i64, op: InfixOp) -> EvalResult {
    let value = match op {
        InfixOp::Add => Value::Integer(a.wrapping_add(b)),
        InfixOp::Sub => Value::Integer(a.wrapping_sub(b)),
        InfixOp::Mul => Value::Integer(a.wrapping_mul(b)),
        InfixOp::Div => {
            if b == 0 {
                return Err(division_by_zero());
            }
            Value::Integer(a.wrapping_div(b))
        }
        InfixOp::Lt => Value::Boolean(a < b),
        InfixOp::Gt => Value::Boolean(a > b),
        InfixOp::Eq => Value::Boolean(a == b),
        InfixOp::NotEq => Value::Boolean(a != b),
    };
    Ok(value)
}
