//! Prefix operator semantics.

use monkey_ir::PrefixOp;

use crate::errors::{unknown_prefix, EvalResult};
use crate::value::Value;

/// Evaluate `<op><value>`.
///
/// `!` is defined on every value: it is `true` for `false` and `null` and
/// `false` for everything else. `-` is defined on integers only.
pub fn evaluate_unary(value: &Value, op: PrefixOp) -> EvalResult {
    match (value, op) {
        (Value::Boolean(b), PrefixOp::Not) => Ok(Value::Boolean(!b)),
        (Value::Null, PrefixOp::Not) => Ok(Value::Boolean(true)),
        (_, PrefixOp::Not) => Ok(Value::Boolean(false)),

        (Value::Integer(n), PrefixOp::Neg) => Ok(Value::Integer(n.wrapping_neg())),
        (_, PrefixOp::Neg) => Err(unknown_prefix(op, value)),
    }
}
