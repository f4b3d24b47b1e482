//! Runtime error types.
//!
//! `EvalErrorKind` is the structured category; the factory functions below
//! are the public way to build an [`EvalError`] and fill in both the kind
//! and its rendered message. There is no catch construct in the language,
//! so an error always travels unchanged to the top of the program.

use monkey_ir::{InfixOp, PrefixOp};
use thiserror::Error;

use crate::value::Value;

/// Result of evaluating something that cannot `return`.
pub type EvalResult = Result<Value, EvalError>;

/// Typed error category.
///
/// The `Display` output of each variant is the exact message a program's
/// user sees after `ERROR: `.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    // Operators
    #[error("type mismatch: {left} {op} {right}")]
    TypeMismatch {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("unknown operator: {op}{operand}")]
    UnknownPrefix { op: PrefixOp, operand: &'static str },
    #[error("unknown operator: {left} {op} {right}")]
    UnknownInfix {
        left: &'static str,
        op: InfixOp,
        right: &'static str,
    },
    #[error("division by zero")]
    DivisionByZero,

    // Names and calls
    #[error("identifier not found: {name}")]
    IdentifierNotFound { name: String },
    #[error("not a function: {type_name}")]
    NotAFunction { type_name: &'static str },

    // Collections
    #[error("index operator not supported: {type_name}")]
    IndexNotSupported { type_name: &'static str },
    #[error("unusable as hash key: {type_name}")]
    UnhashableKey { type_name: &'static str },

    // Builtins
    #[error("wrong number of arguments. got={got}, want={want}")]
    WrongArgCount { got: usize, want: usize },
    #[error("argument to `{builtin}` not supported, got {type_name}")]
    UnsupportedArgument {
        builtin: &'static str,
        type_name: &'static str,
    },
    #[error("argument to `{builtin}` must be ARRAY, got {type_name}")]
    ExpectedArray {
        builtin: &'static str,
        type_name: &'static str,
    },
}

/// Evaluation error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct EvalError {
    /// Structured error category.
    pub kind: EvalErrorKind,
    /// Human-readable message; always equals `kind.to_string()`.
    pub message: String,
}

impl EvalError {
    fn from_kind(kind: EvalErrorKind) -> Self {
        let message = kind.to_string();
        EvalError { kind, message }
    }
}

impl From<EvalErrorKind> for EvalError {
    fn from(kind: EvalErrorKind) -> Self {
        EvalError::from_kind(kind)
    }
}

// Factory functions

#[cold]
pub fn type_mismatch(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::TypeMismatch {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn unknown_prefix(op: PrefixOp, operand: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownPrefix {
        op,
        operand: operand.type_name(),
    })
}

#[cold]
pub fn unknown_infix(left: &Value, op: InfixOp, right: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnknownInfix {
        left: left.type_name(),
        op,
        right: right.type_name(),
    })
}

#[cold]
pub fn division_by_zero() -> EvalError {
    EvalError::from_kind(EvalErrorKind::DivisionByZero)
}

#[cold]
pub fn identifier_not_found(name: &str) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IdentifierNotFound {
        name: name.to_string(),
    })
}

#[cold]
pub fn not_a_function(callee: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::NotAFunction {
        type_name: callee.type_name(),
    })
}

#[cold]
pub fn index_not_supported(collection: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::IndexNotSupported {
        type_name: collection.type_name(),
    })
}

#[cold]
pub fn unhashable_key(key: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnhashableKey {
        type_name: key.type_name(),
    })
}

#[cold]
pub fn wrong_arg_count(got: usize, want: usize) -> EvalError {
    EvalError::from_kind(EvalErrorKind::WrongArgCount { got, want })
}

#[cold]
pub fn unsupported_argument(builtin: &'static str, arg: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::UnsupportedArgument {
        builtin,
        type_name: arg.type_name(),
    })
}

#[cold]
pub fn expected_array(builtin: &'static str, arg: &Value) -> EvalError {
    EvalError::from_kind(EvalErrorKind::ExpectedArray {
        builtin,
        type_name: arg.type_name(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_matches_kind() {
        let err = type_mismatch(&Value::Integer(1), InfixOp::Add, &Value::Boolean(true));
        assert_eq!(err.message, "type mismatch: INTEGER + BOOLEAN");
        assert_eq!(err.to_string(), err.kind.to_string());
    }

    #[test]
    fn prefix_message_has_no_space() {
        let err = unknown_prefix(PrefixOp::Neg, &Value::Boolean(true));
        assert_eq!(err.to_string(), "unknown operator: -BOOLEAN");
    }

    #[test]
    fn builtin_messages() {
        assert_eq!(
            wrong_arg_count(2, 1).to_string(),
            "wrong number of arguments. got=2, want=1"
        );
        assert_eq!(
            unsupported_argument("len", &Value::Integer(1)).to_string(),
            "argument to `len` not supported, got INTEGER"
        );
        assert_eq!(
            expected_array("first", &Value::Null).to_string(),
            "argument to `first` must be ARRAY, got NULL"
        );
    }
}
