//! Runtime values.
//!
//! `Boolean` and `Null` carry nothing beyond their discriminant, so every
//! `true` is the same `true`. Compound values are reference counted and
//! immutable; "modifying" builtins such as `push` allocate a new value.
//! Identity (what Monkey's `==` means for non-integers) is pointer equality
//! on the `Rc`, see [`Value::is_same`].

use std::fmt;
use std::rc::Rc;

use monkey_ir::FunctionLiteral;

use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::hash::HashValue;

/// A Monkey runtime value.
#[derive(Clone)]
pub enum Value {
    Integer(i64),
    Boolean(bool),
    Null,
    String(Rc<str>),
    Array(Rc<[Value]>),
    Hash(Rc<HashValue>),
    Function(Rc<FunctionValue>),
    Builtin(Builtin),
}

/// A user-defined function closed over its defining environment.
pub struct FunctionValue {
    pub literal: Rc<FunctionLiteral>,
    pub env: Environment,
}

impl Value {
    /// Build a string value.
    pub fn string(s: impl Into<Rc<str>>) -> Self {
        Value::String(s.into())
    }

    /// Build an array value from its elements.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(Rc::from(items))
    }

    /// Build a hash value.
    pub fn hash(hash: HashValue) -> Self {
        Value::Hash(Rc::new(hash))
    }

    /// Build a closure over `env`.
    pub fn function(literal: Rc<FunctionLiteral>, env: Environment) -> Self {
        Value::Function(Rc::new(FunctionValue { literal, env }))
    }

    /// Upper-case type tag used in error messages.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Boolean(_) => "BOOLEAN",
            Value::Null => "NULL",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Hash(_) => "HASH",
            Value::Function(_) => "FUNCTION",
            Value::Builtin(_) => "BUILTIN",
        }
    }

    /// Only `false` is falsy. `null`, `0` and `""` all select the
    /// consequence of an `if`.
    #[inline]
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Boolean(false))
    }

    /// Identity comparison.
    ///
    /// Integers, booleans, null and builtins compare by payload; everything
    /// else compares by allocation, so two arrays with equal contents are
    /// different values unless they are the same array.
    pub fn is_same(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            (Value::String(a), Value::String(b)) => Rc::ptr_eq(a, b),
            (Value::Array(a), Value::Array(b)) => Rc::ptr_eq(a, b),
            (Value::Hash(a), Value::Hash(b)) => Rc::ptr_eq(a, b),
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Human-readable rendering, as printed by `puts` and the REPL.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{n}"),
            Value::Boolean(b) => write!(f, "{b}"),
            Value::Null => f.write_str("null"),
            Value::String(s) => f.write_str(s),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Hash(hash) => write!(f, "{hash}"),
            Value::Function(func) => write!(f, "{func}"),
            Value::Builtin(_) => f.write_str("built-in function"),
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "Integer({n})"),
            Value::Boolean(b) => write!(f, "Boolean({b})"),
            Value::Null => f.write_str("Null"),
            Value::String(s) => write!(f, "String({s:?})"),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Hash(hash) => f.debug_tuple("Hash").field(hash).finish(),
            Value::Function(func) => write!(f, "Function({func})"),
            Value::Builtin(builtin) => write!(f, "Builtin({})", builtin.name()),
        }
    }
}

/// Structural equality for host code and tests.
///
/// This is not Monkey's `==`; see [`Value::is_same`]. Functions have no
/// structure worth comparing and fall back to identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Boolean(a), Value::Boolean(b)) => a == b,
            (Value::Null, Value::Null) => true,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Array(a), Value::Array(b)) => a == b,
            (Value::Hash(a), Value::Hash(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => Rc::ptr_eq(a, b),
            (Value::Builtin(a), Value::Builtin(b)) => a == b,
            _ => false,
        }
    }
}

impl fmt::Display for FunctionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("fn(")?;
        for (i, param) in self.literal.params.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") {{\n{}\n}}", self.literal.body)
    }
}
