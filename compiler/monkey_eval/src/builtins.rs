//! Native functions (`len`, `first`, `last`, `rest`, `push`, `puts`).
//!
//! Builtins are resolved by name after the environment chain, so a program
//! may shadow them with its own bindings. Each one checks its own argument
//! count and kinds.

use crate::errors::{
    expected_array, unsupported_argument, wrong_arg_count, EvalError, EvalResult,
};
use crate::print_handler::PrintHandlerImpl;
use crate::value::Value;

/// A native function.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Builtin {
    Len,
    First,
    Last,
    Rest,
    Push,
    Puts,
}

impl Builtin {
    /// Every builtin, in registry order.
    pub const ALL: [Builtin; 6] = [
        Builtin::Len,
        Builtin::First,
        Builtin::Last,
        Builtin::Rest,
        Builtin::Push,
        Builtin::Puts,
    ];

    /// Look a builtin up by the name programs call it by.
    pub fn lookup(name: &str) -> Option<Builtin> {
        Self::ALL.into_iter().find(|builtin| builtin.name() == name)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Builtin::Len => "len",
            Builtin::First => "first",
            Builtin::Last => "last",
            Builtin::Rest => "rest",
            Builtin::Push => "push",
            Builtin::Puts => "puts",
        }
    }

    /// Invoke the builtin. `puts` writes to `out`.
    pub fn call(self, args: &[Value], out: &PrintHandlerImpl) -> EvalResult {
        tracing::trace!(builtin = self.name(), args = args.len(), "call builtin");
        match self {
            Builtin::Len => builtin_len(args),
            Builtin::First => builtin_first(args),
            Builtin::Last => builtin_last(args),
            Builtin::Rest => builtin_rest(args),
            Builtin::Push => builtin_push(args),
            Builtin::Puts => {
                for arg in args {
                    out.println(&arg.inspect());
                }
                Ok(Value::Null)
            }
        }
    }
}

fn expect_args(args: &[Value], want: usize) -> Result<(), EvalError> {
    if args.len() == want {
        Ok(())
    } else {
        Err(wrong_arg_count(args.len(), want))
    }
}

fn len_value(len: usize) -> Value {
    Value::Integer(i64::try_from(len).unwrap_or(i64::MAX))
}

/// String length counts bytes.
fn builtin_len(args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    match &args[0] {
        Value::String(s) => Ok(len_value(s.len())),
        Value::Array(items) => Ok(len_value(items.len())),
        other => Err(unsupported_argument("len", other)),
    }
}

fn builtin_first(args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    match &args[0] {
        Value::Array(items) => Ok(items.first().cloned().unwrap_or(Value::Null)),
        other => Err(expected_array("first", other)),
    }
}

fn builtin_last(args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    match &args[0] {
        Value::Array(items) => Ok(items.last().cloned().unwrap_or(Value::Null)),
        other => Err(expected_array("last", other)),
    }
}

/// Everything but the first element, as a new array. `null` when empty.
fn builtin_rest(args: &[Value]) -> EvalResult {
    expect_args(args, 1)?;
    match &args[0] {
        Value::Array(items) => match items.split_first() {
            Some((_, rest)) => Ok(Value::array(rest.to_vec())),
            None => Ok(Value::Null),
        },
        other => Err(expected_array("rest", other)),
    }
}

/// A new array with the value appended; the argument is left untouched.
fn builtin_push(args: &[Value]) -> EvalResult {
    expect_args(args, 2)?;
    match &args[0] {
        Value::Array(items) => {
            let mut pushed = Vec::with_capacity(items.len() + 1);
            pushed.extend_from_slice(items);
            pushed.push(args[1].clone());
            Ok(Value::array(pushed))
        }
        other => Err(expected_array("push", other)),
    }
}
