//! Tree-walking evaluator for Monkey.
//!
//! Evaluates a parsed [`Program`](monkey_ir::Program) directly, without an
//! intermediate representation. Runtime values live in [`Value`], variables
//! in a chain of [`Environment`] scopes, and `puts` output goes through a
//! configurable print handler so tests can capture it.
//!
//! # Architecture
//!
//! - `value` / `hash`: The object model
//! - `environment`: Lexically scoped bindings
//! - `operators`, `unary_operators`, `index`: Pure operator semantics
//! - `builtins`: Native functions resolved by name
//! - `interpreter`: Statement and expression evaluation

mod builtins;
mod environment;
pub mod errors;
mod hash;
mod index;
mod interpreter;
mod operators;
mod print_handler;
mod unary_operators;
mod value;

#[cfg(test)]
mod tests;

pub use builtins::Builtin;
pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult};
pub use hash::{HashKey, HashValue};
pub use interpreter::Interpreter;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, PrintHandlerImpl, SharedPrintHandler,
};
pub use value::{FunctionValue, Value};
