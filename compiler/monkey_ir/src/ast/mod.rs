//! Syntax tree types.
//!
//! # Module Structure
//!
//! - `expr`: Expression nodes (`Expr`, `Identifier`, `FunctionLiteral`)
//! - `operators`: Prefix and infix operators
//! - `stmt`: Statement nodes (`Statement`, `Block`) and the `Program` root
//!
//! Every node implements `Display`, producing the canonical source rendering
//! used by the `parse` command, function inspection and parser tests.

mod expr;
mod operators;
mod stmt;

#[cfg(test)]
mod tests;

pub use expr::{Expr, FunctionLiteral, Identifier};
pub use operators::{InfixOp, PrefixOp};
pub use stmt::{Block, Program, Statement};

use std::fmt;

/// Write `items` separated by `sep`.
pub(crate) fn write_joined<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: &[T],
    sep: &str,
) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
