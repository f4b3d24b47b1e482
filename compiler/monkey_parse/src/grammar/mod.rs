//! Grammar productions.
//!
//! - `stmt`: `let`, `return`, expression statements, blocks
//! - `expr/`: the precedence-climbing expression parser and its handlers

mod expr;
mod stmt;
