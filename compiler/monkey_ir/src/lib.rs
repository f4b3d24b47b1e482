//! Monkey IR - shared data structures for the Monkey interpreter.
//!
//! This crate contains the types passed between phases:
//! - Spans for source locations
//! - Tokens produced by the lexer
//! - AST nodes produced by the parser and consumed by the evaluator
//!
//! Every AST node owns its children. The only shared node is
//! [`FunctionLiteral`], held behind an `Rc` so that runtime function values
//! can point at their body without copying it.

pub mod ast;
mod span;
mod token;

pub use ast::{
    Block, Expr, FunctionLiteral, Identifier, InfixOp, PrefixOp, Program, Statement,
};
pub use span::Span;
pub use token::{Token, TokenKind};
