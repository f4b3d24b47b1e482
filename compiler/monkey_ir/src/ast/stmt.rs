//! Statement nodes and the program root.

use std::fmt;

use super::{Expr, Identifier};

/// Statement node.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Statement {
    /// `let <name> = <value>;`
    Let { name: Identifier, value: Expr },
    /// `return <value>;`
    Return(Expr),
    /// An expression evaluated for its value.
    Expression(Expr),
    Block(Block),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return(value) => write!(f, "return {value};"),
            Statement::Expression(expr) => write!(f, "{expr}"),
            Statement::Block(block) => write!(f, "{block}"),
        }
    }
}

/// Brace-delimited statement sequence.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Block {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}

/// Root of a parsed source.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for stmt in &self.statements {
            write!(f, "{stmt}")?;
        }
        Ok(())
    }
}
