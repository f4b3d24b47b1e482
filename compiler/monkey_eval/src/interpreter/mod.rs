//! Tree-walking interpreter for Monkey.
//!
//! # Control flow
//!
//! Evaluation returns [`Flow`], whose error side is [`Unwind`]: either a
//! `return` carrying its value or a runtime error. Both travel outward
//! through `?` until something handles them. Function application is the
//! only place a `Return` turns back into a plain value (plus the top of the
//! program, so a stray top-level `return` simply ends the program with that
//! value). Errors are never handled and reach [`Interpreter::eval_program`]
//! unchanged.
//!
//! # Module Structure
//!
//! - `mod.rs`: Interpreter state, programs, statements and blocks
//! - `expr.rs`: Expressions
//! - `function_call.rs`: Calling functions and builtins

mod expr;
mod function_call;

use monkey_ir::{Program, Statement};
use monkey_stack::ensure_sufficient_stack;

use crate::environment::Environment;
use crate::errors::EvalError;
use crate::print_handler::{stdout_handler, SharedPrintHandler};
use crate::value::Value;

/// Why evaluation stopped early.
#[derive(Debug)]
pub(crate) enum Unwind {
    /// A `return` statement is unwinding to the nearest function boundary.
    Return(Value),
    /// A runtime error is unwinding to the top of the program.
    Error(EvalError),
}

impl From<EvalError> for Unwind {
    fn from(error: EvalError) -> Self {
        Unwind::Error(error)
    }
}

/// Result of evaluating something that may `return`.
pub(crate) type Flow<T> = Result<T, Unwind>;

/// Evaluates programs against a persistent global environment.
///
/// Bindings made by one [`eval_program`](Self::eval_program) call are
/// visible to the next, which is what the REPL relies on.
pub struct Interpreter {
    env: Environment,
    print_handler: SharedPrintHandler,
}

impl Interpreter {
    /// Interpreter whose `puts` writes to stdout.
    pub fn new() -> Self {
        Self::with_print_handler(stdout_handler())
    }

    /// Interpreter whose `puts` writes to `print_handler`.
    pub fn with_print_handler(print_handler: SharedPrintHandler) -> Self {
        Interpreter {
            env: Environment::new(),
            print_handler,
        }
    }

    /// The global environment.
    pub fn environment(&self) -> &Environment {
        &self.env
    }

    /// Evaluate `program` in the global environment.
    ///
    /// Returns the value of the last statement that produced one, or `None`
    /// when no statement did (for example a program made only of `let`s).
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = program.statements.len())
    )]
    pub fn eval_program(&mut self, program: &Program) -> Result<Option<Value>, EvalError> {
        let env = self.env.clone();
        match self.eval_statements(&program.statements, &env) {
            Ok(value) => Ok(value),
            Err(Unwind::Return(value)) => Ok(Some(value)),
            Err(Unwind::Error(error)) => {
                tracing::debug!(%error, "evaluation failed");
                Err(error)
            }
        }
    }

    /// Evaluate statements in order, keeping the last value produced.
    fn eval_statements(&self, statements: &[Statement], env: &Environment) -> Flow<Option<Value>> {
        let mut result = None;
        for statement in statements {
            if let Some(value) = self.eval_statement(statement, env)? {
                result = Some(value);
            }
        }
        Ok(result)
    }

    fn eval_statement(&self, statement: &Statement, env: &Environment) -> Flow<Option<Value>> {
        ensure_sufficient_stack(|| match statement {
            Statement::Let { name, value } => {
                let value = self.eval_expression(value, env)?;
                env.set(name.name.clone(), value);
                Ok(None)
            }
            Statement::Return(value) => {
                let value = self.eval_expression(value, env)?;
                Err(Unwind::Return(value))
            }
            Statement::Expression(expr) => self.eval_expression(expr, env).map(Some),
            // Blocks share their enclosing scope.
            Statement::Block(block) => self.eval_statements(&block.statements, env),
        })
    }
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}
