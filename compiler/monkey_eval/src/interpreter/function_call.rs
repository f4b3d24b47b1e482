//! Function application.

use std::rc::Rc;

use super::{Flow, Interpreter, Unwind};
use crate::environment::Environment;
use crate::errors::not_a_function;
use crate::value::Value;

impl Interpreter {
    /// Apply `callee` to already evaluated arguments.
    ///
    /// Parameters bind positionally in a fresh scope enclosed by the
    /// function's captured environment. Arity is not checked: surplus
    /// arguments are ignored and parameters without an argument stay
    /// unbound. A body that produces no value gives `null`.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(callee = callee.type_name(), args = args.len())
    )]
    pub(super) fn eval_call(&self, callee: &Value, args: Vec<Value>) -> Flow<Value> {
        match callee {
            Value::Function(func) => {
                let call_env = Environment::enclosed(&func.env);
                for (param, arg) in func.literal.params.iter().zip(args) {
                    call_env.set(Rc::clone(&param.name), arg);
                }

                match self.eval_statements(&func.literal.body.statements, &call_env) {
                    Ok(value) => Ok(value.unwrap_or(Value::Null)),
                    Err(Unwind::Return(value)) => Ok(value),
                    Err(error @ Unwind::Error(_)) => Err(error),
                }
            }
            Value::Builtin(builtin) => Ok(builtin.call(&args, &self.print_handler)?),
            other => Err(not_a_function(other).into()),
        }
    }
}
