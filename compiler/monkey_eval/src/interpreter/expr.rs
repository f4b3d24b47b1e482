//! Expression evaluation.

use monkey_ir::{Block, Expr, Identifier};
use monkey_stack::ensure_sufficient_stack;

use super::{Flow, Interpreter};
use crate::builtins::Builtin;
use crate::environment::Environment;
use crate::errors::{identifier_not_found, EvalError};
use crate::hash::{HashKey, HashValue};
use crate::index::evaluate_index;
use crate::operators::evaluate_binary;
use crate::unary_operators::evaluate_unary;
use crate::value::Value;

impl Interpreter {
    /// Evaluate one expression.
    ///
    /// Operands are evaluated left to right and the first error wins.
    pub(super) fn eval_expression(&self, expr: &Expr, env: &Environment) -> Flow<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Integer(n) => Ok(Value::Integer(*n)),
            Expr::Boolean(b) => Ok(Value::Boolean(*b)),
            Expr::String(s) => Ok(Value::String(s.clone())),
            Expr::Identifier(ident) => Ok(eval_identifier(ident, env)?),
            Expr::Prefix { op, operand } => {
                let operand = self.eval_expression(operand, env)?;
                Ok(evaluate_unary(&operand, *op)?)
            }
            Expr::Infix { op, left, right } => {
                let left = self.eval_expression(left, env)?;
                let right = self.eval_expression(right, env)?;
                Ok(evaluate_binary(&left, &right, *op)?)
            }
            Expr::If {
                condition,
                consequence,
                alternative,
            } => self.eval_if(condition, consequence, alternative.as_ref(), env),
            Expr::Function(literal) => Ok(Value::function(literal.clone(), env.clone())),
            Expr::Call { callee, args } => {
                let callee = self.eval_expression(callee, env)?;
                let args = self.eval_expressions(args, env)?;
                self.eval_call(&callee, args)
            }
            Expr::Array(items) => Ok(Value::array(self.eval_expressions(items, env)?)),
            Expr::Hash(pairs) => self.eval_hash_literal(pairs, env),
            Expr::Index { collection, index } => {
                let collection = self.eval_expression(collection, env)?;
                let index = self.eval_expression(index, env)?;
                Ok(evaluate_index(&collection, &index)?)
            }
        })
    }

    /// Evaluate a list of expressions left to right.
    pub(super) fn eval_expressions(&self, exprs: &[Expr], env: &Environment) -> Flow<Vec<Value>> {
        exprs
            .iter()
            .map(|expr| self.eval_expression(expr, env))
            .collect()
    }

    /// Only `false` selects the alternative. A branch that produces no
    /// value, and a missing alternative, give `null`.
    fn eval_if(
        &self,
        condition: &Expr,
        consequence: &Block,
        alternative: Option<&Block>,
        env: &Environment,
    ) -> Flow<Value> {
        let condition = self.eval_expression(condition, env)?;
        let branch = if condition.is_truthy() {
            Some(consequence)
        } else {
            alternative
        };

        match branch {
            Some(block) => Ok(self
                .eval_statements(&block.statements, env)?
                .unwrap_or(Value::Null)),
            None => Ok(Value::Null),
        }
    }

    /// Each key is evaluated and checked before its value.
    fn eval_hash_literal(&self, pairs: &[(Expr, Expr)], env: &Environment) -> Flow<Value> {
        let mut hash = HashValue::default();
        for (key_expr, value_expr) in pairs {
            let key = self.eval_expression(key_expr, env)?;
            let hash_key = HashKey::from_value(&key)?;
            let value = self.eval_expression(value_expr, env)?;
            hash.insert(hash_key, key, value);
        }
        Ok(Value::hash(hash))
    }
}

/// Bindings first, then builtins.
fn eval_identifier(ident: &Identifier, env: &Environment) -> Result<Value, EvalError> {
    if let Some(value) = env.get(&ident.name) {
        return Ok(value);
    }
    Builtin::lookup(&ident.name)
        .map(Value::Builtin)
        .ok_or_else(|| identifier_not_found(&ident.name))
}
