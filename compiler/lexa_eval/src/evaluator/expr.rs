//! Expression evaluation.

use std::sync::Arc;

use lexa_ir::{Expr, Name};

use super::Evaluator;
use crate::chain::ScopeChain;
use crate::errors::{EvalError, EvalResult};
use crate::operators::evaluate_binary;
use crate::{Cell, Closure, Value};

impl Evaluator {
    pub(crate) fn eval(&mut self, expr: &Expr, chain: &ScopeChain) -> EvalResult {
        match expr {
            Expr::Int(n) => Ok(Value::Int(*n)),
            Expr::Str(s) => Ok(Value::string(s.as_str())),
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Ident(name) => Ok(self.resolve(*name, chain)?.get()),
            Expr::Binary { op, left, right } => {
                let left = self.eval(left, chain)?;
                let right = self.eval(right, chain)?;
                evaluate_binary(&left, &right, *op)
            }
            // Capture the live chain itself, not a copy of its values.
            Expr::Func(lit) => Ok(Value::Function(Closure::new(
                Arc::clone(lit),
                chain.clone(),
            ))),
            Expr::Call { callee, args } => {
                let callee = self.eval(callee, chain)?;
                let args = self.eval_all(args, chain)?;
                self.invoke(&callee, args)
            }
            Expr::List(items) => Ok(Value::list(self.eval_all(items, chain)?)),
            Expr::Len(target) => match self.eval(target, chain)? {
                Value::List(items) => Ok(Value::from_len(items.len())),
                Value::Str(s) => Ok(Value::from_len(s.len())),
                other => Err(EvalError::type_mismatch("list or string", &other)),
            },
            Expr::Append { list, items } => {
                let base = match self.eval(list, chain)? {
                    Value::List(base) => base,
                    other => return Err(EvalError::type_mismatch("list", &other)),
                };
                let mut out = base.to_vec();
                out.extend(self.eval_all(items, chain)?);
                Ok(Value::list(out))
            }
            Expr::Index { target, index } => {
                let target = self.eval(target, chain)?;
                let index = self.eval(index, chain)?;
                index_list(&target, &index)
            }
            Expr::Addr(name) => Ok(Value::string(
                self.resolve(*name, chain)?.id().to_string(),
            )),
        }
    }

    /// Evaluate left to right.
    pub(crate) fn eval_all(&mut self, exprs: &[Expr], chain: &ScopeChain) -> EvalResult<Vec<Value>> {
        exprs.iter().map(|e| self.eval(e, chain)).collect()
    }

    pub(crate) fn eval_condition(&mut self, cond: &Expr, chain: &ScopeChain) -> EvalResult<bool> {
        match self.eval(cond, chain)? {
            Value::Bool(b) => Ok(b),
            other => Err(EvalError::type_mismatch("bool", &other)),
        }
    }

    pub(crate) fn resolve(&self, name: Name, chain: &ScopeChain) -> EvalResult<Cell> {
        chain.resolve(name).map_err(|e| self.scope_error(e))
    }
}

fn index_list(target: &Value, index: &Value) -> EvalResult {
    let Value::List(items) = target else {
        return Err(EvalError::type_mismatch("list", target));
    };
    let i = index
        .as_int()
        .ok_or_else(|| EvalError::type_mismatch("int", index))?;
    usize::try_from(i)
        .ok()
        .and_then(|pos| items.get(pos))
        .cloned()
        .ok_or(EvalError::IndexOutOfBounds {
            index: i,
            len: items.len(),
        })
}
