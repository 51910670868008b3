//! Counted and collection loops.
//!
//! Loop variable cells come from the [`IterationController`]; this module
//! only sequences condition, body, and post step. Each iteration's body runs
//! in its own block scope on top of the chain the controller hands out.

use lexa_ir::{ForLoop, RangeLoop};

use super::{Evaluator, Flow};
use crate::chain::ScopeChain;
use crate::config::LoopForm;
use crate::errors::{EvalError, EvalResult};
use crate::iteration::IterationController;
use crate::Value;

impl Evaluator {
    pub(crate) fn exec_counted(&mut self, lp: &ForLoop, chain: &ScopeChain) -> EvalResult<Flow> {
        let mut controller =
            IterationController::for_loop(&self.config, LoopForm::Counted, lp.binding);

        // The initializer sees the enclosing scope, not the header variable.
        let header = match &lp.init {
            Some((name, init)) => Some((*name, self.eval(init, chain)?)),
            None => None,
        };
        let header_name = header.as_ref().map(|(name, _)| *name);
        let mut current = controller
            .enter(chain, header)
            .map_err(|e| self.scope_error(e))?;

        loop {
            if let Some(cond) = &lp.cond {
                if !self.eval_condition(cond, &current)? {
                    break;
                }
            }
            match self.exec_scoped(&lp.body, &current)? {
                Flow::Break => break,
                ret @ Flow::Return(_) => return Ok(ret),
                Flow::Normal | Flow::Continue => {}
            }
            current = controller
                .advance(chain, &current, header_name)
                .map_err(|e| self.scope_error(e))?;
            if let Some(post) = &lp.post {
                self.exec_stmt(post, &current)?;
            }
        }
        Ok(Flow::Normal)
    }

    /// The collection is evaluated once, before the first iteration.
    pub(crate) fn exec_range(&mut self, lp: &RangeLoop, chain: &ScopeChain) -> EvalResult<Flow> {
        let collection = self.eval(&lp.collection, chain)?;
        let len = match &collection {
            Value::List(items) => items.len(),
            Value::Int(n) => usize::try_from(*n).unwrap_or(0),
            other => return Err(EvalError::type_mismatch("list or int", other)),
        };
        let mut controller =
            IterationController::for_loop(&self.config, LoopForm::Collection, lp.binding);

        for pos in 0..len {
            let (key, value) = range_entry(&collection, pos);
            let mut vars = Vec::with_capacity(2);
            if let Some(name) = lp.key {
                vars.push((name, key));
            }
            if let Some(name) = lp.value {
                vars.push((name, value));
            }
            let iteration = controller
                .bind(chain, &vars)
                .map_err(|e| self.scope_error(e))?;

            match self.exec_scoped(&lp.body, &iteration)? {
                Flow::Break => break,
                ret @ Flow::Return(_) => return Ok(ret),
                Flow::Normal | Flow::Continue => {}
            }
        }
        Ok(Flow::Normal)
    }
}

/// Key and value at `pos`: index and element for lists, `pos` twice for ints.
fn range_entry(collection: &Value, pos: usize) -> (Value, Value) {
    let key = Value::from_len(pos);
    let value = match collection {
        Value::List(items) => items.get(pos).cloned().unwrap_or(Value::Unit),
        _ => key.clone(),
    };
    (key, value)
}
