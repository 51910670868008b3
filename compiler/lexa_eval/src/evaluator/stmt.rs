//! Statement execution.

use lexa_ir::{Expr, Stmt};

use super::{Evaluator, Flow};
use crate::chain::ScopeChain;
use crate::errors::{EvalError, EvalResult};
use crate::frame::DeferredAction;
use crate::{Cell, Value};

impl Evaluator {
    /// Run statements in `chain` until one transfers control.
    pub(crate) fn exec_block(&mut self, stmts: &[Stmt], chain: &ScopeChain) -> EvalResult<Flow> {
        for stmt in stmts {
            let flow = self.exec_stmt(stmt, chain)?;
            if !matches!(flow, Flow::Normal) {
                return Ok(flow);
            }
        }
        Ok(Flow::Normal)
    }

    /// Run statements in a new block scope on top of `chain`.
    pub(crate) fn exec_scoped(&mut self, stmts: &[Stmt], chain: &ScopeChain) -> EvalResult<Flow> {
        let inner = chain.push_empty();
        let outcome = self.exec_block(stmts, &inner);
        inner.release_if_unreachable();
        outcome
    }

    pub(crate) fn exec_stmt(&mut self, stmt: &Stmt, chain: &ScopeChain) -> EvalResult<Flow> {
        match stmt {
            Stmt::Let { name, init } => {
                let value = self.eval(init, chain)?;
                chain
                    .declare(*name, value)
                    .map_err(|e| self.scope_error(e))?;
            }
            Stmt::Var { name, kind } => {
                chain
                    .declare(*name, Value::zero(*kind))
                    .map_err(|e| self.scope_error(e))?;
            }
            Stmt::Assign { name, value } => {
                let value = self.eval(value, chain)?;
                self.resolve(*name, chain)?.set(value);
            }
            Stmt::Expr(expr) => {
                self.eval(expr, chain)?;
            }
            Stmt::Block(body) => return self.exec_scoped(body, chain),
            Stmt::If {
                cond,
                then_branch,
                else_branch,
            } => {
                let branch = if self.eval_condition(cond, chain)? {
                    then_branch
                } else {
                    else_branch
                };
                return self.exec_scoped(branch, chain);
            }
            Stmt::For(lp) => return self.exec_counted(lp, chain),
            Stmt::Range(lp) => return self.exec_range(lp, chain),
            Stmt::Defer { callee, args } => self.register_deferred(callee, args, chain)?,
            Stmt::Return(value) => return self.exec_return(value.as_ref(), chain),
            Stmt::Break => return Ok(Flow::Break),
            Stmt::Continue => return Ok(Flow::Continue),
            Stmt::Print(values) => self.exec_print(values, chain)?,
        }
        Ok(Flow::Normal)
    }

    /// `return expr` writes the named result slot, if any, before deferred
    /// actions run; a bare `return` leaves the slot as it is.
    fn exec_return(&mut self, value: Option<&Expr>, chain: &ScopeChain) -> EvalResult<Flow> {
        let Some(expr) = value else {
            return Ok(Flow::Return(Value::Unit));
        };
        let value = self.eval(expr, chain)?;
        if let Some(slot) = self.current_result_slot() {
            slot.set(value.clone());
        }
        Ok(Flow::Return(value))
    }

    fn current_result_slot(&self) -> Option<Cell> {
        self.frames
            .last()
            .and_then(|frame| frame.result_slot().cloned())
    }

    fn register_deferred(
        &mut self,
        callee: &Expr,
        args: &[Expr],
        chain: &ScopeChain,
    ) -> EvalResult<()> {
        let value = self.eval(callee, chain)?;
        let callee = value
            .as_closure()
            .cloned()
            .ok_or_else(|| EvalError::type_mismatch("func", &value))?;
        let args = self.eval_all(args, chain)?;
        // `run` and every call push a frame before executing statements.
        if let Some(frame) = self.frames.last_mut() {
            frame.defer(DeferredAction { callee, args });
            tracing::debug!(pending = frame.pending(), "deferred action registered");
        }
        Ok(())
    }

    fn exec_print(&mut self, values: &[Expr], chain: &ScopeChain) -> EvalResult<()> {
        let values = self.eval_all(values, chain)?;
        let line = values
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        self.print_handler.println(&line);
        Ok(())
    }
}
