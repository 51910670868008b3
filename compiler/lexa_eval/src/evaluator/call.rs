//! Closure invocation and function exit.
//!
//! A call runs in three steps:
//! 1. bind arguments (and the zero-valued named result) in a new store on the
//!    closure's captured chain
//! 2. run the body until it falls off the end, returns, or fails
//! 3. drain the frame's deferred actions, newest first, then read the result
//!
//! Step 3 happens on every exit path. With a named result the call yields the
//! slot's value after the deferred actions ran, so they can change it.

use super::{Evaluator, Flow};
use crate::errors::{EvalError, EvalResult};
use crate::frame::CallFrame;
use crate::stack::{check_call_depth, ensure_sufficient_stack};
use crate::{Closure, Value};

impl Evaluator {
    /// Call a function value with already-evaluated arguments.
    pub fn invoke(&mut self, callee: &Value, args: Vec<Value>) -> EvalResult {
        let closure = callee
            .as_closure()
            .ok_or_else(|| EvalError::type_mismatch("func", callee))?;
        self.call_closure(closure, args)
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(arity = closure.arity(), depth = self.frames.len())
    )]
    pub(crate) fn call_closure(&mut self, closure: &Closure, args: Vec<Value>) -> EvalResult {
        if args.len() != closure.arity() {
            return Err(EvalError::ArityMismatch {
                expected: closure.arity(),
                got: args.len(),
            });
        }
        check_call_depth(self.frames.len(), self.config.max_call_depth)?;

        let activation = closure
            .activate(args)
            .map_err(|e| self.scope_error(e))?;
        self.frames.push(CallFrame::new(activation.result_slot));
        let outcome =
            ensure_sufficient_stack(|| self.exec_block(&closure.func().body, &activation.chain));
        let result = self.finish_frame(outcome);
        activation.chain.release_if_unreachable();
        result
    }

    /// Pop the innermost frame, run its deferred actions, and produce the
    /// call's result.
    ///
    /// A failing deferred action does not stop the remaining ones; the most
    /// recent failure is the one reported.
    pub(crate) fn finish_frame(&mut self, outcome: EvalResult<Flow>) -> EvalResult {
        let mut frame = self.frames.pop().unwrap_or_default();
        let mut outcome = match outcome {
            Ok(Flow::Break) => Err(EvalError::MisplacedControl { what: "break" }),
            Ok(Flow::Continue) => Err(EvalError::MisplacedControl { what: "continue" }),
            other => other,
        };

        if frame.pending() > 0 {
            tracing::debug!(pending = frame.pending(), "running deferred actions");
        }
        while let Some(action) = frame.next_deferred() {
            if let Err(err) = self.call_closure(&action.callee, action.args) {
                tracing::debug!(%err, "deferred action failed");
                outcome = Err(err);
            }
        }

        let flow = outcome?;
        Ok(match (frame.result_slot(), flow) {
            (Some(slot), _) => slot.get(),
            (None, Flow::Return(value)) => value,
            (None, _) => Value::Unit,
        })
    }
}
