//! Per-call bookkeeping: the named result slot and pending deferred actions.

use crate::{Cell, Closure, Value};

/// A deferred call: callee and arguments were evaluated at registration.
#[derive(Debug)]
pub(crate) struct DeferredAction {
    pub(crate) callee: Closure,
    pub(crate) args: Vec<Value>,
}

/// Execution frame of one function call (or of the top-level program).
#[derive(Debug, Default)]
pub(crate) struct CallFrame {
    result_slot: Option<Cell>,
    deferred: Vec<DeferredAction>,
}

impl CallFrame {
    pub(crate) fn new(result_slot: Option<Cell>) -> Self {
        CallFrame {
            result_slot,
            deferred: Vec::new(),
        }
    }

    pub(crate) fn result_slot(&self) -> Option<&Cell> {
        self.result_slot.as_ref()
    }

    pub(crate) fn defer(&mut self, action: DeferredAction) {
        self.deferred.push(action);
    }

    /// Most recently registered action not yet run.
    pub(crate) fn next_deferred(&mut self) -> Option<DeferredAction> {
        self.deferred.pop()
    }

    pub(crate) fn pending(&self) -> usize {
        self.deferred.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chain::ScopeChain;
    use crate::store::StoreRef;
    use lexa_ir::FuncLit;
    use std::sync::Arc;

    fn action(tag: i64) -> DeferredAction {
        let lit = Arc::new(FuncLit {
            params: vec![],
            result: None,
            body: vec![],
        });
        DeferredAction {
            callee: Closure::new(lit, ScopeChain::root(StoreRef::new())),
            args: vec![Value::Int(tag)],
        }
    }

    #[test]
    fn deferred_pop_in_reverse_order() {
        let mut frame = CallFrame::default();
        frame.defer(action(1));
        frame.defer(action(2));
        frame.defer(action(3));
        assert_eq!(frame.pending(), 3);

        let order: Vec<Value> =
            std::iter::from_fn(|| frame.next_deferred().map(|a| a.args[0].clone())).collect();
        assert_eq!(order, vec![Value::Int(3), Value::Int(2), Value::Int(1)]);
        assert_eq!(frame.pending(), 0);
    }

    #[test]
    fn result_slot_is_shared_cell() {
        let slot = Cell::new(Value::Int(0));
        let frame = CallFrame::new(Some(slot.clone()));
        if let Some(cell) = frame.result_slot() {
            cell.set(Value::Int(5));
        }
        assert_eq!(slot.get(), Value::Int(5));
    }
}
