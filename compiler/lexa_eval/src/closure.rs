//! Closure values.
//!
//! A [`Closure`] pairs a function literal with the scope chain that was live
//! when the literal was evaluated. Calling it pushes a fresh store for the
//! parameters onto that captured chain, never onto the caller's, which is what
//! makes name resolution lexical.

use std::fmt;
use std::sync::Arc;

use lexa_ir::FuncLit;

use crate::chain::ScopeChain;
use crate::errors::ScopeError;
use crate::{Cell, Value};

/// Function literal bound to its captured scope chain.
///
/// Holding a closure keeps every store on its chain alive. Binding it in one
/// of those stores forms a reference cycle; see [`Evaluator`](crate::Evaluator)
/// for when such cycles are broken.
#[derive(Clone)]
pub struct Closure {
    func: Arc<FuncLit>,
    captured: ScopeChain,
}

/// Scope set up for one call of a closure.
pub(crate) struct Activation {
    /// Captured chain plus the call's own store.
    pub(crate) chain: ScopeChain,
    /// Cell backing the named result, when the literal declares one.
    pub(crate) result_slot: Option<Cell>,
}

impl Closure {
    pub fn new(func: Arc<FuncLit>, captured: ScopeChain) -> Self {
        Closure { func, captured }
    }

    pub fn func(&self) -> &FuncLit {
        &self.func
    }

    pub fn captured(&self) -> &ScopeChain {
        &self.captured
    }

    pub fn arity(&self) -> usize {
        self.func.params.len()
    }

    pub(crate) fn func_ptr(&self) -> *const FuncLit {
        Arc::as_ptr(&self.func)
    }

    /// Same literal and same captured chain.
    pub fn ptr_eq(&self, other: &Closure) -> bool {
        Arc::ptr_eq(&self.func, &other.func) && self.captured.ptr_eq(&other.captured)
    }

    /// Bind `args` to the parameters in a new store on top of the captured
    /// chain, and seed the named result with its zero value.
    ///
    /// The caller checks arity first; extra or missing arguments are not
    /// detected here.
    pub(crate) fn activate(&self, args: Vec<Value>) -> Result<Activation, ScopeError> {
        let chain = self.captured.push_empty();
        for (param, arg) in self.func.params.iter().zip(args) {
            chain.declare(*param, arg)?;
        }
        let result_slot = match &self.func.result {
            Some(result) => Some(chain.declare(result.name, Value::zero(result.kind))?),
            None => None,
        };
        Ok(Activation { chain, result_slot })
    }
}

impl fmt::Debug for Closure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Closure")
            .field("params", &self.func.params)
            .field("captured_depth", &self.captured.depth())
            .finish()
    }
}
