//! Iteration variable identity.
//!
//! Whether a closure created inside a loop body sees "its" iteration's value
//! or the loop's final value depends only on whether the loop variable is one
//! cell for the whole loop or a new cell per iteration. [`IterationController`]
//! owns that decision so the evaluator's loop code never creates loop
//! variable cells itself.
//!
//! | binding               | counted loop                                   | collection loop                |
//! |-----------------------|------------------------------------------------|--------------------------------|
//! | `Shared`              | header cell declared once, post step mutates it | key/value cells reassigned     |
//! | `FreshPerIteration`   | new cell copied from the previous one before each post step | new key/value cells |
//!
//! Variables declared inside the body are unaffected: the body gets a new
//! block scope every iteration under either policy.

use lexa_ir::{LoopBinding, Name};

use crate::chain::ScopeChain;
use crate::config::{EvalConfig, LoopForm};
use crate::errors::ScopeError;
use crate::Value;

/// Hands out the scope chain each loop iteration runs under.
#[derive(Debug)]
pub struct IterationController {
    binding: LoopBinding,
    /// Loop-wide chain, created on first use under `Shared`.
    shared: Option<ScopeChain>,
}

impl IterationController {
    pub fn new(binding: LoopBinding) -> Self {
        IterationController {
            binding,
            shared: None,
        }
    }

    /// Controller for a loop of `form`, using the node's explicit binding if any.
    pub fn for_loop(config: &EvalConfig, form: LoopForm, explicit: Option<LoopBinding>) -> Self {
        let binding = config.binding_for(form, explicit);
        tracing::debug!(?form, ?binding, "loop binding");
        Self::new(binding)
    }

    pub fn binding(&self) -> LoopBinding {
        self.binding
    }

    /// Counted loop: chain for the first iteration, holding the header variable.
    pub fn enter(
        &mut self,
        parent: &ScopeChain,
        header: Option<(Name, Value)>,
    ) -> Result<ScopeChain, ScopeError> {
        let chain = parent.push_empty();
        if let Some((name, value)) = header {
            chain.declare(name, value)?;
        }
        if self.binding == LoopBinding::Shared {
            self.shared = Some(chain.clone());
        }
        Ok(chain)
    }

    /// Counted loop: chain for the next iteration. Called after the body and
    /// before the post step, so under `FreshPerIteration` the post step
    /// mutates the next iteration's cell and closures from the finished
    /// iteration keep the value they saw.
    pub fn advance(
        &self,
        parent: &ScopeChain,
        current: &ScopeChain,
        header: Option<Name>,
    ) -> Result<ScopeChain, ScopeError> {
        match self.binding {
            LoopBinding::Shared => Ok(current.clone()),
            LoopBinding::FreshPerIteration => {
                let next = parent.push_empty();
                if let Some(name) = header {
                    let previous = current
                        .innermost()
                        .lookup_local(name)
                        .ok_or(ScopeError::Unbound(name))?;
                    let cell = next.declare(name, previous.get())?;
                    tracing::trace!(from = %previous.id(), to = %cell.id(), "fresh loop cell");
                }
                Ok(next)
            }
        }
    }

    /// Collection loop: chain for one iteration with `vars` bound.
    ///
    /// Under `Shared` the first call declares the cells and later calls write
    /// into them; under `FreshPerIteration` every call declares new cells.
    pub fn bind(
        &mut self,
        parent: &ScopeChain,
        vars: &[(Name, Value)],
    ) -> Result<ScopeChain, ScopeError> {
        if self.binding == LoopBinding::FreshPerIteration {
            return Self::declare_all(parent, vars);
        }
        if let Some(chain) = &self.shared {
            for (name, value) in vars {
                chain.innermost().rebind(*name, value.clone())?;
            }
            return Ok(chain.clone());
        }
        let chain = Self::declare_all(parent, vars)?;
        self.shared = Some(chain.clone());
        Ok(chain)
    }

    fn declare_all(parent: &ScopeChain, vars: &[(Name, Value)]) -> Result<ScopeChain, ScopeError> {
        let chain = parent.push_empty();
        for (name, value) in vars {
            let cell = chain.declare(*name, value.clone())?;
            tracing::trace!(cell = %cell.id(), "loop cell");
        }
        Ok(chain)
    }
}
