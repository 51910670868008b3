//! Persistent scope chains.
//!
//! A [`ScopeChain`] is an immutable linked list of [`StoreRef`]s, innermost
//! first. [`ScopeChain::push`] allocates one new link and shares the rest, so
//! any number of closures can extend the same parent chain without seeing each
//! other's extensions. Lookup walks from the innermost store outwards.

use std::fmt;
use std::rc::Rc;

use lexa_ir::Name;

use crate::errors::ScopeError;
use crate::store::StoreRef;
use crate::{Cell, Value};

struct Link {
    store: StoreRef,
    parent: Option<ScopeChain>,
}

/// Ordered, persistent chain of binding stores. Never empty.
#[derive(Clone)]
pub struct ScopeChain(Rc<Link>);

impl ScopeChain {
    /// A chain holding only `store`.
    pub fn root(store: StoreRef) -> Self {
        ScopeChain(Rc::new(Link {
            store,
            parent: None,
        }))
    }

    /// A new chain with `store` innermost; `self` is unchanged.
    #[must_use]
    pub fn push(&self, store: StoreRef) -> Self {
        ScopeChain(Rc::new(Link {
            store,
            parent: Some(self.clone()),
        }))
    }

    /// Shorthand for pushing an empty store.
    #[must_use]
    pub fn push_empty(&self) -> Self {
        self.push(StoreRef::new())
    }

    /// The store new declarations land in.
    pub fn innermost(&self) -> &StoreRef {
        &self.0.store
    }

    /// The chain without its innermost store.
    pub fn parent(&self) -> Option<&ScopeChain> {
        self.0.parent.as_ref()
    }

    /// Declare `name` in the innermost store.
    pub fn declare(&self, name: Name, initial: Value) -> Result<Cell, ScopeError> {
        self.innermost().declare(name, initial)
    }

    /// The cell of the innermost binding of `name`.
    pub fn resolve(&self, name: Name) -> Result<Cell, ScopeError> {
        self.stores()
            .find_map(|store| store.lookup_local(name))
            .ok_or(ScopeError::Unbound(name))
    }

    /// Stores from innermost to outermost.
    pub fn stores(&self) -> impl Iterator<Item = &StoreRef> {
        std::iter::successors(Some(self), |chain| chain.parent()).map(ScopeChain::innermost)
    }

    /// Number of stores in the chain.
    pub fn depth(&self) -> usize {
        self.stores().count()
    }

    /// Whether both chains are the same chain (not merely equal contents).
    pub fn ptr_eq(&self, other: &ScopeChain) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Clear the innermost store if only its own closures still reach it.
    ///
    /// A closure bound in the store it captured forms an `Rc` cycle
    /// (store, cell, closure, chain, store) that reference counting never
    /// frees. Called when the scope is exited: if every remaining handle to
    /// this link is `self` or such a closure, nothing can observe the store
    /// again and its bindings are dropped. A closure that escaped, or a nested
    /// chain still in use, holds an extra handle and the store is left alone.
    ///
    /// Returns whether the store was cleared.
    pub(crate) fn release_if_unreachable(&self) -> bool {
        let store = self.innermost();
        if !store.is_unshared() {
            return false;
        }
        let Some(captures) = store.closures_over(self).filter(|&n| n > 0) else {
            return false;
        };
        if Rc::strong_count(&self.0) != captures.saturating_add(1) {
            return false;
        }
        store.clear();
        tracing::trace!(captures, "released self-referencing scope");
        true
    }
}

impl fmt::Debug for ScopeChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.stores()).finish()
    }
}
