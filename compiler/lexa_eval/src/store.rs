//! Binding stores: the name → cell map of one scope.
//!
//! A store is created when a scope is entered (a call, a block, a loop or loop
//! iteration) and is shared by reference from then on. Closures keep stores
//! alive through their captured chain; nothing ever copies a store's contents
//! into another store.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use lexa_ir::Name;
use rustc_hash::FxHashMap;

use crate::chain::ScopeChain;
use crate::errors::ScopeError;
use crate::{Cell, Value};

/// Name → cell bindings of a single scope.
#[derive(Debug, Default)]
pub struct BindingStore {
    cells: FxHashMap<Name, Cell>,
}

impl BindingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to a new cell holding `initial`.
    ///
    /// Fails if `name` is already bound in this store; bindings in other
    /// stores are irrelevant (shadowing is allowed).
    pub fn declare(&mut self, name: Name, initial: Value) -> Result<Cell, ScopeError> {
        if self.cells.contains_key(&name) {
            return Err(ScopeError::Redeclared(name));
        }
        let cell = Cell::new(initial);
        self.cells.insert(name, cell.clone());
        Ok(cell)
    }

    /// The cell bound to `name` in this store only.
    pub fn lookup_local(&self, name: Name) -> Option<Cell> {
        self.cells.get(&name).cloned()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Declared names, in unspecified order.
    pub fn names(&self) -> impl Iterator<Item = Name> + '_ {
        self.cells.keys().copied()
    }
}

/// Shared handle to a [`BindingStore`].
///
/// Single-threaded reference counting; cloning shares the store.
#[derive(Clone, Default)]
pub struct StoreRef(Rc<RefCell<BindingStore>>);

impl StoreRef {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn declare(&self, name: Name, initial: Value) -> Result<Cell, ScopeError> {
        self.0.borrow_mut().declare(name, initial)
    }

    pub fn lookup_local(&self, name: Name) -> Option<Cell> {
        self.0.borrow().lookup_local(name)
    }

    /// Write `value` into the cell bound to `name` here, declaring it first if
    /// this store has no such binding.
    pub fn rebind(&self, name: Name, value: Value) -> Result<Cell, ScopeError> {
        match self.lookup_local(name) {
            Some(cell) => {
                cell.set(value);
                Ok(cell)
            }
            None => self.declare(name, value),
        }
    }

    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }

    pub fn names(&self) -> Vec<Name> {
        self.0.borrow().names().collect()
    }

    pub fn ptr_eq(&self, other: &StoreRef) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether this is the only handle to the store.
    pub(crate) fn is_unshared(&self) -> bool {
        Rc::strong_count(&self.0) == 1
    }

    /// Number of cells holding a closure over `chain`, or `None` if any cell
    /// is also reachable through a handle outside this store.
    pub(crate) fn closures_over(&self, chain: &ScopeChain) -> Option<usize> {
        let store = self.0.borrow();
        if !store.cells.values().all(Cell::is_unshared) {
            return None;
        }
        Some(
            store
                .cells
                .values()
                .filter(|cell| cell.holds_closure_over(chain))
                .count(),
        )
    }

    /// Drop every binding.
    pub(crate) fn clear(&self) {
        // Values are dropped after the borrow ends; dropping a closure can
        // release other stores.
        let cells = std::mem::take(&mut self.0.borrow_mut().cells);
        drop(cells);
    }
}

impl fmt::Debug for StoreRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StoreRef").field(&self.0).finish()
    }
}
