//! Storage cells.
//!
//! A [`Cell`] is the unit of aliasing. Every binding in a store is a cell,
//! closures reach variables only through cells, and two handles to the same
//! cell observe each other's writes. Cloning a `Cell` clones the handle, never
//! the storage; a second independent location takes an explicit `Cell::new`.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::chain::ScopeChain;
use crate::Value;

/// A single mutable storage location.
#[derive(Clone)]
pub struct Cell(Rc<RefCell<Value>>);

impl Cell {
    pub fn new(value: Value) -> Self {
        Cell(Rc::new(RefCell::new(value)))
    }

    /// Current value.
    pub fn get(&self) -> Value {
        self.0.borrow().clone()
    }

    /// Overwrite the value; every holder of this cell sees the write.
    pub fn set(&self, value: Value) {
        *self.0.borrow_mut() = value;
    }

    /// Whether both handles refer to the same storage.
    pub fn ptr_eq(&self, other: &Cell) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    /// Whether this is the only handle to the storage.
    pub(crate) fn is_unshared(&self) -> bool {
        Rc::strong_count(&self.0) == 1
    }

    /// Whether the cell holds a function value whose captured chain is `chain`.
    pub(crate) fn holds_closure_over(&self, chain: &ScopeChain) -> bool {
        matches!(&*self.0.borrow(), Value::Function(closure) if closure.captured().ptr_eq(chain))
    }

    /// Stable identity of the storage, valid while any handle is alive.
    pub fn id(&self) -> CellId {
        CellId(Rc::as_ptr(&self.0) as usize)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cell").field(&self.id()).field(&self.0.borrow()).finish()
    }
}

/// Address-like identity of a [`Cell`], printed as hex.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CellId(usize);

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
