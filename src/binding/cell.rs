//! Shared mutable cell for loop variables
//!
//! A `VarCell` is one storage location that may be referenced by many
//! handles. The loop is the single writer (via `set`/`bump`); produced
//! units are readers. Identity is cell identity, not value equality:
//! two handles are the same binding only when they point at the same
//! allocation.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A named integer binding backed by a shared mutable cell.
///
/// Cloning a `VarCell` clones the *handle*, not the storage: every
/// clone reads and writes the same location. This is what lets a loop
/// keep mutating a variable that closures created in earlier
/// iterations still observe.
#[derive(Clone)]
pub struct VarCell {
    name: Rc<str>,
    slot: Rc<Cell<i64>>,
}

impl VarCell {
    /// Create a new binding with its own storage location.
    pub fn new(name: &str, value: i64) -> Self {
        VarCell {
            name: Rc::from(name),
            slot: Rc::new(Cell::new(value)),
        }
    }

    /// The variable's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the current value.
    pub fn get(&self) -> i64 {
        self.slot.get()
    }

    /// Overwrite the current value.
    pub fn set(&self, value: i64) {
        self.slot.set(value);
    }

    /// Apply the loop's increment step (+1).
    pub fn bump(&self) {
        self.slot.set(self.slot.get() + 1);
    }

    /// Clone a handle to the same storage location.
    pub fn handle(&self) -> VarCell {
        self.clone()
    }

    /// Check whether two handles alias the same storage location.
    pub fn is_same_cell(&self, other: &VarCell) -> bool {
        Rc::ptr_eq(&self.slot, &other.slot)
    }
}

impl fmt::Debug for VarCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VarCell({} = {})", self.name, self.get())
    }
}
