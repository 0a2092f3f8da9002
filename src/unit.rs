//! Captured units and their sequences
//!
//! A `CapturedUnit` is the callable a loop iteration produces: a real
//! boxed thunk, plus a `CaptureKind` record of what the thunk closed
//! over. Carrying the capture as inspectable data alongside the code
//! to run is what makes the aliasing invariants testable — whether two
//! units share one storage location is otherwise invisible from the
//! outside.

use crate::binding::VarCell;
use smallvec::SmallVec;
use std::fmt;

/// What a unit captured at creation time.
#[derive(Debug, Clone)]
pub enum CaptureKind {
    /// A handle to a shared (or per-iteration) mutable cell; the unit
    /// reads the cell's current value at every invocation.
    SharedCell { cell: VarCell },
    /// An owned copy frozen at creation; no aliasing to any cell.
    OwnedCopy { value: i64 },
}

/// A callable produced inside one loop iteration.
pub struct CapturedUnit {
    thunk: Box<dyn Fn() -> i64>,
    capture: CaptureKind,
}

impl CapturedUnit {
    /// Create a unit that closes over a cell handle by reference
    /// semantics: invoking it reads the cell's value at call time.
    pub fn shared(cell: VarCell) -> Self {
        let handle = cell.handle();
        CapturedUnit {
            thunk: Box::new(move || handle.get()),
            capture: CaptureKind::SharedCell { cell },
        }
    }

    /// Create a unit that owns a frozen copy of a value.
    pub fn frozen(value: i64) -> Self {
        CapturedUnit {
            thunk: Box::new(move || value),
            capture: CaptureKind::OwnedCopy { value },
        }
    }

    /// Invoke the unit. A pure read: never mutates captured state, so
    /// repeated invocations yield the same value.
    pub fn invoke(&self) -> i64 {
        (self.thunk)()
    }

    /// Inspect what this unit captured.
    pub fn capture(&self) -> &CaptureKind {
        &self.capture
    }

    /// The shared cell this unit aliases, if any.
    pub fn cell(&self) -> Option<&VarCell> {
        match &self.capture {
            CaptureKind::SharedCell { cell } => Some(cell),
            CaptureKind::OwnedCopy { .. } => None,
        }
    }
}

impl fmt::Debug for CapturedUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CapturedUnit({:?})", self.capture)
    }
}

/// Ordered sequence of captured units; insertion order is creation
/// order. Inline capacity matches the 4-unit demonstration loop so
/// the common case never heap-allocates the sequence itself.
#[derive(Debug, Default)]
pub struct UnitSequence {
    units: SmallVec<[CapturedUnit; 4]>,
}

impl UnitSequence {
    /// Create an empty sequence.
    pub fn new() -> Self {
        UnitSequence {
            units: SmallVec::new(),
        }
    }

    /// Append a unit (creation order).
    pub fn push(&mut self, unit: CapturedUnit) {
        self.units.push(unit);
    }

    /// Number of units produced.
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Check if no units were produced.
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Get a unit by creation index.
    pub fn get(&self, index: usize) -> Option<&CapturedUnit> {
        self.units.get(index)
    }

    /// Iterate units in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &CapturedUnit> {
        self.units.iter()
    }
}
