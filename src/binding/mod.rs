//! Loop-variable bindings and capture disciplines
//!
//! This module provides the two pieces every demonstration shares:
//!
//! - `VarCell`: a named, shared, mutable integer binding — the single
//!   storage location a loop mutates and every shared-discipline unit
//!   reads through.
//! - `Discipline`: the capture strategy under which units are
//!   produced, which alone determines what each unit later observes.
//!
//! The key distinction the types make observable: two `VarCell`
//! handles may alias the *same* storage (`is_same_cell`), which is
//! exactly the property that separates a shared binding from a
//! per-iteration one.

mod cell;
mod discipline;

pub use cell::VarCell;
pub use discipline::Discipline;
