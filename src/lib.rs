//! # Clasp - Closure-Capture Semantics, Pinned Down
//!
//! Clasp is a reference implementation of how closures capture loop
//! variables under different binding disciplines.
//!
//! ## Quick Start
//!
//! ```
//! use clasp::evaluator::{run, LoopSpec};
//! use clasp::Discipline;
//!
//! let seed = LoopSpec::new(0, 3);
//! assert_eq!(run(seed, Discipline::SharedFn), vec![4, 4, 4, 4]);
//! assert_eq!(run(seed, Discipline::CopyCapture), vec![0, 1, 2, 3]);
//! ```
//!
//! ## Architecture
//!
//! One self-contained rule set, split by concern:
//!
//! 1. **Binding** - `VarCell`, a named shared mutable cell, and the
//!    `Discipline` under which units capture it
//! 2. **Units** - `CapturedUnit`, a real closure plus a record of what
//!    it captured; `UnitSequence`, units in creation order
//! 3. **Evaluator** - the two-phase driver: produce units by running
//!    the loop, then invoke them all strictly afterwards
//!
//! The disciplines contrast *binding scope* with *capture syntax*:
//! a shared mutable binding yields the post-loop value from every unit
//! no matter how the units were written, while a per-call or
//! per-iteration binding freezes each iteration's value.

pub mod binding;
pub mod error;
pub mod evaluator;
pub mod pipeline;
pub mod unit;

pub use binding::{Discipline, VarCell};
pub use error::{ClaspError, Result};
pub use evaluator::LoopSpec;
pub use unit::{CaptureKind, CapturedUnit, UnitSequence};
