//! The capture evaluator
//!
//! Two strictly ordered phases on one thread of control:
//!
//! 1. **Production** (`produce`): run the loop, building one
//!    `CapturedUnit` per iteration under the requested discipline.
//! 2. **Invocation** (`invoke_all`): after the loop has fully
//!    completed, invoke every unit in creation order and collect what
//!    each one resolves the loop variable to.
//!
//! The phases never interleave; `run` composes them. For the shared
//! disciplines the loop mutates the `VarCell` in place, so the value
//! units observe afterwards is whatever the failing loop condition
//! left behind — computed by actually running the loop, not derived on
//! the side.

use crate::binding::{Discipline, VarCell};
use crate::unit::{CapturedUnit, UnitSequence};

/// An ascending, step-1 loop with an inclusive upper bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopSpec {
    pub start: i64,
    pub bound: i64,
}

impl LoopSpec {
    /// Create a loop over `start..=bound`. A bound below the start is
    /// a zero-iteration loop, not an error.
    pub fn new(start: i64, bound: i64) -> Self {
        LoopSpec { start, bound }
    }

    /// Number of iterations the loop performs.
    pub fn iterations(&self) -> usize {
        if self.bound < self.start {
            0
        } else {
            (self.bound - self.start + 1) as usize
        }
    }

    /// The value the loop variable holds once the loop has exited:
    /// the first value for which the condition evaluates false. For a
    /// loop that runs, that is `bound + 1`; for a loop that never
    /// enters, the start value itself already fails.
    pub fn post_value(&self) -> i64 {
        if self.bound < self.start {
            self.start
        } else {
            self.bound + 1
        }
    }

    /// Index values the loop visits, in order.
    pub fn indices(&self) -> impl Iterator<Item = i64> {
        self.start..=self.bound
    }
}

/// Production phase: run the loop and build the unit sequence.
pub fn produce(spec: LoopSpec, discipline: Discipline) -> UnitSequence {
    match discipline {
        Discipline::SharedFn => produce_shared(spec, shared_unit),
        Discipline::SharedLambda => {
            // Same shared binding as SharedFn; only the syntax of the
            // per-unit factory differs.
            produce_shared(spec, |var: &VarCell| CapturedUnit::shared(var.handle()))
        }
        Discipline::CopyCapture => produce_copies(spec),
        Discipline::PerIteration => produce_per_iteration(spec),
    }
}

/// Invocation phase: invoke every unit in creation order. Must only
/// be called once production has completed.
pub fn invoke_all(units: &UnitSequence) -> Vec<i64> {
    units.iter().map(CapturedUnit::invoke).collect()
}

/// Production then invocation, composed.
pub fn run(spec: LoopSpec, discipline: Discipline) -> Vec<i64> {
    let units = produce(spec, discipline);
    invoke_all(&units)
}

/// Named factory for shared units — the `function`-declaration flavor.
fn shared_unit(var: &VarCell) -> CapturedUnit {
    CapturedUnit::shared(var.handle())
}

/// Drive the loop through a single shared cell. Every produced unit
/// aliases that one cell, and the final failed condition check leaves
/// it at `spec.post_value()`.
fn produce_shared(spec: LoopSpec, make: impl Fn(&VarCell) -> CapturedUnit) -> UnitSequence {
    let var = VarCell::new("i", spec.start);
    let mut units = UnitSequence::new();
    while var.get() <= spec.bound {
        units.push(make(&var));
        var.bump();
    }
    units
}

/// Copy-capture: the factory is invoked immediately, once per
/// iteration, with the variable's then-current value, so each unit
/// owns an independent frozen copy.
fn produce_copies(spec: LoopSpec) -> UnitSequence {
    let var = VarCell::new("i", spec.start);
    let mut units = UnitSequence::new();
    while var.get() <= spec.bound {
        units.push(freeze(var.get()));
        var.bump();
    }
    units
}

fn freeze(value: i64) -> CapturedUnit {
    CapturedUnit::frozen(value)
}

/// Per-iteration binding: a fresh cell per iteration, never mutated
/// after creation, so each unit observes its own iteration's value.
fn produce_per_iteration(spec: LoopSpec) -> UnitSequence {
    let mut units = UnitSequence::new();
    for index in spec.indices() {
        let var = VarCell::new("i", index);
        units.push(CapturedUnit::shared(var));
    }
    units
}
