//! Proptest strategies for generating loop shapes.

use clasp::LoopSpec;
use proptest::prelude::*;

/// Strategy for loops that run at least once: `0..=bound` with a
/// non-negative bound. Kept small — unit count grows with the bound.
pub fn arb_running_loop() -> impl Strategy<Value = LoopSpec> {
    (0i64..=64).prop_map(|bound| LoopSpec::new(0, bound))
}

/// Strategy for arbitrary loop shapes, including zero-iteration ones
/// (bound below start).
pub fn arb_any_loop() -> impl Strategy<Value = LoopSpec> {
    (-8i64..=8, -8i64..=8).prop_map(|(start, bound)| LoopSpec::new(start, bound))
}
