//! Array pipeline: map, filter, reduce
//!
//! The peripheral demonstration: scale each element, keep those
//! strictly above a threshold, sum what remains. The sum is a
//! `reduce`, which has no identity element, so an empty survivor set
//! is an error rather than a silent zero.

use crate::error::{ClaspError, Result};

/// Multiply every element by `multiplier`, retain products strictly
/// greater than `threshold`, and sum the survivors.
pub fn scale_filter_sum(values: &[i64], multiplier: i64, threshold: i64) -> Result<i64> {
    values
        .iter()
        .map(|v| v * multiplier)
        .filter(|v| *v > threshold)
        .reduce(|acc, v| acc + v)
        .ok_or(ClaspError::EmptyReduction { threshold })
}
