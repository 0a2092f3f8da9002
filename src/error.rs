//! Typed errors for Clasp
//!
//! The capture evaluator itself is infallible by construction (fixed
//! loop shapes, sequence length equal to iteration count), so the only
//! error the crate can produce comes from the array pipeline: reducing
//! an empty survivor set has no identity element.

use std::error::Error as StdError;
use std::fmt;

/// Typed error enum for Clasp
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaspError {
    /// The pipeline's filter retained no elements, so the reduction
    /// has nothing to fold.
    EmptyReduction { threshold: i64 },
}

impl ClaspError {
    /// Create an empty reduction error
    pub fn empty_reduction(threshold: i64) -> Self {
        ClaspError::EmptyReduction { threshold }
    }

    /// Get a human-readable description of the error
    pub fn description(&self) -> String {
        match self {
            ClaspError::EmptyReduction { threshold } => {
                format!(
                    "Reduction error: no elements exceeded threshold {}",
                    threshold
                )
            }
        }
    }
}

impl fmt::Display for ClaspError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.description())
    }
}

impl StdError for ClaspError {}

/// Conversion from ClaspError to String for compatibility
impl From<ClaspError> for String {
    fn from(err: ClaspError) -> String {
        err.description()
    }
}

/// Result type alias using ClaspError
pub type Result<T> = std::result::Result<T, ClaspError>;
