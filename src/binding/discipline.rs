//! Capture disciplines
//!
//! The discipline names *how the loop variable is bound*, not how the
//! unit is written. SharedFn and SharedLambda produce units through
//! different syntax (a named factory function vs an inline lambda) but
//! bind identically, so they are indistinguishable at invocation time.

use std::fmt;

/// The strategy under which a loop's units capture the loop variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Discipline {
    /// One shared mutable binding; units built by a named factory
    /// function. Every unit reads the variable's current value at
    /// call time.
    SharedFn,

    /// One shared mutable binding; units built by a lambda expression.
    /// Same binding, same semantics as `SharedFn` — syntax alone
    /// changes nothing.
    SharedLambda,

    /// Each unit owns a copy frozen by immediately invoking a factory
    /// with the variable's then-current value.
    CopyCapture,

    /// A fresh binding per iteration, frozen at that iteration's
    /// value. Contrasts with `SharedLambda`: new binding scope, not
    /// new syntax, is what changes the result.
    PerIteration,
}

impl Discipline {
    /// All disciplines, in demonstration order.
    pub const ALL: [Discipline; 4] = [
        Discipline::SharedFn,
        Discipline::SharedLambda,
        Discipline::CopyCapture,
        Discipline::PerIteration,
    ];

    /// Whether all units produced under this discipline alias one
    /// shared storage location.
    pub fn is_shared(&self) -> bool {
        matches!(self, Discipline::SharedFn | Discipline::SharedLambda)
    }
}

impl fmt::Display for Discipline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Discipline::SharedFn => "shared-fn",
            Discipline::SharedLambda => "shared-lambda",
            Discipline::CopyCapture => "copy-capture",
            Discipline::PerIteration => "per-iteration",
        };
        write!(f, "{}", label)
    }
}
