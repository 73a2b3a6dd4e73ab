//! Arena-specific error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during arena allocation.
///
/// The two kinds are deliberately distinct: `CapacityOverflow` means the
/// request itself is unsatisfiable (almost certainly a caller bug), while
/// `MemoryExhausted` means the backing provider hit a resource limit and a
/// smaller request or a [`reset`](crate::Arena::reset) may still succeed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArenaError {
    /// Doubling the candidate region capacity overflowed `usize` before it
    /// could cover the request.
    CapacityOverflow {
        /// Number of bytes requested.
        requested: usize,
    },
    /// The backing memory provider failed to reserve a new region.
    MemoryExhausted {
        /// Number of bytes requested.
        requested: usize,
        /// Region capacity (in allocation units) the provider was asked for.
        capacity: usize,
    },
}

impl fmt::Display for ArenaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow { requested } => {
                write!(
                    f,
                    "region capacity overflow: no representable region can hold {requested} bytes"
                )
            }
            Self::MemoryExhausted {
                requested,
                capacity,
            } => {
                write!(
                    f,
                    "backing memory exhausted: reserving {capacity} units for a {requested}-byte request failed"
                )
            }
        }
    }
}

impl Error for ArenaError {}
