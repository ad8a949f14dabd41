//! Recoverable error types for checked container operations.
//!
//! Contract violations (popping an empty container, unchecked indexing past
//! the end, dereferencing a past-the-end position) are not represented here:
//! they panic. Only the failures a caller can reasonably handle are typed.

use std::error::Error;
use std::fmt;

/// A bounds-checked access named an index at or past the end.
///
/// Returned by `SimpleVec::at` and `SimpleVec::at_mut` when
/// `index >= len`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OutOfRange {
    /// The index that was requested.
    pub index: usize,
    /// Number of live elements at the time of the access.
    pub len: usize,
}

impl fmt::Display for OutOfRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "index out of range: the len is {} but the index is {}",
            self.len, self.index
        )
    }
}

impl Error for OutOfRange {}

/// Errors from fallible capacity reservation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TryReserveError {
    /// The requested slot count cannot be described by a valid memory
    /// layout (its byte size overflows `isize::MAX`).
    CapacityOverflow,
    /// The global allocator returned null.
    AllocFailed {
        /// Size of the rejected allocation in bytes.
        bytes: usize,
    },
}

impl fmt::Display for TryReserveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CapacityOverflow => write!(f, "capacity overflow"),
            Self::AllocFailed { bytes } => {
                write!(f, "memory allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for TryReserveError {}
