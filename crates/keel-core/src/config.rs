//! Construction parameters for the Keel containers.

/// Requested up-front capacity for a new container.
///
/// Passing a hint to a constructor creates an *empty* container whose
/// backing storage already holds `capacity` slots, so the first `capacity`
/// insertions never reallocate. Build one with [`reserve`] or
/// [`ReserveHint::new`].
///
/// ```
/// use keel_core::reserve;
///
/// let hint = reserve(16);
/// assert_eq!(hint.capacity(), 16);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ReserveHint {
    capacity: usize,
}

impl ReserveHint {
    /// A hint that reserves nothing. Equivalent to `Default`.
    pub const NONE: Self = Self { capacity: 0 };

    /// Create a hint for `capacity` slots.
    pub const fn new(capacity: usize) -> Self {
        Self { capacity }
    }

    /// Number of slots to reserve.
    pub const fn capacity(&self) -> usize {
        self.capacity
    }
}

impl From<usize> for ReserveHint {
    fn from(capacity: usize) -> Self {
        Self::new(capacity)
    }
}

/// Shorthand for [`ReserveHint::new`].
pub const fn reserve(capacity: usize) -> ReserveHint {
    ReserveHint::new(capacity)
}
