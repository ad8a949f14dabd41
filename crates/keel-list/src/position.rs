//! Positions into a [`ForwardList`](crate::ForwardList).
//!
//! A [`Position`] names a node slot together with the slot's generation at
//! the time the position was handed out. Releasing a node bumps its slot's
//! generation, so a position that outlives its node is detected in O(1)
//! instead of silently aliasing whatever node reuses the slot.

use std::fmt;

/// A handle to a node of a `ForwardList`, or to one of its two boundary
/// positions.
///
/// Positions are plain values: they stay valid across insertions and
/// removals of *other* nodes and compare equal exactly when they name the
/// same node. There is no separate read-only flavour; a position obtained
/// while reading compares equal to one obtained while mutating.
///
/// A position is only meaningful for the list that produced it.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) slot: u32,
    pub(crate) generation: u32,
}

impl Position {
    /// Past-the-end: the successor of the last element.
    pub const END: Self = Self {
        slot: u32::MAX,
        generation: u32::MAX,
    };

    /// The anchor that precedes the first element.
    pub(crate) const BEFORE_BEGIN: Self = Self {
        slot: 0,
        generation: 0,
    };

    pub(crate) fn new(slot: u32, generation: u32) -> Self {
        Self { slot, generation }
    }

    /// Whether this is [`Position::END`].
    pub fn is_end(&self) -> bool {
        *self == Self::END
    }

    /// Whether this is the before-begin anchor.
    pub fn is_before_begin(&self) -> bool {
        *self == Self::BEFORE_BEGIN
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_end() {
            write!(f, "Position(end)")
        } else if self.is_before_begin() {
            write!(f, "Position(before_begin)")
        } else {
            write!(f, "Position(slot={}, gen={})", self.slot, self.generation)
        }
    }
}
