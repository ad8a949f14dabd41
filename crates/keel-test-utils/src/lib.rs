//! Test fixtures and operation models for Keel development.
//!
//! Provides element types that make ownership bugs observable
//! ([`DropCounter`] / [`Tracked`], [`NoDefault`]) and scripted operation
//! sequences ([`VecOp`], [`ListOp`]) with a reference model on `std::vec::Vec`
//! for differential property tests.
//!
//! Does not depend on the containers it tests, so
//! it can be a dev-dependency of every container crate.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod ops;

pub use ops::{list_ops, vec_ops, ListOp, VecOp};

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// Shared counter of [`Tracked`] drops.
///
/// Clones share the same count.
#[derive(Clone, Default)]
pub struct DropCounter {
    drops: Rc<Cell<usize>>,
}

impl DropCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new element that bumps this counter when dropped.
    pub fn track(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: Rc::clone(&self.drops),
        }
    }

    /// Number of tracked elements dropped so far.
    pub fn count(&self) -> usize {
        self.drops.get()
    }
}

/// An element whose drop is recorded by a [`DropCounter`].
///
/// Clones are new elements: each one is counted when it drops.
pub struct Tracked {
    id: u32,
    drops: Rc<Cell<usize>>,
}

impl Tracked {
    pub fn id(&self) -> u32 {
        self.id
    }
}

impl Clone for Tracked {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            drops: Rc::clone(&self.drops),
        }
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

impl PartialEq for Tracked {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl fmt::Debug for Tracked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tracked({})", self.id)
    }
}

/// An element type with neither `Default` nor `Clone`.
///
/// Containers that construct spare slots eagerly cannot hold it.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct NoDefault(u32);

impl NoDefault {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u32 {
        self.0
    }
}
