//! Keel: two small sequence containers with explicit capacity control.
//!
//! This is the facade crate that re-exports the public API of the Keel
//! sub-crates.
//!
//! # Quick start
//!
//! ```rust
//! use keel::prelude::*;
//!
//! let mut v: SimpleVec<i32> = SimpleVec::with_reserved(reserve(4));
//! v.push_back(10);
//! v.push_back(20);
//! v.insert(1, 15);
//! assert_eq!(v, [10, 15, 20]);
//! assert_eq!(v.capacity(), 4);
//!
//! let mut list = ForwardList::from([2, 3]);
//! list.push_front(1);
//! assert_eq!(list, [1, 2, 3]);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`core`] | `keel-core` | `OutOfRange`, `TryReserveError`, `ReserveHint` |
//! | [`vec`] | `keel-vec` | `SimpleVec` and its owning iterator |
//! | [`list`] | `keel-list` | `ForwardList`, `Position`, list iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Errors and construction parameters (`keel-core`).
pub use keel_core as core;

/// The growable array (`keel-vec`).
///
/// [`vec::SimpleVec`] doubles its capacity whenever an append finds it full.
pub use keel_vec as vec;

/// The singly linked list (`keel-list`).
///
/// [`list::ForwardList`] addresses nodes with [`list::Position`] handles.
pub use keel_list as list;

/// Common imports.
///
/// ```rust
/// use keel::prelude::*;
/// ```
pub mod prelude {
    pub use keel_core::{reserve, OutOfRange, ReserveHint, TryReserveError};
    pub use keel_list::{ForwardList, Position};
    pub use keel_vec::SimpleVec;
}
