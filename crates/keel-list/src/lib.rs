//! A singly linked sequence with a before-begin anchor.
//!
//! [`ForwardList`] keeps its nodes in an index-linked slot arena. The anchor
//! slot precedes the first element, so inserting at the front and inserting
//! after any other node are the same operation. Nodes are addressed by
//! [`Position`] values that carry a generation tag: a position to a node
//! that has since been removed is rejected rather than dereferenced.
//!
//! ```
//! use keel_list::ForwardList;
//!
//! let mut list = ForwardList::new();
//! list.push_front(2);
//! list.push_front(1);
//! let last = list.next(list.begin());
//! list.insert_after(last, 3);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), [1, 2, 3]);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod iter;
pub mod list;
pub mod position;

pub use iter::{IntoIter, Iter, IterMut};
pub use list::ForwardList;
pub use position::Position;
