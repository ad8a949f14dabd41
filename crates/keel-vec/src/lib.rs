//! A growable contiguous array built on a hand-managed buffer.
//!
//! [`SimpleVec`] owns a `RawBuf` of uninitialised slots and tracks
//! the live prefix itself. Growth is geometric (capacity doubles, starting
//! from 1) and every reallocation follows the same shape: allocate the
//! replacement, move the live elements across, swap the buffers.
//!
//! ```text
//! SimpleVec<T>
//! ├── RawBuf<T>   allocate / free / swap, never touches elements
//! └── len         slots [0, len) live, [len, capacity) uninitialised
//! ```
//!
//! Unchecked-looking access (`v[i]`, `pop_back`) still panics on contract
//! violations; the checked forms (`at`, `get`, `try_pop_back`) return
//! `Result`/`Option` instead.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_code)]
#![deny(unsafe_op_in_unsafe_fn)]

pub mod iter;
mod raw;
pub mod vec;

pub use iter::IntoIter;
pub use vec::SimpleVec;
