//! Core types shared by the Keel containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the recoverable error types returned by checked container operations
//! and the construction parameters accepted by both `SimpleVec` and
//! `ForwardList`.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;

pub use config::{reserve, ReserveHint};
pub use error::{OutOfRange, TryReserveError};
