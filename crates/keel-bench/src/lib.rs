//! Workload builders for the Keel benchmarks.
//!
//! - [`values`]: seeded element stream
//! - [`insert_points`]: seeded insertion indices for a growing array
//! - [`filled_vec`] / [`filled_list`]: containers pre-populated from [`values`]
//!
//! Every builder is deterministic in its seed so runs are comparable.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use keel_list::ForwardList;
use keel_vec::SimpleVec;
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// `n` pseudo-random values.
pub fn values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64()).collect()
}

/// Insertion indices for building an array of `n` elements one insert at a
/// time. The `i`-th index is in `0..=i`, so each is valid at the moment
/// it is used.
pub fn insert_points(n: usize, seed: u64) -> Vec<usize> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|i| (rng.next_u64() % (i as u64 + 1)) as usize)
        .collect()
}

/// A `SimpleVec` holding `values(n, seed)`.
pub fn filled_vec(n: usize, seed: u64) -> SimpleVec<u64> {
    values(n, seed).into_iter().collect()
}

/// A `ForwardList` holding `values(n, seed)` in order.
pub fn filled_list(n: usize, seed: u64) -> ForwardList<u64> {
    values(n, seed).into_iter().collect()
}
