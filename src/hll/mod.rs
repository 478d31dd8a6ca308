//! HyperLogLog sketch for cardinality estimation.
//!
//! The sketch keeps `m = 2^B` one-byte registers, for `B` in `[4, 16]`. Each
//! item is hashed to 32 bits; the top `B` bits pick a register and the
//! register records the maximum rank (leading-zero count plus one) seen in
//! the remaining bits. The estimate is derived from the registers' harmonic
//! mean with small- and large-range bias corrections.
//!
//! # Usage
//!
//! ```rust
//! use hllsketch::hll::{HllSketch, exact_count};
//!
//! let items = ["a", "b", "c", "a"];
//!
//! let mut sketch = HllSketch::new(12, 42).unwrap();
//! for item in items {
//!     sketch.add(item);
//! }
//!
//! assert_eq!(sketch.estimate(), exact_count(items));
//! ```
//!
//! # Memory and accuracy
//!
//! Memory is `2^B` bytes regardless of how many items are added; the
//! expected relative error is `1.04 / sqrt(2^B)`. `B = 14` uses 16 KiB for
//! roughly 0.8% error.

use std::collections::HashSet;
use std::hash::Hash;

mod estimator;
mod sketch;

pub use sketch::HllSketch;

/// Smallest accepted precision (16 registers).
pub const MIN_PRECISION: u8 = 4;
/// Largest accepted precision (65536 registers).
pub const MAX_PRECISION: u8 = 16;

/// Counts distinct items exactly by materializing a uniqueness set.
///
/// Ground-truth oracle for evaluating sketch accuracy; costs O(n) memory
/// where the sketch costs O(1).
pub fn exact_count<I>(items: I) -> u64
where
    I: IntoIterator,
    I::Item: Hash + Eq,
{
    let unique: HashSet<I::Item> = items.into_iter().collect();
    unique.len() as u64
}
