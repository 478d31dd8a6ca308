//! Cardinality estimation for streams of byte strings.
//!
//! This crate estimates the number of distinct elements in a stream using
//! bounded, sub-linear memory. It consists of two pieces: a seeded 32-bit
//! MurmurHash3 engine with a uniformity-analysis routine, and a HyperLogLog
//! sketch built on top of that hash.
//!
//! # Usage
//!
//! ```rust
//! use hllsketch::hll::HllSketch;
//!
//! let mut sketch = HllSketch::new(12, 42).unwrap();
//!
//! sketch.add("apple");
//! sketch.add("banana");
//! sketch.add("cherry");
//! sketch.add("apple");
//!
//! assert_eq!(sketch.estimate(), 3);
//! ```
//!
//! # Precision
//!
//! The precision parameter `B` in `[4, 16]` selects `m = 2^B` one-byte
//! registers; the expected relative error of the estimate is `1.04 / sqrt(m)`
//! (about 0.8% at `B = 14`).
//!
//! # Hashing
//!
//! All items are hashed with the x86 32-bit variant of MurmurHash3, keyed by
//! a per-sketch seed. [`hash::Murmur3`] exposes the engine directly, and
//! [`hash::UniformityReport`] measures how evenly a batch of items spreads
//! over a set of buckets.

pub mod common;
pub mod error;
pub mod hash;
pub mod hll;
