//! Shared utilities: random sources and synthetic string streams.

mod random;

pub use random::{RandomSource, RandomStrings, XorShift64};
