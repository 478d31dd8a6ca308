//! Random utilities for exercising sketches.

use std::time::SystemTime;
use std::time::UNIX_EPOCH;

/// Random number source for stream generation.
pub trait RandomSource {
    /// Returns the next random 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Returns a uniformly-ish distributed value below `bound`.
    fn next_below(&mut self, bound: u64) -> u64 {
        self.next_u64() % bound
    }
}

/// Xorshift-based random generator.
#[derive(Debug, Clone, Copy)]
pub struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    /// Creates a new generator using the provided seed.
    pub fn seeded(seed: u64) -> Self {
        let state = if seed == 0 { 0x9e3779b97f4a7c15 } else { seed };
        Self { state }
    }
}

impl Default for XorShift64 {
    fn default() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let mut seed = nanos as u64 ^ (std::process::id() as u64);
        if seed == 0 {
            seed = 0x9e3779b97f4a7c15;
        }
        Self::seeded(seed)
    }
}

impl RandomSource for XorShift64 {
    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// Characters the generated strings draw from.
const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-";

/// Default upper bound on generated string length.
const DEFAULT_MAX_LEN: usize = 30;

/// An infinite stream of random strings over `A-Z a-z 0-9 -`, with lengths
/// uniform in `1..=max_len`.
///
/// Deterministic for a fixed seed, so test streams are reproducible. Finite
/// streams are prefixes: `RandomStrings::seeded(7).take(100_000)`.
#[derive(Debug, Clone)]
pub struct RandomStrings {
    rng: XorShift64,
    max_len: usize,
}

impl RandomStrings {
    /// Creates a stream with the default length range `1..=30`.
    pub fn seeded(seed: u64) -> Self {
        Self::with_max_len(seed, DEFAULT_MAX_LEN)
    }

    /// Creates a stream with lengths in `1..=max_len`.
    ///
    /// # Panics
    ///
    /// Panics if `max_len` is zero.
    pub fn with_max_len(seed: u64, max_len: usize) -> Self {
        assert!(max_len > 0, "max_len must be positive");
        Self {
            rng: XorShift64::seeded(seed),
            max_len,
        }
    }

    /// Generates the next string in the stream.
    pub fn next_string(&mut self) -> String {
        let length = 1 + self.rng.next_below(self.max_len as u64) as usize;
        let mut result = String::with_capacity(length);
        for _ in 0..length {
            let index = self.rng.next_below(CHARSET.len() as u64) as usize;
            result.push(CHARSET[index] as char);
        }
        result
    }
}

impl Iterator for RandomStrings {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        Some(self.next_string())
    }
}
