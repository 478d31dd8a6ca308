use std::fmt;

use crate::error::Error;
use crate::error::ErrorKind;
use crate::hash::Murmur3;
use crate::hll::MAX_PRECISION;
use crate::hll::MIN_PRECISION;
use crate::hll::estimator::estimate_from_registers;

/// A HyperLogLog sketch over byte-string items.
///
/// The sketch owns `m = 2^B` one-byte registers and a seeded [`Murmur3`]
/// engine. Each added item updates at most one register, and only ever
/// upward, so duplicates never change the state and independently filled
/// sketches with the same configuration can be combined with [`merge`].
///
/// Not internally synchronized: concurrent `add` or `clear` calls on one
/// instance are a data race by contract. Shard into per-thread sketches and
/// merge instead.
///
/// [`merge`]: HllSketch::merge
#[derive(Clone, PartialEq)]
pub struct HllSketch {
    b: u8,
    registers: Vec<u8>,
    hasher: Murmur3,
}

impl HllSketch {
    /// Creates a sketch with `2^b` registers, hashing with the given seed.
    ///
    /// Returns [`ErrorKind::InvalidParameter`] if `b` is outside `[4, 16]`;
    /// that range keeps the register count within `[16, 65536]` and the
    /// bias-correction constants valid.
    pub fn new(b: u8, seed: u32) -> Result<Self, Error> {
        if !(MIN_PRECISION..=MAX_PRECISION).contains(&b) {
            return Err(Error::new(
                ErrorKind::InvalidParameter,
                format!("precision must be in [{MIN_PRECISION}, {MAX_PRECISION}]"),
            )
            .with_context("b", b));
        }
        Ok(Self {
            b,
            registers: vec![0; 1 << b],
            hasher: Murmur3::with_seed(seed),
        })
    }

    /// Incorporates one item.
    ///
    /// The top `b` hash bits select a register; the register keeps the
    /// maximum rank (leading-zero count plus one) observed in the remaining
    /// `32 - b` bits.
    pub fn add<T: AsRef<[u8]>>(&mut self, item: T) {
        let hash = self.hasher.hash(item.as_ref());
        let index = (hash >> (32 - self.b)) as usize;
        let rank = rank_of(hash, self.b);
        if rank > self.registers[index] {
            self.registers[index] = rank;
        }
    }

    /// Returns the current cardinality estimate.
    ///
    /// Side-effect free; an empty sketch estimates exactly 0.
    pub fn estimate(&self) -> u64 {
        estimate_from_registers(&self.registers)
    }

    /// Resets every register to zero, keeping precision and seed.
    pub fn clear(&mut self) {
        self.registers.fill(0);
    }

    /// Combines another sketch into this one by element-wise register
    /// maximum, as if every item added to `other` had been added here.
    ///
    /// Returns [`ErrorKind::IncompatibleSketches`] unless both sketches share
    /// the same precision and hash seed.
    pub fn merge(&mut self, other: &Self) -> Result<(), Error> {
        if self.b != other.b || self.hasher.seed() != other.hasher.seed() {
            return Err(Error::new(
                ErrorKind::IncompatibleSketches,
                "sketches must share precision and hash seed",
            )
            .with_context("b", self.b)
            .with_context("other_b", other.b)
            .with_context("seed", self.hasher.seed())
            .with_context("other_seed", other.hasher.seed()));
        }
        for (register, &other_register) in self.registers.iter_mut().zip(&other.registers) {
            if other_register > *register {
                *register = other_register;
            }
        }
        Ok(())
    }

    /// Precision parameter `B`.
    pub fn b(&self) -> u8 {
        self.b
    }

    /// Number of registers, `2^B`.
    pub fn m(&self) -> usize {
        self.registers.len()
    }

    /// Seed of the owned hash engine.
    pub fn seed(&self) -> u32 {
        self.hasher.seed()
    }

    /// Read-only view of the register array.
    pub fn registers(&self) -> &[u8] {
        &self.registers
    }

    /// Whether no item has been added since construction or the last clear.
    pub fn is_empty(&self) -> bool {
        self.registers.iter().all(|&register| register == 0)
    }
}

impl fmt::Debug for HllSketch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HllSketch")
            .field("b", &self.b)
            .field("m", &self.m())
            .field("seed", &self.hasher.seed())
            .field("estimate", &self.estimate())
            .finish()
    }
}

/// Rank of a hash for precision `b`: the number of leading zeros in the low
/// `32 - b` bits plus one, saturating at `32 - b + 1` when those bits are all
/// zero.
#[inline]
fn rank_of(hash: u32, b: u8) -> u8 {
    let w = hash << b;
    if w == 0 {
        32 - b + 1
    } else {
        w.leading_zeros() as u8 + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_placement() {
        // murmur3_32(b"apple", 42) = 0xe8978b9d: top 12 bits index 3721,
        // low 20 bits start with one zero, rank 2.
        let mut sketch = HllSketch::new(12, 42).unwrap();
        sketch.add("apple");
        assert_eq!(sketch.registers()[3721], 2);
        assert_eq!(sketch.registers().iter().filter(|&&r| r != 0).count(), 1);
    }

    #[test]
    fn test_rank_saturates_on_zero_remainder() {
        // murmur3_32(b"item-155378", 42) = 0x54b60000: with b = 16 the low
        // 16 bits are all zero, so the rank saturates at 32 - 16 + 1.
        let mut sketch = HllSketch::new(16, 42).unwrap();
        sketch.add("item-155378");
        assert_eq!(sketch.registers()[0x54b6], 17);
    }

    #[test]
    fn test_rank_of_bounds() {
        assert_eq!(rank_of(0x0800_0000, 4), 1);
        assert_eq!(rank_of(0x8000_0000, 4), 29); // the set bit is index-side
        assert_eq!(rank_of(0x0000_0000, 4), 29);
        assert_eq!(rank_of(0x0000_0001, 4), 28);
        assert_eq!(rank_of(0x0fff_ffff, 4), 1);
        assert_eq!(rank_of(0x0000_0000, 16), 17);
        assert_eq!(rank_of(0xffff_0000, 16), 17);
        assert_eq!(rank_of(0xffff_8000, 16), 1);
    }

    #[test]
    fn test_registers_bounded_and_monotonic() {
        let mut sketch = HllSketch::new(4, 42).unwrap();
        let mut previous = sketch.registers().to_vec();
        for i in 0..1000 {
            sketch.add(format!("element-{i}"));
            let current = sketch.registers();
            for (index, (&before, &after)) in previous.iter().zip(current).enumerate() {
                assert!(after >= before, "register {index} decreased");
                assert!(after <= 29, "register {index} above rank bound");
            }
            previous = current.to_vec();
        }
    }

    #[test]
    fn test_clear() {
        let mut sketch = HllSketch::new(8, 42).unwrap();
        for i in 0..100 {
            sketch.add(format!("element-{i}"));
        }
        assert!(!sketch.is_empty());

        sketch.clear();
        assert!(sketch.is_empty());
        assert_eq!(sketch.estimate(), 0);
        assert_eq!(sketch.b(), 8);
        assert_eq!(sketch.m(), 256);
        assert_eq!(sketch.seed(), 42);
    }

    #[test]
    fn test_accessors() {
        let sketch = HllSketch::new(10, 7).unwrap();
        assert_eq!(sketch.b(), 10);
        assert_eq!(sketch.m(), 1024);
        assert_eq!(sketch.seed(), 7);
        assert_eq!(sketch.registers().len(), 1024);
        assert!(sketch.is_empty());
    }

    #[test]
    fn test_merge_mismatched_precision() {
        let mut lhs = HllSketch::new(10, 42).unwrap();
        let rhs = HllSketch::new(11, 42).unwrap();
        let err = lhs.merge(&rhs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleSketches);
    }

    #[test]
    fn test_merge_mismatched_seed() {
        let mut lhs = HllSketch::new(10, 42).unwrap();
        let rhs = HllSketch::new(10, 43).unwrap();
        let err = lhs.merge(&rhs).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::IncompatibleSketches);
    }

    #[test]
    fn test_merge_takes_register_maximum() {
        let mut lhs = HllSketch::new(4, 42).unwrap();
        let mut rhs = HllSketch::new(4, 42).unwrap();
        lhs.add("apple");
        rhs.add("banana");
        rhs.add("cherry");

        lhs.merge(&rhs).unwrap();
        let mut expected = HllSketch::new(4, 42).unwrap();
        expected.add("apple");
        expected.add("banana");
        expected.add("cherry");
        assert_eq!(lhs.registers(), expected.registers());
        assert_eq!(lhs.estimate(), expected.estimate());
    }
}
