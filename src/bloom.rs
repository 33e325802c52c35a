//! Bloom filter over byte-sequence keys.
//!
//! `k` probe positions per key come from [`murmur64`](crate::murmur64) with
//! seeds `0..k`, each reduced modulo the bit count `m`. Bits are only ever
//! set, so a key that was added is always reported as present.

use tracing::{debug, trace};

use crate::bitset::BitSet;
use crate::hash::probe_indices;
use crate::params;
use crate::stats::FilterStats;
use crate::{BloomError, Result};

#[derive(Clone, Debug)]
pub struct BloomFilter {
    bits: BitSet,
    hash_count: usize,
    inserted: u64,
}

impl BloomFilter {
    /// Build an empty filter of `size` bits probed `hash_count` times per key.
    ///
    /// Both values must be non-zero: a zero size leaves nothing to reduce
    /// hashes into and zero probes would report every key as present.
    pub fn new(size: usize, hash_count: usize) -> Result<Self> {
        if size == 0 {
            return Err(BloomError::Config("filter size must be positive".into()));
        }
        if hash_count == 0 {
            return Err(BloomError::Config("hash count must be positive".into()));
        }
        debug!(size, hash_count, "creating bloom filter");
        Ok(Self {
            bits: BitSet::new(size),
            hash_count,
            inserted: 0,
        })
    }

    /// Size a filter for `expected_items` keys at false-positive rate `fp_rate`.
    pub fn with_rate(expected_items: usize, fp_rate: f64) -> Result<Self> {
        let (size, hash_count) = params::size_for(expected_items, fp_rate)?;
        Self::new(size, hash_count)
    }

    pub fn add<K: AsRef<[u8]>>(&mut self, item: K) {
        let item = item.as_ref();
        for idx in probe_indices(item, self.hash_count, self.bits.len()) {
            self.bits.set(idx);
        }
        self.inserted += 1;
        trace!(len = item.len(), "added key");
    }

    /// `false` means the key was definitely never added; `true` means it
    /// probably was.
    pub fn contains<K: AsRef<[u8]>>(&self, item: K) -> bool {
        probe_indices(item.as_ref(), self.hash_count, self.bits.len()).all(|idx| self.bits.get(idx))
    }

    /// Fold `other` into this filter. Keys added to either side are members
    /// of the result.
    pub fn union(&mut self, other: &BloomFilter) -> Result<()> {
        if self.size() != other.size() || self.hash_count != other.hash_count {
            return Err(BloomError::Incompatible {
                left_size: self.size(),
                left_hashes: self.hash_count,
                right_size: other.size(),
                right_hashes: other.hash_count,
            });
        }
        self.bits.union_with(&other.bits);
        self.inserted += other.inserted;
        debug!(bits_set = self.bits_set(), "merged bloom filters");
        Ok(())
    }

    pub fn size(&self) -> usize {
        self.bits.len()
    }

    pub fn hash_count(&self) -> usize {
        self.hash_count
    }

    /// Number of `add` calls, duplicates included.
    pub fn inserted(&self) -> u64 {
        self.inserted
    }

    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// True while no bit has been set.
    pub fn is_empty(&self) -> bool {
        self.bits_set() == 0
    }

    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.size() as f64
    }

    pub fn estimated_fp_rate(&self) -> f64 {
        params::false_positive_rate(self.size(), self.hash_count, self.inserted as usize)
    }

    /// Estimate the number of distinct keys from the set-bit count.
    pub fn estimated_items(&self) -> f64 {
        let m = self.size() as f64;
        let x = self.bits_set() as f64;
        if x >= m {
            return f64::INFINITY;
        }
        -(m / self.hash_count as f64) * (1.0 - x / m).ln()
    }

    pub fn stats(&self) -> FilterStats {
        FilterStats {
            size: self.size(),
            hash_count: self.hash_count,
            inserted: self.inserted,
            bits_set: self.bits_set(),
            fill_ratio: self.fill_ratio(),
            estimated_fp_rate: self.estimated_fp_rate(),
        }
    }

    /// Underlying bit storage.
    pub fn bits(&self) -> &BitSet {
        &self.bits
    }
}

impl<K: AsRef<[u8]>> Extend<K> for BloomFilter {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for item in iter {
            self.add(item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_zero_size() {
        assert!(matches!(BloomFilter::new(0, 3), Err(BloomError::Config(_))));
    }

    #[test]
    fn rejects_zero_hashes() {
        assert!(matches!(BloomFilter::new(100, 0), Err(BloomError::Config(_))));
    }

    #[test]
    fn scenario_sets_expected_bits() {
        let mut bf = BloomFilter::new(1000, 3).unwrap();
        bf.add("exemplo1");
        bf.add("exemplo2");
        for pos in [906, 10, 228, 465, 424, 841] {
            assert!(bf.bits().get(pos), "bit {pos} not set");
        }
        assert_eq!(bf.bits_set(), 6);
        assert!(bf.contains("exemplo1"));
        assert!(bf.contains("exemplo2"));
    }

    #[test]
    fn repeated_add_keeps_bit_pattern() {
        let mut bf = BloomFilter::new(512, 4).unwrap();
        bf.add(b"dup");
        let once = bf.bits().clone();
        bf.add(b"dup");
        bf.add(b"dup");
        assert_eq!(bf.bits(), &once);
        assert_eq!(bf.inserted(), 3);
    }

    #[test]
    fn single_bit_filter_saturates() {
        let mut bf = BloomFilter::new(1, 1).unwrap();
        assert!(!bf.contains("anything"));
        bf.add("x");
        assert!(bf.contains("x"));
        assert!(bf.contains("never added"));
        assert!(bf.contains(b""));
        assert_eq!(bf.estimated_items(), f64::INFINITY);
    }

    #[test]
    fn empty_key_is_valid() {
        let mut bf = BloomFilter::new(64, 2).unwrap();
        assert!(!bf.contains(b""));
        bf.add(b"");
        assert!(bf.contains(b""));
    }

    #[test]
    fn union_requires_same_shape() {
        let mut a = BloomFilter::new(100, 3).unwrap();
        let b = BloomFilter::new(100, 4).unwrap();
        let c = BloomFilter::new(101, 3).unwrap();
        assert!(matches!(a.union(&b), Err(BloomError::Incompatible { .. })));
        assert!(matches!(a.union(&c), Err(BloomError::Incompatible { .. })));
    }

    #[test]
    fn stats_reflect_state() {
        let mut bf = BloomFilter::new(1000, 3).unwrap();
        bf.extend(["exemplo1", "exemplo2"]);
        let stats = bf.stats();
        assert_eq!(stats.size, 1000);
        assert_eq!(stats.hash_count, 3);
        assert_eq!(stats.inserted, 2);
        assert_eq!(stats.bits_set, 6);
        assert!((stats.fill_ratio - 0.006).abs() < 1e-12);
        assert!(stats.estimated_fp_rate > 0.0 && stats.estimated_fp_rate < 1e-6);
    }
}
