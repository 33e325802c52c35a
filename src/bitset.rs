/// Fixed-length bit array packed into `u64` words.
///
/// The logical length never changes after construction. Bits beyond `len`
/// in the final word are never set, so `count_ones` can sum whole words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitSet {
    words: Vec<u64>,
    len: usize,
}

const WORD_BITS: usize = 64;

impl BitSet {
    /// Allocate `len` cleared bits.
    pub fn new(len: usize) -> Self {
        Self {
            words: vec![0; len.div_ceil(WORD_BITS)],
            len,
        }
    }

    /// Logical number of addressable bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn set(&mut self, pos: usize) {
        assert!(pos < self.len, "bit {pos} out of range for length {}", self.len);
        self.words[pos / WORD_BITS] |= 1u64 << (pos % WORD_BITS);
    }

    #[inline]
    pub fn get(&self, pos: usize) -> bool {
        assert!(pos < self.len, "bit {pos} out of range for length {}", self.len);
        self.words[pos / WORD_BITS] & (1u64 << (pos % WORD_BITS)) != 0
    }

    /// Number of bits currently set.
    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// OR every word of `other` into `self`. Both sets must have the same length.
    pub fn union_with(&mut self, other: &BitSet) {
        assert_eq!(self.len, other.len, "bit set length mismatch");
        for (dst, src) in self.words.iter_mut().zip(&other.words) {
            *dst |= *src;
        }
    }

    /// Raw storage words, least significant bit first.
    pub fn words(&self) -> &[u64] {
        &self.words
    }
}
