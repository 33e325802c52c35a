//! Seeded 64-bit hashing used to derive Bloom filter probe positions.
//!
//! `murmur64` follows the MurmurHash64A mixing schedule. It has good
//! distribution for ordinary keys but is not collision resistant and must
//! not be fed attacker-chosen input where that matters.

const M: u64 = 0xc6a4_a793_5bd1_e995;
const R: u32 = 47;

/// Hash `data` with `seed`. Identical inputs always produce identical output.
pub fn murmur64(data: &[u8], seed: u64) -> u64 {
    let mut h = seed ^ (data.len() as u64).wrapping_mul(M);

    let mut chunks = data.chunks_exact(8);
    for chunk in &mut chunks {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(chunk);
        let mut k = u64::from_le_bytes(buf);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h ^= k;
        h = h.wrapping_mul(M);
    }

    let tail = chunks.remainder();
    if !tail.is_empty() {
        let mut buf = [0u8; 8];
        buf[..tail.len()].copy_from_slice(tail);
        h ^= u64::from_le_bytes(buf);
        h = h.wrapping_mul(M);
    }

    h ^= h >> R;
    h = h.wrapping_mul(M);
    h ^= h >> R;
    h
}

/// Probe positions for `data` in a filter of `size` bits using `hash_count`
/// seeds `0..hash_count`.
///
/// Each position is `murmur64(data, seed) % size`, so callers only ever see
/// indices below `size`. `size` must be non-zero.
pub fn probe_indices(data: &[u8], hash_count: usize, size: usize) -> impl Iterator<Item = usize> + '_ {
    let m = size as u64;
    (0..hash_count as u64).map(move |seed| (murmur64(data, seed) % m) as usize)
}
