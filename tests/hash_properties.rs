use quickcheck::quickcheck;
use seedbloom::{murmur64, probe_indices};

quickcheck! {
    fn hash_is_deterministic(data: Vec<u8>, seed: u64) -> bool {
        murmur64(&data, seed) == murmur64(&data, seed)
    }
}

quickcheck! {
    fn probes_below_size(data: Vec<u8>, hashes: u8, size: u32) -> bool {
        let size = size as usize % 10_000 + 1;
        let hashes = hashes as usize % 16 + 1;
        let probes: Vec<usize> = probe_indices(&data, hashes, size).collect();
        probes.len() == hashes && probes.iter().all(|&i| i < size)
    }
}

quickcheck! {
    fn probes_use_consecutive_seeds(data: Vec<u8>) -> bool {
        let probes: Vec<usize> = probe_indices(&data, 4, 997).collect();
        probes
            .iter()
            .enumerate()
            .all(|(seed, &p)| p == (murmur64(&data, seed as u64) % 997) as usize)
    }
}

#[test]
fn tail_bytes_are_not_padding() {
    // A trailing zero byte changes the length, so the hash must differ.
    assert_ne!(murmur64(b"abc", 0), murmur64(b"abc\0", 0));
    assert_ne!(murmur64(&[0u8; 8], 0), murmur64(&[0u8; 9], 0));
}

#[test]
fn full_chunk_and_tail() {
    assert_eq!(murmur64(b"hello world", 0), 0xd3ba_2368_a832_afce);
}
