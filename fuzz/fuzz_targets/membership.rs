use honggfuzz::fuzz;
use seedbloom::BloomFilter;

fn main() {
    loop {
        fuzz!(|data: &[u8]| {
            if data.len() < 3 {
                return;
            }
            let size = u16::from_le_bytes([data[0], data[1]]) as usize + 1;
            let hashes = (data[2] % 16) as usize + 1;
            let mut bf = BloomFilter::new(size, hashes).expect("non-zero parameters");
            let keys: Vec<&[u8]> = data[3..].split(|&b| b == 0).collect();
            for key in &keys {
                bf.add(key);
            }
            for key in &keys {
                assert!(bf.contains(key));
            }
        });
    }
}
