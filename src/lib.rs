//! Bloom filter with a seeded 64-bit hash.
//!
//! ```
//! use seedbloom::BloomFilter;
//!
//! let mut filter = BloomFilter::new(1000, 3).unwrap();
//! filter.add("exemplo1");
//! filter.add("exemplo2");
//!
//! assert!(filter.contains("exemplo1"));
//! assert!(filter.contains("exemplo2"));
//! ```

pub mod bitset;
pub mod bloom;
pub mod config;
pub mod error;
pub mod hash;
pub mod io_utils;
pub mod params;
pub mod stats;

pub use bitset::BitSet;
pub use bloom::BloomFilter;
pub use config::Config;
pub use error::{BloomError, Result};
pub use hash::{murmur64, probe_indices};
pub use params::{false_positive_rate, optimal_hash_count, optimal_size};
pub use stats::FilterStats;
