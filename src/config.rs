use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{BloomError, BloomFilter, Result};

/// Filter construction parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Total number of bits in the filter.
    pub size: usize,
    /// Number of seeded hash probes per key.
    pub hash_count: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            size: 1000,
            hash_count: 3,
        }
    }
}

impl Config {
    /// Read a JSON object such as `{"size": 1000, "hash_count": 3}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self> {
        let cfg: Config = serde_json::from_str(text)
            .map_err(|e| BloomError::Config(format!("invalid config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(BloomError::Config("filter size must be positive".into()));
        }
        if self.hash_count == 0 {
            return Err(BloomError::Config("hash count must be positive".into()));
        }
        Ok(())
    }

    pub fn build(&self) -> Result<BloomFilter> {
        BloomFilter::new(self.size, self.hash_count)
    }
}
