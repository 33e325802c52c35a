//! Sizing formulas for Bloom filters.
//!
//! With `m` bits, `k` probes and `n` inserted keys the false-positive
//! probability is approximately `(1 - e^(-kn/m))^k`.

use std::f64::consts::LN_2;

use crate::{BloomError, Result};

/// Expected false-positive probability after `items` insertions.
pub fn false_positive_rate(size: usize, hash_count: usize, items: usize) -> f64 {
    if items == 0 || size == 0 {
        return 0.0;
    }
    let k = hash_count as f64;
    let exponent = -k * items as f64 / size as f64;
    (1.0 - exponent.exp()).powf(k)
}

/// Probe count minimising the false-positive rate for `size` bits and `items` keys.
pub fn optimal_hash_count(size: usize, items: usize) -> usize {
    if items == 0 {
        return 1;
    }
    let k = (size as f64 / items as f64) * LN_2;
    (k.round() as usize).max(1)
}

/// Bit count needed to hold `items` keys at false-positive rate `rate`.
pub fn optimal_size(items: usize, rate: f64) -> usize {
    let m = -(items as f64) * rate.ln() / (LN_2 * LN_2);
    (m.ceil() as usize).max(1)
}

/// Check and resolve `(items, rate)` into a `(size, hash_count)` pair.
pub fn size_for(items: usize, rate: f64) -> Result<(usize, usize)> {
    if items == 0 {
        return Err(BloomError::Config("expected item count must be positive".into()));
    }
    if !(rate > 0.0 && rate < 1.0) {
        return Err(BloomError::Config(format!(
            "false-positive rate must be in (0, 1), got {rate}"
        )));
    }
    let size = optimal_size(items, rate);
    Ok((size, optimal_hash_count(size, items)))
}
