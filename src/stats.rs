use serde::Serialize;

/// Snapshot of a filter's shape and saturation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterStats {
    pub size: usize,
    pub hash_count: usize,
    pub inserted: u64,
    pub bits_set: usize,
    pub fill_ratio: f64,
    pub estimated_fp_rate: f64,
}

impl FilterStats {
    pub fn report(&self) {
        eprintln!(
            "Filter {} bits x {} hashes: {} inserts, {} bits set ({:.2}%), est. false-positive rate {:.4}%",
            self.size,
            self.hash_count,
            self.inserted,
            self.bits_set,
            self.fill_ratio * 100.0,
            self.estimated_fp_rate * 100.0,
        );
    }
}
