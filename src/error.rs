use thiserror::Error;

#[derive(Error, Debug)]
pub enum BloomError {
    /// Invalid filter parameters such as a zero size or hash count.
    #[error("config error: {0}")]
    Config(String),

    /// Two filters with different shapes cannot be combined.
    #[error("incompatible filters: {left_size}x{left_hashes} vs {right_size}x{right_hashes}")]
    Incompatible {
        left_size: usize,
        left_hashes: usize,
        right_size: usize,
        right_hashes: usize,
    },

    /// Propagated I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BloomError>;
