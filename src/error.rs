use thiserror::Error;

/// Errors returned by the distance, clustering, and layout engines.
#[derive(Debug, Error)]
pub enum Error {
    /// Invalid parameter value.
    #[error("invalid parameter {name}: {message}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Human-readable explanation.
        message: &'static str,
    },

    /// No distance metric is registered under the requested name.
    #[error("unknown distance metric: {0}")]
    UnknownMetric(String),

    /// No clustering algorithm is registered under the requested name.
    #[error("unknown clustering algorithm: {0}")]
    UnknownAlgorithm(String),

    /// A distance matrix does not match the item list it is paired with.
    #[error("size mismatch: {items} items, but the distance matrix is {rows}x{rows}")]
    SizeMismatch {
        /// Number of items supplied.
        items: usize,
        /// Side length of the matrix supplied.
        rows: usize,
    },
}

/// Result type used by this crate.
pub type Result<T> = std::result::Result<T, Error>;
