//! Error types for constructing measurements.

use thiserror::Error;

/// Rejected measurement inputs.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A variance below zero.
    #[error("variance must be non-negative, got {0}")]
    NegativeVariance(f64),

    /// A standard deviation below zero.
    #[error("standard deviation must be non-negative, got {0}")]
    NegativeStdDev(f64),

    /// A NaN uncertainty.
    #[error("uncertainty is NaN")]
    NotANumber,
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
