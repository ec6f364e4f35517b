//! Error types for derivative sampling.

use thiserror::Error;

/// Invalid sampling configuration.
///
/// The differentiator itself never fails; only [`Grid`](crate::Grid)
/// construction is checked.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// Fewer than two sample points.
    #[error("a grid needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// An infinite or NaN endpoint.
    #[error("grid bounds must be finite, got [{start}, {end}]")]
    NonFiniteBound {
        /// Requested start.
        start: f64,
        /// Requested end.
        end: f64,
    },

    /// `start >= end`.
    #[error("grid interval is empty: [{start}, {end}]")]
    EmptyInterval {
        /// Requested start.
        start: f64,
        /// Requested end.
        end: f64,
    },

    /// `end - start` overflows to infinity.
    #[error("grid span overflows: [{start}, {end}]")]
    SpanOverflow {
        /// Requested start.
        start: f64,
        /// Requested end.
        end: f64,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
