//! Error types for interval statistics
//!
//! Provides a unified error type for all interval-stats crates.

use thiserror::Error;

/// Core error type for interval statistical operations
#[derive(Error, Debug)]
pub enum Error {
    /// A statistic was requested on an empty sample
    #[error("Empty input: cannot compute {operation} of an empty sample")]
    EmptyInput { operation: &'static str },

    /// The sample is too small for the requested approximation
    #[error("Insufficient sample size: expected at least {minimum} observations, got {actual}")]
    InsufficientSampleSize { minimum: usize, actual: usize },

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// NaN or infinite values where finite ones are required
    #[error("Non-finite value: {0}")]
    NonFinite(String),

    /// A statistic of finite observations does not fit in an `f64`
    #[error("Numerical overflow: {operation} exceeds the range of f64")]
    Overflow { operation: &'static str },

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create an error for a proportion outside [0, 1]
    pub fn invalid_proportion(p: f64) -> Self {
        Self::InvalidParameter(format!("Proportion {p} must be in [0, 1]"))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::NonFinite(format!("{context} contains NaN or infinite values"))
    }
}
