//! Core types for interval statistics
//!
//! This crate provides the pieces every other interval-stats crate builds on:
//!
//! - [`Error`] and [`Result`]: the single error type shared by the workspace
//! - [`Numeric`]: observation types a sample may be made of
//! - [`descriptive`]: mean, sum of squares and Bessel-corrected standard deviation
//!
//! # Example
//!
//! ```rust
//! use interval_core::descriptive::{mean, sample_std_dev};
//!
//! let word_lengths = [2usize, 4, 4, 4, 5, 5, 7, 9];
//! assert_eq!(mean(&word_lengths).unwrap(), 5.0);
//! assert!((sample_std_dev(&word_lengths).unwrap() - 2.138).abs() < 1e-3);
//! ```

pub mod descriptive;
pub mod error;
pub mod numeric;

// Re-export core types
pub use descriptive::Summary;
pub use error::{Error, Result};
pub use numeric::Numeric;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::descriptive::{mean, sample_std_dev, sample_variance};
    pub use crate::error::Error;
    pub use crate::{Numeric, Result, Summary};
}
