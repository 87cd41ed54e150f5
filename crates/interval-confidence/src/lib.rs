//! 95% confidence intervals for means and proportions
//!
//! This crate builds symmetric two-sided intervals of the form
//! `estimate ± critical × standard error`:
//!
//! - **Mean t-intervals**: critical value from a fitted rational approximation
//!   of the Student-t quantile (see [`critical`]), falling back to the normal
//!   value for samples above 1000 observations
//! - **Proportion z-intervals**: fixed multiplier 1.96
//!
//! # Examples
//!
//! ## Mean of a raw sample
//!
//! ```rust
//! use interval_confidence::mean_interval;
//!
//! let sample = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
//! let ci = mean_interval(&sample).unwrap();
//! println!("95% CI for the mean: [{:.2}, {:.2}]", ci.lower(), ci.upper());
//! assert!((ci.lower() - 3.22).abs() < 0.01);
//! ```
//!
//! ## Proportion
//!
//! ```rust
//! use interval_confidence::proportion_interval;
//!
//! let ci = proportion_interval(0.5, 100).unwrap();
//! assert!((ci.upper() - 0.598).abs() < 1e-9);
//! ```

pub mod critical;
mod mean;
mod proportion;
mod traits;
mod types;

// Re-exports
pub use critical::{
    critical_t_value, LARGE_SAMPLE_CUTOFF, MIN_T_SAMPLE_SIZE, PROPORTION_Z, Z_CRITICAL_95,
};
pub use mean::{
    mean_interval, mean_interval_from_summary, mean_margin_of_error, mean_standard_error,
    MeanTInterval,
};
pub use proportion::{
    proportion_interval, proportion_interval_from_successes, proportion_margin_of_error,
    proportion_standard_error, ProportionZInterval,
};
pub use traits::ConfidenceIntervalEstimator;
pub use types::{ConfidenceInterval, ConfidenceLevel};
