//! 95% confidence intervals and interval-based hypothesis tests
//!
//! This crate re-exports the workspace crates:
//!
//! - [`descriptive`]: mean, sum of squares, sample standard deviation
//! - [`confidence`]: mean t-intervals and proportion z-intervals
//! - [`hypothesis`]: less-than / greater-than / not-equal tests on two intervals
//!
//! # Example
//!
//! ```rust
//! use interval_stats::prelude::*;
//!
//! let x = mean_interval(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
//! let y = proportion_interval(0.5, 100).unwrap();
//! assert!(evaluate(&y, &x, HypothesisTestKind::LessThan));
//! ```

pub use interval_confidence as confidence;
pub use interval_core::descriptive;
pub use interval_hypothesis as hypothesis;

pub use interval_confidence::{
    critical_t_value, mean_interval, mean_interval_from_summary, proportion_interval,
    ConfidenceInterval,
};
pub use interval_core::{Error, Result};
pub use interval_hypothesis::{evaluate, HypothesisTestKind};

/// Prelude module for convenient imports
pub mod prelude {
    pub use interval_confidence::{
        critical_t_value, mean_interval, mean_interval_from_summary, proportion_interval,
        ConfidenceInterval, ConfidenceIntervalEstimator, ConfidenceLevel, MeanTInterval,
        ProportionZInterval,
    };
    pub use interval_core::{Error, Numeric, Result, Summary};
    pub use interval_hypothesis::{
        evaluate, HypothesisConfig, HypothesisTest, HypothesisTestKind, TestOutcome,
    };
}
