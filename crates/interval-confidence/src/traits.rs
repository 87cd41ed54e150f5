//! Core trait for confidence interval estimation
//!
//! Interval methods are passed as parameters rather than hard-wired, so a
//! two-sample comparison can be run with mean intervals on word lengths and
//! with proportion intervals on indicator data through the same code path.

use crate::types::{ConfidenceInterval, ConfidenceLevel};
use interval_core::{Numeric, Result};

/// Builds a confidence interval from a raw sample
pub trait ConfidenceIntervalEstimator {
    /// Calculate confidence interval for the given sample
    fn confidence_interval<T: Numeric>(&self, sample: &[T]) -> Result<ConfidenceInterval>;

    /// Get the confidence level
    fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::NINETY_FIVE
    }

    /// Short name used in reports
    fn name(&self) -> &'static str;
}
