//! Common types for confidence intervals

use interval_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Confidence level of an interval
///
/// Only the 95% level is supported; the critical values in this crate are
/// fitted for it and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    pub const NINETY_FIVE: Self = Self(0.95);

    /// Get the confidence level value
    pub fn value(&self) -> f64 {
        self.0
    }

    /// Get the alpha level (1 - confidence level)
    pub fn alpha(&self) -> f64 {
        1.0 - self.0
    }

    /// Get the tail probability (alpha/2 for two-tailed)
    pub fn tail_probability(&self) -> f64 {
        self.alpha() / 2.0
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::NINETY_FIVE
    }
}

impl fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}%", self.0 * 100.0)
    }
}

/// A two-sided confidence interval around a point estimate
///
/// Fields are private: once built, an interval always satisfies
/// `lower <= estimate <= upper` with all three finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "IntervalRepr")]
pub struct ConfidenceInterval {
    lower: f64,
    upper: f64,
    estimate: f64,
    confidence_level: ConfidenceLevel,
}

/// Unvalidated wire form of [`ConfidenceInterval`]
#[derive(Deserialize)]
pub struct IntervalRepr {
    lower: f64,
    upper: f64,
    estimate: f64,
    confidence_level: f64,
}

impl TryFrom<IntervalRepr> for ConfidenceInterval {
    type Error = Error;

    fn try_from(repr: IntervalRepr) -> Result<Self> {
        if (repr.confidence_level - ConfidenceLevel::NINETY_FIVE.value()).abs() > 1e-12 {
            return Err(Error::InvalidParameter(format!(
                "unsupported confidence level {}",
                repr.confidence_level
            )));
        }
        Self::new(repr.lower, repr.upper, repr.estimate)
    }
}

impl ConfidenceInterval {
    /// Create a 95% confidence interval from explicit bounds
    ///
    /// # Errors
    /// - [`Error::NonFinite`] if any argument is NaN or infinite
    /// - [`Error::InvalidParameter`] unless `lower <= estimate <= upper`
    pub fn new(lower: f64, upper: f64, estimate: f64) -> Result<Self> {
        if !(lower.is_finite() && upper.is_finite() && estimate.is_finite()) {
            return Err(Error::non_finite("confidence interval bounds"));
        }
        if lower > upper {
            return Err(Error::InvalidParameter(format!(
                "lower bound {lower} exceeds upper bound {upper}"
            )));
        }
        if estimate < lower || estimate > upper {
            return Err(Error::InvalidParameter(format!(
                "estimate {estimate} lies outside [{lower}, {upper}]"
            )));
        }
        Ok(Self {
            lower,
            upper,
            estimate,
            confidence_level: ConfidenceLevel::NINETY_FIVE,
        })
    }

    /// Create the symmetric interval `[estimate - margin, estimate + margin]`
    pub fn symmetric(estimate: f64, margin: f64) -> Result<Self> {
        if !margin.is_finite() || !estimate.is_finite() {
            return Err(Error::non_finite("margin of error"));
        }
        if margin < 0.0 {
            return Err(Error::InvalidParameter(format!(
                "margin of error {margin} is negative"
            )));
        }
        Self::new(estimate - margin, estimate + margin, estimate)
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    /// The point estimate (center of interval)
    pub fn estimate(&self) -> f64 {
        self.estimate
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        self.confidence_level
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Margin of error (half-width)
    pub fn margin_of_error(&self) -> f64 {
        self.width() / 2.0
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Check if intervals overlap (touching endpoints count)
    pub fn overlaps(&self, other: &ConfidenceInterval) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// True if this interval lies strictly below `other`
    pub fn is_below(&self, other: &ConfidenceInterval) -> bool {
        self.upper < other.lower
    }

    /// True if this interval lies strictly above `other`
    pub fn is_above(&self, other: &ConfidenceInterval) -> bool {
        self.lower > other.upper
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} CI: [{:.4}, {:.4}], estimate: {:.4}",
            self.confidence_level, self.lower, self.upper, self.estimate
        )
    }
}
