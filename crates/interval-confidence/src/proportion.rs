//! z-intervals for a population proportion
//!
//! The proportion path uses the fixed multiplier [`PROPORTION_Z`] and never the
//! t approximation. Bounds are not clipped to `[0, 1]`.

use crate::critical::PROPORTION_Z;
use crate::traits::ConfidenceIntervalEstimator;
use crate::types::ConfidenceInterval;
use interval_core::{descriptive, Error, Numeric, Result};
use tracing::{debug, instrument};

fn validate(proportion: f64, sample_size: usize) -> Result<()> {
    if sample_size == 0 {
        return Err(Error::empty_input("proportion interval"));
    }
    if !proportion.is_finite() {
        return Err(Error::non_finite("sample proportion"));
    }
    if !(0.0..=1.0).contains(&proportion) {
        return Err(Error::invalid_proportion(proportion));
    }
    Ok(())
}

/// Standard error of a sample proportion, `sqrt(p(1 - p) / n)`
pub fn proportion_standard_error(proportion: f64, sample_size: usize) -> Result<f64> {
    validate(proportion, sample_size)?;
    Ok((proportion * (1.0 - proportion) / sample_size as f64).sqrt())
}

/// Margin of error of a sample proportion at 95% confidence
pub fn proportion_margin_of_error(proportion: f64, sample_size: usize) -> Result<f64> {
    Ok(PROPORTION_Z * proportion_standard_error(proportion, sample_size)?)
}

/// 95% z-interval for a sample proportion
///
/// # Errors
/// - [`Error::EmptyInput`] when `sample_size == 0`
/// - [`Error::InvalidParameter`] when `proportion` is outside `[0, 1]`
#[instrument(level = "debug")]
pub fn proportion_interval(proportion: f64, sample_size: usize) -> Result<ConfidenceInterval> {
    let margin = proportion_margin_of_error(proportion, sample_size)?;
    let ci = ConfidenceInterval::symmetric(proportion, margin)?;
    debug!(margin, lower = ci.lower(), upper = ci.upper(), "proportion interval");
    Ok(ci)
}

/// 95% z-interval from a success count
pub fn proportion_interval_from_successes(
    successes: usize,
    sample_size: usize,
) -> Result<ConfidenceInterval> {
    if successes > sample_size {
        return Err(Error::InvalidParameter(format!(
            "{successes} successes out of {sample_size} trials"
        )));
    }
    if sample_size == 0 {
        return Err(Error::empty_input("proportion interval"));
    }
    proportion_interval(successes as f64 / sample_size as f64, sample_size)
}

/// Interval estimator for a proportion over 0/1 indicator observations
#[derive(Debug, Clone, Copy, Default)]
pub struct ProportionZInterval;

impl ConfidenceIntervalEstimator for ProportionZInterval {
    fn confidence_interval<T: Numeric>(&self, sample: &[T]) -> Result<ConfidenceInterval> {
        if sample.iter().any(|x| !x.is_finite()) {
            return Err(Error::non_finite("sample"));
        }
        if let Some(bad) = sample.iter().find(|x| {
            let v = x.to_f64();
            v != 0.0 && v != 1.0
        }) {
            return Err(Error::InvalidParameter(format!(
                "indicator observation {bad:?} is neither 0 nor 1"
            )));
        }
        let p = descriptive::mean(sample)?;
        proportion_interval(p, sample.len())
    }

    fn name(&self) -> &'static str {
        "proportion z-interval"
    }
}
