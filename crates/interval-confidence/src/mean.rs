//! t-intervals for a population mean

use crate::critical::critical_t_value;
use crate::traits::ConfidenceIntervalEstimator;
use crate::types::ConfidenceInterval;
use interval_core::{Error, Numeric, Result, Summary};
use tracing::{debug, instrument};

/// Standard error of a sample mean, `std_dev / sqrt(n)`
pub fn mean_standard_error(std_dev: f64, sample_size: usize) -> f64 {
    std_dev / (sample_size as f64).sqrt()
}

/// Margin of error of a sample mean at 95% confidence
///
/// # Errors
/// [`Error::InsufficientSampleSize`] when `sample_size < 7`.
pub fn mean_margin_of_error(std_dev: f64, sample_size: usize) -> Result<f64> {
    let t = critical_t_value(sample_size)?;
    Ok(t * mean_standard_error(std_dev, sample_size))
}

/// 95% t-interval from a precomputed mean and standard deviation
///
/// # Errors
/// - [`Error::InsufficientSampleSize`] when `sample_size < 7`
/// - [`Error::InvalidParameter`] for a negative standard deviation
/// - [`Error::NonFinite`] for a NaN or infinite mean or standard deviation
#[instrument(level = "debug")]
pub fn mean_interval_from_summary(
    mean: f64,
    std_dev: f64,
    sample_size: usize,
) -> Result<ConfidenceInterval> {
    if !mean.is_finite() || !std_dev.is_finite() {
        return Err(Error::non_finite("sample summary"));
    }
    if std_dev < 0.0 {
        return Err(Error::InvalidParameter(format!(
            "standard deviation {std_dev} is negative"
        )));
    }

    let margin = mean_margin_of_error(std_dev, sample_size)?;
    let ci = ConfidenceInterval::symmetric(mean, margin)?;
    debug!(margin, lower = ci.lower(), upper = ci.upper(), "mean interval");
    Ok(ci)
}

/// 95% t-interval for the mean of a raw sample
///
/// # Errors
/// - [`Error::EmptyInput`] for an empty sample
/// - [`Error::InsufficientSampleSize`] for fewer than 7 observations
/// - [`Error::Overflow`] when the sample's spread does not fit in an `f64`
#[instrument(level = "debug", skip(sample), fields(n = sample.len()))]
pub fn mean_interval<T: Numeric>(sample: &[T]) -> Result<ConfidenceInterval> {
    let summary = Summary::from_sample(sample)?;
    mean_interval_from_summary(summary.mean, summary.std_dev, summary.n)
}

/// Interval estimator for a population mean using the approximate t critical value
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanTInterval;

impl ConfidenceIntervalEstimator for MeanTInterval {
    fn confidence_interval<T: Numeric>(&self, sample: &[T]) -> Result<ConfidenceInterval> {
        mean_interval(sample)
    }

    fn name(&self) -> &'static str {
        "mean t-interval"
    }
}
