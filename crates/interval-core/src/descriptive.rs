//! Descriptive statistics: mean, sum of squares and sample standard deviation
//!
//! Every public function validates its input once before touching it: an
//! empty sample is an [`Error::EmptyInput`] and a NaN or infinite observation
//! is an [`Error::NonFinite`]. A statistic of finite observations that does
//! not fit in an `f64` is an [`Error::Overflow`]. Nothing here substitutes a
//! default.

use crate::{Error, Numeric, Result};

fn validate<T: Numeric>(sample: &[T], operation: &'static str) -> Result<()> {
    if sample.is_empty() {
        return Err(Error::empty_input(operation));
    }
    if sample.iter().any(|x| !x.is_finite()) {
        return Err(Error::non_finite("sample"));
    }
    Ok(())
}

fn finite(value: f64, operation: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(Error::Overflow { operation })
    }
}

// Caller has validated the sample.
fn mean_unchecked<T: Numeric>(sample: &[T]) -> Result<f64> {
    let n = sample.len() as f64;
    let total: f64 = sample.iter().map(Numeric::to_f64).sum();
    if total.is_finite() {
        return Ok(total / n);
    }
    // The running total left f64 range; the mean itself may still fit
    let scaled: f64 = sample.iter().map(|x| x.to_f64() / n).sum();
    finite(scaled, "mean")
}

// Caller has validated the sample and computed its mean.
fn sum_of_squares_about<T: Numeric>(sample: &[T], mean: f64) -> Result<f64> {
    let ss = sample
        .iter()
        .map(|x| {
            let d = x.to_f64() - mean;
            d * d
        })
        .sum();
    finite(ss, "sum of squares")
}

fn variance_unchecked<T: Numeric>(sample: &[T], mean: f64) -> Result<f64> {
    if sample.len() < 2 {
        return Err(Error::InsufficientSampleSize {
            minimum: 2,
            actual: sample.len(),
        });
    }
    let variance = sum_of_squares_about(sample, mean)? / (sample.len() - 1) as f64;
    log::trace!("sample variance over {} observations: {variance}", sample.len());
    Ok(variance)
}

/// Sum of all observations
///
/// # Errors
/// [`Error::Overflow`] if the total leaves the range of `f64`.
pub fn sum<T: Numeric>(sample: &[T]) -> Result<f64> {
    validate(sample, "sum")?;
    finite(sample.iter().map(Numeric::to_f64).sum(), "sum")
}

/// Arithmetic mean of the sample
///
/// # Errors
/// [`Error::EmptyInput`] if the sample is empty.
pub fn mean<T: Numeric>(sample: &[T]) -> Result<f64> {
    validate(sample, "mean")?;
    mean_unchecked(sample)
}

/// Sum of squared deviations from the mean
///
/// Not divided by `n` or `n - 1`; callers pick the denominator.
pub fn sum_of_squares<T: Numeric>(sample: &[T]) -> Result<f64> {
    validate(sample, "sum of squares")?;
    let m = mean_unchecked(sample)?;
    sum_of_squares_about(sample, m)
}

/// Unbiased sample variance, `sum_of_squares / (n - 1)`
///
/// # Errors
/// - [`Error::EmptyInput`] if the sample is empty
/// - [`Error::InsufficientSampleSize`] for a single observation, where
///   Bessel's correction would divide by zero
/// - [`Error::Overflow`] if the squared deviations leave the range of `f64`
pub fn sample_variance<T: Numeric>(sample: &[T]) -> Result<f64> {
    validate(sample, "sample variance")?;
    let m = mean_unchecked(sample)?;
    variance_unchecked(sample, m)
}

/// Sample standard deviation with Bessel's correction
///
/// `sqrt(sum_of_squares / (n - 1))`. Same errors as [`sample_variance`].
pub fn sample_std_dev<T: Numeric>(sample: &[T]) -> Result<f64> {
    validate(sample, "sample standard deviation")?;
    let m = mean_unchecked(sample)?;
    variance_unchecked(sample, m).map(f64::sqrt)
}

/// Mean, standard deviation and size of a sample
///
/// This is what the precomputed-summary interval constructors take, so a
/// caller can summarise a large sample once and discard it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub mean: f64,
    pub std_dev: f64,
    pub n: usize,
}

impl Summary {
    /// Summarise a raw sample
    pub fn from_sample<T: Numeric>(sample: &[T]) -> Result<Self> {
        validate(sample, "sample summary")?;
        let mean = mean_unchecked(sample)?;
        let std_dev = variance_unchecked(sample, mean)?.sqrt();
        Ok(Self {
            mean,
            std_dev,
            n: sample.len(),
        })
    }

    /// Standard error of the mean, `std_dev / sqrt(n)`
    pub fn standard_error(&self) -> f64 {
        self.std_dev / (self.n as f64).sqrt()
    }
}
