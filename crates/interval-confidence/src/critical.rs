//! Critical values for 95% two-sided intervals
//!
//! The t critical value comes from a fitted rational function of the degrees
//! of freedom rather than a table or an inverse-CDF solver:
//!
//! ```text
//! t(df) ≈ | df·(1 + c·df) / (df·(b + df)) |,   b = -0.766593,  c = 1.959963984540054
//! ```
//!
//! RMSE against the exact quantile is about 0.048 over df in [1, 45] and the
//! error shrinks as df grows. Below seven observations the relative error
//! passes 5%, so those sample sizes are refused. Above 1000 observations the
//! normal critical value is returned directly.

use interval_core::{Error, Result};

/// Two-sided 95% critical value of the standard normal distribution
pub const Z_CRITICAL_95: f64 = 1.959963984540054;

/// z multiplier used for proportion intervals
pub const PROPORTION_Z: f64 = 1.96;

/// Smallest sample size accepted by [`critical_t_value`]
pub const MIN_T_SAMPLE_SIZE: usize = 7;

/// Sample sizes above this use [`Z_CRITICAL_95`]
pub const LARGE_SAMPLE_CUTOFF: usize = 1000;

// Fitted pole offset of the rational approximation. Do not round.
const RATIONAL_B: f64 = -0.766593;

/// Two-tailed 5% critical t-value for `sample_size - 1` degrees of freedom
///
/// # Errors
/// [`Error::InsufficientSampleSize`] when `sample_size < 7`.
pub fn critical_t_value(sample_size: usize) -> Result<f64> {
    if sample_size < MIN_T_SAMPLE_SIZE {
        return Err(Error::InsufficientSampleSize {
            minimum: MIN_T_SAMPLE_SIZE,
            actual: sample_size,
        });
    }
    if sample_size > LARGE_SAMPLE_CUTOFF {
        return Ok(Z_CRITICAL_95);
    }

    let df = (sample_size - 1) as f64;
    let numerator = df * (1.0 + Z_CRITICAL_95 * df);
    let denominator = df * (RATIONAL_B + df);

    Ok((numerator / denominator).abs())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_small_samples_rejected() {
        for n in 0..MIN_T_SAMPLE_SIZE {
            match critical_t_value(n) {
                Err(Error::InsufficientSampleSize { minimum, actual }) => {
                    assert_eq!(minimum, 7);
                    assert_eq!(actual, n);
                }
                other => panic!("n = {n}: expected InsufficientSampleSize, got {other:?}"),
            }
        }
        assert!(critical_t_value(7).is_ok());
    }

    #[test]
    fn test_known_values() {
        // df = 7, exact t = 2.365
        assert_abs_diff_eq!(critical_t_value(8).unwrap(), 2.36, epsilon = 0.01);
        // df = 29, exact t = 2.045
        assert_abs_diff_eq!(critical_t_value(30).unwrap(), 2.045, epsilon = 0.01);
        // df = 6, straight from the fitted formula
        assert_abs_diff_eq!(
            critical_t_value(7).unwrap(),
            6.0 * (1.0 + Z_CRITICAL_95 * 6.0) / (6.0 * (6.0 - 0.766593)),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_large_sample_shortcut() {
        assert_eq!(critical_t_value(1001).unwrap(), 1.959963984540054);
        assert_eq!(critical_t_value(50_000).unwrap(), Z_CRITICAL_95);
        assert_eq!(critical_t_value(usize::MAX).unwrap(), Z_CRITICAL_95);
        // 1000 is still on the approximation, just above the asymptote
        assert!(critical_t_value(1000).unwrap() > Z_CRITICAL_95);
    }

    #[test]
    fn test_monotone_decreasing() {
        let mut previous = critical_t_value(MIN_T_SAMPLE_SIZE).unwrap();
        for n in (MIN_T_SAMPLE_SIZE + 1)..=LARGE_SAMPLE_CUTOFF {
            let current = critical_t_value(n).unwrap();
            assert!(current < previous, "t({n}) = {current} >= t({}) = {previous}", n - 1);
            assert!(current > Z_CRITICAL_95);
            previous = current;
        }
    }
}
