//! Two-population tests: build both intervals, then compare them

use crate::config::HypothesisConfig;
use crate::kind::HypothesisTestKind;
use crate::outcome::TestOutcome;
use interval_confidence::{
    proportion_interval, ConfidenceInterval, ConfidenceIntervalEstimator, MeanTInterval,
    ProportionZInterval,
};
use interval_core::{Numeric, Result};
use tracing::{debug, instrument};

/// Runs interval-disjointness tests under a fixed [`HypothesisConfig`]
#[derive(Debug, Clone, Default)]
pub struct HypothesisTest {
    config: HypothesisConfig,
}

impl HypothesisTest {
    pub fn new(config: HypothesisConfig) -> Self {
        Self { config }
    }

    /// Shorthand for a test with default labels
    pub fn with_kind(kind: HypothesisTestKind) -> Self {
        Self::new(HypothesisConfig::new(kind))
    }

    pub fn config(&self) -> &HypothesisConfig {
        &self.config
    }

    /// Compare the means of two raw samples with t-intervals
    pub fn means<T: Numeric>(&self, x: &[T], y: &[T]) -> Result<TestOutcome> {
        self.run(&MeanTInterval, x, y)
    }

    /// Compare two samples using any interval estimator
    #[instrument(level = "debug", skip_all, fields(kind = %self.config.kind, method = estimator.name()))]
    pub fn run<E, T>(&self, estimator: &E, x: &[T], y: &[T]) -> Result<TestOutcome>
    where
        E: ConfidenceIntervalEstimator,
        T: Numeric,
    {
        let x_ci = estimator.confidence_interval(x)?;
        let y_ci = estimator.confidence_interval(y)?;
        Ok(self.compare(x_ci, y_ci, estimator.name()))
    }

    /// Compare two sample proportions given as `(proportion, sample_size)`
    pub fn proportions(&self, x: (f64, usize), y: (f64, usize)) -> Result<TestOutcome> {
        let x_ci = proportion_interval(x.0, x.1)?;
        let y_ci = proportion_interval(y.0, y.1)?;
        Ok(self.compare(x_ci, y_ci, ProportionZInterval.name()))
    }

    /// Compare two intervals that were built elsewhere
    pub fn compare(
        &self,
        x: ConfidenceInterval,
        y: ConfidenceInterval,
        method: &'static str,
    ) -> TestOutcome {
        let significant = self.config.kind.evaluate(&x, &y);
        debug!(
            x_lower = x.lower(),
            x_upper = x.upper(),
            y_lower = y.lower(),
            y_upper = y.upper(),
            significant,
            "hypothesis test decided"
        );
        TestOutcome {
            x_label: self.config.x_label.clone(),
            y_label: self.config.y_label.clone(),
            x,
            y,
            kind: self.config.kind,
            method,
            significant,
        }
    }
}
