//! Property-based tests for interval construction

use interval_confidence::{
    critical_t_value, mean_interval, mean_interval_from_summary, proportion_interval,
    LARGE_SAMPLE_CUTOFF, MIN_T_SAMPLE_SIZE, Z_CRITICAL_95,
};
use interval_core::Error;
use proptest::prelude::*;

proptest! {
    #[test]
    fn prop_mean_interval_ordered_and_symmetric(
        mean in -1e4f64..1e4,
        std_dev in 0.0f64..1e3,
        n in 7usize..5000,
    ) {
        let ci = mean_interval_from_summary(mean, std_dev, n).unwrap();
        prop_assert!(ci.lower() <= ci.upper());
        let above = ci.upper() - ci.estimate();
        let below = ci.estimate() - ci.lower();
        prop_assert!((above - below).abs() <= 1e-9 * (1.0 + mean.abs()));
        prop_assert_eq!(ci.estimate(), mean);
    }

    #[test]
    fn prop_raw_sample_interval_ordered(sample in prop::collection::vec(-100.0f64..100.0, 7..300)) {
        let ci = mean_interval(&sample).unwrap();
        prop_assert!(ci.lower() <= ci.estimate() && ci.estimate() <= ci.upper());
        // Idempotent
        prop_assert_eq!(ci, mean_interval(&sample).unwrap());
    }

    #[test]
    fn prop_proportion_interval_ordered_and_symmetric(p in 0.0f64..=1.0, n in 1usize..100_000) {
        let ci = proportion_interval(p, n).unwrap();
        prop_assert!(ci.lower() <= ci.upper());
        let above = ci.upper() - p;
        let below = p - ci.lower();
        prop_assert!((above - below).abs() <= 1e-12);
        prop_assert_eq!(ci, proportion_interval(p, n).unwrap());
    }

    #[test]
    fn prop_small_samples_rejected(n in 0usize..MIN_T_SAMPLE_SIZE) {
        let is_insufficient = matches!(
            critical_t_value(n),
            Err(Error::InsufficientSampleSize { .. })
        );
        prop_assert!(is_insufficient);
    }

    #[test]
    fn prop_large_samples_use_normal_value(n in (LARGE_SAMPLE_CUTOFF + 1)..usize::MAX) {
        prop_assert_eq!(critical_t_value(n).unwrap(), Z_CRITICAL_95);
    }

    #[test]
    fn prop_wider_spread_wider_interval(
        std_dev in 0.1f64..100.0,
        factor in 1.1f64..10.0,
        n in 7usize..2000,
    ) {
        let narrow = mean_interval_from_summary(0.0, std_dev, n).unwrap();
        let wide = mean_interval_from_summary(0.0, std_dev * factor, n).unwrap();
        prop_assert!(wide.width() > narrow.width());
    }
}
