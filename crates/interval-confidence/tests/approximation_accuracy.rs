//! Accuracy of the fitted critical values against exact Student-t quantiles,
//! and empirical coverage of the resulting intervals.

use interval_confidence::{critical_t_value, mean_interval, LARGE_SAMPLE_CUTOFF, MIN_T_SAMPLE_SIZE};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use statrs::distribution::{ContinuousCDF, StudentsT};

fn exact_t(df: f64) -> f64 {
    StudentsT::new(0.0, 1.0, df).unwrap().inverse_cdf(0.975)
}

#[test]
fn test_close_to_exact_quantile() {
    let mut worst = 0.0f64;
    for n in MIN_T_SAMPLE_SIZE..=LARGE_SAMPLE_CUTOFF {
        let approx = critical_t_value(n).unwrap();
        let exact = exact_t((n - 1) as f64);
        let error = (approx - exact).abs();
        worst = worst.max(error);
        assert!(
            error < 0.02,
            "n = {n}: approximation {approx:.5} vs exact {exact:.5}"
        );
    }
    println!("Worst absolute error over n in 7..=1000: {worst:.5}");
}

#[test]
fn test_error_shrinks_with_sample_size() {
    let error_at = |n: usize| (critical_t_value(n).unwrap() - exact_t((n - 1) as f64)).abs();
    assert!(error_at(500) < error_at(20));
    assert!(error_at(1000) < 1e-3);
}

#[test]
fn test_coverage_close_to_nominal() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let normal = Normal::new(10.0, 3.0).unwrap();
    let trials = 4000;
    let n = 30;

    let covered = (0..trials)
        .filter(|_| {
            let sample: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
            mean_interval(&sample).unwrap().contains(10.0)
        })
        .count();

    let coverage = covered as f64 / trials as f64;
    println!("Empirical coverage at n = {n}: {coverage:.4}");
    assert!(
        (0.93..=0.97).contains(&coverage),
        "coverage {coverage} too far from 0.95"
    );
}
