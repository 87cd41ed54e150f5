//! Hypothesis tests from confidence interval disjointness
//!
//! Given 95% confidence intervals for two population parameters X and Y,
//! the null hypothesis `X = Y` is rejected in favour of an alternative only
//! when the intervals do not overlap in the claimed direction:
//!
//! | alternative | rejects H0 when |
//! |-------------|-----------------|
//! | `X < Y`     | `upper(X) < lower(Y)` |
//! | `X > Y`     | `lower(X) > upper(Y)` |
//! | `X != Y`    | either of the above |
//!
//! This is more conservative than a two-sample t statistic.
//!
//! # Example
//!
//! ```rust
//! use interval_hypothesis::{HypothesisConfig, HypothesisTest, HypothesisTestKind};
//!
//! let spanish = [2usize, 3, 2, 4, 3, 2, 3, 4, 2, 3, 3, 2];
//! let french = [7usize, 8, 6, 9, 7, 8, 7, 6, 8, 9, 7, 8];
//!
//! let config = HypothesisConfig::new(HypothesisTestKind::LessThan)
//!     .with_labels("Spanish", "French");
//! let outcome = HypothesisTest::new(config).means(&spanish, &french).unwrap();
//!
//! assert!(outcome.significant);
//! println!("{outcome}");
//! ```

pub mod config;
mod kind;
mod outcome;
mod runner;

pub use config::HypothesisConfig;
pub use kind::{evaluate, HypothesisTestKind};
pub use outcome::TestOutcome;
pub use runner::HypothesisTest;
