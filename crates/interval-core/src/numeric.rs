//! Numeric observation trait
//!
//! Samples are slices of any type that can be widened to `f64`. This lets
//! callers pass word lengths (`usize`) or counts (`u32`) straight into the
//! engine without building an intermediate `Vec<f64>`.

use std::fmt::Debug;

/// Base trait for numeric types that can be used as observations
pub trait Numeric: Copy + PartialOrd + Debug + Send + Sync {
    /// Convert to f64 for aggregate operations (sum, mean, variance)
    fn to_f64(&self) -> f64;

    /// Check if value is finite (always true for integers)
    fn is_finite(&self) -> bool;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_f64(&self) -> f64 {
                    *self as f64
                }

                fn is_finite(&self) -> bool {
                    true
                }
            }
        )*
    };
}

impl_numeric_int!(i32, u32, i64, u64, usize);

impl Numeric for f64 {
    fn to_f64(&self) -> f64 {
        *self
    }

    fn is_finite(&self) -> bool {
        f64::is_finite(*self)
    }
}

impl Numeric for f32 {
    fn to_f64(&self) -> f64 {
        *self as f64
    }

    fn is_finite(&self) -> bool {
        f32::is_finite(*self)
    }
}
