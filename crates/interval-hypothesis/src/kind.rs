//! The three directional hypotheses and the interval-disjointness rule

use interval_confidence::ConfidenceInterval;
use interval_core::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Alternative hypothesis about two population parameters X and Y
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HypothesisTestKind {
    /// Ha: X < Y
    LessThan,
    /// Ha: X > Y
    GreaterThan,
    /// Ha: X != Y
    NotEqual,
}

impl HypothesisTestKind {
    pub const ALL: [Self; 3] = [Self::LessThan, Self::GreaterThan, Self::NotEqual];

    /// Mathematical symbol of the alternative
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::LessThan => "<",
            Self::GreaterThan => ">",
            Self::NotEqual => "!=",
        }
    }

    /// Whether the intervals support this alternative at their confidence level
    pub fn evaluate(&self, x: &ConfidenceInterval, y: &ConfidenceInterval) -> bool {
        match self {
            Self::LessThan => x.is_below(y),
            Self::GreaterThan => x.is_above(y),
            Self::NotEqual => x.is_below(y) || x.is_above(y),
        }
    }
}

impl Default for HypothesisTestKind {
    fn default() -> Self {
        Self::NotEqual
    }
}

impl fmt::Display for HypothesisTestKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LessThan => "less than",
            Self::GreaterThan => "greater than",
            Self::NotEqual => "not equal",
        };
        f.write_str(name)
    }
}

impl FromStr for HypothesisTestKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "<" | "lt" | "less" | "less_than" | "less-than" | "less than" => Ok(Self::LessThan),
            ">" | "gt" | "greater" | "greater_than" | "greater-than" | "greater than" => {
                Ok(Self::GreaterThan)
            }
            "!=" | "ne" | "not_equal" | "not-equal" | "not equal" => Ok(Self::NotEqual),
            other => Err(Error::InvalidParameter(format!(
                "unknown hypothesis test kind '{other}'"
            ))),
        }
    }
}

/// Does the evidence support `X kind Y` at 95% confidence?
///
/// Conservative: the null hypothesis is rejected only when the two intervals
/// are disjoint in the claimed direction. Touching endpoints do not count.
pub fn evaluate(x: &ConfidenceInterval, y: &ConfidenceInterval, kind: HypothesisTestKind) -> bool {
    kind.evaluate(x, y)
}
