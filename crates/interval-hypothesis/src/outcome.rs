//! Result of a two-population test and its human-readable report

use crate::kind::HypothesisTestKind;
use interval_confidence::ConfidenceInterval;
use serde::Serialize;
use std::fmt;

/// Both intervals, the alternative tested and the decision
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TestOutcome {
    pub x_label: String,
    pub y_label: String,
    pub x: ConfidenceInterval,
    pub y: ConfidenceInterval,
    pub kind: HypothesisTestKind,
    /// Interval method that produced `x` and `y`
    pub method: &'static str,
    /// True if the intervals support the alternative
    pub significant: bool,
}

impl TestOutcome {
    /// One-line conclusion, e.g. "There is evidence that X < Y at 95.0% confidence."
    pub fn conclusion(&self) -> String {
        format!(
            "There is {}evidence that {} {} {} at {} confidence.",
            if self.significant { "" } else { "NO " },
            self.x_label,
            self.kind.symbol(),
            self.y_label,
            self.x.confidence_level(),
        )
    }
}

impl fmt::Display for TestOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} ({}): {}", self.x_label, self.method, self.x)?;
        writeln!(f, "{} ({}): {}", self.y_label, self.method, self.y)?;
        write!(f, "{}", self.conclusion())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(significant: bool) -> TestOutcome {
        TestOutcome {
            x_label: "Spanish".to_string(),
            y_label: "French".to_string(),
            x: ConfidenceInterval::new(1.0, 2.0, 1.5).unwrap(),
            y: ConfidenceInterval::new(3.0, 4.0, 3.5).unwrap(),
            kind: HypothesisTestKind::LessThan,
            method: "mean t-interval",
            significant,
        }
    }

    #[test]
    fn test_conclusion() {
        assert_eq!(
            outcome(true).conclusion(),
            "There is evidence that Spanish < French at 95.0% confidence."
        );
        assert_eq!(
            outcome(false).conclusion(),
            "There is NO evidence that Spanish < French at 95.0% confidence."
        );
    }

    #[test]
    fn test_display_lists_both_intervals() {
        let report = outcome(true).to_string();
        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Spanish (mean t-interval): 95.0% CI: [1.0000, 2.0000]"));
        assert!(lines[1].starts_with("French (mean t-interval): 95.0% CI: [3.0000, 4.0000]"));
    }

    #[test]
    fn test_serialize() {
        let value = serde_json::to_value(outcome(true)).unwrap();
        assert_eq!(value["kind"], "less_than");
        assert_eq!(value["significant"], true);
        assert_eq!(value["x"]["upper"], 2.0);
    }
}
