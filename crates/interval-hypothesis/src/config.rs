//! Configuration for two-population tests

use crate::kind::HypothesisTestKind;
use serde::{Deserialize, Serialize};

/// Which alternative to test and what to call the two populations in reports
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HypothesisConfig {
    pub kind: HypothesisTestKind,
    pub x_label: String,
    pub y_label: String,
}

impl Default for HypothesisConfig {
    fn default() -> Self {
        Self {
            kind: HypothesisTestKind::default(),
            x_label: "X".to_string(),
            y_label: "Y".to_string(),
        }
    }
}

impl HypothesisConfig {
    pub fn new(kind: HypothesisTestKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    pub fn with_kind(mut self, kind: HypothesisTestKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn with_labels(mut self, x_label: impl Into<String>, y_label: impl Into<String>) -> Self {
        self.x_label = x_label.into();
        self.y_label = y_label.into();
        self
    }
}
