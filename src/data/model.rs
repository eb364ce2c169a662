//! Chart Data Model
//! The input shape produced by the distribution calculator: per-outcome
//! labels, probabilities, and the raw outcome values.

use serde::{Deserialize, Serialize};

/// Distribution chart data.
///
/// `labels` and `values` correspond index-wise: label `i` describes bar `i`.
/// `x_values` carries the raw outcome values the labels were derived from;
/// it is accepted for wire compatibility with the producer but not read by
/// rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    #[serde(default)]
    pub labels: Vec<String>,
    #[serde(default)]
    pub values: Vec<f64>,
    #[serde(default)]
    pub x_values: Vec<f64>,
}

impl ChartData {
    pub fn new(labels: Vec<String>, values: Vec<f64>) -> Self {
        Self {
            labels,
            values,
            x_values: Vec::new(),
        }
    }

    /// Number of renderable bars. A malformed payload where the two sequences
    /// disagree renders the common prefix instead of failing.
    pub fn len(&self) -> usize {
        self.labels.len().min(self.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether labels and values have the expected matching length.
    pub fn is_consistent(&self) -> bool {
        self.labels.len() == self.values.len()
    }

    /// Parse from a JSON document. Unknown fields are ignored.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
