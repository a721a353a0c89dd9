//! Score report: the externally consumed result of an analysis

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::column::{Column, Metric};

/// Precision/recall/F1 per column plus accuracy and correct counts.
///
/// Serializes flat, e.g.
/// `{"Acc": 0.75, "Correct": [1, 1, 1], "C0-F": 0.6667, "C0-P": 0.5, ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    #[serde(rename = "Acc")]
    accuracy: f64,
    #[serde(rename = "Correct")]
    correct: Vec<usize>,
    #[serde(flatten)]
    scores: BTreeMap<String, f64>,
}

impl ScoreReport {
    /// Assemble a report from aligned `[C0..Cn-1, Mi, Ma]` metric series.
    pub(crate) fn new(
        accuracy: f64,
        correct: Vec<usize>,
        precision: &[f64],
        recall: &[f64],
        f1: &[f64],
    ) -> Self {
        let n_classes = correct.len();
        let mut scores = BTreeMap::new();
        for (metric, series) in Metric::ALL.into_iter().zip([precision, recall, f1]) {
            for column in Column::all(n_classes) {
                scores.insert(metric.key(column), series[column.position(n_classes)]);
            }
        }
        Self { accuracy, correct, scores }
    }

    /// Overall accuracy.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// True-positive count of each class.
    pub fn correct(&self) -> &[usize] {
        &self.correct
    }

    /// Number of classes scored.
    pub fn n_classes(&self) -> usize {
        self.correct.len()
    }

    /// Look up a score by report key such as `"C1-R"` or `"Mi-F"`.
    pub fn get(&self, key: &str) -> Option<f64> {
        self.scores.get(key).copied()
    }

    /// Score of `metric` in `column`.
    pub fn metric(&self, column: Column, metric: Metric) -> Option<f64> {
        self.get(&metric.key(column))
    }

    /// All `<column>-<metric>` scores in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.scores.iter().map(|(k, &v)| (k.as_str(), v))
    }
}
