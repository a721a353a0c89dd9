//! Per-class label counts

use serde::{Deserialize, Serialize};

/// Occurrence counts of each class in one label role.
///
/// Besides the raw per-class counts this exposes the two derived slots of a
/// score table: the mean over classes (micro basis) and the integer sum.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountSeries {
    per_class: Vec<usize>,
}

impl CountSeries {
    /// Count how many of `labels` fall in each class `0..n_classes`.
    pub fn tally(labels: impl IntoIterator<Item = usize>, n_classes: usize) -> Self {
        let mut per_class = vec![0; n_classes];
        for label in labels {
            if label < n_classes {
                per_class[label] += 1;
            }
        }
        Self { per_class }
    }

    /// Raw counts, one per class.
    pub fn per_class(&self) -> &[usize] {
        &self.per_class
    }

    /// Count for a single class.
    ///
    /// # Panics
    /// Panics if `class` is not below the number of classes.
    pub fn get(&self, class: usize) -> usize {
        self.per_class[class]
    }

    /// Mean count over the classes.
    pub fn mean(&self) -> f64 {
        if self.per_class.is_empty() {
            return 0.0;
        }
        self.sum() as f64 / self.per_class.len() as f64
    }

    /// Sum over the classes.
    pub fn sum(&self) -> usize {
        self.per_class.iter().sum()
    }

    /// Per-class counts followed by the mean slot: `[C0..Cn-1, Mi]`.
    pub fn with_mean(&self) -> Vec<f64> {
        let mut slots: Vec<f64> = self.per_class.iter().map(|&c| c as f64).collect();
        slots.push(self.mean());
        slots
    }

    /// Full table row: `[C0..Cn-1, Mi, Sum]`.
    pub fn slots(&self) -> Vec<f64> {
        let mut slots = self.with_mean();
        slots.push(self.sum() as f64);
        slots
    }
}

/// Label, prediction and true-positive counts for every class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerClassCounts {
    /// Samples whose true label is `c`
    pub truth: CountSeries,
    /// Samples whose predicted label is `c`
    pub predicted: CountSeries,
    /// Samples where true label == predicted label == `c`
    pub correct: CountSeries,
}

impl PerClassCounts {
    /// Count both label arrays over `0..n_classes`.
    ///
    /// The correct counts come from masking to the positions where the two
    /// arrays agree and then tallying the true labels there.
    pub fn from_labels(y_true: &[usize], y_pred: &[usize], n_classes: usize) -> Self {
        let agreeing = y_true
            .iter()
            .zip(y_pred)
            .filter(|(t, p)| t == p)
            .map(|(&t, _)| t);

        Self {
            truth: CountSeries::tally(y_true.iter().copied(), n_classes),
            predicted: CountSeries::tally(y_pred.iter().copied(), n_classes),
            correct: CountSeries::tally(agreeing, n_classes),
        }
    }

    /// Number of classes counted.
    pub fn n_classes(&self) -> usize {
        self.truth.per_class().len()
    }
}
