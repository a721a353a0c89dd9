//! Owned result of scoring one pair of label arrays

use ndarray::ArrayViewD;
use serde::{Deserialize, Serialize};

use super::column::Column;
use super::counts::PerClassCounts;
use super::labels;
use super::ratio::{f1_score, masked_div, mean, round_to};
use super::report::ScoreReport;
use super::table::{Cell, TabularReport, AGGREGATE_COLUMNS};
use crate::error::{Result, ScoreError};

/// Default number of decimal digits kept in every score.
pub const DEFAULT_DECIMAL_DIGITS: u32 = 4;

/// Everything derived from one scoring run.
///
/// Metric series are aligned to `[C0..Cn-1, Mi, Ma]`; count rows to
/// `[C0..Cn-1, Mi, Sum]`. All scores are already rounded to
/// `decimal_digits`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    y_true: Vec<usize>,
    y_pred: Vec<usize>,
    n_classes: usize,
    counts: PerClassCounts,
    precision: Vec<f64>,
    recall: Vec<f64>,
    f1: Vec<f64>,
    accuracy: f64,
    decimal_digits: u32,
}

impl Analysis {
    /// Score label arrays (1-D) or one-hot matrices (2-D, `one_hot = true`).
    pub fn compute(
        y_true: ArrayViewD<'_, usize>,
        y_pred: ArrayViewD<'_, usize>,
        one_hot: bool,
        decimal_digits: u32,
    ) -> Result<Self> {
        let (y_true, y_pred) = labels::normalize(y_true, y_pred, one_hot)?;
        Self::from_labels(y_true, y_pred, decimal_digits)
    }

    /// Score two equal-length class-index vectors.
    pub fn from_labels(y_true: Vec<usize>, y_pred: Vec<usize>, decimal_digits: u32) -> Result<Self> {
        if y_true.len() != y_pred.len() {
            return Err(ScoreError::dimension(format!(
                "length mismatch: {} true labels vs {} predicted",
                y_true.len(),
                y_pred.len()
            )));
        }
        let n_classes = y_true
            .iter()
            .chain(&y_pred)
            .max()
            .map(|&m| m + 1)
            .ok_or(ScoreError::EmptyInput)?;

        let counts = PerClassCounts::from_labels(&y_true, &y_pred, n_classes);
        let truth = counts.truth.with_mean();
        let predicted = counts.predicted.with_mean();
        let correct = counts.correct.with_mean();

        // Classes and micro slot together; F1 uses the rounded ratios
        let mut precision: Vec<f64> = correct
            .iter()
            .zip(&predicted)
            .map(|(&c, &p)| round_to(masked_div(c, p), decimal_digits))
            .collect();
        let mut recall: Vec<f64> = correct
            .iter()
            .zip(&truth)
            .map(|(&c, &t)| round_to(masked_div(c, t), decimal_digits))
            .collect();
        let mut f1: Vec<f64> = precision
            .iter()
            .zip(&recall)
            .map(|(&p, &r)| round_to(f1_score(p, r), decimal_digits))
            .collect();

        let accuracy = round_to(
            masked_div(counts.correct.sum() as f64, counts.truth.sum() as f64),
            decimal_digits,
        );

        // Macro from the already rounded per-class values, F1 re-derived
        let macro_p = mean(&precision[..n_classes]);
        let macro_r = mean(&recall[..n_classes]);
        precision.push(round_to(macro_p, decimal_digits));
        recall.push(round_to(macro_r, decimal_digits));
        f1.push(round_to(f1_score(macro_p, macro_r), decimal_digits));

        tracing::debug!(
            n_samples = y_true.len(),
            n_classes,
            correct = counts.correct.sum(),
            accuracy,
            macro_precision = macro_p,
            macro_recall = macro_r,
            "analyzed label arrays"
        );

        Ok(Self {
            y_true,
            y_pred,
            n_classes,
            counts,
            precision,
            recall,
            f1,
            accuracy,
            decimal_digits,
        })
    }

    /// Inferred number of classes.
    pub fn n_classes(&self) -> usize {
        self.n_classes
    }

    /// Number of samples scored.
    pub fn n_samples(&self) -> usize {
        self.y_true.len()
    }

    /// True labels as class indices (after one-hot reduction).
    pub fn y_true(&self) -> &[usize] {
        &self.y_true
    }

    /// Predicted labels as class indices (after one-hot reduction).
    pub fn y_pred(&self) -> &[usize] {
        &self.y_pred
    }

    /// Per-class label, prediction and correct counts.
    pub fn counts(&self) -> &PerClassCounts {
        &self.counts
    }

    /// Precision series `[C0..Cn-1, Mi, Ma]`.
    pub fn precision(&self) -> &[f64] {
        &self.precision
    }

    /// Recall series `[C0..Cn-1, Mi, Ma]`.
    pub fn recall(&self) -> &[f64] {
        &self.recall
    }

    /// F1 series `[C0..Cn-1, Mi, Ma]`.
    pub fn f1(&self) -> &[f64] {
        &self.f1
    }

    /// Precision of a single column.
    ///
    /// # Panics
    /// Panics if `column` is `Column::Class(c)` with `c >= n_classes`.
    pub fn precision_at(&self, column: Column) -> f64 {
        self.precision[self.slot(column)]
    }

    /// Recall of a single column.
    ///
    /// # Panics
    /// Panics if `column` is `Column::Class(c)` with `c >= n_classes`.
    pub fn recall_at(&self, column: Column) -> f64 {
        self.recall[self.slot(column)]
    }

    /// F1 of a single column.
    ///
    /// # Panics
    /// Panics if `column` is `Column::Class(c)` with `c >= n_classes`.
    pub fn f1_at(&self, column: Column) -> f64 {
        self.f1[self.slot(column)]
    }

    /// Overall accuracy.
    pub fn accuracy(&self) -> f64 {
        self.accuracy
    }

    /// Decimal digits the scores were rounded to.
    pub fn decimal_digits(&self) -> u32 {
        self.decimal_digits
    }

    fn slot(&self, column: Column) -> usize {
        if let Column::Class(c) = column {
            assert!(c < self.n_classes, "class {c} out of range for {} classes", self.n_classes);
        }
        column.position(self.n_classes)
    }

    /// Flat score mapping.
    pub fn report(&self) -> ScoreReport {
        ScoreReport::new(
            self.accuracy,
            self.counts.correct.per_class().to_vec(),
            &self.precision,
            &self.recall,
            &self.f1,
        )
    }

    /// Render as a table, optionally naming the classes.
    ///
    /// Without names the classes are labelled `0..n_classes`.
    pub fn tabulate(&self, class_names: Option<&[&str]>) -> Result<TabularReport> {
        let mut columns: Vec<String> = match class_names {
            Some(names) => {
                if names.len() != self.n_classes {
                    return Err(ScoreError::Length {
                        expected: self.n_classes,
                        actual: names.len(),
                    });
                }
                names.iter().map(|n| (*n).to_string()).collect()
            }
            None => (0..self.n_classes).map(|c| c.to_string()).collect(),
        };
        columns.extend(AGGREGATE_COLUMNS.iter().map(|s| (*s).to_string()));

        let numbers = |values: Vec<f64>| values.into_iter().map(Cell::Number).collect::<Vec<_>>();
        let mut accuracy_row = vec![Cell::Text(String::new()); self.n_classes + 1];
        accuracy_row.push(Cell::Text(format_accuracy(self.accuracy)));

        let rows = vec![
            numbers(self.counts.correct.slots()),
            numbers(self.counts.predicted.slots()),
            numbers(self.counts.truth.slots()),
            numbers(self.precision.clone()),
            numbers(self.recall.clone()),
            numbers(self.f1.clone()),
            accuracy_row,
        ];

        Ok(TabularReport::new(columns, rows, self.decimal_digits))
    }
}

/// Shortest round-trip form, always with a fractional part (`1.0`, `0.75`).
///
/// Magnitudes below `1e-4` or from `1e16` up switch to exponent notation
/// with a signed, two-digit exponent (`1e-05`, `2.5e-07`).
fn format_accuracy(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-4..1e16).contains(&magnitude) {
        let scientific = format!("{value:e}");
        if let Some((mantissa, exponent)) = scientific.split_once('e') {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            return format!("{mantissa}e{sign}{digits:0>2}");
        }
    }
    if value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
