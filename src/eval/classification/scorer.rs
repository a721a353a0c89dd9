//! Stateful scorer retaining the last analysis for tabulation

use ndarray::ArrayViewD;

use super::analysis::Analysis;
use super::report::ScoreReport;
use super::table::TabularReport;
use crate::error::{Result, ScoreError};

/// Scores label arrays and keeps the most recent analysis for rendering.
///
/// Each successful `analyze` replaces the retained analysis wholesale; a
/// failed call leaves it untouched. `analyze` takes `&mut self`, so a shared
/// scorer needs external locking; independent scorers share nothing.
#[derive(Clone, Debug, Default)]
pub struct ClassificationScorer {
    last: Option<Analysis>,
}

impl ClassificationScorer {
    /// Create a scorer with no analysis yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Score `y_true` against `y_pred`.
    ///
    /// # Arguments
    /// * `y_true` - True labels, shape `(n_samples,)` or `(n_samples, n_classes)`
    /// * `y_pred` - Predicted labels, same shape as `y_true`
    /// * `one_hot` - Whether the inputs are 2-D one-hot matrices
    /// * `decimal_digits` - Digits every score is rounded to
    ///
    /// # Example
    /// ```
    /// use ndarray::array;
    /// use prfacc::eval::classification::ClassificationScorer;
    ///
    /// let mut scorer = ClassificationScorer::new();
    /// let y_true = array![0, 1, 1, 2];
    /// let y_pred = array![0, 1, 0, 2];
    /// let report = scorer
    ///     .analyze(y_true.view().into_dyn(), y_pred.view().into_dyn(), false, 4)
    ///     .unwrap();
    ///
    /// assert_eq!(report.accuracy(), 0.75);
    /// assert_eq!(report.get("C0-P"), Some(0.5));
    /// ```
    pub fn analyze(
        &mut self,
        y_true: ArrayViewD<'_, usize>,
        y_pred: ArrayViewD<'_, usize>,
        one_hot: bool,
        decimal_digits: u32,
    ) -> Result<ScoreReport> {
        let analysis = Analysis::compute(y_true, y_pred, one_hot, decimal_digits)?;
        Ok(self.retain(analysis))
    }

    /// Score two class-index slices.
    pub fn analyze_labels(
        &mut self,
        y_true: &[usize],
        y_pred: &[usize],
        decimal_digits: u32,
    ) -> Result<ScoreReport> {
        let analysis = Analysis::from_labels(y_true.to_vec(), y_pred.to_vec(), decimal_digits)?;
        Ok(self.retain(analysis))
    }

    /// Table of the last analysis.
    ///
    /// Fails with [`ScoreError::State`] before any successful `analyze`, and
    /// with [`ScoreError::Length`] if `class_names` does not name every class.
    pub fn tabulate(&self, class_names: Option<&[&str]>) -> Result<TabularReport> {
        self.last
            .as_ref()
            .ok_or(ScoreError::State)?
            .tabulate(class_names)
    }

    /// The retained analysis, if any.
    pub fn last_analysis(&self) -> Option<&Analysis> {
        self.last.as_ref()
    }

    fn retain(&mut self, analysis: Analysis) -> ScoreReport {
        let report = analysis.report();
        self.last = Some(analysis);
        report
    }
}
