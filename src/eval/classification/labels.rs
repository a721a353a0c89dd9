//! Input normalisation: label arrays and one-hot matrices to class indices

use ndarray::{ArrayView2, ArrayViewD, Ix2};

use crate::error::{Result, ScoreError};

/// Reduce `y_true`/`y_pred` to two equal-length vectors of class indices.
///
/// With `one_hot` both inputs must be 2-D matrices of identical shape and
/// each row is replaced by the index of its maximum (the first one on
/// ties). Without it both must be 1-D arrays of identical length.
pub fn normalize(
    y_true: ArrayViewD<'_, usize>,
    y_pred: ArrayViewD<'_, usize>,
    one_hot: bool,
) -> Result<(Vec<usize>, Vec<usize>)> {
    let rank = if one_hot { 2 } else { 1 };
    if y_true.ndim() != rank || y_pred.ndim() != rank {
        return Err(ScoreError::dimension(format!(
            "expected {rank}-D inputs, got {}-D true and {}-D predicted",
            y_true.ndim(),
            y_pred.ndim()
        )));
    }
    if y_true.shape() != y_pred.shape() {
        return Err(ScoreError::dimension(format!(
            "shape mismatch: true {:?} vs predicted {:?}",
            y_true.shape(),
            y_pred.shape()
        )));
    }

    if one_hot {
        let y_true = as_matrix(y_true)?;
        let y_pred = as_matrix(y_pred)?;
        if y_true.ncols() == 0 {
            return Err(ScoreError::dimension("one-hot matrices have zero columns"));
        }
        Ok((argmax_rows(y_true), argmax_rows(y_pred)))
    } else {
        Ok((y_true.iter().copied().collect(), y_pred.iter().copied().collect()))
    }
}

fn as_matrix(view: ArrayViewD<'_, usize>) -> Result<ArrayView2<'_, usize>> {
    view.into_dimensionality::<Ix2>()
        .map_err(|e| ScoreError::dimension(e.to_string()))
}

/// Index of the largest entry of each row; the lowest index wins ties.
pub fn argmax_rows(matrix: ArrayView2<'_, usize>) -> Vec<usize> {
    matrix
        .outer_iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .fold((0, None), |(best, best_val), (idx, &val)| match best_val {
                    Some(b) if val <= b => (best, best_val),
                    _ => (idx, Some(val)),
                })
                .0
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::{array, Array1};

    #[test]
    fn test_normalize_label_arrays() {
        let t = Array1::from(vec![0, 1, 2]);
        let p = Array1::from(vec![0, 2, 2]);
        let (t, p) = normalize(t.view().into_dyn(), p.view().into_dyn(), false).unwrap();
        assert_eq!(t, vec![0, 1, 2]);
        assert_eq!(p, vec![0, 2, 2]);
    }

    #[test]
    fn test_normalize_one_hot() {
        let t = array![[1, 0, 0], [0, 0, 1]];
        let p = array![[0, 1, 0], [0, 0, 1]];
        let (t, p) = normalize(t.view().into_dyn(), p.view().into_dyn(), true).unwrap();
        assert_eq!(t, vec![0, 2]);
        assert_eq!(p, vec![1, 2]);
    }

    #[test]
    fn test_rank_mismatch_is_dimension_error() {
        let t = Array1::from(vec![0, 1]);
        let p = array![[1, 0], [0, 1]];
        let err = normalize(t.view().into_dyn(), p.view().into_dyn(), false).unwrap_err();
        assert!(matches!(err, ScoreError::Dimension { .. }));
    }

    #[test]
    fn test_one_hot_flag_with_1d_input() {
        let t = Array1::from(vec![0, 1]);
        let err = normalize(t.view().into_dyn(), t.view().into_dyn(), true).unwrap_err();
        assert!(matches!(err, ScoreError::Dimension { .. }));
    }

    #[test]
    fn test_length_mismatch_is_dimension_error() {
        let t = Array1::from(vec![0, 1, 1]);
        let p = Array1::from(vec![0, 1]);
        let err = normalize(t.view().into_dyn(), p.view().into_dyn(), false).unwrap_err();
        assert!(matches!(err, ScoreError::Dimension { .. }));
    }

    #[test]
    fn test_one_hot_shape_mismatch() {
        let t = array![[1, 0, 0], [0, 1, 0]];
        let p = array![[1, 0], [0, 1]];
        let err = normalize(t.view().into_dyn(), p.view().into_dyn(), true).unwrap_err();
        assert!(matches!(err, ScoreError::Dimension { .. }));
    }

    #[test]
    fn test_zero_column_one_hot() {
        let t = ndarray::Array2::<usize>::zeros((2, 0));
        let err = normalize(t.view().into_dyn(), t.view().into_dyn(), true).unwrap_err();
        assert!(matches!(err, ScoreError::Dimension { .. }));
    }

    #[test]
    fn test_argmax_first_max_wins() {
        let m = array![[0, 1, 1], [0, 0, 0], [2, 3, 1]];
        assert_eq!(argmax_rows(m.view()), vec![1, 0, 1]);
    }
}
