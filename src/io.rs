//! Loading label arrays from JSON files
//!
//! A label file holds either a flat array of class indices (`[0, 2, 1]`) or
//! a matrix of one-hot rows (`[[1, 0, 0], [0, 0, 1]]`).

use std::fs;
use std::path::Path;

use ndarray::{Array1, Array2, ArrayD};
use serde::Deserialize;

use crate::error::{Result, ScoreError};

#[derive(Deserialize)]
#[serde(untagged)]
enum LabelFile {
    Flat(Vec<usize>),
    Matrix(Vec<Vec<usize>>),
}

/// Load a JSON label file as a dynamic-rank array.
pub fn load_labels<P: AsRef<Path>>(path: P) -> Result<ArrayD<usize>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| ScoreError::io(format!("Failed to read label file {}", path.display()), e))?;
    parse_labels(&content)
}

/// Parse JSON label content as a dynamic-rank array.
pub fn parse_labels(content: &str) -> Result<ArrayD<usize>> {
    let parsed: LabelFile =
        serde_json::from_str(content).map_err(|e| ScoreError::Serialization {
            message: format!("Label file must be a JSON array of non-negative integers or of integer rows: {e}"),
        })?;

    match parsed {
        LabelFile::Flat(labels) => Ok(Array1::from(labels).into_dyn()),
        LabelFile::Matrix(rows) => {
            let n_rows = rows.len();
            let n_cols = rows.first().map_or(0, Vec::len);
            if let Some(bad) = rows.iter().position(|r| r.len() != n_cols) {
                return Err(ScoreError::dimension(format!(
                    "ragged matrix: row {bad} has {} columns, expected {n_cols}",
                    rows[bad].len()
                )));
            }
            let flat: Vec<usize> = rows.into_iter().flatten().collect();
            let matrix = Array2::from_shape_vec((n_rows, n_cols), flat)
                .map_err(|e| ScoreError::dimension(e.to_string()))?;
            Ok(matrix.into_dyn())
        }
    }
}
