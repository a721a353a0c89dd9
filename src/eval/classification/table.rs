//! Display-oriented score table

use std::fmt;

use serde::{Deserialize, Serialize};

/// Row labels of a score table, top to bottom.
pub const ROW_INDEX: [&str; 7] = [
    "correct",
    "predict",
    "label",
    "precision",
    "recall",
    "f1-score",
    "accuracy",
];

/// Names appended after the class names.
pub const AGGREGATE_COLUMNS: [&str; 2] = ["micro/avg", "macro/sum"];

/// One table cell.
///
/// Every row holds numbers except `accuracy`, whose only filled cell is a
/// preformatted string under `macro/sum`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

impl Cell {
    /// Numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            Cell::Text(_) => None,
        }
    }

    /// Text value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Number(_) => None,
            Cell::Text(s) => Some(s),
        }
    }

    fn render(&self, decimal_digits: usize) -> String {
        match self {
            Cell::Number(v) => format!("{v:.decimal_digits$}"),
            Cell::Text(s) => s.clone(),
        }
    }
}

/// Fractional digits past which every `f64` already prints at full precision.
const MAX_RENDERED_DIGITS: usize = 340;

/// Row-oriented score table with one column per class plus aggregates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TabularReport {
    index: Vec<String>,
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
    decimal_digits: u32,
}

impl TabularReport {
    pub(crate) fn new(columns: Vec<String>, rows: Vec<Vec<Cell>>, decimal_digits: u32) -> Self {
        debug_assert_eq!(rows.len(), ROW_INDEX.len());
        debug_assert!(rows.iter().all(|r| r.len() == columns.len()));
        Self {
            index: ROW_INDEX.iter().map(|s| (*s).to_string()).collect(),
            columns,
            rows,
            decimal_digits,
        }
    }

    /// Row labels.
    pub fn index(&self) -> &[String] {
        &self.index
    }

    /// Column labels: class names then `micro/avg`, `macro/sum`.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Cells, one inner vector per row.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Cell at the named row and column.
    pub fn cell(&self, row: &str, column: &str) -> Option<&Cell> {
        let r = self.index.iter().position(|i| i == row)?;
        let c = self.columns.iter().position(|n| n == column)?;
        self.rows.get(r)?.get(c)
    }
}

impl fmt::Display for TabularReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = (self.decimal_digits as usize).min(MAX_RENDERED_DIGITS);
        let rendered: Vec<Vec<String>> = self
            .rows
            .iter()
            .map(|row| row.iter().map(|c| c.render(digits)).collect())
            .collect();

        let index_width = self.index.iter().map(String::len).max().unwrap_or(0);
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(j, name)| {
                rendered
                    .iter()
                    .map(|row| row[j].len())
                    .chain(std::iter::once(name.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        write!(f, "| {:index_width$} |", "")?;
        for (name, &w) in self.columns.iter().zip(&widths) {
            write!(f, " {name:^w$} |")?;
        }
        writeln!(f)?;

        for (label, row) in self.index.iter().zip(&rendered) {
            write!(f, "| {label:<index_width$} |")?;
            for (cell, &w) in row.iter().zip(&widths) {
                write!(f, " {cell:^w$} |")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
