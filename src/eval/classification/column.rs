//! Score table column and metric identifiers

use std::fmt;

/// A column of the score table: one per class plus the two aggregates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Column {
    /// Class with the given index
    Class(usize),
    /// Metric over the mean per-class counts
    Micro,
    /// Mean of per-class precision/recall, F1 re-derived from those means
    Macro,
}

impl Column {
    /// All columns for `n_classes` classes: `[C0..Cn-1, Mi, Ma]`.
    pub fn all(n_classes: usize) -> Vec<Column> {
        (0..n_classes)
            .map(Column::Class)
            .chain([Column::Micro, Column::Macro])
            .collect()
    }

    /// Position of this column in a metric series of `n_classes` classes.
    pub fn position(self, n_classes: usize) -> usize {
        match self {
            Column::Class(c) => c,
            Column::Micro => n_classes,
            Column::Macro => n_classes + 1,
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Column::Class(c) => write!(f, "C{c}"),
            Column::Micro => write!(f, "Mi"),
            Column::Macro => write!(f, "Ma"),
        }
    }
}

/// Metric reported per column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Metric {
    Precision,
    Recall,
    F1,
}

impl Metric {
    /// All metrics in report order.
    pub const ALL: [Metric; 3] = [Metric::Precision, Metric::Recall, Metric::F1];

    /// Key suffix used in a score report.
    pub fn suffix(self) -> &'static str {
        match self {
            Metric::Precision => "P",
            Metric::Recall => "R",
            Metric::F1 => "F",
        }
    }

    /// Report key for `column`, e.g. `C0-P` or `Ma-F`.
    pub fn key(self, column: Column) -> String {
        format!("{column}-{}", self.suffix())
    }
}
