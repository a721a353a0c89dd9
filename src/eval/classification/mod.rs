//! Classification scoring for model evaluation
//!
//! Derives a precision / recall / F1 / accuracy table from true and
//! predicted label arrays:
//! - Per-class counts of labels, predictions and true positives
//! - Per-class precision, recall, F1 with 0/0 masked to 0
//! - Micro column from mean per-class counts
//! - Macro column from mean per-class precision/recall, F1 re-derived
//! - Flat score reports and display tables

mod analysis;
mod column;
mod counts;
mod labels;
mod ratio;
mod report;
mod scorer;
mod table;


// Re-export all public types and functions
pub use analysis::{Analysis, DEFAULT_DECIMAL_DIGITS};
pub use column::{Column, Metric};
pub use counts::{CountSeries, PerClassCounts};
pub use labels::{argmax_rows, normalize};
pub use ratio::{f1_score, masked_div, round_to};
pub use report::ScoreReport;
pub use scorer::ClassificationScorer;
pub use table::{Cell, TabularReport, AGGREGATE_COLUMNS, ROW_INDEX};
