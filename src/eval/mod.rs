//! Model evaluation
//!
//! - `classification`: precision / recall / F1 / accuracy tables from label arrays
//!
//! ## Example
//!
//! ```
//! use prfacc::eval::{Analysis, Column};
//!
//! let analysis = Analysis::from_labels(vec![0, 1, 1, 2], vec![0, 1, 0, 2], 4).unwrap();
//! assert_eq!(analysis.accuracy(), 0.75);
//! assert_eq!(analysis.recall_at(Column::Class(0)), 1.0);
//! println!("{}", analysis.tabulate(None).unwrap());
//! ```

pub mod classification;

pub use classification::{
    Analysis, Cell, ClassificationScorer, Column, Metric, ScoreReport, TabularReport,
    DEFAULT_DECIMAL_DIGITS,
};
