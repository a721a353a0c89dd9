//! prfacc: precision / recall / F1 / accuracy tables for classifiers
//!
//! Scores predicted class labels against true labels, as flat label arrays
//! or one-hot matrices, and derives:
//! - per-class precision, recall and F1
//! - a micro column from mean per-class counts
//! - a macro column from mean per-class precision/recall
//! - overall accuracy
//!
//! Results come back as a serializable [`ScoreReport`] and can be rendered
//! as a [`TabularReport`] for terminal display.
//!
//! Uses structured logging via [`tracing`]; install a subscriber to see the
//! derived counts (`RUST_LOG=prfacc=debug`).
//!
//! # Example
//!
//! ```
//! use prfacc::ClassificationScorer;
//!
//! let mut scorer = ClassificationScorer::new();
//! let report = scorer.analyze_labels(&[0, 1, 1, 2], &[0, 1, 0, 2], 4).unwrap();
//! assert_eq!(report.accuracy(), 0.75);
//! assert_eq!(report.get("C0-F"), Some(0.6667));
//!
//! let table = scorer.tabulate(Some(&["cat", "dog", "eel"])).unwrap();
//! println!("{table}");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod io;

pub use error::{Result, ScoreError};
pub use eval::{
    Analysis, Cell, ClassificationScorer, Column, Metric, ScoreReport, TabularReport,
    DEFAULT_DECIMAL_DIGITS,
};
