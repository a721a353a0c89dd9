//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! prfacc score --true y_true.json --pred y_pred.json
//! prfacc score --true y_true.json --pred y_pred.json --one-hot --digits 2
//! prfacc score --true y_true.json --pred y_pred.json --class-names cat,dog,eel --format json
//! prfacc validate score.yaml
//! ```

mod core;
mod types;


pub use core::{apply_overrides, parse_args, Cli, Command, ScoreArgs, ValidateArgs};
pub use types::OutputFormat;
