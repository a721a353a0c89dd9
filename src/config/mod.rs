//! Scoring configuration
//!
//! A `ScoreSpec` can be loaded from YAML and overridden from the command
//! line:
//!
//! ```yaml
//! one_hot: false
//! decimal_digits: 4
//! class_names: [negative, neutral, positive]
//! ```

pub mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{apply_overrides, parse_args, Cli, Command, OutputFormat, ScoreArgs, ValidateArgs};
pub use loader::{load_spec, parse_spec};
pub use schema::ScoreSpec;
pub use validate::{validate_spec, ValidationError, MAX_DECIMAL_DIGITS};
