//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::ScoreSpec;

/// prfacc: precision / recall / F1 / accuracy for label arrays
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "prfacc")]
#[command(version)]
#[command(about = "Score predicted against true class labels: per-class, micro and macro P/R/F1 plus accuracy")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Score predicted labels against true labels
    Score(ScoreArgs),

    /// Validate a score configuration file
    Validate(ValidateArgs),
}

/// Arguments for the score command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ScoreArgs {
    /// JSON file with true labels (1-D array or 2-D one-hot matrix)
    #[arg(long = "true", value_name = "FILE")]
    pub y_true: PathBuf,

    /// JSON file with predicted labels, same shape as --true
    #[arg(long = "pred", value_name = "FILE")]
    pub y_pred: PathBuf,

    /// YAML score configuration
    #[arg(short, long, value_name = "CONFIG")]
    pub config: Option<PathBuf>,

    /// Inputs are one-hot matrices
    #[arg(long)]
    pub one_hot: bool,

    /// Decimal digits for every score
    #[arg(short, long)]
    pub digits: Option<u32>,

    /// Comma-separated class names, one per class
    #[arg(long, value_delimiter = ',')]
    pub class_names: Option<Vec<String>>,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML score configuration
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a ScoreSpec
pub fn apply_overrides(spec: &mut ScoreSpec, args: &ScoreArgs) {
    if args.one_hot {
        spec.one_hot = true;
    }
    if let Some(digits) = args.digits {
        spec.decimal_digits = digits;
    }
    if let Some(names) = &args.class_names {
        spec.class_names = Some(names.clone());
    }
}
