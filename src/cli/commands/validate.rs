//! Validate command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{load_spec, ScoreSpec, ValidateArgs};
use crate::error::Result;

/// Format a score config as a string
pub fn format_spec_info(spec: &ScoreSpec) -> String {
    let mut lines = vec![
        format!("  One-hot input: {}", spec.one_hot),
        format!("  Decimal digits: {}", spec.decimal_digits),
    ];
    match &spec.class_names {
        Some(names) => lines.push(format!("  Class names: {}", names.join(", "))),
        None => lines.push("  Class names: (indices)".to_string()),
    }
    lines.join("\n")
}

pub fn run_validate(args: ValidateArgs, level: LogLevel) -> Result<()> {
    log(
        level,
        LogLevel::Normal,
        &format!("Validating config: {}", args.config.display()),
    );

    let spec = load_spec(&args.config)?;

    log(level, LogLevel::Normal, "✓ Configuration is valid");
    log(level, LogLevel::Verbose, &format_spec_info(&spec));

    Ok(())
}
