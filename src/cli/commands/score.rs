//! Score command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{apply_overrides, load_spec, validate_spec, OutputFormat, ScoreArgs, ScoreSpec};
use crate::error::{Result, ScoreError};
use crate::eval::ClassificationScorer;
use crate::io::load_labels;

pub fn run_score(args: ScoreArgs, level: LogLevel) -> Result<()> {
    let output = render_score(&args)?;

    log(
        level,
        LogLevel::Verbose,
        &format!(
            "Scored {} against {}",
            args.y_pred.display(),
            args.y_true.display()
        ),
    );
    println!("{output}");

    Ok(())
}

/// Load, score and format according to `args`.
pub fn render_score(args: &ScoreArgs) -> Result<String> {
    let mut spec = match &args.config {
        Some(path) => load_spec(path)?,
        None => ScoreSpec::default(),
    };
    apply_overrides(&mut spec, args);
    validate_spec(&spec)?;

    let y_true = load_labels(&args.y_true)?;
    let y_pred = load_labels(&args.y_pred)?;

    let mut scorer = ClassificationScorer::new();
    let report = scorer.analyze(y_true.view(), y_pred.view(), spec.one_hot, spec.decimal_digits)?;
    tracing::info!(
        n_classes = report.n_classes(),
        accuracy = report.accuracy(),
        "scored {}",
        args.y_pred.display()
    );

    match args.format {
        OutputFormat::Text => {
            let names = spec.class_name_refs();
            let table = scorer.tabulate(names.as_deref())?;
            Ok(table.to_string().trim_end().to_string())
        }
        OutputFormat::Json => serde_json::to_string_pretty(&report).map_err(|e| {
            ScoreError::Serialization {
                message: format!("JSON serialization error: {e}"),
            }
        }),
        OutputFormat::Yaml => serde_yaml::to_string(&report).map_err(|e| {
            ScoreError::Serialization {
                message: format!("YAML serialization error: {e}"),
            }
        }),
    }
}
