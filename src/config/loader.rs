//! Loading scoring configuration from YAML

use std::fs;
use std::path::Path;

use super::schema::ScoreSpec;
use super::validate::validate_spec;
use crate::error::{Result, ScoreError};

/// Load and validate a YAML score config
pub fn load_spec<P: AsRef<Path>>(spec_path: P) -> Result<ScoreSpec> {
    let path = spec_path.as_ref();
    let yaml_content = fs::read_to_string(path)
        .map_err(|e| ScoreError::io(format!("Failed to read config file {}", path.display()), e))?;

    parse_spec(&yaml_content)
}

/// Parse and validate a YAML score config
pub fn parse_spec(yaml_content: &str) -> Result<ScoreSpec> {
    let spec: ScoreSpec = serde_yaml::from_str(yaml_content).map_err(|e| {
        ScoreError::Serialization {
            message: format!("Failed to parse YAML config: {e}"),
        }
    })?;

    validate_spec(&spec).map_err(ScoreError::from)?;
    tracing::debug!(?spec, "loaded score spec");

    Ok(spec)
}
