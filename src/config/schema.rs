//! YAML schema for scoring configuration

use serde::{Deserialize, Deserializer, Serialize};

use crate::eval::DEFAULT_DECIMAL_DIGITS;

/// Deserialize a bool from either a YAML boolean (`true`) or a quoted string (`"true"`).
fn deserialize_bool_lenient<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum BoolOrString {
        Bool(bool),
        Str(String),
    }

    match BoolOrString::deserialize(deserializer)? {
        BoolOrString::Bool(b) => Ok(b),
        BoolOrString::Str(s) => match s.to_lowercase().as_str() {
            "true" => Ok(true),
            "false" => Ok(false),
            other => Err(serde::de::Error::custom(format!(
                "expected 'true' or 'false', got '{other}'"
            ))),
        },
    }
}

fn default_decimal_digits() -> u32 {
    DEFAULT_DECIMAL_DIGITS
}

/// How label arrays are scored and rendered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSpec {
    /// Inputs are (n_samples, n_classes) one-hot matrices
    #[serde(default, deserialize_with = "deserialize_bool_lenient")]
    pub one_hot: bool,

    /// Digits every score is rounded to
    #[serde(default = "default_decimal_digits")]
    pub decimal_digits: u32,

    /// Display names, one per class
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub class_names: Option<Vec<String>>,
}

impl Default for ScoreSpec {
    fn default() -> Self {
        Self {
            one_hot: false,
            decimal_digits: DEFAULT_DECIMAL_DIGITS,
            class_names: None,
        }
    }
}

impl ScoreSpec {
    /// Class names as string slices, for tabulation.
    pub fn class_name_refs(&self) -> Option<Vec<&str>> {
        self.class_names
            .as_ref()
            .map(|names| names.iter().map(String::as_str).collect())
    }
}
