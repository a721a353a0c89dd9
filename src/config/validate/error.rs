//! Validation error types

use crate::error::ScoreError;

/// Validation error type
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid decimal digits: {0} (must be <= {max})", max = super::MAX_DECIMAL_DIGITS)]
    InvalidDecimalDigits(u32),

    #[error("Class names cannot be empty")]
    EmptyClassNames,

    #[error("Duplicate class name: {0}")]
    DuplicateClassName(String),
}

impl ValidationError {
    /// Name of the offending configuration field.
    pub fn field(&self) -> &'static str {
        match self {
            Self::InvalidDecimalDigits(_) => "decimal_digits",
            Self::EmptyClassNames | Self::DuplicateClassName(_) => "class_names",
        }
    }
}

impl From<ValidationError> for ScoreError {
    fn from(err: ValidationError) -> Self {
        ScoreError::Config {
            field: err.field().to_string(),
            message: err.to_string(),
        }
    }
}
