//! Error types with actionable diagnostics.
//!
//! Scoring is a pure computation: every error is raised synchronously to
//! the caller and nothing is retried or partially returned.

use thiserror::Error;

/// Result type alias for prfacc operations.
pub type Result<T> = std::result::Result<T, ScoreError>;

/// Errors that can occur while scoring label arrays.
#[derive(Error, Debug)]
pub enum ScoreError {
    /// Input rank or shape does not match the requested encoding.
    #[error("Dimension error: {message}\n  → Pass 1-D label arrays, or 2-D one-hot matrices with --one-hot")]
    Dimension { message: String },

    /// Tabulation requested before any successful analysis.
    #[error("Must analyze before tabulate")]
    State,

    /// Class-name list does not match the inferred number of classes.
    #[error("Length error of class names: expected {expected}, got {actual}\n  → Supply exactly one name per class")]
    Length { expected: usize, actual: usize },

    /// No samples to score.
    #[error("Empty input: cannot infer the number of classes from zero samples")]
    EmptyInput,

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}")]
    Config { field: String, message: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ScoreError {
    /// Create a dimension error.
    pub fn dimension(message: impl Into<String>) -> Self {
        Self::Dimension { message: message.into() }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is caused by caller input rather than the environment.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            Self::Dimension { .. }
                | Self::State
                | Self::Length { .. }
                | Self::EmptyInput
                | Self::Config { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::Dimension { .. } => "E001",
            Self::State => "E002",
            Self::Length { .. } => "E003",
            Self::EmptyInput => "E004",
            Self::Config { .. } => "E010",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
