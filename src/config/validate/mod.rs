//! Configuration validation
//!
//! Validates score configs before any scoring runs.

mod error;
mod validator;

#[cfg(test)]
mod proptests;

pub use error::ValidationError;
pub use validator::{validate_spec, MAX_DECIMAL_DIGITS};
