//! Configuration validation logic

use std::collections::HashSet;

use super::error::ValidationError;
use crate::config::schema::ScoreSpec;

/// Largest rounding precision an f64 score can carry meaningfully.
pub const MAX_DECIMAL_DIGITS: u32 = 15;

/// Validate a score config
///
/// Checks:
/// - Rounding precision fits an f64
/// - Class names, when given, are non-empty and unique
pub fn validate_spec(spec: &ScoreSpec) -> Result<(), ValidationError> {
    if spec.decimal_digits > MAX_DECIMAL_DIGITS {
        return Err(ValidationError::InvalidDecimalDigits(spec.decimal_digits));
    }

    if let Some(names) = &spec.class_names {
        if names.is_empty() {
            return Err(ValidationError::EmptyClassNames);
        }
        let mut seen = HashSet::new();
        for name in names {
            if !seen.insert(name.as_str()) {
                return Err(ValidationError::DuplicateClassName(name.clone()));
            }
        }
    }

    Ok(())
}
