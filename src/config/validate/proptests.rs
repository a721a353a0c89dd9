//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::{validate_spec, MAX_DECIMAL_DIGITS};
use crate::config::schema::ScoreSpec;
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_digits_in_range_pass(digits in 0u32..=MAX_DECIMAL_DIGITS, one_hot in any::<bool>()) {
        let spec = ScoreSpec { one_hot, decimal_digits: digits, class_names: None };
        prop_assert!(validate_spec(&spec).is_ok());
    }

    #[test]
    fn prop_digits_out_of_range_fail(digits in (MAX_DECIMAL_DIGITS + 1)..1000u32) {
        let spec = ScoreSpec { decimal_digits: digits, ..Default::default() };
        prop_assert!(matches!(
            validate_spec(&spec),
            Err(ValidationError::InvalidDecimalDigits(_))
        ));
    }

    #[test]
    fn prop_distinct_names_pass(n in 1usize..20) {
        let names = (0..n).map(|i| format!("class_{i}")).collect();
        let spec = ScoreSpec { class_names: Some(names), ..Default::default() };
        prop_assert!(validate_spec(&spec).is_ok());
    }
}
