//! Masked division, F1 and rounding helpers
//!
//! Every ratio in a score table goes through [`masked_div`]: a zero or
//! non-finite denominator yields 0.0 instead of NaN or infinity.

/// Divide `num` by `den`, mapping 0/0 and x/0 to 0.0.
pub fn masked_div(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        return 0.0;
    }
    let q = num / den;
    if q.is_finite() {
        q
    } else {
        0.0
    }
}

/// Harmonic mean of precision and recall, 0.0 when both are zero.
pub fn f1_score(precision: f64, recall: f64) -> f64 {
    masked_div(2.0 * precision * recall, precision + recall)
}

/// Round to `digits` decimal places, ties to even.
///
/// When `10^digits` or the scaled value no longer fits an `f64`, `value` is
/// returned unchanged.
pub fn round_to(value: f64, digits: u32) -> f64 {
    let Ok(exponent) = i32::try_from(digits) else {
        return value;
    };
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round_ties_even() / scale
}

/// Arithmetic mean, 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    masked_div(values.iter().sum(), values.len() as f64)
}
