//! In-place normalization of unnormalized probability masses.
//!
//! Accumulated totals are rescaled so they sum to one while keeping their
//! relative proportions. A distribution whose total is zero (or not finite)
//! is left untouched instead of being turned into NaNs.

use serde::{Deserialize, Serialize};

/// What [`normalize_in_place`] did to its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizeOutcome {
    /// Every entry was divided by the total.
    Normalized,
    /// The total was zero; values were left unchanged.
    ZeroTotal,
    /// The total was NaN or infinite; values were left unchanged.
    NonFinite,
}

/// Divide every entry by the sum of all entries.
pub fn normalize_in_place(values: &mut [f64]) -> NormalizeOutcome {
    let total: f64 = values.iter().sum();
    if !total.is_finite() {
        return NormalizeOutcome::NonFinite;
    }
    if total == 0.0 {
        return NormalizeOutcome::ZeroTotal;
    }
    for v in values.iter_mut() {
        *v /= total;
    }
    NormalizeOutcome::Normalized
}

/// Whether `values` form a probability distribution within `tol`.
pub fn is_distribution(values: &[f64], tol: f64) -> bool {
    if values.iter().any(|v| !v.is_finite() || *v < -tol) {
        return false;
    }
    let total: f64 = values.iter().sum();
    (total - 1.0).abs() <= tol
}
