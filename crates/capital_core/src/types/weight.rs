//! Regulatory risk-weight bounds.
//!
//! Risk weights are percentages. Every weight the engine reports lies in
//! `[MIN_RISK_WEIGHT, MAX_RISK_WEIGHT]`.

/// Lowest admissible risk weight, in percent.
pub const MIN_RISK_WEIGHT: f64 = 0.0;

/// Highest admissible risk weight, in percent.
pub const MAX_RISK_WEIGHT: f64 = 1250.0;

/// Clamps a weight into `[0, 1250]`.
///
/// Non-finite input is not a weight; NaN maps to the conservative 100% default
/// so that the result is always a definite number inside the bounds.
///
/// # Examples
///
/// ```
/// use capital_core::types::clamp_risk_weight;
///
/// assert_eq!(clamp_risk_weight(-5.0), 0.0);
/// assert_eq!(clamp_risk_weight(75.0), 75.0);
/// assert_eq!(clamp_risk_weight(2000.0), 1250.0);
/// assert_eq!(clamp_risk_weight(f64::INFINITY), 1250.0);
/// ```
#[inline]
pub fn clamp_risk_weight(weight: f64) -> f64 {
    if weight.is_nan() {
        return crate::tables::CONSERVATIVE_WEIGHT;
    }
    weight.clamp(MIN_RISK_WEIGHT, MAX_RISK_WEIGHT)
}
