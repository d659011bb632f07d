//! Adjustment pipeline applied to the base weight.
//!
//! Stages run in a fixed order and every stage runs; a stage with nothing to
//! do is a no-op rather than being skipped:
//!
//! 1. currency-mismatch scaling (retail and residential labels only)
//! 2. CRM substitution, guarantor before insurer
//! 3. custody floor
//! 4. final clamp to `[0, 1250]`

use capital_core::tables::{
    CURRENCY_MISMATCH_CAP, CURRENCY_MISMATCH_MULTIPLIER, CUSTODY_FLOOR_WEIGHT,
};
use capital_core::types::{
    clamp_risk_weight, ClassificationLabel, Exposure, MAX_RISK_WEIGHT, MIN_RISK_WEIGHT,
};
use tracing::{debug, warn};

/// Weight after the pipeline and the trail lines it produced.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AdjustmentResult {
    /// Adjusted weight, in percent
    pub weight: f64,
    /// Trail lines added by the pipeline, in stage order
    pub trail: Vec<String>,
}

/// Runs all stages over a base weight.
///
/// # Example
///
/// ```
/// use capital_core::types::{
///     ClassificationLabel, CounterpartyCategory, Currency, Exposure, ProductCategory,
/// };
/// use capital_engine::adjustments::apply_adjustments;
///
/// let exposure = Exposure::new(ProductCategory::Card, CounterpartyCategory::Individual)
///     .with_currencies(Currency::USD, Currency::BRL);
///
/// let adjusted = apply_adjustments(45.0, ClassificationLabel::RetailTransactor, &exposure);
/// assert_eq!(adjusted.weight, 67.5);
/// ```
pub fn apply_adjustments(
    base_weight: f64,
    label: ClassificationLabel,
    exposure: &Exposure,
) -> AdjustmentResult {
    let mut trail = Vec::new();
    let weight = currency_mismatch(base_weight, label, exposure, &mut trail);
    let weight = crm_substitution(weight, exposure, &mut trail);
    let weight = custody_floor(weight, exposure, &mut trail);
    let weight = final_clamp(weight, &mut trail);
    AdjustmentResult { weight, trail }
}

/// Stage 1: `min(1.5 × w, 150)` for eligible labels under an unhedged mismatch.
pub fn currency_mismatch(
    weight: f64,
    label: ClassificationLabel,
    exposure: &Exposure,
    trail: &mut Vec<String>,
) -> f64 {
    if !exposure.has_currency_mismatch() {
        return weight;
    }
    if !label.is_currency_mismatch_eligible() {
        trail.push(format!(
            "Currency mismatch ({} exposure, {} income) noted; label {label} is not subject to the adjustment",
            exposure.exposure_currency, exposure.income_currency
        ));
        return weight;
    }
    let adjusted = (weight * CURRENCY_MISMATCH_MULTIPLIER).min(CURRENCY_MISMATCH_CAP);
    debug!(from = weight, to = adjusted, "currency mismatch applied");
    trail.push(format!(
        "Currency mismatch: min({weight}% × {CURRENCY_MISMATCH_MULTIPLIER}, {CURRENCY_MISMATCH_CAP}%) = {adjusted}%"
    ));
    adjusted
}

/// Stage 2: guarantor substitution, else insurer substitution.
///
/// A netting agreement is noted only when no substitution fired; it bears on
/// EAD, never on the weight.
pub fn crm_substitution(weight: f64, exposure: &Exposure, trail: &mut Vec<String>) -> f64 {
    let crm = &exposure.crm;

    if crm.guarantor_substitution {
        match crm.guarantor_weight {
            Some(w) if w.is_finite() => {
                let substituted = clamp_risk_weight(w);
                debug!(from = weight, to = substituted, "guarantor substitution");
                trail.push(format!(
                    "CRM: eligible guarantor substitution ⇒ guarantor weight {substituted}%"
                ));
                return substituted;
            }
            Some(w) => {
                warn!(guarantor_weight = w, "ignoring non-finite guarantor weight");
                trail.push("CRM: guarantor weight is not a finite number; ignored".to_string());
            }
            None => trail.push(
                "CRM: guarantor substitution requested without a guarantor weight; no adjustment"
                    .to_string(),
            ),
        }
    }

    if crm.credit_insurance {
        match crm.insurer_weight {
            Some(w) if w.is_finite() => {
                let substituted = clamp_risk_weight(w);
                debug!(from = weight, to = substituted, "insurer substitution");
                trail.push(format!(
                    "CRM: recognised credit insurance ⇒ insurer weight {substituted}%"
                ));
                return substituted;
            }
            Some(w) => {
                warn!(insurer_weight = w, "ignoring non-finite insurer weight");
                trail.push("CRM: insurer weight is not a finite number; ignored".to_string());
            }
            None => trail.push(
                "CRM: credit insurance without an insurer weight; no adjustment".to_string(),
            ),
        }
    }

    if crm.netting_agreement {
        trail.push(
            "CRM: eligible netting agreement noted; it reduces exposure, not the weight"
                .to_string(),
        );
    }
    weight
}

/// Stage 3: cash held outside direct possession floors at 20%.
pub fn custody_floor(weight: f64, exposure: &Exposure, trail: &mut Vec<String>) -> f64 {
    if !exposure.floors.cash_outside_custody {
        return weight;
    }
    let floored = weight.max(CUSTODY_FLOOR_WEIGHT);
    if floored != weight {
        debug!(from = weight, to = floored, "custody floor applied");
        trail.push(format!(
            "Floor: cash outside direct possession ⇒ minimum {CUSTODY_FLOOR_WEIGHT}%"
        ));
    }
    floored
}

/// Stage 4: clamp to the admissible range, logged only when it bites.
pub fn final_clamp(weight: f64, trail: &mut Vec<String>) -> f64 {
    let clamped = clamp_risk_weight(weight);
    if clamped != weight {
        debug!(from = weight, to = clamped, "final clamp applied");
        trail.push(format!(
            "Weight limited to [{MIN_RISK_WEIGHT}%, {MAX_RISK_WEIGHT}%] ⇒ {clamped}%"
        ));
    }
    clamped
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use capital_core::types::{CounterpartyCategory, Currency, ProductCategory};
    use proptest::prelude::*;

    fn retail() -> Exposure {
        Exposure::new(ProductCategory::Card, CounterpartyCategory::Individual)
    }

    #[test]
    fn test_mismatch_scales_eligible_label() {
        let e = retail().with_currencies(Currency::USD, Currency::BRL);
        let r = apply_adjustments(45.0, ClassificationLabel::RetailTransactor, &e);
        assert_relative_eq!(r.weight, 67.5);
        assert_eq!(r.trail.len(), 1);
    }

    #[test]
    fn test_mismatch_is_capped() {
        let e = retail().with_currencies(Currency::USD, Currency::BRL);
        let r = apply_adjustments(105.0, ClassificationLabel::ResidentialMortgage, &e);
        assert_eq!(r.weight, 150.0);
    }

    #[test]
    fn test_mismatch_on_ineligible_label_only_notes() {
        let e = retail().with_currencies(Currency::USD, Currency::BRL);
        let r = apply_adjustments(100.0, ClassificationLabel::Corporate, &e);
        assert_eq!(r.weight, 100.0);
        assert_eq!(r.trail.len(), 1);
        assert!(r.trail[0].contains("not subject"));
    }

    #[test]
    fn test_hedge_removes_mismatch() {
        let mut e = retail().with_currencies(Currency::USD, Currency::BRL);
        e.hedge_90 = true;
        let r = apply_adjustments(75.0, ClassificationLabel::RetailEligible, &e);
        assert_eq!(r.weight, 75.0);
        assert!(r.trail.is_empty());
    }

    #[test]
    fn test_guarantor_takes_precedence_over_insurer() {
        let mut e = retail();
        e.crm.guarantor_substitution = true;
        e.crm.guarantor_weight = Some(20.0);
        e.crm.credit_insurance = true;
        e.crm.insurer_weight = Some(50.0);
        e.crm.netting_agreement = true;
        let r = apply_adjustments(100.0, ClassificationLabel::Corporate, &e);
        assert_eq!(r.weight, 20.0);
        assert_eq!(r.trail.len(), 1);
        assert!(r.trail[0].contains("guarantor"));
    }

    #[test]
    fn test_insurer_used_when_guarantor_weight_missing() {
        let mut e = retail();
        e.crm.guarantor_substitution = true;
        e.crm.credit_insurance = true;
        e.crm.insurer_weight = Some(50.0);
        let r = apply_adjustments(100.0, ClassificationLabel::Corporate, &e);
        assert_eq!(r.weight, 50.0);
        assert_eq!(r.trail.len(), 2);
    }

    #[test]
    fn test_substituted_weight_is_clamped() {
        let mut e = retail();
        e.crm.guarantor_substitution = true;
        e.crm.guarantor_weight = Some(-30.0);
        let r = apply_adjustments(100.0, ClassificationLabel::Corporate, &e);
        assert_eq!(r.weight, 0.0);
    }

    #[test]
    fn test_non_finite_guarantor_is_ignored() {
        let mut e = retail();
        e.crm.guarantor_substitution = true;
        e.crm.guarantor_weight = Some(f64::NAN);
        let r = apply_adjustments(75.0, ClassificationLabel::RetailEligible, &e);
        assert_eq!(r.weight, 75.0);
        assert!(r.trail[0].contains("not a finite number"));
    }

    #[test]
    fn test_netting_only_notes() {
        let mut e = retail();
        e.crm.netting_agreement = true;
        let r = apply_adjustments(75.0, ClassificationLabel::RetailEligible, &e);
        assert_eq!(r.weight, 75.0);
        assert_eq!(r.trail.len(), 1);
    }

    #[test]
    fn test_custody_floor_logged_only_when_binding() {
        let mut e = retail();
        e.floors.cash_outside_custody = true;
        let r = apply_adjustments(0.0, ClassificationLabel::Cash, &e);
        assert_eq!(r.weight, 20.0);
        assert_eq!(r.trail.len(), 1);
        let r = apply_adjustments(75.0, ClassificationLabel::RetailEligible, &e);
        assert_eq!(r.weight, 75.0);
        assert!(r.trail.is_empty());
    }

    #[test]
    fn test_final_clamp_logged_only_when_binding() {
        let mut trail = Vec::new();
        assert_eq!(final_clamp(1250.0, &mut trail), 1250.0);
        assert!(trail.is_empty());
        assert_eq!(final_clamp(1300.0, &mut trail), 1250.0);
        assert_eq!(trail.len(), 1);
    }

    proptest! {
        #[test]
        fn test_mismatch_never_lowers_weight(w in 0.0f64..1250.0) {
            let e = retail().with_currencies(Currency::EUR, Currency::BRL);
            for label in [
                ClassificationLabel::RetailEligible,
                ClassificationLabel::ResidentialMortgageDependent,
                ClassificationLabel::Corporate,
            ] {
                let mut trail = Vec::new();
                prop_assert!(currency_mismatch(w, label, &e, &mut trail) >= w.min(CURRENCY_MISMATCH_CAP));
            }
        }

        #[test]
        fn test_mismatch_is_noop_for_ineligible_labels(w in 0.0f64..1250.0) {
            let e = retail().with_currencies(Currency::EUR, Currency::BRL);
            let mut trail = Vec::new();
            prop_assert_eq!(currency_mismatch(w, ClassificationLabel::Subordinated, &e, &mut trail), w);
        }

        #[test]
        fn test_pipeline_output_in_bounds(w in -5000.0f64..5000.0, g in -5000.0f64..5000.0) {
            let mut e = retail().with_currencies(Currency::USD, Currency::BRL);
            e.crm.guarantor_substitution = true;
            e.crm.guarantor_weight = Some(g);
            let r = apply_adjustments(w, ClassificationLabel::RetailEligible, &e);
            prop_assert!((MIN_RISK_WEIGHT..=MAX_RISK_WEIGHT).contains(&r.weight));
        }
    }
}
