//! Product-dispatched groups: fund quotas and derivatives.

use super::{classify_by_counterparty, ClassificationResult};
use capital_core::tables::{fund_mandate_weight, CONSERVATIVE_WEIGHT};
use capital_core::types::{
    clamp_risk_weight, ClassificationLabel, Exposure, FundApproach, FundMandate, ProductCategory,
};
use tracing::warn;

pub(super) fn fund(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.product != ProductCategory::Fund {
        return None;
    }
    let info = &exposure.fund;
    let mut notes = Vec::new();

    if info.approach == FundApproach::LookThrough {
        match info.look_through_weight {
            Some(informed) if informed.is_finite() => {
                let weight = clamp_risk_weight(informed);
                let mut result = ClassificationResult::new(
                    weight,
                    ClassificationLabel::FundLookThrough,
                    format!("Fund, look-through ⇒ {weight}%"),
                );
                if weight != informed {
                    result = result.with_note(format!(
                        "Informed look-through weight {informed}% outside [0, 1250]; clamped to {weight}%"
                    ));
                }
                return Some(result);
            }
            Some(informed) => {
                warn!(informed, "ignoring non-finite look-through weight");
                notes.push("Look-through weight is not a finite number; ignored".to_string());
            }
            None => notes.push("Look-through approach without an informed weight".to_string()),
        }
    }

    if info.approach == FundApproach::Mandate {
        if let Some(mandate) = info.mandate {
            let weight = fund_mandate_weight(mandate);
            let (label, name) = match mandate {
                FundMandate::Equity => (ClassificationLabel::FundEquityMandate, "equity"),
                FundMandate::FixedIncome => {
                    (ClassificationLabel::FundFixedIncomeMandate, "fixed income")
                }
                FundMandate::Mixed => (ClassificationLabel::FundMixedMandate, "mixed"),
                FundMandate::Other => (ClassificationLabel::FundOtherMandate, "other"),
            };
            return Some(
                ClassificationResult {
                    weight,
                    label,
                    trail: notes,
                }
                .with_note(format!("Fund, {name} mandate ⇒ {weight}%")),
            );
        }
    }

    Some(
        ClassificationResult {
            weight: CONSERVATIVE_WEIGHT,
            label: ClassificationLabel::FundConservative,
            trail: notes,
        }
        .with_note(format!(
            "Fund without look-through or mandate ⇒ conservative {CONSERVATIVE_WEIGHT}%"
        )),
    )
}

/// Derivatives take the counterparty's own weight and label.
pub(super) fn derivative(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.product != ProductCategory::Derivative {
        return None;
    }
    let counterparty = classify_by_counterparty(exposure);
    Some(
        ClassificationResult {
            weight: counterparty.weight,
            label: counterparty.label,
            trail: vec!["Derivative (counterparty credit risk) ⇒ counterparty weight".to_string()],
        }
        .with_nested(&counterparty.trail),
    )
}
