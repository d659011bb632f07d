//! Real-estate secured exposures.
//!
//! Claims real-estate loans and any direct exposure carrying an eligible
//! real-estate guarantee. Branches that fall back on the obligor run an
//! explicit second pass through `obligor_pass` and nest its trail.

use super::{obligor_pass, ClassificationResult};
use capital_core::tables::{
    residential_ltv_weight, CONSTRUCTION_POST_CUTOFF_WEIGHT, CONSTRUCTION_PRE_CUTOFF_WEIGHT,
    NON_RESIDENTIAL_DEPENDENT_HIGH_LTV_WEIGHT, NON_RESIDENTIAL_DEPENDENT_LOW_LTV_WEIGHT,
    NON_RESIDENTIAL_INDEPENDENT_CAP, NON_RESIDENTIAL_LTV_BREAKPOINT,
};
use capital_core::types::{ClassificationLabel, Exposure, ProductCategory, PropertyKind};

pub(super) fn real_estate(exposure: &Exposure) -> Option<ClassificationResult> {
    let info = &exposure.real_estate;
    if exposure.product != ProductCategory::RealEstateLoan && !info.guarantee_eligible {
        return None;
    }

    if !info.completed {
        if info.contracted_through_2023 {
            return Some(ClassificationResult::new(
                CONSTRUCTION_PRE_CUTOFF_WEIGHT,
                ClassificationLabel::ConstructionPreCutoff,
                format!(
                    "Real estate under construction, contract up to 2023 ⇒ {CONSTRUCTION_PRE_CUTOFF_WEIGHT}%"
                ),
            ));
        }
        if info.contracted_from_2024 {
            return Some(ClassificationResult::new(
                CONSTRUCTION_POST_CUTOFF_WEIGHT,
                ClassificationLabel::ConstructionPostCutoff,
                format!(
                    "Real estate under construction, contract from 2024 ⇒ {CONSTRUCTION_POST_CUTOFF_WEIGHT}%"
                ),
            ));
        }
        return Some(defer_to_obligor(
            exposure,
            "Real estate under construction without contract date ⇒ obligor weight",
        ));
    }

    if !info.guarantee_eligible {
        return Some(defer_to_obligor(
            exposure,
            "Real-estate guarantee not eligible ⇒ obligor weight",
        ));
    }

    let ltv = info.ltv;
    let mut notes = Vec::new();
    if !ltv.is_finite() {
        notes.push("LTV is not a finite number; treated as above every breakpoint".to_string());
    }

    let result = match (info.kind, info.cash_flow_dependent) {
        (PropertyKind::Residential, dependent) => {
            let weight = residential_ltv_weight(ltv, dependent);
            let (label, qualifier) = if dependent {
                (
                    ClassificationLabel::ResidentialMortgageDependent,
                    "cash-flow dependent",
                )
            } else {
                (
                    ClassificationLabel::ResidentialMortgage,
                    "no cash-flow dependency",
                )
            };
            ClassificationResult {
                weight,
                label,
                trail: notes,
            }
            .with_note(format!(
                "Residential real estate, {qualifier}, LTV {ltv}% ⇒ {weight}%"
            ))
        }
        (PropertyKind::NonResidential, true) => {
            let weight = if ltv <= NON_RESIDENTIAL_LTV_BREAKPOINT {
                NON_RESIDENTIAL_DEPENDENT_LOW_LTV_WEIGHT
            } else {
                NON_RESIDENTIAL_DEPENDENT_HIGH_LTV_WEIGHT
            };
            ClassificationResult {
                weight,
                label: ClassificationLabel::NonResidentialDependent,
                trail: notes,
            }
            .with_note(format!(
                "Non-residential real estate, cash-flow dependent, LTV {ltv}% ⇒ {weight}%"
            ))
        }
        (PropertyKind::NonResidential, false) => {
            return Some(non_residential_independent(exposure, notes));
        }
    };
    Some(result)
}

/// Non-residential, no cash-flow dependency: capped by, or equal to, the
/// obligor's own weight.
fn non_residential_independent(exposure: &Exposure, notes: Vec<String>) -> ClassificationResult {
    let ltv = exposure.real_estate.ltv;
    let obligor = obligor_pass(exposure);

    if ltv <= NON_RESIDENTIAL_LTV_BREAKPOINT {
        let weight = NON_RESIDENTIAL_INDEPENDENT_CAP.min(obligor.weight);
        ClassificationResult {
            weight,
            label: ClassificationLabel::NonResidentialIndependent,
            trail: notes,
        }
        .with_note(format!(
            "Non-residential real estate, no cash-flow dependency, LTV {ltv}% ≤ {NON_RESIDENTIAL_LTV_BREAKPOINT}% ⇒ obligor second pass"
        ))
        .with_nested(&obligor.trail)
        .with_note(format!(
            "min({NON_RESIDENTIAL_INDEPENDENT_CAP}%, obligor {}%) ⇒ {weight}%",
            obligor.weight
        ))
    } else {
        ClassificationResult {
            weight: obligor.weight,
            label: obligor.label,
            trail: notes,
        }
        .with_note(format!(
            "Non-residential real estate, no cash-flow dependency, LTV {ltv}% > {NON_RESIDENTIAL_LTV_BREAKPOINT}% ⇒ obligor weight"
        ))
        .with_nested(&obligor.trail)
    }
}

fn defer_to_obligor(exposure: &Exposure, reason: &str) -> ClassificationResult {
    let obligor = obligor_pass(exposure);
    ClassificationResult {
        weight: obligor.weight,
        label: obligor.label,
        trail: vec![reason.to_string()],
    }
    .with_nested(&obligor.trail)
}
