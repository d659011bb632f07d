//! Orchestration of a single evaluation.
//!
//! ```text
//! Exposure ─► classify ─► apply_adjustments ─► final weight
//!                                                  │
//!     amounts? ─► compute_ead ─► mitigate ─► adjusted EAD × weight ─► RWA
//! ```
//!
//! The trail is the concatenation of every stage's lines in execution order.

use crate::adjustments::apply_adjustments;
use crate::classifier::classify;
use crate::collateral::mitigate;
use crate::ead::compute_ead;
use capital_core::types::{ClassificationLabel, Exposure};
use tracing::{debug, instrument};

/// Outcome of one evaluation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CapitalResult {
    /// Weight after adjustments, in percent, within `[0, 1250]`
    pub final_weight: f64,
    /// Weight chosen by the classifier
    pub base_weight: f64,
    /// Classification label
    pub label: ClassificationLabel,
    /// Ordered explanation of every rule that fired
    pub trail: Vec<String>,
    /// Exposure-at-default, when amounts were supplied
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub ead: Option<f64>,
    /// EAD after collateral mitigation, when amounts were supplied
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub adjusted_ead: Option<f64>,
    /// Risk-weighted amount, when amounts were supplied
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub rwa: Option<f64>,
}

/// Evaluates exposures.
///
/// Stateless: evaluating the same exposure twice yields identical results,
/// trail included.
///
/// # Example
///
/// ```
/// use capital_core::types::{
///     CcfKind, ClassificationLabel, CounterpartyCategory, Exposure, ExposureAmounts, ProductCategory,
/// };
/// use capital_engine::CapitalCalculator;
///
/// let mut exposure = Exposure::new(ProductCategory::CreditLine, CounterpartyCategory::Individual)
///     .with_amounts(ExposureAmounts::new(10_000.0, 5_000.0, CcfKind::RevocableCommitment));
/// exposure.retail.eligible = true;
///
/// let result = CapitalCalculator::new().evaluate(&exposure);
/// assert_eq!(result.label, ClassificationLabel::RetailEligible);
/// assert_eq!(result.final_weight, 75.0);
/// assert_eq!(result.ead, Some(10_500.0));
/// assert_eq!(result.rwa, Some(7_875.0));
/// ```
#[derive(Copy, Clone, Debug, Default)]
pub struct CapitalCalculator;

impl CapitalCalculator {
    /// Creates a calculator.
    pub fn new() -> Self {
        Self
    }

    /// Runs classification, adjustments and, when amounts are present, EAD,
    /// collateral mitigation and RWA.
    #[instrument(
        level = "debug",
        skip_all,
        fields(product = ?exposure.product, counterparty = ?exposure.counterparty)
    )]
    pub fn evaluate(&self, exposure: &Exposure) -> CapitalResult {
        let classification = classify(exposure);
        let base_weight = classification.weight;
        let label = classification.label;
        let mut trail = classification.trail;

        let adjusted = apply_adjustments(base_weight, label, exposure);
        let final_weight = adjusted.weight;
        trail.extend(adjusted.trail);
        debug!(%label, base_weight, final_weight, "weight determined");

        let Some(amounts) = exposure.amounts.as_ref() else {
            return CapitalResult {
                final_weight,
                base_weight,
                label,
                trail,
                ead: None,
                adjusted_ead: None,
                rwa: None,
            };
        };

        let ead = compute_ead(exposure, amounts);
        trail.push("EAD calculation:".to_string());
        trail.extend(ead.trail);

        let adjusted_ead = if exposure.crm.collateral.is_empty() {
            ead.ead
        } else {
            let mitigation = mitigate(
                ead.ead,
                &exposure.crm.collateral,
                exposure.exposure_currency,
                exposure.crm.maturity_mismatch,
            );
            trail.push("Collateral mitigation:".to_string());
            trail.extend(mitigation.trail);
            mitigation.adjusted_ead
        };

        let rwa = adjusted_ead * final_weight / 100.0;
        trail.push(format!(
            "RWA = adjusted EAD × weight = {adjusted_ead:.2} × {final_weight}% = {rwa:.2}"
        ));
        debug!(ead = ead.ead, adjusted_ead, rwa, "exposure amounts evaluated");

        CapitalResult {
            final_weight,
            base_weight,
            label,
            trail,
            ead: Some(ead.ead),
            adjusted_ead: Some(adjusted_ead),
            rwa: Some(rwa),
        }
    }
}
