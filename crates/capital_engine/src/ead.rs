//! Exposure-at-default.
//!
//! `EAD = max(0, drawn + CCF × undrawn − provision% × drawn)`.
//!
//! Negative balances are a recovered condition: the result carries a zero
//! EAD and a trail line saying why. Non-finite balances read as zero.
//!
//! # CCF resolution
//!
//! 1. a manual factor, clamped to `[0, 1]`
//! 2. the retail override for an eligible natural person's card or credit line
//! 3. the detailed selector, when present
//! 4. the standard selector

use capital_core::tables::{detailed_ccf, retail_card_ccf, retail_overdraft_ccf, standard_ccf};
use capital_core::types::{
    CcfKind, CounterpartyCategory, DetailedCcf, Exposure, ExposureAmounts, ProductCategory,
};
use tracing::warn;

/// Where the applied credit-conversion factor came from.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CcfSource {
    /// Manual factor supplied with the amounts
    Custom,
    /// Eligible retail card limit
    RetailCard,
    /// Eligible retail overdraft / credit line
    RetailOverdraft,
    /// Detailed selector
    Detailed(DetailedCcf),
    /// Standard selector
    Standard(CcfKind),
}

impl CcfSource {
    fn describe(&self) -> String {
        match self {
            CcfSource::Custom => "custom".to_string(),
            CcfSource::RetailCard => "retail card".to_string(),
            CcfSource::RetailOverdraft => "retail overdraft".to_string(),
            CcfSource::Detailed(kind) => format!("detailed {kind:?}"),
            CcfSource::Standard(kind) => format!("standard {kind:?}"),
        }
    }
}

/// Exposure-at-default and its derivation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EadResult {
    /// Exposure-at-default, never negative
    pub ead: f64,
    /// Drawn balance used
    pub drawn_balance: f64,
    /// Undrawn limit used
    pub undrawn_limit: f64,
    /// Applied credit-conversion factor
    pub ccf: f64,
    /// Origin of the factor
    pub ccf_source: CcfSource,
    /// Provision deducted
    pub provision: f64,
    /// Ordered explanation
    pub trail: Vec<String>,
}

impl EadResult {
    /// Converted undrawn amount, `ccf × undrawn`.
    #[inline]
    pub fn converted_undrawn(&self) -> f64 {
        self.ccf * self.undrawn_limit
    }

    /// Drawn balance plus converted undrawn amount.
    #[inline]
    pub fn gross_exposure(&self) -> f64 {
        self.drawn_balance + self.converted_undrawn()
    }
}

/// Resolves the credit-conversion factor.
///
/// Returns the factor, its source and any recovery notes.
pub fn select_ccf(amounts: &ExposureAmounts, exposure: &Exposure) -> (f64, CcfSource, Vec<String>) {
    let mut notes = Vec::new();

    match amounts.custom_ccf {
        Some(factor) if factor.is_finite() => {
            let clamped = factor.clamp(0.0, 1.0);
            if clamped != factor {
                notes.push(format!(
                    "Custom CCF {factor} outside [0, 1]; clamped to {clamped}"
                ));
            }
            return (clamped, CcfSource::Custom, notes);
        }
        Some(factor) => {
            warn!(custom_ccf = factor, "ignoring non-finite custom CCF");
            notes.push("Custom CCF is not a finite number; ignored".to_string());
        }
        None => {}
    }

    if exposure.counterparty == CounterpartyCategory::Individual && exposure.retail.eligible {
        match exposure.product {
            ProductCategory::Card => return (retail_card_ccf(), CcfSource::RetailCard, notes),
            ProductCategory::CreditLine => {
                return (retail_overdraft_ccf(), CcfSource::RetailOverdraft, notes)
            }
            _ => {}
        }
    }

    if let Some(kind) = amounts.detailed_ccf {
        return (detailed_ccf(kind), CcfSource::Detailed(kind), notes);
    }
    (standard_ccf(amounts.ccf), CcfSource::Standard(amounts.ccf), notes)
}

fn finite_or_zero(value: f64, field: &str, trail: &mut Vec<String>) -> f64 {
    if value.is_finite() {
        value
    } else {
        warn!(field, "non-finite balance treated as zero");
        trail.push(format!("{field} is not a finite number; treated as 0"));
        0.0
    }
}

/// Computes exposure-at-default.
///
/// # Example
///
/// ```
/// use capital_core::types::{CcfKind, CounterpartyCategory, Exposure, ExposureAmounts, ProductCategory};
/// use capital_engine::ead::compute_ead;
///
/// let exposure = Exposure::new(ProductCategory::CreditLine, CounterpartyCategory::Corporate);
/// let amounts = ExposureAmounts::new(10_000.0, 5_000.0, CcfKind::RevocableCommitment);
///
/// let result = compute_ead(&exposure, &amounts);
/// assert_eq!(result.ead, 10_500.0);
/// ```
pub fn compute_ead(exposure: &Exposure, amounts: &ExposureAmounts) -> EadResult {
    let mut trail = Vec::new();
    let drawn = finite_or_zero(amounts.drawn_balance, "Drawn balance", &mut trail);
    let undrawn = finite_or_zero(amounts.undrawn_limit, "Undrawn limit", &mut trail);
    let (ccf, ccf_source, notes) = select_ccf(amounts, exposure);

    if drawn < 0.0 || undrawn < 0.0 {
        warn!(drawn, undrawn, "negative balance; EAD set to zero");
        trail.push(format!(
            "Negative amounts are not allowed (drawn {drawn:.2}, undrawn {undrawn:.2}) ⇒ EAD 0"
        ));
        return EadResult {
            ead: 0.0,
            drawn_balance: drawn,
            undrawn_limit: undrawn,
            ccf: 0.0,
            ccf_source,
            provision: 0.0,
            trail,
        };
    }
    trail.extend(notes);

    let converted = ccf * undrawn;
    let gross = drawn + converted;
    trail.push(format!("Drawn balance: {drawn:.2}"));
    trail.push(format!("Undrawn limit: {undrawn:.2}"));
    trail.push(format!(
        "CCF ({}): {}% ⇒ converted undrawn {converted:.2}",
        ccf_source.describe(),
        ccf * 100.0
    ));
    trail.push(format!("Gross exposure = drawn + CCF × undrawn = {gross:.2}"));

    let mut provision_percent = exposure.default_status.provision_percent;
    if !provision_percent.is_finite() {
        trail.push("Provision percent is not a finite number; treated as 0%".to_string());
        provision_percent = 0.0;
    } else if !(0.0..=100.0).contains(&provision_percent) {
        let clamped = provision_percent.clamp(0.0, 100.0);
        trail.push(format!(
            "Provision percent {provision_percent}% outside [0, 100]; clamped to {clamped}%"
        ));
        provision_percent = clamped;
    }
    let provision = provision_percent / 100.0 * drawn;

    let ead = (gross - provision).max(0.0);
    if provision > 0.0 {
        trail.push(format!(
            "Provision ({provision_percent}% × {drawn:.2}) = {provision:.2}"
        ));
        trail.push(format!(
            "EAD = max(0, {gross:.2} − {provision:.2}) = {ead:.2}"
        ));
    } else {
        trail.push(format!("EAD = {ead:.2} (no provision deducted)"));
    }

    EadResult {
        ead,
        drawn_balance: drawn,
        undrawn_limit: undrawn,
        ccf,
        ccf_source,
        provision,
        trail,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn corporate() -> Exposure {
        Exposure::new(ProductCategory::CreditLine, CounterpartyCategory::Corporate)
    }

    #[test]
    fn test_revocable_line() {
        let amounts = ExposureAmounts::new(10_000.0, 5_000.0, CcfKind::RevocableCommitment);
        let r = compute_ead(&corporate(), &amounts);
        assert_relative_eq!(r.ead, 10_500.0);
        assert_relative_eq!(r.gross_exposure(), 10_500.0);
        assert_eq!(r.ccf_source, CcfSource::Standard(CcfKind::RevocableCommitment));
    }

    #[test]
    fn test_provision_is_deducted_from_drawn() {
        let mut e = corporate();
        e.default_status.provision_percent = 20.0;
        let amounts = ExposureAmounts::new(10_000.0, 0.0, CcfKind::Other);
        let r = compute_ead(&e, &amounts);
        assert_relative_eq!(r.provision, 2_000.0);
        assert_relative_eq!(r.ead, 8_000.0);
    }

    #[test]
    fn test_negative_balance_yields_zero() {
        let amounts = ExposureAmounts::new(-1.0, 5_000.0, CcfKind::Other);
        let r = compute_ead(&corporate(), &amounts);
        assert_eq!(r.ead, 0.0);
        assert_eq!(r.trail.len(), 1);
        assert!(r.trail[0].contains("Negative amounts"));
    }

    #[test]
    fn test_nan_balance_reads_as_zero() {
        let amounts = ExposureAmounts::new(f64::NAN, 1_000.0, CcfKind::IrrevocableCommitment);
        let r = compute_ead(&corporate(), &amounts);
        assert_relative_eq!(r.ead, 500.0);
        assert!(r.trail[0].contains("not a finite number"));
    }

    #[test]
    fn test_custom_factor_wins_and_is_clamped() {
        let mut e = corporate();
        e.counterparty = CounterpartyCategory::Individual;
        e.retail.eligible = true;
        let amounts = ExposureAmounts::new(0.0, 1_000.0, CcfKind::Other).with_custom_ccf(1.4);
        let (ccf, source, notes) = select_ccf(&amounts, &e);
        assert_eq!(ccf, 1.0);
        assert_eq!(source, CcfSource::Custom);
        assert_eq!(notes.len(), 1);
    }

    #[test]
    fn test_retail_override_beats_detailed_and_standard() {
        let mut e = Exposure::new(ProductCategory::Card, CounterpartyCategory::Individual);
        e.retail.eligible = true;
        let amounts = ExposureAmounts::new(0.0, 1_000.0, CcfKind::IrrevocableCommitment)
            .with_detailed_ccf(DetailedCcf::RetailCardIrrevocable);
        let (ccf, source, _) = select_ccf(&amounts, &e);
        assert_eq!(ccf, 0.1);
        assert_eq!(source, CcfSource::RetailCard);

        e.retail.eligible = false;
        let (ccf, source, _) = select_ccf(&amounts, &e);
        assert_eq!(ccf, 0.5);
        assert_eq!(source, CcfSource::Detailed(DetailedCcf::RetailCardIrrevocable));
    }

    #[test]
    fn test_retail_overdraft_override() {
        let mut e = Exposure::new(ProductCategory::CreditLine, CounterpartyCategory::Individual);
        e.retail.eligible = true;
        let amounts = ExposureAmounts::new(0.0, 1_000.0, CcfKind::Other);
        let r = compute_ead(&e, &amounts);
        assert_relative_eq!(r.ead, 100.0);
        assert_eq!(r.ccf_source, CcfSource::RetailOverdraft);
    }

    #[test]
    fn test_provision_above_exposure_floors_at_zero() {
        let mut e = corporate();
        e.default_status.provision_percent = 100.0;
        let amounts = ExposureAmounts::new(1_000.0, 0.0, CcfKind::Other);
        assert_eq!(compute_ead(&e, &amounts).ead, 0.0);
    }

    proptest! {
        #[test]
        fn test_ead_is_never_negative(
            drawn in -1.0e6f64..1.0e6,
            undrawn in -1.0e6f64..1.0e6,
            provision in -50.0f64..150.0,
        ) {
            let mut e = corporate();
            e.default_status.provision_percent = provision;
            let amounts = ExposureAmounts::new(drawn, undrawn, CcfKind::IrrevocableCommitment);
            let r = compute_ead(&e, &amounts);
            prop_assert!(r.ead >= 0.0);
            prop_assert!(r.ead.is_finite());
        }
    }
}
