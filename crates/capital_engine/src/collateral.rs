//! Collateral mitigation, comprehensive approach.
//!
//! `E* = max(0, E × (1 + He) − Σ Cᵢ × (1 − Hcᵢ − Hfxᵢ))`
//!
//! Each posting contributes with its own haircuts; the reported `hc` and
//! `hfx` are the largest observed, for display only. Collateral never
//! increases exposure: when the maturity-mismatch gross-up outweighs the
//! collateral, the unmitigated EAD is kept.

use capital_core::tables::{collateral_haircut, exposure_haircut, fx_haircut};
use capital_core::types::{CollateralPosting, Currency};
use tracing::warn;

/// EAD after collateral mitigation.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MitigationResult {
    /// EAD before mitigation
    pub ead: f64,
    /// Exposure haircut applied
    pub he: f64,
    /// Largest collateral haircut observed
    pub hc: f64,
    /// Largest FX haircut observed
    pub hfx: f64,
    /// Sum of haircut-adjusted collateral values
    pub adjusted_collateral: f64,
    /// Mitigated exposure, in `[0, ead]`
    pub adjusted_ead: f64,
    /// Ordered explanation
    pub trail: Vec<String>,
}

impl MitigationResult {
    /// Share of the exposure removed by collateral, in `[0, 1]`.
    ///
    /// Zero when there is no exposure.
    pub fn mitigation_factor(&self) -> f64 {
        if self.ead <= 0.0 {
            return 0.0;
        }
        ((self.ead - self.adjusted_ead) / self.ead).clamp(0.0, 1.0)
    }
}

/// Applies haircut-adjusted collateral to an EAD.
///
/// # Example
///
/// ```
/// use capital_core::types::{CollateralKind, CollateralPosting, Currency};
/// use capital_engine::collateral::mitigate;
///
/// let postings = [CollateralPosting::new(CollateralKind::SeniorPrivateBond, Currency::BRL, 4_000.0)];
/// let result = mitigate(10_000.0, &postings, Currency::BRL, false);
///
/// assert_eq!(result.adjusted_ead, 7_000.0);
/// assert_eq!(result.hc, 0.25);
/// ```
pub fn mitigate(
    ead: f64,
    postings: &[CollateralPosting],
    exposure_currency: Currency,
    maturity_mismatch: bool,
) -> MitigationResult {
    if postings.is_empty() {
        return MitigationResult {
            ead,
            he: 0.0,
            hc: 0.0,
            hfx: 0.0,
            adjusted_collateral: 0.0,
            adjusted_ead: ead,
            trail: Vec::new(),
        };
    }

    let mut trail = Vec::new();
    let he = exposure_haircut(maturity_mismatch);
    let mut hc_max: f64 = 0.0;
    let mut hfx_max: f64 = 0.0;
    let mut adjusted_collateral = 0.0;

    for (index, posting) in postings.iter().enumerate() {
        let value = if posting.value.is_finite() && posting.value >= 0.0 {
            posting.value
        } else {
            warn!(index, value = posting.value, "ignoring invalid collateral value");
            trail.push(format!(
                "Collateral posting {index} has an invalid value; ignored"
            ));
            continue;
        };
        if !posting.kind.is_always_eligible() {
            trail.push(format!(
                "Collateral posting {index} ({:?}): eligibility must be confirmed",
                posting.kind
            ));
        }
        let hc = collateral_haircut(posting.kind);
        let hfx = fx_haircut(exposure_currency, posting.currency);
        adjusted_collateral += value * (1.0 - hc - hfx);
        hc_max = hc_max.max(hc);
        hfx_max = hfx_max.max(hfx);
    }

    let mitigated = (ead * (1.0 + he) - adjusted_collateral).max(0.0);
    let adjusted_ead = mitigated.min(ead);

    if he > 0.0 {
        trail.push(format!("Exposure haircut (He): {:.1}%", he * 100.0));
    }
    if hc_max > 0.0 {
        trail.push(format!("Collateral haircut (Hc): {:.1}%", hc_max * 100.0));
    }
    if hfx_max > 0.0 {
        trail.push(format!("FX haircut (Hfx): {:.1}%", hfx_max * 100.0));
    }
    trail.push(format!(
        "Adjusted EAD = max(0, {ead:.2} × (1 + He) − {adjusted_collateral:.2}) = {mitigated:.2}"
    ));
    if adjusted_ead < mitigated {
        trail.push(format!(
            "Collateral does not offset the exposure haircut ⇒ EAD kept at {ead:.2}"
        ));
    }

    MitigationResult {
        ead,
        he,
        hc: hc_max,
        hfx: hfx_max,
        adjusted_collateral,
        adjusted_ead,
        trail,
    }
}

/// Simple-approach blend of exposure and collateral weights.
///
/// `coverage` is the covered share of the exposure, clamped to `[0, 1]`.
///
/// ```
/// use capital_engine::collateral::simple_approach_weight;
///
/// assert_eq!(simple_approach_weight(100.0, 0.0, 0.4), 60.0);
/// assert_eq!(simple_approach_weight(100.0, 20.0, 2.0), 20.0);
/// ```
pub fn simple_approach_weight(exposure_weight: f64, collateral_weight: f64, coverage: f64) -> f64 {
    let coverage = if coverage.is_nan() {
        0.0
    } else {
        coverage.clamp(0.0, 1.0)
    };
    coverage * collateral_weight + (1.0 - coverage) * exposure_weight
}
