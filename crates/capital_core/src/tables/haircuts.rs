//! Comprehensive-approach haircuts, as fractions.

use crate::types::{CollateralKind, Currency};

/// Exposure haircut applied under a maturity mismatch.
pub const MATURITY_MISMATCH_HAIRCUT: f64 = 0.3;

/// FX haircut applied when collateral and exposure currencies differ.
pub const FX_MISMATCH_HAIRCUT: f64 = 0.08;

/// Collateral haircut (Hc) by kind.
pub fn collateral_haircut(kind: CollateralKind) -> f64 {
    match kind {
        CollateralKind::DemandDeposit
        | CollateralKind::SavingsDeposit
        | CollateralKind::Gold
        | CollateralKind::SovereignBond => 0.0,
        CollateralKind::SeniorPrivateBond => 0.25,
        CollateralKind::Other => 0.3,
    }
}

/// Exposure haircut (He).
#[inline]
pub fn exposure_haircut(maturity_mismatch: bool) -> f64 {
    if maturity_mismatch {
        MATURITY_MISMATCH_HAIRCUT
    } else {
        0.0
    }
}

/// FX haircut (Hfx).
#[inline]
pub fn fx_haircut(exposure: Currency, collateral: Currency) -> f64 {
    if exposure == collateral {
        0.0
    } else {
        FX_MISMATCH_HAIRCUT
    }
}
