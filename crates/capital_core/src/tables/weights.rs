//! Risk-weight tables, in percent.

use crate::types::{
    EquityTier, FundMandate, InstitutionTier, MultilateralRating, OtherAssetKind, ProjectPhase,
    SovereignRating, SpecialTier,
};

/// Conservative default weight when nothing more specific applies.
pub const CONSERVATIVE_WEIGHT: f64 = 100.0;

/// Domestic sovereign and central bank.
pub const DOMESTIC_SOVEREIGN_WEIGHT: f64 = 0.0;

/// Listed multilateral organisations.
pub const LISTED_MULTILATERAL_WEIGHT: f64 = 0.0;

/// Sub-national public sector entities, regardless of kind or rating.
pub const PUBLIC_SECTOR_WEIGHT: f64 = 100.0;

/// Foreign sovereign by rating bucket.
///
/// ```
/// use capital_core::tables::sovereign_weight;
/// use capital_core::types::SovereignRating;
///
/// assert_eq!(sovereign_weight(SovereignRating::APlusToAMinus), 20.0);
/// assert_eq!(sovereign_weight(SovereignRating::Unrated), 100.0);
/// ```
pub fn sovereign_weight(rating: SovereignRating) -> f64 {
    match rating {
        SovereignRating::AaaToAaMinus => 0.0,
        SovereignRating::APlusToAMinus => 20.0,
        SovereignRating::BbbPlusToBbbMinus => 50.0,
        SovereignRating::BbPlusToBMinus | SovereignRating::Unrated => 100.0,
        SovereignRating::BelowBMinus => 150.0,
    }
}

/// Unlisted multilateral by rating bucket.
pub fn multilateral_weight(rating: MultilateralRating) -> f64 {
    match rating {
        MultilateralRating::AaaToAaMinus => 20.0,
        MultilateralRating::APlusToAMinus => 30.0,
        MultilateralRating::BbbPlusToBbbMinus | MultilateralRating::Unrated => 50.0,
        MultilateralRating::BbPlusToBMinus => 100.0,
        MultilateralRating::BelowBMinus => 150.0,
    }
}

/// Candidate weights of one financial-institution category.
///
/// Category C has no candidates: it is a flat weight.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InstitutionWeights {
    /// Original tenor up to 90 days
    pub short_tenor: f64,
    /// Original tenor above 90 days
    pub long_tenor: f64,
    /// Tier 1 and leverage conditions met jointly
    pub strong_capital: Option<f64>,
    /// Trade finance up to one year
    pub trade_finance: f64,
    /// Eligible netting
    pub netting: f64,
}

const INSTITUTION_A: InstitutionWeights = InstitutionWeights {
    short_tenor: 20.0,
    long_tenor: 40.0,
    strong_capital: Some(30.0),
    trade_finance: 20.0,
    netting: 40.0,
};

const INSTITUTION_B: InstitutionWeights = InstitutionWeights {
    short_tenor: 50.0,
    long_tenor: 75.0,
    strong_capital: None,
    trade_finance: 50.0,
    netting: 75.0,
};

/// Flat weight for category C institutions.
pub const INSTITUTION_C_WEIGHT: f64 = 150.0;

/// Candidate weights for a financial-institution category; `None` for category C.
pub fn institution_weights(tier: InstitutionTier) -> Option<&'static InstitutionWeights> {
    match tier {
        InstitutionTier::A => Some(&INSTITUTION_A),
        InstitutionTier::B => Some(&INSTITUTION_B),
        InstitutionTier::C => None,
    }
}

/// Large, low-risk corporate.
pub const CORPORATE_LARGE_LOW_RISK_WEIGHT: f64 = 65.0;
/// Small and medium-sized enterprise.
pub const CORPORATE_SME_WEIGHT: f64 = 85.0;
/// Object or commodities finance.
pub const CORPORATE_SPECIALIZED_WEIGHT: f64 = 100.0;
/// Corporate without any discount.
pub const CORPORATE_WEIGHT: f64 = 100.0;

/// Project finance by phase; no phase reads as pre-operational.
pub fn project_finance_weight(phase: Option<ProjectPhase>) -> f64 {
    match phase {
        None | Some(ProjectPhase::PreOperational) => 130.0,
        Some(ProjectPhase::Operational) => 100.0,
        Some(ProjectPhase::HighQualityOperational) => 80.0,
    }
}

/// Retail transactor or line undrawn for 360 days.
pub const RETAIL_TRANSACTOR_WEIGHT: f64 = 45.0;
/// Eligible retail.
pub const RETAIL_ELIGIBLE_WEIGHT: f64 = 75.0;
/// Natural person outside the retail criteria.
pub const RETAIL_INELIGIBLE_WEIGHT: f64 = 100.0;
/// Payroll loan with tenor above the threshold.
pub const PAYROLL_LONG_TENOR_WEIGHT: f64 = 150.0;
/// Payroll tenor threshold, in years (strictly greater triggers).
pub const PAYROLL_TENOR_THRESHOLD_YEARS: f64 = 5.0;

/// One band of an LTV ladder: applies when `ltv <= max_ltv`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LtvBand {
    /// Inclusive upper LTV bound, in percent
    pub max_ltv: f64,
    /// Weight, in percent
    pub weight: f64,
}

const fn band(max_ltv: f64, weight: f64) -> LtvBand {
    LtvBand { max_ltv, weight }
}

/// Residential ladder without cash-flow dependency.
pub const RESIDENTIAL_LADDER: [LtvBand; 8] = [
    band(10.0, 20.0),
    band(20.0, 25.0),
    band(30.0, 30.0),
    band(40.0, 35.0),
    band(50.0, 45.0),
    band(60.0, 60.0),
    band(70.0, 75.0),
    band(200.0, 105.0),
];

/// Residential ladder with cash-flow dependency.
pub const RESIDENTIAL_DEPENDENT_LADDER: [LtvBand; 8] = [
    band(10.0, 30.0),
    band(20.0, 35.0),
    band(30.0, 45.0),
    band(40.0, 60.0),
    band(50.0, 75.0),
    band(60.0, 90.0),
    band(70.0, 105.0),
    band(200.0, 150.0),
];

/// Looks up a ladder; LTVs beyond the last breakpoint take the top band.
pub fn ladder_weight(ladder: &[LtvBand], ltv: f64) -> f64 {
    ladder
        .iter()
        .find(|b| ltv <= b.max_ltv)
        .or_else(|| ladder.last())
        .map_or(CONSERVATIVE_WEIGHT, |b| b.weight)
}

/// Residential weight for an LTV, picking the ladder by dependency.
///
/// ```
/// use capital_core::tables::residential_ltv_weight;
///
/// assert_eq!(residential_ltv_weight(55.0, false), 60.0);
/// assert_eq!(residential_ltv_weight(55.0, true), 90.0);
/// assert_eq!(residential_ltv_weight(350.0, false), 105.0);
/// ```
pub fn residential_ltv_weight(ltv: f64, cash_flow_dependent: bool) -> f64 {
    if cash_flow_dependent {
        ladder_weight(&RESIDENTIAL_DEPENDENT_LADDER, ltv)
    } else {
        ladder_weight(&RESIDENTIAL_LADDER, ltv)
    }
}

/// LTV breakpoint of the non-residential rules.
pub const NON_RESIDENTIAL_LTV_BREAKPOINT: f64 = 60.0;
/// Non-residential, dependent, LTV at or below the breakpoint.
pub const NON_RESIDENTIAL_DEPENDENT_LOW_LTV_WEIGHT: f64 = 70.0;
/// Non-residential, dependent, LTV above the breakpoint.
pub const NON_RESIDENTIAL_DEPENDENT_HIGH_LTV_WEIGHT: f64 = 90.0;
/// Cap for non-residential, independent, LTV at or below the breakpoint.
pub const NON_RESIDENTIAL_INDEPENDENT_CAP: f64 = 60.0;

/// Under construction, contract up to 2023.
pub const CONSTRUCTION_PRE_CUTOFF_WEIGHT: f64 = 50.0;
/// Under construction, contract from 2024.
pub const CONSTRUCTION_POST_CUTOFF_WEIGHT: f64 = 150.0;

/// Fund by mandate style.
pub fn fund_mandate_weight(mandate: FundMandate) -> f64 {
    match mandate {
        FundMandate::Equity => 400.0,
        FundMandate::FixedIncome => 100.0,
        FundMandate::Mixed => 150.0,
        FundMandate::Other => 100.0,
    }
}

/// Defaulted exposure by provision percent.
///
/// ```
/// use capital_core::tables::default_weight;
///
/// assert_eq!(default_weight(10.0), 150.0);
/// assert_eq!(default_weight(20.0), 100.0);
/// assert_eq!(default_weight(50.0), 50.0);
/// ```
pub fn default_weight(provision_percent: f64) -> f64 {
    if provision_percent >= 50.0 {
        50.0
    } else if provision_percent >= 20.0 {
        100.0
    } else {
        150.0
    }
}

/// Sub-types of the generic "other" product.
pub fn other_asset_weight(kind: OtherAssetKind) -> f64 {
    match kind {
        OtherAssetKind::Cash | OtherAssetKind::Gold => 0.0,
        OtherAssetKind::ListedEquity => 250.0,
        OtherAssetKind::UnlistedEquity => 400.0,
        OtherAssetKind::FixedAsset | OtherAssetKind::Other => 100.0,
    }
}

/// Negative equity adjustment.
pub const NEGATIVE_EQUITY_ADJUSTMENT_WEIGHT: f64 = 100.0;
/// Subordinated instruments.
pub const SUBORDINATED_WEIGHT: f64 = 150.0;

/// Equity participation; `None` when no tier applies.
pub fn equity_weight(tier: EquityTier) -> Option<f64> {
    match tier {
        EquityTier::None => None,
        EquityTier::Significant => Some(250.0),
        EquityTier::Excess => Some(1250.0),
    }
}

/// Tax-credit and receivables tiers; `None` when no tier applies.
pub fn special_tier_weight(tier: SpecialTier) -> Option<f64> {
    match tier {
        SpecialTier::None => None,
        SpecialTier::Weight100 => Some(100.0),
        SpecialTier::Weight600 => Some(600.0),
        SpecialTier::Weight1250 => Some(1250.0),
    }
}

/// Currency-mismatch multiplier.
pub const CURRENCY_MISMATCH_MULTIPLIER: f64 = 1.5;
/// Currency-mismatch cap.
pub const CURRENCY_MISMATCH_CAP: f64 = 150.0;
/// Floor for cash held outside direct possession.
pub const CUSTODY_FLOOR_WEIGHT: f64 = 20.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrated_sovereign_is_not_below_b_minus() {
        assert_eq!(sovereign_weight(SovereignRating::Unrated), 100.0);
        assert_eq!(sovereign_weight(SovereignRating::BbPlusToBMinus), 100.0);
        assert_eq!(sovereign_weight(SovereignRating::BelowBMinus), 150.0);
        assert_ne!(
            sovereign_weight(SovereignRating::Unrated),
            sovereign_weight(SovereignRating::BelowBMinus)
        );
    }

    #[test]
    fn test_multilateral_table_differs_from_sovereign() {
        assert_eq!(multilateral_weight(MultilateralRating::AaaToAaMinus), 20.0);
        assert_eq!(multilateral_weight(MultilateralRating::APlusToAMinus), 30.0);
        assert_eq!(multilateral_weight(MultilateralRating::Unrated), 50.0);
        assert_eq!(multilateral_weight(MultilateralRating::BbPlusToBMinus), 100.0);
        assert_eq!(multilateral_weight(MultilateralRating::BelowBMinus), 150.0);
    }

    #[test]
    fn test_institution_tables() {
        let a = institution_weights(InstitutionTier::A).unwrap();
        assert_eq!((a.short_tenor, a.long_tenor), (20.0, 40.0));
        assert_eq!(a.strong_capital, Some(30.0));
        let b = institution_weights(InstitutionTier::B).unwrap();
        assert_eq!((b.short_tenor, b.long_tenor), (50.0, 75.0));
        assert_eq!(b.strong_capital, None);
        assert!(institution_weights(InstitutionTier::C).is_none());
    }

    #[test]
    fn test_ladder_band_edges_are_inclusive() {
        assert_eq!(residential_ltv_weight(10.0, false), 20.0);
        assert_eq!(residential_ltv_weight(10.01, false), 25.0);
        assert_eq!(residential_ltv_weight(60.0, false), 60.0);
        assert_eq!(residential_ltv_weight(70.0, true), 105.0);
        assert_eq!(residential_ltv_weight(0.0, true), 30.0);
    }

    #[test]
    fn test_ladder_top_band_catches_beyond_last_breakpoint() {
        assert_eq!(residential_ltv_weight(200.0, false), 105.0);
        assert_eq!(residential_ltv_weight(250.0, false), 105.0);
        assert_eq!(residential_ltv_weight(250.0, true), 150.0);
    }

    #[test]
    fn test_ladders_are_monotonic() {
        for ladder in [&RESIDENTIAL_LADDER, &RESIDENTIAL_DEPENDENT_LADDER] {
            for pair in ladder.windows(2) {
                assert!(pair[0].max_ltv < pair[1].max_ltv);
                assert!(pair[0].weight < pair[1].weight);
            }
        }
    }

    #[test]
    fn test_project_finance_phases() {
        assert_eq!(project_finance_weight(None), 130.0);
        assert_eq!(project_finance_weight(Some(ProjectPhase::PreOperational)), 130.0);
        assert_eq!(project_finance_weight(Some(ProjectPhase::Operational)), 100.0);
        assert_eq!(
            project_finance_weight(Some(ProjectPhase::HighQualityOperational)),
            80.0
        );
    }

    #[test]
    fn test_default_tiers_edges() {
        assert_eq!(default_weight(0.0), 150.0);
        assert_eq!(default_weight(19.99), 150.0);
        assert_eq!(default_weight(49.99), 100.0);
        assert_eq!(default_weight(100.0), 50.0);
    }

    #[test]
    fn test_special_tiers() {
        assert_eq!(equity_weight(EquityTier::None), None);
        assert_eq!(equity_weight(EquityTier::Significant), Some(250.0));
        assert_eq!(equity_weight(EquityTier::Excess), Some(1250.0));
        assert_eq!(special_tier_weight(SpecialTier::Weight600), Some(600.0));
        assert_eq!(special_tier_weight(SpecialTier::None), None);
    }

    #[test]
    fn test_other_assets_and_funds() {
        assert_eq!(other_asset_weight(OtherAssetKind::Cash), 0.0);
        assert_eq!(other_asset_weight(OtherAssetKind::Gold), 0.0);
        assert_eq!(other_asset_weight(OtherAssetKind::ListedEquity), 250.0);
        assert_eq!(other_asset_weight(OtherAssetKind::UnlistedEquity), 400.0);
        assert_eq!(fund_mandate_weight(FundMandate::Equity), 400.0);
        assert_eq!(fund_mandate_weight(FundMandate::Mixed), 150.0);
    }
}
