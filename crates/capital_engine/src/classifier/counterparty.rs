//! Counterparty-based rule groups.
//!
//! These groups look at who the obligor is, never at the product. The
//! cascade gates them to direct exposures; the counterparty pass calls them
//! unconditionally.

use super::ClassificationResult;
use capital_core::tables::{
    institution_weights, multilateral_weight, project_finance_weight, sovereign_weight,
    CORPORATE_LARGE_LOW_RISK_WEIGHT, CORPORATE_SME_WEIGHT, CORPORATE_SPECIALIZED_WEIGHT,
    CORPORATE_WEIGHT, DOMESTIC_SOVEREIGN_WEIGHT, INSTITUTION_C_WEIGHT, LISTED_MULTILATERAL_WEIGHT,
    PAYROLL_LONG_TENOR_WEIGHT, PAYROLL_TENOR_THRESHOLD_YEARS, PUBLIC_SECTOR_WEIGHT,
    RETAIL_ELIGIBLE_WEIGHT, RETAIL_INELIGIBLE_WEIGHT, RETAIL_TRANSACTOR_WEIGHT,
};
use capital_core::types::{
    ClassificationLabel, CounterpartyCategory, Exposure, InstitutionTier, MultilateralRating,
    ProjectPhase, PublicSectorKind, SovereignRating, SpecializedFinancing,
};

fn sovereign_rating_name(rating: SovereignRating) -> &'static str {
    match rating {
        SovereignRating::AaaToAaMinus => "AAA to AA-",
        SovereignRating::APlusToAMinus => "A+ to A-",
        SovereignRating::BbbPlusToBbbMinus => "BBB+ to BBB-",
        SovereignRating::BbPlusToBMinus => "BB+ to B-",
        SovereignRating::BelowBMinus => "below B-",
        SovereignRating::Unrated => "unrated",
    }
}

fn multilateral_rating_name(rating: MultilateralRating) -> &'static str {
    match rating {
        MultilateralRating::AaaToAaMinus => "AAA to AA-",
        MultilateralRating::APlusToAMinus => "A+ to A-",
        MultilateralRating::BbbPlusToBbbMinus => "BBB+ to BBB-",
        MultilateralRating::BbPlusToBMinus => "BB+ to B-",
        MultilateralRating::BelowBMinus => "below B-",
        MultilateralRating::Unrated => "unrated",
    }
}

/// Domestic sovereign first; then the listed-multilateral flag, which holds
/// whatever the counterparty category; then the rating tables.
pub(super) fn sovereign(exposure: &Exposure) -> Option<ClassificationResult> {
    let info = &exposure.sovereign;
    if exposure.counterparty != CounterpartyCategory::DomesticSovereign && info.multilateral_listed
    {
        return Some(ClassificationResult::new(
            LISTED_MULTILATERAL_WEIGHT,
            ClassificationLabel::Multilateral,
            format!("Listed multilateral organisation ⇒ {LISTED_MULTILATERAL_WEIGHT}%"),
        ));
    }
    match exposure.counterparty {
        CounterpartyCategory::DomesticSovereign => Some(ClassificationResult::new(
            DOMESTIC_SOVEREIGN_WEIGHT,
            ClassificationLabel::DomesticSovereign,
            format!("Domestic sovereign / central bank ⇒ {DOMESTIC_SOVEREIGN_WEIGHT}%"),
        )),
        CounterpartyCategory::Multilateral => {
            let rating = info.multilateral_rating.unwrap_or(MultilateralRating::Unrated);
            let weight = multilateral_weight(rating);
            Some(ClassificationResult::new(
                weight,
                ClassificationLabel::Multilateral,
                format!(
                    "Unlisted multilateral, rating {} ⇒ {weight}%",
                    multilateral_rating_name(rating)
                ),
            ))
        }
        CounterpartyCategory::ForeignSovereign => {
            let rating = info.rating.unwrap_or(SovereignRating::Unrated);
            let weight = sovereign_weight(rating);
            Some(ClassificationResult::new(
                weight,
                ClassificationLabel::ForeignSovereign,
                format!(
                    "Foreign sovereign, rating {} ⇒ {weight}%",
                    sovereign_rating_name(rating)
                ),
            ))
        }
        _ => None,
    }
}

pub(super) fn public_sector(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.counterparty != CounterpartyCategory::PublicSector {
        return None;
    }
    let info = &exposure.public_sector;
    let (label, name) = match info.kind {
        PublicSectorKind::State => (ClassificationLabel::PublicSectorState, "state"),
        PublicSectorKind::Municipality => {
            (ClassificationLabel::PublicSectorMunicipality, "municipality")
        }
        PublicSectorKind::FederalDistrict => {
            (ClassificationLabel::PublicSectorFederalDistrict, "federal district")
        }
        PublicSectorKind::ServiceProvider => (
            ClassificationLabel::PublicSectorServiceProvider,
            "public-service provider",
        ),
        PublicSectorKind::StateOwned => {
            (ClassificationLabel::PublicSectorStateOwned, "state-owned company")
        }
    };
    let mut result = ClassificationResult::new(
        PUBLIC_SECTOR_WEIGHT,
        label,
        format!("Public sector ({name}) ⇒ fixed {PUBLIC_SECTOR_WEIGHT}%"),
    );
    if let Some(rating) = info.rating {
        result = result.with_note(format!(
            "Rating {} is informational only for public-sector entities",
            sovereign_rating_name(rating)
        ));
    }
    Some(result)
}

pub(super) fn financial_institution(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.counterparty != CounterpartyCategory::FinancialInstitution {
        return None;
    }
    let info = &exposure.institution;
    let tier = match info.tier {
        InstitutionTier::A => "A",
        InstitutionTier::B => "B",
        InstitutionTier::C => "C",
    };

    let Some(table) = institution_weights(info.tier) else {
        return Some(ClassificationResult::new(
            INSTITUTION_C_WEIGHT,
            ClassificationLabel::FinancialInstitution,
            format!("Financial institution category {tier} ⇒ {INSTITUTION_C_WEIGHT}%"),
        ));
    };

    if info.trade_finance_up_to_1_year {
        return Some(ClassificationResult::new(
            table.trade_finance,
            ClassificationLabel::FinancialInstitution,
            format!(
                "Financial institution category {tier}, trade finance ≤ 1 year ⇒ {}%",
                table.trade_finance
            ),
        ));
    }

    let mut candidates = Vec::with_capacity(3);
    if info.tenor_up_to_90_days {
        candidates.push(("tenor ≤ 90 days", table.short_tenor));
    } else {
        candidates.push(("tenor > 90 days", table.long_tenor));
    }
    if info.strong_capital() {
        if let Some(weight) = table.strong_capital {
            candidates.push(("Tier 1 and leverage ratio high", weight));
        }
    }
    if info.netting_eligible {
        candidates.push(("eligible netting", table.netting));
    }

    let weight = candidates
        .iter()
        .map(|(_, w)| *w)
        .fold(f64::INFINITY, f64::min);
    let listed = candidates
        .iter()
        .map(|(name, w)| format!("{name} {w}%"))
        .collect::<Vec<_>>()
        .join(", ");

    Some(ClassificationResult::new(
        weight,
        ClassificationLabel::FinancialInstitution,
        format!("Financial institution category {tier}, candidates [{listed}] ⇒ minimum {weight}%"),
    ))
}

pub(super) fn retail(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.counterparty != CounterpartyCategory::Individual {
        return None;
    }
    let info = &exposure.retail;

    if let Some(tenor) = info.payroll_tenor_years {
        if tenor.is_finite() && tenor > PAYROLL_TENOR_THRESHOLD_YEARS {
            return Some(ClassificationResult::new(
                PAYROLL_LONG_TENOR_WEIGHT,
                ClassificationLabel::PayrollLongTenor,
                format!(
                    "Payroll loan, tenor {tenor} years > {PAYROLL_TENOR_THRESHOLD_YEARS} ⇒ {PAYROLL_LONG_TENOR_WEIGHT}%"
                ),
            ));
        }
    }

    let result = if !info.eligible {
        ClassificationResult::new(
            RETAIL_INELIGIBLE_WEIGHT,
            ClassificationLabel::IndividualNonRetail,
            format!("Natural person outside eligible retail ⇒ {RETAIL_INELIGIBLE_WEIGHT}%"),
        )
    } else if info.transactor || info.no_draw_360_days {
        ClassificationResult::new(
            RETAIL_TRANSACTOR_WEIGHT,
            ClassificationLabel::RetailTransactor,
            format!(
                "Eligible retail, transactor or no drawings in 360 days ⇒ {RETAIL_TRANSACTOR_WEIGHT}%"
            ),
        )
    } else {
        ClassificationResult::new(
            RETAIL_ELIGIBLE_WEIGHT,
            ClassificationLabel::RetailEligible,
            format!("Eligible retail ⇒ {RETAIL_ELIGIBLE_WEIGHT}%"),
        )
    };
    Some(result)
}

pub(super) fn corporate(exposure: &Exposure) -> Option<ClassificationResult> {
    if exposure.counterparty != CounterpartyCategory::Corporate {
        return None;
    }
    let info = &exposure.corporate;

    let result = match info.financing {
        SpecializedFinancing::Project => {
            let weight = project_finance_weight(info.project_phase);
            let phase = match info.project_phase {
                None => "phase not informed, treated as pre-operational",
                Some(ProjectPhase::PreOperational) => "pre-operational",
                Some(ProjectPhase::Operational) => "operational",
                Some(ProjectPhase::HighQualityOperational) => "high-quality operational",
            };
            ClassificationResult::new(
                weight,
                ClassificationLabel::CorporateProjectFinance,
                format!("Project finance ({phase}) ⇒ {weight}%"),
            )
        }
        SpecializedFinancing::Object | SpecializedFinancing::Commodities => {
            ClassificationResult::new(
                CORPORATE_SPECIALIZED_WEIGHT,
                ClassificationLabel::CorporateSpecialized,
                format!(
                    "Specialised financing (object / commodities) ⇒ {CORPORATE_SPECIALIZED_WEIGHT}%"
                ),
            )
        }
        SpecializedFinancing::None if info.large_low_risk => ClassificationResult::new(
            CORPORATE_LARGE_LOW_RISK_WEIGHT,
            ClassificationLabel::CorporateLargeLowRisk,
            format!("Large low-risk corporate ⇒ {CORPORATE_LARGE_LOW_RISK_WEIGHT}%"),
        ),
        SpecializedFinancing::None if info.sme => ClassificationResult::new(
            CORPORATE_SME_WEIGHT,
            ClassificationLabel::CorporateSme,
            format!("Small or medium-sized enterprise ⇒ {CORPORATE_SME_WEIGHT}%"),
        ),
        SpecializedFinancing::None => ClassificationResult::new(
            CORPORATE_WEIGHT,
            ClassificationLabel::Corporate,
            format!("Non-financial corporate ⇒ {CORPORATE_WEIGHT}%"),
        ),
    };
    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use capital_core::types::ProductCategory;

    fn exposure(counterparty: CounterpartyCategory) -> Exposure {
        Exposure::new(ProductCategory::Loan, counterparty)
    }

    #[test]
    fn test_domestic_sovereign_is_zero() {
        let r = sovereign(&exposure(CounterpartyCategory::DomesticSovereign)).unwrap();
        assert_eq!(r.weight, 0.0);
    }

    #[test]
    fn test_foreign_sovereign_absent_rating_is_unrated_bucket() {
        let r = sovereign(&exposure(CounterpartyCategory::ForeignSovereign)).unwrap();
        assert_eq!(r.weight, 100.0);
        assert!(r.trail[0].contains("unrated"));
    }

    #[test]
    fn test_foreign_sovereign_below_b_minus() {
        let mut e = exposure(CounterpartyCategory::ForeignSovereign);
        e.sovereign.rating = Some(SovereignRating::BelowBMinus);
        assert_eq!(sovereign(&e).unwrap().weight, 150.0);
    }

    #[test]
    fn test_multilateral_listed_and_unlisted() {
        let mut e = exposure(CounterpartyCategory::Multilateral);
        assert_eq!(sovereign(&e).unwrap().weight, 50.0);
        e.sovereign.multilateral_rating = Some(MultilateralRating::APlusToAMinus);
        assert_eq!(sovereign(&e).unwrap().weight, 30.0);
        e.sovereign.multilateral_listed = true;
        assert_eq!(sovereign(&e).unwrap().weight, 0.0);
    }

    #[test]
    fn test_listed_flag_preempts_foreign_sovereign_rating() {
        let mut e = exposure(CounterpartyCategory::ForeignSovereign);
        e.sovereign.rating = Some(SovereignRating::BelowBMinus);
        e.sovereign.multilateral_listed = true;
        let r = sovereign(&e).unwrap();
        assert_eq!(r.weight, 0.0);
        assert_eq!(r.label, ClassificationLabel::Multilateral);
        assert_eq!(r.trail, vec!["Listed multilateral organisation ⇒ 0%".to_string()]);
    }

    #[test]
    fn test_listed_flag_does_not_touch_domestic_sovereign() {
        let mut e = exposure(CounterpartyCategory::DomesticSovereign);
        e.sovereign.multilateral_listed = true;
        let r = sovereign(&e).unwrap();
        assert_eq!(r.weight, 0.0);
        assert_eq!(r.label, ClassificationLabel::DomesticSovereign);
    }

    #[test]
    fn test_public_sector_rating_is_informational() {
        let mut e = exposure(CounterpartyCategory::PublicSector);
        e.public_sector.kind = PublicSectorKind::Municipality;
        e.public_sector.rating = Some(SovereignRating::AaaToAaMinus);
        let r = public_sector(&e).unwrap();
        assert_eq!(r.weight, 100.0);
        assert_eq!(r.label, ClassificationLabel::PublicSectorMunicipality);
        assert_eq!(r.trail.len(), 2);
    }

    #[test]
    fn test_institution_trade_finance_short_circuits() {
        let mut e = exposure(CounterpartyCategory::FinancialInstitution);
        e.institution.trade_finance_up_to_1_year = true;
        e.institution.tenor_up_to_90_days = true;
        e.institution.tier1_high = true;
        e.institution.leverage_ratio_high = true;
        assert_eq!(financial_institution(&e).unwrap().weight, 20.0);
        e.institution.tier = InstitutionTier::B;
        assert_eq!(financial_institution(&e).unwrap().weight, 50.0);
    }

    #[test]
    fn test_institution_minimum_of_candidates() {
        let mut e = exposure(CounterpartyCategory::FinancialInstitution);
        e.institution.tenor_up_to_90_days = false;
        assert_eq!(financial_institution(&e).unwrap().weight, 40.0);
        e.institution.tier1_high = true;
        e.institution.leverage_ratio_high = true;
        assert_eq!(financial_institution(&e).unwrap().weight, 30.0);
        e.institution.tenor_up_to_90_days = true;
        e.institution.netting_eligible = true;
        let r = financial_institution(&e).unwrap();
        assert_eq!(r.weight, 20.0);
        assert!(r.trail[0].contains("eligible netting 40%"));
    }

    #[test]
    fn test_institution_b_ignores_strong_capital() {
        let mut e = exposure(CounterpartyCategory::FinancialInstitution);
        e.institution.tier = InstitutionTier::B;
        e.institution.tier1_high = true;
        e.institution.leverage_ratio_high = true;
        assert_eq!(financial_institution(&e).unwrap().weight, 75.0);
    }

    #[test]
    fn test_institution_c_is_flat() {
        let mut e = exposure(CounterpartyCategory::FinancialInstitution);
        e.institution.tier = InstitutionTier::C;
        e.institution.trade_finance_up_to_1_year = true;
        assert_eq!(financial_institution(&e).unwrap().weight, 150.0);
    }

    #[test]
    fn test_retail_ladder() {
        let mut e = exposure(CounterpartyCategory::Individual);
        assert_eq!(retail(&e).unwrap().weight, 100.0);
        e.retail.transactor = true;
        assert_eq!(
            retail(&e).unwrap().label,
            ClassificationLabel::IndividualNonRetail
        );
        e.retail.eligible = true;
        assert_eq!(retail(&e).unwrap().weight, 45.0);
        e.retail.transactor = false;
        assert_eq!(retail(&e).unwrap().weight, 75.0);
        e.retail.no_draw_360_days = true;
        assert_eq!(retail(&e).unwrap().weight, 45.0);
    }

    #[test]
    fn test_payroll_tenor_threshold_is_strict() {
        let mut e = exposure(CounterpartyCategory::Individual);
        e.retail.eligible = true;
        e.retail.payroll_tenor_years = Some(5.0);
        assert_eq!(retail(&e).unwrap().weight, 75.0);
        e.retail.payroll_tenor_years = Some(5.5);
        let r = retail(&e).unwrap();
        assert_eq!(r.weight, 150.0);
        assert_eq!(r.label, ClassificationLabel::PayrollLongTenor);
    }

    #[test]
    fn test_specialised_financing_beats_size() {
        let mut e = exposure(CounterpartyCategory::Corporate);
        e.corporate.large_low_risk = true;
        e.corporate.sme = true;
        assert_eq!(corporate(&e).unwrap().weight, 65.0);
        e.corporate.large_low_risk = false;
        assert_eq!(corporate(&e).unwrap().weight, 85.0);
        e.corporate.financing = SpecializedFinancing::Commodities;
        assert_eq!(corporate(&e).unwrap().weight, 100.0);
        e.corporate.financing = SpecializedFinancing::Project;
        assert_eq!(corporate(&e).unwrap().weight, 130.0);
        e.corporate.project_phase = Some(ProjectPhase::HighQualityOperational);
        assert_eq!(corporate(&e).unwrap().weight, 80.0);
    }

    #[test]
    fn test_groups_ignore_other_counterparties() {
        let e = exposure(CounterpartyCategory::Corporate);
        assert!(sovereign(&e).is_none());
        assert!(public_sector(&e).is_none());
        assert!(financial_institution(&e).is_none());
        assert!(retail(&e).is_none());
    }
}
