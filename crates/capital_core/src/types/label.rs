//! Classification labels.
//!
//! The classifier tags every exposure with exactly one label alongside its
//! base weight. Labels are stable snake_case identifiers; the adjustment
//! pipeline keys the currency-mismatch rule on them.

use std::fmt;

/// Classification tag attached to a base risk weight.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ClassificationLabel {
    /// Defaulted, provision at or above 50%
    DefaultHighProvision,
    /// Defaulted, provision between 20% and 50%
    DefaultMediumProvision,
    /// Defaulted, provision below 20%
    DefaultLowProvision,
    /// Cash
    Cash,
    /// Gold
    Gold,
    /// Listed equity holding
    ListedEquity,
    /// Unlisted equity holding
    UnlistedEquity,
    /// Fixed asset
    FixedAsset,
    /// Other asset
    OtherAsset,
    /// Negative equity adjustment
    NegativeEquityAdjustment,
    /// Subordinated instrument
    Subordinated,
    /// Equity participation
    Equity,
    /// Tax credit
    TaxCredit,
    /// Court-ordered receivables
    Receivables,
    /// Domestic sovereign
    DomesticSovereign,
    /// Multilateral organisation
    Multilateral,
    /// Foreign sovereign
    ForeignSovereign,
    /// Public sector: state
    PublicSectorState,
    /// Public sector: municipality
    PublicSectorMunicipality,
    /// Public sector: federal district
    PublicSectorFederalDistrict,
    /// Public sector: public-service provider
    PublicSectorServiceProvider,
    /// Public sector: state-owned company
    PublicSectorStateOwned,
    /// Financial institution
    FinancialInstitution,
    /// Real estate under construction, contract before the cutoff
    ConstructionPreCutoff,
    /// Real estate under construction, contract after the cutoff
    ConstructionPostCutoff,
    /// Residential mortgage, no cash-flow dependency
    ResidentialMortgage,
    /// Residential mortgage, cash-flow dependent
    ResidentialMortgageDependent,
    /// Non-residential real estate, cash-flow dependent
    NonResidentialDependent,
    /// Non-residential real estate, no cash-flow dependency
    NonResidentialIndependent,
    /// Payroll loan with tenor over five years
    PayrollLongTenor,
    /// Retail transactor / undrawn line
    RetailTransactor,
    /// Eligible retail
    RetailEligible,
    /// Natural person outside retail
    IndividualNonRetail,
    /// Corporate project finance
    CorporateProjectFinance,
    /// Corporate object / commodities finance
    CorporateSpecialized,
    /// Large low-risk corporate
    CorporateLargeLowRisk,
    /// Small or medium-sized enterprise
    CorporateSme,
    /// Other corporate
    Corporate,
    /// Fund weighted by look-through
    FundLookThrough,
    /// Fund with equity mandate
    FundEquityMandate,
    /// Fund with fixed-income mandate
    FundFixedIncomeMandate,
    /// Fund with mixed mandate
    FundMixedMandate,
    /// Fund with another mandate
    FundOtherMandate,
    /// Fund without look-through or mandate
    FundConservative,
    /// Nothing matched
    Unclassified,
}

impl ClassificationLabel {
    /// Returns the stable identifier.
    pub fn as_str(&self) -> &'static str {
        use ClassificationLabel::*;
        match self {
            DefaultHighProvision => "default_high_provision",
            DefaultMediumProvision => "default_medium_provision",
            DefaultLowProvision => "default_low_provision",
            Cash => "cash",
            Gold => "gold",
            ListedEquity => "listed_equity",
            UnlistedEquity => "unlisted_equity",
            FixedAsset => "fixed_asset",
            OtherAsset => "other_asset",
            NegativeEquityAdjustment => "negative_equity_adjustment",
            Subordinated => "subordinated",
            Equity => "equity",
            TaxCredit => "tax_credit",
            Receivables => "receivables",
            DomesticSovereign => "domestic_sovereign",
            Multilateral => "multilateral",
            ForeignSovereign => "foreign_sovereign",
            PublicSectorState => "public_sector_state",
            PublicSectorMunicipality => "public_sector_municipality",
            PublicSectorFederalDistrict => "public_sector_federal_district",
            PublicSectorServiceProvider => "public_sector_service_provider",
            PublicSectorStateOwned => "public_sector_state_owned",
            FinancialInstitution => "financial_institution",
            ConstructionPreCutoff => "construction_pre_cutoff",
            ConstructionPostCutoff => "construction_post_cutoff",
            ResidentialMortgage => "residential_mortgage",
            ResidentialMortgageDependent => "residential_mortgage_dependent",
            NonResidentialDependent => "non_residential_dependent",
            NonResidentialIndependent => "non_residential_independent",
            PayrollLongTenor => "payroll_long_tenor",
            RetailTransactor => "retail_transactor",
            RetailEligible => "retail_eligible",
            IndividualNonRetail => "individual_non_retail",
            CorporateProjectFinance => "corporate_project_finance",
            CorporateSpecialized => "corporate_specialized",
            CorporateLargeLowRisk => "corporate_large_low_risk",
            CorporateSme => "corporate_sme",
            Corporate => "corporate",
            FundLookThrough => "fund_look_through",
            FundEquityMandate => "fund_equity_mandate",
            FundFixedIncomeMandate => "fund_fixed_income_mandate",
            FundMixedMandate => "fund_mixed_mandate",
            FundOtherMandate => "fund_other_mandate",
            FundConservative => "fund_conservative",
            Unclassified => "unclassified",
        }
    }

    /// Labels subject to the currency-mismatch scaling.
    #[inline]
    pub fn is_currency_mismatch_eligible(&self) -> bool {
        matches!(
            self,
            ClassificationLabel::RetailEligible
                | ClassificationLabel::RetailTransactor
                | ClassificationLabel::ResidentialMortgage
                | ClassificationLabel::ResidentialMortgageDependent
        )
    }
}

impl fmt::Display for ClassificationLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
