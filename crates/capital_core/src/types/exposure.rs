//! The closed exposure input schema.
//!
//! An [`Exposure`] describes one credit exposure: what was sold
//! ([`ProductCategory`]), to whom ([`CounterpartyCategory`]), in which
//! currencies, plus one attribute bag per counterparty or product family.
//! Only the bags relevant to the exposure's categories are read; the rest keep
//! their neutral defaults.
//!
//! Every field is either an enumerated category, a flag, or a number. There is
//! no free-form text, so a record that deserializes is a record the engine can
//! evaluate.
//!
//! # Examples
//!
//! ```
//! use capital_core::types::{
//!     CounterpartyCategory, Currency, Exposure, ExposureAmounts, CcfKind, ProductCategory,
//! };
//!
//! let exposure = Exposure::new(ProductCategory::CreditLine, CounterpartyCategory::Individual)
//!     .with_currencies(Currency::USD, Currency::BRL)
//!     .with_amounts(ExposureAmounts::new(10_000.0, 5_000.0, CcfKind::RevocableCommitment));
//!
//! assert!(exposure.has_currency_mismatch());
//! assert!(exposure.amounts.is_some());
//! ```

use super::currency::Currency;

/// What kind of product the exposure is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProductCategory {
    /// Plain loan
    #[default]
    Loan,
    /// Credit line / overdraft limit
    CreditLine,
    /// Credit card
    Card,
    /// Derivative (counterparty credit risk)
    Derivative,
    /// Guarantee issued by the bank
    GuaranteeIssued,
    /// Real-estate financing
    RealEstateLoan,
    /// Investment fund quota
    Fund,
    /// Generic bucket for other assets (cash, gold, equities, fixed assets)
    Other,
}

/// Who the counterparty is.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CounterpartyCategory {
    /// Domestic sovereign or central bank
    DomesticSovereign,
    /// Foreign sovereign
    ForeignSovereign,
    /// Multilateral organisation or development bank
    Multilateral,
    /// Financial institution
    FinancialInstitution,
    /// Non-financial company
    #[default]
    Corporate,
    /// Natural person
    Individual,
    /// Sub-national public sector entity
    PublicSector,
}

/// Rating buckets of the sovereign table.
///
/// `Unrated` is a bucket of its own and is distinct from `BelowBMinus`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SovereignRating {
    /// AAA to AA-
    AaaToAaMinus,
    /// A+ to A-
    APlusToAMinus,
    /// BBB+ to BBB-
    BbbPlusToBbbMinus,
    /// BB+ to B-
    BbPlusToBMinus,
    /// Below B-
    BelowBMinus,
    /// No external rating
    Unrated,
}

/// Rating buckets of the (unlisted) multilateral table.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MultilateralRating {
    /// AAA to AA-
    AaaToAaMinus,
    /// A+ to A-
    APlusToAMinus,
    /// BBB+ to BBB-
    BbbPlusToBbbMinus,
    /// BB+ to B-
    BbPlusToBMinus,
    /// Below B-
    BelowBMinus,
    /// No external rating
    Unrated,
}

/// Sovereign and multilateral attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SovereignInfo {
    /// Rating bucket of a foreign sovereign; absent means unrated
    pub rating: Option<SovereignRating>,
    /// Multilateral organisation listed for the 0% treatment
    pub multilateral_listed: bool,
    /// Rating bucket of an unlisted multilateral; absent means unrated
    pub multilateral_rating: Option<MultilateralRating>,
}

/// Financial-institution category.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstitutionTier {
    /// Category A
    #[default]
    A,
    /// Category B
    B,
    /// Category C
    C,
}

/// Financial-institution attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FinancialInstitutionInfo {
    /// Institution category
    pub tier: InstitutionTier,
    /// Original tenor of at most 90 days
    pub tenor_up_to_90_days: bool,
    /// Tier 1 ratio at or above 14%
    pub tier1_high: bool,
    /// Leverage ratio at or above 5%
    pub leverage_ratio_high: bool,
    /// Trade-finance operation of at most one year
    pub trade_finance_up_to_1_year: bool,
    /// Covered by an eligible netting agreement
    pub netting_eligible: bool,
}

impl FinancialInstitutionInfo {
    /// Both capital conditions hold jointly.
    #[inline]
    pub fn strong_capital(&self) -> bool {
        self.tier1_high && self.leverage_ratio_high
    }
}

/// Kind of specialised financing.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecializedFinancing {
    /// Not specialised financing
    #[default]
    None,
    /// Object finance
    Object,
    /// Commodities finance
    Commodities,
    /// Project finance
    Project,
}

/// Phase of a project-finance exposure.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ProjectPhase {
    /// Greenfield / construction
    PreOperational,
    /// Operational
    Operational,
    /// Operational, high quality
    HighQualityOperational,
}

/// Corporate attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CorporateInfo {
    /// Large, low-risk company
    pub large_low_risk: bool,
    /// Small or medium-sized enterprise
    pub sme: bool,
    /// Specialised financing kind
    pub financing: SpecializedFinancing,
    /// Project-finance phase; absent is read as pre-operational
    pub project_phase: Option<ProjectPhase>,
}

/// Retail / natural-person attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RetailInfo {
    /// Meets the regulatory retail criteria
    pub eligible: bool,
    /// Transactor (balance repaid in full each cycle)
    pub transactor: bool,
    /// Credit line without drawings over the last 360 days
    pub no_draw_360_days: bool,
    /// Payroll-deducted loan tenor, in years
    pub payroll_tenor_years: Option<f64>,
}

/// Kind of real-estate collateral.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PropertyKind {
    /// Residential property
    #[default]
    Residential,
    /// Non-residential property
    NonResidential,
}

/// Real-estate attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RealEstateInfo {
    /// Residential or non-residential
    pub kind: PropertyKind,
    /// Repayment depends on cash flows generated by the property
    pub cash_flow_dependent: bool,
    /// Loan-to-value, in percent
    pub ltv: f64,
    /// Guarantee meets the eligibility requirements
    pub guarantee_eligible: bool,
    /// Property construction is completed
    pub completed: bool,
    /// Under-construction contract signed up to 2023
    pub contracted_through_2023: bool,
    /// Under-construction contract signed from 2024 on
    pub contracted_from_2024: bool,
}

/// Fund weighting approach.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FundApproach {
    /// No information about the fund
    #[default]
    NoInformation,
    /// Look-through to underlying assets
    LookThrough,
    /// Fund regulation only
    Regulation,
    /// Mandate-based
    Mandate,
}

/// Fund mandate style.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FundMandate {
    /// Equity fund
    Equity,
    /// Fixed-income fund
    FixedIncome,
    /// Mixed fund
    Mixed,
    /// Any other mandate
    Other,
}

/// Fund attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FundInfo {
    /// Weighting approach
    pub approach: FundApproach,
    /// Informed weighted-average risk weight of the underlying assets, in percent
    pub look_through_weight: Option<f64>,
    /// Mandate style
    pub mandate: Option<FundMandate>,
}

/// Default / impairment attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DefaultInfo {
    /// Exposure is in default / problem asset
    pub in_default: bool,
    /// Provisioned loss, in percent of the drawn balance
    pub provision_percent: f64,
}

/// Equity participation tier.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum EquityTier {
    /// No equity participation
    #[default]
    None,
    /// Significant participation not deducted (250%)
    Significant,
    /// Excess participation (1250%)
    Excess,
}

/// Tier shared by tax credits and receivables.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SpecialTier {
    /// Not applicable
    #[default]
    None,
    /// 100%
    Weight100,
    /// 600%
    Weight600,
    /// 1250%
    Weight1250,
}

/// Special regulatory overrides.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpecialInfo {
    /// Negative equity adjustment
    pub negative_equity_adjustment: bool,
    /// Subordinated instrument
    pub subordinated: bool,
    /// Equity participation tier
    pub equity: EquityTier,
    /// Tax-credit tier
    pub tax_credit: SpecialTier,
    /// Court-ordered receivables tier
    pub receivables: SpecialTier,
}

/// Sub-national public sector entity kind.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PublicSectorKind {
    /// State
    #[default]
    State,
    /// Municipality
    Municipality,
    /// Federal district
    FederalDistrict,
    /// Public-service provider
    ServiceProvider,
    /// State-owned company
    StateOwned,
}

/// Public-sector attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PublicSectorInfo {
    /// Entity kind
    pub kind: PublicSectorKind,
    /// External rating; informational only
    pub rating: Option<SovereignRating>,
}

/// Sub-type of the generic "other" product bucket.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum OtherAssetKind {
    /// Cash
    Cash,
    /// Gold
    Gold,
    /// Listed equity
    ListedEquity,
    /// Unlisted equity
    UnlistedEquity,
    /// Fixed asset
    FixedAsset,
    /// Anything else
    Other,
}

/// Kind of financial collateral.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CollateralKind {
    /// Demand deposit held at the bank
    DemandDeposit,
    /// Savings deposit held at the bank
    SavingsDeposit,
    /// Gold
    Gold,
    /// Sovereign bond in local currency
    SovereignBond,
    /// Senior private debt security
    SeniorPrivateBond,
    /// Any other collateral
    Other,
}

impl CollateralKind {
    /// Collateral kinds that are always eligible for mitigation.
    #[inline]
    pub fn is_always_eligible(&self) -> bool {
        matches!(
            self,
            CollateralKind::DemandDeposit
                | CollateralKind::SavingsDeposit
                | CollateralKind::Gold
                | CollateralKind::SovereignBond
        )
    }
}

/// One collateral posting.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollateralPosting {
    /// Collateral kind
    pub kind: CollateralKind,
    /// Currency of the collateral
    pub currency: Currency,
    /// Market value
    pub value: f64,
}

impl CollateralPosting {
    /// Creates a new posting.
    pub fn new(kind: CollateralKind, currency: Currency, value: f64) -> Self {
        Self {
            kind,
            currency,
            value,
        }
    }
}

/// Credit-risk mitigation attributes.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CrmInfo {
    /// Substitute the guarantor's weight
    pub guarantor_substitution: bool,
    /// Guarantor risk weight, in percent
    pub guarantor_weight: Option<f64>,
    /// Recognised credit insurance
    pub credit_insurance: bool,
    /// Insurer risk weight, in percent
    pub insurer_weight: Option<f64>,
    /// Eligible netting agreement
    pub netting_agreement: bool,
    /// Financial collateral postings
    pub collateral: Vec<CollateralPosting>,
    /// Collateral matures before the exposure
    pub maturity_mismatch: bool,
}

/// Regulatory floor flags.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FloorInfo {
    /// Cash held outside the bank's direct possession
    pub cash_outside_custody: bool,
}

/// Standard credit-conversion factor selector.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum CcfKind {
    /// Irrevocable commitment
    IrrevocableCommitment,
    /// Revocable commitment
    RevocableCommitment,
    /// Guarantee issued
    GuaranteeIssued,
    /// Trade finance up to one year
    TradeFinance,
    /// Any other off-balance item
    #[default]
    Other,
}

/// Finer-grained credit-conversion factor selector.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DetailedCcf {
    /// Irrevocable commitment up to one year
    IrrevocableUpTo1Year,
    /// Irrevocable commitment over one year
    IrrevocableOver1Year,
    /// Unconditionally revocable commitment
    RevocableUnconditional,
    /// Conditionally revocable commitment
    RevocableConditional,
    /// Surety / aval
    SuretyGuarantee,
    /// Letter of credit
    LetterOfCredit,
    /// Performance guarantee
    PerformanceGuarantee,
    /// Securitisation liquidity line
    SecuritisationLiquidityLine,
    /// Securitisation credit enhancement
    SecuritisationCreditEnhancement,
    /// Revocable retail card limit
    RetailCardRevocable,
    /// Irrevocable retail card limit
    RetailCardIrrevocable,
    /// Retail overdraft limit
    RetailOverdraft,
}

/// Monetary amounts for exposure-at-default.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ExposureAmounts {
    /// Drawn balance
    pub drawn_balance: f64,
    /// Undrawn limit
    pub undrawn_limit: f64,
    /// Standard CCF selector
    pub ccf: CcfKind,
    /// Optional finer CCF selector
    pub detailed_ccf: Option<DetailedCcf>,
    /// Optional manual CCF, as a fraction in [0, 1]
    pub custom_ccf: Option<f64>,
}

impl ExposureAmounts {
    /// Creates amounts with a standard CCF selector.
    pub fn new(drawn_balance: f64, undrawn_limit: f64, ccf: CcfKind) -> Self {
        Self {
            drawn_balance,
            undrawn_limit,
            ccf,
            detailed_ccf: None,
            custom_ccf: None,
        }
    }

    /// Sets the detailed CCF selector.
    pub fn with_detailed_ccf(mut self, detailed: DetailedCcf) -> Self {
        self.detailed_ccf = Some(detailed);
        self
    }

    /// Sets a manual CCF.
    pub fn with_custom_ccf(mut self, factor: f64) -> Self {
        self.custom_ccf = Some(factor);
        self
    }
}

/// One credit exposure.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Exposure {
    /// Product category
    pub product: ProductCategory,
    /// Counterparty category
    pub counterparty: CounterpartyCategory,
    /// Currency of the exposure
    pub exposure_currency: Currency,
    /// Currency of the obligor's income
    pub income_currency: Currency,
    /// Currency hedge covers at least 90% of the exposure
    pub hedge_90: bool,
    /// Sovereign / multilateral attributes
    pub sovereign: SovereignInfo,
    /// Financial-institution attributes
    pub institution: FinancialInstitutionInfo,
    /// Corporate attributes
    pub corporate: CorporateInfo,
    /// Retail attributes
    pub retail: RetailInfo,
    /// Real-estate attributes
    pub real_estate: RealEstateInfo,
    /// Fund attributes
    pub fund: FundInfo,
    /// Default / impairment attributes
    pub default_status: DefaultInfo,
    /// Special overrides
    pub special: SpecialInfo,
    /// Public-sector attributes
    pub public_sector: PublicSectorInfo,
    /// Sub-type under the generic "other" product
    pub other_asset: Option<OtherAssetKind>,
    /// Credit-risk mitigation attributes
    pub crm: CrmInfo,
    /// Floor flags
    pub floors: FloorInfo,
    /// Monetary amounts; absent means weight-only evaluation
    pub amounts: Option<ExposureAmounts>,
}

impl Exposure {
    /// Creates an exposure with neutral attribute bags.
    pub fn new(product: ProductCategory, counterparty: CounterpartyCategory) -> Self {
        Self {
            product,
            counterparty,
            ..Default::default()
        }
    }

    /// Sets the exposure and income currencies.
    pub fn with_currencies(mut self, exposure: Currency, income: Currency) -> Self {
        self.exposure_currency = exposure;
        self.income_currency = income;
        self
    }

    /// Attaches monetary amounts.
    pub fn with_amounts(mut self, amounts: ExposureAmounts) -> Self {
        self.amounts = Some(amounts);
        self
    }

    /// Exposure and income currencies differ and the hedge covers less than 90%.
    #[inline]
    pub fn has_currency_mismatch(&self) -> bool {
        self.exposure_currency != self.income_currency && !self.hedge_90
    }
}
