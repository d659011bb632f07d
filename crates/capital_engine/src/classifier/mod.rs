//! Base risk-weight classification.
//!
//! The classifier is an ordered list of mutually exclusive rule groups
//! ([`CASCADE`]). Each group either claims the exposure, yielding a base
//! weight and a [`ClassificationLabel`], or passes. The first group that
//! claims wins; later groups are never consulted.
//!
//! # Cascade
//!
//! ```text
//!  1. Default          provision tiers, overrides everything
//!  2. OtherAsset       cash, gold, equities, fixed assets ("other" product)
//!  3. SpecialOverride  negative equity, subordination, equity, tax credit, receivables
//!  4. Sovereign        domestic, multilateral, foreign by rating     ┐
//!  5. PublicSector     fixed weight by entity kind                   │ counterparty
//!  6. Institution      trade finance, else minimum of candidates     │ groups
//!  7. RealEstate       construction, LTV ladders, obligor passes     │ (direct
//!  8. Retail           payroll, transactor, eligible, ineligible     │  products
//!  9. Corporate        specialised financing, then size discounts    ┘  only)
//! 10. Fund             look-through, mandate, conservative
//! 11. Derivative       counterparty pass
//!     fallback         conservative 100%
//! ```
//!
//! Counterparty groups only claim direct exposures: fund quotas and
//! derivatives are dispatched by groups 10 and 11.
//!
//! # Second passes
//!
//! Derivatives and some real-estate branches need the obligor's own weight.
//! They get it from [`classify_by_counterparty`], which runs only the
//! counterparty groups and never re-enters the product dispatch, so no
//! second pass can recurse. Second-pass trail lines are appended to the
//! caller's trail behind [`NESTED_PREFIX`].
//!
//! # Example
//!
//! ```
//! use capital_core::types::{ClassificationLabel, CounterpartyCategory, Exposure, ProductCategory};
//! use capital_engine::classifier::classify;
//!
//! let mut exposure = Exposure::new(ProductCategory::Card, CounterpartyCategory::Individual);
//! exposure.retail.eligible = true;
//! exposure.retail.transactor = true;
//!
//! let result = classify(&exposure);
//! assert_eq!(result.weight, 45.0);
//! assert_eq!(result.label, ClassificationLabel::RetailTransactor);
//! ```

mod counterparty;
mod product;
mod real_estate;
mod special;

use capital_core::tables::CONSERVATIVE_WEIGHT;
use capital_core::types::{ClassificationLabel, Exposure, ProductCategory};
use tracing::{debug, trace};

/// Prefix of trail lines produced by a second classification pass.
pub const NESTED_PREFIX: &str = "  └─ ";

/// Base weight, label and the trail lines that justify them.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassificationResult {
    /// Base risk weight, in percent
    pub weight: f64,
    /// Classification tag
    pub label: ClassificationLabel,
    /// Ordered explanation
    pub trail: Vec<String>,
}

impl ClassificationResult {
    /// Creates a result with a single trail line.
    pub fn new(weight: f64, label: ClassificationLabel, note: impl Into<String>) -> Self {
        Self {
            weight,
            label,
            trail: vec![note.into()],
        }
    }

    /// Appends a trail line.
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.trail.push(note.into());
        self
    }

    /// Appends another pass's trail behind [`NESTED_PREFIX`].
    pub(crate) fn with_nested(mut self, nested: &[String]) -> Self {
        self.trail
            .extend(nested.iter().map(|line| format!("{NESTED_PREFIX}{line}")));
        self
    }
}

/// Rule groups of the classification cascade.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RuleGroup {
    /// Default / impairment override
    Default,
    /// Carve-outs under the generic "other" product
    OtherAsset,
    /// Special regulatory overrides
    SpecialOverride,
    /// Sovereigns and multilaterals
    Sovereign,
    /// Sub-national public sector
    PublicSector,
    /// Financial institutions
    FinancialInstitution,
    /// Real-estate secured exposures
    RealEstate,
    /// Retail and natural persons
    Retail,
    /// Non-financial corporates
    Corporate,
    /// Fund quotas
    Fund,
    /// Derivatives (counterparty credit risk)
    Derivative,
}

/// The cascade, in priority order.
pub const CASCADE: [RuleGroup; 11] = [
    RuleGroup::Default,
    RuleGroup::OtherAsset,
    RuleGroup::SpecialOverride,
    RuleGroup::Sovereign,
    RuleGroup::PublicSector,
    RuleGroup::FinancialInstitution,
    RuleGroup::RealEstate,
    RuleGroup::Retail,
    RuleGroup::Corporate,
    RuleGroup::Fund,
    RuleGroup::Derivative,
];

/// Groups consulted by [`classify_by_counterparty`].
pub const COUNTERPARTY_PASS: [RuleGroup; 5] = [
    RuleGroup::Sovereign,
    RuleGroup::PublicSector,
    RuleGroup::FinancialInstitution,
    RuleGroup::Retail,
    RuleGroup::Corporate,
];

impl RuleGroup {
    /// Stable name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            RuleGroup::Default => "default",
            RuleGroup::OtherAsset => "other_asset",
            RuleGroup::SpecialOverride => "special_override",
            RuleGroup::Sovereign => "sovereign",
            RuleGroup::PublicSector => "public_sector",
            RuleGroup::FinancialInstitution => "financial_institution",
            RuleGroup::RealEstate => "real_estate",
            RuleGroup::Retail => "retail",
            RuleGroup::Corporate => "corporate",
            RuleGroup::Fund => "fund",
            RuleGroup::Derivative => "derivative",
        }
    }

    /// Whether the group may claim this product in the top-level cascade.
    fn admits(&self, product: ProductCategory) -> bool {
        match self {
            RuleGroup::Default | RuleGroup::OtherAsset | RuleGroup::SpecialOverride => true,
            RuleGroup::Fund => product == ProductCategory::Fund,
            RuleGroup::Derivative => product == ProductCategory::Derivative,
            _ => is_direct(product),
        }
    }

    /// Runs the group's rules.
    pub fn evaluate(&self, exposure: &Exposure) -> Option<ClassificationResult> {
        match self {
            RuleGroup::Default => special::default_override(exposure),
            RuleGroup::OtherAsset => special::other_asset(exposure),
            RuleGroup::SpecialOverride => special::regulatory_override(exposure),
            RuleGroup::Sovereign => counterparty::sovereign(exposure),
            RuleGroup::PublicSector => counterparty::public_sector(exposure),
            RuleGroup::FinancialInstitution => counterparty::financial_institution(exposure),
            RuleGroup::RealEstate => real_estate::real_estate(exposure),
            RuleGroup::Retail => counterparty::retail(exposure),
            RuleGroup::Corporate => counterparty::corporate(exposure),
            RuleGroup::Fund => product::fund(exposure),
            RuleGroup::Derivative => product::derivative(exposure),
        }
    }
}

/// Exposures held directly against the counterparty.
#[inline]
fn is_direct(product: ProductCategory) -> bool {
    !matches!(product, ProductCategory::Fund | ProductCategory::Derivative)
}

/// Classifies an exposure through the full cascade.
pub fn classify(exposure: &Exposure) -> ClassificationResult {
    run(&CASCADE, exposure, true)
}

/// Classifies by counterparty alone, as if the exposure were a plain loan.
///
/// Product-based groups are not consulted, so a caller inside the cascade
/// can use this without risk of re-entering itself.
pub fn classify_by_counterparty(exposure: &Exposure) -> ClassificationResult {
    run(&COUNTERPARTY_PASS, exposure, false)
}

fn run(groups: &[RuleGroup], exposure: &Exposure, gate_on_product: bool) -> ClassificationResult {
    for group in groups {
        if gate_on_product && !group.admits(exposure.product) {
            trace!(group = group.name(), product = ?exposure.product, "group does not admit product");
            continue;
        }
        match group.evaluate(exposure) {
            Some(result) => {
                debug!(
                    group = group.name(),
                    label = %result.label,
                    weight = result.weight,
                    "rule group matched"
                );
                return result;
            }
            None => trace!(group = group.name(), "rule group passed"),
        }
    }
    ClassificationResult::new(
        CONSERVATIVE_WEIGHT,
        ClassificationLabel::Unclassified,
        format!("No rule matched ⇒ conservative {CONSERVATIVE_WEIGHT}%"),
    )
}

/// Re-classifies the obligor with the real-estate guarantee stripped.
///
/// Works on a fresh copy; the caller's exposure is never touched.
pub(crate) fn obligor_pass(exposure: &Exposure) -> ClassificationResult {
    let mut unsecured = exposure.clone();
    unsecured.real_estate = Default::default();
    if unsecured.product == ProductCategory::RealEstateLoan {
        unsecured.product = ProductCategory::Loan;
    }
    classify_by_counterparty(&unsecured)
}
