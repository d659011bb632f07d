//! Credit-conversion factors, as fractions of the undrawn limit.

use crate::types::{CcfKind, DetailedCcf};

/// Standard CCF by selector.
///
/// ```
/// use capital_core::tables::standard_ccf;
/// use capital_core::types::CcfKind;
///
/// assert_eq!(standard_ccf(CcfKind::RevocableCommitment), 0.1);
/// assert_eq!(standard_ccf(CcfKind::Other), 1.0);
/// ```
pub fn standard_ccf(kind: CcfKind) -> f64 {
    match kind {
        CcfKind::IrrevocableCommitment => 0.5,
        CcfKind::RevocableCommitment => 0.1,
        CcfKind::GuaranteeIssued => 1.0,
        CcfKind::TradeFinance => 0.2,
        CcfKind::Other => 1.0,
    }
}

/// Finer-grained CCF by operation type.
pub fn detailed_ccf(kind: DetailedCcf) -> f64 {
    match kind {
        DetailedCcf::IrrevocableUpTo1Year => 0.2,
        DetailedCcf::IrrevocableOver1Year => 0.5,
        DetailedCcf::RevocableUnconditional => 0.1,
        DetailedCcf::RevocableConditional => 0.0,
        DetailedCcf::SuretyGuarantee => 1.0,
        DetailedCcf::LetterOfCredit => 0.2,
        DetailedCcf::PerformanceGuarantee => 0.5,
        DetailedCcf::SecuritisationLiquidityLine => 0.5,
        DetailedCcf::SecuritisationCreditEnhancement => 1.0,
        DetailedCcf::RetailCardRevocable => 0.1,
        DetailedCcf::RetailCardIrrevocable => 0.5,
        DetailedCcf::RetailOverdraft => 0.1,
    }
}

/// Revolving card limit of an eligible retail obligor.
pub fn retail_card_ccf() -> f64 {
    detailed_ccf(DetailedCcf::RetailCardRevocable)
}

/// Overdraft limit of an eligible retail obligor.
pub fn retail_overdraft_ccf() -> f64 {
    detailed_ccf(DetailedCcf::RetailOverdraft)
}
