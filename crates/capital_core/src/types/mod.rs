//! Input schema, currency, label and weight types.
//!
//! This module provides:
//! - `exposure`: The closed `Exposure` record and its attribute bags
//! - `currency`: Currency codes used for mismatch and haircut checks
//! - `label`: Classification labels produced by the classifier
//! - `weight`: Regulatory risk-weight bounds and clamping
//! - `error`: Structured error types for parsing and validation
//!
//! # Re-exports
//!
//! For convenience, commonly used types are re-exported at this module level.

pub mod currency;
pub mod error;
pub mod exposure;
pub mod label;
pub mod weight;

pub use currency::Currency;
pub use error::{CurrencyError, ExposureError};
pub use exposure::{
    CcfKind, CollateralKind, CollateralPosting, CorporateInfo, CounterpartyCategory, CrmInfo,
    DefaultInfo, DetailedCcf, EquityTier, Exposure, ExposureAmounts, FinancialInstitutionInfo,
    FloorInfo, FundApproach, FundInfo, FundMandate, InstitutionTier, MultilateralRating,
    OtherAssetKind, ProductCategory, ProjectPhase, PropertyKind, PublicSectorInfo,
    PublicSectorKind, RealEstateInfo, RetailInfo, SovereignInfo, SovereignRating, SpecialInfo,
    SpecialTier, SpecializedFinancing,
};
pub use label::ClassificationLabel;
pub use weight::{clamp_risk_weight, MAX_RISK_WEIGHT, MIN_RISK_WEIGHT};
