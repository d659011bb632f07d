//! # capital_engine: Standardised Credit-Risk Weighting Engine
//!
//! ## Layer 2 (Engine) Role
//!
//! Turns one [`Exposure`](capital_core::types::Exposure) into one
//! [`CapitalResult`]:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                 CapitalCalculator                    │
//! ├──────────────────────────────────────────────────────┤
//! │  classifier/   ordered rule groups, first match wins │
//! │  adjustments   mismatch → CRM → floor → clamp        │
//! │  ead           CCF resolution, provision deduction   │
//! │  collateral    comprehensive-approach haircuts       │
//! │  calculator    sequencing, audit trail, RWA          │
//! └──────────────────────────────────────────────────────┘
//!          ↓
//! ┌──────────────────────────────────────────────────────┐
//! │  capital_core (L1): schema, labels, rate tables      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! Every operation is total. Numeric defects are recovered locally and the
//! recovery is written to the trail; nothing here returns `Result`.
//!
//! ## Example
//!
//! ```
//! use capital_core::types::{CounterpartyCategory, Exposure, ProductCategory};
//! use capital_engine::CapitalCalculator;
//!
//! let mut exposure = Exposure::new(ProductCategory::RealEstateLoan, CounterpartyCategory::Individual);
//! exposure.real_estate.ltv = 55.0;
//! exposure.real_estate.guarantee_eligible = true;
//! exposure.real_estate.completed = true;
//!
//! let result = CapitalCalculator::new().evaluate(&exposure);
//! assert_eq!(result.final_weight, 60.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for result records

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod adjustments;
pub mod calculator;
pub mod classifier;
pub mod collateral;
pub mod ead;

pub use adjustments::{apply_adjustments, AdjustmentResult};
pub use calculator::{CapitalCalculator, CapitalResult};
pub use classifier::{classify, classify_by_counterparty, ClassificationResult, RuleGroup};
pub use collateral::{mitigate, simple_approach_weight, MitigationResult};
pub use ead::{compute_ead, select_ccf, CcfSource, EadResult};
