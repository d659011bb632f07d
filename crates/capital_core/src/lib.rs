//! # capital_core: Foundation for Standardised Credit-Risk Weighting
//!
//! ## Layer 1 (Foundation) Role
//!
//! capital_core is the bottom layer of the workspace, providing:
//! - The closed exposure input schema (`types::exposure`)
//! - Currency codes (`types::currency`)
//! - Classification labels (`types::label`)
//! - Risk-weight bounds and clamping (`types::weight`)
//! - Error types: `CurrencyError`, `ExposureError` (`types::error`)
//! - Immutable regulatory rate tables (`tables`)
//! - Schema validation for calling layers (`validation`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other workspace crates, with minimal external dependencies:
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use capital_core::tables::{sovereign_weight, residential_ltv_weight};
//! use capital_core::types::{Currency, SovereignRating};
//!
//! // Unrated sovereigns sit in the 100% bucket, not the below-B- bucket
//! assert_eq!(sovereign_weight(SovereignRating::Unrated), 100.0);
//! assert_eq!(sovereign_weight(SovereignRating::BelowBMinus), 150.0);
//!
//! // LTV ladder lookup
//! assert_eq!(residential_ltv_weight(55.0, false), 60.0);
//!
//! let brl: Currency = "brl".parse().unwrap();
//! assert_eq!(brl.code(), "BRL");
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Enable serialisation for the exposure schema and labels

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod tables;
pub mod types;
pub mod validation;
