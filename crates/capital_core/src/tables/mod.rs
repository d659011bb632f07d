//! Regulatory rate tables.
//!
//! Static, read-only lookups keyed by enumerated buckets. Nothing in this
//! module holds state or makes decisions beyond a table lookup; the cascade
//! that decides *which* table applies lives in `capital_engine`.
//!
//! - `weights`: risk weights by counterparty, product and special treatment
//! - `ccf`: credit-conversion factors for exposure-at-default
//! - `haircuts`: comprehensive-approach collateral haircuts

pub mod ccf;
pub mod haircuts;
pub mod weights;

pub use ccf::{detailed_ccf, retail_card_ccf, retail_overdraft_ccf, standard_ccf};
pub use haircuts::{collateral_haircut, exposure_haircut, fx_haircut};
pub use weights::*;
