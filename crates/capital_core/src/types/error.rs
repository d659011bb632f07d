//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency parsing
//! - `ExposureError`: Schema defects reported by [`crate::validation`]
//!
//! The weighting engine itself never returns these: it recovers locally and
//! records the recovery in its audit trail. They exist for calling layers that
//! want to reject a record before evaluating it.

use thiserror::Error;

/// Currency-related errors.
///
/// # Examples
/// ```
/// use capital_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CurrencyError {
    /// Unknown currency code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

/// Exposure schema defects.
///
/// # Variants
/// - `NonFinite`: A numeric field is NaN or infinite
/// - `NegativeAmount`: A monetary amount is below zero
/// - `LtvOutOfRange`: Loan-to-value outside the schema range
/// - `ProvisionOutOfRange`: Provision percent outside [0, 100]
/// - `CcfOutOfRange`: Custom conversion factor outside [0, 1]
/// - `NegativeTenor`: Payroll-loan tenor below zero
/// - `CollateralValue`: A collateral posting carries an invalid value
///
/// # Examples
/// ```
/// use capital_core::types::ExposureError;
///
/// let err = ExposureError::LtvOutOfRange(250.0);
/// assert_eq!(format!("{}", err), "LTV out of range [0, 200]: 250");
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ExposureError {
    /// A numeric field is NaN or infinite.
    #[error("Non-finite value in field '{field}'")]
    NonFinite {
        /// Field name
        field: &'static str,
    },

    /// A monetary amount is below zero.
    #[error("Negative amount in field '{field}': {value}")]
    NegativeAmount {
        /// Field name
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// Loan-to-value outside [0, 200].
    #[error("LTV out of range [0, 200]: {0}")]
    LtvOutOfRange(f64),

    /// Provision percent outside [0, 100].
    #[error("Provision percent out of range [0, 100]: {0}")]
    ProvisionOutOfRange(f64),

    /// Custom credit-conversion factor outside [0, 1].
    #[error("Custom CCF out of range [0, 1]: {0}")]
    CcfOutOfRange(f64),

    /// Payroll-loan tenor below zero.
    #[error("Payroll-loan tenor must be non-negative: {0}")]
    NegativeTenor(f64),

    /// Collateral posting with a negative or non-finite market value.
    #[error("Collateral posting {index} has invalid market value: {value}")]
    CollateralValue {
        /// Position of the posting in the list
        index: usize,
        /// Offending value
        value: f64,
    },
}
