//! Currency codes for currency-mismatch and FX-haircut checks.
//!
//! The engine only ever compares currencies for equality, so the set is
//! closed: the major ISO 4217 codes plus a catch-all `Other`.
//!
//! # Examples
//!
//! ```
//! use capital_core::types::currency::Currency;
//!
//! let brl = Currency::BRL;
//! assert_eq!(brl.code(), "BRL");
//!
//! let usd: Currency = "usd".parse().unwrap();
//! assert_ne!(brl, usd);
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// Currency of an exposure, of the obligor's income, or of a collateral posting.
///
/// # Variants
/// - `BRL`: Brazilian Real (reporting currency)
/// - `USD`: United States Dollar
/// - `EUR`: Euro
/// - `GBP`: British Pound Sterling
/// - `JPY`: Japanese Yen
/// - `CHF`: Swiss Franc
/// - `Other`: Any other currency
///
/// Two `Other` values compare equal; callers that need to distinguish two
/// non-listed currencies must map one of them to a listed code.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Brazilian Real
    #[default]
    BRL,
    /// United States Dollar
    USD,
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// Japanese Yen
    JPY,
    /// Swiss Franc
    CHF,
    /// Any currency outside the listed set
    Other,
}

impl Currency {
    /// Returns the three-letter code (`"OTHER"` for the catch-all).
    ///
    /// # Examples
    ///
    /// ```
    /// use capital_core::types::currency::Currency;
    ///
    /// assert_eq!(Currency::EUR.code(), "EUR");
    /// assert_eq!(Currency::Other.code(), "OTHER");
    /// ```
    pub fn code(&self) -> &'static str {
        match self {
            Currency::BRL => "BRL",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
            Currency::CHF => "CHF",
            Currency::Other => "OTHER",
        }
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    /// Parses a currency code (case-insensitive).
    fn from_str(s: &str) -> Result<Self, CurrencyError> {
        match s.trim().to_uppercase().as_str() {
            "BRL" => Ok(Currency::BRL),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            "CHF" => Ok(Currency::CHF),
            "OTHER" => Ok(Currency::Other),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
