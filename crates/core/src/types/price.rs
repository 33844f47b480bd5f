//! Type-safe price representation using decimal arithmetic.
//!
//! Prices are stored as plain JSON numbers (`"price": 2500.0`) so the persisted
//! catalog stays readable by any JSON tooling. Arithmetic happens on
//! [`Decimal`], never on floats.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

/// Errors that can occur when parsing a [`Price`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    /// The input string is empty.
    #[error("price cannot be empty")]
    Empty,
    /// The input is not a decimal number.
    #[error("price is not a number: {0}")]
    NotANumber(String),
    /// The amount is zero or negative.
    #[error("price must be positive")]
    NotPositive,
}

/// A positive price in the shop's currency unit (rubles).
///
/// ## Examples
///
/// ```
/// use clay_market_core::Price;
///
/// let price = Price::parse("2500").unwrap();
/// assert_eq!(price.to_string(), "2500 ₽");
///
/// assert!(Price::parse("").is_err());
/// assert!(Price::parse("0").is_err());
/// assert!(Price::parse("cheap").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Currency symbol used for display.
    pub const SYMBOL: &'static str = "₽";

    /// Create a price from a decimal amount.
    ///
    /// # Errors
    ///
    /// Returns `PriceError::NotPositive` if the amount is zero or negative.
    pub fn new(amount: Decimal) -> Result<Self, PriceError> {
        if amount <= Decimal::ZERO {
            return Err(PriceError::NotPositive);
        }
        Ok(Self(amount))
    }

    /// Parse a price from user input such as `"2500"` or `"1999.90"`.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty, not a number, or not positive.
    pub fn parse(s: &str) -> Result<Self, PriceError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PriceError::Empty);
        }
        let amount: Decimal = s
            .parse()
            .map_err(|_| PriceError::NotANumber(s.to_owned()))?;
        Self::new(amount)
    }

    /// Create a price from a whole number of currency units.
    ///
    /// Used for the built-in catalog; callers with user input should use
    /// [`Price::parse`].
    #[must_use]
    pub fn from_units(units: u32) -> Self {
        Self(Decimal::from(units.max(1)))
    }

    /// The decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price multiplied by a quantity.
    #[must_use]
    pub fn times(&self, quantity: u32) -> Decimal {
        self.0 * Decimal::from(quantity)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.0.normalize(), Self::SYMBOL)
    }
}

/// Stored prices go through [`Price::new`], so a zero or negative amount is
/// a deserialization error.
impl<'de> Deserialize<'de> for Price {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::new(amount).map_err(serde::de::Error::custom)
    }
}

impl std::str::FromStr for Price {
    type Err = PriceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
