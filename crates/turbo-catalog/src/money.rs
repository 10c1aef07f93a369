//! Price type for variant prices and filter bounds.
//!
//! Backed by `rust_decimal::Decimal` so comparisons and the query
//! representation never pass through floating point.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A non-negative price in the storefront currency.
///
/// Negative values are representable and are not clamped; the fetch layer is
/// expected to hand over valid prices.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// Create a price from a decimal amount.
    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents.
    ///
    /// ```
    /// use turbo_catalog::money::Price;
    /// let price = Price::from_cents(4999);
    /// assert_eq!(price.to_string(), "49.99");
    /// ```
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// A zero price, used for products without variants.
    pub fn zero() -> Self {
        Self(Decimal::ZERO)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Get the underlying decimal amount.
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Parse a user-supplied price bound.
    ///
    /// Whitespace is trimmed. Empty or non-numeric input yields `None`, which
    /// callers treat as "unconstrained".
    pub fn parse_bound(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Decimal::from_str(trimmed)
            .or_else(|_| Decimal::from_scientific(trimmed))
            .ok()
            .map(Self)
    }

    /// Format as a display string with two decimal places (e.g., "$49.99").
    pub fn display(&self, symbol: &str) -> String {
        format!("{}{:.2}", symbol, self.0)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<i64> for Price {
    fn from(units: i64) -> Self {
        Self(Decimal::from(units))
    }
}

impl From<i32> for Price {
    fn from(units: i32) -> Self {
        Self(Decimal::from(units))
    }
}

/// Renders the shortest exact form (`10`, `12.5`), which is also the form
/// written to the query representation.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}
