//! Type-safe price and discount representation using decimal arithmetic.
//!
//! Catalog documents carry prices and discount percentages as plain JSON
//! numbers. Both are parsed into `rust_decimal::Decimal` so that discount
//! arithmetic is exact (`100 * (1 - 20/100) == 80`) and serialized back as
//! numbers.
//!
//! Parsing rejects a negative price and a discount outside `0..=100`, so a
//! document carrying either fails to load.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, de};
use thiserror::Error;

/// A price or discount outside its allowed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AmountError {
    #[error("price must not be negative, got {0}")]
    NegativePrice(Decimal),

    #[error("discount must be between 0 and 100 percent, got {0}")]
    DiscountOutOfRange(Decimal),
}

/// A non-negative product price in the catalog's currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Create a price without range checks, for query bounds.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from a whole-unit integer amount.
    #[must_use]
    pub fn from_units(units: i64) -> Self {
        Self(Decimal::from(units))
    }

    /// Apply an optional percentage discount.
    ///
    /// A missing discount and a zero discount both leave the price unchanged.
    #[must_use]
    pub fn discounted(self, discount: Option<Discount>) -> Self {
        match discount {
            Some(d) if !d.is_zero() => {
                Self(self.0 * (Decimal::ONE - d.percent() / Decimal::ONE_HUNDRED))
            }
            _ => self,
        }
    }
}

impl TryFrom<Decimal> for Price {
    type Error = AmountError;

    fn try_from(amount: Decimal) -> Result<Self, Self::Error> {
        if amount.is_sign_negative() && !amount.is_zero() {
            return Err(AmountError::NegativePrice(amount));
        }
        Ok(Self(amount))
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::try_from(amount).map_err(de::Error::custom)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

/// A percentage discount in `0..=100`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Discount(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Discount {
    /// Create a discount from a whole percentage.
    #[must_use]
    pub fn from_percent(percent: u32) -> Self {
        Self(Decimal::from(percent))
    }

    /// The percentage value.
    #[must_use]
    pub const fn percent(self) -> Decimal {
        self.0
    }

    /// A zero discount adjusts nothing.
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0.is_zero()
    }
}

impl TryFrom<Decimal> for Discount {
    type Error = AmountError;

    fn try_from(percent: Decimal) -> Result<Self, Self::Error> {
        if percent < Decimal::ZERO || percent > Decimal::ONE_HUNDRED {
            return Err(AmountError::DiscountOutOfRange(percent));
        }
        Ok(Self(percent))
    }
}

impl<'de> Deserialize<'de> for Discount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let percent = rust_decimal::serde::float::deserialize(deserializer)?;
        Self::try_from(percent).map_err(de::Error::custom)
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0.normalize())
    }
}
