//! The formatted price returned to callers.

use std::fmt;

use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use serde::{Serialize, Serializer};

use crate::pricing::format_price;

/// A per-billing-period price with the two-decimal formatting already applied.
///
/// The inner value is the output of [`format_price`], so it must not be
/// rounded again. At the boundary it converts to a [`Decimal`] with scale 2.
///
/// # Example
///
/// ```
/// use benefit_pricing::models::Price;
///
/// let price = Price::from_raw(39.375);
/// assert_eq!(price.value(), 39.37);
/// assert_eq!(price.to_string(), "39.37");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Price(f64);

impl Price {
    /// Formats a raw amount into a price.
    ///
    /// A result of zero is always positive zero, so it never displays as `-0.00`.
    pub fn from_raw(raw: f64) -> Self {
        let value = format_price(raw);
        Self(if value == 0.0 { 0.0 } else { value })
    }

    /// Returns the formatted numeric value.
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the price as a decimal with exactly two fractional digits.
    ///
    /// Returns `None` for non-finite values.
    pub fn to_decimal(self) -> Option<Decimal> {
        let mut decimal = Decimal::from_f64(self.0)?.round_dp(2);
        decimal.rescale(2);
        Some(decimal)
    }
}

/// The stages of one product price calculation.
///
/// `price` is `base_price - employer_contribution` after formatting.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    /// The product's `type` value.
    pub product_type: String,
    /// The type-specific price before the employer contribution.
    pub base_price: f64,
    /// The amount the employer pays.
    pub employer_contribution: f64,
    /// The formatted amount the employee pays.
    pub price: Price,
}

impl PartialEq<f64> for Price {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

impl Serialize for Price {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.to_decimal() {
            Some(decimal) => Serialize::serialize(&decimal, serializer),
            None => serializer.serialize_f64(self.0),
        }
    }
}
