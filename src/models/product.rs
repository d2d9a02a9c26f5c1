//! Product models for the benefit pricing engine.
//!
//! A [`Product`] is a closed union over the priced product types. Records read
//! from a catalog at runtime can still carry any `type` string, so the union has
//! one [`Product::Unrecognized`] arm that keeps the offending value for the
//! dispatcher to report.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};

use super::Role;

/// Default coverage amount a disability rate is quoted per.
pub const DEFAULT_RATE_UNITS: f64 = 1000.0;

/// How an employer contribution is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContributionKind {
    /// A fixed dollar amount, independent of price.
    Dollars,
    /// A whole-number percentage of the computed price.
    Percent,
}

/// The employer's subsidy rule for a product.
///
/// # Example
///
/// ```
/// use benefit_pricing::models::{ContributionKind, ContributionRule};
///
/// let rule: ContributionRule =
///     serde_json::from_str(r#"{ "kind": "percent", "value": 10 }"#).unwrap();
/// assert_eq!(rule, ContributionRule::percent(10.0));
/// assert_eq!(rule.kind, ContributionKind::Percent);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionRule {
    /// Whether `value` is dollars or a percentage.
    pub kind: ContributionKind,
    /// The dollar amount or percentage.
    pub value: f64,
}

impl ContributionRule {
    /// A flat dollar contribution.
    pub fn dollars(value: f64) -> Self {
        Self {
            kind: ContributionKind::Dollars,
            value,
        }
    }

    /// A percentage-of-price contribution (`10.0` means 10%).
    pub fn percent(value: f64) -> Self {
        Self {
            kind: ContributionKind::Percent,
            value,
        }
    }
}

/// One age band of a disability rate table. Bounds are inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateBand {
    /// Youngest age in the band.
    pub min_age: u32,
    /// Oldest age in the band.
    pub max_age: u32,
    /// Rate per `per_units` dollars of coverage.
    pub rate: f64,
}

impl RateBand {
    /// Returns true if `age` falls within the band.
    pub fn covers(&self, age: u32) -> bool {
        (self.min_age..=self.max_age).contains(&age)
    }
}

/// Age-banded disability rates.
///
/// Employees are rated on their age at `effective_date`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabilityRateTable {
    /// The date ages are measured on.
    pub effective_date: NaiveDate,
    /// Coverage amount each rate is quoted per.
    #[serde(default = "default_rate_units")]
    pub per_units: f64,
    /// The age bands, searched in order.
    pub bands: Vec<RateBand>,
}

fn default_rate_units() -> f64 {
    DEFAULT_RATE_UNITS
}

impl DisabilityRateTable {
    /// Returns the rate of the first band covering `age`.
    pub fn rate_for_age(&self, age: u32) -> Option<f64> {
        self.bands
            .iter()
            .find(|band| band.covers(age))
            .map(|band| band.rate)
    }
}

/// A voluntary life product, priced per $1000 of coverage per role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VoluntaryLifeProduct {
    /// Display name.
    pub name: String,
    /// The employer's subsidy rule.
    pub employer_contribution: ContributionRule,
    /// Cost per $1000 of coverage for each role.
    pub costs: HashMap<Role, f64>,
}

/// A long-term disability product, priced from an age-banded rate table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisabilityProduct {
    /// Display name.
    pub name: String,
    /// The employer's subsidy rule.
    pub employer_contribution: ContributionRule,
    /// The rate table employees are rated against.
    pub rates: DisabilityRateTable,
}

/// A commuter product with a flat monthly cost per benefit kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommuterProduct {
    /// Display name.
    pub name: String,
    /// The employer's subsidy rule.
    pub employer_contribution: ContributionRule,
    /// Flat monthly cost per benefit kind (e.g. `parking`, `train`).
    pub costs: HashMap<String, f64>,
}

/// A benefit product, discriminated by its `type` field.
///
/// # Example
///
/// ```
/// use benefit_pricing::models::Product;
///
/// let product: Product = serde_json::from_str(r#"{ "type": "vision" }"#).unwrap();
/// assert_eq!(product.product_type(), "vision");
/// assert!(product.employer_contribution().is_none());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Product {
    /// `type: disability`
    Disability(DisabilityProduct),
    /// `type: voluntary-life`
    VoluntaryLife(VoluntaryLifeProduct),
    /// `type: commuter`
    Commuter(CommuterProduct),
    /// Any other `type`. Never priced.
    Unrecognized {
        /// The `type` value as supplied.
        product_type: String,
    },
}

impl Product {
    /// Wire name of [`Product::Disability`].
    pub const DISABILITY: &'static str = "disability";
    /// Wire name of [`Product::VoluntaryLife`].
    pub const VOLUNTARY_LIFE: &'static str = "voluntary-life";
    /// Wire name of [`Product::Commuter`].
    pub const COMMUTER: &'static str = "commuter";

    /// Returns the product's `type` as it appears on the wire.
    pub fn product_type(&self) -> &str {
        match self {
            Product::Disability(_) => Self::DISABILITY,
            Product::VoluntaryLife(_) => Self::VOLUNTARY_LIFE,
            Product::Commuter(_) => Self::COMMUTER,
            Product::Unrecognized { product_type } => product_type.as_str(),
        }
    }

    /// Returns the display name of a priced product.
    pub fn name(&self) -> Option<&str> {
        match self {
            Product::Disability(p) => Some(p.name.as_str()),
            Product::VoluntaryLife(p) => Some(p.name.as_str()),
            Product::Commuter(p) => Some(p.name.as_str()),
            Product::Unrecognized { .. } => None,
        }
    }

    /// Returns the employer contribution rule of a priced product.
    pub fn employer_contribution(&self) -> Option<&ContributionRule> {
        match self {
            Product::Disability(p) => Some(&p.employer_contribution),
            Product::VoluntaryLife(p) => Some(&p.employer_contribution),
            Product::Commuter(p) => Some(&p.employer_contribution),
            Product::Unrecognized { .. } => None,
        }
    }

    fn is_known_type(product_type: &str) -> bool {
        matches!(
            product_type,
            Self::DISABILITY | Self::VOLUNTARY_LIFE | Self::COMMUTER
        )
    }
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
enum KnownProduct {
    Disability(DisabilityProduct),
    VoluntaryLife(VoluntaryLifeProduct),
    Commuter(CommuterProduct),
}

impl From<KnownProduct> for Product {
    fn from(known: KnownProduct) -> Self {
        match known {
            KnownProduct::Disability(p) => Product::Disability(p),
            KnownProduct::VoluntaryLife(p) => Product::VoluntaryLife(p),
            KnownProduct::Commuter(p) => Product::Commuter(p),
        }
    }
}

impl<'de> Deserialize<'de> for Product {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Buffered so the tag can be inspected before choosing a shape.
        let value = serde_json::Value::deserialize(deserializer)?;
        let product_type = value
            .get("type")
            .and_then(serde_json::Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?;

        if !Self::is_known_type(product_type) {
            return Ok(Product::Unrecognized {
                product_type: product_type.to_string(),
            });
        }

        KnownProduct::deserialize(value)
            .map(Product::from)
            .map_err(de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn rate_table() -> DisabilityRateTable {
        DisabilityRateTable {
            effective_date: date(2026, 1, 1),
            per_units: DEFAULT_RATE_UNITS,
            bands: vec![
                RateBand {
                    min_age: 18,
                    max_age: 39,
                    rate: 0.18,
                },
                RateBand {
                    min_age: 40,
                    max_age: 44,
                    rate: 0.25632,
                },
            ],
        }
    }

    #[test]
    fn test_deserialize_voluntary_life() {
        let product: Product = serde_json::from_value(json!({
            "type": "voluntary-life",
            "name": "Voluntary Life",
            "employerContribution": { "kind": "percent", "value": 10 },
            "costs": { "ee": 0.35, "sp": 0.12 }
        }))
        .unwrap();

        match product {
            Product::VoluntaryLife(p) => {
                assert_eq!(p.name, "Voluntary Life");
                assert_eq!(p.employer_contribution, ContributionRule::percent(10.0));
                assert_eq!(p.costs.get("ee"), Some(&0.35));
                assert_eq!(p.costs.get("sp"), Some(&0.12));
            }
            other => panic!("Expected voluntary life product, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_disability_defaults_per_units() {
        let product: Product = serde_json::from_value(json!({
            "type": "disability",
            "name": "Long Term Disability",
            "employerContribution": { "kind": "dollars", "value": 10 },
            "rates": {
                "effectiveDate": "2026-01-01",
                "bands": [{ "minAge": 40, "maxAge": 44, "rate": 0.25632 }]
            }
        }))
        .unwrap();

        match product {
            Product::Disability(p) => {
                assert_eq!(p.rates.per_units, DEFAULT_RATE_UNITS);
                assert_eq!(p.rates.effective_date, date(2026, 1, 1));
                assert_eq!(p.employer_contribution, ContributionRule::dollars(10.0));
            }
            other => panic!("Expected disability product, got {:?}", other),
        }
    }

    #[test]
    fn test_deserialize_commuter() {
        let product: Product = serde_json::from_value(json!({
            "type": "commuter",
            "name": "Commuter",
            "employerContribution": { "kind": "dollars", "value": 75 },
            "costs": { "parking": 250, "train": 84.75 }
        }))
        .unwrap();

        assert_eq!(product.product_type(), Product::COMMUTER);
        assert_eq!(product.name(), Some("Commuter"));
        match product {
            Product::Commuter(p) => assert_eq!(p.costs.get("parking"), Some(&250.0)),
            other => panic!("Expected commuter product, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_type_keeps_value() {
        let product: Product = serde_json::from_value(json!({ "type": "vision" })).unwrap();
        assert_eq!(
            product,
            Product::Unrecognized {
                product_type: "vision".to_string()
            }
        );
        assert_eq!(product.name(), None);
    }

    #[test]
    fn test_known_type_with_missing_rating_data_is_an_error() {
        let result: Result<Product, _> = serde_json::from_value(json!({
            "type": "commuter",
            "name": "Commuter",
            "employerContribution": { "kind": "dollars", "value": 75 }
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let result: Result<Product, _> = serde_json::from_value(json!({ "name": "Nameless" }));
        let message = result.unwrap_err().to_string();
        assert!(message.contains("type"), "unexpected message: {}", message);
    }

    #[test]
    fn test_unknown_contribution_kind_is_an_error() {
        let result: Result<ContributionRule, _> =
            serde_json::from_value(json!({ "kind": "shares", "value": 3 }));
        assert!(result.is_err());
    }

    #[test]
    fn test_rate_for_age_inclusive_bounds() {
        let table = rate_table();
        assert_eq!(table.rate_for_age(18), Some(0.18));
        assert_eq!(table.rate_for_age(39), Some(0.18));
        assert_eq!(table.rate_for_age(40), Some(0.25632));
        assert_eq!(table.rate_for_age(44), Some(0.25632));
    }

    #[test]
    fn test_rate_for_age_outside_bands() {
        let table = rate_table();
        assert_eq!(table.rate_for_age(17), None);
        assert_eq!(table.rate_for_age(45), None);
    }

    #[test]
    fn test_unrecognized_has_no_contribution() {
        let product = Product::Unrecognized {
            product_type: "dental".to_string(),
        };
        assert!(product.employer_contribution().is_none());
        assert_eq!(product.product_type(), "dental");
    }
}
