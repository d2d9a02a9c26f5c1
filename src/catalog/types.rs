//! Catalog types.
//!
//! This module contains the structures deserialized from the YAML files of a
//! benefit plan catalog directory.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::models::Product;

/// How often the employee is charged the calculated price.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BillingPeriod {
    /// Twelve charges per year.
    Monthly,
    /// Twenty-four charges per year.
    SemiMonthly,
    /// Twenty-six charges per year.
    Biweekly,
}

/// Metadata about the benefit plan, from `plan.yaml`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanMetadata {
    /// The sponsoring employer.
    pub employer: String,
    /// The plan year label (e.g. "2026").
    pub plan_year: String,
    /// The date the plan takes effect.
    pub effective_date: NaiveDate,
    /// The billing period prices are quoted per.
    pub billing_period: BillingPeriod,
}

/// Products file structure, from `products.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductsConfig {
    /// Map of product id to product definition.
    pub products: HashMap<String, Product>,
}

/// A loaded benefit plan catalog.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    plan: PlanMetadata,
    products: HashMap<String, Product>,
}

impl ProductCatalog {
    /// Creates a new catalog from its component parts.
    pub fn new(plan: PlanMetadata, products: HashMap<String, Product>) -> Self {
        Self { plan, products }
    }

    /// Returns the plan metadata.
    pub fn plan(&self) -> &PlanMetadata {
        &self.plan
    }

    /// Returns all products keyed by id.
    pub fn products(&self) -> &HashMap<String, Product> {
        &self.products
    }
}
