//! Core data models for the benefit pricing engine.
//!
//! This module contains the records the enrollment application passes in
//! (products, employees, elections) and the price the engine hands back.

mod employee;
mod price;
mod product;
mod selected_options;

pub use employee::Employee;
pub use price::{Price, PriceBreakdown};
pub use product::{
    CommuterProduct, ContributionKind, ContributionRule, DEFAULT_RATE_UNITS, DisabilityProduct,
    DisabilityRateTable, Product, RateBand, VoluntaryLifeProduct,
};
pub use selected_options::{CoverageEntry, Role, SelectedOptions};

pub(crate) use selected_options::find_coverage;
