//! Pricing logic for the benefit pricing engine.
//!
//! This module contains the type-specific pricers for voluntary life,
//! long-term disability and commuter products, the employer contribution
//! calculation, price formatting, and the dispatcher that ties them together.
//! Every function is pure: its result depends only on its arguments.

mod commuter;
mod contribution;
mod disability;
mod format;
mod product_price;
mod voluntary_life;

pub use commuter::calculate_commuter_cost;
pub use contribution::get_employer_contribution;
pub use disability::calculate_ltd_price;
pub use format::format_price;
pub use product_price::{calculate_price_breakdown, calculate_product_price};
pub use voluntary_life::{
    LIFE_COVERAGE_UNIT, calculate_vol_life_price, calculate_vol_life_price_per_role,
};
