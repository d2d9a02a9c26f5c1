//! Product price dispatch.
//!
//! This is the entry point the enrollment application calls. It selects the
//! pricer for the product's type, subtracts the employer contribution and
//! formats the result, in that order and exactly once each.

use tracing::{debug, warn};

use crate::error::{PricingError, PricingResult};
use crate::models::{Employee, Price, PriceBreakdown, Product, SelectedOptions};

use super::{
    calculate_commuter_cost, calculate_ltd_price, calculate_vol_life_price,
    get_employer_contribution,
};

/// Calculates what the employee pays per billing period for a product.
///
/// # Arguments
///
/// * `product` - The product being elected
/// * `employee` - The electing employee (only read for disability)
/// * `selected` - The employee's elections for this product
///
/// # Returns
///
/// The formatted price, or an error if:
/// - The product's type is not priced (`UnknownProductType`)
/// - The type-specific pricer fails (see [`calculate_ltd_price`] and
///   [`calculate_commuter_cost`])
///
/// # Examples
///
/// ```
/// use benefit_pricing::error::PricingError;
/// use benefit_pricing::models::{Employee, Product, SelectedOptions};
/// use benefit_pricing::pricing::calculate_product_price;
/// use chrono::NaiveDate;
///
/// let product = Product::Unrecognized { product_type: "vision".to_string() };
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15),
/// };
///
/// let error = calculate_product_price(&product, &employee, &SelectedOptions::default())
///     .unwrap_err();
/// assert_eq!(error.to_string(), "Unknown product type: vision");
/// ```
pub fn calculate_product_price(
    product: &Product,
    employee: &Employee,
    selected: &SelectedOptions,
) -> PricingResult<Price> {
    calculate_price_breakdown(product, employee, selected).map(|breakdown| breakdown.price)
}

/// Calculates a product price and returns every stage of the calculation.
///
/// Runs the same pipeline as [`calculate_product_price`]: type-specific
/// pricer, then employer contribution over that price, then formatting of the
/// difference. Each stage runs exactly once per call, so `employer_contribution`
/// is always the rule applied to `base_price` and `price` is that difference
/// formatted a single time.
pub fn calculate_price_breakdown(
    product: &Product,
    employee: &Employee,
    selected: &SelectedOptions,
) -> PricingResult<PriceBreakdown> {
    let (base_price, rule) = match product {
        Product::VoluntaryLife(life) => (
            calculate_vol_life_price(life, selected),
            &life.employer_contribution,
        ),
        Product::Disability(ltd) => (
            calculate_ltd_price(ltd, employee, selected)?,
            &ltd.employer_contribution,
        ),
        Product::Commuter(commuter) => (
            calculate_commuter_cost(commuter, selected)?,
            &commuter.employer_contribution,
        ),
        Product::Unrecognized { product_type } => {
            warn!(product_type = %product_type, "Unknown product type");
            return Err(PricingError::UnknownProductType {
                product_type: product_type.clone(),
            });
        }
    };

    let employer_contribution = get_employer_contribution(rule, base_price);
    let price = Price::from_raw(base_price - employer_contribution);

    debug!(
        product_type = product.product_type(),
        base_price,
        employer_contribution,
        price = %price,
        "Priced product"
    );

    Ok(PriceBreakdown {
        product_type: product.product_type().to_string(),
        base_price,
        employer_contribution,
        price,
    })
}
