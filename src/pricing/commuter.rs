//! Commuter benefit pricing.

use tracing::warn;

use crate::error::{PricingError, PricingResult};
use crate::models::{CommuterProduct, SelectedOptions};

/// Returns the flat monthly cost of the elected commuter benefit.
///
/// The cost is taken directly from the product's cost table; there is no
/// coverage scaling.
///
/// # Returns
///
/// The cost, or an error if:
/// - No benefit was elected (`NoBenefitSelected`)
/// - The elected benefit is not in the product's cost table (`BenefitNotFound`)
///
/// # Examples
///
/// ```
/// use benefit_pricing::models::{CommuterProduct, ContributionRule, SelectedOptions};
/// use benefit_pricing::pricing::calculate_commuter_cost;
/// use std::collections::HashMap;
///
/// let product = CommuterProduct {
///     name: "Commuter".to_string(),
///     employer_contribution: ContributionRule::dollars(75.0),
///     costs: HashMap::from([("parking".to_string(), 250.0), ("train".to_string(), 84.75)]),
/// };
/// let selected = SelectedOptions {
///     benefits: Some("train".to_string()),
///     ..Default::default()
/// };
///
/// assert_eq!(calculate_commuter_cost(&product, &selected).unwrap(), 84.75);
/// ```
pub fn calculate_commuter_cost(
    product: &CommuterProduct,
    selected: &SelectedOptions,
) -> PricingResult<f64> {
    let benefit = selected
        .benefits
        .as_deref()
        .ok_or(PricingError::NoBenefitSelected)?;

    product.costs.get(benefit).copied().ok_or_else(|| {
        warn!(benefit, product = %product.name, "Commuter benefit not offered");
        PricingError::BenefitNotFound {
            benefit: benefit.to_string(),
        }
    })
}
