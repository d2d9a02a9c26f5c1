//! Employer contribution calculation.

use crate::models::{ContributionKind, ContributionRule};

/// Returns the amount the employer pays toward `price`.
///
/// A `dollars` rule pays its value regardless of price. A `percent` rule pays
/// `price * value / 100`. No rounding is applied; that happens once, when the
/// final price is formatted.
///
/// # Examples
///
/// ```
/// use benefit_pricing::models::ContributionRule;
/// use benefit_pricing::pricing::get_employer_contribution;
///
/// assert_eq!(get_employer_contribution(&ContributionRule::dollars(10.0), 15.33), 10.0);
/// assert_eq!(get_employer_contribution(&ContributionRule::percent(10.0), 15.0), 1.5);
/// ```
pub fn get_employer_contribution(rule: &ContributionRule, price: f64) -> f64 {
    match rule.kind {
        ContributionKind::Dollars => rule.value,
        ContributionKind::Percent => price * rule.value / 100.0,
    }
}
