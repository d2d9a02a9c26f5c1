//! Voluntary life pricing.
//!
//! Life coverage is priced per covered family role: the elected face value in
//! $1000 units times the product's per-$1000 cost for that role. The product
//! price is the plain sum over every role the employee elected to cover.

use std::collections::HashMap;

use tracing::warn;

use crate::models::{CoverageEntry, Role, SelectedOptions, VoluntaryLifeProduct, find_coverage};

/// Face value one per-unit life cost is quoted per.
pub const LIFE_COVERAGE_UNIT: f64 = 1000.0;

/// Prices the life coverage elected for a single role.
///
/// Returns `0.0` when `coverage_level` has no entry for `role`. A role with
/// coverage but no cost in `costs` also prices as `0.0`. The result is not
/// rounded.
///
/// # Arguments
///
/// * `role` - The family role to price (e.g. `"ee"`)
/// * `coverage_level` - The employee's coverage elections
/// * `costs` - Cost per $1000 of coverage for each role
///
/// # Examples
///
/// ```
/// use benefit_pricing::models::{CoverageEntry, Role};
/// use benefit_pricing::pricing::calculate_vol_life_price_per_role;
/// use std::collections::HashMap;
///
/// let costs = HashMap::from([(Role::employee(), 0.35)]);
/// let coverage_level = vec![CoverageEntry::new("ee", 125000.0)];
///
/// assert_eq!(calculate_vol_life_price_per_role("ee", &coverage_level, &costs), 43.75);
/// assert_eq!(calculate_vol_life_price_per_role("sp", &coverage_level, &costs), 0.0);
/// ```
pub fn calculate_vol_life_price_per_role(
    role: &str,
    coverage_level: &[CoverageEntry],
    costs: &HashMap<Role, f64>,
) -> f64 {
    let Some(coverage) = find_coverage(coverage_level, role) else {
        return 0.0;
    };

    match costs.get(role) {
        Some(cost) => coverage / LIFE_COVERAGE_UNIT * cost,
        None => {
            warn!(role, coverage, "No voluntary life cost for elected role");
            0.0
        }
    }
}

/// Prices a voluntary life product before the employer contribution.
///
/// Sums [`calculate_vol_life_price_per_role`] over every role in
/// `familyMembersToCover`. Nothing is rounded here.
///
/// # Examples
///
/// ```
/// use benefit_pricing::models::{
///     ContributionRule, CoverageEntry, Role, SelectedOptions, VoluntaryLifeProduct,
/// };
/// use benefit_pricing::pricing::calculate_vol_life_price;
/// use std::collections::HashMap;
///
/// let product = VoluntaryLifeProduct {
///     name: "Voluntary Life".to_string(),
///     employer_contribution: ContributionRule::percent(10.0),
///     costs: HashMap::from([(Role::from("ee"), 0.35), (Role::from("sp"), 0.12)]),
/// };
/// let selected = SelectedOptions {
///     family_members_to_cover: vec![Role::from("ee"), Role::from("sp")],
///     coverage_level: vec![
///         CoverageEntry::new("ee", 200000.0),
///         CoverageEntry::new("sp", 75000.0),
///     ],
///     benefits: None,
/// };
///
/// assert_eq!(calculate_vol_life_price(&product, &selected), 79.0);
/// ```
pub fn calculate_vol_life_price(product: &VoluntaryLifeProduct, selected: &SelectedOptions) -> f64 {
    selected
        .family_members_to_cover
        .iter()
        .map(|role| {
            calculate_vol_life_price_per_role(role.as_str(), &selected.coverage_level, &product.costs)
        })
        .fold(0.0, |total, price| total + price)
}
