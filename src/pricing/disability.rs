//! Long-term disability pricing.
//!
//! Disability coverage is employee-only. The employee is rated on their age at
//! the rate table's effective date and pays `coverage / per_units * rate`.

use tracing::debug;

use crate::error::{PricingError, PricingResult};
use crate::models::{DisabilityProduct, Employee, Role, SelectedOptions};

/// Prices a disability product before the employer contribution.
///
/// Returns `Ok(0.0)` when the employee did not cover themself (`ee` absent from
/// `familyMembersToCover`), whatever else was elected, and when no coverage
/// amount was elected for `ee`.
///
/// # Arguments
///
/// * `product` - The disability product, including its rate table
/// * `employee` - The employee being rated
/// * `selected` - The employee's elections for this product
///
/// # Returns
///
/// The unrounded price, or an error if:
/// - The employee has no date of birth, or was born after the rate table's
///   effective date (`InvalidEmployee`)
/// - No rate band covers the employee's age (`RateNotFound`)
///
/// # Examples
///
/// ```
/// use benefit_pricing::models::{
///     ContributionRule, CoverageEntry, DisabilityProduct, DisabilityRateTable, Employee,
///     RateBand, Role, SelectedOptions,
/// };
/// use benefit_pricing::pricing::calculate_ltd_price;
/// use chrono::NaiveDate;
///
/// let product = DisabilityProduct {
///     name: "Long Term Disability".to_string(),
///     employer_contribution: ContributionRule::dollars(10.0),
///     rates: DisabilityRateTable {
///         effective_date: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
///         per_units: 1000.0,
///         bands: vec![RateBand { min_age: 40, max_age: 44, rate: 0.25632 }],
///     },
/// };
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15),
/// };
/// let selected = SelectedOptions {
///     family_members_to_cover: vec![Role::employee()],
///     coverage_level: vec![CoverageEntry::new("ee", 125000.0)],
///     benefits: None,
/// };
///
/// assert_eq!(calculate_ltd_price(&product, &employee, &selected).unwrap(), 32.04);
/// ```
pub fn calculate_ltd_price(
    product: &DisabilityProduct,
    employee: &Employee,
    selected: &SelectedOptions,
) -> PricingResult<f64> {
    if !selected.covers_employee() {
        return Ok(0.0);
    }

    let Some(coverage) = selected.coverage_for(Role::EMPLOYEE) else {
        return Ok(0.0);
    };

    let rates = &product.rates;
    let date_of_birth = employee
        .date_of_birth
        .ok_or_else(|| PricingError::InvalidEmployee {
            field: "dateOfBirth".to_string(),
            message: "required to rate disability coverage".to_string(),
        })?;
    let age = employee
        .age_on(rates.effective_date)
        .ok_or_else(|| PricingError::InvalidEmployee {
            field: "dateOfBirth".to_string(),
            message: format!(
                "{} is after rate table effective date {}",
                date_of_birth, rates.effective_date
            ),
        })?;
    let rate = rates
        .rate_for_age(age)
        .ok_or(PricingError::RateNotFound { age })?;

    debug!(employee_id = %employee.id, age, rate, coverage, "Rated disability coverage");

    Ok(coverage / rates.per_units * rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ContributionRule, CoverageEntry, DisabilityRateTable, RateBand};
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ltd_product() -> DisabilityProduct {
        DisabilityProduct {
            name: "Long Term Disability".to_string(),
            employer_contribution: ContributionRule::dollars(10.0),
            rates: DisabilityRateTable {
                effective_date: date(2026, 1, 1),
                per_units: 1000.0,
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
                    RateBand {
                        min_age: 45,
                        max_age: 64,
                        rate: 0.41,
                    },
                ],
            },
        }
    }

    fn employee_born(dob: NaiveDate) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            date_of_birth: Some(dob),
        }
    }

    fn ee_election(coverage: f64) -> SelectedOptions {
        SelectedOptions {
            family_members_to_cover: vec![Role::employee()],
            coverage_level: vec![CoverageEntry::new("ee", coverage)],
            benefits: None,
        }
    }

    #[test]
    fn test_employee_coverage_priced_from_age_band() {
        let employee = employee_born(date(1985, 3, 15));
        let price = calculate_ltd_price(&ltd_product(), &employee, &ee_election(125000.0));
        assert_eq!(price, Ok(32.04));
    }

    #[test]
    fn test_zero_when_employee_not_covered() {
        let employee = employee_born(date(1985, 3, 15));
        let selected = SelectedOptions {
            family_members_to_cover: vec![Role::from("pa")],
            ..Default::default()
        };
        assert_eq!(calculate_ltd_price(&ltd_product(), &employee, &selected), Ok(0.0));
    }

    #[test]
    fn test_zero_when_only_dependents_covered_even_with_ee_coverage_entry() {
        let employee = employee_born(date(1985, 3, 15));
        let selected = SelectedOptions {
            family_members_to_cover: vec![Role::from("sp"), Role::from("ch")],
            coverage_level: vec![CoverageEntry::new("ee", 125000.0)],
            benefits: None,
        };
        assert_eq!(calculate_ltd_price(&ltd_product(), &employee, &selected), Ok(0.0));
    }

    #[test]
    fn test_zero_when_ee_has_no_coverage_entry() {
        let employee = employee_born(date(1985, 3, 15));
        let selected = SelectedOptions {
            family_members_to_cover: vec![Role::employee()],
            ..Default::default()
        };
        assert_eq!(calculate_ltd_price(&ltd_product(), &employee, &selected), Ok(0.0));
    }

    #[test]
    fn test_gating_skips_rating() {
        // Would fail rating (no band for age 8) if ee were elected.
        let employee = employee_born(date(2017, 6, 1));
        let selected = SelectedOptions {
            family_members_to_cover: vec![Role::from("sp")],
            ..Default::default()
        };
        assert_eq!(calculate_ltd_price(&ltd_product(), &employee, &selected), Ok(0.0));
    }

    #[test]
    fn test_birthday_after_effective_date_uses_younger_band() {
        // Turns 40 on 2026-01-02, one day after the table's effective date.
        let employee = employee_born(date(1986, 1, 2));
        let price = calculate_ltd_price(&ltd_product(), &employee, &ee_election(100000.0)).unwrap();
        assert_eq!(price, 100.0 * 0.18);
    }

    #[test]
    fn test_per_units_scales_rate() {
        let mut product = ltd_product();
        product.rates.per_units = 100.0;
        let employee = employee_born(date(1970, 6, 30));
        let price = calculate_ltd_price(&product, &employee, &ee_election(1000.0)).unwrap();
        assert_eq!(price, 10.0 * 0.41);
    }

    #[test]
    fn test_rate_not_found_for_age_outside_bands() {
        let employee = employee_born(date(1950, 1, 1));
        let result = calculate_ltd_price(&ltd_product(), &employee, &ee_election(125000.0));
        assert_eq!(result, Err(PricingError::RateNotFound { age: 76 }));
    }

    #[test]
    fn test_employee_born_after_effective_date_is_invalid() {
        let employee = employee_born(date(2026, 5, 1));
        let result = calculate_ltd_price(&ltd_product(), &employee, &ee_election(125000.0));
        match result {
            Err(PricingError::InvalidEmployee { field, message }) => {
                assert_eq!(field, "dateOfBirth");
                assert!(message.contains("2026-01-01"));
            }
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_date_of_birth_is_invalid_when_employee_elected() {
        let employee = Employee {
            id: "emp_009".to_string(),
            date_of_birth: None,
        };
        let result = calculate_ltd_price(&ltd_product(), &employee, &ee_election(125000.0));
        match result {
            Err(PricingError::InvalidEmployee { field, .. }) => assert_eq!(field, "dateOfBirth"),
            other => panic!("Expected InvalidEmployee error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_date_of_birth_is_fine_without_employee_election() {
        let selected = SelectedOptions {
            family_members_to_cover: vec![Role::from("sp")],
            ..Default::default()
        };
        let result = calculate_ltd_price(&ltd_product(), &Employee::default(), &selected);
        assert_eq!(result, Ok(0.0));
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let employee = employee_born(date(1985, 3, 15));
        let product = ltd_product();
        let selected = ee_election(125000.0);
        let first = calculate_ltd_price(&product, &employee, &selected);
        let second = calculate_ltd_price(&product, &employee, &selected);
        assert_eq!(first, second);
    }
}
