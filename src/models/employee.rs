//! Employee model.
//!
//! This module defines the Employee record the enrollment application hands
//! to the engine. Only the disability pricer reads it, to derive a rating age,
//! so every field is optional on the wire.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Represents an employee electing voluntary benefits.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Unique identifier for the employee.
    #[serde(default)]
    pub id: String,
    /// The employee's date of birth. Required only to rate disability coverage.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
}

impl Employee {
    /// Returns the employee's age in whole years on the given date.
    ///
    /// Returns `None` when the date of birth is unknown or falls after `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// use benefit_pricing::models::Employee;
    /// use chrono::NaiveDate;
    ///
    /// let employee = Employee {
    ///     id: "emp_001".to_string(),
    ///     date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15),
    /// };
    /// let on = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
    /// assert_eq!(employee.age_on(on), Some(40));
    /// ```
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        let mut age = date.year() - dob.year();
        if (date.month(), date.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        u32::try_from(age).ok()
    }
}
