//! Employee election models.
//!
//! This module contains [`SelectedOptions`], the elections an employee made for
//! one product, together with the [`Role`] and [`CoverageEntry`] types it is
//! built from.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A family member role token (e.g. `ee`, `sp`, `ch`).
///
/// Roles are open-ended strings on the wire; only [`Role::EMPLOYEE`] carries
/// meaning inside the engine, where it gates disability coverage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Role(String);

impl Role {
    /// The token for the employee themself.
    pub const EMPLOYEE: &'static str = "ee";
    /// The token for a spouse.
    pub const SPOUSE: &'static str = "sp";
    /// The token for a child.
    pub const CHILD: &'static str = "ch";

    /// Creates a role from its token.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the employee role.
    pub fn employee() -> Self {
        Self::new(Self::EMPLOYEE)
    }

    /// Returns the role token.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this is the employee role.
    pub fn is_employee(&self) -> bool {
        self.0 == Self::EMPLOYEE
    }
}

impl Borrow<str> for Role {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Role {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The elected face value of insurance for one family role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoverageEntry {
    /// The covered role.
    pub role: Role,
    /// Elected face value in dollars.
    pub coverage: f64,
}

impl CoverageEntry {
    /// Creates a coverage entry.
    pub fn new(role: impl Into<Role>, coverage: f64) -> Self {
        Self {
            role: role.into(),
            coverage,
        }
    }
}

/// An employee's election for a single product.
///
/// Every field may be absent on the wire: commuter elections only carry
/// `benefits`, while life and disability elections carry the two lists.
///
/// # Example
///
/// ```
/// use benefit_pricing::models::SelectedOptions;
///
/// let json = r#"{
///     "familyMembersToCover": ["ee", "sp"],
///     "coverageLevel": [
///         { "role": "ee", "coverage": 200000 },
///         { "role": "sp", "coverage": 75000 }
///     ]
/// }"#;
/// let selected: SelectedOptions = serde_json::from_str(json).unwrap();
/// assert!(selected.covers_employee());
/// assert_eq!(selected.coverage_for("sp"), Some(75000.0));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectedOptions {
    /// Roles the employee elected to cover.
    #[serde(default)]
    pub family_members_to_cover: Vec<Role>,
    /// Coverage amounts per elected role.
    #[serde(default)]
    pub coverage_level: Vec<CoverageEntry>,
    /// The elected commuter benefit kind.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub benefits: Option<String>,
}

impl SelectedOptions {
    /// Returns true if the employee covered themself.
    pub fn covers_employee(&self) -> bool {
        self.family_members_to_cover.iter().any(Role::is_employee)
    }

    /// Returns the elected coverage for a role, if any.
    pub fn coverage_for(&self, role: &str) -> Option<f64> {
        find_coverage(&self.coverage_level, role)
    }
}

/// Finds the first coverage amount elected for `role`.
pub(crate) fn find_coverage(coverage_level: &[CoverageEntry], role: &str) -> Option<f64> {
    coverage_level
        .iter()
        .find(|entry| entry.role.as_str() == role)
        .map(|entry| entry.coverage)
}
