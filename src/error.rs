//! Error types for the benefit pricing engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the engine surfaces to its callers.

use thiserror::Error;

/// The main error type for the benefit pricing engine.
///
/// Pricing functions and the fixture catalog loader both return this error
/// type, so callers handle one enum regardless of where a failure started.
///
/// # Example
///
/// ```
/// use benefit_pricing::error::PricingError;
///
/// let error = PricingError::UnknownProductType {
///     product_type: "vision".to_string(),
/// };
/// assert_eq!(error.to_string(), "Unknown product type: vision");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// The product's `type` matched none of the priced product types.
    #[error("Unknown product type: {product_type}")]
    UnknownProductType {
        /// The offending type value.
        product_type: String,
    },

    /// The elected commuter benefit is not offered by the product.
    #[error("Commuter benefit not offered: {benefit}")]
    BenefitNotFound {
        /// The benefit kind that was elected.
        benefit: String,
    },

    /// A commuter product was priced without an elected benefit.
    #[error("No commuter benefit selected")]
    NoBenefitSelected,

    /// No disability rate band covers the employee's rating age.
    #[error("No disability rate found for age {age}")]
    RateNotFound {
        /// The employee's age on the rate table's effective date.
        age: u32,
    },

    /// An employee record could not be rated.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// Catalog file was not found at the specified path.
    #[error("Catalog file not found: {path}")]
    CatalogNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Catalog file could not be parsed.
    #[error("Failed to parse catalog file '{path}': {message}")]
    CatalogParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No product with the requested id exists in the catalog.
    #[error("Product not found: {id}")]
    ProductNotFound {
        /// The product id that was requested.
        id: String,
    },
}

/// A type alias for Results that return PricingError.
pub type PricingResult<T> = Result<T, PricingError>;
