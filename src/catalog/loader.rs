//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading benefit plan
//! catalogs from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{PricingError, PricingResult};
use crate::models::Product;

use super::types::{PlanMetadata, ProductCatalog, ProductsConfig};

/// Loads and provides access to a benefit plan catalog.
///
/// The loader only parses product records. It does not check rates or
/// contribution rules; the pricing engine takes records as given.
///
/// # Directory Structure
///
/// ```text
/// config/benefits-2026/
/// ├── plan.yaml      # Plan metadata
/// └── products.yaml  # Product definitions keyed by id
/// ```
///
/// # Example
///
/// ```no_run
/// use benefit_pricing::catalog::CatalogLoader;
///
/// let loader = CatalogLoader::load("./config/benefits-2026")?;
/// let product = loader.get_product("commuter")?;
/// println!("Loaded {}", product.product_type());
/// # Ok::<(), benefit_pricing::error::PricingError>(())
/// ```
#[derive(Debug, Clone)]
pub struct CatalogLoader {
    catalog: ProductCatalog,
}

impl CatalogLoader {
    /// Loads a catalog from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `CatalogLoader` on success, or an error if:
    /// - `plan.yaml` or `products.yaml` is missing (`CatalogNotFound`)
    /// - Either file contains invalid YAML or an invalid record (`CatalogParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PricingResult<Self> {
        let path = path.as_ref();

        let plan = Self::load_yaml::<PlanMetadata>(&path.join("plan.yaml"))?;
        let products = Self::load_yaml::<ProductsConfig>(&path.join("products.yaml"))?;

        Ok(Self {
            catalog: ProductCatalog::new(plan, products.products),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> PricingResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PricingError::CatalogNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| PricingError::CatalogParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying catalog.
    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Returns the plan metadata.
    pub fn plan(&self) -> &PlanMetadata {
        self.catalog.plan()
    }

    /// Gets a product by its id.
    ///
    /// Returns `ProductNotFound` if the catalog has no product with that id.
    pub fn get_product(&self, id: &str) -> PricingResult<&Product> {
        self.catalog
            .products()
            .get(id)
            .ok_or_else(|| PricingError::ProductNotFound { id: id.to_string() })
    }
}
