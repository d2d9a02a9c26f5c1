//! Benefit plan catalog loading.
//!
//! This module loads product records from YAML files, the same records the
//! enrollment application's product catalog supplies to the pricing engine.
//! Loading is the only thing it does: records are parsed, never validated,
//! and the pricing functions never touch the filesystem.
//!
//! # Example
//!
//! ```no_run
//! use benefit_pricing::catalog::CatalogLoader;
//!
//! let loader = CatalogLoader::load("./config/benefits-2026").unwrap();
//! println!("Loaded plan for {}", loader.plan().employer);
//! ```

mod loader;
mod types;

pub use loader::CatalogLoader;
pub use types::{BillingPeriod, PlanMetadata, ProductCatalog, ProductsConfig};
