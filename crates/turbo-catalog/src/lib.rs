//! Catalog query engine for TurboCommerce storefronts.
//!
//! Turns an already-fetched list of products into what a listing page needs:
//!
//! - **Catalog**: products, variants, and the per-product summary (cheapest
//!   price, weight label, total stock, sold-out flag) derived from variants
//! - **Search**: facet counts, filter state with its shareable query form,
//!   stable sorting, pagination
//! - **Engine**: the single-writer session object tying them together
//!
//! # Example
//!
//! ```rust
//! use turbo_catalog::prelude::*;
//!
//! let products = vec![
//!     Product::new("p1", "Rolled Oats", "cereal", "acme")
//!         .with_variant(Variant::new("v1", 4).with_weight(500, "g").with_stock(12, 0)),
//!     Product::new("p2", "Granola", "cereal", "acme")
//!         .with_variant(Variant::new("v2", 7).with_weight(1, "kg")),
//! ];
//!
//! let mut engine = CatalogEngine::new(CatalogConfig::default()).with_products(products);
//! engine.toggle_availability(Availability::InStock);
//! engine.set_sort(SortMode::PriceAsc);
//!
//! let page = engine.view();
//! assert_eq!(page.len(), 1);
//! assert_eq!(page.items[0].summary.display_weight_label, "500g");
//! assert_eq!(engine.query().to_query_string(), "availability=in_stock&sort=price_asc");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod ids;
pub mod money;

pub mod catalog;
pub mod search;

pub use config::CatalogConfig;
pub use engine::CatalogEngine;
pub use error::CatalogError;
pub use ids::*;
pub use money::Price;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::CatalogConfig;
    pub use crate::engine::CatalogEngine;
    pub use crate::error::CatalogError;
    pub use crate::ids::*;
    pub use crate::money::Price;

    // Catalog
    pub use crate::catalog::{
        products_from_json, Brand, CatalogLabels, Category, Product, ProductSummary, Variant,
    };

    // Search
    pub use crate::search::{
        Availability, BothAvailability, CatalogPage, Facet, FacetCounts, FacetValue, FilterState,
        FilterStore, ListedProduct, Pagination, QueryParams, SortMode,
    };
}
