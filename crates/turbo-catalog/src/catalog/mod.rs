//! Product catalog module.
//!
//! Contains the product and variant model, the per-product summary derived
//! from variants, and the category/brand label lookup.

mod labels;
mod product;
mod summary;

pub use labels::{Brand, CatalogLabels, Category};
pub use product::{products_from_json, Product, Variant};
pub use summary::ProductSummary;
