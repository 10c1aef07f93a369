//! Category and brand display names.
//!
//! The fetch layer supplies id → name lists alongside the products. The
//! engine only uses them to label facet values; filtering works on ids.

use crate::ids::{BrandId, CategoryId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A product category as listed by the storefront API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    /// Unique category identifier.
    pub id: CategoryId,
    /// Category name.
    pub name: String,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A brand as listed by the storefront API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Brand {
    /// Unique brand identifier.
    pub id: BrandId,
    /// Brand name.
    pub name: String,
}

impl Brand {
    pub fn new(id: impl Into<BrandId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Lookup from category and brand ids to display names.
#[derive(Debug, Clone, Default)]
pub struct CatalogLabels {
    categories: HashMap<CategoryId, String>,
    brands: HashMap<BrandId, String>,
}

impl CatalogLabels {
    /// Build a lookup from the API lists. Later duplicates win.
    pub fn new(
        categories: impl IntoIterator<Item = Category>,
        brands: impl IntoIterator<Item = Brand>,
    ) -> Self {
        Self {
            categories: categories.into_iter().map(|c| (c.id, c.name)).collect(),
            brands: brands.into_iter().map(|b| (b.id, b.name)).collect(),
        }
    }

    /// Display name for a category, falling back to its id.
    pub fn category_name<'a>(&'a self, id: &'a CategoryId) -> &'a str {
        self.categories
            .get(id)
            .map(String::as_str)
            .unwrap_or_else(|| id.as_str())
    }

    /// Display name for a brand, falling back to its id.
    pub fn brand_name<'a>(&'a self, id: &'a BrandId) -> &'a str {
        self.brands
            .get(id)
            .map(String::as_str)
            .unwrap_or_else(|| id.as_str())
    }
}
