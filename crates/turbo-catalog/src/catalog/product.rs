//! Product and variant types.

use crate::error::CatalogError;
use crate::ids::{BrandId, CategoryId, FlavorId, ProductId, VariantId};
use crate::money::Price;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A product in the catalog.
///
/// Products own their variants. Display attributes (price, stock, weight) are
/// never stored here; see [`crate::catalog::ProductSummary`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique product identifier.
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// The single category this product belongs to.
    pub category_id: CategoryId,
    /// Brand of the product.
    pub brand_id: BrandId,
    /// Creation time, if known. Products without one sort as oldest.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Average review rating.
    #[serde(default)]
    pub rating: f64,
    /// Number of reviews.
    #[serde(default)]
    pub review_count: u32,
    /// Purchasable variants, in display order.
    #[serde(default)]
    pub variants: Vec<Variant>,
}

impl Product {
    /// Create a product with no variants.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        category_id: impl Into<CategoryId>,
        brand_id: impl Into<BrandId>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            category_id: category_id.into(),
            brand_id: brand_id.into(),
            created_at: None,
            rating: 0.0,
            review_count: 0,
            variants: Vec::new(),
        }
    }

    /// Set the creation time.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = Some(created_at);
        self
    }

    /// Append a variant.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variants.push(variant);
        self
    }

    /// Check if any variant has stock in either pool.
    pub fn has_stock(&self) -> bool {
        self.variants.iter().any(Variant::is_in_stock)
    }

    /// Check if any variant carries the given weight label.
    pub fn has_weight_label(&self, label: &str) -> bool {
        self.variants.iter().any(|v| v.weight_label() == label)
    }
}

/// A purchasable variant of a product (e.g., a 500g bag).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Unique variant identifier across the catalog.
    pub id: VariantId,
    /// Stock keeping unit (unique).
    #[serde(default)]
    pub sku: String,
    /// Unit price.
    pub price: Price,
    /// Units held in the main warehouse.
    #[serde(default)]
    pub warehouse_stock: u32,
    /// Units held in the secondary location.
    #[serde(default)]
    pub secondary_stock: u32,
    /// Weight amount, paired with `weight_unit`.
    #[serde(default)]
    pub weight_value: Decimal,
    /// Weight unit (e.g., "g", "kg").
    #[serde(default)]
    pub weight_unit: String,
    /// Flavor, for products sold in several flavors.
    #[serde(default)]
    pub flavor_id: Option<FlavorId>,
}

impl Variant {
    /// Create a variant with no stock and no weight.
    pub fn new(id: impl Into<VariantId>, price: impl Into<Price>) -> Self {
        Self {
            id: id.into(),
            sku: String::new(),
            price: price.into(),
            warehouse_stock: 0,
            secondary_stock: 0,
            weight_value: Decimal::ZERO,
            weight_unit: String::new(),
            flavor_id: None,
        }
    }

    /// Set stock for both pools.
    pub fn with_stock(mut self, warehouse: u32, secondary: u32) -> Self {
        self.warehouse_stock = warehouse;
        self.secondary_stock = secondary;
        self
    }

    /// Set the weight specification.
    pub fn with_weight(mut self, value: impl Into<Decimal>, unit: impl Into<String>) -> Self {
        self.weight_value = value.into();
        self.weight_unit = unit.into();
        self
    }

    /// Set the SKU.
    pub fn with_sku(mut self, sku: impl Into<String>) -> Self {
        self.sku = sku.into();
        self
    }

    /// Combined stock over both pools.
    pub fn total_stock(&self) -> u64 {
        u64::from(self.warehouse_stock) + u64::from(self.secondary_stock)
    }

    /// Check if either pool has stock.
    pub fn is_in_stock(&self) -> bool {
        self.warehouse_stock > 0 || self.secondary_stock > 0
    }

    /// Display label for the weight, e.g. `500` + `g` gives `"500g"`.
    ///
    /// Empty when the variant carries no weight specification at all.
    pub fn weight_label(&self) -> String {
        let unit = self.weight_unit.trim();
        if self.weight_value.is_zero() && unit.is_empty() {
            return String::new();
        }
        format!("{}{}", self.weight_value.normalize(), unit)
    }
}

/// Decode a product list as returned by the storefront API.
pub fn products_from_json(payload: &str) -> Result<Vec<Product>, CatalogError> {
    let products: Vec<Product> = serde_json::from_str(payload)?;
    tracing::debug!(count = products.len(), "decoded product payload");
    Ok(products)
}
