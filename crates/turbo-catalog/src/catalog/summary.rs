//! Derived display attributes for a product.
//!
//! A summary is recomputed from the variant list on every read so it can
//! never drift from the variants it describes.

use crate::catalog::{Product, Variant};
use crate::ids::VariantId;
use crate::money::Price;
use serde::Serialize;

/// Per-product display attributes aggregated from its variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSummary {
    /// Price of the cheapest variant, zero without variants.
    pub display_price: Price,
    /// The variant that supplied `display_price`.
    pub cheapest_variant_id: Option<VariantId>,
    /// Weight label of the cheapest variant, empty without variants.
    pub display_weight_label: String,
    /// Stock summed over both pools and all variants.
    pub total_stock: u64,
    /// True when `total_stock` is zero.
    pub sold_out: bool,
}

impl ProductSummary {
    /// Summarize a product's variants.
    ///
    /// The first variant at the minimum price wins ties, so the result depends
    /// on variant order. Stock counts are unsigned; prices are taken as given.
    pub fn of(product: &Product) -> Self {
        let cheapest = product
            .variants
            .iter()
            .fold(None, |best: Option<&Variant>, v| match best {
                Some(b) if b.price <= v.price => Some(b),
                _ => Some(v),
            });

        let total_stock = product.variants.iter().map(|v| v.total_stock()).sum();

        Self {
            display_price: cheapest.map(|v| v.price).unwrap_or_else(Price::zero),
            cheapest_variant_id: cheapest.map(|v| v.id.clone()),
            display_weight_label: cheapest.map(|v| v.weight_label()).unwrap_or_default(),
            total_stock,
            sold_out: total_stock == 0,
        }
    }
}
