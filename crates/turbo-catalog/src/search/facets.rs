//! Facet counts.
//!
//! Counts are taken over the whole catalog, not over the filtered result, so
//! they do not shrink as the shopper narrows other dimensions.

use crate::catalog::{CatalogLabels, Product};
use crate::ids::{BrandId, CategoryId};
use crate::search::{Availability, FilterState};
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Number of products per value, for each facet dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FacetCounts {
    /// Every product lands in exactly one bucket. Both buckets are always present.
    pub availability: BTreeMap<Availability, usize>,
    pub categories: BTreeMap<CategoryId, usize>,
    /// A product counts once per distinct label among its variants.
    pub weights: BTreeMap<String, usize>,
    pub brands: BTreeMap<BrandId, usize>,
}

impl FacetCounts {
    /// Count facet values over the full product list.
    pub fn compute(products: &[Product]) -> Self {
        let mut counts = Self {
            availability: Availability::ALL.iter().map(|a| (*a, 0)).collect(),
            ..Self::default()
        };

        for product in products {
            *counts
                .availability
                .entry(Availability::of(product))
                .or_insert(0) += 1;
            *counts
                .categories
                .entry(product.category_id.clone())
                .or_insert(0) += 1;
            *counts.brands.entry(product.brand_id.clone()).or_insert(0) += 1;

            let labels: BTreeSet<String> = product
                .variants
                .iter()
                .map(|v| v.weight_label())
                .filter(|label| !label.is_empty())
                .collect();
            for label in labels {
                *counts.weights.entry(label).or_insert(0) += 1;
            }
        }

        counts
    }

    pub fn availability_count(&self, value: Availability) -> usize {
        self.availability.get(&value).copied().unwrap_or(0)
    }

    pub fn category_count(&self, id: &CategoryId) -> usize {
        self.categories.get(id).copied().unwrap_or(0)
    }

    pub fn weight_count(&self, label: &str) -> usize {
        self.weights.get(label).copied().unwrap_or(0)
    }

    pub fn brand_count(&self, id: &BrandId) -> usize {
        self.brands.get(id).copied().unwrap_or(0)
    }

    /// Build renderable facets, flagging the values selected in `state`.
    ///
    /// Category and brand values are ordered by display name; weights by label.
    pub fn to_facets(&self, state: &FilterState, labels: &CatalogLabels) -> Vec<Facet> {
        let mut availability = Facet::new("Availability", "availability");
        for (value, count) in &self.availability {
            availability.add_value(
                value.as_str(),
                value.display_name(),
                *count,
                state.availability.contains(value),
            );
        }

        let mut categories = Facet::new("Category", "category");
        for (id, count) in &self.categories {
            categories.add_value(
                id.as_str(),
                labels.category_name(id),
                *count,
                state.categories.contains(id),
            );
        }
        categories.sort_by_label();

        let mut weights = Facet::new("Weight", "weight");
        for (label, count) in &self.weights {
            weights.add_value(
                label.as_str(),
                label.as_str(),
                *count,
                state.weights.contains(label),
            );
        }

        let mut brands = Facet::new("Brand", "brand");
        for (id, count) in &self.brands {
            brands.add_value(
                id.as_str(),
                labels.brand_name(id),
                *count,
                state.brands.contains(id),
            );
        }
        brands.sort_by_label();

        vec![availability, categories, weights, brands]
    }
}

/// A facet for filtering.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Facet {
    /// Facet name (e.g., "Category").
    pub name: String,
    /// Query key this facet filters on.
    pub key: String,
    /// Facet values.
    pub values: Vec<FacetValue>,
}

impl Facet {
    pub fn new(name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            key: key.into(),
            values: Vec::new(),
        }
    }

    /// Add a value to the facet.
    pub fn add_value(
        &mut self,
        value: impl Into<String>,
        label: impl Into<String>,
        count: usize,
        selected: bool,
    ) {
        self.values.push(FacetValue {
            value: value.into(),
            label: label.into(),
            count,
            selected,
        });
    }

    fn sort_by_label(&mut self) {
        self.values
            .sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    }
}

/// A single facet value.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FacetValue {
    /// The value as written to the query.
    pub value: String,
    /// Display label.
    pub label: String,
    /// Number of products with this value.
    pub count: usize,
    /// Whether currently selected.
    pub selected: bool,
}
