//! Filter state and predicates.

use crate::catalog::{Product, ProductSummary};
use crate::ids::{BrandId, CategoryId};
use crate::money::Price;
use crate::search::SortMode;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Stock availability facet values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    /// At least one variant has stock in some pool.
    InStock,
    /// No variant has stock in any pool.
    OutOfStock,
}

impl Availability {
    /// All values in display order.
    pub const ALL: [Availability; 2] = [Availability::InStock, Availability::OutOfStock];

    pub fn as_str(&self) -> &'static str {
        match self {
            Availability::InStock => "in_stock",
            Availability::OutOfStock => "out_of_stock",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "in_stock" => Some(Availability::InStock),
            "out_of_stock" => Some(Availability::OutOfStock),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Availability::InStock => "In stock",
            Availability::OutOfStock => "Out of stock",
        }
    }

    /// Which bucket a product falls into.
    pub fn of(product: &Product) -> Self {
        if product.has_stock() {
            Availability::InStock
        } else {
            Availability::OutOfStock
        }
    }
}

/// How to treat a selection of both availability values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BothAvailability {
    /// In stock takes precedence; out-of-stock products stay hidden.
    #[default]
    InStockOnly,
    /// Both selected means no availability constraint.
    Unconstrained,
}

/// The shopper's current facet selection and sort order.
///
/// Selections within a dimension are OR-ed; dimensions are AND-ed.
/// An empty selection places no constraint on its dimension.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub availability: BTreeSet<Availability>,
    pub min_price: Option<Price>,
    pub max_price: Option<Price>,
    pub categories: BTreeSet<CategoryId>,
    pub weights: BTreeSet<String>,
    pub brands: BTreeSet<BrandId>,
    pub sort: SortMode,
}

/// Flip membership of `value` in `set`. Returns whether it is now selected.
fn toggle<T: Ord>(set: &mut BTreeSet<T>, value: T) -> bool {
    if set.remove(&value) {
        false
    } else {
        set.insert(value);
        true
    }
}

impl FilterState {
    /// Create an empty filter state with the default sort.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_availability(&mut self, value: Availability) -> bool {
        toggle(&mut self.availability, value)
    }

    /// Toggle a category. Blank ids are ignored.
    pub fn toggle_category(&mut self, id: CategoryId) -> bool {
        if id.as_str().trim().is_empty() {
            return false;
        }
        toggle(&mut self.categories, id)
    }

    /// Toggle a weight label. Blank labels are ignored.
    pub fn toggle_weight(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        if label.trim().is_empty() {
            return false;
        }
        toggle(&mut self.weights, label)
    }

    /// Toggle a brand. Blank ids are ignored.
    pub fn toggle_brand(&mut self, id: BrandId) -> bool {
        if id.as_str().trim().is_empty() {
            return false;
        }
        toggle(&mut self.brands, id)
    }

    /// Check if any dimension or price bound constrains the result.
    pub fn has_filters(&self) -> bool {
        !self.availability.is_empty()
            || self.min_price.is_some()
            || self.max_price.is_some()
            || !self.categories.is_empty()
            || !self.weights.is_empty()
            || !self.brands.is_empty()
    }

    /// Reset every dimension and price bound. The sort order is kept.
    pub fn clear_filters(&mut self) {
        let sort = self.sort;
        *self = Self {
            sort,
            ..Self::default()
        };
    }

    /// The availability bucket to keep, if any.
    fn availability_constraint(&self, policy: BothAvailability) -> Option<Availability> {
        let in_stock = self.availability.contains(&Availability::InStock);
        let out_of_stock = self.availability.contains(&Availability::OutOfStock);
        match (in_stock, out_of_stock) {
            (true, true) if policy == BothAvailability::Unconstrained => None,
            (true, _) => Some(Availability::InStock),
            (false, true) => Some(Availability::OutOfStock),
            (false, false) => None,
        }
    }

    /// Check whether a product passes every active predicate.
    pub fn matches(
        &self,
        product: &Product,
        summary: &ProductSummary,
        policy: BothAvailability,
    ) -> bool {
        if let Some(wanted) = self.availability_constraint(policy) {
            if Availability::of(product) != wanted {
                return false;
            }
        }

        if let Some(min) = self.min_price {
            if summary.display_price < min {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if summary.display_price > max {
                return false;
            }
        }

        if !self.categories.is_empty() && !self.categories.contains(&product.category_id) {
            return false;
        }

        if !self.weights.is_empty()
            && !product
                .variants
                .iter()
                .any(|v| self.weights.contains(&v.weight_label()))
        {
            return false;
        }

        if !self.brands.is_empty() && !self.brands.contains(&product.brand_id) {
            return false;
        }

        true
    }
}
