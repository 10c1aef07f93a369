//! Search module.
//!
//! Facet counts, filter state and its query representation, sorting and
//! pagination.

mod facets;
mod filter;
mod query;
mod results;
mod sort;
mod store;

pub use facets::{Facet, FacetCounts, FacetValue};
pub use filter::{Availability, BothAvailability, FilterState};
pub use query::{
    QueryParams, KEY_AVAILABILITY, KEY_BRAND, KEY_CATEGORY, KEY_MAX_PRICE, KEY_MIN_PRICE,
    KEY_SORT, KEY_WEIGHT,
};
pub use results::{CatalogPage, ListedProduct, Pagination};
pub use sort::SortMode;
pub use store::FilterStore;
