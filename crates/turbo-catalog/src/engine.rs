//! Catalog engine.
//!
//! Owns the product list, the filter store and the current page, and exposes
//! the mutation entry points the storefront UI calls. Nothing derived is
//! cached: [`CatalogEngine::view`] runs aggregate → facets → filter → sort →
//! paginate from scratch each time.
//!
//! Any change to the filter selection, the sort order or the product list
//! moves the shopper back to page one, so a page number never outlives the
//! result set it was chosen from.

use crate::catalog::{CatalogLabels, Product};
use crate::config::CatalogConfig;
use crate::ids::{BrandId, CategoryId};
use crate::money::Price;
use crate::search::{
    Availability, CatalogPage, FacetCounts, FilterState, FilterStore, ListedProduct, Pagination,
    QueryParams, SortMode,
};

/// Catalog query engine for one browsing session.
#[derive(Debug, Clone)]
pub struct CatalogEngine {
    config: CatalogConfig,
    products: Vec<Product>,
    labels: CatalogLabels,
    store: FilterStore,
    page: usize,
}

impl CatalogEngine {
    /// Create an engine with no products and an empty selection.
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            config,
            products: Vec::new(),
            labels: CatalogLabels::default(),
            store: FilterStore::new(),
            page: 1,
        }
    }

    /// Set the initial product list.
    pub fn with_products(mut self, products: Vec<Product>) -> Self {
        self.products = products;
        self
    }

    /// Set the category/brand label lookup.
    pub fn with_labels(mut self, labels: CatalogLabels) -> Self {
        self.labels = labels;
        self
    }

    /// Restore the selection from a persisted representation.
    pub fn with_query(mut self, query: &QueryParams) -> Self {
        self.store = FilterStore::from_query(query);
        self
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn filters(&self) -> &FilterState {
        self.store.state()
    }

    /// The persisted representation of the current selection.
    pub fn query(&self) -> &QueryParams {
        self.store.query()
    }

    /// The requested page (1-indexed).
    pub fn current_page(&self) -> usize {
        self.page
    }

    fn mutate<R>(&mut self, f: impl FnOnce(&mut FilterState) -> R) -> R {
        let result = self.store.update(f);
        self.page = 1;
        result
    }

    /// Toggle an availability value. Returns whether it is now selected.
    pub fn toggle_availability(&mut self, value: Availability) -> bool {
        self.mutate(|s| s.toggle_availability(value))
    }

    pub fn toggle_category(&mut self, id: impl Into<CategoryId>) -> bool {
        let id = id.into();
        self.mutate(|s| s.toggle_category(id))
    }

    pub fn toggle_weight(&mut self, label: impl Into<String>) -> bool {
        let label = label.into();
        self.mutate(|s| s.toggle_weight(label))
    }

    pub fn toggle_brand(&mut self, id: impl Into<BrandId>) -> bool {
        let id = id.into();
        self.mutate(|s| s.toggle_brand(id))
    }

    /// Set or clear the lower price bound.
    pub fn set_min_price(&mut self, bound: Option<Price>) {
        self.mutate(|s| s.min_price = bound);
    }

    /// Set or clear the upper price bound.
    pub fn set_max_price(&mut self, bound: Option<Price>) {
        self.mutate(|s| s.max_price = bound);
    }

    /// Set the lower bound from raw input. Non-numeric input clears it.
    pub fn set_min_price_input(&mut self, input: &str) {
        let bound = parse_input(input);
        self.set_min_price(bound);
    }

    /// Set the upper bound from raw input. Non-numeric input clears it.
    pub fn set_max_price_input(&mut self, input: &str) {
        let bound = parse_input(input);
        self.set_max_price(bound);
    }

    pub fn set_sort(&mut self, sort: SortMode) {
        self.mutate(|s| s.sort = sort);
    }

    /// Reset every dimension and price bound.
    pub fn clear_filters(&mut self) {
        self.mutate(FilterState::clear_filters);
    }

    /// Request a page. The number is kept as given; pages outside
    /// `[1, total_pages]` render empty.
    pub fn go_to_page(&mut self, page: usize) {
        self.page = page;
    }

    /// Replace the product list, e.g. after a fresh fetch.
    pub fn replace_products(&mut self, products: Vec<Product>) {
        tracing::debug!(count = products.len(), "replacing catalog products");
        self.products = products;
        self.page = 1;
    }

    /// Replace the label lookup. Labels do not affect the result set.
    pub fn replace_labels(&mut self, labels: CatalogLabels) {
        self.labels = labels;
    }

    /// Overwrite the selection from an external representation (reload,
    /// back/forward navigation, shared link). Returns whether it changed.
    pub fn sync_from_query(&mut self, query: &QueryParams) -> bool {
        let changed = self.store.replace_from_query(query);
        if changed {
            self.page = 1;
        }
        tracing::debug!(changed, "synced filters from query");
        changed
    }

    /// Every product passing the current filters, in sort order.
    pub fn results(&self) -> Vec<ListedProduct<'_>> {
        let state = self.store.state();
        let policy = self.config.both_availability;

        let mut listed: Vec<ListedProduct<'_>> = self
            .products
            .iter()
            .map(ListedProduct::new)
            .filter(|item| state.matches(item.product, &item.summary, policy))
            .collect();
        state.sort.sort(&mut listed);
        listed
    }

    /// Facet counts over the full product list.
    pub fn facet_counts(&self) -> FacetCounts {
        FacetCounts::compute(&self.products)
    }

    /// Compute the current page from scratch.
    pub fn view(&self) -> CatalogPage<ListedProduct<'_>> {
        let facet_counts = self.facet_counts();
        let facets = facet_counts.to_facets(self.store.state(), &self.labels);

        let results = self.results();
        let pagination = Pagination::new(self.page, self.config.page_size, results.len());
        let items = pagination.slice(&results).to_vec();

        if !pagination.is_in_range() && pagination.total > 0 {
            tracing::warn!(
                page = self.page,
                total_pages = pagination.total_pages,
                "requested page is out of range"
            );
        }
        tracing::debug!(
            products = self.products.len(),
            matched = pagination.total,
            page = pagination.page,
            total_pages = pagination.total_pages,
            "recomputed catalog view"
        );

        CatalogPage {
            items,
            pagination,
            facet_counts,
            facets,
        }
    }

    /// Page links for the pager.
    pub fn page_numbers(&self, pagination: &Pagination) -> Vec<usize> {
        pagination.page_numbers(self.config.max_visible_pages)
    }
}

impl Default for CatalogEngine {
    fn default() -> Self {
        Self::new(CatalogConfig::default())
    }
}

fn parse_input(input: &str) -> Option<Price> {
    let bound = Price::parse_bound(input);
    if bound.is_none() && !input.trim().is_empty() {
        tracing::warn!(input, "price input is not a number, leaving bound unconstrained");
    }
    bound
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Variant;
    use crate::search::KEY_CATEGORY;

    fn products(n: usize) -> Vec<Product> {
        (0..n)
            .map(|i| {
                Product::new(format!("p{i}"), format!("Item {i:02}"), "c1", "b1")
                    .with_variant(Variant::new(format!("v{i}"), i as i64).with_stock(1, 0))
            })
            .collect()
    }

    fn engine(n: usize) -> CatalogEngine {
        CatalogEngine::new(CatalogConfig::default()).with_products(products(n))
    }

    #[test]
    fn test_new_engine_starts_on_page_one() {
        let engine = engine(3);
        assert_eq!(engine.current_page(), 1);
        assert!(engine.query().is_empty());
        assert_eq!(engine.view().len(), 3);
    }

    #[test]
    fn test_default_engine_behaves_like_new() {
        let engine = CatalogEngine::default();
        assert_eq!(engine.view().pagination.total_pages, 0);
    }

    #[test]
    fn test_mutations_reset_page() {
        let mut engine = engine(30);

        engine.go_to_page(3);
        engine.toggle_brand("b1");
        assert_eq!(engine.current_page(), 1);

        engine.go_to_page(2);
        engine.set_sort(SortMode::PriceDesc);
        assert_eq!(engine.current_page(), 1);

        engine.go_to_page(2);
        engine.set_min_price_input("3");
        assert_eq!(engine.current_page(), 1);

        engine.go_to_page(2);
        engine.clear_filters();
        assert_eq!(engine.current_page(), 1);

        engine.go_to_page(2);
        engine.replace_products(products(5));
        assert_eq!(engine.current_page(), 1);
    }

    #[test]
    fn test_mutations_update_query() {
        let mut engine = engine(3);
        engine.toggle_category("c1");
        assert_eq!(engine.query().get(KEY_CATEGORY), Some("c1"));

        engine.clear_filters();
        assert!(engine.query().is_empty());
    }

    #[test]
    fn test_invalid_price_input_clears_bound() {
        let mut engine = engine(3);
        engine.set_max_price_input("1");
        assert_eq!(engine.filters().max_price, Some(Price::from(1)));

        engine.set_max_price_input("one");
        assert_eq!(engine.filters().max_price, None);
        assert_eq!(engine.view().len(), 3);
    }

    #[test]
    fn test_sync_from_query_resets_page_only_on_change() {
        let mut engine = engine(30);
        engine.toggle_category("c1");
        let same = engine.query().clone();

        engine.go_to_page(2);
        assert!(!engine.sync_from_query(&same));
        assert_eq!(engine.current_page(), 2);

        assert!(engine.sync_from_query(&QueryParams::new()));
        assert_eq!(engine.current_page(), 1);
        assert!(!engine.filters().has_filters());
    }

    #[test]
    fn test_go_to_page_is_not_clamped() {
        let mut engine = engine(10);
        engine.go_to_page(5);
        let view = engine.view();
        assert_eq!(view.current_page(), 5);
        assert_eq!(view.total_pages(), 2);
        assert!(view.is_empty());
    }

    #[test]
    fn test_page_numbers_use_config() {
        let engine = CatalogEngine::new(CatalogConfig::default().with_page_size(1))
            .with_products(products(20));
        let view = engine.view();
        assert_eq!(engine.page_numbers(&view.pagination), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_with_query_restores_selection() {
        let mut query = QueryParams::new();
        query.insert(KEY_CATEGORY, "other");
        let engine = engine(4).with_query(&query);
        assert!(engine.view().is_empty());
        assert_eq!(engine.facet_counts().category_count(&CategoryId::new("c1")), 4);
    }
}
