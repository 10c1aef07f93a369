//! Filter state store.
//!
//! Owns the in-memory [`FilterState`] and its mirrored [`QueryParams`]. Every
//! write goes through [`FilterStore::update`] (outbound: serialize) or
//! [`FilterStore::replace_from_query`] (inbound: parse), so the two sides are
//! never out of step once a call returns.

use crate::search::{FilterState, QueryParams};

/// Single-writer holder of the shopper's filter selection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterStore {
    state: FilterState,
    query: QueryParams,
}

impl FilterStore {
    /// Create a store with an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from a persisted representation.
    pub fn from_query(query: &QueryParams) -> Self {
        let mut store = Self::new();
        store.replace_from_query(query);
        store
    }

    /// The current selection.
    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// The persisted representation of the current selection.
    pub fn query(&self) -> &QueryParams {
        &self.query
    }

    /// Apply one mutation and mirror it into the representation.
    ///
    /// Returns whatever the mutation returns.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut FilterState) -> R) -> R {
        let result = mutate(&mut self.state);
        self.query = self.state.to_query();
        result
    }

    /// Overwrite the selection from an external representation.
    ///
    /// The stored representation is the canonical re-serialization, so
    /// unknown keys and malformed values do not linger. Returns whether the
    /// selection changed.
    pub fn replace_from_query(&mut self, query: &QueryParams) -> bool {
        let state = FilterState::from_query(query);
        let changed = state != self.state;
        self.query = state.to_query();
        self.state = state;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::BrandId;
    use crate::money::Price;
    use crate::search::{SortMode, KEY_BRAND, KEY_MIN_PRICE};

    #[test]
    fn test_update_mirrors_into_query() {
        let mut store = FilterStore::new();
        let selected = store.update(|s| s.toggle_brand(BrandId::new("acme")));
        assert!(selected);
        assert_eq!(store.query().get(KEY_BRAND), Some("acme"));

        store.update(|s| s.toggle_brand(BrandId::new("acme")));
        assert!(store.query().is_empty());
    }

    #[test]
    fn test_replace_from_query_overwrites_state() {
        let mut store = FilterStore::new();
        store.update(|s| s.sort = SortMode::Oldest);

        let mut incoming = QueryParams::new();
        incoming.insert(KEY_MIN_PRICE, "4.50");
        incoming.insert("ref", "email");

        assert!(store.replace_from_query(&incoming));
        assert_eq!(store.state().min_price, Some(Price::from_cents(450)));
        assert_eq!(store.state().sort, SortMode::default());
        assert_eq!(store.query().get(KEY_MIN_PRICE), Some("4.5"));
        assert_eq!(store.query().get("ref"), None);
    }

    #[test]
    fn test_replace_with_same_selection_reports_unchanged() {
        let mut store = FilterStore::new();
        store.update(|s| s.toggle_brand(BrandId::new("acme")));
        let snapshot = store.query().clone();
        assert!(!store.replace_from_query(&snapshot));
    }

    #[test]
    fn test_state_and_query_agree() {
        let mut store = FilterStore::new();
        store.update(|s| {
            s.toggle_brand(BrandId::new("b"));
            s.max_price = Some(Price::from(12));
        });
        assert_eq!(&FilterState::from_query(store.query()), store.state());
    }
}
