//! Shareable query representation of a filter state.
//!
//! A [`FilterState`] maps to a flat key/value map: multi-valued dimensions
//! become comma-joined lists, price bounds and the sort mode become scalars.
//! Keys are omitted when their dimension is unconstrained, so an empty state
//! maps to an empty map.

use crate::ids::{BrandId, CategoryId};
use crate::money::Price;
use crate::search::{Availability, FilterState, SortMode};
use percent_encoding::{
    percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS, NON_ALPHANUMERIC,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const KEY_AVAILABILITY: &str = "availability";
pub const KEY_CATEGORY: &str = "category";
pub const KEY_WEIGHT: &str = "weight";
pub const KEY_BRAND: &str = "brand";
pub const KEY_MIN_PRICE: &str = "minPrice";
pub const KEY_MAX_PRICE: &str = "maxPrice";
pub const KEY_SORT: &str = "sort";

/// Characters escaped inside a single list element.
const LIST_ELEMENT: &AsciiSet = &CONTROLS.add(b',').add(b'%');

/// Characters escaped in a URL query component.
const QUERY_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Flat key/value form of a filter state, as kept in the page URL.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Render as a URL query string (without the leading `?`).
    pub fn to_query_string(&self) -> String {
        self.0
            .iter()
            .map(|(k, v)| {
                format!(
                    "{}={}",
                    utf8_percent_encode(k, QUERY_COMPONENT),
                    utf8_percent_encode(v, QUERY_COMPONENT)
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    /// Parse a URL query string. A leading `?` is accepted; `+` decodes to a
    /// space. Pairs without a key are skipped and later duplicates win.
    pub fn from_query_string(qs: &str) -> Self {
        let mut params = Self::new();
        for pair in qs.trim_start_matches('?').split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = decode_component(parts.next().unwrap_or(""));
            let value = decode_component(parts.next().unwrap_or(""));
            if !key.is_empty() {
                params.insert(key, value);
            }
        }
        params
    }
}

impl FromIterator<(String, String)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn decode_component(raw: &str) -> String {
    percent_decode_str(&raw.replace('+', " "))
        .decode_utf8_lossy()
        .into_owned()
}

fn join_list<'a>(values: impl Iterator<Item = &'a str>) -> String {
    values
        .map(|v| utf8_percent_encode(v, LIST_ELEMENT).to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn split_list(raw: &str) -> impl Iterator<Item = String> + '_ {
    raw.split(',')
        .map(|v| percent_decode_str(v).decode_utf8_lossy().into_owned())
        .filter(|v| !v.trim().is_empty())
}

impl FilterState {
    /// Serialize into the query representation.
    pub fn to_query(&self) -> QueryParams {
        let mut params = QueryParams::new();

        if !self.availability.is_empty() {
            params.insert(
                KEY_AVAILABILITY,
                join_list(self.availability.iter().map(|a| a.as_str())),
            );
        }
        if !self.categories.is_empty() {
            params.insert(KEY_CATEGORY, join_list(self.categories.iter().map(|c| c.as_str())));
        }
        if !self.weights.is_empty() {
            params.insert(KEY_WEIGHT, join_list(self.weights.iter().map(String::as_str)));
        }
        if !self.brands.is_empty() {
            params.insert(KEY_BRAND, join_list(self.brands.iter().map(|b| b.as_str())));
        }
        if let Some(min) = self.min_price {
            params.insert(KEY_MIN_PRICE, min.to_string());
        }
        if let Some(max) = self.max_price {
            params.insert(KEY_MAX_PRICE, max.to_string());
        }
        if self.sort != SortMode::default() {
            params.insert(KEY_SORT, self.sort.as_str());
        }

        params
    }

    /// Parse the query representation.
    ///
    /// Never fails: unknown keys are ignored, unrecognised availability tokens
    /// are dropped, malformed price bounds become unconstrained and an unknown
    /// sort falls back to the default.
    pub fn from_query(params: &QueryParams) -> Self {
        let mut state = FilterState::new();

        if let Some(raw) = params.get(KEY_AVAILABILITY) {
            state.availability = split_list(raw)
                .filter_map(|token| Availability::from_str(&token))
                .collect();
        }
        if let Some(raw) = params.get(KEY_CATEGORY) {
            state.categories = split_list(raw).map(CategoryId::new).collect();
        }
        if let Some(raw) = params.get(KEY_WEIGHT) {
            state.weights = split_list(raw).collect();
        }
        if let Some(raw) = params.get(KEY_BRAND) {
            state.brands = split_list(raw).map(BrandId::new).collect();
        }

        state.min_price = params.get(KEY_MIN_PRICE).and_then(parse_price_bound);
        state.max_price = params.get(KEY_MAX_PRICE).and_then(parse_price_bound);

        if let Some(raw) = params.get(KEY_SORT) {
            state.sort = SortMode::from_str(raw).unwrap_or_else(|| {
                tracing::debug!(sort = raw, "unknown sort mode, using default");
                SortMode::default()
            });
        }

        state
    }
}

fn parse_price_bound(raw: &str) -> Option<Price> {
    let parsed = Price::parse_bound(raw);
    if parsed.is_none() && !raw.trim().is_empty() {
        tracing::warn!(bound = raw, "ignoring malformed price bound");
    }
    parsed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated() -> FilterState {
        let mut state = FilterState::new();
        state.toggle_availability(Availability::InStock);
        state.toggle_category(CategoryId::new("cereal"));
        state.toggle_category(CategoryId::new("protein"));
        state.toggle_weight("500g");
        state.toggle_brand(BrandId::new("acme"));
        state.min_price = Some(Price::from(6));
        state.max_price = Some(Price::from_cents(1550));
        state.sort = SortMode::PriceAsc;
        state
    }

    #[test]
    fn test_empty_state_has_no_keys() {
        assert!(FilterState::new().to_query().is_empty());
    }

    #[test]
    fn test_serialize_layout() {
        let params = populated().to_query();
        assert_eq!(params.get(KEY_AVAILABILITY), Some("in_stock"));
        assert_eq!(params.get(KEY_CATEGORY), Some("cereal,protein"));
        assert_eq!(params.get(KEY_WEIGHT), Some("500g"));
        assert_eq!(params.get(KEY_BRAND), Some("acme"));
        assert_eq!(params.get(KEY_MIN_PRICE), Some("6"));
        assert_eq!(params.get(KEY_MAX_PRICE), Some("15.5"));
        assert_eq!(params.get(KEY_SORT), Some("price_asc"));
    }

    #[test]
    fn test_round_trip() {
        let state = populated();
        assert_eq!(FilterState::from_query(&state.to_query()), state);
    }

    #[test]
    fn test_round_trip_values_with_commas() {
        let mut state = FilterState::new();
        state.toggle_category(CategoryId::new("nuts, seeds"));
        state.toggle_weight("100%");
        state.toggle_weight("1,5kg");

        let params = state.to_query();
        assert_eq!(params.get(KEY_CATEGORY), Some("nuts%2C seeds"));
        assert_eq!(FilterState::from_query(&params), state);
    }

    #[test]
    fn test_round_trip_after_blank_id_toggles() {
        let mut state = FilterState::new();
        state.toggle_category(CategoryId::new(""));
        state.toggle_brand(BrandId::new(" "));
        state.toggle_brand(BrandId::new("acme"));

        let params = state.to_query();
        assert_eq!(params.get(KEY_CATEGORY), None);
        assert_eq!(params.get(KEY_BRAND), Some("acme"));
        assert_eq!(FilterState::from_query(&params), state);
    }

    #[test]
    fn test_parse_ignores_garbage() {
        let params: QueryParams = [
            ("availability", "in_stock,bogus,,"),
            ("minPrice", "cheap"),
            ("maxPrice", "  "),
            ("sort", "relevance"),
            ("utm_source", "newsletter"),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let state = FilterState::from_query(&params);
        assert_eq!(state.availability.len(), 1);
        assert!(state.availability.contains(&Availability::InStock));
        assert_eq!(state.min_price, None);
        assert_eq!(state.max_price, None);
        assert_eq!(state.sort, SortMode::default());
    }

    #[test]
    fn test_parse_order_within_list_does_not_matter() {
        let mut a = QueryParams::new();
        a.insert(KEY_BRAND, "b,a");
        let mut b = QueryParams::new();
        b.insert(KEY_BRAND, "a,b");
        assert_eq!(FilterState::from_query(&a), FilterState::from_query(&b));
    }

    #[test]
    fn test_query_string_round_trip() {
        let mut state = FilterState::new();
        state.toggle_category(CategoryId::new("nuts & seeds"));
        state.toggle_weight("1.5kg");
        state.min_price = Some(Price::from(2));

        let qs = state.to_query().to_query_string();
        assert!(!qs.contains(' '));
        let parsed = QueryParams::from_query_string(&format!("?{qs}"));
        assert_eq!(parsed, state.to_query());
        assert_eq!(FilterState::from_query(&parsed), state);
    }

    #[test]
    fn test_query_string_plus_is_space() {
        let params = QueryParams::from_query_string("category=dried+fruit&=orphan&brand");
        assert_eq!(params.get(KEY_CATEGORY), Some("dried fruit"));
        assert_eq!(params.get(KEY_BRAND), Some(""));
        assert_eq!(params.len(), 2);
    }
}
