//! Sort modes for catalog listings.

use crate::search::ListedProduct;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Sort options for catalog listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortMode {
    /// Sort by name A-Z.
    #[default]
    NameAsc,
    /// Sort by name Z-A.
    NameDesc,
    /// Sort by display price, low to high.
    PriceAsc,
    /// Sort by display price, high to low.
    PriceDesc,
    /// Sort by newest first.
    Newest,
    /// Sort by oldest first.
    Oldest,
}

impl SortMode {
    /// All modes in menu order.
    pub const ALL: [SortMode; 6] = [
        SortMode::NameAsc,
        SortMode::NameDesc,
        SortMode::PriceAsc,
        SortMode::PriceDesc,
        SortMode::Newest,
        SortMode::Oldest,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortMode::NameAsc => "name_asc",
            SortMode::NameDesc => "name_desc",
            SortMode::PriceAsc => "price_asc",
            SortMode::PriceDesc => "price_desc",
            SortMode::Newest => "newest",
            SortMode::Oldest => "oldest",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "name_asc" => Some(SortMode::NameAsc),
            "name_desc" => Some(SortMode::NameDesc),
            "price_asc" => Some(SortMode::PriceAsc),
            "price_desc" => Some(SortMode::PriceDesc),
            "newest" => Some(SortMode::Newest),
            "oldest" => Some(SortMode::Oldest),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortMode::NameAsc => "Name: A-Z",
            SortMode::NameDesc => "Name: Z-A",
            SortMode::PriceAsc => "Price: Low to High",
            SortMode::PriceDesc => "Price: High to Low",
            SortMode::Newest => "Newest",
            SortMode::Oldest => "Oldest",
        }
    }

    /// Compare two listed products under this mode.
    ///
    /// Products without a creation time compare as older than any dated one.
    pub fn compare(&self, a: &ListedProduct<'_>, b: &ListedProduct<'_>) -> Ordering {
        match self {
            SortMode::NameAsc => compare_names(&a.product.name, &b.product.name),
            SortMode::NameDesc => compare_names(&b.product.name, &a.product.name),
            SortMode::PriceAsc => a.summary.display_price.cmp(&b.summary.display_price),
            SortMode::PriceDesc => b.summary.display_price.cmp(&a.summary.display_price),
            SortMode::Newest => b.product.created_at.cmp(&a.product.created_at),
            SortMode::Oldest => a.product.created_at.cmp(&b.product.created_at),
        }
    }

    /// Sort in place. Equal keys keep their incoming order.
    pub fn sort(&self, items: &mut [ListedProduct<'_>]) {
        // slice::sort_by is a stable merge sort.
        items.sort_by(|a, b| self.compare(a, b));
    }
}

/// Collated name ordering.
///
/// Names compare first on their base letters, ignoring case and accents, so
/// "Élite" sorts between "Aveia" and "Zinco". Names with the same base letters
/// fall back to the case-folded composed form, which places "Elite" before
/// "Élite". Names that differ only in case compare equal.
fn compare_names(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| case_folded(a).cmp(case_folded(b)))
}

fn base_letters(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn case_folded(name: &str) -> impl Iterator<Item = char> + '_ {
    name.nfc().flat_map(char::to_lowercase)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Product, ProductSummary, Variant};
    use chrono::{TimeZone, Utc};

    fn listed(products: &[Product]) -> Vec<ListedProduct<'_>> {
        products.iter().map(ListedProduct::new).collect()
    }

    fn names(items: &[ListedProduct<'_>]) -> Vec<String> {
        items.iter().map(|i| i.product.name.clone()).collect()
    }

    fn priced(id: &str, name: &str, price: i64) -> Product {
        Product::new(id, name, "c", "b").with_variant(Variant::new(format!("{id}-v"), price))
    }

    #[test]
    fn test_sort_mode_tokens() {
        for mode in SortMode::ALL {
            assert_eq!(SortMode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(SortMode::from_str("relevance"), None);
    }

    #[test]
    fn test_name_sort_ignores_case() {
        let products = vec![
            priced("1", "banana", 1),
            priced("2", "Apple", 1),
            priced("3", "cherry", 1),
        ];
        let mut items = listed(&products);
        SortMode::NameAsc.sort(&mut items);
        assert_eq!(names(&items), vec!["Apple", "banana", "cherry"]);

        SortMode::NameDesc.sort(&mut items);
        assert_eq!(names(&items), vec!["cherry", "banana", "Apple"]);
    }

    #[test]
    fn test_name_sort_places_accented_initials_with_their_base_letter() {
        let products = vec![
            priced("1", "Zinco", 1),
            priced("2", "Óleo de Peixe", 1),
            priced("3", "Aveia", 1),
            priced("4", "Élite Whey", 1),
            priced("5", "açaí", 1),
        ];
        let mut items = listed(&products);
        SortMode::NameAsc.sort(&mut items);
        assert_eq!(
            names(&items),
            vec!["açaí", "Aveia", "Élite Whey", "Óleo de Peixe", "Zinco"]
        );

        SortMode::NameDesc.sort(&mut items);
        assert_eq!(
            names(&items),
            vec!["Zinco", "Óleo de Peixe", "Élite Whey", "Aveia", "açaí"]
        );
    }

    #[test]
    fn test_name_sort_breaks_accent_ties_deterministically() {
        let products = vec![
            priced("1", "Pão", 1),
            priced("2", "pao", 1),
            priced("3", "PAO", 1),
        ];
        let mut items = listed(&products);
        SortMode::NameAsc.sort(&mut items);
        assert_eq!(names(&items), vec!["pao", "PAO", "Pão"]);
    }

    #[test]
    fn test_price_sort_is_stable() {
        let products = vec![
            priced("1", "first", 5),
            priced("2", "pricey", 9),
            priced("3", "second", 5),
            priced("4", "third", 5),
        ];
        let mut items = listed(&products);
        SortMode::PriceAsc.sort(&mut items);
        assert_eq!(names(&items), vec!["first", "second", "third", "pricey"]);

        let mut items = listed(&products);
        SortMode::PriceDesc.sort(&mut items);
        assert_eq!(names(&items), vec!["pricey", "first", "second", "third"]);
    }

    #[test]
    fn test_created_sort_places_undated_as_oldest() {
        let products = vec![
            priced("1", "undated", 1),
            priced("2", "old", 1)
                .with_created_at(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap()),
            priced("3", "new", 1)
                .with_created_at(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()),
        ];

        let mut items = listed(&products);
        SortMode::Newest.sort(&mut items);
        assert_eq!(names(&items), vec!["new", "old", "undated"]);

        SortMode::Oldest.sort(&mut items);
        assert_eq!(names(&items), vec!["undated", "old", "new"]);
    }

    #[test]
    fn test_compare_uses_summary_price() {
        let cheap = Product::new("a", "A", "c", "b")
            .with_variant(Variant::new("a1", 30))
            .with_variant(Variant::new("a2", 2));
        let mid = priced("m", "M", 10);
        let (x, y) = (ListedProduct::new(&cheap), ListedProduct::new(&mid));
        assert_eq!(x.summary, ProductSummary::of(&cheap));
        assert_eq!(SortMode::PriceAsc.compare(&x, &y), Ordering::Less);
    }
}
