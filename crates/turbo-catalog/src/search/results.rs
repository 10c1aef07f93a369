//! Listing results and pagination.

use crate::catalog::{Product, ProductSummary};
use crate::search::{Facet, FacetCounts};
use serde::Serialize;

/// A product paired with its freshly derived summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListedProduct<'a> {
    pub product: &'a Product,
    pub summary: ProductSummary,
}

impl<'a> ListedProduct<'a> {
    /// Derive the summary for a product.
    pub fn new(product: &'a Product) -> Self {
        Self {
            product,
            summary: ProductSummary::of(product),
        }
    }
}

/// Pagination info.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Pagination {
    /// Requested page (1-indexed). Not clamped to `total_pages`.
    pub page: usize,
    /// Items per page.
    pub per_page: usize,
    /// Total number of items.
    pub total: usize,
    /// Total number of pages, zero when there are no items.
    pub total_pages: usize,
    /// Whether there's a next page.
    pub has_next: bool,
    /// Whether there's a previous page.
    pub has_prev: bool,
}

impl Pagination {
    /// Create pagination info. A zero `per_page` is treated as one.
    pub fn new(page: usize, per_page: usize, total: usize) -> Self {
        let per_page = per_page.max(1);
        let total_pages = total.div_ceil(per_page);

        Self {
            page,
            per_page,
            total,
            total_pages,
            has_next: page < total_pages,
            has_prev: page > 1 && total_pages > 0,
        }
    }

    /// Check if the page lies within `[1, total_pages]`.
    pub fn is_in_range(&self) -> bool {
        self.page >= 1 && self.page <= self.total_pages
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.per_page)
    }

    /// The items of this page. Empty when the page is out of range.
    pub fn slice<'s, T>(&self, items: &'s [T]) -> &'s [T] {
        if !self.is_in_range() {
            return &[];
        }
        let start = self.offset().min(items.len());
        let end = start.saturating_add(self.per_page).min(items.len());
        &items[start..end]
    }

    /// Get page numbers for display (e.g., [3, 4, 5, 6, 7]).
    pub fn page_numbers(&self, max_visible: usize) -> Vec<usize> {
        if self.total_pages <= max_visible {
            return (1..=self.total_pages).collect();
        }
        if max_visible == 0 {
            return Vec::new();
        }

        let half = max_visible / 2;
        let current = self.page.clamp(1, self.total_pages);
        let start = current.saturating_sub(half).max(1);
        let end = (start + max_visible - 1).min(self.total_pages);
        let start = (end + 1).saturating_sub(max_visible).max(1);

        (start..=end).collect()
    }

    /// Check if on first page.
    pub fn is_first(&self) -> bool {
        self.page == 1
    }

    /// Check if on last page.
    pub fn is_last(&self) -> bool {
        self.page >= self.total_pages
    }

    /// Get start item number (1-indexed), zero when the page is empty.
    pub fn start_item(&self) -> usize {
        if self.is_in_range() {
            self.offset() + 1
        } else {
            0
        }
    }

    /// Get end item number, zero when the page is empty.
    pub fn end_item(&self) -> usize {
        if self.is_in_range() {
            (self.page * self.per_page).min(self.total)
        } else {
            0
        }
    }
}

/// One rendered catalog page.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage<T> {
    /// The items on the current page.
    pub items: Vec<T>,
    /// Pagination info.
    pub pagination: Pagination,
    /// Raw facet counts over the full catalog.
    pub facet_counts: FacetCounts,
    /// Facets ready for rendering, with labels and selection flags.
    pub facets: Vec<Facet>,
}

impl<T> CatalogPage<T> {
    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get number of items in this page.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// The requested page number.
    pub fn current_page(&self) -> usize {
        self.pagination.page
    }

    /// Total number of pages.
    pub fn total_pages(&self) -> usize {
        self.pagination.total_pages
    }
}
