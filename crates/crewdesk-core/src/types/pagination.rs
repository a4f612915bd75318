//! Pagination types for notification list views.

use serde::{Deserialize, Serialize};

/// Default page size, matching the reference table layout.
const DEFAULT_ROWS_PER_PAGE: usize = 10;

/// A 1-based page cursor over a list whose length changes as filters and
/// mutations are applied.
///
/// The cursor is always kept within `[1, max(total_pages, 1)]`. Navigation
/// past either boundary is a no-op rather than an error, and an empty list
/// still reports a single (empty) page so a view never renders "0 / 0".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pager {
    /// Current page number (1-based).
    current_page: usize,
    /// Number of items per page.
    rows_per_page: usize,
}

impl Pager {
    /// Create a pager with the given page size. A zero page size is
    /// treated as 1.
    pub fn new(rows_per_page: usize) -> Self {
        Self {
            current_page: 1,
            rows_per_page: rows_per_page.max(1),
        }
    }

    /// Current page number (1-based).
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Page size.
    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    /// Number of pages for `item_count` items, never less than 1.
    pub fn total_pages(&self, item_count: usize) -> usize {
        if item_count == 0 {
            1
        } else {
            item_count.div_ceil(self.rows_per_page)
        }
    }

    /// Reset the cursor to the first page. Called whenever a filter input
    /// changes.
    pub fn reset(&mut self) {
        self.current_page = 1;
    }

    /// Clamp the cursor back into range after the underlying list shrank.
    pub fn clamp(&mut self, item_count: usize) {
        let total = self.total_pages(item_count);
        if self.current_page > total {
            self.current_page = total;
        }
        if self.current_page == 0 {
            self.current_page = 1;
        }
    }

    /// Jump to the first page.
    pub fn first(&mut self) {
        self.current_page = 1;
    }

    /// Move to the previous page; no-op on the first page.
    pub fn prev(&mut self) {
        self.current_page = self.current_page.saturating_sub(1).max(1);
    }

    /// Move to the next page; no-op on the last page.
    pub fn next(&mut self, item_count: usize) {
        let total = self.total_pages(item_count);
        if self.current_page < total {
            self.current_page += 1;
        }
    }

    /// Jump to the last page.
    pub fn last(&mut self, item_count: usize) {
        self.current_page = self.total_pages(item_count);
    }

    /// Half-open index range of the visible slice, clamped to the list
    /// length.
    pub fn slice_bounds(&self, item_count: usize) -> (usize, usize) {
        let start = (self.current_page - 1) * self.rows_per_page;
        let start = start.min(item_count);
        let end = (start + self.rows_per_page).min(item_count);
        (start, end)
    }

    /// Materialize the current page of `items` as a [`PageResponse`].
    pub fn paginate<T: Clone + Serialize>(&self, items: &[T]) -> PageResponse<T> {
        let (start, end) = self.slice_bounds(items.len());
        PageResponse::new(
            items[start..end].to_vec(),
            self.current_page,
            self.rows_per_page,
            items.len(),
        )
    }
}

impl Default for Pager {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS_PER_PAGE)
    }
}

/// Paginated response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageResponse<T: Serialize> {
    /// The items on this page.
    pub items: Vec<T>,
    /// Current page number (1-based).
    pub page: usize,
    /// Number of items per page.
    pub page_size: usize,
    /// Total number of items across all pages.
    pub total_items: usize,
    /// Total number of pages, never less than 1.
    pub total_pages: usize,
    /// Whether there is a next page.
    pub has_next: bool,
    /// Whether there is a previous page.
    pub has_previous: bool,
}

impl<T: Serialize> PageResponse<T> {
    /// Create a new paginated response.
    pub fn new(items: Vec<T>, page: usize, page_size: usize, total_items: usize) -> Self {
        let total_pages = if total_items == 0 {
            1
        } else {
            total_items.div_ceil(page_size)
        };
        Self {
            items,
            page,
            page_size,
            total_items,
            total_pages,
            has_next: page < total_pages,
            has_previous: page > 1,
        }
    }
}
