//! Client-side pagination state.

use std::ops::Range;

/// Page size and current page of a table.
///
/// `current_page` is 1-based and never exceeds the page count once
/// [`clamp`](Pagination::clamp) has run against the current row count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_size: usize,
    current_page: usize,
}

impl Pagination {
    /// Creates pagination on page 1. A zero page size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            current_page: 1,
        }
    }

    /// Rows per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages needed for `rows` rows; zero when there are none.
    pub fn total_pages(&self, rows: usize) -> usize {
        rows.div_ceil(self.page_size)
    }

    /// Moves to page `page`, clamped into `[1, max(total_pages, 1)]`.
    pub fn set_page(&mut self, page: usize, rows: usize) {
        let last = self.total_pages(rows).max(1);
        self.current_page = page.clamp(1, last);
    }

    /// Changes the page size and returns to page 1. Zero is ignored.
    pub fn set_page_size(&mut self, page_size: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        self.page_size = page_size;
        self.current_page = 1;
        true
    }

    /// Pulls the current page back inside the page count for `rows` rows.
    pub fn clamp(&mut self, rows: usize) {
        self.set_page(self.current_page, rows);
    }

    /// Index range of the current page within `rows` rows.
    pub fn range(&self, rows: usize) -> Range<usize> {
        let start = (self.current_page - 1).saturating_mul(self.page_size).min(rows);
        let end = start.saturating_add(self.page_size).min(rows);
        start..end
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_PAGE_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_pages() {
        let pagination = Pagination::new(10);
        assert_eq!(pagination.total_pages(0), 0);
        assert_eq!(pagination.total_pages(1), 1);
        assert_eq!(pagination.total_pages(10), 1);
        assert_eq!(pagination.total_pages(25), 3);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut pagination = Pagination::new(10);
        pagination.set_page(7, 25);
        assert_eq!(pagination.current_page(), 3);
        pagination.set_page(0, 25);
        assert_eq!(pagination.current_page(), 1);
        pagination.set_page(4, 0);
        assert_eq!(pagination.current_page(), 1);
    }

    #[test]
    fn test_set_page_size_resets_page() {
        let mut pagination = Pagination::new(10);
        pagination.set_page(3, 25);
        assert!(pagination.set_page_size(20));
        assert_eq!(pagination.current_page(), 1);
        assert!(!pagination.set_page_size(0));
        assert_eq!(pagination.page_size(), 20);
    }

    #[test]
    fn test_range_never_exceeds_page_size() {
        let mut pagination = Pagination::new(10);
        assert_eq!(pagination.range(25), 0..10);
        pagination.set_page(3, 25);
        assert_eq!(pagination.range(25), 20..25);
        assert_eq!(pagination.range(0), 0..0);
    }

    #[test]
    fn test_range_past_end_is_empty() {
        let mut pagination = Pagination::new(10);
        pagination.set_page(3, 25);
        assert_eq!(pagination.range(5), 5..5);
    }
}
