//! One page of records together with its navigation metadata.

use serde::{Deserialize, Serialize};

use super::{PageRequest, PageWindow, PaginationError};

/// Result of an offset-paginated query.
///
/// Built once per request from the page items and the total number of
/// matching records; the navigation fields are derived by [`PageWindow`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagedResult<T> {
    /// Records of the current page, at most `page_size` of them.
    pub items: Vec<T>,
    /// Number of records matching the query across all pages.
    pub total_items: i64,
    /// Number of records per page.
    pub page_size: i64,
    /// Current page, clamped to `[1, max(total_pages, 1)]`.
    pub current_page: i64,
    /// Number of pages.
    pub total_pages: i64,
    /// First page number of the navigation window.
    pub start_page: i64,
    /// Last page number of the navigation window (inclusive).
    pub end_page: i64,
    /// Page numbers from `start_page` to `end_page`.
    pub page_numbers: Vec<i64>,
}

impl<T> PagedResult<T> {
    /// Creates a paged result for `items` out of `total_items` matching records.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if the request or the
    /// total is outside of the accepted range.
    pub fn new(
        items: Vec<T>,
        total_items: i64,
        request: &PageRequest,
    ) -> Result<Self, PaginationError> {
        let window = PageWindow::compute(
            total_items,
            request.page,
            request.page_size,
            request.max_nav_links,
        )?;

        Ok(Self {
            items,
            total_items,
            page_size: request.page_size,
            current_page: window.current_page,
            total_pages: window.total_pages,
            start_page: window.start_page,
            end_page: window.end_page,
            page_numbers: window.page_numbers().collect(),
        })
    }

    /// Returns whether this page carries no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns whether a page exists before the current one.
    #[inline]
    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    /// Returns whether a page exists after the current one.
    #[inline]
    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages
    }

    /// Returns the previous page number, if any.
    #[inline]
    pub fn previous_page(&self) -> Option<i64> {
        self.has_previous_page().then(|| self.current_page - 1)
    }

    /// Returns the next page number, if any.
    #[inline]
    pub fn next_page(&self) -> Option<i64> {
        self.has_next_page().then(|| self.current_page + 1)
    }

    /// Maps the items to a different type, keeping the metadata.
    pub fn map<U, F>(self, f: F) -> PagedResult<U>
    where
        F: FnMut(T) -> U,
    {
        PagedResult {
            items: self.items.into_iter().map(f).collect(),
            total_items: self.total_items,
            page_size: self.page_size,
            current_page: self.current_page,
            total_pages: self.total_pages,
            start_page: self.start_page,
            end_page: self.end_page,
            page_numbers: self.page_numbers,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paged_result_carries_window() {
        let request = PageRequest::new(10, 10, 5);
        let items: Vec<i64> = (91..=100).collect();
        let page = PagedResult::new(items, 200, &request).unwrap();

        assert_eq!(page.items.len(), 10);
        assert_eq!(page.total_items, 200);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.current_page, 10);
        assert_eq!(page.total_pages, 20);
        assert_eq!(page.page_numbers, vec![8, 9, 10, 11, 12]);
        assert_eq!((page.start_page, page.end_page), (8, 12));
    }

    #[test]
    fn paged_result_navigation() {
        let first = PagedResult::new(vec![1], 47, &PageRequest::new(1, 10, 5)).unwrap();
        assert!(!first.has_previous_page());
        assert_eq!(first.previous_page(), None);
        assert_eq!(first.next_page(), Some(2));

        let last = PagedResult::new(vec![1], 47, &PageRequest::new(5, 10, 5)).unwrap();
        assert_eq!(last.previous_page(), Some(4));
        assert!(!last.has_next_page());
        assert_eq!(last.next_page(), None);
    }

    #[test]
    fn paged_result_past_last_page() {
        let page = PagedResult::<i64>::new(Vec::new(), 47, &PageRequest::new(9, 10, 5)).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.current_page, 5);
        assert_eq!(page.page_numbers, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn empty_paged_result() {
        let page = PagedResult::<i64>::new(Vec::new(), 0, &PageRequest::new(5, 10, 5)).unwrap();
        assert!(page.is_empty());
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert!(page.page_numbers.is_empty());
        assert!(!page.has_previous_page());
        assert!(!page.has_next_page());
    }

    #[test]
    fn paged_result_rejects_invalid_request() {
        let error = PagedResult::<i64>::new(Vec::new(), 10, &PageRequest::new(1, 0, 5));
        assert!(error.is_err());
    }

    #[test]
    fn paged_result_map_keeps_metadata() {
        let page = PagedResult::new(vec![1, 2, 3], 3, &PageRequest::new(1, 10, 5)).unwrap();
        let mapped = page.clone().map(|n| n.to_string());

        assert_eq!(mapped.items, vec!["1", "2", "3"]);
        assert_eq!(mapped.total_items, page.total_items);
        assert_eq!(mapped.page_numbers, page.page_numbers);
    }
}
