//! Offset-based page requests and their configurable defaults.

#[cfg(feature = "config")]
use clap::Args;
use serde::{Deserialize, Serialize};

use super::PaginationError;

/// Default number of records per page.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Default number of page links in the navigation window.
pub const DEFAULT_MAX_NAV_LINKS: i64 = 5;

/// Maximum number of records per page.
pub const MAX_PAGE_SIZE: i64 = 1000;

/// Defaults applied to page requests that leave a parameter unset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "page defaults do nothing unless used to build page requests"]
pub struct PageDefaults {
    /// Number of records per page when the caller does not ask for one
    #[cfg_attr(
        feature = "config",
        arg(
            long = "default-page-size",
            env = "DEFAULT_PAGE_SIZE",
            default_value_t = DEFAULT_PAGE_SIZE
        )
    )]
    pub page_size: i64,

    /// Maximum number of page links in the navigation window
    #[cfg_attr(
        feature = "config",
        arg(
            long = "max-nav-links",
            env = "MAX_NAV_LINKS",
            default_value_t = DEFAULT_MAX_NAV_LINKS
        )
    )]
    pub max_nav_links: i64,
}

impl PageDefaults {
    /// Creates new page defaults.
    pub const fn new(page_size: i64, max_nav_links: i64) -> Self {
        Self {
            page_size,
            max_nav_links,
        }
    }

    /// Validates the defaults against the same bounds as a page request.
    pub fn validate(&self) -> Result<(), PaginationError> {
        self.request(1, None).validate()
    }

    /// Builds a request for `page`, using the default page size unless one is given.
    pub fn request(&self, page: i64, page_size: Option<i64>) -> PageRequest {
        PageRequest {
            page,
            page_size: page_size.unwrap_or(self.page_size),
            max_nav_links: self.max_nav_links,
        }
    }
}

impl Default for PageDefaults {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, DEFAULT_MAX_NAV_LINKS)
    }
}

/// A request for one page of an ordered result set.
///
/// The page number is 1-based. Values below `1` address the first page;
/// values past the last page produce an empty item list whose metadata is
/// clamped to the last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRequest {
    /// Requested page number (1-based).
    pub page: i64,
    /// Number of records per page.
    pub page_size: i64,
    /// Maximum number of page links in the navigation window.
    pub max_nav_links: i64,
}

impl PageRequest {
    /// Creates a new page request.
    pub const fn new(page: i64, page_size: i64, max_nav_links: i64) -> Self {
        Self {
            page,
            page_size,
            max_nav_links,
        }
    }

    /// Returns a copy of this request addressing `page`.
    pub const fn with_page(mut self, page: i64) -> Self {
        self.page = page;
        self
    }

    /// Checks the request before any storage I/O happens.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] for a non-positive or
    /// oversized page size, or a non-positive navigation window.
    pub fn validate(&self) -> Result<(), PaginationError> {
        if self.page_size <= 0 {
            return Err(PaginationError::invalid_argument(
                "page_size",
                self.page_size,
                "must be greater than zero",
            ));
        }

        if self.page_size > MAX_PAGE_SIZE {
            return Err(PaginationError::invalid_argument(
                "page_size",
                self.page_size,
                "must not exceed 1000",
            ));
        }

        if self.max_nav_links <= 0 {
            return Err(PaginationError::invalid_argument(
                "max_nav_links",
                self.max_nav_links,
                "must be greater than zero",
            ));
        }

        Ok(())
    }

    /// Number of records to skip, `page_size * (page - 1)`.
    #[inline]
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.page_size)
    }

    /// Maximum number of records to return.
    #[inline]
    pub fn limit(&self) -> i64 {
        self.page_size
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        PageDefaults::default().request(1, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request() {
        let request = PageRequest::default();
        assert_eq!(request.page, 1);
        assert_eq!(request.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(request.max_nav_links, DEFAULT_MAX_NAV_LINKS);
        assert!(request.validate().is_ok());
    }

    #[test]
    fn request_offset_and_limit() {
        let request = PageRequest::new(1, 20, 5);
        assert_eq!(request.limit(), 20);
        assert_eq!(request.offset(), 0);

        assert_eq!(request.with_page(2).offset(), 20);
        assert_eq!(PageRequest::new(3, 10, 5).offset(), 20);
    }

    #[test]
    fn request_below_first_page_reads_first_page() {
        assert_eq!(PageRequest::new(0, 10, 5).offset(), 0);
        assert_eq!(PageRequest::new(-4, 10, 5).offset(), 0);
    }

    #[test]
    fn request_offset_saturates() {
        let request = PageRequest::new(i64::MAX, MAX_PAGE_SIZE, 5);
        assert_eq!(request.offset(), i64::MAX);
    }

    #[test]
    fn request_validation() {
        assert_eq!(
            PageRequest::new(1, 0, 5).validate().unwrap_err().argument_name(),
            "page_size"
        );
        assert_eq!(
            PageRequest::new(1, MAX_PAGE_SIZE + 1, 5)
                .validate()
                .unwrap_err()
                .argument_name(),
            "page_size"
        );
        assert_eq!(
            PageRequest::new(1, 10, -1).validate().unwrap_err().argument_name(),
            "max_nav_links"
        );
        assert!(PageRequest::new(-10, MAX_PAGE_SIZE, 1).validate().is_ok());
    }

    #[test]
    fn defaults_fill_missing_page_size() {
        let defaults = PageDefaults::new(25, 7);
        assert_eq!(defaults.request(4, None), PageRequest::new(4, 25, 7));
        assert_eq!(defaults.request(4, Some(50)), PageRequest::new(4, 50, 7));
        assert!(defaults.validate().is_ok());
        assert!(PageDefaults::new(0, 5).validate().is_err());
    }
}
