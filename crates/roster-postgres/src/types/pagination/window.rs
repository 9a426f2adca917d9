//! Navigation window over a paginated result set.
//!
//! Given the size of a result set and the page a caller asked for, the
//! window decides which page is current and which contiguous run of page
//! numbers should be offered as navigation links.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

/// Error returned when pagination parameters violate their preconditions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    /// A pagination parameter is outside of its accepted range.
    #[error("invalid argument `{name}` = {value}: {reason}")]
    InvalidArgument {
        /// Name of the offending parameter.
        name: &'static str,
        /// Value that was rejected.
        value: i64,
        /// Short description of the accepted range.
        reason: &'static str,
    },
}

impl PaginationError {
    /// Creates a new [`PaginationError::InvalidArgument`].
    #[inline]
    pub const fn invalid_argument(name: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidArgument {
            name,
            value,
            reason,
        }
    }

    /// Returns the name of the rejected parameter.
    #[inline]
    pub const fn argument_name(&self) -> &'static str {
        match self {
            Self::InvalidArgument { name, .. } => name,
        }
    }
}

/// Clamped current page, page count and inclusive navigation window.
///
/// When the result set is empty `total_pages` is `0`, `current_page` is `1`
/// and the window is `[1, 0]`, which contains no page numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageWindow {
    /// Current page, clamped to `[1, max(total_pages, 1)]`.
    pub current_page: i64,
    /// Number of pages, `ceil(total_items / page_size)`.
    pub total_pages: i64,
    /// First page number of the navigation window.
    pub start_page: i64,
    /// Last page number of the navigation window (inclusive).
    pub end_page: i64,
}

impl PageWindow {
    /// Computes the window for `total_items` split into pages of `page_size`,
    /// showing at most `max_nav_links` page numbers around `requested_page`.
    ///
    /// # Errors
    ///
    /// Returns [`PaginationError::InvalidArgument`] if `total_items` is
    /// negative or if `page_size` or `max_nav_links` is not positive.
    pub fn compute(
        total_items: i64,
        requested_page: i64,
        page_size: i64,
        max_nav_links: i64,
    ) -> Result<Self, PaginationError> {
        if total_items < 0 {
            return Err(PaginationError::invalid_argument(
                "total_items",
                total_items,
                "must not be negative",
            ));
        }

        if page_size <= 0 {
            return Err(PaginationError::invalid_argument(
                "page_size",
                page_size,
                "must be greater than zero",
            ));
        }

        if max_nav_links <= 0 {
            return Err(PaginationError::invalid_argument(
                "max_nav_links",
                max_nav_links,
                "must be greater than zero",
            ));
        }

        let total_pages = total_items / page_size + i64::from(total_items % page_size != 0);
        let current_page = requested_page.clamp(1, total_pages.max(1));

        if total_pages == 0 {
            return Ok(Self {
                current_page,
                total_pages,
                start_page: 1,
                end_page: 0,
            });
        }

        let (start_page, end_page) = if total_pages <= max_nav_links {
            (1, total_pages)
        } else {
            let before = max_nav_links / 2;
            let after = max_nav_links / 2 + max_nav_links % 2 - 1;

            if current_page <= before {
                (1, max_nav_links)
            } else if current_page.saturating_add(after) >= total_pages {
                (total_pages - max_nav_links + 1, total_pages)
            } else {
                (current_page - before, current_page + after)
            }
        };

        Ok(Self {
            current_page,
            total_pages,
            start_page,
            end_page,
        })
    }

    /// Returns the page numbers of the navigation window, in ascending order.
    #[inline]
    pub fn page_numbers(&self) -> RangeInclusive<i64> {
        self.start_page..=self.end_page
    }

    /// Returns the number of page links in the window.
    #[inline]
    pub fn len(&self) -> i64 {
        (self.end_page - self.start_page + 1).max(0)
    }

    /// Returns whether the window contains no page links.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns whether `page` lies inside the navigation window.
    #[inline]
    pub fn contains(&self, page: i64) -> bool {
        self.page_numbers().contains(&page)
    }
}
