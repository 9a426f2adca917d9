//! Offset pagination for database queries.
//!
//! A [`PageRequest`] selects the slice of records to load, [`PageWindow`]
//! derives the navigation links from the total count, and [`PagedResult`]
//! bundles both for the caller.

mod paged;
mod request;
mod window;

pub use paged::PagedResult;
pub use request::{
    DEFAULT_MAX_NAV_LINKS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageDefaults, PageRequest,
};
pub use window::{PageWindow, PaginationError};
