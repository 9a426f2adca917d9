//! Pagination and filtering types shared by the query layer.

mod filtering;
mod pagination;

pub use filtering::PersonFilter;
pub use pagination::{
    DEFAULT_MAX_NAV_LINKS, DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE, PageDefaults, PageRequest,
    PageWindow, PagedResult, PaginationError,
};
