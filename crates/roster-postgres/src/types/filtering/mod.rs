//! Filtering options for database queries.

mod persons;

pub use persons::PersonFilter;
