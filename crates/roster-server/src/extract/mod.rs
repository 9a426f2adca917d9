//! Request extractors with descriptive rejections.
//!
//! - [`Query`] parses the query string and answers malformed input with a
//!   `400 Bad Request` that names the offending parameter.
//! - [`ValidateQuery`] additionally runs the `validator` rules of the target
//!   type before the handler is called.

pub mod reject;

pub use crate::extract::reject::{Query, ValidateQuery};
