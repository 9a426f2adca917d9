//! Request types for HTTP handlers.

mod persons;

pub use persons::*;
