//! Response types for HTTP handlers.

mod errors;
mod monitors;
mod persons;

pub use errors::*;
pub use monitors::*;
pub use persons::*;
