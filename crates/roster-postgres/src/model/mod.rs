//! Database models for the person store.
//!
//! Records are owned by the external system that writes them; this crate
//! only ever reads them, so there are no insertable or changeset models.

mod person;

pub use person::Person;
