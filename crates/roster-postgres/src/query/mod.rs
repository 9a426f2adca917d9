//! Repositories over the person store.
//!
//! Each repository is a trait implemented for [`PgConnection`], so it is
//! available on any pooled [`PgConn`] through deref.
//!
//! [`PgConnection`]: crate::PgConnection
//! [`PgConn`]: crate::PgConn

mod person;

pub use person::PersonRepository;
