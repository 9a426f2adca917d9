#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Embeds all migrations into the final binary.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

// Tracing target constants for consistent logging.

/// Tracing target for client-related operations.
pub const TRACING_TARGET_CLIENT: &str = "roster_postgres::client";

/// Tracing target for database query operations.
///
/// Use this target for logging query execution and paging results.
pub const TRACING_TARGET_QUERY: &str = "roster_postgres::queries";

/// Tracing target for database migration operations.
pub const TRACING_TARGET_MIGRATION: &str = "roster_postgres::migrations";

/// Tracing target for database connection operations.
///
/// Use this target for logging connection establishment and pool management.
pub const TRACING_TARGET_CONNECTION: &str = "roster_postgres::connection";

mod client;
pub mod error;
mod gateway;
pub mod model;
pub mod query;
mod schema;
pub mod types;

pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{
    ConnectionPool, MigrationResult, PgClient, PgClientMigrationExt, PgConfig, PgConn,
    PgPoolStatus, PooledConnection, run_pending_migrations,
};
pub use crate::error::{BoxError, PgError, PgResult};
pub use crate::gateway::PersonGateway;
pub use crate::types::{PageDefaults, PageRequest, PageWindow, PagedResult, PaginationError};
