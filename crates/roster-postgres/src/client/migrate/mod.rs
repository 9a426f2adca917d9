//! Embedded schema migrations.
//!
//! Migrations run on a blocking thread through
//! [`AsyncConnectionWrapper`](diesel_async::async_connection_wrapper::AsyncConnectionWrapper),
//! since [`diesel_migrations`] only drives synchronous connections.

mod migrate_result;
mod run_migration;

pub use migrate_result::MigrationResult;
pub use run_migration::run_pending_migrations;

use crate::{PgClient, PgResult};

/// Migration operations on a [`PgClient`].
pub trait PgClientMigrationExt {
    /// Applies every embedded migration not yet recorded in the database.
    ///
    /// Calling this on an up-to-date database is a no-op.
    fn run_pending_migrations(&self) -> impl Future<Output = PgResult<MigrationResult>> + Send;
}

impl PgClientMigrationExt for PgClient {
    async fn run_pending_migrations(&self) -> PgResult<MigrationResult> {
        run_pending_migrations(self).await
    }
}
