//! CLI configuration management.
//!
//! ```text
//! Cli
//! ├── server: ServerConfig         # Host, port, shutdown
//! ├── middleware: MiddlewareConfig # CORS, recovery/timeouts
//! └── service: ServiceConfig       # Database, page defaults, migrations
//! ```
//!
//! All configuration can be provided via CLI arguments or environment variables.
//! Use `--help` to see all available options.
//!
//! # Example
//!
//! ```bash
//! roster --postgres-url "postgresql://..." --port 8080
//! POSTGRES_URL="postgresql://..." PORT=8080 roster
//! ```

mod middleware;
mod server;

use anyhow::Context;
use clap::Parser;
pub use middleware::MiddlewareConfig;
use roster_server::service::ServiceConfig;
use serde::{Deserialize, Serialize};
pub use server::ServerConfig;

use crate::TRACING_TARGET_CONFIG;

/// Complete CLI configuration.
#[derive(Debug, Clone, Parser, Serialize, Deserialize)]
#[command(name = "roster")]
#[command(about = "Person roster browsing server")]
#[command(version)]
pub struct Cli {
    /// Server network and lifecycle configuration.
    #[clap(flatten)]
    pub server: ServerConfig,

    /// HTTP middleware configuration (CORS, timeouts).
    #[clap(flatten)]
    pub middleware: MiddlewareConfig,

    /// Person store and listing configuration.
    #[clap(flatten)]
    pub service: ServiceConfig,
}

impl Cli {
    /// Loads environment variables from .env file (if enabled) and parses CLI arguments.
    ///
    /// The .env file is read before clap so its values act as environment
    /// defaults.
    pub fn init() -> Self {
        Self::load_dotenv();
        Self::parse()
    }

    #[cfg(feature = "dotenv")]
    fn load_dotenv() {
        if let Err(err) = dotenvy::dotenv()
            && !err.not_found()
        {
            eprintln!("Warning: failed to load .env file: {err}");
        }
    }

    #[cfg(not(feature = "dotenv"))]
    fn load_dotenv() {}

    /// Validates all configuration values.
    pub fn validate(&self) -> anyhow::Result<()> {
        self.server
            .validate()
            .context("invalid server configuration")?;
        self.middleware
            .validate()
            .context("invalid middleware configuration")?;
        self.service
            .postgres
            .validate()
            .context("invalid database configuration")?;
        self.service
            .validate_page_defaults()
            .context("invalid page defaults")?;
        Ok(())
    }

    /// Logs configuration at info level (no sensitive information).
    pub fn log(&self) {
        self.server.log();
        self.middleware.log();

        let postgres = &self.service.postgres;
        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            database_url = %postgres.database_url_masked(),
            postgres_max_connections = postgres.postgres_max_connections,
            postgres_connection_timeout_secs = ?postgres.postgres_connection_timeout_secs,
            postgres_idle_timeout_secs = ?postgres.postgres_idle_timeout_secs,
            run_migrations = self.service.postgres_run_migrations,
            "Database configuration"
        );

        tracing::info!(
            target: TRACING_TARGET_CONFIG,
            page_size = self.service.page_defaults.page_size,
            max_nav_links = self.service.page_defaults.max_nav_links,
            "Page defaults"
        );
    }
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn command_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_flags() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "roster",
            "--port",
            "8080",
            "--postgres-url",
            "postgresql://postgres:secret@db:5432/roster",
            "--default-page-size",
            "25",
            "--max-nav-links",
            "7",
            "--request-timeout",
            "10",
        ])?;

        assert_eq!(cli.server.port, 8080);
        assert_eq!(cli.service.page_defaults.page_size, 25);
        assert_eq!(cli.service.page_defaults.max_nav_links, 7);
        assert_eq!(cli.middleware.recovery.request_timeout, 10);
        assert!(cli.validate().is_ok());
        Ok(())
    }

    #[test]
    fn rejects_invalid_page_defaults() -> anyhow::Result<()> {
        let cli = Cli::try_parse_from([
            "roster",
            "--postgres-url",
            "postgresql://localhost/roster",
            "--default-page-size",
            "0",
        ])?;

        assert!(cli.validate().is_err());
        Ok(())
    }
}
