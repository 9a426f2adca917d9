//! Error types and utilities for database operations.
//!
//! [`PgError::InvalidArgument`] is a precondition failure raised before any
//! I/O happens. Every other variant is a data-access failure that callers
//! propagate unchanged: nothing in this crate retries or substitutes a default.

use std::borrow::Cow;

use deadpool::managed::TimeoutType;
use diesel::result::{ConnectionError, Error};
use diesel_async::pooled_connection::PoolError as DieselPoolError;
use diesel_async::pooled_connection::deadpool::PoolError as DeadpoolError;

use crate::types::PaginationError;

/// Type-erased error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Error type for all PostgreSQL database operations.
#[derive(Debug, thiserror::Error)]
#[must_use = "database errors should be handled appropriately"]
pub enum PgError {
    /// Invalid client or pool configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database operation timed out.
    ///
    /// This can occur during connection creation, while waiting for an
    /// available connection, or while recycling one.
    #[error("Database operation timed out ({})", timeout_name(.0))]
    Timeout(TimeoutType),

    /// Failed to establish or maintain a database connection.
    #[error("Database connection error: {0}")]
    Connection(#[from] ConnectionError),

    /// Database migration failed.
    #[error("Database migration error: {0}")]
    Migration(BoxError),

    /// Database query execution failed.
    #[error("Database query error: {0}")]
    Query(#[from] Error),

    /// Pagination parameters were rejected before reaching the database.
    #[error("Invalid pagination: {0}")]
    InvalidArgument(#[from] PaginationError),

    /// Unexpected error not covered by the other variants.
    #[error("Unexpected error: {0}")]
    Unexpected(Cow<'static, str>),
}

impl PgError {
    /// Returns whether this error originates from the data store rather than
    /// from the caller's arguments.
    #[inline]
    pub fn is_data_access(&self) -> bool {
        !matches!(self, PgError::InvalidArgument(_))
    }

    /// Returns the rejected pagination argument, if this is an argument error.
    #[inline]
    pub fn invalid_argument(&self) -> Option<&PaginationError> {
        match self {
            PgError::InvalidArgument(error) => Some(error),
            _ => None,
        }
    }

    /// Returns whether this error indicates a transient failure.
    ///
    /// Only used to classify failures in logs; no operation is retried.
    pub fn is_transient(&self) -> bool {
        matches!(
            self,
            PgError::Timeout(_) | PgError::Connection(ConnectionError::BadConnection(_))
        )
    }
}

fn timeout_name(timeout: &TimeoutType) -> &'static str {
    match timeout {
        TimeoutType::Wait => "waiting for a pooled connection",
        TimeoutType::Create => "creating a connection",
        TimeoutType::Recycle => "recycling a connection",
    }
}

impl From<DeadpoolError> for PgError {
    fn from(value: DeadpoolError) -> Self {
        match value {
            DeadpoolError::Timeout(timeout) => Self::Timeout(timeout),
            DeadpoolError::Backend(DieselPoolError::QueryError(error)) => Self::Query(error),
            DeadpoolError::Backend(DieselPoolError::ConnectionError(error)) => {
                Self::Connection(error)
            }
            DeadpoolError::PostCreateHook(err) => {
                tracing::warn!("Unexpected post-create hook error: {}", err);
                Self::Unexpected(err.to_string().into())
            }
            DeadpoolError::NoRuntimeSpecified => {
                tracing::error!("No tokio runtime specified for connection pool");
                Self::Unexpected("No runtime specified".into())
            }
            DeadpoolError::Closed => Self::Connection(ConnectionError::InvalidConnectionUrl(
                "Connection pool is closed".into(),
            )),
        }
    }
}

/// Specialized [`Result`] type for database operations.
pub type PgResult<T, E = PgError> = Result<T, E>;
