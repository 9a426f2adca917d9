//! Conversion of storage errors into HTTP errors.
//!
//! Rejected pagination arguments become `400 Bad Request` naming the query
//! parameter. Every data-access failure is logged and answered with a plain
//! `500 Internal Server Error`, without storage details.

use roster_postgres::{PaginationError, PgError};

use crate::handler::{Error, ErrorKind};

/// Tracing target for storage error conversion.
const TRACING_TARGET: &str = "roster_server::handler::postgres";

/// Returns the query string name of a pagination argument.
fn query_parameter(argument: &str) -> &str {
    match argument {
        "page" => "page",
        "page_size" => "pageSize",
        "max_nav_links" => "maxNavLinks",
        other => other,
    }
}

impl From<PaginationError> for Error<'static> {
    fn from(error: PaginationError) -> Self {
        let PaginationError::InvalidArgument {
            name,
            value,
            reason,
        } = error;
        let parameter = query_parameter(name);

        tracing::debug!(
            target: TRACING_TARGET,
            parameter,
            value,
            reason,
            "rejected pagination argument"
        );

        ErrorKind::BadRequest
            .with_message(format!("'{parameter}' {reason}"))
            .with_resource(parameter)
            .with_context(error.to_string())
            .into_static()
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::InvalidArgument(argument) => argument.into(),
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(query_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum::response::IntoResponse;

    use super::*;

    #[test]
    fn invalid_page_size_is_bad_request() {
        let error = Error::from(PgError::from(PaginationError::invalid_argument(
            "page_size",
            0,
            "must be greater than zero",
        )));

        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert_eq!(error.resource(), Some("pageSize"));
        assert_eq!(error.message(), Some("'pageSize' must be greater than zero"));
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn data_access_errors_are_internal() {
        let errors = [
            PgError::Config("bad url".into()),
            PgError::Unexpected("pool closed".into()),
        ];

        for error in errors {
            let error = Error::from(error);
            assert_eq!(error.kind(), ErrorKind::InternalServerError);
            assert!(error.message().is_none());
            assert!(error.context().is_none());
        }
    }

    #[test]
    fn unknown_arguments_keep_their_name() {
        assert_eq!(query_parameter("total_items"), "total_items");
        assert_eq!(query_parameter("max_nav_links"), "maxNavLinks");
    }
}
