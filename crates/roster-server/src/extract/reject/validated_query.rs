//! Query string extractor with automatic validation.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use super::Query;
use crate::handler::{Error, ErrorKind};

/// Tracing target for query validation.
const TRACING_TARGET: &str = "roster_server::extract::validation";

/// [`Query`] extractor that also runs the `validator` rules of `T`.
///
/// Requests failing validation are rejected with `400 Bad Request` before
/// the handler runs, so no storage I/O happens for them.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateQuery<T>(pub T);

impl<T> ValidateQuery<T> {
    /// Creates a new instance of [`ValidateQuery`].
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Returns the inner validated value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for ValidateQuery<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(data) = <Query<T> as FromRequestParts<S>>::from_request_parts(parts, state).await?;

        data.validate()?;
        Ok(Self::new(data))
    }
}

/// Reads the `min` and `max` parameters of a validation error.
fn bounds(params: &HashMap<Cow<'static, str>, serde_json::Value>) -> (Option<i64>, Option<i64>) {
    let bound = |key: &str| {
        let value = params.get(key)?;
        value.as_i64().or_else(|| value.as_f64().map(|n| n as i64))
    };
    (bound("min"), bound("max"))
}

fn format_length_error(field: &str, error: &ValidationError) -> String {
    match bounds(&error.params) {
        (Some(min), Some(max)) => {
            format!("'{field}' must be between {min} and {max} characters long")
        }
        (Some(min), None) => format!("'{field}' must be at least {min} characters long"),
        (None, Some(max)) => format!("'{field}' must be at most {max} characters long"),
        (None, None) => format!("'{field}' has an invalid length"),
    }
}

fn format_range_error(field: &str, error: &ValidationError) -> String {
    match bounds(&error.params) {
        (Some(min), Some(max)) => format!("'{field}' must be between {min} and {max}"),
        (Some(min), None) => format!("'{field}' must be at least {min}"),
        (None, Some(max)) => format!("'{field}' must be at most {max}"),
        (None, None) => format!("'{field}' is out of range"),
    }
}

/// Formats one validation failure as a client-facing sentence.
fn format_validation_error(field: &str, error: &ValidationError) -> String {
    if let Some(message) = &error.message {
        return format!("'{field}' {message}");
    }

    match error.code.as_ref() {
        "length" => format_length_error(field, error),
        "range" => format_range_error(field, error),
        code => format!("'{field}' failed validation: {code}"),
    }
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let field_errors = errors.field_errors();

        let mut fields: Vec<_> = field_errors.keys().map(|field| field.to_string()).collect();
        fields.sort();

        let mut messages: Vec<String> = field_errors
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect();
        messages.sort();

        tracing::debug!(
            target: TRACING_TARGET,
            fields = ?fields,
            "Request validation failed"
        );

        let message = match messages.as_slice() {
            [] => "Validation failed".to_owned(),
            _ => messages.join(". "),
        };

        ErrorKind::BadRequest
            .with_message(message)
            .with_resource(fields.join(","))
    }
}
