use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, OptionalFromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Tracing target for query string extraction.
const TRACING_TARGET: &str = "roster_server::extract::query";

/// Query string extractor with descriptive `400 Bad Request` rejections.
///
/// ```rust,no_run
/// use roster_server::extract::Query;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct SearchParams {
///     search: String,
///     page: Option<i64>,
/// }
///
/// // Route: /persons?search=Ken&page=2
/// async fn search(Query(params): Query<SearchParams>) {
///     println!("{} on page {:?}", params.search, params.page);
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    /// Creates a new [`Query`] wrapper around the provided query parameters.
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    /// Consumes the wrapper and returns the inner query parameters.
    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(enhance_query_error(rejection)),
        }
    }
}

impl<T, S> OptionalFromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &S,
    ) -> Result<Option<Self>, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Some(Query(query))),
            Err(_) => Ok(None),
        }
    }
}

/// Turns a raw axum rejection into a client-facing error.
fn enhance_query_error(rejection: QueryRejection) -> Error<'static> {
    tracing::debug!(
        target: TRACING_TARGET,
        error = %rejection,
        "Query parameter parsing failed"
    );

    match rejection {
        QueryRejection::FailedToDeserializeQueryString(err) => {
            let error_message = err.to_string();
            let field_name = extract_field_name_from_error(&error_message).map(str::to_owned);

            let error = if error_message.contains("missing field") {
                ErrorKind::BadRequest
                    .with_message("Missing required query parameter")
                    .with_suggestion("Provide every required query parameter")
            } else if error_message.contains("duplicate field") {
                ErrorKind::BadRequest
                    .with_message("Duplicate query parameter")
                    .with_suggestion("Provide each query parameter only once")
            } else if error_message.contains("invalid") {
                ErrorKind::BadRequest
                    .with_message("Invalid query parameter value")
                    .with_suggestion("'page' and 'pageSize' must be whole numbers")
            } else {
                ErrorKind::BadRequest.with_message("Invalid query parameters")
            };

            let error = error.with_context(error_message);
            match field_name {
                Some(field_name) => error.with_resource(field_name),
                None => error,
            }
        }
        _ => ErrorKind::BadRequest
            .with_message("Invalid query parameters")
            .with_context("The query string could not be parsed"),
    }
}

/// Extracts a field name from a serde error message, if it names one.
fn extract_field_name_from_error(error_message: &str) -> Option<&str> {
    if let Some(start) = error_message.find('`')
        && let Some(end) = error_message[start + 1..].find('`')
    {
        return Some(&error_message[start + 1..start + 1 + end]);
    }

    if let Some(start) = error_message.find("field ") {
        let field_part = &error_message[start + 6..];
        if let Some(end) = field_part.find(' ') {
            return Some(&field_part[..end]);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use axum::http::Request;
    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize)]
    #[serde(rename_all = "camelCase")]
    struct Params {
        #[serde(default)]
        search: String,
        page_size: Option<i64>,
    }

    async fn extract(uri: &str) -> Result<Query<Params>, Error<'static>> {
        let (mut parts, ()) = Request::builder().uri(uri).body(()).unwrap().into_parts();
        <Query<Params> as FromRequestParts<()>>::from_request_parts(&mut parts, &()).await
    }

    #[test]
    fn extract_field_name() {
        assert_eq!(
            extract_field_name_from_error("missing field `search`"),
            Some("search")
        );
        assert_eq!(
            extract_field_name_from_error("duplicate field page at line 1"),
            Some("page")
        );
        assert_eq!(extract_field_name_from_error("some other error"), None);
    }

    #[tokio::test]
    async fn valid_query_is_extracted() {
        let Query(params) = extract("/persons?search=Ken&pageSize=20").await.unwrap();
        assert_eq!(params.search, "Ken");
        assert_eq!(params.page_size, Some(20));

        let Query(params) = extract("/persons").await.unwrap();
        assert_eq!(params.search, "");
        assert_eq!(params.page_size, None);
    }

    #[tokio::test]
    async fn malformed_number_is_bad_request() {
        let error = extract("/persons?pageSize=ten").await.unwrap_err();
        assert_eq!(error.kind(), ErrorKind::BadRequest);
        assert!(error.context().is_some());
    }

    #[test]
    fn query_into_inner() {
        let query = Query::new("test".to_string());
        assert_eq!(query.into_inner(), "test");
    }
}
