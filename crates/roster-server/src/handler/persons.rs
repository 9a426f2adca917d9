//! Person listing handler.

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use roster_postgres::PersonGateway;

use crate::extract::ValidateQuery;
use crate::handler::Result;
use crate::handler::request::PersonSearchQuery;
use crate::handler::response::PersonsPage;
use crate::service::ServiceState;

/// Tracing target for person operations.
const TRACING_TARGET: &str = "roster_server::handler::persons";

/// Lists one page of persons, optionally filtered by first name.
#[tracing::instrument(
    skip_all,
    fields(
        search_term = %query.search_term(),
        page = query.page,
        page_size = ?query.page_size,
    )
)]
async fn list_persons(
    State(person_gateway): State<PersonGateway>,
    ValidateQuery(query): ValidateQuery<PersonSearchQuery>,
) -> Result<(StatusCode, Json<PersonsPage>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing persons");

    let paged = person_gateway
        .fetch_page(query.search_term(), query.page, query.page_size)
        .await?;

    let page = PersonsPage::from(paged);

    tracing::debug!(
        target: TRACING_TARGET,
        person_count = page.items.len(),
        total_items = page.total_items,
        current_page = page.current_page,
        "Persons listed"
    );

    Ok((StatusCode::OK, Json(page)))
}

/// Returns a [`Router`] with all person routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/persons", get(list_persons))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;

    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn zero_page_size_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/persons?pageSize=0").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "bad_request");
        assert_eq!(body["resource"], "pageSize");
        Ok(())
    }

    #[tokio::test]
    async fn oversized_page_size_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/persons?pageSize=5000").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn zero_page_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/persons?page=0").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["resource"], "page");
        Ok(())
    }

    #[tokio::test]
    async fn long_search_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let search = "a".repeat(51);
        let response = server
            .get("/persons")
            .add_query_param("search", &search)
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_page_is_bad_request() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/persons?page=two").await;
        response.assert_status(StatusCode::BAD_REQUEST);
        Ok(())
    }

    #[tokio::test]
    async fn unreachable_store_is_internal_error() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/persons?search=Ken").await;
        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["name"], "internal_server_error");
        assert_eq!(body["message"], "Internal server error.");
        Ok(())
    }
}
