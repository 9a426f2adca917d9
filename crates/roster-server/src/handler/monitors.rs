//! Liveness endpoint.

use axum::Json;
use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;

use crate::handler::response::MonitorStatus;
use crate::service::ServiceState;

/// Tracing target for monitor operations.
const TRACING_TARGET: &str = "roster_server::handler::monitors";

/// Reports that the process is up. Storage is not consulted.
#[tracing::instrument(skip_all)]
async fn health_status() -> (StatusCode, Json<MonitorStatus>) {
    tracing::trace!(target: TRACING_TARGET, "Health status requested");
    (StatusCode::OK, Json(MonitorStatus::default()))
}

/// Returns a [`Router`] with all health monitoring routes.
pub fn routes() -> Router<ServiceState> {
    Router::new().route("/health", get(health_status))
}

#[cfg(test)]
mod tests {
    use crate::handler::test::create_test_server;

    #[tokio::test]
    async fn health_reports_ok() -> anyhow::Result<()> {
        let server = create_test_server()?;

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body = response.json::<serde_json::Value>();
        assert_eq!(body["status"], "ok");
        assert!(body["version"].is_string());
        Ok(())
    }
}
