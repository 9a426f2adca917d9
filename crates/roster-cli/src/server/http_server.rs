//! HTTP server startup.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use super::{ServerError, ServerResult, serve_with_shutdown, shutdown_signal};
use crate::config::ServerConfig;
use crate::{TRACING_TARGET_SERVER_SHUTDOWN, TRACING_TARGET_SERVER_STARTUP};

/// Binds to the configured address and serves `app` until a shutdown signal.
///
/// After the signal, in-flight requests get up to the configured shutdown
/// timeout to finish before the server stops waiting for them.
///
/// # Errors
///
/// Returns an error if the configuration is invalid, the address cannot be
/// bound, or the server fails while running.
pub async fn serve(app: Router, server_config: ServerConfig) -> ServerResult<()> {
    server_config.validate().map_err(|e| {
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            error = %e,
            "Invalid server configuration"
        );
        ServerError::invalid_config(&e)
    })?;

    let server_addr = server_config.server_addr();
    let listener = TcpListener::bind(server_addr).await.map_err(|e| {
        let err = ServerError::bind_error(server_addr, e);
        tracing::error!(
            target: TRACING_TARGET_SERVER_STARTUP,
            addr = %server_addr,
            error = %err,
            suggestion = err.suggestion(),
            "Failed to bind to address"
        );
        err
    })?;

    let shutdown_timeout = server_config.shutdown_timeout();
    let signal_received = Arc::new(Notify::new());
    let notify = Arc::clone(&signal_received);

    serve_with_shutdown(&server_config, || async move {
        let graceful = axum::serve(
            listener,
            app.into_make_service_with_connect_info::<SocketAddr>(),
        )
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            notify.notify_one();
        });

        tokio::select! {
            result = graceful.into_future() => result,
            () = async {
                signal_received.notified().await;
                tokio::time::sleep(shutdown_timeout).await;
            } => {
                tracing::warn!(
                    target: TRACING_TARGET_SERVER_SHUTDOWN,
                    timeout_secs = shutdown_timeout.as_secs(),
                    "Shutdown timeout elapsed, dropping in-flight requests"
                );
                Ok(())
            }
        }
    })
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn rejects_invalid_config_before_binding() {
        let config = ServerConfig {
            port: 80,
            ..ServerConfig::default()
        };

        let result = serve(Router::new(), config).await;
        assert!(matches!(result, Err(ServerError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn reports_address_in_use() -> anyhow::Result<()> {
        let occupied = TcpListener::bind("127.0.0.1:0").await?;
        let config = ServerConfig {
            port: occupied.local_addr()?.port(),
            ..ServerConfig::default()
        };

        let result = serve(Router::new(), config).await;
        assert!(matches!(result, Err(ServerError::BindError { .. })));
        Ok(())
    }
}
