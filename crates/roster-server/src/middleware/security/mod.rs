//! Security middleware for HTTP requests.

mod cors;

use axum::Router;

pub use cors::CorsConfig;
pub(crate) use cors::create_cors_layer;

/// Extension trait for `axum::`[`Router`] to apply security middleware.
pub trait RouterSecurityExt<S> {
    /// Layers CORS handling with the provided configuration.
    fn with_security(self, cors: &CorsConfig) -> Self;

    /// Layers CORS handling that allows the usual localhost origins.
    fn with_default_security(self) -> Self;
}

impl<S> RouterSecurityExt<S> for Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    fn with_security(self, cors: &CorsConfig) -> Self {
        self.layer(create_cors_layer(cors))
    }

    fn with_default_security(self) -> Self {
        self.with_security(&CorsConfig::default())
    }
}
