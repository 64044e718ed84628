//! HTTP server assembling all endpoint routers.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;
use crate::service::SubmissionService;
use crate::store::DocumentStore;

use super::config::HttpServerConfig;
use super::schema_routes::schema_routes;
use super::submission_routes::submission_routes;

/// HTTP server for the form service.
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Builds the server around a submission service.
    pub fn new<S: DocumentStore + 'static>(
        config: HttpServerConfig,
        service: SubmissionService<S>,
    ) -> Self {
        let router = Self::build_router(&config, Arc::new(service));
        Self { config, router }
    }

    /// Builds the combined router with all endpoints and CORS.
    fn build_router<S: DocumentStore + 'static>(
        config: &HttpServerConfig,
        service: Arc<SubmissionService<S>>,
    ) -> Router {
        let cors = if config.cors_origins.is_empty() {
            // No origins configured: stay permissive, matching the
            // development posture the form clients expect.
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            .merge(health_routes())
            .nest(
                "/api",
                schema_routes(service.clone()).merge(submission_routes(service)),
            )
            .layer(cors)
    }

    /// Get the socket address string.
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for tests driving it directly).
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until the process exits.
    pub async fn start(self) -> Result<(), io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, format!("{}", e)))?;

        Logger::info(
            "HTTP_SERVER_STARTED",
            &[("addr", &addr.to_string()), ("api", "/api")],
        );

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;

        Ok(())
    }
}

/// Health check route at the root.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Health check response.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
    version: String,
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{loader, SchemaValidator};
    use crate::store::MemoryStore;

    fn service() -> SubmissionService<MemoryStore> {
        let validator = SchemaValidator::new(loader::builtin()).unwrap();
        SubmissionService::new(MemoryStore::new(), validator)
    }

    #[test]
    fn test_server_uses_config_addr() {
        let server = HttpServer::new(HttpServerConfig::default(), service());
        assert_eq!(server.socket_addr(), "0.0.0.0:3000");
    }

    #[test]
    fn test_server_with_custom_port() {
        let server = HttpServer::new(HttpServerConfig::with_port(8080), service());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_router_builds_with_configured_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let _router = HttpServer::new(config, service()).router();
    }
}
