//! # HTTP Server
//!
//! Combines the sales and observability routers into one axum service.

use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::Logger;

use super::config::HttpServerConfig;
use super::observability_routes::observability_routes;
use super::sales_routes::{sales_routes, SalesState};

/// HTTP server for the sales service
pub struct HttpServer {
    config: HttpServerConfig,
    state: Arc<SalesState>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        Self::with_state(config, Arc::new(SalesState::new()))
    }

    /// Create a server around existing shared state
    pub fn with_state(config: HttpServerConfig, state: Arc<SalesState>) -> Self {
        let router = Self::build_router(&config, Arc::clone(&state));
        Self {
            config,
            state,
            router,
        }
    }

    fn build_router(config: &HttpServerConfig, state: Arc<SalesState>) -> Router {
        let cors = if config.cors_origins.is_empty() {
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
            .merge(sales_routes(Arc::clone(&state)))
            .merge(observability_routes(state))
            .layer(DefaultBodyLimit::max(config.max_upload_bytes))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Shared state (dataset store and metrics)
    pub fn state(&self) -> Arc<SalesState> {
        Arc::clone(&self.state)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> io::Result<()> {
        let addr: SocketAddr = self.config.socket_addr().parse().map_err(|e| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid socket address '{}': {}", self.config.socket_addr(), e),
            )
        })?;

        let listener = TcpListener::bind(addr).await?;
        let bound = listener.local_addr()?.to_string();
        Logger::info("SERVER_STARTING", &[("addr", bound.as_str())]);

        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}
