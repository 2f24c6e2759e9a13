//! Observability HTTP Routes
//!
//! Health check and counters.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::MetricsSnapshot;

use super::sales_routes::SalesState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub dataset_loaded: bool,
}

/// Create observability routes
pub fn observability_routes(state: Arc<SalesState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .with_state(state)
}

async fn health_handler(State(state): State<Arc<SalesState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        dataset_loaded: state.store.is_loaded(),
    })
}

async fn metrics_handler(State(state): State<Arc<SalesState>>) -> Json<MetricsSnapshot> {
    Json(state.metrics.snapshot())
}
