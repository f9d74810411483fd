//! Observability HTTP Routes
//!
//! Health check and counters. The record count is read from the store on
//! every request, so it reflects writes made through any handle.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;

use crate::observability::{MetricsRegistry, MetricsSnapshot};
use crate::store::RecordStore;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Metrics response: request counters plus the live record count
#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(flatten)]
    pub counters: MetricsSnapshot,
    pub records: usize,
}

/// State for the metrics route
#[derive(Clone)]
pub struct MetricsState {
    pub metrics: Arc<MetricsRegistry>,
    pub store: Arc<dyn RecordStore>,
}

/// Health check route
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

/// Metrics route backed by the server's registry and store
pub fn metrics_routes(metrics: Arc<MetricsRegistry>, store: Arc<dyn RecordStore>) -> Router {
    Router::new()
        .route("/metrics", get(metrics_handler))
        .with_state(MetricsState { metrics, store })
}

async fn health_handler() -> impl IntoResponse {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };

    (StatusCode::OK, Json(response))
}

async fn metrics_handler(State(state): State<MetricsState>) -> impl IntoResponse {
    let response = MetricsResponse {
        counters: state.metrics.snapshot(),
        records: state.store.len(),
    };

    (StatusCode::OK, Json(response))
}
