//! Request Middleware
//!
//! - `request_context`: attaches an [`OpContext`] carrying the configured
//!   per-request deadline to every request
//! - `log_requests`: start/complete log lines and request counters

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;

use crate::observability::{Logger, MetricsRegistry};
use crate::store::OpContext;

/// Place a fresh operation context with the request deadline into extensions
pub async fn request_context(
    State(timeout): State<Duration>,
    mut request: Request,
    next: Next,
) -> Response {
    request
        .extensions_mut()
        .insert(OpContext::with_timeout(timeout));
    next.run(request).await
}

/// Log each request and count its outcome
///
/// Runs inside `request_context`, so the request id is available.
pub async fn log_requests(
    State(metrics): State<Arc<MetricsRegistry>>,
    request: Request,
    next: Next,
) -> Response {
    let started_at = Instant::now();
    let method = request.method().to_string();
    let path = request.uri().path().to_string();
    let request_id = request
        .extensions()
        .get::<OpContext>()
        .map(|ctx| ctx.request_id.to_string())
        .unwrap_or_default();

    Logger::info(
        "REQUEST_START",
        &[
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
        ],
    );

    let response = next.run(request).await;

    let status = response.status().as_u16();
    metrics.increment_requests();
    metrics.record_status(status);

    let status_str = status.to_string();
    let duration_ms = started_at.elapsed().as_millis().to_string();
    Logger::info(
        "REQUEST_COMPLETE",
        &[
            ("duration_ms", duration_ms.as_str()),
            ("method", method.as_str()),
            ("path", path.as_str()),
            ("request_id", request_id.as_str()),
            ("status", status_str.as_str()),
        ],
    );

    response
}
