//! Record HTTP Routes
//!
//! Thin adapters from `/todos` requests to [`RecordStore`] operations.
//!
//! - `POST   /todos`     -> create (201)
//! - `GET    /todos`     -> get_all
//! - `GET    /todos/:id` -> get_by_id
//! - `PUT    /todos/:id` -> update
//! - `DELETE /todos/:id` -> delete (204)

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Extension, Path, State,
    },
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::observability::MetricsRegistry;
use crate::store::{OpContext, Record, RecordInput, RecordStore, StoreError};

use super::errors::{ApiError, ApiResult};

// ==================
// Shared State
// ==================

/// Record routes state shared across handlers
pub struct RecordsState {
    pub store: Arc<dyn RecordStore>,
    pub metrics: Arc<MetricsRegistry>,
}

impl RecordsState {
    pub fn new(store: Arc<dyn RecordStore>, metrics: Arc<MetricsRegistry>) -> Self {
        Self { store, metrics }
    }

    /// Convert a store failure, counting refused-at-entry operations
    fn fail(&self, err: StoreError) -> ApiError {
        if err.is_timeout() {
            self.metrics.increment_timeouts();
        }
        ApiError::from(err)
    }
}

// ==================
// Record Routes
// ==================

/// Create record routes
///
/// Handlers expect an [`OpContext`] in request extensions, placed there by
/// the `request_context` middleware.
pub fn record_routes(state: Arc<RecordsState>) -> Router {
    Router::new()
        .route("/todos", get(list_handler).post(create_handler))
        .route(
            "/todos/:id",
            get(get_handler).put(update_handler).delete(delete_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn create_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(ctx): Extension<OpContext>,
    body: Result<Json<RecordInput>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<Record>)> {
    let Json(input) = body?;

    let record = state
        .store
        .create(&ctx, input)
        .map_err(|e| state.fail(e))?;
    state.metrics.increment_created();

    Ok((StatusCode::CREATED, Json(record)))
}

async fn list_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(ctx): Extension<OpContext>,
) -> ApiResult<Json<Vec<Record>>> {
    let records = state.store.get_all(&ctx).map_err(|e| state.fail(e))?;
    state.metrics.increment_reads();

    Ok(Json(records))
}

async fn get_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(ctx): Extension<OpContext>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<Json<Record>> {
    let Path(id) = id?;

    let record = state
        .store
        .get_by_id(&ctx, id)
        .map_err(|e| state.fail(e))?;
    state.metrics.increment_reads();

    Ok(Json(record))
}

async fn update_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(ctx): Extension<OpContext>,
    id: Result<Path<u64>, PathRejection>,
    body: Result<Json<RecordInput>, JsonRejection>,
) -> ApiResult<Json<Record>> {
    let Path(id) = id?;
    let Json(input) = body?;

    let record = state
        .store
        .update(&ctx, id, input)
        .map_err(|e| state.fail(e))?;
    state.metrics.increment_updated();

    Ok(Json(record))
}

async fn delete_handler(
    State(state): State<Arc<RecordsState>>,
    Extension(ctx): Extension<OpContext>,
    id: Result<Path<u64>, PathRejection>,
) -> ApiResult<StatusCode> {
    let Path(id) = id?;

    state.store.delete(&ctx, id).map_err(|e| state.fail(e))?;
    state.metrics.increment_deleted();

    Ok(StatusCode::NO_CONTENT)
}
