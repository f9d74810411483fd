//! # notedb HTTP Server Module
//!
//! REST front-end over the record store. Combines all endpoint routers into
//! a single axum server.
//!
//! # Endpoints
//!
//! - `/todos`, `/todos/:id` - Record CRUD
//! - `/health` - Health check
//! - `/metrics` - Request and record counters

pub mod config;
pub mod errors;
pub mod middleware;
pub mod observability_routes;
pub mod record_routes;
pub mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ApiResult, ErrorResponse};
pub use server::{shutdown_signal, HttpServer};
