//! # HTTP Server
//!
//! Combines record, health and metrics routers behind the request
//! middleware, and runs them with bounded graceful shutdown.

use std::future::{Future, IntoFuture};
use std::io;
use std::sync::Arc;

use axum::middleware::from_fn_with_state;
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

use crate::observability::{log_event, log_event_with_fields, Event, Logger, MetricsRegistry};
use crate::store::RecordStore;

use super::config::HttpServerConfig;
use super::middleware::{log_requests, request_context};
use super::observability_routes::{health_routes, metrics_routes};
use super::record_routes::{record_routes, RecordsState};

/// HTTP server for the record store
pub struct HttpServer {
    config: HttpServerConfig,
    metrics: Arc<MetricsRegistry>,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self::with_config(HttpServerConfig::default(), store)
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig, store: Arc<dyn RecordStore>) -> Self {
        let metrics = Arc::new(MetricsRegistry::new());
        let router = Self::build_router(&config, store, Arc::clone(&metrics));
        Self {
            config,
            metrics,
            router,
        }
    }

    /// Build the combined router with all endpoints
    fn build_router(
        config: &HttpServerConfig,
        store: Arc<dyn RecordStore>,
        metrics: Arc<MetricsRegistry>,
    ) -> Router {
        let records_state = Arc::new(RecordsState::new(Arc::clone(&store), Arc::clone(&metrics)));

        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            // Checked by HttpServerConfig::validate on the CLI path
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

        // Layers wrap outward: request_context runs before log_requests
        Router::new()
            .merge(health_routes())
            .merge(metrics_routes(Arc::clone(&metrics), store))
            .merge(record_routes(records_state))
            .layer(from_fn_with_state(metrics, log_requests))
            .layer(from_fn_with_state(config.request_timeout(), request_context))
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Counters shared with the request middleware
    pub fn metrics(&self) -> Arc<MetricsRegistry> {
        Arc::clone(&self.metrics)
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind the configured address and serve until SIGINT/SIGTERM
    pub async fn start(self) -> io::Result<()> {
        let listener = TcpListener::bind(self.config.socket_addr()).await?;
        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already bound listener until `shutdown` resolves
    ///
    /// In-flight requests get `shutdown_timeout_ms` to finish; connections
    /// still open after that are dropped.
    pub async fn serve<F>(self, listener: TcpListener, shutdown: F) -> io::Result<()>
    where
        F: Future<Output = ()> + Send,
    {
        let addr = listener.local_addr()?.to_string();
        let grace = self.config.shutdown_timeout();

        let drain = Arc::new(Notify::new());
        let drain_signal = Arc::clone(&drain);
        let server = axum::serve(listener, self.router)
            .with_graceful_shutdown(async move { drain_signal.notified().await })
            .into_future();
        tokio::pin!(server);

        log_event_with_fields(Event::ServerListening, &[("addr", addr.as_str())]);

        tokio::select! {
            result = &mut server => return result,
            _ = shutdown => {}
        }

        log_event(Event::ShutdownStart);
        drain.notify_one();

        match tokio::time::timeout(grace, server).await {
            Ok(result) => result?,
            Err(_) => {
                let grace_ms = grace.as_millis().to_string();
                Logger::warn("SHUTDOWN_TIMEOUT", &[("grace_ms", grace_ms.as_str())]);
            }
        }

        log_event(Event::ShutdownComplete);
        Ok(())
    }
}

/// Resolves on Ctrl+C or, on unix, SIGTERM
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            let error = e.to_string();
            Logger::error("SIGNAL_HANDLER_FAILED", &[("error", error.as_str())]);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                let error = e.to_string();
                Logger::error("SIGNAL_HANDLER_FAILED", &[("error", error.as_str())]);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryStore;

    fn store() -> Arc<dyn RecordStore> {
        Arc::new(InMemoryStore::new())
    }

    #[test]
    fn test_server_creation() {
        let server = HttpServer::new(store());
        assert_eq!(server.socket_addr(), "0.0.0.0:8080");
    }

    #[test]
    fn test_server_with_custom_port() {
        let config = HttpServerConfig::with_port(9000);
        let server = HttpServer::with_config(config, store());
        assert_eq!(server.socket_addr(), "0.0.0.0:9000");
    }

    #[test]
    fn test_router_builds_with_cors_origins() {
        let config = HttpServerConfig {
            cors_origins: vec!["http://localhost:5173".to_string()],
            ..Default::default()
        };
        let server = HttpServer::with_config(config, store());
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_serve_stops_on_shutdown() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let server = HttpServer::new(store());
        let result = server.serve(listener, async {}).await;
        assert!(result.is_ok());
    }
}
