//! notedb - A concurrency-safe in-memory note store with a REST front-end

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
