//! Logger module
//!
//! Provides logging utilities for the router and its front ends:
//! - Server lifecycle logging
//! - Access logging
//! - Dispatch tracing (route hits, misses, malformed actions)
//! - Error and warning logging
//!
//! Everything goes through `tracing`. Output is written to stderr so that a
//! CGI response on stdout is never interleaved with log lines.

use std::net::SocketAddr;

use hyper::StatusCode;
use tracing_subscriber::EnvFilter;

use crate::config::{Config, LoggingConfig};

/// Initialize the global subscriber
///
/// `RUST_LOG` takes precedence over `logging.level` when it is set.
/// Should be called once at application startup.
pub fn init(config: &LoggingConfig) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(&config.level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, route_count: usize) {
    tracing::info!("======================================");
    tracing::info!("Router server started successfully");
    tracing::info!("Listening on: http://{addr}");
    tracing::info!("Log level: {}", config.logging.level);
    if let Some(workers) = config.server.workers {
        tracing::info!("Worker threads: {workers}");
    }
    tracing::info!("Routes registered: {route_count}");
    tracing::info!("Path strategy: {:?}", config.http.path_strategy);
    tracing::info!("======================================");
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    tracing::debug!(peer = %peer_addr, "[Connection] Accepted");
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    tracing::error!("[ERROR] Failed to serve connection: {err:?}");
}

pub fn log_error(message: &str) {
    tracing::error!("[ERROR] {message}");
}

pub fn log_warning(message: &str) {
    tracing::warn!("[WARN] {message}");
}

/// Access log line, emitted once the response status is known
pub fn log_request(method: &str, uri: &str, status: StatusCode) {
    tracing::info!(
        target: "access",
        method,
        uri,
        status = status.as_u16(),
        "[Request] {method} {uri} - {}",
        status.as_u16()
    );
}

pub fn log_dispatch(method: &str, path: &str) {
    tracing::debug!(method, path, "[Route] dispatching");
}

pub fn log_route_miss(method: &str, path: &str) {
    tracing::debug!(method, path, "[Route] no route registered");
}

pub fn log_malformed_action(method: &str, path: &str) {
    tracing::warn!(
        method,
        path,
        "[Route] action is not a Class@method reference, treating as not found"
    );
}

pub fn log_route_replaced(verb: &str, path: &str) {
    tracing::debug!(verb, path, "[Route] registration replaced an existing route");
}

pub fn log_dispatch_error(method: &str, path: &str, err: &crate::error::RouterError) {
    tracing::error!(method, path, error = %err, "[ERROR] Dispatch failed");
}

pub fn log_bind_failed(addr: &SocketAddr, err: &std::io::Error) {
    log_error(&format!("Failed to bind {addr}: {err}"));
}

pub fn log_shutdown() {
    tracing::info!("[Shutdown] Interrupt received, no longer accepting connections");
}
