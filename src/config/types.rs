// Configuration types module
// Defines all configuration-related data structures

use serde::{Deserialize, Serialize};

use crate::context::PathStrategy;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
    /// Route table, registered in order (a later entry for the same verb and path wins)
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
    #[serde(default)]
    pub fallback: FallbackConfig,
}

/// Server configuration
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Logging configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    /// `tracing` filter directive (`info`, `zen_router=debug`, ...)
    pub level: String,
    pub access_log: bool,
}

/// Performance configuration
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    pub keep_alive: bool,
    /// Seconds a connection may take before it is dropped
    pub request_timeout: u64,
}

/// HTTP configuration
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    pub server_name: String,
    pub path_strategy: PathStrategy,
}

/// One `[[routes]]` entry
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct RouteEntry {
    /// Lower-case verb name; anything else is rejected at startup
    pub verb: String,
    pub path: String,
    /// `Class@method` reference
    pub action: String,
}

/// Not-found behaviour
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct FallbackConfig {
    /// Register a not-found handler replying 404 with this body
    #[serde(default)]
    pub not_found_body: Option<String>,
}
