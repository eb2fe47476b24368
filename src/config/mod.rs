// Configuration module entry point
// Loads layered configuration: defaults, optional TOML file, environment

mod state;
mod types;

use std::net::SocketAddr;

use config::builder::{ConfigBuilder, DefaultState};

// Re-export public types
pub use state::AppState;
pub use types::{
    Config, FallbackConfig, HttpConfig, LoggingConfig, PerformanceConfig, RouteEntry, ServerConfig,
};

/// Environment variable prefix, e.g. `ZEN_SERVER__PORT=9000`
const ENV_PREFIX: &str = "ZEN";

impl Config {
    /// Load configuration from the file at `config_path` (extension optional)
    /// A missing file is not an error; defaults and environment still apply
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = with_defaults(config::Config::builder())?
            .add_source(config::File::with_name(config_path).required(false))
            .add_source(environment())
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn with_defaults(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, config::ConfigError> {
    builder
        .set_default("server.host", "127.0.0.1")?
        .set_default("server.port", 8080)?
        .set_default("logging.level", "info")?
        .set_default("logging.access_log", true)?
        .set_default("performance.keep_alive", true)?
        .set_default("performance.request_timeout", 30)?
        .set_default("http.server_name", "zen-router")?
        .set_default("http.path_strategy", "parse")
}
