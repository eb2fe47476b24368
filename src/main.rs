use std::sync::Arc;

use zen_router::config::{AppState, Config};
use zen_router::{app, logger, server};

/// Config file used when no path is given on the command line (`config.toml`)
const DEFAULT_CONFIG_PATH: &str = "config";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let cfg = Config::load_from(&config_path)?;

    logger::init(&cfg.logging).map_err(|e| e as Box<dyn std::error::Error>)?;

    let router = app::build_router(&cfg)?;
    let state = AppState::new(cfg, router);

    if server::cgi::is_cgi_request() {
        server::cgi::run(&state)?;
        return Ok(());
    }

    // Create Tokio runtime, thread count from workers config
    let mut runtime_builder = tokio::runtime::Builder::new_multi_thread();
    runtime_builder.enable_all();
    if let Some(workers) = state.config.server.workers {
        runtime_builder.worker_threads(workers);
    }
    let runtime = runtime_builder.build()?;

    runtime.block_on(async_main(Arc::new(state)))
}

async fn async_main(state: Arc<AppState>) -> Result<(), Box<dyn std::error::Error>> {
    let addr = state.config.get_socket_addr()?;

    let listener = match server::create_reusable_listener(addr, server::DEFAULT_BACKLOG) {
        Ok(listener) => listener,
        Err(e) => {
            logger::log_bind_failed(&addr, &e);
            return Err(e.into());
        }
    };

    logger::log_server_start(&addr, &state.config, state.router.routes().len());

    // Use LocalSet for spawn_local support
    let local = tokio::task::LocalSet::new();
    local.run_until(server::serve(listener, state)).await?;
    Ok(())
}
