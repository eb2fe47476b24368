// Application state module
// Everything a request needs, built once at startup and shared read-only

use crate::http::Reply;
use crate::router::Router;

use super::types::Config;

/// Application state
pub struct AppState {
    pub config: Config,
    pub router: Router<Reply>,
}

impl AppState {
    pub fn new(config: Config, router: Router<Reply>) -> Self {
        Self { config, router }
    }
}
