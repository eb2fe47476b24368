//! The application served by the binary
//!
//! Wires the built-in controllers into a registry and a container, then
//! registers the configured route table.

mod controllers;

use std::sync::Arc;

use hyper::StatusCode;

pub use controllers::{HealthController, HomeController, StatusController};

use crate::config::{Config, RouteEntry};
use crate::container::{Container, ControllerRegistry};
use crate::error::RouterError;
use crate::http::Reply;
use crate::router::Router;

/// Controller names a route may reference
pub fn controllers() -> ControllerRegistry<Reply> {
    let mut registry = ControllerRegistry::new();
    registry.register::<HomeController>("HomeController");
    registry.register::<HealthController>("HealthController");
    registry.declare("StatusController");
    registry
}

/// Container binding every controller, including the ones with dependencies
pub fn container(config: &Config, route_count: usize) -> Container<Reply> {
    let mut container = Container::new();
    container.bind("HomeController", HomeController::default);
    container.bind("HealthController", HealthController::default);

    let server_name = config.http.server_name.clone();
    container.bind("StatusController", move || {
        StatusController::new(server_name.clone(), route_count)
    });
    container
}

/// Routes served when the configuration declares none
pub fn default_routes() -> Vec<RouteEntry> {
    [
        ("get", "/", "HomeController@index"),
        ("get", "/healthz", "HealthController@show"),
        ("get", "/status", "StatusController@show"),
    ]
    .into_iter()
    .map(|(verb, path, action)| RouteEntry {
        verb: verb.to_string(),
        path: path.to_string(),
        action: action.to_string(),
    })
    .collect()
}

/// Build the router described by `config`
///
/// Fails on the first route entry whose verb is not supported.
pub fn build_router(config: &Config) -> Result<Router<Reply>, RouterError> {
    let routes = if config.routes.is_empty() {
        default_routes()
    } else {
        config.routes.clone()
    };

    let resolver = Arc::new(container(config, routes.len()));
    let mut router =
        Router::with_resolver(controllers(), resolver).with_path_strategy(config.http.path_strategy);

    for entry in routes {
        router.add(&entry.verb, entry.path, entry.action)?;
    }

    if let Some(body) = config.fallback.not_found_body.clone() {
        router.not_found(move || Reply::text(body.clone()).with_status(StatusCode::NOT_FOUND));
    }

    Ok(router)
}
