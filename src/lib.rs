//! Minimal HTTP router
//!
//! Routes are registered per verb and matched on the exact request path.
//! An action is either a closure or a `Class@method` reference that is
//! instantiated through a [`ControllerRegistry`] or a [`Resolver`].
//! Unmatched requests fall through a not-found chain: the dedicated
//! handler, then a legacy `get "404"` route, then a bare 404.
//!
//! The binary serves the router over HTTP with hyper, or answers a single
//! request as a CGI program when `GATEWAY_INTERFACE` is set.

pub mod app;
pub mod config;
pub mod container;
pub mod context;
pub mod error;
pub mod handler;
pub mod http;
pub mod logger;
pub mod router;
pub mod server;

pub use container::{Container, Controller, ControllerRegistry, Resolver};
pub use context::{PathStrategy, RequestContext, ResponseChannel, ResponseHead};
pub use error::RouterError;
pub use router::{Action, Outcome, Router, Verb};
