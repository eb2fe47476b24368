//! Request router
//!
//! Maps a method + exact path pair to an [`Action`] and dispatches it.
//! Anything that does not resolve goes down the not-found chain:
//! dedicated handler, then the legacy `get "404"` route, then a bare 404.

mod action;
mod table;

use std::fmt;
use std::sync::Arc;

pub use action::{Action, ActionRef, Handler};
pub use table::{RouteTable, Verb};

use crate::container::{ControllerRegistry, Resolver};
use crate::context::{PathStrategy, RequestContext, ResponseChannel};
use crate::error::RouterError;
use crate::logger;

/// Path of the legacy not-found route, registered under `get`
pub const LEGACY_NOT_FOUND_PATH: &str = "404";

/// Result of a dispatch that did not fail
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// A handler ran and produced this value
    Handled(T),
    /// No handler at all: 404 was sent on the response channel and the
    /// request is over
    Terminated,
}

impl<T> Outcome<T> {
    pub fn handled(self) -> Option<T> {
        match self {
            Self::Handled(value) => Some(value),
            Self::Terminated => None,
        }
    }

    pub const fn is_terminated(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

pub struct Router<T> {
    table: RouteTable<T>,
    controllers: ControllerRegistry<T>,
    resolver: Option<Arc<dyn Resolver<T>>>,
    not_found: Option<Handler<T>>,
    path_strategy: PathStrategy,
}

impl<T: 'static> Router<T> {
    /// Router that default-constructs controllers from `controllers`
    pub fn new(controllers: ControllerRegistry<T>) -> Self {
        Self {
            table: RouteTable::new(),
            controllers,
            resolver: None,
            not_found: None,
            path_strategy: PathStrategy::default(),
        }
    }

    /// Router that obtains controller instances from `resolver`
    pub fn with_resolver(
        controllers: ControllerRegistry<T>,
        resolver: Arc<dyn Resolver<T>>,
    ) -> Self {
        Self {
            resolver: Some(resolver),
            ..Self::new(controllers)
        }
    }

    #[must_use]
    pub fn with_path_strategy(mut self, strategy: PathStrategy) -> Self {
        self.path_strategy = strategy;
        self
    }

    pub const fn path_strategy(&self) -> PathStrategy {
        self.path_strategy
    }

    pub const fn routes(&self) -> &RouteTable<T> {
        &self.table
    }

    /// Register `action` for `(verb, path)`; re-registering overwrites
    pub fn on(&mut self, verb: Verb, path: impl Into<String>, action: impl Into<Action<T>>) {
        let path = path.into();
        if self.table.insert(verb, path.clone(), action.into()).is_some() {
            logger::log_route_replaced(verb.as_str(), &path);
        }
    }

    /// Register through a verb name, for tables that come from configuration
    pub fn add(
        &mut self,
        verb: &str,
        path: impl Into<String>,
        action: impl Into<Action<T>>,
    ) -> Result<(), RouterError> {
        let verb = verb.parse::<Verb>()?;
        self.on(verb, path, action);
        Ok(())
    }

    pub fn get(&mut self, path: impl Into<String>, action: impl Into<Action<T>>) {
        self.on(Verb::Get, path, action);
    }

    pub fn post(&mut self, path: impl Into<String>, action: impl Into<Action<T>>) {
        self.on(Verb::Post, path, action);
    }

    pub fn put(&mut self, path: impl Into<String>, action: impl Into<Action<T>>) {
        self.on(Verb::Put, path, action);
    }

    pub fn patch(&mut self, path: impl Into<String>, action: impl Into<Action<T>>) {
        self.on(Verb::Patch, path, action);
    }

    pub fn delete(&mut self, path: impl Into<String>, action: impl Into<Action<T>>) {
        self.on(Verb::Delete, path, action);
    }

    pub fn options(&mut self, path: impl Into<String>, action: impl Into<Action<T>>) {
        self.on(Verb::Options, path, action);
    }

    /// Set the handler invoked when nothing matches
    pub fn not_found<F>(&mut self, handler: F)
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        self.not_found = Some(Box::new(handler));
    }

    /// Dispatch the request described by `request`
    ///
    /// Returns the handler's value untouched. [`Outcome::Terminated`] means
    /// nothing could handle the request and status 404 has already been sent
    /// on `response`.
    pub fn route(
        &self,
        request: &RequestContext,
        response: &mut dyn ResponseChannel,
    ) -> Result<Outcome<T>, RouterError> {
        let method = request.verb_name();
        let path = request.path(self.path_strategy);

        let Some(action) = Verb::from_method(&method).and_then(|verb| self.table.get(verb, &path))
        else {
            logger::log_route_miss(&method, &path);
            return self.handle_not_found(response);
        };

        logger::log_dispatch(&method, &path);
        match self.dispatch(action) {
            Some(result) => result.map(Outcome::Handled),
            None => {
                logger::log_malformed_action(&method, &path);
                self.handle_not_found(response)
            }
        }
    }

    /// Resolve `class`, instantiate it and invoke `method` on the instance
    ///
    /// The class must be loadable, i.e. known to the controller registry.
    /// With a resolver configured the instance comes from it, otherwise it is
    /// default-constructed.
    pub fn call_action(&self, class: &str, method: &str) -> Result<T, RouterError> {
        if !self.controllers.contains(class) {
            return Err(RouterError::ClassNotFound(class.to_string()));
        }

        let mut instance = match &self.resolver {
            Some(resolver) => resolver.resolve(class)?,
            None => self
                .controllers
                .construct(class)
                .ok_or_else(|| RouterError::Unresolved(class.to_string()))?,
        };

        instance
            .call(method)
            .ok_or_else(|| RouterError::MethodNotFound {
                class: class.to_string(),
                method: method.to_string(),
            })
    }

    /// Run the not-found chain
    pub fn handle_not_found(
        &self,
        response: &mut dyn ResponseChannel,
    ) -> Result<Outcome<T>, RouterError> {
        if let Some(handler) = &self.not_found {
            return Ok(Outcome::Handled(handler()));
        }

        if let Some(result) = self
            .table
            .get(Verb::Get, LEGACY_NOT_FOUND_PATH)
            .and_then(|legacy| self.dispatch(legacy))
        {
            return result.map(Outcome::Handled);
        }

        response.send_status(404);
        Ok(Outcome::Terminated)
    }

    /// `None` when the action is a malformed reference
    fn dispatch(&self, action: &Action<T>) -> Option<Result<T, RouterError>> {
        match action {
            Action::Callable(handler) => Some(Ok(handler())),
            Action::Reference(reference) => ActionRef::parse(reference)
                .map(|target| self.call_action(target.class, target.method)),
        }
    }
}

impl<T> fmt::Debug for Router<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("routes", &self.table)
            .field("controllers", &self.controllers)
            .field("resolver", &self.resolver.is_some())
            .field("not_found", &self.not_found.is_some())
            .field("path_strategy", &self.path_strategy)
            .finish()
    }
}
