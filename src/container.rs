//! Controllers and how they get instantiated
//!
//! A `Class@method` reference names a controller and one of its methods.
//! The [`ControllerRegistry`] decides which names are loadable and knows how
//! to build each one with no arguments. A [`Resolver`] such as [`Container`]
//! can take over construction when controllers need dependencies.

use std::collections::HashMap;
use std::fmt;

use crate::error::RouterError;

/// A controller exposes zero-argument methods by name
pub trait Controller<T> {
    /// Invoke `method`, or return `None` when this controller has no such method
    fn call(&mut self, method: &str) -> Option<T>;
}

/// Dependency-resolution collaborator
pub trait Resolver<T>: Send + Sync {
    /// Produce a controller instance for `id`
    fn resolve(&self, id: &str) -> Result<Box<dyn Controller<T>>, RouterError>;
}

type Factory<T> = Box<dyn Fn() -> Box<dyn Controller<T>> + Send + Sync>;

/// Loadable controller names and their default constructors
///
/// A name registered through [`declare`](Self::declare) is loadable but has
/// no default constructor; it can only be built by a [`Resolver`].
pub struct ControllerRegistry<T> {
    constructors: HashMap<String, Option<Factory<T>>>,
}

impl<T: 'static> ControllerRegistry<T> {
    pub fn new() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }

    /// Make `name` loadable, built through `C::default()`
    pub fn register<C>(&mut self, name: impl Into<String>)
    where
        C: Controller<T> + Default + 'static,
    {
        self.constructors.insert(
            name.into(),
            Some(Box::new(|| Box::new(C::default()) as Box<dyn Controller<T>>)),
        );
    }

    /// Make `name` loadable without a default constructor
    pub fn declare(&mut self, name: impl Into<String>) {
        self.constructors.insert(name.into(), None);
    }

    pub fn contains(&self, name: &str) -> bool {
        self.constructors.contains_key(name)
    }

    /// Default-construct the controller registered as `name`
    ///
    /// `None` for unknown names and for names that were only declared.
    pub fn construct(&self, name: &str) -> Option<Box<dyn Controller<T>>> {
        self.constructors
            .get(name)
            .and_then(Option::as_ref)
            .map(|build| build())
    }

    pub fn len(&self) -> usize {
        self.constructors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constructors.is_empty()
    }
}

impl<T: 'static> Default for ControllerRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ControllerRegistry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.constructors.keys()).finish()
    }
}

/// Alias-keyed factory container
///
/// Factories may capture whatever the controller needs, which is what sets
/// this apart from default construction through the registry.
pub struct Container<T> {
    bindings: HashMap<String, Factory<T>>,
}

impl<T: 'static> Container<T> {
    pub fn new() -> Self {
        Self {
            bindings: HashMap::new(),
        }
    }

    /// Bind `alias` to a factory; a later binding for the same alias replaces it
    pub fn bind<F, C>(&mut self, alias: impl Into<String>, factory: F)
    where
        F: Fn() -> C + Send + Sync + 'static,
        C: Controller<T> + 'static,
    {
        self.bindings.insert(
            alias.into(),
            Box::new(move || Box::new(factory()) as Box<dyn Controller<T>>),
        );
    }

    pub fn has(&self, alias: &str) -> bool {
        self.bindings.contains_key(alias)
    }
}

impl<T: 'static> Default for Container<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Container<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("bindings", &self.bindings.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<T> Resolver<T> for Container<T> {
    fn resolve(&self, id: &str) -> Result<Box<dyn Controller<T>>, RouterError> {
        self.bindings
            .get(id)
            .map(|build| build())
            .ok_or_else(|| RouterError::Unresolved(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Greeter {
        calls: usize,
    }

    impl Controller<String> for Greeter {
        fn call(&mut self, method: &str) -> Option<String> {
            self.calls += 1;
            match method {
                "hello" => Some(format!("hello #{}", self.calls)),
                _ => None,
            }
        }
    }

    struct Prefixed {
        prefix: String,
    }

    impl Controller<String> for Prefixed {
        fn call(&mut self, method: &str) -> Option<String> {
            (method == "show").then(|| format!("{}:show", self.prefix))
        }
    }

    #[test]
    fn test_registry_default_constructs_fresh_instances() {
        let mut registry = ControllerRegistry::<String>::new();
        registry.register::<Greeter>("Greeter");

        assert!(registry.contains("Greeter"));
        assert!(!registry.contains("greeter"));
        assert_eq!(registry.len(), 1);

        let mut first = registry.construct("Greeter").unwrap();
        assert_eq!(first.call("hello").as_deref(), Some("hello #1"));
        assert_eq!(first.call("hello").as_deref(), Some("hello #2"));

        let mut second = registry.construct("Greeter").unwrap();
        assert_eq!(second.call("hello").as_deref(), Some("hello #1"));
        assert!(second.call("missing").is_none());
    }

    #[test]
    fn test_registry_declared_name_has_no_constructor() {
        let mut registry = ControllerRegistry::<String>::new();
        registry.declare("Prefixed");

        assert!(registry.contains("Prefixed"));
        assert!(registry.construct("Prefixed").is_none());
    }

    #[test]
    fn test_registry_unknown_name() {
        let registry = ControllerRegistry::<String>::default();
        assert!(registry.is_empty());
        assert!(registry.construct("Nope").is_none());
    }

    #[test]
    fn test_container_factories_capture_dependencies() {
        let mut container = Container::<String>::new();
        let prefix = "v2".to_string();
        container.bind("Prefixed", move || Prefixed {
            prefix: prefix.clone(),
        });

        assert!(container.has("Prefixed"));
        let mut controller = container.resolve("Prefixed").unwrap();
        assert_eq!(controller.call("show").as_deref(), Some("v2:show"));
    }

    #[test]
    fn test_container_rebinding_replaces() {
        let mut container = Container::<String>::new();
        container.bind("Svc", || Prefixed {
            prefix: "old".to_string(),
        });
        container.bind("Svc", || Prefixed {
            prefix: "new".to_string(),
        });

        let mut controller = container.resolve("Svc").unwrap();
        assert_eq!(controller.call("show").as_deref(), Some("new:show"));
    }

    #[test]
    fn test_container_unbound_alias() {
        let container = Container::<String>::new();
        let err = container.resolve("Ghost").err().unwrap();
        assert_eq!(err, RouterError::Unresolved("Ghost".to_string()));
    }
}
