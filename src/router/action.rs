//! Route actions

use std::fmt;

/// Zero-argument handler stored in the route table
pub type Handler<T> = Box<dyn Fn() -> T + Send + Sync>;

/// What a route points at
pub enum Action<T> {
    /// Invoked directly with no arguments
    Callable(Handler<T>),
    /// `Class@method` reference, resolved at dispatch time
    Reference(String),
}

impl<T> Action<T> {
    pub fn callable<F>(handler: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
    {
        Self::Callable(Box::new(handler))
    }

    pub fn reference(reference: impl Into<String>) -> Self {
        Self::Reference(reference.into())
    }
}

impl<T> From<&str> for Action<T> {
    fn from(reference: &str) -> Self {
        Self::reference(reference)
    }
}

impl<T> From<String> for Action<T> {
    fn from(reference: String) -> Self {
        Self::Reference(reference)
    }
}

impl<T> fmt::Debug for Action<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Callable(_) => f.write_str("Callable(..)"),
            Self::Reference(reference) => f.debug_tuple("Reference").field(reference).finish(),
        }
    }
}

/// A well-formed `Class@method` reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRef<'a> {
    pub class: &'a str,
    pub method: &'a str,
}

impl<'a> ActionRef<'a> {
    /// Split on the first `@`; `None` unless both halves are non-empty
    pub fn parse(reference: &'a str) -> Option<Self> {
        let (class, method) = reference.split_once('@')?;
        if class.is_empty() || method.is_empty() {
            return None;
        }
        Some(Self { class, method })
    }
}
