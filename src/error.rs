//! Router error taxonomy
//!
//! Only conditions that escape to the caller live here. Missing routes and
//! malformed `Class@method` references are handled by the not-found chain.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    /// Registration through a verb name outside the supported set
    #[error("unsupported operation: `{0}` is not a routable verb")]
    UnsupportedVerb(String),

    /// `Class@method` reference whose class is not registered
    #[error("Class or function {0} not found")]
    ClassNotFound(String),

    /// Controller instance has no method with this name
    #[error("method `{method}` not found on {class}")]
    MethodNotFound { class: String, method: String },

    /// Container has no binding for the identifier
    #[error("container has no binding for `{0}`")]
    Unresolved(String),
}
