//! Request and response context
//!
//! The router never reads process-wide state. Everything it needs about the
//! current request arrives in a [`RequestContext`], and the only thing it
//! ever writes back goes through a [`ResponseChannel`].

use hyper::{StatusCode, Uri};
use serde::{Deserialize, Serialize};

/// How the request path is derived from the full request target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PathStrategy {
    /// Cut the target at the first `?` or `#`
    Split,
    /// Parse the target as a URI and keep its path component
    #[default]
    Parse,
}

impl PathStrategy {
    /// Extract the path component of a request target
    ///
    /// A target that does not parse as a URI is handled by the split
    /// strategy, so both variants always yield a path.
    pub fn extract(self, target: &str) -> String {
        match self {
            Self::Split => split_path(target).to_string(),
            Self::Parse => target
                .parse::<Uri>()
                .map_or_else(|_| split_path(target).to_string(), |uri| uri.path().to_string()),
        }
    }
}

fn split_path(target: &str) -> &str {
    let end = target.find(|c: char| c == '?' || c == '#').unwrap_or(target.len());
    let path = &target[..end];

    if path.starts_with('/') {
        return path;
    }

    // absolute-form target: drop scheme and authority
    match path.find("://") {
        Some(scheme_end) => {
            let rest = &path[scheme_end + 3..];
            rest.find('/').map_or("/", |i| &rest[i..])
        }
        None => path,
    }
}

/// CGI meta-variables the router reads
const CGI_VARS: [&str; 3] = ["REQUEST_METHOD", "PATH_INFO", "REQUEST_URI"];

/// The request as seen by the router
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    /// HTTP method exactly as received
    pub method: String,
    /// Extra path info (CGI `PATH_INFO`); wins over the request target when non-empty
    pub path_info: Option<String>,
    /// Full request target, query string included
    pub request_uri: String,
}

impl RequestContext {
    pub fn new(method: impl Into<String>, request_uri: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path_info: None,
            request_uri: request_uri.into(),
        }
    }

    #[must_use]
    pub fn with_path_info(mut self, path_info: impl Into<String>) -> Self {
        self.path_info = Some(path_info.into());
        self
    }

    /// Build a context from CGI meta-variables
    ///
    /// Reads `REQUEST_METHOD`, `PATH_INFO` and `REQUEST_URI`; everything else
    /// is ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut ctx = Self::default();
        for (key, value) in vars {
            match key.as_ref() {
                "REQUEST_METHOD" => ctx.method = value.into(),
                "PATH_INFO" => ctx.path_info = Some(value.into()),
                "REQUEST_URI" => ctx.request_uri = value.into(),
                _ => {}
            }
        }
        ctx
    }

    /// Build a context from the CGI environment of this process
    ///
    /// Other variables are never decoded, so client-supplied `HTTP_*` values
    /// that are not UTF-8 are harmless. Non-UTF-8 bytes in the variables that
    /// are read are replaced lossily.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars_os().filter_map(|(key, value)| {
            let key = key.into_string().ok()?;
            CGI_VARS
                .contains(&key.as_str())
                .then(|| (key, value.to_string_lossy().into_owned()))
        }))
    }

    /// Lower-cased method name, the key used by the route table
    pub fn verb_name(&self) -> String {
        self.method.to_ascii_lowercase()
    }

    /// Resolve the request path
    ///
    /// Non-empty path info is used as-is. Otherwise the path component of the
    /// request target is used. An empty result falls back to `/`.
    pub fn path(&self, strategy: PathStrategy) -> String {
        if let Some(info) = self.path_info.as_deref().filter(|p| !p.is_empty()) {
            return info.to_string();
        }

        let path = strategy.extract(&self.request_uri);
        if path.is_empty() {
            "/".to_string()
        } else {
            path
        }
    }
}

/// Sink for the status of the current response
pub trait ResponseChannel {
    /// Set the numeric status code
    fn send_status(&mut self, code: u16);

    /// Write a raw status line such as `HTTP/1.1 404 Not Found` or `Status: 404`
    fn send_status_line(&mut self, line: &str);
}

/// In-memory response head used by the CGI and server front ends
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseHead {
    status: Option<u16>,
    reason: Option<String>,
}

impl ResponseHead {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status explicitly sent during dispatch, if any
    pub const fn status(&self) -> Option<u16> {
        self.status
    }

    /// Status to put on the wire, `default` when nothing was sent
    pub fn status_or(&self, default: StatusCode) -> StatusCode {
        self.status
            .and_then(|code| StatusCode::from_u16(code).ok())
            .unwrap_or(default)
    }

    /// Reason phrase from a raw status line, else the canonical one
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref().or_else(|| {
            self.status
                .and_then(|code| StatusCode::from_u16(code).ok())
                .and_then(|status| status.canonical_reason())
        })
    }
}

impl ResponseChannel for ResponseHead {
    fn send_status(&mut self, code: u16) {
        self.status = Some(code);
        self.reason = None;
    }

    fn send_status_line(&mut self, line: &str) {
        let mut tokens = line.split_whitespace().peekable();
        if tokens
            .peek()
            .is_some_and(|t| t.starts_with("HTTP/") || t.eq_ignore_ascii_case("status:"))
        {
            tokens.next();
        }

        let Some(code) = tokens.next().and_then(|t| t.parse::<u16>().ok()) else {
            crate::logger::log_warning(&format!("Ignoring malformed status line: '{line}'"));
            return;
        };

        let reason = tokens.collect::<Vec<_>>().join(" ");
        self.status = Some(code);
        self.reason = (!reason.is_empty()).then_some(reason);
    }
}
