//! Controller reply value

use hyper::StatusCode;

pub const TEXT_PLAIN: &str = "text/plain; charset=utf-8";
pub const TEXT_HTML: &str = "text/html; charset=utf-8";
pub const APPLICATION_JSON: &str = "application/json";

/// Body written when no handler at all could take the request
pub const NOT_FOUND_BODY: &str = "404 Not Found";

/// What a handler hands back to the front end
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub status: StatusCode,
    pub content_type: &'static str,
    pub body: String,
}

impl Reply {
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: TEXT_PLAIN,
            body: body.into(),
        }
    }

    pub fn html(body: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: TEXT_HTML,
            body: body.into(),
        }
    }

    pub fn json(value: &serde_json::Value) -> Self {
        Self {
            status: StatusCode::OK,
            content_type: APPLICATION_JSON,
            body: value.to_string(),
        }
    }

    /// Bare 404 for a request nothing could handle; `status` comes from the
    /// response head the router wrote to
    pub fn not_found(status: StatusCode) -> Self {
        Self::text(NOT_FOUND_BODY).with_status(status)
    }

    pub fn internal_error() -> Self {
        Self::text("500 Internal Server Error").with_status(StatusCode::INTERNAL_SERVER_ERROR)
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status = status;
        self
    }
}
