//! Built-in controllers served by the binary

use serde_json::json;

use crate::container::Controller;
use crate::http::Reply;

const HOME_PAGE: &str = r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>zen-router</title></head>
<body>
<h1>zen-router</h1>
<p>Routes are declared in <code>config.toml</code> as <code>[[routes]]</code> entries.</p>
</body>
</html>
"#;

#[derive(Debug, Default)]
pub struct HomeController;

impl Controller<Reply> for HomeController {
    fn call(&mut self, method: &str) -> Option<Reply> {
        match method {
            "index" => Some(Reply::html(HOME_PAGE)),
            _ => None,
        }
    }
}

#[derive(Debug, Default)]
pub struct HealthController;

impl Controller<Reply> for HealthController {
    fn call(&mut self, method: &str) -> Option<Reply> {
        match method {
            "show" => Some(Reply::json(&json!({ "status": "ok" }))),
            _ => None,
        }
    }
}

/// Reports on the running router; needs configuration, so it is only
/// available through the container
#[derive(Debug, Clone)]
pub struct StatusController {
    server_name: String,
    route_count: usize,
}

impl StatusController {
    pub const fn new(server_name: String, route_count: usize) -> Self {
        Self {
            server_name,
            route_count,
        }
    }
}

impl Controller<Reply> for StatusController {
    fn call(&mut self, method: &str) -> Option<Reply> {
        match method {
            "show" => Some(Reply::json(&json!({
                "server": self.server_name,
                "routes": self.route_count,
                "version": env!("CARGO_PKG_VERSION"),
            }))),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hyper::StatusCode;

    #[test]
    fn test_home_index() {
        let reply = HomeController.call("index").unwrap();
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.body.contains("<h1>zen-router</h1>"));
        assert!(HomeController.call("show").is_none());
    }

    #[test]
    fn test_health_show() {
        let reply = HealthController.call("show").unwrap();
        assert_eq!(reply.body, r#"{"status":"ok"}"#);
    }

    #[test]
    fn test_status_show() {
        let mut controller = StatusController::new("zen".to_string(), 3);
        let reply = controller.call("show").unwrap();
        let body: serde_json::Value = serde_json::from_str(&reply.body).unwrap();
        assert_eq!(body["server"], "zen");
        assert_eq!(body["routes"], 3);
        assert!(controller.call("index").is_none());
    }
}
