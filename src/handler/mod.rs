//! Request handler module
//!
//! Bridges hyper to the router: builds the request context, runs dispatch
//! and turns the outcome into a reply.

use std::convert::Infallible;
use std::sync::Arc;

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::{Request, Response, StatusCode};

use crate::config::AppState;
use crate::context::{RequestContext, ResponseHead};
use crate::http::{self, Reply};
use crate::logger;
use crate::router::Outcome;

/// Main entry point for HTTP request handling
pub async fn handle_request(
    req: Request<hyper::body::Incoming>,
    state: Arc<AppState>,
) -> Result<Response<Full<Bytes>>, Infallible> {
    let ctx = request_context(&req);
    let (reply, _) = dispatch(&state, &ctx);

    if state.config.logging.access_log {
        logger::log_request(req.method().as_str(), &ctx.request_uri, reply.status);
    }

    Ok(http::build_reply_response(reply, &state.config.http.server_name))
}

/// Request context for a hyper request
///
/// HTTP servers have no extra path info, so only the method and the request
/// target are carried over.
pub fn request_context<B>(req: &Request<B>) -> RequestContext {
    let target = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_string(), ToString::to_string);
    RequestContext::new(req.method().as_str(), target)
}

/// Route `ctx` and settle on the reply to send
///
/// The response head is returned alongside so front ends can honour a raw
/// status line written during dispatch.
pub fn dispatch(state: &AppState, ctx: &RequestContext) -> (Reply, ResponseHead) {
    let mut head = ResponseHead::new();
    let reply = match state.router.route(ctx, &mut head) {
        Ok(Outcome::Handled(reply)) => reply,
        Ok(Outcome::Terminated) => Reply::not_found(head.status_or(StatusCode::NOT_FOUND)),
        Err(err) => {
            logger::log_dispatch_error(&ctx.method, &ctx.request_uri, &err);
            Reply::internal_error()
        }
    };
    (reply, head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;
    use crate::config::RouteEntry;

    fn state(routes: Vec<RouteEntry>, not_found_body: Option<&str>) -> AppState {
        let mut config = app::tests::test_config();
        config.routes = routes;
        config.fallback.not_found_body = not_found_body.map(String::from);
        let router = app::build_router(&config).unwrap();
        AppState::new(config, router)
    }

    fn entry(verb: &str, path: &str, action: &str) -> RouteEntry {
        RouteEntry {
            verb: verb.to_string(),
            path: path.to_string(),
            action: action.to_string(),
        }
    }

    #[test]
    fn test_request_context_keeps_query() {
        let req = Request::builder()
            .method("POST")
            .uri("/search?q=rust")
            .body(())
            .unwrap();
        let ctx = request_context(&req);
        assert_eq!(ctx.method, "POST");
        assert_eq!(ctx.request_uri, "/search?q=rust");
        assert_eq!(ctx.path_info, None);
    }

    #[test]
    fn test_dispatch_handled() {
        let state = state(vec![entry("get", "/", "HomeController@index")], None);
        let (reply, head) = dispatch(&state, &RequestContext::new("GET", "/?utm=1"));
        assert_eq!(reply.status, StatusCode::OK);
        assert!(reply.body.contains("zen-router"));
        assert_eq!(head.status(), None);
    }

    #[test]
    fn test_dispatch_unmatched_is_bare_404() {
        let state = state(vec![entry("get", "/", "HomeController@index")], None);
        let (reply, head) = dispatch(&state, &RequestContext::new("GET", "/missing"));
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.body, http::reply::NOT_FOUND_BODY);
        assert_eq!(head.status(), Some(404));
    }

    #[test]
    fn test_dispatch_configured_not_found() {
        let state = state(vec![], Some("try /healthz"));
        let (reply, head) = dispatch(&state, &RequestContext::new("GET", "/missing"));
        assert_eq!(reply.status, StatusCode::NOT_FOUND);
        assert_eq!(reply.body, "try /healthz");
        assert_eq!(head.status(), None);
    }

    #[test]
    fn test_dispatch_error_is_500() {
        let state = state(vec![entry("get", "/broken", "GhostController@index")], None);
        let (reply, _) = dispatch(&state, &RequestContext::new("GET", "/broken"));
        assert_eq!(reply.status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
