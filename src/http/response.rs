//! HTTP response building module
//!
//! Provides builders for the responses the router front end produces.

use http_body_util::Full;
use hyper::body::Bytes;
use hyper::Response;

use super::reply::Reply;

/// Build a response from a controller reply
pub fn build_reply_response(reply: Reply, server_name: &str) -> Response<Full<Bytes>> {
    let content_length = reply.body.len();

    Response::builder()
        .status(reply.status)
        .header("Content-Type", reply.content_type)
        .header("Content-Length", content_length)
        .header("Server", server_name)
        .body(Full::new(Bytes::from(reply.body)))
        .unwrap_or_else(|e| {
            log_build_error(reply.status.as_str(), &e);
            Response::new(Full::new(Bytes::new()))
        })
}

/// Log response build error
fn log_build_error(status: &str, error: &hyper::http::Error) {
    crate::logger::log_error(&format!("Failed to build {status} response: {error}"));
}
