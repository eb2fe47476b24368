// CGI front end
// One process, one request: context from the environment, document on stdout

use std::io::{self, Write};

use crate::config::AppState;
use crate::context::RequestContext;
use crate::handler;
use crate::logger;

/// Environment variable whose presence marks a CGI invocation
pub const GATEWAY_INTERFACE: &str = "GATEWAY_INTERFACE";

pub fn is_cgi_request() -> bool {
    std::env::var_os(GATEWAY_INTERFACE).is_some()
}

/// Route the request described by the process environment and write the
/// response document to stdout
pub fn run(state: &AppState) -> io::Result<()> {
    let ctx = RequestContext::from_env();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    respond(state, &ctx, &mut out)
}

/// Route `ctx` and write a CGI response document to `out`
pub fn respond<W: Write>(state: &AppState, ctx: &RequestContext, out: &mut W) -> io::Result<()> {
    let (reply, head) = handler::dispatch(state, ctx);

    if state.config.logging.access_log {
        logger::log_request(&ctx.method, &ctx.request_uri, reply.status);
    }

    // a raw status line written during dispatch keeps its reason phrase
    let reason = if head.status() == Some(reply.status.as_u16()) {
        head.reason()
    } else {
        reply.status.canonical_reason()
    };

    match reason {
        Some(reason) => write!(out, "Status: {} {reason}\r\n", reply.status.as_u16())?,
        None => write!(out, "Status: {}\r\n", reply.status.as_u16())?,
    }
    write!(out, "Content-Type: {}\r\n", reply.content_type)?;
    write!(out, "Content-Length: {}\r\n", reply.body.len())?;
    write!(out, "X-Powered-By: {}\r\n\r\n", state.config.http.server_name)?;
    out.write_all(reply.body.as_bytes())?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app;

    fn state() -> AppState {
        let config = app::tests::test_config();
        let router = app::build_router(&config).unwrap();
        AppState::new(config, router)
    }

    fn render(ctx: &RequestContext) -> String {
        let mut out = Vec::new();
        respond(&state(), ctx, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_routed_document() {
        let ctx = RequestContext::from_vars([
            ("REQUEST_METHOD", "GET"),
            ("PATH_INFO", "/healthz"),
            ("REQUEST_URI", "/cgi-bin/zen/healthz?probe=1"),
        ]);
        let doc = render(&ctx);

        assert!(doc.starts_with("Status: 200 OK\r\n"));
        assert!(doc.contains("Content-Type: application/json\r\n"));
        assert!(doc.contains("Content-Length: 15\r\n"));
        assert!(doc.ends_with("\r\n\r\n{\"status\":\"ok\"}"));
    }

    #[test]
    fn test_unrouted_document_is_404() {
        let ctx = RequestContext::from_vars([
            ("REQUEST_METHOD", "GET"),
            ("REQUEST_URI", "/nowhere?x=1"),
        ]);
        let doc = render(&ctx);

        assert!(doc.starts_with("Status: 404 Not Found\r\n"));
        assert!(doc.ends_with("404 Not Found"));
    }
}
