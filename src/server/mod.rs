// Server module entry
// HTTP accept loop and the CGI front end

pub mod cgi;
pub mod connection;
pub mod listener;

use std::sync::Arc;

use tokio::net::TcpListener;

use crate::config::AppState;
use crate::logger;

// Re-export commonly used items
pub use listener::{create_reusable_listener, DEFAULT_BACKLOG};

/// Accept connections until the process is interrupted
///
/// Connection tasks are spawned with `spawn_local`, so this must run inside
/// a `LocalSet`.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            accept_result = listener.accept() => {
                match accept_result {
                    Ok((stream, peer_addr)) => {
                        connection::accept_connection(stream, peer_addr, &state);
                    }
                    Err(e) => {
                        logger::log_error(&format!("Failed to accept connection: {e}"));
                    }
                }
            }

            _ = &mut shutdown => {
                logger::log_shutdown();
                return Ok(());
            }
        }
    }
}
