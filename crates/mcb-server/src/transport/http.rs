//! HTTP+SSE transport: `POST /mcp` carries one
//! request, `GET /mcp` upgrades to SSE for notifications, `DELETE /mcp`
//! ends the session — all three handled by `rmcp`'s own
//! `StreamableHttpService`, which mints the `mcp-session-id` header on the
//! initial request and keys every later request's session off it. This
//! module only wires that service into an `axum::Router` and binds a TCP
//! listener; it owns no session bookkeeping of its own (`rmcp`'s
//! `LocalSessionManager` does, one instance per `MemoryBankHandler` built
//! by the service factory below).

use std::net::SocketAddr;
use std::sync::Arc;

use mcb_domain::error::{Error, Result};
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::transport::{StreamableHttpServerConfig, StreamableHttpService};

use crate::dispatcher::ToolDispatcher;
use crate::handler::MemoryBankHandler;

/// Bind `host:port` and serve the HTTP+SSE transport until the process is
/// asked to shut down (ctrl-c or the caller dropping this future).
///
/// # Errors
///
/// Returns `Error::Internal` if the address is unparsable or the listener
/// cannot be bound.
pub async fn serve(dispatcher: Arc<ToolDispatcher>, host: &str, port: u16) -> Result<()> {
    let service = StreamableHttpService::new(
        move || Ok(MemoryBankHandler::new(Arc::clone(&dispatcher))),
        LocalSessionManager::default().into(),
        StreamableHttpServerConfig::default(),
    );

    let router = axum::Router::new().nest_service("/mcp", service);

    let addr: SocketAddr = format!("{host}:{port}")
        .parse()
        .map_err(|e| Error::invalid_argument(format!("invalid bind address '{host}:{port}': {e}")))?;

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::internal(format!("failed to bind {addr}: {e}")))?;

    tracing::info!(%addr, "HTTP+SSE transport listening");

    axum::serve(listener, router)
        .await
        .map_err(|e| Error::internal(format!("HTTP+SSE transport failed: {e}")))
}
