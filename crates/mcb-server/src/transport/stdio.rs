//! Line-delimited duplex transport: exactly one session per process
//! connection, bound implicitly on the connection's first
//! `init-memory-bank` call.
//!
//! One `ServerHandler` handed to `rmcp::ServiceExt::serve` over a `(stdin,
//! stdout)` pair, run until the peer disconnects. `tracing`'s subscriber is
//! installed against stderr before this runs, so nothing but JSON-RPC
//! frames ever reaches stdout.

use std::sync::Arc;

use mcb_domain::error::{Error, Result};
use rmcp::ServiceExt;

use crate::dispatcher::ToolDispatcher;
use crate::handler::MemoryBankHandler;

/// `stdin`/`stdout` as an `rmcp` duplex transport.
fn stdio() -> (tokio::io::Stdin, tokio::io::Stdout) {
    (tokio::io::stdin(), tokio::io::stdout())
}

/// Serve one stdio connection until the peer disconnects. Blocks the
/// caller for the lifetime of the connection — the process's one and only
/// session lives and dies with this call.
///
/// # Errors
///
/// Returns `Error::Internal` if the transport fails to start or the
/// connection ends abnormally.
pub async fn serve(dispatcher: Arc<ToolDispatcher>) -> Result<()> {
    let handler = MemoryBankHandler::new(dispatcher);
    let running = handler
        .serve(stdio())
        .await
        .map_err(|e| Error::internal(format!("stdio transport failed to start: {e}")))?;

    running
        .waiting()
        .await
        .map_err(|e| Error::internal(format!("stdio connection ended abnormally: {e}")))?;

    Ok(())
}
