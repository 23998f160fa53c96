//! Concrete transport bindings: the line-delimited duplex stdio channel
//! and the HTTP+SSE channel. Byte framing is treated as an external
//! collaborator's concern — both modules here are thin:
//! they hand an [`crate::handler::MemoryBankHandler`] to `rmcp`'s own
//! transport implementation and let it own the wire format.

/// The HTTP+SSE transport: `rmcp`'s `StreamableHttpService` mounted into an
/// `axum::Router`.
pub mod http;
/// The line-delimited duplex stdio transport.
pub mod stdio;
