//! Progress Channel implementations: a uniform
//! `notify(event)` capability with two concrete backends — a line-delimited
//! duplex channel for the stdio transport, and a session-keyed channel for
//! the HTTP/SSE transport. Both guarantee at-least-once, in-order delivery
//! within a single connection and never leak events across sessions.

/// Line-delimited duplex channel, one per stdio connection.
pub mod duplex;
/// Session-keyed channel, one per `mcp-session-id`.
pub mod session;

pub use duplex::DuplexProgressChannel;
pub use session::SessionProgressRegistry;
