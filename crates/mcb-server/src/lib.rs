//! # Delivery Layer
//!
//! The Tool Dispatcher and the two concrete transports: a static
//! name-keyed tool table, session-aware dispatch that translates every
//! [`mcb_domain::error::Error`] into the wire response envelope, and the
//! duplex/HTTP+SSE `rmcp` bindings that drive it.
//!
//! No entity or operation semantics live here — that's `mcb-application`.
//! This crate only resolves a request's session, shapes its arguments, and
//! calls into the Service Façade.

/// The Tool Dispatcher: session resolution, argument shaping, and the
/// single error-to-envelope translation point.
pub mod dispatcher;
/// The static tool table: names, descriptions, and `schemars`-derived
/// input schemas.
pub mod tools;
/// The shared `rmcp::ServerHandler` both transports serve.
pub mod handler;
/// Concrete transport bindings: stdio duplex and HTTP+SSE.
pub mod transport;

pub use dispatcher::{DispatchOutcome, ToolDispatcher};
pub use handler::MemoryBankHandler;
