//! # Infrastructure Layer
//!
//! The process-wide, transport-agnostic runtime the memory bank kernel
//! hangs off of: the Client Registry, Session Manager, the two Progress
//! Channel implementations, process configuration, and the `tracing`
//! logging adapter.
//!
//! No entity/operation semantics live here — that's `mcb-application`. No
//! tool dispatch or wire format lives here — that's `mcb-server`. This
//! crate only provisions and coordinates the shared, per-process state
//! those layers are built on.

/// Process configuration: defaults, `mcb.toml`, environment overrides.
pub mod config;
/// `tracing`-backed `OperationLogger` adapter and subscriber setup.
pub mod logging;
/// Progress Channel implementations (duplex + session-keyed SSE).
pub mod progress;
/// The concrete, SQLite-backed Client Registry.
pub mod registry;
/// The per-connection Session Manager.
pub mod session_manager;

pub use config::ServerConfig;
pub use logging::{init_tracing, TracingOperationLogger};
pub use progress::{DuplexProgressChannel, SessionProgressRegistry};
pub use registry::SqliteClientRegistry;
pub use session_manager::SessionManager;
