//! Operation logging port. Kept as a thin seam so `mcb-domain` and
//! `mcb-application` can log without depending on `tracing` directly —
//! `mcb-infrastructure` supplies the tracing-backed adapter.

/// Severity of a logged event, ordered from most to least severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// An operation failed.
    Error,
    /// Something unexpected but recoverable happened.
    Warn,
    /// Normal operational events (session bound, entity upserted, ...).
    Info,
    /// Developer-facing detail (query text, gateway dispatch).
    Debug,
    /// Highest-volume detail (per-iteration analytics progress).
    Trace,
}

/// A capability for emitting structured log events, independent of any
/// particular logging backend.
pub trait OperationLogger: Send + Sync {
    /// Emit one log event. `context` is a short static-ish tag (e.g. the
    /// tool name or component); `detail` is optional structured detail.
    fn log(&self, level: LogLevel, context: &str, message: &str, detail: Option<&dyn std::fmt::Display>);
}

/// An [`OperationLogger`] that discards every event — used in tests that
/// don't care about log output.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopOperationLogger;

impl OperationLogger for NoopOperationLogger {
    fn log(&self, _level: LogLevel, _context: &str, _message: &str, _detail: Option<&dyn std::fmt::Display>) {}
}
