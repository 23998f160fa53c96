//! Progress Channel: a uniform "emit an intermediate status"
//! capability passed into long-running handlers, bound to the active
//! transport by the Tool Dispatcher.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A non-terminal notification emitted during a long-running tool call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    /// Short machine-readable status (e.g. `"running"`, `"iterating"`).
    pub status: String,
    /// Optional human-readable message.
    pub message: Option<String>,
    /// Optional completion percentage, `0.0..=100.0`.
    pub percent: Option<f64>,
    /// Whether this is the last event the handler will emit.
    pub is_final: bool,
    /// Optional structured payload (e.g. partial analytics results).
    pub data: Option<Value>,
}

impl ProgressEvent {
    /// Build a simple, non-final status event.
    #[must_use]
    pub fn status(status: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: status.into(),
            message: Some(message.into()),
            percent: None,
            is_final: false,
            data: None,
        }
    }

    /// Build a status event carrying a completion percentage.
    #[must_use]
    pub fn with_percent(status: impl Into<String>, message: impl Into<String>, percent: f64) -> Self {
        Self {
            status: status.into(),
            message: Some(message.into()),
            percent: Some(percent),
            is_final: false,
            data: None,
        }
    }
}

/// A single-method capability: "emit an intermediate status". Implementations
/// back onto a line-delimited duplex channel or a session-keyed SSE stream
///; a no-op implementation is used for batch/stateless calls.
///
/// Guarantees: at-least-once delivery within a single connection, in the
/// order emitted; no cross-session leakage.
#[async_trait]
pub trait ProgressChannel: Send + Sync {
    /// Emit one progress event. Best-effort: delivery failures must never
    /// fail the handler that raised them.
    async fn notify(&self, event: ProgressEvent);
}

/// A [`ProgressChannel`] that discards every event — used when no listener
/// is attached.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopProgressChannel;

#[async_trait]
impl ProgressChannel for NoopProgressChannel {
    async fn notify(&self, _event: ProgressEvent) {}
}
