//! Error taxonomy.
//!
//! The Tool Dispatcher is the single translation point from this taxonomy to
//! the wire response envelope (`{isError: true, content: [...]}`) — gateways
//! and operations propagate errors upward without catching them, except to
//! enrich messages with context.

use thiserror::Error;

/// Result type alias used throughout the kernel.
pub type Result<T> = std::result::Result<T, Error>;

/// The kernel's error taxonomy, surfaced to callers as a structured failure.
#[derive(Error, Debug)]
pub enum Error {
    /// No active session, or the session lacks the scope the call needs.
    #[error("session not bound: {message}")]
    SessionUnbound {
        /// What was missing.
        message: String,
    },

    /// A session exists but its bound context conflicts with an argument
    /// that cannot be overridden for this call.
    #[error("session mismatch: {message}")]
    SessionMismatch {
        /// Description of the mismatch.
        message: String,
    },

    /// Schema, enum, or prefix validation failure.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the invalid argument.
        message: String,
    },

    /// A referenced entity is absent. Distinct from an association's
    /// structured `{success: false}` return.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// An invariant violation: a cross-branch edge attempt, or an illegal
    /// Decision state transition.
    #[error("conflict: {message}")]
    Conflict {
        /// Description of the violated invariant.
        message: String,
    },

    /// Propagated from the Store Client: query syntax/runtime errors
    /// against the underlying graph engine.
    #[error("engine error: {message}")]
    EngineError {
        /// Description of the engine failure.
        message: String,
        /// Optional underlying error.
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Filesystem or connection failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The Store Client was invoked before Schema Installer ran.
    #[error("store not initialized for project root: {project_root}")]
    NotInitialized {
        /// The project root whose store is not yet ready.
        project_root: String,
    },

    /// The caller aborted an in-progress long-running operation.
    #[error("operation cancelled")]
    Cancelled,

    /// JSON parsing or serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Unexpected failure indicating a bug, not a caller-correctable condition.
    #[error("internal error: {message}")]
    Internal {
        /// Description of the internal failure.
        message: String,
    },
}

impl Error {
    /// Build a [`Error::SessionUnbound`].
    pub fn session_unbound(message: impl Into<String>) -> Self {
        Self::SessionUnbound {
            message: message.into(),
        }
    }

    /// Build a [`Error::SessionMismatch`].
    pub fn session_mismatch(message: impl Into<String>) -> Self {
        Self::SessionMismatch {
            message: message.into(),
        }
    }

    /// Build a [`Error::InvalidArgument`].
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Build a [`Error::NotFound`].
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Build a [`Error::Conflict`].
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Build a [`Error::EngineError`] with no source.
    pub fn engine(message: impl Into<String>) -> Self {
        Self::EngineError {
            message: message.into(),
            source: None,
        }
    }

    /// Build a [`Error::EngineError`] wrapping a source error.
    pub fn engine_with_source<E: std::error::Error + Send + Sync + 'static>(
        message: impl Into<String>,
        source: E,
    ) -> Self {
        Self::EngineError {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Build a [`Error::Internal`].
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether this error should be reported with `isError: true` but is
    /// otherwise a normal, expected outcome rather than a bug.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            Self::SessionUnbound { .. }
                | Self::SessionMismatch { .. }
                | Self::InvalidArgument { .. }
                | Self::NotFound { .. }
                | Self::Conflict { .. }
        )
    }
}
