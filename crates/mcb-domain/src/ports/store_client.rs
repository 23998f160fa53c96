//! The Store Client contract.
//!
//! `StoreClient` is the one seam between the kernel and the concrete
//! embedded graph-database engine. Any engine "supporting labeled property
//! nodes, typed relationships, parameterised queries, and primary-key-indexed
//! lookups" satisfies it — `mcb-providers` backs it with SQLite
//! (see `DESIGN.md`).

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::error::Result;

/// A single bound value: scalars, null, an ISO-8601 instant, a homogeneous
/// list of scalars, or an embedded JSON payload.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// SQL `NULL`.
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Integer scalar.
    Int(i64),
    /// Floating-point scalar.
    Float(f64),
    /// Text scalar.
    Text(String),
    /// An instant, always round-tripped as UTC.
    Timestamp(DateTime<Utc>),
    /// A homogeneous list of scalars (stored as a JSON array column).
    List(Vec<QueryValue>),
    /// An embedded JSON payload, stored and returned verbatim.
    Json(Value),
}

impl QueryValue {
    /// Narrow to a `&str`, if this value is [`QueryValue::Text`].
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Narrow to an `i64`, if this value is [`QueryValue::Int`].
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Narrow to a timestamp, if this value is [`QueryValue::Timestamp`].
    #[must_use]
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Timestamp(t) => Some(*t),
            _ => None,
        }
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<DateTime<Utc>> for QueryValue {
    fn from(value: DateTime<Utc>) -> Self {
        Self::Timestamp(value)
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Named query parameters, bound by the caller in execution order.
pub type Params = Vec<(&'static str, QueryValue)>;

/// One result record: a mapping from column alias to value.
pub type Row = HashMap<String, QueryValue>;

/// One database handle, exclusively owned by its `StoreClient`. Write serialisation (if the underlying engine requires it) is
/// the implementation's responsibility — reads must be able to proceed
/// concurrently with each other.
#[async_trait]
pub trait StoreClient: Send + Sync {
    /// Execute a parameterised query and return its result rows.
    ///
    /// # Errors
    ///
    /// Returns `Error::EngineError` on query syntax/runtime failure,
    /// `Error::Io` on disk/connection failure, `Error::NotInitialized` if
    /// called before the Schema Installer has run.
    async fn execute(&self, query: &str, params: &Params) -> Result<Vec<Row>>;

    /// Release engine resources held by this handle. Safe to call more than
    /// once; subsequent calls are no-ops.
    ///
    /// # Errors
    ///
    /// Returns `Error::EngineError` if the engine reports a failure while
    /// flushing or closing.
    async fn close(&self) -> Result<()>;
}
