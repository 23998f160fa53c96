use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::GraphUniqueId;

/// A tracked source file scoped to a repository/branch, linked to the
/// component(s) that own it via `CONTAINS_FILE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct File {
    /// Derived primary key: `"{repository}:{branch}:{id}"`.
    pub graph_unique_id: GraphUniqueId,
    /// Logical identifier supplied by the caller (must carry the `file-` prefix).
    pub id: String,
    /// Logical repository name.
    pub repository: String,
    /// Branch name.
    pub branch: String,
    /// Display name (usually the file's base name).
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    /// Detected/declared language, if known.
    pub language: Option<String>,
    /// Free-form JSON metrics payload (line count, complexity, …).
    pub metrics: Value,
    /// Content hash for change detection, if computed.
    pub content_hash: Option<String>,
    /// MIME type, if known.
    pub mime_type: Option<String>,
    /// Size in bytes, if known.
    pub size_bytes: Option<u64>,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}
