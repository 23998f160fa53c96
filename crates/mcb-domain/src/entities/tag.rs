use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A global label, unique project-root-wide. `Tag` is the one
/// entity kind with no `(repository, branch)` scope and no `graph_unique_id`
/// — its `id` *is* the primary key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tag {
    /// Primary key, unique across the whole project-root database (must
    /// carry the `tag-` prefix).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional display color (e.g. a hex code).
    pub color: Option<String>,
    /// Optional human-readable description.
    pub description: Option<String>,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
}
