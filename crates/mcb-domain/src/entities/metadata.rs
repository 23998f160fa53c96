use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::GraphUniqueId;

/// A free-form, named JSON payload scoped to a repository/branch
///. Used for whole-repo settings that don't warrant their own
/// entity type (e.g. project conventions, tool configuration snapshots).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Derived primary key: `"{repository}:{branch}:{id}"`.
    pub graph_unique_id: GraphUniqueId,
    /// Logical identifier supplied by the caller.
    pub id: String,
    /// Logical repository name.
    pub repository: String,
    /// Branch name.
    pub branch: String,
    /// Human-readable name of this metadata record.
    pub name: String,
    /// Free-form JSON payload, stored and round-tripped verbatim.
    pub content: Value,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}
