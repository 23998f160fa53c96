use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::GraphUniqueId;

/// An agent-recorded observation linked to a `Component`, `Decision`, or
/// `Rule` via `CONTEXT_OF`. Context nodes form the append-only
/// history an agent consults before acting on an item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Context {
    /// Derived primary key: `"{repository}:{branch}:{id}"`.
    pub graph_unique_id: GraphUniqueId,
    /// Logical identifier supplied by the caller.
    pub id: String,
    /// Logical repository name.
    pub repository: String,
    /// Branch name.
    pub branch: String,
    /// Identifier of the agent that recorded this context.
    pub agent: String,
    /// Short summary of the observation.
    pub summary: String,
    /// Full observation text.
    pub observation: String,
    /// Calendar date the observation was recorded on.
    pub date: NaiveDate,
    /// Optional linked issue reference.
    pub issue: Option<String>,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}
