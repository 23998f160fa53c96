use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A logical repository tracked within a project root, partitioned by
/// branch. Unlike every other entity, `Repository` is keyed
/// directly by `"{name}:{branch}"` rather than a derived `graph_unique_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repository {
    /// Primary key: `"{name}:{branch}"`.
    pub id: String,
    /// Logical repository name (e.g. `"my-app"`).
    pub name: String,
    /// Branch name (e.g. `"main"`, `"feature/x"`).
    pub branch: String,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}

impl Repository {
    /// Compose the `"{name}:{branch}"` primary key.
    #[must_use]
    pub fn make_id(name: &str, branch: &str) -> String {
        format!("{name}:{branch}")
    }

    /// Construct a new `Repository` with both timestamps set to `now`.
    #[must_use]
    pub fn new(name: impl Into<String>, branch: impl Into<String>, now: DateTime<Utc>) -> Self {
        let name = name.into();
        let branch = branch.into();
        Self {
            id: Self::make_id(&name, &branch),
            name,
            branch,
            created_at: now,
            updated_at: now,
        }
    }
}
