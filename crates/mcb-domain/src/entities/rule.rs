use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::GraphUniqueId;

/// Lifecycle state of a [`Rule`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleStatus {
    /// Currently enforced.
    Active,
    /// Retired but kept for history.
    Deprecated,
}

impl RuleStatus {
    /// The lowercase wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deprecated => "deprecated",
        }
    }
}

impl std::str::FromStr for RuleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deprecated" => Ok(Self::Deprecated),
            other => Err(format!("unknown rule status '{other}'")),
        }
    }
}

/// A governance rule scoped to a repository/branch.
/// `triggers` is a retrieval aid only — the event/keyword strings are never
/// evaluated by the core (that belongs to an external advisor subsystem).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    /// Derived primary key: `"{repository}:{branch}:{id}"`.
    pub graph_unique_id: GraphUniqueId,
    /// Logical identifier supplied by the caller (must carry the `rule-` prefix).
    pub id: String,
    /// Logical repository name.
    pub repository: String,
    /// Branch name.
    pub branch: String,
    /// Human-readable name.
    pub name: String,
    /// Calendar date the rule was created.
    pub created: NaiveDate,
    /// Rule body text.
    pub content: String,
    /// Retrieval-filtering keywords/events (not evaluated).
    pub triggers: Vec<String>,
    /// Lifecycle status.
    pub status: RuleStatus,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}
