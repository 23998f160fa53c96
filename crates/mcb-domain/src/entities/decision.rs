use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::GraphUniqueId;

/// Lifecycle state of a [`Decision`]. This *is* a state
/// machine: `Proposed -> Approved -> Implemented` (terminal success) or
/// `Proposed -> Approved -> Failed` (terminal failure). No other edge is
/// legal; attempting one yields `Error::Conflict`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecisionStatus {
    /// Initial state on creation.
    Proposed,
    /// Accepted but not yet acted on.
    Approved,
    /// Terminal: successfully carried out.
    Implemented,
    /// Terminal: abandoned or superseded by a new decision.
    Failed,
}

impl DecisionStatus {
    /// The lowercase wire representation.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Proposed => "proposed",
            Self::Approved => "approved",
            Self::Implemented => "implemented",
            Self::Failed => "failed",
        }
    }

    /// Whether `next` is a legal transition from `self`.
    #[must_use]
    pub fn can_transition_to(&self, next: Self) -> bool {
        matches!(
            (self, next),
            (Self::Proposed, Self::Approved)
                | (Self::Approved, Self::Implemented)
                | (Self::Approved, Self::Failed)
        )
    }
}

impl std::str::FromStr for DecisionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "proposed" => Ok(Self::Proposed),
            "approved" => Ok(Self::Approved),
            "implemented" => Ok(Self::Implemented),
            "failed" => Ok(Self::Failed),
            other => Err(format!("unknown decision status '{other}'")),
        }
    }
}

/// A recorded architectural decision, scoped to a repository/branch and
/// linked to the component(s) it governs via `DECISION_ON`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Decision {
    /// Derived primary key: `"{repository}:{branch}:{id}"`.
    pub graph_unique_id: GraphUniqueId,
    /// Logical identifier supplied by the caller (must carry the `dec-` prefix).
    pub id: String,
    /// Logical repository name.
    pub repository: String,
    /// Branch name.
    pub branch: String,
    /// Short title.
    pub name: String,
    /// Calendar date the decision was made.
    pub date: NaiveDate,
    /// Rationale / context behind the decision.
    pub context: String,
    /// Lifecycle status.
    pub status: DecisionStatus,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}
