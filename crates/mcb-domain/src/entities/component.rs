use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::GraphUniqueId;

/// Lifecycle state of a [`Component`]. Unlike [`DecisionStatus`](crate::entities::DecisionStatus),
/// this is not a state machine — any status may be written directly by an
/// upsert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ComponentStatus {
    /// In active use.
    Active,
    /// Superseded but still present in the graph.
    Deprecated,
    /// Not yet built.
    Planned,
}

impl ComponentStatus {
    /// The lowercase wire representation (`"active"`, `"deprecated"`, `"planned"`).
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Deprecated => "deprecated",
            Self::Planned => "planned",
        }
    }
}

impl std::str::FromStr for ComponentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(Self::Active),
            "deprecated" => Ok(Self::Deprecated),
            "planned" => Ok(Self::Planned),
            other => Err(format!("unknown component status '{other}'")),
        }
    }
}

/// An architectural building block scoped to a repository/branch
///. `depends_on` lists logical component IDs; a `DEPENDS_ON`
/// edge is only materialised for entries that resolve to an existing
/// `Component` node in the same scope (invariant 5) — entries that don't
/// resolve yet are retained on the node but stay dangling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Component {
    /// Derived primary key: `"{repository}:{branch}:{id}"`.
    pub graph_unique_id: GraphUniqueId,
    /// Logical identifier supplied by the caller (must carry the `comp-` prefix).
    pub id: String,
    /// Logical repository name.
    pub repository: String,
    /// Branch name.
    pub branch: String,
    /// Human-readable name.
    pub name: String,
    /// Free-form component kind (e.g. `"service"`, `"library"`).
    pub kind: Option<String>,
    /// Lifecycle status.
    pub status: ComponentStatus,
    /// Logical IDs of components this one depends on.
    pub depends_on: Vec<String>,
    /// Server-set creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-set, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}
