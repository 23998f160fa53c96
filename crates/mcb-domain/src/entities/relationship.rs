use serde::{Deserialize, Serialize};

use crate::constants::{
    REL_CONTAINS_FILE, REL_CONTEXT_OF, REL_DECISION_ON, REL_DEPENDS_ON, REL_IS_TAGGED_WITH,
    REL_PART_OF_REPO,
};

/// The six directed relationship types the Schema Installer creates
///.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipType {
    /// `Repository -> entity`: every scoped entity belongs to its repository.
    PartOfRepo,
    /// `Component -> Component`: self-referential within a scope.
    DependsOn,
    /// `Context -> {Component | Decision | Rule}`.
    ContextOf,
    /// `Decision -> Component`.
    DecisionOn,
    /// `Component -> File`, same scope on both endpoints.
    ContainsFile,
    /// `{scoped entity | Context} -> Tag`; the `Tag` end is global.
    IsTaggedWith,
}

impl RelationshipType {
    /// The wire/storage name used by the Schema Installer and gateways.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PartOfRepo => REL_PART_OF_REPO,
            Self::DependsOn => REL_DEPENDS_ON,
            Self::ContextOf => REL_CONTEXT_OF,
            Self::DecisionOn => REL_DECISION_ON,
            Self::ContainsFile => REL_CONTAINS_FILE,
            Self::IsTaggedWith => REL_IS_TAGGED_WITH,
        }
    }

    /// Whether both endpoints of this relationship must share the same
    /// `(repository, branch)` scope. `IsTaggedWith`
    /// is the one exception — its `Tag` end is always global.
    #[must_use]
    pub fn requires_same_scope(&self) -> bool {
        !matches!(self, Self::IsTaggedWith | Self::PartOfRepo)
    }
}
