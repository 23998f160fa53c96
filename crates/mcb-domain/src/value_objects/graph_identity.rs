//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#value-objects)
//!
//! Composite identity for branch-scoped graph entities.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_BRANCH;

/// The composite primary key every branch-scoped entity is stored and looked
/// up under: `"{repository}:{branch}:{id}"`.
///
/// `Tag` is the one entity kind that is *not* scoped this way and never
/// constructs a `GraphUniqueId`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct GraphUniqueId(String);

impl GraphUniqueId {
    /// Compose a `graph_unique_id` from its three parts.
    #[must_use]
    pub fn new(repository: &str, branch: &str, id: &str) -> Self {
        Self(format!("{repository}:{branch}:{id}"))
    }

    /// Compose a `graph_unique_id` using the default branch.
    #[must_use]
    pub fn with_default_branch(repository: &str, id: &str) -> Self {
        Self::new(repository, DEFAULT_BRANCH, id)
    }

    /// Borrow the raw composite string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split the composite id back into its `(repository, branch, id)` parts.
    ///
    /// Returns `None` if the value does not have exactly three `:`-separated
    /// segments (callers should treat this as data corruption, not a normal
    /// control-flow case — every `GraphUniqueId` is constructed via [`Self::new`]).
    #[must_use]
    pub fn parts(&self) -> Option<(&str, &str, &str)> {
        let mut segments = self.0.splitn(3, ':');
        let repository = segments.next()?;
        let branch = segments.next()?;
        let id = segments.next()?;
        Some((repository, branch, id))
    }
}

impl fmt::Display for GraphUniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for GraphUniqueId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_and_splits_parts() {
        let gid = GraphUniqueId::new("acme/widgets", "main", "comp-auth");
        assert_eq!(gid.as_str(), "acme/widgets:main:comp-auth");
        assert_eq!(
            gid.parts(),
            Some(("acme/widgets", "main", "comp-auth"))
        );
    }

    #[test]
    fn default_branch_helper_matches_explicit_branch() {
        let a = GraphUniqueId::with_default_branch("acme/widgets", "comp-auth");
        let b = GraphUniqueId::new("acme/widgets", "main", "comp-auth");
        assert_eq!(a, b);
    }
}
