//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#entities)
//!
//! Core graph entities. All entities except [`Tag`] and
//! [`Repository`] are scoped to a `(repository, branch)` pair and carry a
//! [`GraphUniqueId`](crate::value_objects::GraphUniqueId) primary key.

mod component;
mod context;
mod decision;
mod file;
mod metadata;
mod relationship;
mod repository;
mod rule;
mod tag;

pub use component::{Component, ComponentStatus};
pub use context::Context;
pub use decision::{Decision, DecisionStatus};
pub use file::File;
pub use metadata::Metadata;
pub use relationship::RelationshipType;
pub use repository::Repository;
pub use rule::{Rule, RuleStatus};
pub use tag::Tag;
