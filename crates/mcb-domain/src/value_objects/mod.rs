//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md#value-objects)
//!
//! Immutable value objects: strong-typed identifiers and composite keys.

/// Composite `graph_unique_id` identity scheme.
pub mod graph_identity;
/// Strong-typed entity identifiers.
pub mod ids;

pub use graph_identity::GraphUniqueId;
pub use ids::{
    ComponentId, ContextId, DecisionId, FileId, RepositoryId, RuleId, SessionId, TagId,
};
