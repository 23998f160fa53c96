//! Repository Gateways: per-entity-type accessors that
//! translate domain objects to/from graph records. Each gateway holds a
//! non-owning reference to a [`StoreClient`](super::StoreClient); gateways
//! never compose operations across entity types — that happens one layer up,
//! in the Operations Layer.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::entities::{Component, Context, Decision, File, Metadata, Repository, Rule, Tag};
use crate::error::Result;

use super::store_client::StoreClient;

/// CRUD and lookup for `Repository` nodes, keyed by `"{name}:{branch}"`.
#[async_trait]
pub trait RepositoryGateway: Send + Sync {
    /// Look up a repository by its `"{name}:{branch}"` id.
    async fn find_by_id(&self, id: &str) -> Result<Option<Repository>>;
    /// Create-or-update a repository record.
    async fn upsert(&self, name: &str, branch: &str) -> Result<Repository>;
    /// List every branch tracked for a logical repository name.
    async fn find_branches(&self, name: &str) -> Result<Vec<Repository>>;
    /// Delete a repository and detach-delete its incident edges.
    async fn delete(&self, id: &str) -> Result<bool>;
    /// Ensure the `Repository` node for `(name, branch)` exists, then MERGE
    /// a `PART_OF_REPO` edge from it to `entity_gid`. Idempotent: calling
    /// again does not duplicate the edge.
    async fn link_entity(&self, name: &str, branch: &str, entity_gid: &str) -> Result<()>;
}

/// CRUD and lookup for `Metadata` nodes.
#[async_trait]
pub trait MetadataGateway: Send + Sync {
    /// Look up by `graph_unique_id`.
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Metadata>>;
    /// Create-or-update; returns the post-image.
    async fn upsert(&self, entity: Metadata) -> Result<Metadata>;
    /// Delete by `graph_unique_id`.
    async fn delete(&self, gid: &str) -> Result<bool>;
    /// All metadata records in a `(repository, branch)` scope.
    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Metadata>>;
}

/// CRUD and lookup for `Context` nodes.
#[async_trait]
pub trait ContextGateway: Send + Sync {
    /// Look up by `graph_unique_id`.
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Context>>;
    /// Create-or-update; returns the post-image.
    async fn upsert(&self, entity: Context) -> Result<Context>;
    /// Delete by `graph_unique_id`.
    async fn delete(&self, gid: &str) -> Result<bool>;
    /// `Context` nodes linked to `item_gid` via `CONTEXT_OF`, newest first.
    async fn find_for_item(&self, item_gid: &str) -> Result<Vec<Context>>;
    /// MERGE a `CONTEXT_OF` edge from `context_gid` to `item_gid`. Idempotent:
    /// calling again does not duplicate the edge.
    async fn associate(&self, context_gid: &str, item_gid: &str) -> Result<()>;
    /// `Context` nodes in `(repository, branch)` whose `date` falls within
    /// `[start, end]` inclusive.
    async fn find_by_date_range(
        &self,
        repository: &str,
        branch: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Context>>;
    /// All context nodes in a `(repository, branch)` scope.
    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Context>>;
}

/// CRUD and lookup for `Component` nodes.
#[async_trait]
pub trait ComponentGateway: Send + Sync {
    /// Look up by `graph_unique_id`.
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Component>>;
    /// Create-or-update; returns the post-image. Materialises `DEPENDS_ON`
    /// edges only for entries of `depends_on` that already resolve to an
    /// existing `Component` in the same scope (invariant 5).
    async fn upsert(&self, entity: Component) -> Result<Component>;
    /// Delete by `graph_unique_id`.
    async fn delete(&self, gid: &str) -> Result<bool>;
    /// All components in a `(repository, branch)` scope.
    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Component>>;
    /// Components with `status = active` in a `(repository, branch)` scope.
    async fn find_active(&self, repository: &str, branch: &str) -> Result<Vec<Component>>;
    /// Direct `DEPENDS_ON` successors of `gid`.
    async fn find_dependencies(&self, gid: &str) -> Result<Vec<Component>>;
    /// Direct `DEPENDS_ON` predecessors of `gid`.
    async fn find_dependents(&self, gid: &str) -> Result<Vec<Component>>;
    /// Every `(src, dst)` `DEPENDS_ON` edge in a `(repository, branch)` scope,
    /// by `graph_unique_id` — the projection PageRank and the component
    /// graph algorithms run over.
    async fn find_dependency_edges(
        &self,
        repository: &str,
        branch: &str,
    ) -> Result<Vec<(String, String)>>;
}

/// CRUD and lookup for `Decision` nodes.
#[async_trait]
pub trait DecisionGateway: Send + Sync {
    /// Look up by `graph_unique_id`.
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Decision>>;
    /// Create-or-update; returns the post-image.
    async fn upsert(&self, entity: Decision) -> Result<Decision>;
    /// Delete by `graph_unique_id`.
    async fn delete(&self, gid: &str) -> Result<bool>;
    /// Decisions linked to `component_gid` via `DECISION_ON`.
    async fn find_for_component(&self, component_gid: &str) -> Result<Vec<Decision>>;
    /// MERGE a `DECISION_ON` edge from `decision_gid` to `component_gid`.
    /// Idempotent: calling again does not duplicate the edge.
    async fn associate(&self, decision_gid: &str, component_gid: &str) -> Result<()>;
    /// Decisions in `(repository, branch)` whose `date` falls within
    /// `[start, end]` inclusive.
    async fn find_by_date_range(
        &self,
        repository: &str,
        branch: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Decision>>;
    /// All decisions in a `(repository, branch)` scope.
    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Decision>>;
}

/// CRUD and lookup for `Rule` nodes.
#[async_trait]
pub trait RuleGateway: Send + Sync {
    /// Look up by `graph_unique_id`.
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Rule>>;
    /// Create-or-update; returns the post-image.
    async fn upsert(&self, entity: Rule) -> Result<Rule>;
    /// Delete by `graph_unique_id`.
    async fn delete(&self, gid: &str) -> Result<bool>;
    /// Rules with `status = active` in a `(repository, branch)` scope.
    async fn find_active(&self, repository: &str, branch: &str) -> Result<Vec<Rule>>;
    /// All rules in a `(repository, branch)` scope.
    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Rule>>;
}

/// CRUD and lookup for `File` nodes.
#[async_trait]
pub trait FileGateway: Send + Sync {
    /// Look up by `graph_unique_id`.
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<File>>;
    /// Create-or-update; returns the post-image.
    async fn upsert(&self, entity: File) -> Result<File>;
    /// Delete by `graph_unique_id`.
    async fn delete(&self, gid: &str) -> Result<bool>;
    /// Files linked to `component_gid` via `CONTAINS_FILE`.
    async fn find_for_component(&self, component_gid: &str) -> Result<Vec<File>>;
    /// All files in a `(repository, branch)` scope.
    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<File>>;
    /// MERGE a `CONTAINS_FILE` edge from `component_gid` to `file_gid`.
    /// Idempotent: calling again does not duplicate the edge.
    async fn associate_with_component(&self, file_gid: &str, component_gid: &str) -> Result<()>;
}

/// CRUD and lookup for `Tag` nodes (global, unscoped).
#[async_trait]
pub trait TagGateway: Send + Sync {
    /// Look up by `id`.
    async fn find_by_id(&self, id: &str) -> Result<Option<Tag>>;
    /// Create-or-update; returns the post-image.
    async fn upsert(&self, entity: Tag) -> Result<Tag>;
    /// Delete globally by `id`.
    async fn delete(&self, id: &str) -> Result<bool>;
    /// Every `graph_unique_id` tagged with `tag_id`.
    async fn find_tagged_items(&self, tag_id: &str) -> Result<Vec<String>>;
    /// Every `Tag` applied to `item_gid` via `IS_TAGGED_WITH`.
    async fn find_tags_for_item(&self, item_gid: &str) -> Result<Vec<Tag>>;
    /// MERGE an `IS_TAGGED_WITH` edge from `item_gid` to `tag_id`. Idempotent:
    /// calling again does not duplicate the edge (testable property 6).
    async fn tag_item(&self, item_gid: &str, tag_id: &str) -> Result<()>;
}

/// Pure reads against the engine's catalog.
/// Kept separate from the per-entity gateways since these describe the
/// schema itself, not any one entity type.
#[async_trait]
pub trait IntrospectionGateway: Send + Sync {
    /// Node labels the Schema Installer has created.
    async fn labels(&self) -> Result<Vec<String>>;
    /// Count of nodes carrying `label`, optionally scoped to
    /// `(repository, branch)`.
    async fn count(
        &self,
        label: &str,
        repository: Option<&str>,
        branch: Option<&str>,
    ) -> Result<i64>;
    /// Declared property names for `label`.
    async fn properties(&self, label: &str) -> Result<Vec<String>>;
    /// Installed index names.
    async fn indexes(&self) -> Result<Vec<String>>;
}

/// Every gateway an operation might need, bundled per request by the
/// Service Façade. Each field is a non-owning, cheaply
/// cloneable handle onto the same `StoreClient`.
#[derive(Clone)]
pub struct Gateways {
    /// Repository gateway handle.
    pub repositories: Arc<dyn RepositoryGateway>,
    /// Metadata gateway handle.
    pub metadata: Arc<dyn MetadataGateway>,
    /// Context gateway handle.
    pub contexts: Arc<dyn ContextGateway>,
    /// Component gateway handle.
    pub components: Arc<dyn ComponentGateway>,
    /// Decision gateway handle.
    pub decisions: Arc<dyn DecisionGateway>,
    /// Rule gateway handle.
    pub rules: Arc<dyn RuleGateway>,
    /// File gateway handle.
    pub files: Arc<dyn FileGateway>,
    /// Tag gateway handle.
    pub tags: Arc<dyn TagGateway>,
    /// Engine-catalog introspection handle.
    pub introspection: Arc<dyn IntrospectionGateway>,
}

/// Constructs a [`Gateways`] bundle bound to a given `StoreClient`. The
/// concrete implementation lives in `mcb-providers`; the Service Façade is
/// injected with one at wiring time so `mcb-application` never depends on
/// `mcb-providers` directly, avoiding a cyclic crate dependency.
pub trait GatewayFactory: Send + Sync {
    /// Build a [`Gateways`] bundle over `store`.
    fn gateways(&self, store: Arc<dyn StoreClient>) -> Gateways;
}
