//! The per-request Service Façade: the one type the Tool
//! Dispatcher talks to. It resolves the `StoreClient` for a session's
//! project root via the injected [`ClientRegistry`], builds a [`Gateways`]
//! bundle over it via the injected [`GatewayFactory`], and forwards to the
//! matching [`crate::operations`] function. No transport, session-table, or
//! wire-format concern lives here.

use std::path::Path;
use std::sync::Arc;

use chrono::NaiveDate;
use mcb_domain::error::Result;
use mcb_domain::ports::{ClientRegistry, GatewayFactory, Gateways, ProgressChannel};
use mcb_domain::Session;
use tokio_util::sync::CancellationToken;

use crate::operations::args::{
    BulkDeleteByBranchArgs, BulkDeleteByRepositoryArgs, BulkDeleteByTagArgs,
    BulkDeleteByTypeArgs, ComponentArgs, ComponentTraversalArgs, ContextArgs, DecisionArgs,
    EntityKind, FileArgs, ItemKind, MetadataArgs, RelatedItemsArgs, RuleArgs, TagArgs,
};
use crate::operations::{analytics, associate, bulk_delete, introspection, query, upsert};
use crate::results::{AnalyticsResult, AssociationResult, BulkResult, EntityResult, ListResult};

/// The Service Façade: a thin, cheaply cloneable coordinator over a
/// [`ClientRegistry`] and [`GatewayFactory`] pair.
#[derive(Clone)]
pub struct ServiceFacade {
    registry: Arc<dyn ClientRegistry>,
    factory: Arc<dyn GatewayFactory>,
}

impl ServiceFacade {
    /// Build a façade over the given registry and gateway factory.
    #[must_use]
    pub fn new(registry: Arc<dyn ClientRegistry>, factory: Arc<dyn GatewayFactory>) -> Self {
        Self { registry, factory }
    }

    /// Resolve (lazily provisioning if cold) the gateway bundle for
    /// `project_root`.
    async fn gateways(&self, project_root: &Path) -> Result<Gateways> {
        let store = self.registry.get_client(project_root).await?;
        Ok(self.factory.gateways(store))
    }

    /// Close every cached client this façade's registry holds open.
    pub async fn shutdown(&self) -> Result<()> {
        self.registry.shutdown().await
    }

    /// `init-memory-bank`: create-or-update the `Repository` node for the
    /// session's bound `(repository, branch)`.
    pub async fn init_repository(&self, session: &Session) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = upsert::repository(&gateways, &session.repository, &session.branch).await?;
        Ok(EntityResult::Repository(repository))
    }

    /// `metadata` upsert.
    pub async fn upsert_metadata(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: MetadataArgs,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        let entity = upsert::metadata(&gateways, repository, branch, args).await?;
        Ok(EntityResult::Metadata(entity))
    }

    /// `context` upsert, optionally linking via `CONTEXT_OF`.
    pub async fn upsert_context(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: ContextArgs,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        let entity = upsert::context(&gateways, repository, branch, args).await?;
        Ok(EntityResult::Context(entity))
    }

    /// `component` upsert.
    pub async fn upsert_component(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: ComponentArgs,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        let entity = upsert::component(&gateways, repository, branch, args).await?;
        Ok(EntityResult::Component(entity))
    }

    /// `decision` upsert, enforcing the lifecycle state machine and
    /// optionally linking via `DECISION_ON`.
    pub async fn upsert_decision(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: DecisionArgs,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        let entity = upsert::decision(&gateways, repository, branch, args).await?;
        Ok(EntityResult::Decision(entity))
    }

    /// `rule` upsert.
    pub async fn upsert_rule(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: RuleArgs,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        let entity = upsert::rule(&gateways, repository, branch, args).await?;
        Ok(EntityResult::Rule(entity))
    }

    /// `file` upsert, optionally linking via `CONTAINS_FILE`.
    pub async fn upsert_file(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: FileArgs,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        let entity = upsert::file(&gateways, repository, branch, args).await?;
        Ok(EntityResult::File(entity))
    }

    /// `tag` upsert. Global, unscoped.
    pub async fn upsert_tag(&self, session: &Session, args: TagArgs) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let entity = upsert::tag(&gateways, args).await?;
        Ok(EntityResult::Tag(entity))
    }

    /// `associate_file_with_component`.
    pub async fn associate_file_with_component(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        file_id: &str,
        component_id: &str,
    ) -> Result<AssociationResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        associate::associate_file_with_component(&gateways, repository, branch, file_id, component_id)
            .await
    }

    /// Link a `Context` to a governed item via `CONTEXT_OF`.
    pub async fn associate_context_with_item(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        context_id: &str,
        item_kind: ItemKind,
        item_id: &str,
    ) -> Result<AssociationResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        associate::associate_context_with_item(
            &gateways, repository, branch, context_id, item_kind, item_id,
        )
        .await
    }

    /// Link a `Decision` to the `Component` it governs via `DECISION_ON`.
    pub async fn associate_decision_with_component(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        decision_id: &str,
        component_id: &str,
    ) -> Result<AssociationResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        associate::associate_decision_with_component(
            &gateways,
            repository,
            branch,
            decision_id,
            component_id,
        )
        .await
    }

    /// `tag_item`.
    pub async fn tag_item(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        item_kind: ItemKind,
        item_id: &str,
        tag_id: &str,
    ) -> Result<AssociationResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        associate::tag_item(&gateways, repository, branch, item_kind, item_id, tag_id).await
    }

    /// `get-entity`: single-entity lookup by logical id.
    pub async fn get_entity(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        kind: EntityKind,
        id: &str,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_entity(&gateways, repository, branch, kind, id).await
    }

    /// `get-component`: single-component lookup by logical id.
    pub async fn get_component(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        id: &str,
    ) -> Result<EntityResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_component(&gateways, repository, branch, id).await
    }

    /// `get_component_dependencies`.
    pub async fn get_component_dependencies(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: ComponentTraversalArgs,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_component_dependencies(&gateways, repository, branch, &args.id, args.depth).await
    }

    /// `get_component_dependents`.
    pub async fn get_component_dependents(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        id: &str,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_component_dependents(&gateways, repository, branch, id).await
    }

    /// `get_governing_items_for_component`.
    pub async fn get_governing_items_for_component(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        id: &str,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_governing_items_for_component(&gateways, repository, branch, id).await
    }

    /// `get_item_contextual_history`.
    pub async fn get_item_contextual_history(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        id: &str,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_item_contextual_history(&gateways, repository, branch, id).await
    }

    /// `get_related_items`.
    pub async fn get_related_items(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: RelatedItemsArgs,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_related_items(
            &gateways,
            repository,
            branch,
            &args.id,
            &args.relationships,
            args.depth,
        )
        .await
    }

    /// `shortest_path`.
    pub async fn shortest_path(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        start_id: &str,
        end_id: &str,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::shortest_path(&gateways, repository, branch, start_id, end_id).await
    }

    /// `get_decisions_by_date_range`.
    pub async fn get_decisions_by_date_range(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        query::get_decisions_by_date_range(&gateways, repository, branch, start, end).await
    }

    /// `pagerank`.
    pub async fn pagerank(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        progress: &dyn ProgressChannel,
        cancellation: &CancellationToken,
    ) -> Result<AnalyticsResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        analytics::pagerank(&gateways, repository, branch, progress, cancellation).await
    }

    /// `louvain_community_detection`.
    pub async fn louvain_community_detection(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        progress: &dyn ProgressChannel,
        cancellation: &CancellationToken,
    ) -> Result<AnalyticsResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        analytics::louvain_community_detection(&gateways, repository, branch, progress, cancellation)
            .await
    }

    /// `k_core_decomposition`.
    pub async fn k_core_decomposition(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        progress: &dyn ProgressChannel,
        cancellation: &CancellationToken,
    ) -> Result<AnalyticsResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        analytics::k_core_decomposition(&gateways, repository, branch, progress, cancellation).await
    }

    /// `strongly_connected_components`.
    pub async fn strongly_connected_components(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
    ) -> Result<AnalyticsResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        analytics::strongly_connected_components(&gateways, repository, branch).await
    }

    /// `weakly_connected_components`.
    pub async fn weakly_connected_components(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
    ) -> Result<AnalyticsResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        analytics::weakly_connected_components(&gateways, repository, branch).await
    }

    /// `labels`.
    pub async fn labels(&self, session: &Session) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        introspection::labels(&gateways).await
    }

    /// `count`.
    pub async fn count(
        &self,
        session: &Session,
        label: &str,
        repository: Option<&str>,
        branch: Option<&str>,
    ) -> Result<i64> {
        let gateways = self.gateways(&session.project_root).await?;
        introspection::count(&gateways, label, repository, branch).await
    }

    /// `properties`.
    pub async fn properties(&self, session: &Session, label: &str) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        introspection::properties(&gateways, label).await
    }

    /// `indexes`.
    pub async fn indexes(&self, session: &Session) -> Result<ListResult> {
        let gateways = self.gateways(&session.project_root).await?;
        introspection::indexes(&gateways).await
    }

    /// `bulkDeleteByType`.
    pub async fn bulk_delete_by_type(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: BulkDeleteByTypeArgs,
    ) -> Result<BulkResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        bulk_delete::bulk_delete_by_type(
            &gateways,
            repository,
            branch,
            args.entity_type,
            args.dry_run,
            args.force,
        )
        .await
    }

    /// `bulkDeleteByTag`.
    pub async fn bulk_delete_by_tag(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: BulkDeleteByTagArgs,
    ) -> Result<BulkResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        bulk_delete::bulk_delete_by_tag(
            &gateways,
            repository,
            branch,
            &args.tag_id,
            args.dry_run,
            args.force,
        )
        .await
    }

    /// `bulkDeleteByBranch`.
    pub async fn bulk_delete_by_branch(
        &self,
        session: &Session,
        repository_override: Option<&str>,
        branch_override: Option<&str>,
        args: BulkDeleteByBranchArgs,
    ) -> Result<BulkResult> {
        let gateways = self.gateways(&session.project_root).await?;
        let repository = session.resolve_repository(repository_override);
        let branch = session.resolve_branch(branch_override);
        bulk_delete::bulk_delete_by_branch(&gateways, repository, branch, args.dry_run, args.force)
            .await
    }

    /// `bulkDeleteByRepository`.
    pub async fn bulk_delete_by_repository(
        &self,
        session: &Session,
        args: BulkDeleteByRepositoryArgs,
    ) -> Result<BulkResult> {
        let gateways = self.gateways(&session.project_root).await?;
        bulk_delete::bulk_delete_by_repository(&gateways, &args.repository, args.dry_run, args.force)
            .await
    }
}
