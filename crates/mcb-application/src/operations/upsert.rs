//! Entity upserts (create-or-update, `MERGE` semantics). Every
//! function validates the logical id's prefix and the `(repository, branch)`
//! scope before touching a gateway, then preserves `created_at` the way the
//! gateway's own `upsert` does (see `mcb-providers`'s per-gateway pattern).
//! Every scoped entity also gets a `PART_OF_REPO` edge materialised from its
//! `Repository` node, creating that node first if this is the scope's first
//! write.

use chrono::Utc;
use mcb_domain::entities::{
    Component, ComponentStatus, Context, Decision, DecisionStatus, File, Metadata, Repository,
    Rule, RuleStatus, Tag,
};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::Gateways;
use mcb_domain::value_objects::GraphUniqueId;

use super::args::{
    ComponentArgs, ContextArgs, DecisionArgs, FileArgs, MetadataArgs, RuleArgs, TagArgs,
};
use super::validate;

/// Create-or-update a `Repository` node for `(name, branch)`.
pub async fn repository(gateways: &Gateways, name: &str, branch: &str) -> Result<Repository> {
    validate::scope(name, branch)?;
    gateways.repositories.upsert(name, branch).await
}

/// Create-or-update a `Metadata` node.
pub async fn metadata(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    args: MetadataArgs,
) -> Result<Metadata> {
    validate::scope(repository, branch)?;
    let now = Utc::now();
    let existing = gateways
        .metadata
        .find_by_graph_id(GraphUniqueId::new(repository, branch, &args.id).as_str())
        .await?;
    let entity = Metadata {
        graph_unique_id: GraphUniqueId::new(repository, branch, &args.id),
        id: args.id,
        repository: repository.to_string(),
        branch: branch.to_string(),
        name: args.name,
        content: args.content,
        created_at: existing.map(|m| m.created_at).unwrap_or(now),
        updated_at: now,
    };
    let saved = gateways.metadata.upsert(entity).await?;
    gateways.repositories.link_entity(repository, branch, saved.graph_unique_id.as_str()).await?;
    Ok(saved)
}

/// Create-or-update a `Context` node, optionally linking it to an item via
/// `CONTEXT_OF`.
pub async fn context(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    args: ContextArgs,
) -> Result<Context> {
    validate::scope(repository, branch)?;
    validate::context_id(&args.id)?;
    let now = Utc::now();
    let gid = GraphUniqueId::new(repository, branch, &args.id);
    let existing = gateways.contexts.find_by_graph_id(gid.as_str()).await?;
    let entity = Context {
        graph_unique_id: gid.clone(),
        id: args.id,
        repository: repository.to_string(),
        branch: branch.to_string(),
        agent: args.agent,
        summary: args.summary,
        observation: args.observation,
        date: args.date.unwrap_or_else(|| now.date_naive()),
        issue: args.issue,
        created_at: existing.map(|c| c.created_at).unwrap_or(now),
        updated_at: now,
    };
    let saved = gateways.contexts.upsert(entity).await?;
    gateways.repositories.link_entity(repository, branch, gid.as_str()).await?;

    if let Some(link) = args.link {
        let item_gid = GraphUniqueId::new(repository, branch, &link.id);
        gateways
            .contexts
            .associate(gid.as_str(), item_gid.as_str())
            .await?;
    }

    Ok(saved)
}

/// Create-or-update a `Component` node. `depends_on` is re-derived into
/// `DEPENDS_ON` edges entirely by the gateway's own `upsert` (invariant 5) —
/// this function only validates and preserves `created_at`.
pub async fn component(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    args: ComponentArgs,
) -> Result<Component> {
    validate::scope(repository, branch)?;
    validate::component_id(&args.id)?;
    let status = args
        .status
        .as_deref()
        .map(str::parse::<ComponentStatus>)
        .transpose()
        .map_err(Error::invalid_argument)?
        .unwrap_or(ComponentStatus::Active);
    let now = Utc::now();
    let gid = GraphUniqueId::new(repository, branch, &args.id);
    let existing = gateways.components.find_by_graph_id(gid.as_str()).await?;
    let entity = Component {
        graph_unique_id: gid,
        id: args.id,
        repository: repository.to_string(),
        branch: branch.to_string(),
        name: args.name,
        kind: args.kind,
        status,
        depends_on: args.depends_on,
        created_at: existing.map(|c| c.created_at).unwrap_or(now),
        updated_at: now,
    };
    let saved = gateways.components.upsert(entity).await?;
    gateways.repositories.link_entity(repository, branch, saved.graph_unique_id.as_str()).await?;
    Ok(saved)
}

/// Create-or-update a `Decision` node, enforcing the
/// `proposed -> approved -> {implemented | failed}` state machine
/// and optionally linking it to a component via
/// `DECISION_ON`.
pub async fn decision(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    args: DecisionArgs,
) -> Result<Decision> {
    validate::scope(repository, branch)?;
    validate::decision_id(&args.id)?;
    let now = Utc::now();
    let gid = GraphUniqueId::new(repository, branch, &args.id);
    let existing = gateways.decisions.find_by_graph_id(gid.as_str()).await?;

    let next_status = args
        .status
        .as_deref()
        .map(str::parse::<DecisionStatus>)
        .transpose()
        .map_err(Error::invalid_argument)?
        .unwrap_or(DecisionStatus::Proposed);

    if let Some(current) = &existing {
        if current.status != next_status && !current.status.can_transition_to(next_status) {
            return Err(Error::conflict(format!(
                "decision '{}' cannot transition from {} to {}",
                args.id,
                current.status.as_str(),
                next_status.as_str()
            )));
        }
    }

    let entity = Decision {
        graph_unique_id: gid.clone(),
        id: args.id,
        repository: repository.to_string(),
        branch: branch.to_string(),
        name: args.name,
        date: args.date.unwrap_or_else(|| now.date_naive()),
        context: args.context,
        status: next_status,
        created_at: existing.map(|d| d.created_at).unwrap_or(now),
        updated_at: now,
    };
    let saved = gateways.decisions.upsert(entity).await?;
    gateways.repositories.link_entity(repository, branch, gid.as_str()).await?;

    if let Some(component_id) = args.component_id {
        let component_gid = GraphUniqueId::new(repository, branch, &component_id);
        gateways
            .decisions
            .associate(gid.as_str(), component_gid.as_str())
            .await?;
    }

    Ok(saved)
}

/// Create-or-update a `Rule` node.
pub async fn rule(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    args: RuleArgs,
) -> Result<Rule> {
    validate::scope(repository, branch)?;
    validate::rule_id(&args.id)?;
    let status = args
        .status
        .as_deref()
        .map(str::parse::<RuleStatus>)
        .transpose()
        .map_err(Error::invalid_argument)?
        .unwrap_or(RuleStatus::Active);
    let now = Utc::now();
    let gid = GraphUniqueId::new(repository, branch, &args.id);
    let existing = gateways.rules.find_by_graph_id(gid.as_str()).await?;
    let entity = Rule {
        graph_unique_id: gid,
        id: args.id,
        repository: repository.to_string(),
        branch: branch.to_string(),
        name: args.name,
        created: args.created.unwrap_or_else(|| now.date_naive()),
        content: args.content,
        triggers: args.triggers,
        status,
        created_at: existing.map(|r| r.created_at).unwrap_or(now),
        updated_at: now,
    };
    let saved = gateways.rules.upsert(entity).await?;
    gateways.repositories.link_entity(repository, branch, saved.graph_unique_id.as_str()).await?;
    Ok(saved)
}

/// Create-or-update a `File` node, optionally linking it to a component via
/// `CONTAINS_FILE`.
pub async fn file(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    args: FileArgs,
) -> Result<File> {
    validate::scope(repository, branch)?;
    validate::file_id(&args.id)?;
    let now = Utc::now();
    let gid = GraphUniqueId::new(repository, branch, &args.id);
    let existing = gateways.files.find_by_graph_id(gid.as_str()).await?;
    let entity = File {
        graph_unique_id: gid.clone(),
        id: args.id,
        repository: repository.to_string(),
        branch: branch.to_string(),
        name: args.name,
        path: args.path,
        language: args.language,
        metrics: args.metrics,
        content_hash: args.content_hash,
        mime_type: args.mime_type,
        size_bytes: args.size_bytes,
        created_at: existing.map(|f| f.created_at).unwrap_or(now),
        updated_at: now,
    };
    let saved = gateways.files.upsert(entity).await?;
    gateways.repositories.link_entity(repository, branch, gid.as_str()).await?;

    if let Some(component_id) = args.component_id {
        let component_gid = GraphUniqueId::new(repository, branch, &component_id);
        gateways
            .files
            .associate_with_component(gid.as_str(), component_gid.as_str())
            .await?;
    }

    Ok(saved)
}

/// Create-or-update a `Tag` node. `Tag` is global and has no `created_at`
/// advancement beyond first write (it has no `updated_at` field at all).
pub async fn tag(gateways: &Gateways, args: TagArgs) -> Result<Tag> {
    validate::tag_id(&args.id)?;
    let existing = gateways.tags.find_by_id(&args.id).await?;
    let entity = Tag {
        id: args.id,
        name: args.name,
        color: args.color,
        description: args.description,
        created_at: existing.map(|t| t.created_at).unwrap_or_else(Utc::now),
    };
    gateways.tags.upsert(entity).await
}
