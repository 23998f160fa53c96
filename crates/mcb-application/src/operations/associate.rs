//! Associations: linking already-existing entities with an edge, never
//! failing hard when an endpoint is missing — callers get a
//! structured [`AssociationResult`] back instead of an [`Error`].

use mcb_domain::error::Result;
use mcb_domain::ports::Gateways;
use mcb_domain::value_objects::GraphUniqueId;

use crate::results::AssociationResult;

use super::args::ItemKind;

async fn item_exists(gateways: &Gateways, kind: ItemKind, gid: &str) -> Result<bool> {
    let found = match kind {
        ItemKind::Component => gateways.components.find_by_graph_id(gid).await?.is_some(),
        ItemKind::Decision => gateways.decisions.find_by_graph_id(gid).await?.is_some(),
        ItemKind::Rule => gateways.rules.find_by_graph_id(gid).await?.is_some(),
        ItemKind::File => gateways.files.find_by_graph_id(gid).await?.is_some(),
        ItemKind::Context => gateways.contexts.find_by_graph_id(gid).await?.is_some(),
    };
    Ok(found)
}

/// Link a `File` to a `Component` via `CONTAINS_FILE`. Soft-fails if either
/// endpoint doesn't exist in scope.
pub async fn associate_file_with_component(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    file_id: &str,
    component_id: &str,
) -> Result<AssociationResult> {
    let file_gid = GraphUniqueId::new(repository, branch, file_id);
    let component_gid = GraphUniqueId::new(repository, branch, component_id);

    if gateways
        .files
        .find_by_graph_id(file_gid.as_str())
        .await?
        .is_none()
    {
        return Ok(AssociationResult::missing_endpoint(format!(
            "file '{file_id}' not found in scope"
        )));
    }
    if gateways
        .components
        .find_by_graph_id(component_gid.as_str())
        .await?
        .is_none()
    {
        return Ok(AssociationResult::missing_endpoint(format!(
            "component '{component_id}' not found in scope"
        )));
    }

    gateways
        .files
        .associate_with_component(file_gid.as_str(), component_gid.as_str())
        .await?;

    Ok(AssociationResult::ok(format!(
        "file '{file_id}' linked to component '{component_id}'"
    )))
}

/// Link a `Context` node to a governed item (`Component`, `Decision`, or
/// `Rule`) via `CONTEXT_OF`.
pub async fn associate_context_with_item(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    context_id: &str,
    item_kind: ItemKind,
    item_id: &str,
) -> Result<AssociationResult> {
    let context_gid = GraphUniqueId::new(repository, branch, context_id);
    let item_gid = GraphUniqueId::new(repository, branch, item_id);

    if gateways
        .contexts
        .find_by_graph_id(context_gid.as_str())
        .await?
        .is_none()
    {
        return Ok(AssociationResult::missing_endpoint(format!(
            "context '{context_id}' not found in scope"
        )));
    }
    if !item_exists(gateways, item_kind, item_gid.as_str()).await? {
        return Ok(AssociationResult::missing_endpoint(format!(
            "item '{item_id}' not found in scope"
        )));
    }

    gateways
        .contexts
        .associate(context_gid.as_str(), item_gid.as_str())
        .await?;

    Ok(AssociationResult::ok(format!(
        "context '{context_id}' linked to '{item_id}'"
    )))
}

/// Link a `Decision` to the `Component` it governs via `DECISION_ON`.
pub async fn associate_decision_with_component(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    decision_id: &str,
    component_id: &str,
) -> Result<AssociationResult> {
    let decision_gid = GraphUniqueId::new(repository, branch, decision_id);
    let component_gid = GraphUniqueId::new(repository, branch, component_id);

    if gateways
        .decisions
        .find_by_graph_id(decision_gid.as_str())
        .await?
        .is_none()
    {
        return Ok(AssociationResult::missing_endpoint(format!(
            "decision '{decision_id}' not found in scope"
        )));
    }
    if gateways
        .components
        .find_by_graph_id(component_gid.as_str())
        .await?
        .is_none()
    {
        return Ok(AssociationResult::missing_endpoint(format!(
            "component '{component_id}' not found in scope"
        )));
    }

    gateways
        .decisions
        .associate(decision_gid.as_str(), component_gid.as_str())
        .await?;

    Ok(AssociationResult::ok(format!(
        "decision '{decision_id}' linked to component '{component_id}'"
    )))
}

/// Apply a `Tag` to any scoped item via `IS_TAGGED_WITH`. The `Tag` end is
/// global (invariant: `IsTaggedWith` does not require same-scope endpoints).
pub async fn tag_item(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    item_kind: ItemKind,
    item_id: &str,
    tag_id: &str,
) -> Result<AssociationResult> {
    let item_gid = GraphUniqueId::new(repository, branch, item_id);

    if !item_exists(gateways, item_kind, item_gid.as_str()).await? {
        return Ok(AssociationResult::missing_endpoint(format!(
            "item '{item_id}' not found in scope"
        )));
    }
    if gateways.tags.find_by_id(tag_id).await?.is_none() {
        return Ok(AssociationResult::missing_endpoint(format!(
            "tag '{tag_id}' not found"
        )));
    }

    gateways.tags.tag_item(item_gid.as_str(), tag_id).await?;

    Ok(AssociationResult::ok(format!(
        "'{item_id}' tagged with '{tag_id}'"
    )))
}
