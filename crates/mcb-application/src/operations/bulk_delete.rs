//! Bulk deletes by type, tag, branch, or repository.
//!
//! `dry_run: true` never mutates, only reports the match set. Matching more
//! than [`BULK_DELETE_CONFIRMATION_THRESHOLD`] entities without `force: true`
//! also never mutates — it reports the match set with a warning instead, the
//! same as a forced dry run.

use mcb_domain::entities::Repository;
use mcb_domain::error::Result;
use mcb_domain::ports::Gateways;
use mcb_domain::BULK_DELETE_CONFIRMATION_THRESHOLD;

use crate::results::BulkResult;

use super::args::BulkDeleteType;

fn confirmation_warning(count: usize, force: bool) -> Option<String> {
    if count > BULK_DELETE_CONFIRMATION_THRESHOLD && !force {
        Some(format!(
            "{count} entities matched, exceeding the confirmation threshold of \
             {BULK_DELETE_CONFIRMATION_THRESHOLD}; re-run with force: true to delete"
        ))
    } else {
        None
    }
}

/// Whether this call should actually mutate the graph, given the match
/// count, `dry_run`, and `force`.
fn should_mutate(count: usize, dry_run: bool, force: bool) -> bool {
    !dry_run && (count <= BULK_DELETE_CONFIRMATION_THRESHOLD || force)
}

/// Try each scoped gateway in turn to find the one that owns
/// `graph_unique_id`, then delete through it. Keeps the operations layer
/// engine-agnostic even though the SQLite provider could delete by id alone.
async fn delete_owning_entity(gateways: &Gateways, gid: &str) -> Result<bool> {
    if gateways.metadata.find_by_graph_id(gid).await?.is_some() {
        return gateways.metadata.delete(gid).await;
    }
    if gateways.contexts.find_by_graph_id(gid).await?.is_some() {
        return gateways.contexts.delete(gid).await;
    }
    if gateways.components.find_by_graph_id(gid).await?.is_some() {
        return gateways.components.delete(gid).await;
    }
    if gateways.decisions.find_by_graph_id(gid).await?.is_some() {
        return gateways.decisions.delete(gid).await;
    }
    if gateways.rules.find_by_graph_id(gid).await?.is_some() {
        return gateways.rules.delete(gid).await;
    }
    if gateways.files.find_by_graph_id(gid).await?.is_some() {
        return gateways.files.delete(gid).await;
    }
    Ok(false)
}

/// Every scoped entity's `graph_unique_id` in `(repository, branch)`,
/// across every scoped entity type (`Tag` excluded — it's global).
async fn all_scoped_entities(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    ids.extend(
        gateways
            .metadata
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string()),
    );
    ids.extend(
        gateways
            .contexts
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string()),
    );
    ids.extend(
        gateways
            .components
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string()),
    );
    ids.extend(
        gateways
            .decisions
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string()),
    );
    ids.extend(
        gateways
            .rules
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string()),
    );
    ids.extend(
        gateways
            .files
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string()),
    );
    ids.sort();
    Ok(ids)
}

/// Delete every entity of one type in `(repository, branch)`.
pub async fn bulk_delete_by_type(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    entity_type: BulkDeleteType,
    dry_run: bool,
    force: bool,
) -> Result<BulkResult> {
    let ids: Vec<String> = match entity_type {
        BulkDeleteType::Metadata => gateways
            .metadata
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string())
            .collect(),
        BulkDeleteType::Context => gateways
            .contexts
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string())
            .collect(),
        BulkDeleteType::Component => gateways
            .components
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string())
            .collect(),
        BulkDeleteType::Decision => gateways
            .decisions
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string())
            .collect(),
        BulkDeleteType::Rule => gateways
            .rules
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string())
            .collect(),
        BulkDeleteType::File => gateways
            .files
            .find_by_scope(repository, branch)
            .await?
            .into_iter()
            .map(|e| e.graph_unique_id.to_string())
            .collect(),
    };

    let mut warnings = Vec::new();
    if let Some(warning) = confirmation_warning(ids.len(), force) {
        warnings.push(warning);
    }
    let mutate = should_mutate(ids.len(), dry_run, force);

    if mutate {
        for gid in &ids {
            delete_owning_entity(gateways, gid).await?;
        }
    }

    Ok(BulkResult {
        count: ids.len(),
        entities: ids,
        warnings,
        dry_run: !mutate,
    })
}

/// Delete every entity tagged with `tag_id`, within `(repository, branch)`.
pub async fn bulk_delete_by_tag(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    tag_id: &str,
    dry_run: bool,
    force: bool,
) -> Result<BulkResult> {
    let prefix = format!("{repository}:{branch}:");
    let mut ids: Vec<String> = gateways
        .tags
        .find_tagged_items(tag_id)
        .await?
        .into_iter()
        .filter(|gid| gid.starts_with(&prefix))
        .collect();
    ids.sort();

    let mut warnings = Vec::new();
    if let Some(warning) = confirmation_warning(ids.len(), force) {
        warnings.push(warning);
    }
    let mutate = should_mutate(ids.len(), dry_run, force);

    if mutate {
        for gid in &ids {
            delete_owning_entity(gateways, gid).await?;
        }
    }

    Ok(BulkResult {
        count: ids.len(),
        entities: ids,
        warnings,
        dry_run: !mutate,
    })
}

/// Delete every scoped entity in `(repository, branch)`, then the
/// `Repository` node itself.
pub async fn bulk_delete_by_branch(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    dry_run: bool,
    force: bool,
) -> Result<BulkResult> {
    let mut ids = all_scoped_entities(gateways, repository, branch).await?;
    ids.push(Repository::make_id(repository, branch));
    ids.sort();

    let mut warnings = Vec::new();
    if let Some(warning) = confirmation_warning(ids.len(), force) {
        warnings.push(warning);
    }
    let mutate = should_mutate(ids.len(), dry_run, force);

    if mutate {
        for gid in &ids {
            if gid == &Repository::make_id(repository, branch) {
                gateways.repositories.delete(gid).await?;
            } else {
                delete_owning_entity(gateways, gid).await?;
            }
        }
    }

    Ok(BulkResult {
        count: ids.len(),
        entities: ids,
        warnings,
        dry_run: !mutate,
    })
}

/// Delete every branch of `repository`: every scoped entity across every
/// tracked branch, plus every `Repository` node of that name. `Tag` nodes
/// are never touched — they're global and may be shared with other
/// repositories (see `DESIGN.md`).
pub async fn bulk_delete_by_repository(
    gateways: &Gateways,
    repository: &str,
    dry_run: bool,
    force: bool,
) -> Result<BulkResult> {
    let branches = gateways.repositories.find_branches(repository).await?;

    let mut ids = Vec::new();
    for repo in &branches {
        ids.extend(all_scoped_entities(gateways, repository, &repo.branch).await?);
        ids.push(Repository::make_id(repository, &repo.branch));
    }
    ids.sort();
    ids.dedup();

    let mut warnings = Vec::new();
    if let Some(warning) = confirmation_warning(ids.len(), force) {
        warnings.push(warning);
    }
    let mutate = should_mutate(ids.len(), dry_run, force);

    if mutate {
        for repo in &branches {
            let repo_id = Repository::make_id(repository, &repo.branch);
            for gid in all_scoped_entities(gateways, repository, &repo.branch).await? {
                delete_owning_entity(gateways, &gid).await?;
            }
            gateways.repositories.delete(&repo_id).await?;
        }
    }

    Ok(BulkResult {
        count: ids.len(),
        entities: ids,
        warnings,
        dry_run: !mutate,
    })
}
