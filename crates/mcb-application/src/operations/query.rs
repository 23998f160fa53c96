//! Traversals and scoped/date-ranged reads. Nothing here
//! mutates; every function programs purely against [`Gateways`].

use std::collections::{HashMap, HashSet, VecDeque};

use chrono::NaiveDate;
use mcb_domain::entities::{Component, Repository};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::Gateways;
use mcb_domain::value_objects::GraphUniqueId;
use mcb_domain::REL_DEPENDS_ON;

use crate::results::{EntityResult, ListResult};

use super::args::EntityKind;

/// Single-entity lookup by logical id, surfacing the gateways'
/// `findByGraphId`/`findById` through the Tool Dispatcher. `Repository` is
/// keyed by `(name, branch)` and `Tag` is global; every other kind resolves
/// through the scope's `graph_unique_id`.
pub async fn get_entity(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    kind: EntityKind,
    id: &str,
) -> Result<EntityResult> {
    let result = match kind {
        EntityKind::Repository => {
            let rid = Repository::make_id(id, branch);
            gateways.repositories.find_by_id(&rid).await?.map(EntityResult::Repository)
        }
        EntityKind::Tag => gateways.tags.find_by_id(id).await?.map(EntityResult::Tag),
        EntityKind::Metadata => {
            let gid = GraphUniqueId::new(repository, branch, id);
            gateways.metadata.find_by_graph_id(gid.as_str()).await?.map(EntityResult::Metadata)
        }
        EntityKind::Context => {
            let gid = GraphUniqueId::new(repository, branch, id);
            gateways.contexts.find_by_graph_id(gid.as_str()).await?.map(EntityResult::Context)
        }
        EntityKind::Component => {
            let gid = GraphUniqueId::new(repository, branch, id);
            gateways.components.find_by_graph_id(gid.as_str()).await?.map(EntityResult::Component)
        }
        EntityKind::Decision => {
            let gid = GraphUniqueId::new(repository, branch, id);
            gateways.decisions.find_by_graph_id(gid.as_str()).await?.map(EntityResult::Decision)
        }
        EntityKind::Rule => {
            let gid = GraphUniqueId::new(repository, branch, id);
            gateways.rules.find_by_graph_id(gid.as_str()).await?.map(EntityResult::Rule)
        }
        EntityKind::File => {
            let gid = GraphUniqueId::new(repository, branch, id);
            gateways.files.find_by_graph_id(gid.as_str()).await?.map(EntityResult::File)
        }
    };
    Ok(result.unwrap_or(EntityResult::NotFound))
}

/// `get-component`: [`get_entity`] pinned to [`EntityKind::Component`], the
/// literal single-entity read tool branch isolation is exercised through.
pub async fn get_component(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    id: &str,
) -> Result<EntityResult> {
    get_entity(gateways, repository, branch, EntityKind::Component, id).await
}

/// Breadth-first `DEPENDS_ON` successors of `id`, limited to `depth` hops
/// Depth limiting bounds the size of the returned set.
pub async fn get_component_dependencies(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    id: &str,
    depth: usize,
) -> Result<ListResult> {
    let root = GraphUniqueId::new(repository, branch, id);

    if depth == 0 {
        let mut components = Vec::new();
        if let Some(component) = gateways.components.find_by_graph_id(root.as_str()).await? {
            components.push(component);
        }
        return Ok(ListResult::Components(components));
    }

    let edges = gateways
        .components
        .find_dependency_edges(repository, branch)
        .await?;
    let mut forward: HashMap<&str, Vec<&str>> = HashMap::new();
    for (src, dst) in &edges {
        forward.entry(src.as_str()).or_default().push(dst.as_str());
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(root.as_str().to_string());
    let mut frontier = vec![root.as_str().to_string()];
    let mut found: Vec<String> = Vec::new();

    for _ in 0..depth {
        let mut next = Vec::new();
        for node in &frontier {
            if let Some(successors) = forward.get(node.as_str()) {
                let mut sorted: Vec<&&str> = successors.iter().collect();
                sorted.sort();
                for succ in sorted {
                    if visited.insert((*succ).to_string()) {
                        found.push((*succ).to_string());
                        next.push((*succ).to_string());
                    }
                }
            }
        }
        if next.is_empty() {
            break;
        }
        frontier = next;
    }

    found.sort();
    let mut components = Vec::with_capacity(found.len());
    for gid in found {
        if let Some(component) = gateways.components.find_by_graph_id(&gid).await? {
            components.push(component);
        }
    }
    Ok(ListResult::Components(components))
}

/// Direct `DEPENDS_ON` predecessors of `id` (single hop; see `DESIGN.md`
/// for why this doesn't recurse the way dependency lookups do).
pub async fn get_component_dependents(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    id: &str,
) -> Result<ListResult> {
    let gid = GraphUniqueId::new(repository, branch, id);
    let dependents = gateways.components.find_dependents(gid.as_str()).await?;
    Ok(ListResult::Components(dependents))
}

/// Decisions, rules, and context history governing a component
/// (`DECISION_ON` and `CONTEXT_OF` incoming edges).
pub async fn get_governing_items_for_component(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    id: &str,
) -> Result<ListResult> {
    let gid = GraphUniqueId::new(repository, branch, id);
    let decisions = gateways.decisions.find_for_component(gid.as_str()).await?;
    let context_history = gateways.contexts.find_for_item(gid.as_str()).await?;
    // Rules have no direct governance edge in the schema; they
    // apply repository-wide, so the active set in scope is returned instead.
    let rules = gateways.rules.find_active(repository, branch).await?;
    Ok(ListResult::Governance {
        decisions,
        rules,
        context_history,
    })
}

/// `Context` nodes linked to any governed item via `CONTEXT_OF`, newest
/// first.
pub async fn get_item_contextual_history(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    id: &str,
) -> Result<ListResult> {
    let gid = GraphUniqueId::new(repository, branch, id);
    let contexts = gateways.contexts.find_for_item(gid.as_str()).await?;
    Ok(ListResult::Contexts(contexts))
}

/// Breadth-limited traversal from a `Component` root across the requested
/// relationship type names, returning the `graph_unique_id`s reached. Only
/// `DEPENDS_ON` has a bulk scope-wide edge listing at the gateway layer, so
/// that's the only relationship this traverses multi-hop; any other
/// requested relationship name is resolved as a single hop via the matching
/// gateway's direct lookup.
pub async fn get_related_items(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    id: &str,
    relationships: &[String],
    depth: usize,
) -> Result<ListResult> {
    let gid = GraphUniqueId::new(repository, branch, id);

    if depth == 0 {
        return Ok(ListResult::Strings(vec![gid.as_str().to_string()]));
    }

    let mut related: HashSet<String> = HashSet::new();

    for relationship in relationships {
        match relationship.as_str() {
            REL_DEPENDS_ON => {
                if let ListResult::Components(components) =
                    get_component_dependencies(gateways, repository, branch, id, depth).await?
                {
                    related.extend(components.into_iter().map(|c| c.graph_unique_id.to_string()));
                }
            }
            "DECISION_ON" => {
                for decision in gateways.decisions.find_for_component(gid.as_str()).await? {
                    related.insert(decision.graph_unique_id.to_string());
                }
            }
            "CONTEXT_OF" => {
                for context in gateways.contexts.find_for_item(gid.as_str()).await? {
                    related.insert(context.graph_unique_id.to_string());
                }
            }
            "CONTAINS_FILE" => {
                for file in gateways.files.find_for_component(gid.as_str()).await? {
                    related.insert(file.graph_unique_id.to_string());
                }
            }
            "IS_TAGGED_WITH" => {
                for tag in gateways.tags.find_tags_for_item(gid.as_str()).await? {
                    related.insert(tag.id);
                }
            }
            other => {
                return Err(Error::invalid_argument(format!(
                    "unknown relationship type '{other}'"
                )))
            }
        }
    }

    let mut ids: Vec<String> = related.into_iter().collect();
    ids.sort();
    Ok(ListResult::Strings(ids))
}

/// Unweighted shortest path between two components over the `DEPENDS_ON`
/// projection, treated as undirected (see `DESIGN.md`: no generic
/// cross-relationship edge listing exists at the gateway layer, so this is
/// scoped to the one projection that does).
pub async fn shortest_path(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    start_id: &str,
    end_id: &str,
) -> Result<ListResult> {
    let start = GraphUniqueId::new(repository, branch, start_id);
    let end = GraphUniqueId::new(repository, branch, end_id);

    if start == end {
        return Ok(ListResult::Path(vec![start.as_str().to_string()]));
    }

    let edges = gateways
        .components
        .find_dependency_edges(repository, branch)
        .await?;
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    for (src, dst) in edges {
        adjacency.entry(src.clone()).or_default().push(dst.clone());
        adjacency.entry(dst).or_default().push(src);
    }
    for neighbours in adjacency.values_mut() {
        neighbours.sort();
    }

    let mut visited: HashSet<String> = HashSet::new();
    visited.insert(start.as_str().to_string());
    let mut queue: VecDeque<String> = VecDeque::new();
    queue.push_back(start.as_str().to_string());
    let mut predecessor: HashMap<String, String> = HashMap::new();

    while let Some(node) = queue.pop_front() {
        if node == end.as_str() {
            let mut path = vec![node.clone()];
            let mut current = node;
            while let Some(prev) = predecessor.get(&current) {
                path.push(prev.clone());
                current = prev.clone();
            }
            path.reverse();
            return Ok(ListResult::Path(path));
        }
        if let Some(neighbours) = adjacency.get(&node) {
            for neighbour in neighbours {
                if visited.insert(neighbour.clone()) {
                    predecessor.insert(neighbour.clone(), node.clone());
                    queue.push_back(neighbour.clone());
                }
            }
        }
    }

    Ok(ListResult::Path(Vec::new()))
}

/// Decisions in scope whose `date` falls within `[start, end]` inclusive.
pub async fn get_decisions_by_date_range(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    start: NaiveDate,
    end: NaiveDate,
) -> Result<ListResult> {
    let decisions = gateways
        .decisions
        .find_by_date_range(repository, branch, start, end)
        .await?;
    Ok(ListResult::Decisions(decisions))
}

/// All active components in scope — used by analytics as the node universe
/// even when a component has no `DEPENDS_ON` edges at all.
pub async fn active_components(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
) -> Result<Vec<Component>> {
    gateways.components.find_active(repository, branch).await
}
