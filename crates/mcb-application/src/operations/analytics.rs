//! Long-running graph analytics, run over the
//! `Component`/`DEPENDS_ON` projection within a `(repository, branch)`
//! scope. Every function accepts a [`ProgressChannel`] (use
//! [`NoopProgressChannel`](mcb_domain::ports::NoopProgressChannel) when no
//! listener is attached) and a [`CancellationToken`], checked between
//! iterations so a caller can abort a long run.

use std::collections::{HashMap, HashSet};

use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{Gateways, ProgressChannel, ProgressEvent};
use mcb_domain::{PAGERANK_DAMPING, PAGERANK_EPSILON, PAGERANK_MAX_ITERATIONS};
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use tokio_util::sync::CancellationToken;

use crate::results::AnalyticsResult;

struct Projection {
    graph: DiGraph<String, ()>,
}

async fn load_projection(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
) -> Result<Projection> {
    let mut graph = DiGraph::new();
    let mut index_of: HashMap<String, NodeIndex> = HashMap::new();

    for component in gateways.components.find_by_scope(repository, branch).await? {
        let id = component.graph_unique_id.as_str().to_string();
        let idx = graph.add_node(id.clone());
        index_of.insert(id, idx);
    }

    for (src, dst) in gateways
        .components
        .find_dependency_edges(repository, branch)
        .await?
    {
        let src_idx = *index_of.entry(src.clone()).or_insert_with(|| graph.add_node(src.clone()));
        let dst_idx = *index_of.entry(dst.clone()).or_insert_with(|| graph.add_node(dst.clone()));
        graph.add_edge(src_idx, dst_idx, ());
    }

    Ok(Projection { graph })
}

fn check_cancelled(token: &CancellationToken) -> Result<()> {
    if token.is_cancelled() {
        Err(Error::Cancelled)
    } else {
        Ok(())
    }
}

/// PageRank over the dependency graph. Fixed parameters:
/// damping `0.85`, epsilon `1e-6`, cap `100` iterations.
pub async fn pagerank(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    progress: &dyn ProgressChannel,
    cancellation: &CancellationToken,
) -> Result<AnalyticsResult> {
    let projection = load_projection(gateways, repository, branch).await?;
    let n = projection.graph.node_count();
    if n == 0 {
        return Ok(AnalyticsResult::PageRank {
            scores: Vec::new(),
            iterations: 0,
            converged: true,
        });
    }

    let mut scores = vec![1.0 / n as f64; n];
    let out_degree: Vec<usize> = projection
        .graph
        .node_indices()
        .map(|idx| projection.graph.edges(idx).count())
        .collect();

    let mut iterations = 0;
    let mut converged = false;

    for iteration in 0..PAGERANK_MAX_ITERATIONS {
        check_cancelled(cancellation)?;
        let mut next = vec![(1.0 - PAGERANK_DAMPING) / n as f64; n];

        for idx in projection.graph.node_indices() {
            let degree = out_degree[idx.index()];
            if degree == 0 {
                continue;
            }
            let share = PAGERANK_DAMPING * scores[idx.index()] / degree as f64;
            for edge in projection.graph.edges(idx) {
                next[edge.target().index()] += share;
            }
        }

        let delta: f64 = scores
            .iter()
            .zip(next.iter())
            .map(|(a, b)| (a - b).abs())
            .sum();
        scores = next;
        iterations = iteration + 1;

        progress
            .notify(ProgressEvent::with_percent(
                "iterating",
                format!("pagerank iteration {iterations}"),
                100.0 * iterations as f64 / PAGERANK_MAX_ITERATIONS as f64,
            ))
            .await;

        if delta < PAGERANK_EPSILON {
            converged = true;
            break;
        }
    }

    let mut result: Vec<(String, f64)> = projection
        .graph
        .node_indices()
        .map(|idx| (projection.graph[idx].clone(), scores[idx.index()]))
        .collect();
    result.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal).then_with(|| a.0.cmp(&b.0)));

    progress
        .notify(ProgressEvent {
            status: "done".to_string(),
            message: Some("pagerank complete".to_string()),
            percent: Some(100.0),
            is_final: true,
            data: None,
        })
        .await;

    Ok(AnalyticsResult::PageRank {
        scores: result,
        iterations,
        converged,
    })
}

/// Louvain community detection, treating the projection as undirected.
/// A single-pass greedy implementation: every node starts in its own
/// community, then nodes move to the neighbouring community that most
/// increases modularity until no move helps.
pub async fn louvain_community_detection(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    progress: &dyn ProgressChannel,
    cancellation: &CancellationToken,
) -> Result<AnalyticsResult> {
    let projection = load_projection(gateways, repository, branch).await?;
    let n = projection.graph.node_count();
    if n == 0 {
        return Ok(AnalyticsResult::Communities {
            assignments: Vec::new(),
            modularity: 0.0,
        });
    }

    let mut undirected: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::new();
    let mut edge_count = 0usize;
    for edge in projection.graph.edge_references() {
        undirected.entry(edge.source()).or_default().insert(edge.target());
        undirected.entry(edge.target()).or_default().insert(edge.source());
        edge_count += 1;
    }
    let m = edge_count.max(1) as f64;

    let mut community: HashMap<NodeIndex, usize> = projection
        .graph
        .node_indices()
        .enumerate()
        .map(|(i, idx)| (idx, i))
        .collect();

    let degree = |idx: NodeIndex| undirected.get(&idx).map_or(0, HashSet::len) as f64;

    let mut moved = true;
    let mut round = 0;
    while moved {
        check_cancelled(cancellation)?;
        moved = false;
        round += 1;
        for idx in projection.graph.node_indices() {
            let current = community[&idx];
            let mut best = current;
            let mut best_gain = 0.0f64;

            let neighbour_communities: HashSet<usize> = undirected
                .get(&idx)
                .into_iter()
                .flatten()
                .map(|n| community[n])
                .collect();

            for candidate in neighbour_communities {
                if candidate == current {
                    continue;
                }
                let ties: f64 = undirected
                    .get(&idx)
                    .into_iter()
                    .flatten()
                    .filter(|n| community[n] == candidate)
                    .count() as f64;
                let gain = ties - degree(idx) / (2.0 * m);
                if gain > best_gain {
                    best_gain = gain;
                    best = candidate;
                }
            }

            if best != current {
                community.insert(idx, best);
                moved = true;
            }
        }

        progress
            .notify(ProgressEvent::status(
                "iterating",
                format!("louvain round {round}"),
            ))
            .await;

        if round > n {
            break;
        }
    }

    // Renumber communities to a dense, deterministic `0..k` range.
    let mut renumbered: HashMap<usize, usize> = HashMap::new();
    let mut assignments: Vec<(String, usize)> = projection
        .graph
        .node_indices()
        .map(|idx| {
            let raw = community[&idx];
            let next_id = renumbered.len();
            let id = *renumbered.entry(raw).or_insert(next_id);
            (projection.graph[idx].clone(), id)
        })
        .collect();
    assignments.sort();

    let mut internal_edges: HashMap<usize, f64> = HashMap::new();
    let mut community_degree: HashMap<usize, f64> = HashMap::new();
    for idx in projection.graph.node_indices() {
        let comm = *renumbered.get(&community[&idx]).unwrap_or(&0);
        *community_degree.entry(comm).or_insert(0.0) += degree(idx);
        if let Some(neighbours) = undirected.get(&idx) {
            for neighbour in neighbours {
                if renumbered.get(&community[neighbour]) == Some(&comm) {
                    *internal_edges.entry(comm).or_insert(0.0) += 0.5;
                }
            }
        }
    }
    let modularity: f64 = community_degree
        .keys()
        .map(|comm| {
            let internal = internal_edges.get(comm).copied().unwrap_or(0.0);
            let total = community_degree.get(comm).copied().unwrap_or(0.0);
            internal / m - (total / (2.0 * m)).powi(2)
        })
        .sum();

    Ok(AnalyticsResult::Communities {
        assignments,
        modularity,
    })
}

/// k-core decomposition over the undirected projection: repeatedly strip
/// the lowest-degree node, recording the degree it had at removal.
pub async fn k_core_decomposition(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
    progress: &dyn ProgressChannel,
    cancellation: &CancellationToken,
) -> Result<AnalyticsResult> {
    let projection = load_projection(gateways, repository, branch).await?;

    let mut undirected: HashMap<NodeIndex, HashSet<NodeIndex>> = HashMap::new();
    for edge in projection.graph.edge_references() {
        undirected.entry(edge.source()).or_default().insert(edge.target());
        undirected.entry(edge.target()).or_default().insert(edge.source());
    }

    let mut remaining: HashSet<NodeIndex> = projection.graph.node_indices().collect();
    let mut coreness: HashMap<NodeIndex, usize> = HashMap::new();
    let mut current_core = 0usize;

    while !remaining.is_empty() {
        check_cancelled(cancellation)?;
        let min_degree = remaining
            .iter()
            .map(|idx| {
                undirected
                    .get(idx)
                    .map_or(0, |ns| ns.intersection(&remaining).count())
            })
            .min()
            .unwrap_or(0);
        current_core = current_core.max(min_degree);

        let to_remove: Vec<NodeIndex> = remaining
            .iter()
            .copied()
            .filter(|idx| {
                undirected
                    .get(idx)
                    .map_or(0, |ns| ns.intersection(&remaining).count())
                    == min_degree
            })
            .collect();

        for idx in &to_remove {
            coreness.insert(*idx, current_core);
            remaining.remove(idx);
        }

        progress
            .notify(ProgressEvent::status(
                "iterating",
                format!("k-core stripped {} nodes at core {current_core}", to_remove.len()),
            ))
            .await;
    }

    let mut result: Vec<(String, usize)> = coreness
        .into_iter()
        .map(|(idx, core)| (projection.graph[idx].clone(), core))
        .collect();
    result.sort();

    Ok(AnalyticsResult::KCore { coreness: result })
}

/// Strongly connected components (directed reachability both ways),
/// filtered to components with at least two members.
pub async fn strongly_connected_components(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
) -> Result<AnalyticsResult> {
    let projection = load_projection(gateways, repository, branch).await?;
    let sccs = petgraph::algo::kosaraju_scc(&projection.graph);

    let mut components: Vec<Vec<String>> = sccs
        .into_iter()
        .filter(|scc| scc.len() > 1)
        .map(|scc| {
            let mut members: Vec<String> =
                scc.into_iter().map(|idx| projection.graph[idx].clone()).collect();
            members.sort();
            members
        })
        .collect();
    components.sort();

    Ok(AnalyticsResult::Components { components })
}

/// Weakly connected components (undirected reachability), filtered to
/// components with at least two members.
pub async fn weakly_connected_components(
    gateways: &Gateways,
    repository: &str,
    branch: &str,
) -> Result<AnalyticsResult> {
    let projection = load_projection(gateways, repository, branch).await?;

    let mut visited: HashSet<NodeIndex> = HashSet::new();
    let mut components: Vec<Vec<String>> = Vec::new();

    for start in projection.graph.node_indices() {
        if visited.contains(&start) {
            continue;
        }
        let mut stack = vec![start];
        let mut members = Vec::new();
        visited.insert(start);
        while let Some(idx) = stack.pop() {
            members.push(projection.graph[idx].clone());
            for edge in projection.graph.edges(idx) {
                if visited.insert(edge.target()) {
                    stack.push(edge.target());
                }
            }
            for edge in projection
                .graph
                .edges_directed(idx, petgraph::Direction::Incoming)
            {
                if visited.insert(edge.source()) {
                    stack.push(edge.source());
                }
            }
        }
        if members.len() > 1 {
            members.sort();
            components.push(members);
        }
    }
    components.sort();

    Ok(AnalyticsResult::Components { components })
}
