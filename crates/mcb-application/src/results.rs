//! Typed response envelopes (design note: "a small sum type per response
//! category avoids a single untyped envelope"). The Tool Dispatcher
//! serialises whichever variant an operation returns into the transport's
//! `structuredContent` field.

use serde::{Deserialize, Serialize};

use mcb_domain::entities::{Component, Context, Decision, File, Metadata, Repository, Rule, Tag};

/// The post-image of a single-entity upsert, lookup, or delete.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntityResult {
    /// A `Repository` node.
    Repository(Repository),
    /// A `Metadata` node.
    Metadata(Metadata),
    /// A `Context` node.
    Context(Context),
    /// A `Component` node.
    Component(Component),
    /// A `Decision` node.
    Decision(Decision),
    /// A `Rule` node.
    Rule(Rule),
    /// A `File` node.
    File(File),
    /// A `Tag` node.
    Tag(Tag),
    /// A lookup or delete that found nothing.
    NotFound,
    /// A delete that removed a node.
    Deleted {
        /// The `graph_unique_id` or `id` that was deleted.
        id: String,
    },
}

/// A deterministic, ordered list of entities or traversal results.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ListResult {
    /// `Component` nodes, e.g. from a dependency traversal or scope scan.
    Components(Vec<Component>),
    /// `Decision` nodes, e.g. from a date-range query.
    Decisions(Vec<Decision>),
    /// `Rule` nodes.
    Rules(Vec<Rule>),
    /// `Context` nodes, newest first.
    Contexts(Vec<Context>),
    /// `File` nodes.
    Files(Vec<File>),
    /// Governing items for a component: decisions, rules, and context history.
    Governance {
        /// Decisions governing the component.
        decisions: Vec<Decision>,
        /// Rules governing the component.
        rules: Vec<Rule>,
        /// Context history for the component.
        context_history: Vec<Context>,
    },
    /// An ordered node path, as produced by `shortest_path`.
    Path(Vec<String>),
    /// Plain strings — labels, graph_unique_ids, catalog entries.
    Strings(Vec<String>),
}

/// The structured `{success, message}` result of an association call
///: never an error when endpoints are simply missing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssociationResult {
    /// Whether the edge is present after the call.
    pub success: bool,
    /// Human-readable explanation, especially for `success: false`.
    pub message: String,
}

impl AssociationResult {
    /// Build a successful association result.
    #[must_use]
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }

    /// Build a "soft failure" association result — not an `Error`.
    #[must_use]
    pub fn missing_endpoint(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

/// Result of a bulk-delete operation. `dry_run: true` reports
/// what would be deleted without mutating anything.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkResult {
    /// Number of entities matched.
    pub count: usize,
    /// `graph_unique_id`s (or `Tag` ids) matched by the scope.
    pub entities: Vec<String>,
    /// Non-fatal notices, e.g. "confirmation required" when over threshold.
    pub warnings: Vec<String>,
    /// Whether this call actually mutated the graph.
    pub dry_run: bool,
}

/// The result of a long-running analytics operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AnalyticsResult {
    /// PageRank scores, keyed by `graph_unique_id`, descending by score.
    PageRank {
        /// `(graph_unique_id, score)` pairs, sorted by descending score then
        /// ascending id.
        scores: Vec<(String, f64)>,
        /// Number of power-iteration rounds actually run.
        iterations: usize,
        /// Whether the run converged before the iteration cap.
        converged: bool,
    },
    /// Louvain community assignments plus the resulting modularity score.
    Communities {
        /// `graph_unique_id -> community index`.
        assignments: Vec<(String, usize)>,
        /// Modularity of the returned partition.
        modularity: f64,
    },
    /// k-core decomposition: each node's coreness number.
    KCore {
        /// `(graph_unique_id, coreness)` pairs.
        coreness: Vec<(String, usize)>,
    },
    /// Connected components (strong or weak) with at least two members.
    Components {
        /// Each inner vector is one component's member ids, sorted.
        components: Vec<Vec<String>>,
    },
}
