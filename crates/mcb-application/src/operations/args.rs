//! Argument structs for every tool, deserialised directly
//! from a request's `{tool, arguments}` JSON payload. `repository`/`branch`
//! are deliberately omitted here — the Tool Dispatcher resolves those from
//! the bound session plus any per-call override before an operation ever
//! sees them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Arguments for the `metadata` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct MetadataArgs {
    /// Logical id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form JSON payload.
    pub content: Value,
}

/// Arguments for the `context` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ContextArgs {
    /// Logical id (must carry the `ctx-` prefix).
    pub id: String,
    /// Recording agent identifier.
    pub agent: String,
    /// Short summary.
    pub summary: String,
    /// Full observation text.
    #[serde(default)]
    pub observation: String,
    /// Calendar date recorded; defaults to today if omitted.
    pub date: Option<NaiveDate>,
    /// Optional linked issue reference.
    pub issue: Option<String>,
    /// Optional item to link via `CONTEXT_OF`, e.g. `("component", "comp-auth")`.
    pub link: Option<ItemRef>,
}

/// A reference to a governed item, used to resolve `CONTEXT_OF`/`DECISION_ON`
/// targets without requiring callers to know `graph_unique_id` composition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    /// A `Component` node.
    Component,
    /// A `Decision` node.
    Decision,
    /// A `Rule` node.
    Rule,
    /// A `File` node.
    File,
    /// A `Context` node.
    Context,
}

/// `(kind, logical_id)` pair identifying a scoped entity for linking.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ItemRef {
    /// Which entity type `id` refers to.
    pub kind: ItemKind,
    /// The entity's logical id (not its `graph_unique_id`).
    pub id: String,
}

/// Arguments for the `component` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ComponentArgs {
    /// Logical id (must carry the `comp-` prefix).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Free-form component kind.
    pub kind: Option<String>,
    /// Lifecycle status; defaults to `active`.
    pub status: Option<String>,
    /// Logical ids of components this one depends on.
    #[serde(default)]
    pub depends_on: Vec<String>,
}

/// Arguments for the `decision` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DecisionArgs {
    /// Logical id (must carry the `dec-` prefix).
    pub id: String,
    /// Short title.
    pub name: String,
    /// Calendar date; defaults to today if omitted.
    pub date: Option<NaiveDate>,
    /// Rationale / context behind the decision.
    #[serde(default)]
    pub context: String,
    /// Lifecycle status; defaults to `proposed` on first creation.
    pub status: Option<String>,
    /// Optional component this decision governs, linked via `DECISION_ON`.
    pub component_id: Option<String>,
}

/// Arguments for the `rule` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RuleArgs {
    /// Logical id (must carry the `rule-` prefix).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Calendar date the rule was created; defaults to today if omitted.
    pub created: Option<NaiveDate>,
    /// Rule body text.
    pub content: String,
    /// Retrieval-filtering keywords/events.
    #[serde(default)]
    pub triggers: Vec<String>,
    /// Lifecycle status; defaults to `active`.
    pub status: Option<String>,
}

/// Arguments for the `file` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct FileArgs {
    /// Logical id (must carry the `file-` prefix).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    /// Detected/declared language.
    pub language: Option<String>,
    /// Free-form JSON metrics payload.
    #[serde(default)]
    pub metrics: Value,
    /// Content hash for change detection.
    pub content_hash: Option<String>,
    /// MIME type.
    pub mime_type: Option<String>,
    /// Size in bytes.
    pub size_bytes: Option<u64>,
    /// Optional component to link via `CONTAINS_FILE`.
    pub component_id: Option<String>,
}

/// Arguments for the `tag` upsert tool.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TagArgs {
    /// Global id (must carry the `tag-` prefix).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Optional display color.
    pub color: Option<String>,
    /// Optional description.
    pub description: Option<String>,
}

/// Arguments for `associate_file_with_component`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AssociateFileArgs {
    /// Logical `File` id.
    pub file_id: String,
    /// Logical `Component` id.
    pub component_id: String,
}

/// Arguments for `associate_context_with_item`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AssociateContextArgs {
    /// Logical `Context` id.
    pub context_id: String,
    /// Which kind of entity `item_id` refers to.
    pub item_kind: ItemKind,
    /// The governed item's logical id.
    pub item_id: String,
}

/// Arguments for `associate_decision_with_component`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AssociateDecisionArgs {
    /// Logical `Decision` id.
    pub decision_id: String,
    /// Logical `Component` id it governs.
    pub component_id: String,
}

/// Arguments for `tag_item`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct TagItemArgs {
    /// Which kind of entity `item_id` refers to.
    pub item_kind: ItemKind,
    /// The target entity's logical id.
    pub item_id: String,
    /// The `Tag`'s global id.
    pub tag_id: String,
}

/// Arguments for `get_component_dependencies`/`get_component_dependents`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ComponentTraversalArgs {
    /// Root component logical id.
    pub id: String,
    /// BFS depth limit (dependencies only; dependents are always depth 1).
    #[serde(default = "default_depth")]
    pub depth: usize,
}

fn default_depth() -> usize {
    1
}

/// Arguments for `get_governing_items_for_component`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ComponentIdArgs {
    /// Component logical id.
    pub id: String,
}

/// Which entity kind a `get-entity` lookup targets. Unlike [`ItemKind`],
/// this covers every gateway `findByGraphId`/`findById` exposes, including
/// the two that never participate in `CONTEXT_OF`/`DECISION_ON` linking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// A `Repository` node, keyed by `(name, branch)` rather than logical id.
    Repository,
    /// A `Metadata` node.
    Metadata,
    /// A `Context` node.
    Context,
    /// A `Component` node.
    Component,
    /// A `Decision` node.
    Decision,
    /// A `Rule` node.
    Rule,
    /// A `File` node.
    File,
    /// A `Tag` node (global, unscoped).
    Tag,
}

/// Arguments for `get-entity`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct GetEntityArgs {
    /// Which entity type `id` refers to.
    pub kind: EntityKind,
    /// The entity's logical id (its `name` for `Repository`, its global id
    /// for `Tag`).
    pub id: String,
}

/// Arguments for `get_item_contextual_history`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ItemContextArgs {
    /// Item kind.
    pub kind: ItemKind,
    /// Item logical id.
    pub id: String,
}

/// Arguments for `get_related_items`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct RelatedItemsArgs {
    /// Root item logical id (must be a `Component`; see DESIGN.md).
    pub id: String,
    /// Relationship type names to traverse, e.g. `"DEPENDS_ON"`.
    pub relationships: Vec<String>,
    /// Breadth limit.
    #[serde(default = "default_depth")]
    pub depth: usize,
}

/// Arguments for `shortest_path`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct ShortestPathArgs {
    /// Start node's logical id.
    pub start_id: String,
    /// End node's logical id.
    pub end_id: String,
}

/// Arguments for `get_decisions_by_date_range`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct DateRangeArgs {
    /// Inclusive start date.
    pub start: NaiveDate,
    /// Inclusive end date.
    pub end: NaiveDate,
}

/// Arguments for `pagerank`/`louvain_community_detection`/`k_core_decomposition`/
/// `strongly_connected_components`/`weakly_connected_components`. All run over
/// the `Component`/`DEPENDS_ON` projection within the request's scope, so
/// they take no further arguments beyond scope.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, schemars::JsonSchema)]
pub struct AnalyticsArgs;

/// Arguments for `count`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct CountArgs {
    /// Node label to count.
    pub label: String,
    /// Narrow to the request's `(repository, branch)` scope.
    #[serde(default)]
    pub scoped: bool,
}

/// Arguments for `properties`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct PropertiesArgs {
    /// Node label whose declared properties to list.
    pub label: String,
}

/// Which entity kind a bulk delete by type targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, schemars::JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BulkDeleteType {
    /// `Metadata` nodes.
    Metadata,
    /// `Context` nodes.
    Context,
    /// `Component` nodes.
    Component,
    /// `Decision` nodes.
    Decision,
    /// `Rule` nodes.
    Rule,
    /// `File` nodes.
    File,
}

/// Arguments for `bulkDeleteByType`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BulkDeleteByTypeArgs {
    /// Entity type to match.
    #[serde(rename = "type")]
    pub entity_type: BulkDeleteType,
    /// Report the match set without mutating.
    #[serde(default)]
    pub dry_run: bool,
    /// Bypass the confirmation threshold.
    #[serde(default)]
    pub force: bool,
}

/// Arguments for `bulkDeleteByTag`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BulkDeleteByTagArgs {
    /// The `Tag`'s global id.
    pub tag_id: String,
    /// Report the match set without mutating.
    #[serde(default)]
    pub dry_run: bool,
    /// Bypass the confirmation threshold.
    #[serde(default)]
    pub force: bool,
}

/// Arguments for `bulkDeleteByBranch`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BulkDeleteByBranchArgs {
    /// Report the match set without mutating.
    #[serde(default)]
    pub dry_run: bool,
    /// Bypass the confirmation threshold.
    #[serde(default)]
    pub force: bool,
}

/// Arguments for `bulkDeleteByRepository`.
#[derive(Debug, Clone, Serialize, Deserialize, schemars::JsonSchema)]
pub struct BulkDeleteByRepositoryArgs {
    /// Logical repository name (all branches).
    pub repository: String,
    /// Report the match set without mutating.
    #[serde(default)]
    pub dry_run: bool,
    /// Bypass the confirmation threshold.
    #[serde(default)]
    pub force: bool,
}
