//! The static tool table: every tool's name, a short description, and
//! a `schemars`-derived JSON input schema, consumed by both transports'
//! `list_tools`.

use mcb_application::operations::args::{
    AssociateContextArgs, AssociateDecisionArgs, AssociateFileArgs, BulkDeleteByBranchArgs,
    BulkDeleteByRepositoryArgs, BulkDeleteByTagArgs, BulkDeleteByTypeArgs, ComponentArgs,
    ComponentIdArgs, ComponentTraversalArgs, ContextArgs, CountArgs, DateRangeArgs, DecisionArgs,
    FileArgs, GetEntityArgs, ItemContextArgs, MetadataArgs, PropertiesArgs, RelatedItemsArgs,
    RuleArgs, ShortestPathArgs, TagArgs, TagItemArgs,
};
use schemars::{schema_for, JsonSchema};
use serde::Deserialize;
use serde_json::Value;

/// One entry in the static tool table.
pub struct ToolSpec {
    /// The tool's name, matched verbatim against an incoming call's `tool`
    /// field.
    pub name: &'static str,
    /// A one-line human-readable description, surfaced in `list_tools`.
    pub description: &'static str,
    /// Builds this tool's JSON Schema input shape on demand (cheap enough
    /// to not bother caching — `list_tools` is not a hot path).
    pub input_schema: fn() -> Value,
}

fn schema<T: JsonSchema>() -> Value {
    serde_json::to_value(schema_for!(T)).unwrap_or(Value::Null)
}

/// Arguments for `init-memory-bank`, mirrored here only for schema
/// generation — the dispatcher owns the real (private) struct it
/// deserialises into.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
struct InitMemoryBankArgs {
    /// Logical repository name to bind this session to.
    repository: String,
    /// Branch name; defaults to `main`.
    branch: Option<String>,
    /// Absolute path containing (or to contain) this project's database.
    /// Defaults to the server process's working directory on the stdio
    /// transport.
    #[serde(alias = "projectRoot")]
    project_root: Option<String>,
}

/// Arguments that take no fields beyond the ambient `(repository, branch)`
/// scope: every whole-graph analytics tool.
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
struct NoArgs {}

/// The full static tool table: session binding, entity upserts,
/// associations, queries, analytics, introspection, bulk deletes.
#[must_use]
pub fn all() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "init-memory-bank",
            description: "Bind this session to a project root, repository, and branch; create-or-update the Repository node.",
            input_schema: schema::<InitMemoryBankArgs>,
        },
        ToolSpec {
            name: "metadata",
            description: "Create or update a Metadata node in the session's (repository, branch) scope.",
            input_schema: schema::<MetadataArgs>,
        },
        ToolSpec {
            name: "context",
            description: "Create or update a Context node, optionally linking it to a governed item via CONTEXT_OF.",
            input_schema: schema::<ContextArgs>,
        },
        ToolSpec {
            name: "component",
            description: "Create or update a Component node, materialising DEPENDS_ON edges for resolvable dependencies.",
            input_schema: schema::<ComponentArgs>,
        },
        ToolSpec {
            name: "decision",
            description: "Create or update a Decision node, enforcing the proposed -> approved -> {implemented|failed} lifecycle.",
            input_schema: schema::<DecisionArgs>,
        },
        ToolSpec {
            name: "rule",
            description: "Create or update a Rule node.",
            input_schema: schema::<RuleArgs>,
        },
        ToolSpec {
            name: "file",
            description: "Create or update a File node, optionally linking it to a Component via CONTAINS_FILE.",
            input_schema: schema::<FileArgs>,
        },
        ToolSpec {
            name: "tag",
            description: "Create or update a global Tag node.",
            input_schema: schema::<TagArgs>,
        },
        ToolSpec {
            name: "associate_file_with_component",
            description: "Link an existing File to an existing Component via CONTAINS_FILE. Soft-fails if either endpoint is missing.",
            input_schema: schema::<AssociateFileArgs>,
        },
        ToolSpec {
            name: "associate_context_with_item",
            description: "Link an existing Context to a governed item (Component, Decision, Rule, or File) via CONTEXT_OF.",
            input_schema: schema::<AssociateContextArgs>,
        },
        ToolSpec {
            name: "associate_decision_with_component",
            description: "Link an existing Decision to the Component it governs via DECISION_ON.",
            input_schema: schema::<AssociateDecisionArgs>,
        },
        ToolSpec {
            name: "tag_item",
            description: "Apply a Tag to any scoped item via IS_TAGGED_WITH.",
            input_schema: schema::<TagItemArgs>,
        },
        ToolSpec {
            name: "get-entity",
            description: "Look up a single entity of any kind by logical id, returning NotFound if it doesn't exist in scope.",
            input_schema: schema::<GetEntityArgs>,
        },
        ToolSpec {
            name: "get-component",
            description: "Look up a single Component by logical id, returning NotFound if it doesn't exist in scope.",
            input_schema: schema::<ComponentIdArgs>,
        },
        ToolSpec {
            name: "get_component_dependencies",
            description: "Breadth-first DEPENDS_ON traversal from a Component up to a depth limit.",
            input_schema: schema::<ComponentTraversalArgs>,
        },
        ToolSpec {
            name: "get_component_dependents",
            description: "Inverse DEPENDS_ON traversal: components that depend on the given component.",
            input_schema: schema::<ComponentIdArgs>,
        },
        ToolSpec {
            name: "get_governing_items_for_component",
            description: "Decisions, rules, and context history governing a Component.",
            input_schema: schema::<ComponentIdArgs>,
        },
        ToolSpec {
            name: "get_item_contextual_history",
            description: "Context nodes linked to an item, newest first.",
            input_schema: schema::<ItemContextArgs>,
        },
        ToolSpec {
            name: "get_related_items",
            description: "Breadth-limited neighborhood of a Component, filtered to the given relationship types.",
            input_schema: schema::<RelatedItemsArgs>,
        },
        ToolSpec {
            name: "shortest_path",
            description: "Shortest undirected path between two nodes in the same (repository, branch).",
            input_schema: schema::<ShortestPathArgs>,
        },
        ToolSpec {
            name: "get_decisions_by_date_range",
            description: "Decisions whose date falls within an inclusive calendar-day range.",
            input_schema: schema::<DateRangeArgs>,
        },
        ToolSpec {
            name: "pagerank",
            description: "PageRank over the Component/DEPENDS_ON projection in scope (damping 0.85, may stream progress).",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "louvain_community_detection",
            description: "Louvain community detection over the Component/DEPENDS_ON projection in scope.",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "k_core_decomposition",
            description: "k-core decomposition over the Component/DEPENDS_ON projection in scope.",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "strongly_connected_components",
            description: "Strongly connected components (>= 2 members) over the Component/DEPENDS_ON projection in scope.",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "weakly_connected_components",
            description: "Weakly connected components (>= 2 members) over the Component/DEPENDS_ON projection in scope.",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "labels",
            description: "Node labels the Schema Installer has created.",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "count",
            description: "Count of nodes carrying a label, optionally scoped to (repository, branch).",
            input_schema: schema::<CountArgs>,
        },
        ToolSpec {
            name: "properties",
            description: "Declared property names for a node label.",
            input_schema: schema::<PropertiesArgs>,
        },
        ToolSpec {
            name: "indexes",
            description: "Installed index names.",
            input_schema: schema::<NoArgs>,
        },
        ToolSpec {
            name: "bulkDeleteByType",
            description: "Delete every entity of a type in scope, or report the match set when dryRun is set.",
            input_schema: schema::<BulkDeleteByTypeArgs>,
        },
        ToolSpec {
            name: "bulkDeleteByTag",
            description: "Delete every entity tagged with a Tag in scope, or report the match set when dryRun is set.",
            input_schema: schema::<BulkDeleteByTagArgs>,
        },
        ToolSpec {
            name: "bulkDeleteByBranch",
            description: "Delete every entity in the session's (repository, branch), or report the match set when dryRun is set.",
            input_schema: schema::<BulkDeleteByBranchArgs>,
        },
        ToolSpec {
            name: "bulkDeleteByRepository",
            description: "Delete every entity and Repository node across all branches of a repository name.",
            input_schema: schema::<BulkDeleteByRepositoryArgs>,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_tool_has_a_unique_name() {
        let names: std::collections::HashSet<_> = all().iter().map(|t| t.name).collect();
        assert_eq!(names.len(), all().len());
    }

    #[test]
    fn every_schema_is_an_object() {
        for tool in all() {
            let schema = (tool.input_schema)();
            assert!(schema.is_object(), "{} produced a non-object schema", tool.name);
        }
    }
}
