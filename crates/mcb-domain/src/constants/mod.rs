//!
//! **Documentation**: [docs/modules/domain.md](../../../../docs/modules/domain.md)
//!
//! Domain layer constants: branch/ID conventions, relationship types, and
//! the fixed analytics parameters.

/// Branch used when a caller does not specify one.
pub const DEFAULT_BRANCH: &str = "main";

/// Directory name used for the on-disk store when a caller does not specify
/// one. Named `memory-bank.kuzu` even though the engine underneath is SQLite
/// (see `DESIGN.md` for the store engine substitution) — the directory
/// contains a single `graph.sqlite3` file.
pub const DEFAULT_DB_DIRNAME: &str = "memory-bank.kuzu";

/// File name of the SQLite database inside the store directory.
pub const DB_FILENAME: &str = "graph.sqlite3";

/// Directed relationship type: `Repository -[PART_OF_REPO]-> entity`.
pub const REL_PART_OF_REPO: &str = "PART_OF_REPO";
/// Directed relationship type: `Component -[DEPENDS_ON]-> Component`.
pub const REL_DEPENDS_ON: &str = "DEPENDS_ON";
/// Directed relationship type: `Context -[CONTEXT_OF]-> entity`.
pub const REL_CONTEXT_OF: &str = "CONTEXT_OF";
/// Directed relationship type: `Decision -[DECISION_ON]-> Component`.
pub const REL_DECISION_ON: &str = "DECISION_ON";
/// Directed relationship type: `Component -[CONTAINS_FILE]-> File`.
pub const REL_CONTAINS_FILE: &str = "CONTAINS_FILE";
/// Directed relationship type: `entity -[IS_TAGGED_WITH]-> Tag`.
pub const REL_IS_TAGGED_WITH: &str = "IS_TAGGED_WITH";

/// PageRank damping factor.
pub const PAGERANK_DAMPING: f64 = 0.85;
/// PageRank convergence tolerance.
pub const PAGERANK_EPSILON: f64 = 1e-6;
/// PageRank iteration cap.
pub const PAGERANK_MAX_ITERATIONS: usize = 100;

/// Environment variable naming the SQLite file (overrides the config default).
pub const ENV_DB_FILENAME: &str = "DB_FILENAME";
/// Environment variable naming the duplex transport port.
pub const ENV_PORT: &str = "PORT";
/// Environment variable naming the HTTP+SSE transport port.
pub const ENV_HTTP_STREAM_PORT: &str = "HTTP_STREAM_PORT";
/// Environment variable naming the bind host.
pub const ENV_HOST: &str = "HOST";
/// Environment variable controlling the log verbosity (0-4).
pub const ENV_DEBUG: &str = "DEBUG";

/// Decision lifecycle states: `proposed -> approved ->
/// implemented` (terminal success) or `proposed -> approved -> failed`
/// (terminal failure). No other transition is legal.
pub const DECISION_STATUS_PROPOSED: &str = "proposed";
/// See [`DECISION_STATUS_PROPOSED`].
pub const DECISION_STATUS_APPROVED: &str = "approved";
/// See [`DECISION_STATUS_PROPOSED`].
pub const DECISION_STATUS_IMPLEMENTED: &str = "implemented";
/// See [`DECISION_STATUS_PROPOSED`].
pub const DECISION_STATUS_FAILED: &str = "failed";

/// Component lifecycle states.
pub const COMPONENT_STATUS_ACTIVE: &str = "active";
/// See [`COMPONENT_STATUS_ACTIVE`].
pub const COMPONENT_STATUS_DEPRECATED: &str = "deprecated";
/// See [`COMPONENT_STATUS_ACTIVE`].
pub const COMPONENT_STATUS_PLANNED: &str = "planned";

/// Rule lifecycle states.
pub const RULE_STATUS_ACTIVE: &str = "active";
/// See [`RULE_STATUS_ACTIVE`].
pub const RULE_STATUS_DEPRECATED: &str = "deprecated";

/// Required logical-id prefix for `Component` nodes.
pub const ID_PREFIX_COMPONENT: &str = "comp-";
/// Required logical-id prefix for `Decision` nodes.
pub const ID_PREFIX_DECISION: &str = "dec-";
/// Required logical-id prefix for `Rule` nodes.
pub const ID_PREFIX_RULE: &str = "rule-";
/// Required logical-id prefix for `File` nodes.
pub const ID_PREFIX_FILE: &str = "file-";
/// Required logical-id prefix for `Tag` nodes.
pub const ID_PREFIX_TAG: &str = "tag-";
/// Required logical-id prefix for `Context` nodes.
pub const ID_PREFIX_CONTEXT: &str = "ctx-";

/// Node labels installed by the Schema Installer.
pub const NODE_LABELS: &[&str] = &[
    "Repository",
    "Metadata",
    "Context",
    "Component",
    "Decision",
    "Rule",
    "File",
    "Tag",
];

/// Relationship types installed by the Schema Installer.
pub const RELATIONSHIP_TYPES: &[&str] = &[
    REL_PART_OF_REPO,
    REL_DEPENDS_ON,
    REL_CONTEXT_OF,
    REL_DECISION_ON,
    REL_CONTAINS_FILE,
    REL_IS_TAGGED_WITH,
];

/// Bulk-delete confirmation threshold: deleting more than this
/// many entities requires `force: true`.
pub const BULK_DELETE_CONFIRMATION_THRESHOLD: usize = 10;
