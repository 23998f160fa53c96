//! The Schema Installer: creates the two tables and four
//! indexes the SQLite-backed property graph runs on. `CREATE TABLE/INDEX IF
//! NOT EXISTS` makes installation idempotent — safe to run on every cold
//! start.

use mcb_domain::error::Result;
use mcb_domain::ports::{Params, StoreClient};

const CREATE_NODES: &str = "CREATE TABLE IF NOT EXISTS nodes (
    id TEXT PRIMARY KEY,
    label TEXT NOT NULL,
    repository TEXT,
    branch TEXT,
    props TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
)";

const CREATE_EDGES: &str = "CREATE TABLE IF NOT EXISTS edges (
    rel_type TEXT NOT NULL,
    src TEXT NOT NULL,
    dst TEXT NOT NULL,
    props TEXT NOT NULL DEFAULT '{}',
    PRIMARY KEY (rel_type, src, dst)
)";

const CREATE_IDX_NODES_LABEL: &str = "CREATE INDEX IF NOT EXISTS idx_nodes_label ON nodes (label)";
const CREATE_IDX_NODES_SCOPE: &str =
    "CREATE INDEX IF NOT EXISTS idx_nodes_scope ON nodes (repository, branch, label)";
const CREATE_IDX_EDGES_SRC: &str = "CREATE INDEX IF NOT EXISTS idx_edges_src ON edges (rel_type, src)";
const CREATE_IDX_EDGES_DST: &str = "CREATE INDEX IF NOT EXISTS idx_edges_dst ON edges (rel_type, dst)";

/// Names of the indexes installed above, in creation order — surfaced
/// verbatim by `IntrospectionGateway::indexes`.
pub const INDEX_NAMES: &[&str] = &[
    "idx_nodes_label",
    "idx_nodes_scope",
    "idx_edges_src",
    "idx_edges_dst",
];

/// Create the `nodes`/`edges` tables and their indexes if they don't already
/// exist. Called once per [`crate::sqlite::store_client::SqliteStoreClient::open`].
///
/// # Errors
///
/// Returns `Error::EngineError` if any DDL statement fails.
pub async fn install(store: &dyn StoreClient) -> Result<()> {
    let no_params = Params::new();
    store.execute(CREATE_NODES, &no_params).await?;
    store.execute(CREATE_EDGES, &no_params).await?;
    store.execute(CREATE_IDX_NODES_LABEL, &no_params).await?;
    store.execute(CREATE_IDX_NODES_SCOPE, &no_params).await?;
    store.execute(CREATE_IDX_EDGES_SRC, &no_params).await?;
    store.execute(CREATE_IDX_EDGES_DST, &no_params).await?;
    Ok(())
}
