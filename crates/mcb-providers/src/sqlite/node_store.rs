//! Generic node CRUD shared by every per-entity gateway. Each gateway owns
//! the translation between its domain entity and the `props` JSON payload;
//! this module only knows about the `nodes` table's columns.

use chrono::{DateTime, Utc};
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{Params, QueryValue, Row, StoreClient};
use serde_json::Value;

/// One raw `nodes` table record, before the gateway deserializes `props`
/// into its entity type.
pub struct NodeRecord {
    /// `nodes.id` — either a `graph_unique_id` or a `Repository`/`Tag` key.
    pub id: String,
    /// `nodes.props`, parsed.
    pub props: Value,
    /// `nodes.created_at`, preserved across updates.
    pub created_at: DateTime<Utc>,
    /// `nodes.updated_at`, advanced on every mutation.
    pub updated_at: DateTime<Utc>,
}

fn row_text(row: &Row, column: &str) -> Result<String> {
    match row.get(column) {
        Some(QueryValue::Text(s)) => Ok(s.clone()),
        _ => Err(Error::internal(format!("missing or non-text column '{column}' in node row"))),
    }
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| Error::internal(format!("invalid timestamp '{raw}': {e}")))
}

/// Parse an ad hoc query's `(id, props, created_at, updated_at)` row into a
/// [`NodeRecord`] — for gateway queries that can't reuse [`scan_scope`]'s
/// fixed shape (e.g. [`crate::sqlite::gateways::SqliteRepositoryGateway::find_branches`]).
pub fn from_row(row: &Row) -> Result<NodeRecord> {
    row_to_record(row)
}

fn row_to_record(row: &Row) -> Result<NodeRecord> {
    let props: Value = serde_json::from_str(&row_text(row, "props")?)?;
    Ok(NodeRecord {
        id: row_text(row, "id")?,
        props,
        created_at: parse_timestamp(&row_text(row, "created_at")?)?,
        updated_at: parse_timestamp(&row_text(row, "updated_at")?)?,
    })
}

/// Look up one node by its primary key.
pub async fn find(store: &dyn StoreClient, id: &str) -> Result<Option<NodeRecord>> {
    let rows = store
        .execute(
            "SELECT id, props, created_at, updated_at FROM nodes WHERE id = ?",
            &vec![("id", QueryValue::Text(id.to_owned()))],
        )
        .await?;
    rows.first().map(row_to_record).transpose()
}

/// Create-or-update a node, preserving `created_at` across updates.
///
/// # Errors
///
/// Returns `Error::Internal` if the row cannot be re-read immediately after
/// the write (engine bug, not a caller error), or propagates `Error::EngineError`.
#[allow(clippy::too_many_arguments)]
pub async fn upsert(
    store: &dyn StoreClient,
    id: &str,
    label: &str,
    repository: Option<&str>,
    branch: Option<&str>,
    props: &Value,
    now: DateTime<Utc>,
) -> Result<NodeRecord> {
    let created_at = match find(store, id).await? {
        Some(existing) => existing.created_at,
        None => now,
    };
    let props_text = serde_json::to_string(props)?;
    let params: Params = vec![
        ("id", QueryValue::Text(id.to_owned())),
        ("label", QueryValue::Text(label.to_owned())),
        (
            "repository",
            repository.map_or(QueryValue::Null, |r| QueryValue::Text(r.to_owned())),
        ),
        (
            "branch",
            branch.map_or(QueryValue::Null, |b| QueryValue::Text(b.to_owned())),
        ),
        ("props", QueryValue::Text(props_text)),
        ("created_at", QueryValue::Timestamp(created_at)),
        ("updated_at", QueryValue::Timestamp(now)),
    ];
    store
        .execute(
            "INSERT INTO nodes (id, label, repository, branch, props, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?) \
             ON CONFLICT(id) DO UPDATE SET \
             label = excluded.label, repository = excluded.repository, \
             branch = excluded.branch, props = excluded.props, updated_at = excluded.updated_at",
            &params,
        )
        .await?;
    find(store, id)
        .await?
        .ok_or_else(|| Error::internal(format!("node '{id}' missing immediately after upsert")))
}

/// Delete a node and detach-delete every edge incident on it. Returns
/// whether the node existed.
pub async fn delete(store: &dyn StoreClient, id: &str) -> Result<bool> {
    let existed = find(store, id).await?.is_some();
    store
        .execute(
            "DELETE FROM edges WHERE src = ? OR dst = ?",
            &vec![
                ("src", QueryValue::Text(id.to_owned())),
                ("dst", QueryValue::Text(id.to_owned())),
            ],
        )
        .await?;
    store
        .execute(
            "DELETE FROM nodes WHERE id = ?",
            &vec![("id", QueryValue::Text(id.to_owned()))],
        )
        .await?;
    Ok(existed)
}

/// All nodes carrying `label` within a `(repository, branch)` scope, oldest
/// first.
pub async fn scan_scope(
    store: &dyn StoreClient,
    label: &str,
    repository: &str,
    branch: &str,
) -> Result<Vec<NodeRecord>> {
    let rows = store
        .execute(
            "SELECT id, props, created_at, updated_at FROM nodes \
             WHERE label = ? AND repository = ? AND branch = ? ORDER BY created_at",
            &vec![
                ("label", QueryValue::Text(label.to_owned())),
                ("repository", QueryValue::Text(repository.to_owned())),
                ("branch", QueryValue::Text(branch.to_owned())),
            ],
        )
        .await?;
    rows.iter().map(row_to_record).collect()
}

/// All nodes carrying `label`, regardless of scope (used for global entities
/// like `Tag`).
pub async fn scan_label(store: &dyn StoreClient, label: &str) -> Result<Vec<NodeRecord>> {
    let rows = store
        .execute(
            "SELECT id, props, created_at, updated_at FROM nodes WHERE label = ? ORDER BY created_at",
            &vec![("label", QueryValue::Text(label.to_owned()))],
        )
        .await?;
    rows.iter().map(row_to_record).collect()
}

/// Count nodes carrying `label`, optionally narrowed to a `(repository,
/// branch)` scope.
pub async fn count_scope(
    store: &dyn StoreClient,
    label: &str,
    repository: Option<&str>,
    branch: Option<&str>,
) -> Result<i64> {
    let mut sql = String::from("SELECT COUNT(*) AS cnt FROM nodes WHERE label = ?");
    let mut params: Params = vec![("label", QueryValue::Text(label.to_owned()))];
    if let Some(r) = repository {
        sql.push_str(" AND repository = ?");
        params.push(("repository", QueryValue::Text(r.to_owned())));
    }
    if let Some(b) = branch {
        sql.push_str(" AND branch = ?");
        params.push(("branch", QueryValue::Text(b.to_owned())));
    }
    let rows = store.execute(&sql, &params).await?;
    Ok(rows
        .first()
        .and_then(|row| row.get("cnt"))
        .and_then(QueryValue::as_int)
        .unwrap_or(0))
}
