//! Generic edge CRUD shared by every gateway that materialises a
//! relationship: `DEPENDS_ON`, `CONTEXT_OF`, `DECISION_ON`,
//! `CONTAINS_FILE`, `IS_TAGGED_WITH`.

use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{QueryValue, Row, StoreClient};

fn row_text(row: &Row, column: &str) -> Result<String> {
    match row.get(column) {
        Some(QueryValue::Text(s)) => Ok(s.clone()),
        _ => Err(Error::internal(format!("missing or non-text column '{column}' in edge row"))),
    }
}

/// MERGE an edge: idempotent, does not duplicate an existing `(rel_type,
/// src, dst)` triple (testable property 6).
pub async fn merge_edge(store: &dyn StoreClient, rel_type: &str, src: &str, dst: &str) -> Result<()> {
    store
        .execute(
            "INSERT OR IGNORE INTO edges (rel_type, src, dst, props) VALUES (?, ?, ?, '{}')",
            &vec![
                ("rel_type", QueryValue::Text(rel_type.to_owned())),
                ("src", QueryValue::Text(src.to_owned())),
                ("dst", QueryValue::Text(dst.to_owned())),
            ],
        )
        .await?;
    Ok(())
}

/// Delete every `rel_type` edge whose source is `src` (used before
/// re-materialising a `Component`'s `DEPENDS_ON` edges on upsert).
pub async fn delete_from(store: &dyn StoreClient, rel_type: &str, src: &str) -> Result<()> {
    store
        .execute(
            "DELETE FROM edges WHERE rel_type = ? AND src = ?",
            &vec![
                ("rel_type", QueryValue::Text(rel_type.to_owned())),
                ("src", QueryValue::Text(src.to_owned())),
            ],
        )
        .await?;
    Ok(())
}

/// Destination ids of every `rel_type` edge out of `src`.
pub async fn targets(store: &dyn StoreClient, rel_type: &str, src: &str) -> Result<Vec<String>> {
    let rows = store
        .execute(
            "SELECT dst FROM edges WHERE rel_type = ? AND src = ?",
            &vec![
                ("rel_type", QueryValue::Text(rel_type.to_owned())),
                ("src", QueryValue::Text(src.to_owned())),
            ],
        )
        .await?;
    rows.iter().map(|row| row_text(row, "dst")).collect()
}

/// Source ids of every `rel_type` edge into `dst`.
pub async fn sources(store: &dyn StoreClient, rel_type: &str, dst: &str) -> Result<Vec<String>> {
    let rows = store
        .execute(
            "SELECT src FROM edges WHERE rel_type = ? AND dst = ?",
            &vec![
                ("rel_type", QueryValue::Text(rel_type.to_owned())),
                ("dst", QueryValue::Text(dst.to_owned())),
            ],
        )
        .await?;
    rows.iter().map(|row| row_text(row, "src")).collect()
}

/// Every `(src, dst)` pair for `rel_type` whose `src` falls under the
/// `"{repository}:{branch}:"` scope prefix — the projection PageRank and the
/// component graph algorithms run over.
pub async fn edges_in_scope(
    store: &dyn StoreClient,
    rel_type: &str,
    repository: &str,
    branch: &str,
) -> Result<Vec<(String, String)>> {
    let prefix = format!("{repository}:{branch}:%");
    let rows = store
        .execute(
            "SELECT src, dst FROM edges WHERE rel_type = ? AND src LIKE ?",
            &vec![
                ("rel_type", QueryValue::Text(rel_type.to_owned())),
                ("src", QueryValue::Text(prefix)),
            ],
        )
        .await?;
    rows.iter()
        .map(|row| Ok((row_text(row, "src")?, row_text(row, "dst")?)))
        .collect()
}
