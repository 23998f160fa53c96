use std::sync::Arc;

use async_trait::async_trait;
use mcb_domain::constants::NODE_LABELS;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{IntrospectionGateway, StoreClient};

use crate::sqlite::{node_store, schema};

/// SQLite-backed [`IntrospectionGateway`].
/// Reads the engine's catalog: the fixed label/property shape the Schema
/// Installer defines, plus live counts from the `nodes` table.
pub struct SqliteIntrospectionGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteIntrospectionGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

/// Declared property names per label, matching each entity's struct fields
///. Kept as a static table since properties live in a single
/// JSON column rather than individual SQL columns.
fn declared_properties(label: &str) -> Result<&'static [&'static str]> {
    match label {
        "Repository" => Ok(&["id", "name", "branch", "created_at", "updated_at"]),
        "Metadata" => Ok(&[
            "graph_unique_id",
            "id",
            "repository",
            "branch",
            "name",
            "content",
            "created_at",
            "updated_at",
        ]),
        "Context" => Ok(&[
            "graph_unique_id",
            "id",
            "repository",
            "branch",
            "agent",
            "summary",
            "observation",
            "date",
            "issue",
            "created_at",
            "updated_at",
        ]),
        "Component" => Ok(&[
            "graph_unique_id",
            "id",
            "repository",
            "branch",
            "name",
            "kind",
            "status",
            "depends_on",
            "created_at",
            "updated_at",
        ]),
        "Decision" => Ok(&[
            "graph_unique_id",
            "id",
            "repository",
            "branch",
            "name",
            "date",
            "context",
            "status",
            "created_at",
            "updated_at",
        ]),
        "Rule" => Ok(&[
            "graph_unique_id",
            "id",
            "repository",
            "branch",
            "name",
            "created",
            "content",
            "triggers",
            "status",
            "created_at",
            "updated_at",
        ]),
        "File" => Ok(&[
            "graph_unique_id",
            "id",
            "repository",
            "branch",
            "name",
            "path",
            "language",
            "metrics",
            "content_hash",
            "mime_type",
            "size_bytes",
            "created_at",
            "updated_at",
        ]),
        "Tag" => Ok(&["id", "name", "color", "description", "created_at"]),
        other => Err(Error::invalid_argument(format!("unknown label '{other}'"))),
    }
}

#[async_trait]
impl IntrospectionGateway for SqliteIntrospectionGateway {
    async fn labels(&self) -> Result<Vec<String>> {
        Ok(NODE_LABELS.iter().map(|&l| l.to_owned()).collect())
    }

    async fn count(&self, label: &str, repository: Option<&str>, branch: Option<&str>) -> Result<i64> {
        node_store::count_scope(self.store.as_ref(), label, repository, branch).await
    }

    async fn properties(&self, label: &str) -> Result<Vec<String>> {
        Ok(declared_properties(label)?.iter().map(|&p| p.to_owned()).collect())
    }

    async fn indexes(&self) -> Result<Vec<String>> {
        Ok(schema::INDEX_NAMES.iter().map(|&i| i.to_owned()).collect())
    }
}
