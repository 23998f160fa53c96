use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mcb_domain::constants::REL_PART_OF_REPO;
use mcb_domain::entities::Repository;
use mcb_domain::error::Result;
use mcb_domain::ports::{QueryValue, RepositoryGateway, StoreClient};

use crate::sqlite::{edge_store, node_store};

const LABEL: &str = "Repository";

/// SQLite-backed [`RepositoryGateway`]. `Repository` nodes store `name` in
/// the `repository` column and `branch` in the `branch` column so
/// [`Self::find_branches`] can scan by logical name across branches.
pub struct SqliteRepositoryGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteRepositoryGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Repository> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl RepositoryGateway for SqliteRepositoryGateway {
    async fn find_by_id(&self, id: &str) -> Result<Option<Repository>> {
        node_store::find(self.store.as_ref(), id).await?.map(from_record).transpose()
    }

    async fn upsert(&self, name: &str, branch: &str) -> Result<Repository> {
        let id = Repository::make_id(name, branch);
        let now = Utc::now();
        let created_at = node_store::find(self.store.as_ref(), &id)
            .await?
            .map_or(now, |r| r.created_at);
        let entity = Repository {
            id: id.clone(),
            name: name.to_owned(),
            branch: branch.to_owned(),
            created_at,
            updated_at: now,
        };
        let props = serde_json::to_value(&entity)?;
        let record = node_store::upsert(self.store.as_ref(), &id, LABEL, Some(name), Some(branch), &props, now).await?;
        from_record(record)
    }

    async fn find_branches(&self, name: &str) -> Result<Vec<Repository>> {
        let rows = self
            .store
            .execute(
                "SELECT id, props, created_at, updated_at FROM nodes \
                 WHERE label = ? AND repository = ? ORDER BY branch",
                &vec![
                    ("label", QueryValue::Text(LABEL.to_owned())),
                    ("repository", QueryValue::Text(name.to_owned())),
                ],
            )
            .await?;
        rows.iter()
            .map(node_store::from_row)
            .map(|record| from_record(record?))
            .collect()
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        node_store::delete(self.store.as_ref(), id).await
    }

    async fn link_entity(&self, name: &str, branch: &str, entity_gid: &str) -> Result<()> {
        let id = Repository::make_id(name, branch);
        if node_store::find(self.store.as_ref(), &id).await?.is_none() {
            self.upsert(name, branch).await?;
        }
        edge_store::merge_edge(self.store.as_ref(), REL_PART_OF_REPO, &id, entity_gid).await
    }
}
