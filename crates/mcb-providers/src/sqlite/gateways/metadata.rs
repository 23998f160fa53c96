use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mcb_domain::entities::Metadata;
use mcb_domain::error::Result;
use mcb_domain::ports::{MetadataGateway, StoreClient};

use crate::sqlite::node_store;

const LABEL: &str = "Metadata";

/// SQLite-backed [`MetadataGateway`].
pub struct SqliteMetadataGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteMetadataGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Metadata> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl MetadataGateway for SqliteMetadataGateway {
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Metadata>> {
        node_store::find(self.store.as_ref(), gid).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: Metadata) -> Result<Metadata> {
        let now = Utc::now();
        let gid = entity.graph_unique_id.as_str().to_owned();
        if let Some(existing) = node_store::find(self.store.as_ref(), &gid).await? {
            entity.created_at = existing.created_at;
        } else {
            entity.created_at = now;
        }
        entity.updated_at = now;
        let props = serde_json::to_value(&entity)?;
        let record = node_store::upsert(
            self.store.as_ref(),
            &gid,
            LABEL,
            Some(&entity.repository),
            Some(&entity.branch),
            &props,
            now,
        )
        .await?;
        from_record(record)
    }

    async fn delete(&self, gid: &str) -> Result<bool> {
        node_store::delete(self.store.as_ref(), gid).await
    }

    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Metadata>> {
        node_store::scan_scope(self.store.as_ref(), LABEL, repository, branch)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }
}
