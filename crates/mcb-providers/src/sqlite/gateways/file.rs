use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mcb_domain::constants::REL_CONTAINS_FILE;
use mcb_domain::entities::File;
use mcb_domain::error::Result;
use mcb_domain::ports::{FileGateway, StoreClient};

use crate::sqlite::{edge_store, node_store};

const LABEL: &str = "File";

/// SQLite-backed [`FileGateway`].
pub struct SqliteFileGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteFileGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<File> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl FileGateway for SqliteFileGateway {
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<File>> {
        node_store::find(self.store.as_ref(), gid).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: File) -> Result<File> {
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

    async fn find_for_component(&self, component_gid: &str) -> Result<Vec<File>> {
        let file_gids = edge_store::targets(self.store.as_ref(), REL_CONTAINS_FILE, component_gid).await?;
        let mut files = Vec::with_capacity(file_gids.len());
        for gid in file_gids {
            if let Some(record) = node_store::find(self.store.as_ref(), &gid).await? {
                files.push(from_record(record)?);
            }
        }
        Ok(files)
    }

    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<File>> {
        node_store::scan_scope(self.store.as_ref(), LABEL, repository, branch)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    async fn associate_with_component(&self, file_gid: &str, component_gid: &str) -> Result<()> {
        edge_store::merge_edge(self.store.as_ref(), REL_CONTAINS_FILE, component_gid, file_gid).await
    }
}
