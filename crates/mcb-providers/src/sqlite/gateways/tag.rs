use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mcb_domain::constants::REL_IS_TAGGED_WITH;
use mcb_domain::entities::Tag;
use mcb_domain::error::Result;
use mcb_domain::ports::{StoreClient, TagGateway};

use crate::sqlite::{edge_store, node_store};

const LABEL: &str = "Tag";

/// SQLite-backed [`TagGateway`]. `Tag` nodes are global: their `id` is the
/// primary key directly, with no `(repository, branch)` scope.
pub struct SqliteTagGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteTagGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Tag> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl TagGateway for SqliteTagGateway {
    async fn find_by_id(&self, id: &str) -> Result<Option<Tag>> {
        node_store::find(self.store.as_ref(), id).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: Tag) -> Result<Tag> {
        let now = Utc::now();
        let id = entity.id.clone();
        if let Some(existing) = node_store::find(self.store.as_ref(), &id).await? {
            entity.created_at = existing.created_at;
        } else {
            entity.created_at = now;
        }
        let props = serde_json::to_value(&entity)?;
        let record = node_store::upsert(self.store.as_ref(), &id, LABEL, None, None, &props, now).await?;
        from_record(record)
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        node_store::delete(self.store.as_ref(), id).await
    }

    async fn find_tagged_items(&self, tag_id: &str) -> Result<Vec<String>> {
        edge_store::sources(self.store.as_ref(), REL_IS_TAGGED_WITH, tag_id).await
    }

    async fn find_tags_for_item(&self, item_gid: &str) -> Result<Vec<Tag>> {
        let tag_ids = edge_store::targets(self.store.as_ref(), REL_IS_TAGGED_WITH, item_gid).await?;
        let mut tags = Vec::with_capacity(tag_ids.len());
        for id in tag_ids {
            if let Some(record) = node_store::find(self.store.as_ref(), &id).await? {
                tags.push(from_record(record)?);
            }
        }
        Ok(tags)
    }

    async fn tag_item(&self, item_gid: &str, tag_id: &str) -> Result<()> {
        edge_store::merge_edge(self.store.as_ref(), REL_IS_TAGGED_WITH, item_gid, tag_id).await
    }
}
