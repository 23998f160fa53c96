use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mcb_domain::constants::REL_CONTEXT_OF;
use mcb_domain::entities::Context;
use mcb_domain::error::Result;
use mcb_domain::ports::{ContextGateway, StoreClient};

use crate::sqlite::{edge_store, node_store};

const LABEL: &str = "Context";

/// SQLite-backed [`ContextGateway`].
pub struct SqliteContextGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteContextGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Context> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl ContextGateway for SqliteContextGateway {
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Context>> {
        node_store::find(self.store.as_ref(), gid).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: Context) -> Result<Context> {
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

    async fn find_for_item(&self, item_gid: &str) -> Result<Vec<Context>> {
        let context_gids = edge_store::sources(self.store.as_ref(), REL_CONTEXT_OF, item_gid).await?;
        let mut contexts = Vec::with_capacity(context_gids.len());
        for gid in context_gids {
            if let Some(record) = node_store::find(self.store.as_ref(), &gid).await? {
                contexts.push(from_record(record)?);
            }
        }
        contexts.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(contexts)
    }

    async fn find_by_date_range(
        &self,
        repository: &str,
        branch: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Context>> {
        let all = self.find_by_scope(repository, branch).await?;
        Ok(all.into_iter().filter(|c| c.date >= start && c.date <= end).collect())
    }

    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Context>> {
        node_store::scan_scope(self.store.as_ref(), LABEL, repository, branch)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    async fn associate(&self, context_gid: &str, item_gid: &str) -> Result<()> {
        edge_store::merge_edge(self.store.as_ref(), REL_CONTEXT_OF, context_gid, item_gid).await
    }
}
