use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mcb_domain::entities::{Rule, RuleStatus};
use mcb_domain::error::Result;
use mcb_domain::ports::{RuleGateway, StoreClient};

use crate::sqlite::node_store;

const LABEL: &str = "Rule";

/// SQLite-backed [`RuleGateway`].
pub struct SqliteRuleGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteRuleGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Rule> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl RuleGateway for SqliteRuleGateway {
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Rule>> {
        node_store::find(self.store.as_ref(), gid).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: Rule) -> Result<Rule> {
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

    async fn find_active(&self, repository: &str, branch: &str) -> Result<Vec<Rule>> {
        let all = self.find_by_scope(repository, branch).await?;
        Ok(all.into_iter().filter(|r| r.status == RuleStatus::Active).collect())
    }

    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Rule>> {
        node_store::scan_scope(self.store.as_ref(), LABEL, repository, branch)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }
}
