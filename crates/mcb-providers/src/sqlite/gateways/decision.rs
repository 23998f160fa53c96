use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use mcb_domain::constants::REL_DECISION_ON;
use mcb_domain::entities::Decision;
use mcb_domain::error::Result;
use mcb_domain::ports::{DecisionGateway, StoreClient};

use crate::sqlite::{edge_store, node_store};

const LABEL: &str = "Decision";

/// SQLite-backed [`DecisionGateway`]. Does not itself enforce the decision
/// state machine — that's the Operations Layer's job; this
/// gateway persists whatever `status` it's given.
pub struct SqliteDecisionGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteDecisionGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Decision> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl DecisionGateway for SqliteDecisionGateway {
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Decision>> {
        node_store::find(self.store.as_ref(), gid).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: Decision) -> Result<Decision> {
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

    async fn find_for_component(&self, component_gid: &str) -> Result<Vec<Decision>> {
        let decision_gids = edge_store::sources(self.store.as_ref(), REL_DECISION_ON, component_gid).await?;
        let mut decisions = Vec::with_capacity(decision_gids.len());
        for gid in decision_gids {
            if let Some(record) = node_store::find(self.store.as_ref(), &gid).await? {
                decisions.push(from_record(record)?);
            }
        }
        Ok(decisions)
    }

    async fn find_by_date_range(
        &self,
        repository: &str,
        branch: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Decision>> {
        let all = self.find_by_scope(repository, branch).await?;
        Ok(all.into_iter().filter(|d| d.date >= start && d.date <= end).collect())
    }

    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Decision>> {
        node_store::scan_scope(self.store.as_ref(), LABEL, repository, branch)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    async fn associate(&self, decision_gid: &str, component_gid: &str) -> Result<()> {
        edge_store::merge_edge(self.store.as_ref(), REL_DECISION_ON, decision_gid, component_gid).await
    }
}
