use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use mcb_domain::constants::REL_DEPENDS_ON;
use mcb_domain::entities::{Component, ComponentStatus};
use mcb_domain::error::Result;
use mcb_domain::ports::{ComponentGateway, StoreClient};
use mcb_domain::value_objects::GraphUniqueId;

use crate::sqlite::{edge_store, node_store};

const LABEL: &str = "Component";

/// SQLite-backed [`ComponentGateway`].
pub struct SqliteComponentGateway {
    store: Arc<dyn StoreClient>,
}

impl SqliteComponentGateway {
    #[must_use]
    pub fn new(store: Arc<dyn StoreClient>) -> Self {
        Self { store }
    }
}

fn from_record(record: node_store::NodeRecord) -> Result<Component> {
    Ok(serde_json::from_value(record.props)?)
}

#[async_trait]
impl ComponentGateway for SqliteComponentGateway {
    async fn find_by_graph_id(&self, gid: &str) -> Result<Option<Component>> {
        node_store::find(self.store.as_ref(), gid).await?.map(from_record).transpose()
    }

    async fn upsert(&self, mut entity: Component) -> Result<Component> {
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

        // Invariant 5: only materialise DEPENDS_ON for entries that already
        // resolve to an existing Component in the same scope. Re-derive the
        // edge set from scratch on every upsert rather than diffing.
        edge_store::delete_from(self.store.as_ref(), REL_DEPENDS_ON, &gid).await?;
        for dep_id in &entity.depends_on {
            let dep_gid = GraphUniqueId::new(&entity.repository, &entity.branch, dep_id);
            if let Some(dep_record) = node_store::find(self.store.as_ref(), dep_gid.as_str()).await? {
                if serde_json::from_value::<Component>(dep_record.props).is_ok() {
                    edge_store::merge_edge(self.store.as_ref(), REL_DEPENDS_ON, &gid, dep_gid.as_str()).await?;
                }
            }
        }

        from_record(record)
    }

    async fn delete(&self, gid: &str) -> Result<bool> {
        node_store::delete(self.store.as_ref(), gid).await
    }

    async fn find_by_scope(&self, repository: &str, branch: &str) -> Result<Vec<Component>> {
        node_store::scan_scope(self.store.as_ref(), LABEL, repository, branch)
            .await?
            .into_iter()
            .map(from_record)
            .collect()
    }

    async fn find_active(&self, repository: &str, branch: &str) -> Result<Vec<Component>> {
        let all = self.find_by_scope(repository, branch).await?;
        Ok(all.into_iter().filter(|c| c.status == ComponentStatus::Active).collect())
    }

    async fn find_dependencies(&self, gid: &str) -> Result<Vec<Component>> {
        let dep_gids = edge_store::targets(self.store.as_ref(), REL_DEPENDS_ON, gid).await?;
        let mut components = Vec::with_capacity(dep_gids.len());
        for dep_gid in dep_gids {
            if let Some(record) = node_store::find(self.store.as_ref(), &dep_gid).await? {
                components.push(from_record(record)?);
            }
        }
        Ok(components)
    }

    async fn find_dependents(&self, gid: &str) -> Result<Vec<Component>> {
        let dependent_gids = edge_store::sources(self.store.as_ref(), REL_DEPENDS_ON, gid).await?;
        let mut components = Vec::with_capacity(dependent_gids.len());
        for dependent_gid in dependent_gids {
            if let Some(record) = node_store::find(self.store.as_ref(), &dependent_gid).await? {
                components.push(from_record(record)?);
            }
        }
        Ok(components)
    }

    async fn find_dependency_edges(&self, repository: &str, branch: &str) -> Result<Vec<(String, String)>> {
        edge_store::edges_in_scope(self.store.as_ref(), REL_DEPENDS_ON, repository, branch).await
    }
}
