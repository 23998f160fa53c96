//! Client Registry: at-most-once-per-root lazy provisioning
//! of a [`StoreClient`], backed by the SQLite provider in `mcb-providers`.
//!
//! Concurrent callers racing to open the same cold project root coalesce
//! onto a single [`SqliteStoreClient::open`] call via a per-root
//! [`tokio::sync::OnceCell`]: the cell is
//! inserted into the outer map before initialisation starts, so every
//! racing caller awaits the same `get_or_try_init` future rather than
//! starting its own.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use async_trait::async_trait;
use dashmap::DashMap;
use mcb_domain::constants::DEFAULT_DB_DIRNAME;
use mcb_domain::error::Result;
use mcb_domain::ports::{ClientRegistry, StoreClient};
use mcb_providers::SqliteStoreClient;
use tokio::sync::OnceCell;

type Slot = Arc<OnceCell<Arc<dyn StoreClient>>>;

/// The concrete [`ClientRegistry`] wired at process startup.
pub struct SqliteClientRegistry {
    db_dirname: String,
    clients: DashMap<PathBuf, Slot>,
}

impl SqliteClientRegistry {
    /// Build a registry using the default store directory name
    /// (`memory-bank.kuzu`, see [`DEFAULT_DB_DIRNAME`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_db_dirname(DEFAULT_DB_DIRNAME)
    }

    /// Build a registry using a caller-supplied store directory name
    ///.
    #[must_use]
    pub fn with_db_dirname(db_dirname: impl Into<String>) -> Self {
        Self {
            db_dirname: db_dirname.into(),
            clients: DashMap::new(),
        }
    }
}

impl Default for SqliteClientRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClientRegistry for SqliteClientRegistry {
    async fn get_client(&self, project_root: &Path) -> Result<Arc<dyn StoreClient>> {
        let slot = self
            .clients
            .entry(project_root.to_path_buf())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone();

        let client = slot
            .get_or_try_init(|| async {
                let store = SqliteStoreClient::open(project_root, &self.db_dirname).await?;
                Ok::<Arc<dyn StoreClient>, mcb_domain::Error>(Arc::new(store))
            })
            .await?;

        Ok(Arc::clone(client))
    }

    async fn shutdown(&self) -> Result<()> {
        for entry in self.clients.iter() {
            if let Some(client) = entry.value().get() {
                client.close().await?;
            }
        }
        self.clients.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn concurrent_cold_start_initialises_once() {
        let dir = tempfile::tempdir().unwrap();
        let registry = Arc::new(SqliteClientRegistry::new());
        let root = dir.path().to_path_buf();

        let mut handles = Vec::new();
        for _ in 0..8 {
            let registry = Arc::clone(&registry);
            let root = root.clone();
            handles.push(tokio::spawn(async move { registry.get_client(&root).await }));
        }

        let mut pointers = std::collections::HashSet::new();
        for handle in handles {
            let client = handle.await.unwrap().unwrap();
            pointers.insert(Arc::as_ptr(&client) as *const ());
        }

        assert_eq!(pointers.len(), 1, "every racing caller must see the same client");
    }

    #[tokio::test]
    async fn shutdown_closes_every_cached_client() {
        let dir = tempfile::tempdir().unwrap();
        let registry = SqliteClientRegistry::new();
        let client = registry.get_client(dir.path()).await.unwrap();
        drop(client);
        registry.shutdown().await.unwrap();
    }
}
