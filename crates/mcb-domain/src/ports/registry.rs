//! Client Registry: at-most-once-per-root lazy provisioning
//! of a Store Client.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;

use super::store_client::StoreClient;
use crate::error::Result;

/// Maps each client project root to a lazily-created, cached
/// [`StoreClient`](super::StoreClient). Implementations must guarantee
/// at-most-one initialisation per root under concurrent demand.
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Return the cached client for `project_root`, initialising one if
    /// this is the first call for that root. Concurrent callers for the
    /// same cold root coalesce onto a single initialisation.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the project root's database directory cannot
    /// be created, or `Error::EngineError` if the engine fails to open.
    async fn get_client(&self, project_root: &Path) -> Result<Arc<dyn StoreClient>>;

    /// Close every cached client. Callers hold no stale references
    /// afterwards.
    async fn shutdown(&self) -> Result<()>;
}
