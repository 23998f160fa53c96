//! [`SqliteStoreClient`]: the embedded engine backing the Store Client port
//! with `sqlx`'s SQLite driver.

use std::path::Path;

use async_trait::async_trait;
use mcb_domain::constants::DB_FILENAME;
use mcb_domain::error::{Error, Result};
use mcb_domain::ports::{Params, Row, StoreClient};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use super::schema;
use super::value::{bind_value, row_to_map};

/// One open handle onto a project root's `graph.sqlite3` file.
///
/// Reads run concurrently over the connection pool; writes are serialised
/// behind `write_lock` since SQLite allows only one writer at a time
///.
pub struct SqliteStoreClient {
    pool: SqlitePool,
    write_lock: tokio::sync::Mutex<()>,
}

impl SqliteStoreClient {
    /// Open (creating if absent) the SQLite database under
    /// `{project_root}/{db_dirname}/graph.sqlite3`, installing the schema if
    /// this is a cold start.
    ///
    /// # Errors
    ///
    /// Returns `Error::Io` if the store directory cannot be created, or
    /// `Error::EngineError` if the connection or schema installation fails.
    pub async fn open(project_root: &Path, db_dirname: &str) -> Result<Self> {
        let dir = project_root.join(db_dirname);
        tokio::fs::create_dir_all(&dir).await?;
        let db_path = dir.join(DB_FILENAME);

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(options)
            .await
            .map_err(|e| Error::engine_with_source("failed to open sqlite store", e))?;

        let client = Self {
            pool,
            write_lock: tokio::sync::Mutex::new(()),
        };
        schema::install(&client).await?;
        Ok(client)
    }
}

fn is_write_statement(query: &str) -> bool {
    let normalized = query.trim_start().to_ascii_uppercase();
    normalized.starts_with("INSERT")
        || normalized.starts_with("UPDATE")
        || normalized.starts_with("DELETE")
        || normalized.starts_with("CREATE")
        || normalized.starts_with("DROP")
        || normalized.starts_with("ALTER")
}

#[async_trait]
impl StoreClient for SqliteStoreClient {
    async fn execute(&self, query: &str, params: &Params) -> Result<Vec<Row>> {
        let _write_guard = if is_write_statement(query) {
            Some(self.write_lock.lock().await)
        } else {
            None
        };

        let mut prepared = sqlx::query(query);
        for (_, value) in params {
            prepared = bind_value(prepared, value.clone());
        }

        let rows = prepared
            .fetch_all(&self.pool)
            .await
            .map_err(|e| Error::engine_with_source(format!("query failed: {query}"), e))?;
        Ok(rows.iter().map(row_to_map).collect())
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await;
        Ok(())
    }
}
