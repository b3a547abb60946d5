//! SQLite storage handle and per-entity operation modules.

mod ingredients;
mod recipes;

use std::path::Path;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use crate::StorageError;
use crate::migrations::run_migrations;

/// Handle to the SQLite database.
///
/// Cheap to clone; all clones share one pool. Constructed once at process
/// start and passed into the services — no lazy global connection.
#[derive(Clone, Debug)]
pub struct Storage {
    pool: SqlitePool,
}

impl Storage {
    /// Opens the database at `db_path` (creating the file if missing),
    /// enables the foreign-key pragma, and runs migrations.
    pub async fn new(db_path: &Path) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .foreign_keys(true);
        let pool = SqlitePoolOptions::new().max_connections(8).connect_with(options).await?;

        run_migrations(&pool).await?;
        tracing::info!("Storage initialized at {}", db_path.display());

        Ok(Self { pool })
    }

    /// Closes the pool. Subsequent operations on any clone will fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}
