//! Database Module
//!
//! Handles the SQLite connection pool and schema creation

pub mod repository;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{Mutex, MutexGuard};

/// Database service — owns a SQLite connection pool
///
/// Reads go straight to the pool (WAL lets them run concurrently). Writers
/// take [`DbService::write_guard`] first, so at most one write sequence runs
/// at a time within this process.
#[derive(Clone)]
pub struct DbService {
    pub pool: SqlitePool,
    write_lock: Arc<Mutex<()>>,
}

impl DbService {
    /// Open a file-backed database with WAL mode
    ///
    /// The pool connects lazily: a bad path or unreadable file does not stop
    /// the server, it surfaces as a storage error on the first query.
    pub fn open(db_path: &str, max_connections: u32) -> Self {
        let options = SqliteConnectOptions::new()
            .filename(db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            // busy_timeout: 写冲突时等待 5s 而非立即失败
            .busy_timeout(Duration::from_secs(5));

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections.max(1))
            .acquire_timeout(Duration::from_secs(5))
            .connect_lazy_with(options);

        tracing::info!(path = %db_path, "Database pool configured (SQLite WAL, busy_timeout=5000ms)");

        Self::from_pool(pool)
    }

    /// Private in-memory database
    ///
    /// A single connection that never expires; every `:memory:` connection
    /// would otherwise be its own empty database.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            pool,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Create the schema if needed, logging instead of failing
    ///
    /// Returns whether the schema is in place. The server keeps serving
    /// either way; requests report storage errors until the database works.
    pub async fn ensure_schema(&self) -> bool {
        match repository::dish::create_table(&self.pool).await {
            Ok(()) => {
                tracing::info!("Database schema ready");
                true
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to create database schema, continuing without it");
                false
            }
        }
    }

    /// Serialize a write sequence (check-then-insert, update, delete)
    pub async fn write_guard(&self) -> MutexGuard<'_, ()> {
        self.write_lock.lock().await
    }
}
