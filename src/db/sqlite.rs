//! SQLite-backed persistence adapter (the CLI default).

use crate::db::log::{LogEntry, load_log, ttlog};
use crate::db::migrate::run_pending_migrations;
use crate::db::persistence::Persistence;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::Path;

/// One connection per CLI invocation; every schema change goes through
/// the migration engine.
pub struct SqlitePersistence {
    conn: Connection,
}

impl SqlitePersistence {
    /// Opens (or creates) the database file and applies pending migrations.
    pub fn open(path: &str) -> AppResult<Self> {
        Self::migrated(Connection::open(Path::new(path))?)
    }

    pub fn open_in_memory() -> AppResult<Self> {
        Self::migrated(Connection::open_in_memory()?)
    }

    fn migrated(conn: Connection) -> AppResult<Self> {
        run_pending_migrations(&conn).map_err(|e| AppError::Migration(e.to_string()))?;
        Ok(Self { conn })
    }

    pub fn log_entries(&self) -> AppResult<Vec<LogEntry>> {
        load_log(&self.conn)
    }
}

impl Persistence for SqlitePersistence {
    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.conn.execute(
            "INSERT INTO kv (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
