//! Diary database handle
//!
//! A small r2d2 pool over one SQLite file. `Database::open` is the only way
//! the binaries get a handle, so the schema is always current before the
//! store sees a connection.

use std::path::Path;
use std::sync::Arc;

use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use thiserror::Error;
use tracing::info;

use super::migrations;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("Database connection error: {0}")]
    Connection(#[from] r2d2::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Cannot create database directory: {0}")]
    Io(#[from] std::io::Error),

    #[error("Entry '{0}' already exists")]
    DuplicateId(String),
}

pub type DbResult<T> = Result<T, DbError>;

/// The diary is written by one MCP session at a time; a second connection
/// only serves the status tool and the summary binary reading alongside.
const FILE_POOL_SIZE: u32 = 2;

#[derive(Clone)]
pub struct Database {
    pool: Arc<Pool<SqliteConnectionManager>>,
}

impl Database {
    /// Open the diary at `path`, creating the file and its directory on first
    /// use, and migrate it to the current schema.
    pub fn open<P: AsRef<Path>>(path: P) -> DbResult<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        // WAL lets the summary binary read while the server holds the writer
        let manager = SqliteConnectionManager::file(path)
            .with_init(|conn| conn.execute_batch("PRAGMA journal_mode = WAL;"));
        let database = Self::from_manager(manager, FILE_POOL_SIZE)?;

        let version = database.migrate()?;
        info!(path = %path.display(), version, "Diary database ready");
        Ok(database)
    }

    /// Migrated private in-memory diary. Every pooled connection to
    /// `:memory:` is its own database, so the pool holds exactly one.
    pub fn open_in_memory() -> DbResult<Self> {
        let database = Self::from_manager(SqliteConnectionManager::memory(), 1)?;
        database.migrate()?;
        Ok(database)
    }

    fn from_manager(manager: SqliteConnectionManager, size: u32) -> DbResult<Self> {
        let pool = Pool::builder().max_size(size).build(manager)?;
        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    fn migrate(&self) -> DbResult<i32> {
        self.with_conn(|conn| {
            migrations::run_migrations(conn)?;
            migrations::get_schema_version(conn)
        })
    }

    /// Execute a closure with a pooled connection
    pub fn with_conn<F, T>(&self, f: F) -> DbResult<T>
    where
        F: FnOnce(&rusqlite::Connection) -> DbResult<T>,
    {
        let conn = self.pool.get()?;
        f(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_memory_is_migrated() {
        let database = Database::open_in_memory().unwrap();
        let version = database
            .with_conn(|conn| migrations::get_schema_version(conn))
            .unwrap();
        assert_eq!(version, migrations::SCHEMA_VERSION);
    }

    #[test]
    fn test_open_creates_missing_directory() {
        let dir = std::env::temp_dir().join(format!("fittracker-{}", uuid::Uuid::new_v4()));
        let path = dir.join("nested").join("diary.db");

        let database = Database::open(&path).unwrap();
        assert!(path.exists());
        let tables: i64 = database
            .with_conn(|conn| {
                Ok(conn.query_row(
                    "SELECT COUNT(*) FROM sqlite_master
                     WHERE type = 'table' AND name IN ('food_entries', 'exercise_entries')",
                    [],
                    |row| row.get(0),
                )?)
            })
            .unwrap();
        assert_eq!(tables, 2);

        drop(database);
        std::fs::remove_dir_all(&dir).ok();
    }
}
