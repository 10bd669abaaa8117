//! Database module
//!
//! SQLite connection, migrations, and the entry store.

pub mod connection;
pub mod migrations;
pub mod store;

pub use connection::{Database, DbError, DbResult};
pub use store::{DaySnapshot, EntryStore, MemoryEntryStore, SqliteEntryStore};
