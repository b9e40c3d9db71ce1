//! Key-value storage contracts and implementations.
//!
//! # Responsibility
//! - Provide a browser-`localStorage`-shaped contract (`get_item`,
//!   `set_item`) for persisting serialized note state.
//! - Back it with SQLite for durable sessions and with a map for tests.
//!
//! # Invariants
//! - `set_item` overwrites any prior value under the same key.
//! - Values are opaque strings; no parsing happens at this layer.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

const STORAGE_TABLE: &str = "local_storage";

pub type RepoResult<T> = Result<T, RepoError>;

/// Storage error for key-value persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    /// Serializing state for persistence failed.
    Encode(serde_json::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Encode(err) => write!(f, "failed to encode stored value: {err}"),
            Self::InvalidData(message) => write!(f, "invalid storage state: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Encode(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Encode(value)
    }
}

/// Persistent string-to-string storage.
pub trait LocalStorage {
    /// Returns the value under `key`, or `None` when nothing is stored.
    fn get_item(&self, key: &str) -> RepoResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed storage over the `local_storage` table.
pub struct SqliteLocalStorage<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteLocalStorage<'conn> {
    /// Constructs storage from a migrated connection.
    ///
    /// # Errors
    /// - `InvalidData` when the connection was not opened through `db::open_db*`.
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        let exists: i64 = conn.query_row(
            "SELECT EXISTS(
                SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1
            );",
            [STORAGE_TABLE],
            |row| row.get(0),
        )?;
        if exists != 1 {
            return Err(RepoError::InvalidData(format!(
                "table `{STORAGE_TABLE}` is missing; open the connection via db::open_db"
            )));
        }

        Ok(Self { conn })
    }
}

impl LocalStorage for SqliteLocalStorage<'_> {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local storage, lost when dropped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLocalStorage {
    items: HashMap<String, String>,
}

impl MemoryLocalStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds storage with an existing raw value.
    pub fn with_item(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut storage = Self::default();
        storage.items.insert(key.into(), value.into());
        storage
    }
}

impl LocalStorage for MemoryLocalStorage {
    fn get_item(&self, key: &str) -> RepoResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> RepoResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{LocalStorage, MemoryLocalStorage, SqliteLocalStorage};
    use crate::db::open_db_in_memory;
    use rusqlite::Connection;

    #[test]
    fn memory_storage_overwrites_by_key() {
        let mut storage = MemoryLocalStorage::new();
        assert_eq!(storage.get_item("notes").unwrap(), None);

        storage.set_item("notes", "first").unwrap();
        storage.set_item("notes", "second").unwrap();
        assert_eq!(storage.get_item("notes").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn sqlite_storage_upserts_by_key() {
        let conn = open_db_in_memory().unwrap();
        let mut storage = SqliteLocalStorage::try_new(&conn).unwrap();

        storage.set_item("notes", "{}").unwrap();
        storage.set_item("notes", r#"{"A":""}"#).unwrap();
        storage.set_item("other", "x").unwrap();

        assert_eq!(
            storage.get_item("notes").unwrap().as_deref(),
            Some(r#"{"A":""}"#)
        );
        let rows: i64 = conn
            .query_row("SELECT COUNT(*) FROM local_storage;", [], |row| row.get(0))
            .unwrap();
        assert_eq!(rows, 2);
    }

    #[test]
    fn sqlite_storage_rejects_unmigrated_connection() {
        let conn = Connection::open_in_memory().unwrap();
        assert!(SqliteLocalStorage::try_new(&conn).is_err());
    }
}
