//! Key-value blob storage used by every data-access object.
//!
//! # Responsibility
//! - Define the synchronous string-keyed store contract.
//! - Provide JSON helpers so callers persist whole typed values per key.
//!
//! # Invariants
//! - Values are opaque strings to the store; JSON shape is owned by callers.
//! - Corrupt JSON is reported as [`StoreError::Serialization`], never repaired.
//! - Writes are last-write-wins; there is no cross-connection coordination.

use crate::db::DbError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory_store;
mod sqlite_store;

pub use memory_store::MemoryKeyValueStore;
pub use sqlite_store::SqliteKeyValueStore;

/// Key holding the JSON array of every registered user.
pub const USERS_KEY: &str = "users";
/// Key holding the JSON copy of the authenticated user; absent when logged out.
pub const CURRENT_USER_KEY: &str = "currentUser";
/// Key holding the seeded article catalog.
pub const ARTICLES_KEY: &str = "articles";
/// Key holding the seeded category catalog.
pub const CATEGORIES_KEY: &str = "categories";

pub type StoreResult<T> = Result<T, StoreError>;

/// Error for key-value reads, writes and JSON (de)serialization.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    Serialization {
        key: String,
        source: serde_json::Error,
    },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::Serialization { key, source } => {
                write!(f, "invalid JSON value under key `{key}`: {source}")
            }
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialization { source, .. } => Some(source),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Synchronous string-keyed blob storage.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never set or was removed.
    fn get_item(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set_item(&self, key: &str, value: &str) -> StoreResult<()>;
    /// Removes `key`. Removing an absent key is not an error.
    fn remove_item(&self, key: &str) -> StoreResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        (**self).remove_item(key)
    }
}

/// Reads and decodes the JSON value stored under `key`.
///
/// Returns `Ok(None)` when the key is absent.
pub fn read_json<T, S>(store: &S, key: &str) -> StoreResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get_item(key)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|source| StoreError::Serialization {
            key: key.to_string(),
            source,
        })
}

/// Encodes `value` as JSON and stores it under `key`.
pub fn write_json<T, S>(store: &S, key: &str, value: &T) -> StoreResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let raw = serde_json::to_string(value).map_err(|source| StoreError::Serialization {
        key: key.to_string(),
        source,
    })?;
    store.set_item(key, &raw)
}

#[cfg(test)]
mod tests {
    use super::{read_json, write_json, KeyValueStore, MemoryKeyValueStore, StoreError};

    #[test]
    fn read_json_returns_none_for_absent_key() {
        let store = MemoryKeyValueStore::new();
        let value: Option<Vec<u32>> = read_json(&store, "missing").unwrap();
        assert_eq!(value, None);
    }

    #[test]
    fn write_then_read_json_preserves_value() {
        let store = MemoryKeyValueStore::new();
        write_json(&store, "ids", &vec![3_u32, 1, 2]).unwrap();

        assert_eq!(store.get_item("ids").unwrap().as_deref(), Some("[3,1,2]"));
        let ids: Option<Vec<u32>> = read_json(&store, "ids").unwrap();
        assert_eq!(ids, Some(vec![3, 1, 2]));
    }

    #[test]
    fn corrupt_json_is_reported_with_key() {
        let store = MemoryKeyValueStore::new();
        store.set_item("users", "{not json").unwrap();

        let err = read_json::<Vec<u32>, _>(&store, "users").unwrap_err();
        match err {
            StoreError::Serialization { key, .. } => assert_eq!(key, "users"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
