//! SQLite-backed key-value store.
//!
//! # Invariants
//! - One row per key in `kv_store`; `set_item` is an upsert.
//! - `updated_at` is refreshed on every write.

use super::{KeyValueStore, StoreResult};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension};

/// [`KeyValueStore`] over a migrated magazine database connection.
#[derive(Clone, Copy)]
pub struct SqliteKeyValueStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKeyValueStore<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    /// Returns stored keys in lexical order.
    pub fn keys(&self) -> StoreResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT key FROM kv_store ORDER BY key ASC;")?;
        let keys = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(keys)
    }
}

impl KeyValueStore for SqliteKeyValueStore<'_> {
    fn get_item(&self, key: &str) -> StoreResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO kv_store (key, value)
             VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        debug!(
            "event=kv_set module=store status=ok key={} bytes={}",
            key,
            value.len()
        );
        Ok(())
    }

    fn remove_item(&self, key: &str) -> StoreResult<()> {
        let removed = self
            .conn
            .execute("DELETE FROM kv_store WHERE key = ?1;", [key])?;
        debug!("event=kv_remove module=store status=ok key={key} removed={removed}");
        Ok(())
    }
}
