use std::path::Path;

use anyhow::{Context, Result};
use rusqlite::types::ValueRef;
use rusqlite::{Connection, OpenFlags, OptionalExtension};

use super::{StateStore, StoreOpener};

const SELECT_VALUE: &str = "SELECT value FROM ItemTable WHERE key = ?1";

/// Opens `state.vscdb` files with SQLite in read-only mode
#[derive(Debug, Clone, Copy, Default)]
pub struct SqliteStoreOpener;

impl StoreOpener for SqliteStoreOpener {
    fn open_read_only(&self, path: &Path) -> Result<Box<dyn StateStore>> {
        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open store: {}", path.display()))?;

        Ok(Box::new(SqliteStore { conn }))
    }
}

struct SqliteStore {
    conn: Connection,
}

impl StateStore for SqliteStore {
    fn get_value(&self, key: &str) -> Result<Option<String>> {
        self.conn
            .query_row(SELECT_VALUE, [key], |row| {
                // Cursor has written this column both as TEXT and as BLOB
                Ok(match row.get_ref(0)? {
                    ValueRef::Text(bytes) | ValueRef::Blob(bytes) => {
                        Some(String::from_utf8_lossy(bytes).into_owned())
                    }
                    _ => None,
                })
            })
            .optional()
            .with_context(|| format!("Failed to query key {}", key))
            .map(Option::flatten)
    }
}
