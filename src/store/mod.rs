//! Read-only access to Cursor's per-workspace key-value stores.
//!
//! The Cursor reader only needs three things from a store: open it without
//! write access, fetch one value by key, and release it (on drop). Those are
//! captured by [`StoreOpener`] and [`StateStore`], so the reader can run against
//! [`SqliteStoreOpener`] in production and an in-memory fake in tests.

pub mod sqlite;

use std::path::Path;

use anyhow::Result;

pub use sqlite::SqliteStoreOpener;

/// Key holding the JSON array of prompts sent to Cursor's assistant
pub const PROMPTS_KEY: &str = "aiService.prompts";

/// File name of the store inside each workspace directory
pub const STORE_FILENAME: &str = "state.vscdb";

/// An open, read-only key-value store
pub trait StateStore {
    /// Value stored under `key`, or `None` when the key is absent
    fn get_value(&self, key: &str) -> Result<Option<String>>;
}

/// Opens stores by path
pub trait StoreOpener: Send + Sync {
    fn open_read_only(&self, path: &Path) -> Result<Box<dyn StateStore>>;
}
