//! Host store backed by sled

use lull_core::{KeyValueStore, Result, StoreError};
use sled::{Db, Tree};
use std::path::Path;

/// Key-value store over a single sled tree
///
/// Every mutation is flushed before returning.
#[derive(Clone)]
pub struct SledStore {
    tree: Tree,
}

impl SledStore {
    /// Open (or create) the database at `path`, using its default tree
    pub fn open(path: &Path) -> Result<Self> {
        let db = sled::open(path).map_err(StoreError::backend)?;
        Self::with_db(&db, "default")
    }

    /// Use tree `name` of an already-open database
    ///
    /// sled locks its directory, so a process sharing one database between
    /// several stores opens it once and calls this per tree.
    pub fn with_db(db: &Db, name: &str) -> Result<Self> {
        let tree = db.open_tree(name).map_err(StoreError::backend)?;
        Ok(Self { tree })
    }

    /// Throwaway in-memory database, removed on drop
    pub fn temporary() -> Result<Self> {
        let db = sled::Config::new()
            .temporary(true)
            .open()
            .map_err(StoreError::backend)?;
        Self::with_db(&db, "default")
    }

    fn flush(&self) -> Result<()> {
        self.tree.flush().map_err(StoreError::backend)?;
        Ok(())
    }
}

fn decode(bytes: &[u8]) -> Result<String> {
    String::from_utf8(bytes.to_vec()).map_err(StoreError::backend)
}

impl KeyValueStore for SledStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.tree.get(key).map_err(StoreError::backend)? {
            Some(value) => Ok(Some(decode(&value)?)),
            None => Ok(None),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.tree
            .insert(key, value.as_bytes())
            .map_err(StoreError::backend)?;
        self.flush()
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.tree.remove(key).map_err(StoreError::backend)?;
        self.flush()
    }

    fn contains(&self, key: &str) -> Result<bool> {
        self.tree.contains_key(key).map_err(StoreError::backend)
    }

    fn clear(&self) -> Result<()> {
        self.tree.clear().map_err(StoreError::backend)?;
        self.flush()
    }

    fn keys(&self) -> Result<Vec<String>> {
        let mut keys = Vec::new();
        for key in self.tree.iter().keys() {
            let key = key.map_err(StoreError::backend)?;
            keys.push(decode(&key)?);
        }
        Ok(keys)
    }

    fn len(&self) -> Result<usize> {
        Ok(self.tree.len())
    }
}
