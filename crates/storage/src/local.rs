//! JSON-valued local storage over a host store
//!
//! Mirrors the browser `localStorage` helpers: values go in as JSON, reads
//! parse them back, and every failure is logged and turned into an absent
//! result so callers never have to handle storage errors.

use crate::degrade;
use lull_core::{KeyValueStore, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Local-storage accessor
pub struct LocalStorage<S> {
    host: Option<S>,
}

impl<S: KeyValueStore> LocalStorage<S> {
    /// Accessor over an available host store
    pub fn new(host: S) -> Self {
        Self { host: Some(host) }
    }

    /// Accessor for a context with no host store; every call degrades
    pub fn unavailable() -> Self {
        Self { host: None }
    }

    pub fn is_available(&self) -> bool {
        self.host.is_some()
    }

    /// Serialize `value` as JSON and store it under `key`
    pub fn set_item<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        self.attempt("setting item", (), |host| {
            let serialized = serde_json::to_string(value)?;
            host.set(key, &serialized)
        });
    }

    /// Read and parse the value under `key`
    ///
    /// Missing, empty, and unparseable entries all read as `None`.
    pub fn get_item<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attempt("getting item", None, |host| match host.get(key)? {
            Some(raw) if !raw.is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
            _ => Ok(None),
        })
    }

    pub fn remove_item(&self, key: &str) {
        self.attempt("removing item", (), |host| host.remove(key));
    }

    pub fn item_exists(&self, key: &str) -> bool {
        self.attempt("checking item", false, |host| host.contains(key))
    }

    /// Remove every item
    pub fn clear(&self) {
        self.attempt("clearing storage", (), |host| host.clear());
    }

    pub fn keys(&self) -> Vec<String> {
        self.attempt("getting keys", Vec::new(), |host| host.keys())
    }

    /// Number of stored items
    pub fn size(&self) -> usize {
        self.attempt("getting size", 0, |host| host.len())
    }

    fn attempt<R>(&self, action: &str, fallback: R, op: impl FnOnce(&S) -> Result<R>) -> R {
        degrade::attempt(self.host.as_ref(), "local storage", action, fallback, op)
    }
}

impl<S: KeyValueStore> From<Option<S>> for LocalStorage<S> {
    fn from(host: Option<S>) -> Self {
        Self { host }
    }
}
