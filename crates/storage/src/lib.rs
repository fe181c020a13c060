//! Persistent key-value adapters
//!
//! This crate provides:
//! - `SledStore`, a host store backed by one sled tree
//! - `LocalStorage`, JSON values over any host store
//! - `CookieJar`, expiring named values with path/domain attributes
//!
//! Both adapters degrade instead of failing: when the host store is missing
//! or errors, they log and return an absent result.

pub mod cookie;
mod degrade;
pub mod local;
pub mod sled_store;

// Re-exports
pub use cookie::{lookup, Cookie, CookieJar, CookieOptions};
pub use local::LocalStorage;
pub use sled_store::SledStore;

pub use lull_core::{KeyValueStore, MemoryStore, StoreError};
