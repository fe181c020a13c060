//! Lull Core - host key-value store primitives
//!
//! This crate provides the seam the storage adapters are written against:
//! - `KeyValueStore` trait for host-provided persistent stores
//! - `StoreError` taxonomy shared by every backend
//! - `MemoryStore` in-memory backend with optional byte quota

pub mod error;
pub mod memory;
pub mod store;

// Re-export main types for convenience
pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::KeyValueStore;

/// Common result type used throughout lull-core
pub type Result<T> = std::result::Result<T, StoreError>;
