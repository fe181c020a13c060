//! Errors raised by host key-value stores

use thiserror::Error;

/// Failure reported by a `KeyValueStore` backend
#[derive(Debug, Error)]
pub enum StoreError {
    /// No host store is available in this execution context
    #[error("key-value store is not available")]
    Unavailable,

    /// Write rejected because the store is full
    #[error("quota exceeded: write needs {needed} bytes, limit is {limit}")]
    QuotaExceeded { needed: usize, limit: usize },

    /// Value could not be encoded or decoded
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Underlying storage engine failed
    #[error("backend error: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap an arbitrary backend failure
    pub fn backend<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        StoreError::Backend(Box::new(err))
    }
}
