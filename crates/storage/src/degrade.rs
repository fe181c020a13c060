//! Shared failure handling for the storage adapters

use lull_core::{Result, StoreError};
use tracing::{debug, error};

/// Run `op` against `host`, degrading to `fallback` on any failure
///
/// A missing host or `StoreError::Unavailable` is logged at debug level;
/// every other error at error level.
pub(crate) fn attempt<S, R>(
    host: Option<&S>,
    adapter: &str,
    action: &str,
    fallback: R,
    op: impl FnOnce(&S) -> Result<R>,
) -> R {
    let Some(host) = host else {
        debug!("No {} available while {}", adapter, action);
        return fallback;
    };

    match op(host) {
        Ok(value) => value,
        Err(StoreError::Unavailable) => {
            debug!("No {} available while {}", adapter, action);
            fallback
        }
        Err(e) => {
            error!("Error {} in {}: {}", action, adapter, e);
            fallback
        }
    }
}
