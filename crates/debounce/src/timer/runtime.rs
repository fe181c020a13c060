//! Tokio-backed timer service
//!
//! Each armed timer is a local task that sleeps and then runs its callback.
//! Callbacks are not `Send`, so timers must be armed from inside a
//! `tokio::task::LocalSet`.

use super::TimerService;
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::trace;

/// `TimerService` running on the current tokio `LocalSet`
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimers;

impl TokioTimers {
    pub fn new() -> Self {
        Self
    }
}

impl TimerService for TokioTimers {
    type Handle = JoinHandle<()>;

    /// # Panics
    ///
    /// Panics when called outside a `LocalSet`.
    fn start_timer(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> JoinHandle<()> {
        tokio::task::spawn_local(async move {
            tokio::time::sleep(delay).await;
            on_fire();
        })
    }

    fn cancel_timer(&self, handle: JoinHandle<()>) {
        if !handle.is_finished() {
            trace!("Aborting armed timer task");
        }
        handle.abort();
    }
}
