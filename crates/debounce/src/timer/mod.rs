//! Timer service implementations
//!
//! The coordinator never sleeps or polls. It hands a one-shot callback to a
//! `TimerService` and keeps the returned handle so it can cancel it later.

pub mod manual;
pub mod runtime;

use std::time::Duration;

/// Host facility that arms one-shot delayed callbacks
///
/// Implementations must never invoke `on_fire` from inside `start_timer`,
/// even for a zero delay. Cancelling a handle whose timer already fired or
/// was already cancelled must be a no-op.
pub trait TimerService: 'static {
    /// Token identifying an armed timer
    type Handle: 'static;

    /// Arm `on_fire` to run once after `delay`
    fn start_timer(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> Self::Handle;

    /// Disarm a timer so its callback never runs
    fn cancel_timer(&self, handle: Self::Handle);
}
