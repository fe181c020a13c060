//! Deterministic virtual-clock timer service
//!
//! Time only moves when the owner calls `advance` or `run_until_idle`, which
//! makes debounce behaviour reproducible in tests and in hosts that drive
//! their own frame loop.

use super::TimerService;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::time::Duration;
use tracing::trace;

/// Handle to a timer armed on a `ManualTimers` clock
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ManualTimerId {
    deadline: Duration,
    seq: u64,
}

impl ManualTimerId {
    /// Virtual time at which this timer fires
    pub fn deadline(&self) -> Duration {
        self.deadline
    }
}

#[derive(Default)]
struct Clock {
    now: Duration,
    next_seq: u64,
    /// Armed callbacks ordered by (deadline, arming order)
    queue: BTreeMap<ManualTimerId, Box<dyn FnOnce()>>,
}

impl Clock {
    /// Pop the earliest timer due at or before `limit`, moving `now` to it
    fn pop_due(&mut self, limit: Option<Duration>) -> Option<Box<dyn FnOnce()>> {
        let id = *self.queue.keys().next()?;
        if limit.is_some_and(|limit| id.deadline > limit) {
            return None;
        }

        let callback = self.queue.remove(&id)?;
        self.now = self.now.max(id.deadline);
        Some(callback)
    }
}

/// Virtual clock implementing `TimerService`
///
/// Clones share the same clock and queue.
#[derive(Clone, Default)]
pub struct ManualTimers {
    clock: Rc<RefCell<Clock>>,
}

impl ManualTimers {
    /// Create a clock at virtual time zero
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.clock.borrow().now
    }

    /// Number of armed timers
    pub fn pending_timers(&self) -> usize {
        self.clock.borrow().queue.len()
    }

    /// Deadline of the earliest armed timer
    pub fn next_deadline(&self) -> Option<Duration> {
        self.clock.borrow().queue.keys().next().map(ManualTimerId::deadline)
    }

    /// Move the clock forward by `by`, firing every timer that falls due
    ///
    /// Timers fire in deadline order, ties in arming order, with the clock
    /// set to each timer's deadline while its callback runs. Timers armed by
    /// a callback fire in the same call if they fall due. Returns the number
    /// of callbacks run.
    pub fn advance(&self, by: Duration) -> usize {
        let target = self.now() + by;
        let fired = self.drain(Some(target));

        let mut clock = self.clock.borrow_mut();
        clock.now = clock.now.max(target);
        fired
    }

    /// Fire every armed timer, including ones armed while draining
    ///
    /// Does not return while callbacks keep re-arming timers.
    pub fn run_until_idle(&self) -> usize {
        self.drain(None)
    }

    fn drain(&self, limit: Option<Duration>) -> usize {
        let mut fired = 0;
        loop {
            // Release the borrow before running: callbacks re-arm timers
            let due = self.clock.borrow_mut().pop_due(limit);
            match due {
                Some(callback) => {
                    fired += 1;
                    callback();
                }
                None => break,
            }
        }

        if fired > 0 {
            trace!("Manual clock fired {} timers (now {:?})", fired, self.now());
        }
        fired
    }
}

impl TimerService for ManualTimers {
    type Handle = ManualTimerId;

    fn start_timer(&self, delay: Duration, on_fire: Box<dyn FnOnce()>) -> ManualTimerId {
        let mut clock = self.clock.borrow_mut();
        let id = ManualTimerId {
            deadline: clock.now + delay,
            seq: clock.next_seq,
        };
        clock.next_seq += 1;
        clock.queue.insert(id, on_fire);
        id
    }

    fn cancel_timer(&self, handle: ManualTimerId) {
        // Drop outside the borrow: captured values may touch this clock
        let removed = self.clock.borrow_mut().queue.remove(&handle);
        drop(removed);
    }
}

impl fmt::Debug for ManualTimers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let clock = self.clock.borrow();
        f.debug_struct("ManualTimers")
            .field("now", &clock.now)
            .field("pending", &clock.queue.len())
            .finish()
    }
}
