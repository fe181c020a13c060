//! Single-slot debounce coordinator
//!
//! A `Debouncer` owns at most one pending timer. Every schedule call cancels
//! the armed timer (its captured callback is dropped, never run) and arms a
//! new one, so for a burst of calls only the last one's callback and
//! arguments survive to fire.
//!
//! State lives behind `Rc` and `RefCell`: a coordinator and everything
//! derived from it stays on the thread that created it.

use crate::timer::TimerService;
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};
use std::time::Duration;
use tracing::trace;

/// Observable state of a `Debouncer`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebounceState {
    /// No timer armed
    Idle,
    /// A timer is armed and has not fired
    Pending,
}

/// The one armed timer a coordinator owns
struct PendingTimer<H> {
    /// Identifies the schedule call that armed this timer
    generation: u64,
    handle: H,
}

struct Inner<T: TimerService> {
    timers: T,
    slot: RefCell<Option<PendingTimer<T::Handle>>>,
    next_generation: Cell<u64>,
}

impl<T: TimerService> Inner<T> {
    /// Disarm the pending timer, if any. Returns whether one was armed.
    fn cancel_pending(&self) -> bool {
        let pending = self.slot.borrow_mut().take();
        match pending {
            Some(pending) => {
                trace!("Cancelling pending timer (generation {})", pending.generation);
                self.timers.cancel_timer(pending.handle);
                true
            }
            None => false,
        }
    }

    /// Replace the pending timer with one that runs `invocation` after `delay`
    fn arm(self: &Rc<Self>, delay: Duration, invocation: Box<dyn FnOnce()>) {
        self.cancel_pending();

        let generation = self.next_generation.get();
        self.next_generation.set(generation.wrapping_add(1));

        let weak: Weak<Self> = Rc::downgrade(self);
        let on_fire = Box::new(move || {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            if !inner.release(generation) {
                trace!("Ignoring stale timer (generation {})", generation);
                return;
            }
            drop(inner);
            invocation();
        });

        let handle = self.timers.start_timer(delay, on_fire);
        *self.slot.borrow_mut() = Some(PendingTimer { generation, handle });
        trace!("Armed timer (generation {}, delay {:?})", generation, delay);
    }

    /// Clear the slot if it still holds the timer armed as `generation`
    fn release(&self, generation: u64) -> bool {
        let mut slot = self.slot.borrow_mut();
        let current = slot
            .as_ref()
            .is_some_and(|pending| pending.generation == generation);
        if current {
            *slot = None;
        }
        current
    }

    fn is_pending(&self) -> bool {
        self.slot.borrow().is_some()
    }
}

impl<T: TimerService> Drop for Inner<T> {
    fn drop(&mut self) {
        if let Some(pending) = self.slot.get_mut().take() {
            trace!("Coordinator dropped with pending timer (generation {})", pending.generation);
            self.timers.cancel_timer(pending.handle);
        }
    }
}

/// Debounce coordinator owning a single pending-timer slot
///
/// Clones share the slot. When the last clone (and the last `Debounced`
/// derived from it) is dropped, any pending timer is cancelled.
pub struct Debouncer<T: TimerService> {
    inner: Rc<Inner<T>>,
}

impl<T: TimerService> Debouncer<T> {
    /// Create an idle coordinator arming its timers on `timers`
    pub fn new(timers: T) -> Self {
        Self {
            inner: Rc::new(Inner {
                timers,
                slot: RefCell::new(None),
                next_generation: Cell::new(0),
            }),
        }
    }

    /// Run `callback(args)` once `delay` passes without another schedule
    ///
    /// Any pending timer is cancelled first and its callback dropped unrun.
    /// A zero delay still defers to the timer service; the callback never
    /// runs inside this call.
    pub fn schedule<A, F>(&self, callback: F, delay: Duration, args: A)
    where
        A: 'static,
        F: FnOnce(A) + 'static,
    {
        self.inner.arm(delay, Box::new(move || callback(args)));
    }

    /// Cancel the pending timer without running its callback
    ///
    /// No-op when idle.
    pub fn cancel(&self) {
        self.inner.cancel_pending();
    }

    /// Cancel the pending timer and run `callback(args)` immediately
    ///
    /// The callback captured by the cancelled schedule is dropped. The
    /// coordinator is idle by the time `callback` starts, so the callback may
    /// schedule again.
    pub fn flush<A, F>(&self, callback: F, args: A)
    where
        F: FnOnce(A),
    {
        if self.inner.cancel_pending() {
            trace!("Flushing pending timer");
        }
        callback(args);
    }

    /// Whether a timer is armed and has not fired
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }

    pub fn state(&self) -> DebounceState {
        if self.is_pending() {
            DebounceState::Pending
        } else {
            DebounceState::Idle
        }
    }

    /// Wrap `callback` as a reusable debounced callable
    ///
    /// Each `Debounced::call` is a `schedule` of `callback` with `delay` on
    /// this coordinator's slot, so it supersedes (and is superseded by)
    /// direct `schedule` calls too.
    pub fn debounce<A, F>(&self, callback: F, delay: Duration) -> Debounced<T, A>
    where
        A: 'static,
        F: Fn(A) + 'static,
    {
        Debounced {
            inner: Rc::clone(&self.inner),
            callback: Rc::new(callback),
            delay,
        }
    }

    /// Timer service this coordinator arms on
    pub fn timers(&self) -> &T {
        &self.inner.timers
    }
}

impl<T: TimerService> Clone for Debouncer<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: TimerService + Default> Default for Debouncer<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: TimerService> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("state", &self.state())
            .finish()
    }
}

/// Debounced callable returned by `Debouncer::debounce`
pub struct Debounced<T: TimerService, A> {
    inner: Rc<Inner<T>>,
    callback: Rc<dyn Fn(A)>,
    delay: Duration,
}

impl<T: TimerService, A: 'static> Debounced<T, A> {
    /// Schedule the wrapped callback with `args`
    pub fn call(&self, args: A) {
        let callback = Rc::clone(&self.callback);
        self.inner.arm(self.delay, Box::new(move || callback(args)));
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Whether the shared slot holds an armed timer
    pub fn is_pending(&self) -> bool {
        self.inner.is_pending()
    }
}

impl<T: TimerService, A> Clone for Debounced<T, A> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
            callback: Rc::clone(&self.callback),
            delay: self.delay,
        }
    }
}

impl<T: TimerService, A> fmt::Debug for Debounced<T, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debounced")
            .field("delay", &self.delay)
            .field("pending", &self.inner.is_pending())
            .finish()
    }
}
