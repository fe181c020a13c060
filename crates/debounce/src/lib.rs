//! Debounced execution for UI-driven callbacks
//!
//! This crate provides:
//! - A single-slot debounce coordinator (schedule, cancel, flush, pending query)
//! - A curried entry point returning a reusable debounced callable
//! - The timer service seam the coordinator arms its deferred callback through
//! - A deterministic virtual-clock timer service and a tokio-backed one
//!
//! ```
//! use lull_debounce::{Debouncer, ManualTimers};
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use std::time::Duration;
//!
//! let timers = ManualTimers::new();
//! let debouncer = Debouncer::new(timers.clone());
//! let seen = Rc::new(RefCell::new(Vec::new()));
//!
//! let sink = Rc::clone(&seen);
//! let search = debouncer.debounce(move |q: String| sink.borrow_mut().push(q), Duration::from_millis(300));
//! search.call("r".to_string());
//! search.call("ru".to_string());
//! search.call("rust".to_string());
//!
//! timers.advance(Duration::from_millis(300));
//! assert_eq!(*seen.borrow(), vec!["rust".to_string()]);
//! ```

pub mod debounce;
pub mod timer;

pub use debounce::{DebounceState, Debounced, Debouncer};
pub use timer::manual::{ManualTimerId, ManualTimers};
pub use timer::runtime::TokioTimers;
pub use timer::TimerService;
