//! Handle-based delayed tasks.
//!
//! Scheduling and cancellation both happen on the single UI thread, so a
//! `cancel` issued before the deadline always wins against the task.

use std::time::Duration;

pub trait Scheduler {
    type Handle: TimerHandle;

    fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> Self::Handle;
}

pub trait TimerHandle {
    /// Idempotent. A no-op once the task has fired.
    fn cancel(&mut self);

    fn is_pending(&self) -> bool;
}

#[cfg(target_arch = "wasm32")]
pub use browser::BrowserScheduler;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{Scheduler, TimerHandle};
    use gloo_timers::callback::Timeout;
    use std::{cell::Cell, rc::Rc, time::Duration};

    #[derive(Clone, Copy, Default, PartialEq, Eq)]
    pub struct BrowserScheduler;

    pub struct BrowserTimer {
        timeout: Option<Timeout>,
        fired: Rc<Cell<bool>>,
    }

    impl Scheduler for BrowserScheduler {
        type Handle = BrowserTimer;

        fn schedule(&self, delay: Duration, task: Box<dyn FnOnce()>) -> BrowserTimer {
            let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
            let fired = Rc::new(Cell::new(false));
            let timeout = {
                let fired = fired.clone();
                Timeout::new(millis, move || {
                    fired.set(true);
                    task();
                })
            };

            BrowserTimer {
                timeout: Some(timeout),
                fired,
            }
        }
    }

    impl TimerHandle for BrowserTimer {
        fn cancel(&mut self) {
            // Dropping a gloo Timeout clears it; clearing a fired id is harmless.
            if let Some(timeout) = self.timeout.take() {
                drop(timeout.cancel());
            }
        }

        fn is_pending(&self) -> bool {
            self.timeout.is_some() && !self.fired.get()
        }
    }
}

#[cfg(test)]
pub use manual::ManualScheduler;
