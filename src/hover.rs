//! Sustained-hover reveal.
//!
//! A `HoverReveal` turns "pointer stayed on this element for `delay`" into a
//! single call of its action. Leaving early cancels; re-entering restarts the
//! countdown from the latest enter. At most one timer is pending at a time.

use crate::scheduler::{Scheduler, TimerHandle};
use std::{rc::Rc, time::Duration};

pub struct HoverReveal<S: Scheduler> {
    label: &'static str,
    scheduler: S,
    delay: Duration,
    action: Rc<dyn Fn()>,
    hovering: bool,
    pending: Option<S::Handle>,
}

impl<S: Scheduler> HoverReveal<S> {
    pub fn new(
        label: &'static str,
        scheduler: S,
        delay: Duration,
        action: impl Fn() + 'static,
    ) -> Self {
        Self {
            label,
            scheduler,
            delay,
            action: Rc::new(action),
            hovering: false,
            pending: None,
        }
    }

    pub fn on_enter(&mut self) {
        self.hovering = true;
        self.cancel_pending();

        let action = self.action.clone();
        let label = self.label;
        let handle = self.scheduler.schedule(
            self.delay,
            Box::new(move || {
                tracing::debug!(reveal = label, "hover reveal fired");
                action();
            }),
        );
        self.pending = Some(handle);

        tracing::debug!(
            reveal = self.label,
            delay_ms = self.delay.as_millis() as u64,
            "hover reveal scheduled"
        );
    }

    pub fn on_leave(&mut self) {
        self.hovering = false;
        self.cancel_pending();
    }

    /// Drops any outstanding timer without touching the hover flag. Called on
    /// teardown as well as from `on_enter`/`on_leave`.
    pub fn cancel_pending(&mut self) {
        if let Some(mut handle) = self.pending.take() {
            if handle.is_pending() {
                tracing::debug!(reveal = self.label, "hover reveal cancelled");
            }
            handle.cancel();
        }
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    #[cfg(test)]
    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(TimerHandle::is_pending)
    }
}

impl<S: Scheduler> Drop for HoverReveal<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Builds the firing side of a reveal: open `target`, then tell the observer.
pub fn reveal_action<O, N>(
    target: impl Into<String>,
    open: O,
    observer: Option<N>,
) -> impl Fn() + 'static
where
    O: Fn(&str) + 'static,
    N: Fn() + 'static,
{
    let target = target.into();
    move || {
        open(&target);
        if let Some(observer) = observer.as_ref() {
            observer();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::ManualScheduler;
    use std::cell::{Cell, RefCell};

    const HEADING_DELAY: Duration = Duration::from_millis(1_250);

    fn counting_reveal(
        scheduler: &ManualScheduler,
        delay: Duration,
    ) -> (HoverReveal<ManualScheduler>, Rc<Cell<u32>>) {
        let fired = Rc::new(Cell::new(0));
        let reveal = {
            let fired = fired.clone();
            HoverReveal::new("test", scheduler.clone(), delay, move || {
                fired.set(fired.get() + 1)
            })
        };
        (reveal, fired)
    }

    #[test]
    fn leaving_before_delay_never_fires() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, HEADING_DELAY);

        reveal.on_enter();
        scheduler.advance_ms(1_000);
        reveal.on_leave();
        scheduler.advance_ms(5_000);

        assert_eq!(fired.get(), 0);
        assert!(!reveal.is_hovering());
        assert!(!reveal.has_pending());
    }

    #[test]
    fn sustained_hover_fires_once_at_delay() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, HEADING_DELAY);

        reveal.on_enter();
        scheduler.advance_ms(1_249);
        assert_eq!(fired.get(), 0);

        scheduler.advance_ms(1);
        assert_eq!(fired.get(), 1);

        scheduler.advance_ms(50);
        assert_eq!(fired.get(), 1);
        assert!(reveal.is_hovering());
        assert!(!reveal.has_pending());
    }

    #[test]
    fn re_entry_restarts_countdown_from_latest_enter() {
        let scheduler = ManualScheduler::new();
        let fired_at = Rc::new(RefCell::new(Vec::new()));
        let mut reveal = {
            let fired_at = fired_at.clone();
            let clock = scheduler.clone();
            HoverReveal::new("test", scheduler.clone(), HEADING_DELAY, move || {
                fired_at.borrow_mut().push(clock.now());
            })
        };

        reveal.on_enter();
        scheduler.advance_ms(400);
        reveal.on_leave();
        scheduler.advance_ms(100);
        reveal.on_enter();
        scheduler.advance_ms(3_000);

        assert_eq!(*fired_at.borrow(), vec![Duration::from_millis(1_750)]);
    }

    #[test]
    fn repeated_enter_without_leave_does_not_stack_timers() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, HEADING_DELAY);

        for _ in 0..5 {
            reveal.on_enter();
            scheduler.advance_ms(200);
        }
        assert_eq!(scheduler.pending_count(), 1);

        scheduler.advance_ms(2_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn rapid_toggling_then_hold_fires_exactly_once() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, Duration::from_millis(1_200));

        for _ in 0..20 {
            reveal.on_enter();
            scheduler.advance_ms(30);
            reveal.on_leave();
            scheduler.advance_ms(10);
        }
        assert_eq!(fired.get(), 0);

        reveal.on_enter();
        scheduler.advance_ms(1_200);
        scheduler.advance_ms(10_000);
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn separate_sustained_hovers_each_fire() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, HEADING_DELAY);

        reveal.on_enter();
        scheduler.advance_ms(1_300);
        reveal.on_leave();
        reveal.on_enter();
        scheduler.advance_ms(1_300);

        assert_eq!(fired.get(), 2);
    }

    #[test]
    fn teardown_during_pending_delay_prevents_firing() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, HEADING_DELAY);

        reveal.on_enter();
        scheduler.advance_ms(600);
        drop(reveal);
        scheduler.advance_ms(5_000);

        assert_eq!(fired.get(), 0);
        assert_eq!(scheduler.pending_count(), 0);
    }

    #[test]
    fn cancel_pending_keeps_hover_flag() {
        let scheduler = ManualScheduler::new();
        let (mut reveal, fired) = counting_reveal(&scheduler, HEADING_DELAY);

        reveal.on_enter();
        reveal.cancel_pending();
        scheduler.advance_ms(5_000);

        assert!(reveal.is_hovering());
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn reveal_action_opens_target_then_notifies_observer_once() {
        let opened = Rc::new(RefCell::new(Vec::<String>::new()));
        let notified = Rc::new(Cell::new(0));

        let action = {
            let opened = opened.clone();
            let notified = notified.clone();
            reveal_action(
                "https://example.com/secret",
                move |url: &str| {
                    opened.borrow_mut().push(url.to_string());
                },
                Some(move || notified.set(notified.get() + 1)),
            )
        };

        let scheduler = ManualScheduler::new();
        let mut reveal = HoverReveal::new("test", scheduler.clone(), HEADING_DELAY, action);
        reveal.on_enter();
        scheduler.advance_ms(1_250);

        assert_eq!(*opened.borrow(), vec!["https://example.com/secret".to_string()]);
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn reveal_action_without_observer_only_opens() {
        let opened = Rc::new(Cell::new(0));
        let action = {
            let opened = opened.clone();
            reveal_action(
                "https://example.com",
                move |_| opened.set(opened.get() + 1),
                None::<fn()>,
            )
        };

        action();
        assert_eq!(opened.get(), 1);
    }
}
