//! Trailing-edge debouncer
//!
//! Collapses a burst of triggers into one delayed run of the most recently
//! registered action. The event loop owns the clock: callers pass `now` in and
//! poll [`Debouncer::fire_due`] on every tick, so there is no timer thread and
//! nothing to lock.

use std::fmt;
use std::time::{Duration, Instant};

type Action<C> = Box<dyn FnMut(&mut C)>;

/// Debounces an action that runs against a context of type `C`
///
/// The action slot and the pending deadline are independent:
/// - `set_action` only swaps the slot; it never schedules anything
/// - `trigger` only (re)schedules; the action run at fire time is whatever
///   occupies the slot at that moment, not what was there when scheduled
pub struct Debouncer<C> {
    delay: Duration,
    /// At most one pending schedule. Overwriting it cancels the previous one.
    deadline: Option<Instant>,
    action: Option<Action<C>>,
}

impl<C> Debouncer<C> {
    /// Create a debouncer with the given quiet period
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            action: None,
        }
    }

    /// Create a debouncer with a quiet period in milliseconds
    pub fn from_millis(delay_ms: u64) -> Self {
        Self::new(Duration::from_millis(delay_ms))
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace the action that will run when the pending schedule elapses
    pub fn set_action<F>(&mut self, action: F)
    where
        F: FnMut(&mut C) + 'static,
    {
        self.action = Some(Box::new(action));
    }

    pub fn has_action(&self) -> bool {
        self.action.is_some()
    }

    /// Schedule the action `delay` from now, replacing any pending schedule
    pub fn trigger(&mut self) {
        self.trigger_at(Instant::now());
    }

    /// Schedule the action `delay` after `now`, replacing any pending schedule
    pub fn trigger_at(&mut self, now: Instant) {
        if self.deadline.is_some() {
            log::trace!("Debounce restarted, previous schedule dropped");
        }
        self.deadline = Some(now + self.delay);
    }

    /// Drop the pending schedule
    ///
    /// Returns true if a schedule was pending.
    pub fn cancel(&mut self) -> bool {
        self.deadline.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left before the pending schedule elapses
    ///
    /// `None` when nothing is pending, zero when it is already due.
    pub fn time_until_fire(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    /// Run the current action if the pending schedule has elapsed
    ///
    /// The schedule is consumed even when the slot is empty. Returns true only
    /// if an action actually ran.
    pub fn fire_due(&mut self, now: Instant, ctx: &mut C) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                match self.action.as_mut() {
                    Some(action) => {
                        action(ctx);
                        true
                    }
                    None => {
                        log::debug!("Debounce elapsed with no action registered");
                        false
                    }
                }
            }
            _ => false,
        }
    }
}

impl<C> fmt::Debug for Debouncer<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .field("deadline", &self.deadline)
            .field("has_action", &self.action.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "debouncer_tests.rs"]
mod debouncer_tests;
