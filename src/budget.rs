use std::time::{Duration, Instant};

use crate::clock::{Clock, MonotonicClock};
use crate::error::{Result, TimerError};

/// A one-shot window of fixed length.
///
/// The timer is created with a budget, started exactly once, and then reports
/// whether the budget has been used up. It cannot be paused, renewed or rearmed;
/// build a new timer to open a new window.
///
/// `start` takes `&mut self`, so the owner starts the timer before sharing it.
/// After that `is_active` only reads, and a started timer can be queried from
/// many threads as long as its clock is `Sync`.
#[derive(Clone, Debug)]
pub struct DurationTimer<C = MonotonicClock> {
    budget: Duration,
    start: Option<Instant>,
    clock: C,
}

impl DurationTimer {
    pub fn new(budget: Duration) -> Self {
        Self::with_clock(budget, MonotonicClock)
    }

    pub fn from_millis(budget_ms: i64) -> Result<Self> {
        budget_from_millis(budget_ms).map(Self::new)
    }
}

impl<C: Clock> DurationTimer<C> {
    pub fn with_clock(budget: Duration, clock: C) -> Self {
        Self {
            budget,
            start: None,
            clock,
        }
    }

    pub fn budget(&self) -> Duration {
        self.budget
    }

    pub fn is_started(&self) -> bool {
        self.start.is_some()
    }

    /// Opens the window.
    ///
    /// # Panics
    ///
    /// If the timer was already started. The original start mark is kept.
    pub fn start(&mut self) {
        assert!(self.start.is_none(), "DurationTimer::start called twice");
        self.start = Some(self.clock.now());
    }

    /// Whether the budget still has time left. The window is half-open: at
    /// exactly `budget` elapsed the timer is no longer active.
    ///
    /// # Panics
    ///
    /// If [`start`](Self::start) has not been called.
    pub fn is_active(&self) -> bool {
        let elapsed = self
            .elapsed()
            .unwrap_or_else(|| panic!("DurationTimer::is_active called before start"));
        elapsed < self.budget
    }

    /// Time since `start`, or `None` if the timer has not started.
    pub fn elapsed(&self) -> Option<Duration> {
        self.start
            .map(|start| self.clock.now().saturating_duration_since(start))
    }

    pub fn remaining(&self) -> Option<Duration> {
        self.elapsed()
            .map(|elapsed| self.budget.saturating_sub(elapsed))
    }
}

/// Converts a signed millisecond count, as it arrives off the wire, into a budget.
pub fn budget_from_millis(budget_ms: i64) -> Result<Duration> {
    u64::try_from(budget_ms)
        .map(Duration::from_millis)
        .map_err(|_| TimerError::NegativeBudget(budget_ms))
}
