use std::collections::HashMap;
use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::budget::DurationTimer;
use crate::clock::{Clock, MonotonicClock};
use crate::error::{Result, TimerError};

/// Point-in-time view of a registered timer.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimerSnapshot {
    pub id: String,
    pub budget: Duration,
    pub started: bool,
    pub elapsed: Duration,
    pub remaining: Duration,
}

/// Timers owned by id. Every timer shares the registry's clock.
///
/// Unlike a bare [`DurationTimer`], the registry never panics on misuse: starting
/// twice or asking an unstarted timer whether it is active come back as
/// [`TimerError`]s, since the ids usually arrive from a remote caller.
pub struct TimerRegistry<C = MonotonicClock> {
    timers: HashMap<String, DurationTimer<C>>,
    max_timers: usize,
    clock: C,
}

impl TimerRegistry {
    pub fn new(max_timers: usize) -> Self {
        Self::with_clock(max_timers, MonotonicClock)
    }
}

impl<C: Clock + Clone> TimerRegistry<C> {
    pub fn with_clock(max_timers: usize, clock: C) -> Self {
        Self {
            timers: HashMap::new(),
            max_timers,
            clock,
        }
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn create(&mut self, id: &str, budget: Duration) -> Result<TimerSnapshot> {
        if id.is_empty() {
            return Err(TimerError::InvalidId);
        }
        if self.timers.contains_key(id) {
            return Err(TimerError::AlreadyExists(id.to_string()));
        }
        if self.timers.len() >= self.max_timers {
            return Err(TimerError::CapacityExceeded(self.max_timers));
        }

        let timer = DurationTimer::with_clock(budget, self.clock.clone());
        let snapshot = snapshot_of(id, &timer);
        self.timers.insert(id.to_string(), timer);
        debug!(timer_id = id, budget_ms = budget.as_millis() as u64, "timer created");
        Ok(snapshot)
    }

    pub fn start(&mut self, id: &str) -> Result<TimerSnapshot> {
        let timer = self
            .timers
            .get_mut(id)
            .ok_or_else(|| TimerError::NotFound(id.to_string()))?;
        if timer.is_started() {
            return Err(TimerError::AlreadyStarted(id.to_string()));
        }
        timer.start();
        debug!(timer_id = id, "timer started");
        Ok(snapshot_of(id, timer))
    }

    pub fn is_active(&self, id: &str) -> Result<bool> {
        let timer = self.get(id)?;
        if !timer.is_started() {
            return Err(TimerError::NotStarted(id.to_string()));
        }
        Ok(timer.is_active())
    }

    pub fn snapshot(&self, id: &str) -> Result<TimerSnapshot> {
        self.get(id).map(|timer| snapshot_of(id, timer))
    }

    pub fn remove(&mut self, id: &str) -> Result<TimerSnapshot> {
        let timer = self
            .timers
            .remove(id)
            .ok_or_else(|| TimerError::NotFound(id.to_string()))?;
        debug!(timer_id = id, "timer removed");
        Ok(snapshot_of(id, &timer))
    }

    /// Drops every started timer whose window has closed. Unstarted timers stay.
    pub fn purge_expired(&mut self) -> usize {
        let before = self.timers.len();
        self.timers
            .retain(|_, timer| !timer.is_started() || timer.is_active());
        let purged = before - self.timers.len();
        if purged > 0 {
            info!(purged, remaining = self.timers.len(), "purged expired timers");
        }
        purged
    }

    fn get(&self, id: &str) -> Result<&DurationTimer<C>> {
        self.timers
            .get(id)
            .ok_or_else(|| TimerError::NotFound(id.to_string()))
    }
}

fn snapshot_of<C: Clock>(id: &str, timer: &DurationTimer<C>) -> TimerSnapshot {
    TimerSnapshot {
        id: id.to_string(),
        budget: timer.budget(),
        started: timer.is_started(),
        elapsed: timer.elapsed().unwrap_or_default(),
        remaining: timer.remaining().unwrap_or(timer.budget()),
    }
}
