use std::sync::{Mutex, MutexGuard};
use std::time::Duration;

use tonic::Status;
use tracing::warn;

use crate::budget::budget_from_millis;
use crate::clock::{Clock, MonotonicClock};
use crate::error::TimerError;
use crate::registry::{TimerRegistry, TimerSnapshot};
use crate::timekeeper_proto::{
    ActiveResponse, CreateTimerRequest, PurgeRequest, PurgeResponse, TimerRequest, TimerStatus,
};

/// Serves timekeeper requests against a shared [`TimerRegistry`].
pub struct TimerEngine<C = MonotonicClock> {
    registry: Mutex<TimerRegistry<C>>,
}

impl TimerEngine {
    pub fn new(max_timers: usize) -> Self {
        Self::with_registry(TimerRegistry::new(max_timers))
    }
}

impl<C: Clock + Clone> TimerEngine<C> {
    pub fn with_registry(registry: TimerRegistry<C>) -> Self {
        Self {
            registry: Mutex::new(registry),
        }
    }

    pub fn create_timer(&self, request: &CreateTimerRequest) -> Result<TimerStatus, Status> {
        let budget = budget_from_millis(request.budget_ms).map_err(into_status)?;
        let snapshot = self
            .lock()?
            .create(&request.timer_id, budget)
            .map_err(into_status)?;
        Ok(build_status(snapshot))
    }

    pub fn start_timer(&self, request: &TimerRequest) -> Result<TimerStatus, Status> {
        let snapshot = self.lock()?.start(&request.timer_id).map_err(into_status)?;
        Ok(build_status(snapshot))
    }

    pub fn get_timer(&self, request: &TimerRequest) -> Result<TimerStatus, Status> {
        let snapshot = self
            .lock()?
            .snapshot(&request.timer_id)
            .map_err(into_status)?;
        Ok(build_status(snapshot))
    }

    pub fn is_active(&self, request: &TimerRequest) -> Result<ActiveResponse, Status> {
        let active = self
            .lock()?
            .is_active(&request.timer_id)
            .map_err(into_status)?;
        Ok(ActiveResponse {
            timer_id: request.timer_id.clone(),
            active,
        })
    }

    pub fn drop_timer(&self, request: &TimerRequest) -> Result<TimerStatus, Status> {
        let snapshot = self.lock()?.remove(&request.timer_id).map_err(into_status)?;
        Ok(build_status(snapshot))
    }

    pub fn purge_expired(&self, _request: &PurgeRequest) -> Result<PurgeResponse, Status> {
        let mut registry = self.lock()?;
        let purged = registry.purge_expired();
        Ok(PurgeResponse {
            purged: clamp_u32(purged),
            remaining: clamp_u32(registry.len()),
        })
    }

    fn lock(&self) -> Result<MutexGuard<'_, TimerRegistry<C>>, Status> {
        self.registry.lock().map_err(|_| {
            warn!("timer registry lock poisoned");
            Status::internal("timer registry unavailable")
        })
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(crate::config::ServerConfig::default().max_timers)
    }
}

pub fn into_status(err: TimerError) -> Status {
    let message = err.to_string();
    match err {
        TimerError::NegativeBudget(_) | TimerError::InvalidId => Status::invalid_argument(message),
        TimerError::NotFound(_) => Status::not_found(message),
        TimerError::AlreadyExists(_) => Status::already_exists(message),
        TimerError::AlreadyStarted(_) | TimerError::NotStarted(_) => {
            Status::failed_precondition(message)
        }
        TimerError::CapacityExceeded(_) => Status::resource_exhausted(message),
    }
}

fn build_status(snapshot: TimerSnapshot) -> TimerStatus {
    TimerStatus {
        timer_id: snapshot.id,
        budget_ms: millis(snapshot.budget),
        started: snapshot.started,
        elapsed_ms: millis(snapshot.elapsed),
        remaining_ms: millis(snapshot.remaining),
    }
}

fn millis(duration: Duration) -> i64 {
    i64::try_from(duration.as_millis()).unwrap_or(i64::MAX)
}

fn clamp_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}
