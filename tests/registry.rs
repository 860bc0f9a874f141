use std::time::Duration;

use timekeeper::clock::ManualClock;
use timekeeper::error::TimerError;
use timekeeper::registry::TimerRegistry;

fn registry(max_timers: usize) -> (TimerRegistry<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    (TimerRegistry::with_clock(max_timers, clock.clone()), clock)
}

#[test]
fn tracks_timers_by_id() {
    let (mut timers, clock) = registry(8);
    timers.create("fetch", Duration::from_millis(100)).unwrap();
    timers.create("render", Duration::from_millis(300)).unwrap();
    timers.start("fetch").unwrap();
    timers.start("render").unwrap();

    clock.advance_millis(150);
    assert_eq!(timers.is_active("fetch"), Ok(false));
    assert_eq!(timers.is_active("render"), Ok(true));

    let snapshot = timers.snapshot("render").unwrap();
    assert!(snapshot.started);
    assert_eq!(snapshot.elapsed, Duration::from_millis(150));
    assert_eq!(snapshot.remaining, Duration::from_millis(150));
}

#[test]
fn unstarted_timer_reports_full_budget() {
    let (mut timers, _clock) = registry(8);
    let snapshot = timers.create("idle", Duration::from_millis(40)).unwrap();
    assert!(!snapshot.started);
    assert_eq!(snapshot.elapsed, Duration::ZERO);
    assert_eq!(snapshot.remaining, Duration::from_millis(40));
    assert_eq!(
        timers.is_active("idle"),
        Err(TimerError::NotStarted("idle".into()))
    );
}

#[test]
fn rejects_bad_ids_and_duplicates() {
    let (mut timers, _clock) = registry(8);
    assert_eq!(
        timers.create("", Duration::from_millis(1)).err(),
        Some(TimerError::InvalidId)
    );
    timers.create("a", Duration::from_millis(1)).unwrap();
    assert_eq!(
        timers.create("a", Duration::from_millis(5)).err(),
        Some(TimerError::AlreadyExists("a".into()))
    );
    assert_eq!(
        timers.start("missing").err(),
        Some(TimerError::NotFound("missing".into()))
    );
    assert_eq!(
        timers.remove("missing").err(),
        Some(TimerError::NotFound("missing".into()))
    );
}

#[test]
fn second_start_is_an_error_not_a_reset() {
    let (mut timers, clock) = registry(8);
    timers.create("once", Duration::from_millis(100)).unwrap();
    timers.start("once").unwrap();
    clock.advance_millis(60);

    assert_eq!(
        timers.start("once").err(),
        Some(TimerError::AlreadyStarted("once".into()))
    );
    assert_eq!(
        timers.snapshot("once").unwrap().elapsed,
        Duration::from_millis(60)
    );
}

#[test]
fn enforces_capacity() {
    let (mut timers, _clock) = registry(2);
    timers.create("a", Duration::from_millis(1)).unwrap();
    timers.create("b", Duration::from_millis(1)).unwrap();
    assert_eq!(
        timers.create("c", Duration::from_millis(1)).err(),
        Some(TimerError::CapacityExceeded(2))
    );

    timers.remove("a").unwrap();
    assert!(timers.create("c", Duration::from_millis(1)).is_ok());
    assert_eq!(timers.len(), 2);
}

#[test]
fn purge_drops_only_expired_timers() {
    let (mut timers, clock) = registry(8);
    timers.create("short", Duration::from_millis(10)).unwrap();
    timers.create("long", Duration::from_millis(1_000)).unwrap();
    timers.create("pending", Duration::from_millis(10)).unwrap();
    timers.start("short").unwrap();
    timers.start("long").unwrap();

    clock.advance_millis(10);
    assert_eq!(timers.purge_expired(), 1);
    assert_eq!(timers.len(), 2);
    assert!(timers.snapshot("short").is_err());
    assert!(timers.snapshot("pending").is_ok());
    assert_eq!(timers.purge_expired(), 0);
}

#[test]
fn remove_returns_last_snapshot() {
    let (mut timers, clock) = registry(8);
    timers.create("job", Duration::from_millis(50)).unwrap();
    timers.start("job").unwrap();
    clock.advance_millis(20);

    let removed = timers.remove("job").unwrap();
    assert_eq!(removed.id, "job");
    assert_eq!(removed.remaining, Duration::from_millis(30));
    assert!(timers.is_empty());
}
