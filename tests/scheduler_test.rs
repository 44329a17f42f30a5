//! Timer-driven behavior, run on tokio's paused clock

use smart_skin_telemetry::ipc::{StoreHandle, TelemetryChannels};
use smart_skin_telemetry::metrics::TickMetrics;
use smart_skin_telemetry::scheduler::periodic::MIN_PERIOD;
use smart_skin_telemetry::scheduler::{PeriodicTask, Spotlight, TaskState, TickJob, TickScheduler};
use smart_skin_telemetry::{Region, Store, SyntheticGenerator, TelemetryConfig};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

fn scheduler(realtime: bool) -> (TickScheduler, StoreHandle, TickMetrics) {
    let cfg = TelemetryConfig {
        interval_ms: 3000,
        realtime,
        ..TelemetryConfig::default()
    };
    let mut gen = SyntheticGenerator::new(42);
    let handle = StoreHandle::new(Store::backfill(10, &mut gen));
    let metrics = TickMetrics::new();
    let job = TickJob::new(gen, handle.clone(), TelemetryChannels::new(64), metrics.clone());

    (TickScheduler::new(&cfg, job), handle, metrics)
}

// ============================================================================
// TICK SCHEDULER TESTS
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_scheduler_ticks_every_interval() {
    let (scheduler, handle, metrics) = scheduler(true);
    scheduler.start();
    assert_eq!(scheduler.state(), TaskState::Running);

    sleep(Duration::from_millis(9_500)).await;

    assert_eq!(handle.version(), 3);
    for (_, history) in handle.snapshot().iter() {
        assert_eq!(history.len(), 13);
    }
    assert_eq!(metrics.report().ticks, 3);
}

#[tokio::test(start_paused = true)]
async fn test_stopped_scheduler_freezes_store() {
    let (scheduler, handle, _) = scheduler(true);
    scheduler.start();
    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(handle.version(), 1);

    scheduler.stop();
    let frozen = handle.snapshot();
    sleep(Duration::from_millis(10_000)).await;

    assert_eq!(handle.version(), 1);
    assert_eq!(*handle.snapshot(), *frozen);
    assert_eq!(scheduler.state(), TaskState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_disabled_scheduler_never_ticks() {
    let (scheduler, handle, _) = scheduler(false);
    assert!(!scheduler.is_enabled());

    scheduler.start();
    sleep(Duration::from_millis(10_000)).await;

    assert_eq!(handle.version(), 0);
    assert_eq!(scheduler.state(), TaskState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_pause_resumes_after_duration() {
    let (scheduler, handle, _) = scheduler(true);
    scheduler.start();
    sleep(Duration::from_millis(3_500)).await;
    assert_eq!(handle.version(), 1);

    // Paused until t=8.5s, next tick one interval later at t=11.5s
    scheduler.pause(Duration::from_millis(5_000));
    sleep(Duration::from_millis(4_000)).await;
    assert_eq!(scheduler.state(), TaskState::Paused);
    assert_eq!(handle.version(), 1);

    sleep(Duration::from_millis(4_500)).await;
    assert_eq!(scheduler.state(), TaskState::Running);
    assert_eq!(handle.version(), 2);
}

#[tokio::test(start_paused = true)]
async fn test_pause_after_stop_keeps_store_frozen() {
    let (scheduler, handle, _) = scheduler(true);
    scheduler.start();
    sleep(Duration::from_millis(3_500)).await;
    scheduler.stop();

    scheduler.pause(Duration::from_millis(1_000));
    assert_eq!(scheduler.state(), TaskState::Stopped);
    sleep(Duration::from_millis(20_000)).await;

    assert_eq!(handle.version(), 1);
    assert_eq!(scheduler.state(), TaskState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_pause_before_start_does_nothing() {
    let (scheduler, handle, _) = scheduler(true);
    scheduler.pause(Duration::from_millis(1_000));
    sleep(Duration::from_millis(10_000)).await;

    assert_eq!(handle.version(), 0);
    assert_eq!(scheduler.state(), TaskState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_zero_period_is_raised_to_minimum() {
    let runs = Arc::new(AtomicUsize::new(0));
    let counter = runs.clone();
    let task = PeriodicTask::new("zero", Duration::ZERO, move || {
        counter.fetch_add(1, Ordering::Relaxed);
    });
    assert_eq!(task.period(), MIN_PERIOD);

    task.start();
    sleep(Duration::from_millis(10)).await;

    assert!(runs.load(Ordering::Relaxed) >= 1, "Job should have run");
    assert_eq!(task.state(), TaskState::Running);
    task.stop();
}

#[tokio::test(start_paused = true)]
async fn test_tick_now_publishes_immediately() {
    let (scheduler, handle, _) = scheduler(false);
    let report = scheduler.tick_now();

    assert_eq!(handle.version(), 1);
    assert!(report.regions.iter().all(|r| r.sequence_index == 10));
}

// ============================================================================
// SPOTLIGHT TESTS
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_spotlight_cycles_in_display_order() {
    let spotlight = Spotlight::new(Duration::from_millis(2_200), Duration::from_millis(5_000));
    assert_eq!(spotlight.current(), None);

    spotlight.start();
    // Sample between steps so no sample shares an instant with a step
    sleep(Duration::from_millis(100)).await;
    let mut seen = Vec::new();
    for _ in 0..5 {
        sleep(Duration::from_millis(2_200)).await;
        seen.push(spotlight.current());
    }

    assert_eq!(
        seen,
        vec![
            Some(Region::RightArm),
            Some(Region::LeftArm),
            Some(Region::RightLeg),
            Some(Region::LeftLeg),
            Some(Region::RightArm),
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_user_activation_pauses_cycle() {
    let spotlight = Spotlight::new(Duration::from_millis(2_200), Duration::from_millis(5_000));
    spotlight.start();
    sleep(Duration::from_millis(2_300)).await;
    assert_eq!(spotlight.current(), Some(Region::RightArm));

    spotlight.activate(Region::LeftLeg);
    assert_eq!(spotlight.state(), TaskState::Paused);

    // Resumes at t=7.3s, first step at t=9.5s
    sleep(Duration::from_millis(6_000)).await;
    assert_eq!(spotlight.current(), Some(Region::LeftLeg));

    sleep(Duration::from_millis(1_500)).await;
    assert_eq!(spotlight.current(), Some(Region::LeftArm));

    spotlight.stop();
    assert_eq!(spotlight.current(), None);
    assert_eq!(spotlight.state(), TaskState::Stopped);
}

#[tokio::test(start_paused = true)]
async fn test_clear_drops_highlight() {
    let spotlight = Spotlight::new(Duration::from_millis(2_200), Duration::from_millis(5_000));
    spotlight.start();
    sleep(Duration::from_millis(2_300)).await;

    spotlight.clear();
    assert_eq!(spotlight.current(), None);
    assert_eq!(spotlight.state(), TaskState::Paused);
}

#[tokio::test(start_paused = true)]
async fn test_stopped_spotlight_ignores_user_interaction() {
    let spotlight = Spotlight::new(Duration::from_millis(2_200), Duration::from_millis(5_000));
    spotlight.start();
    sleep(Duration::from_millis(2_300)).await;
    spotlight.stop();

    spotlight.activate(Region::LeftLeg);
    assert_eq!(spotlight.current(), Some(Region::LeftLeg));
    assert_eq!(spotlight.state(), TaskState::Stopped);

    spotlight.clear();
    sleep(Duration::from_millis(20_000)).await;

    assert_eq!(spotlight.state(), TaskState::Stopped);
    assert_eq!(spotlight.current(), None);
}
