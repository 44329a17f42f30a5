use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

use super::periodic::{PeriodicTask, TaskState};
use crate::config::TelemetryConfig;
use crate::ipc::{StoreHandle, TelemetryChannels, TickNotice};
use crate::metrics::TickMetrics;
use crate::sensor::SyntheticGenerator;
use crate::store::{now_ms, TickReport};

/// The single writer of the store: one tick per call.
pub struct TickJob {
    generator: SyntheticGenerator,
    handle: StoreHandle,
    channels: TelemetryChannels,
    metrics: TickMetrics,
}

impl TickJob {
    pub fn new(
        generator: SyntheticGenerator,
        handle: StoreHandle,
        channels: TelemetryChannels,
        metrics: TickMetrics,
    ) -> Self {
        Self {
            generator,
            handle,
            channels,
            metrics,
        }
    }

    pub fn run(&mut self) -> TickReport {
        self.run_at(now_ms())
    }

    pub fn run_at(&mut self, timestamp_ms: i64) -> TickReport {
        // 1. Build the next store off the current snapshot
        let compute_start = Instant::now();
        let current = self.handle.snapshot();
        let (next, report) = current.advance(&mut self.generator, timestamp_ms);
        drop(current);
        self.metrics.record_compute(compute_start.elapsed());
        self.metrics.record_spikes(report.spike_count());

        // 2. Swap it in and tell observers
        let publish_start = Instant::now();
        let version = self.handle.replace(next);
        let notice = TickNotice {
            version,
            store: self.handle.snapshot(),
        };
        if !self.channels.publish(notice) {
            self.metrics.record_dropped_notice();
            warn!(version, "tick notice dropped, observers are lagging");
        }
        self.metrics.record_publish(publish_start.elapsed());

        debug!(version, spikes = report.spike_count(), "tick applied");
        report
    }
}

// ============================================================================
// TICK SCHEDULER
// ============================================================================

/// Advances the store every `interval_ms`. Disabled schedulers never tick.
pub struct TickScheduler {
    job: Arc<Mutex<TickJob>>,
    task: Option<PeriodicTask>,
}

impl TickScheduler {
    pub fn new(config: &TelemetryConfig, job: TickJob) -> Self {
        let job = Arc::new(Mutex::new(job));

        let task = config.realtime.then(|| {
            let job = Arc::clone(&job);
            PeriodicTask::new("tick", config.interval(), move || {
                job.lock().run();
            })
        });

        Self { job, task }
    }

    pub fn is_enabled(&self) -> bool {
        self.task.is_some()
    }

    pub fn start(&self) {
        match &self.task {
            Some(task) => {
                info!(interval_ms = task.period().as_millis() as u64, "tick scheduler started");
                task.start();
            }
            None => info!("realtime disabled, store stays frozen"),
        }
    }

    pub fn pause(&self, duration: std::time::Duration) {
        if let Some(task) = &self.task {
            task.pause(duration);
        }
    }

    pub fn stop(&self) {
        if let Some(task) = &self.task {
            task.stop();
            info!("tick scheduler stopped");
        }
    }

    pub fn state(&self) -> TaskState {
        self.task
            .as_ref()
            .map(PeriodicTask::state)
            .unwrap_or(TaskState::Stopped)
    }

    /// Runs one tick immediately, outside the timer.
    pub fn tick_now(&self) -> TickReport {
        self.job.lock().run()
    }
}
