//! Metrics module - Tick timing and publication statistics

use hdrhistogram::Histogram;
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

fn histogram() -> Histogram<u64> {
    // 3 significant figures is inside the supported 0..=5 range
    Histogram::new(3).expect("valid histogram precision")
}

// ============================================================================
// TICK METRICS - Thread-safe timing of the tick job
// ============================================================================

#[derive(Clone)]
pub struct TickMetrics {
    compute_hist: Arc<Mutex<Histogram<u64>>>,
    publish_hist: Arc<Mutex<Histogram<u64>>>,
    ticks: Arc<AtomicU64>,
    spikes: Arc<AtomicU64>,
    dropped_notices: Arc<AtomicU64>,
}

impl Default for TickMetrics {
    fn default() -> Self {
        Self::new()
    }
}

impl TickMetrics {
    pub fn new() -> Self {
        Self {
            compute_hist: Arc::new(Mutex::new(histogram())),
            publish_hist: Arc::new(Mutex::new(histogram())),
            ticks: Arc::new(AtomicU64::new(0)),
            spikes: Arc::new(AtomicU64::new(0)),
            dropped_notices: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Time spent building the next store.
    pub fn record_compute(&self, duration: Duration) {
        self.compute_hist.lock().record(duration.as_nanos() as u64).ok();
        self.ticks.fetch_add(1, Ordering::Relaxed);
    }

    /// Time spent swapping the snapshot and notifying observers.
    pub fn record_publish(&self, duration: Duration) {
        self.publish_hist.lock().record(duration.as_nanos() as u64).ok();
    }

    pub fn record_spikes(&self, count: usize) {
        self.spikes.fetch_add(count as u64, Ordering::Relaxed);
    }

    pub fn record_dropped_notice(&self) {
        self.dropped_notices.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> MetricsReport {
        let compute = self.compute_hist.lock();
        let publish = self.publish_hist.lock();

        MetricsReport {
            ticks: self.ticks.load(Ordering::Relaxed),
            spikes: self.spikes.load(Ordering::Relaxed),
            dropped_notices: self.dropped_notices.load(Ordering::Relaxed),
            compute_p50: Duration::from_nanos(compute.value_at_quantile(0.5)),
            compute_p99: Duration::from_nanos(compute.value_at_quantile(0.99)),
            publish_p50: Duration::from_nanos(publish.value_at_quantile(0.5)),
            publish_p99: Duration::from_nanos(publish.value_at_quantile(0.99)),
        }
    }
}

// ============================================================================
// METRICS REPORT - Summary statistics
// ============================================================================

#[derive(Debug)]
pub struct MetricsReport {
    pub ticks: u64,
    pub spikes: u64,
    pub dropped_notices: u64,
    pub compute_p50: Duration,
    pub compute_p99: Duration,
    pub publish_p50: Duration,
    pub publish_p99: Duration,
}
