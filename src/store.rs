//! Store module - Per-region bounded histories with copy-on-write ticks

pub mod history;
pub mod summary;

use std::sync::Arc;

use chrono::Utc;
use tracing::debug;

use crate::error::Result;
use crate::sensor::{Reading, Region, SpikeEvents, SyntheticGenerator};

pub use history::{History, HISTORY_CAPACITY};
pub use summary::{
    recent_events, risk_score, summarize, to_chart_points, window_stats, ChartPoint, SensorEvent,
    Summary, WindowStats, ALERT_WINDOW_MS,
};

/// Spacing of backfilled readings.
pub const BACKFILL_SPACING_MS: i64 = 60_000;

pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}

// ============================================================================
// STORE
// ============================================================================

/// Histories of all four regions.
///
/// Each history sits behind its own `Arc`: cloning a store is cheap, and
/// `tick` copies a history only while an older snapshot still shares it.
/// A store value never changes after construction; ticking yields a new one.
#[derive(Debug, Clone, PartialEq)]
pub struct Store {
    histories: [Arc<History>; 4],
}

/// What happened to one region during a tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegionTick {
    pub region: Region,
    /// Waveform index used for the new reading (pre-tick history length)
    pub sequence_index: u64,
    pub reading: Reading,
    pub spikes: SpikeEvents,
    pub evicted: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub regions: Vec<RegionTick>,
}

impl TickReport {
    pub fn spike_count(&self) -> usize {
        self.regions.iter().filter(|r| r.spikes.any()).count()
    }
}

impl Store {
    /// Backfills `point_count` readings per region, one minute apart, the
    /// last one stamped `now_ms`.
    pub fn create(point_count: usize, generator: &mut SyntheticGenerator, now_ms: i64) -> Self {
        let histories = Region::ALL.map(|_| {
            let readings = (0..point_count).map(|k| {
                let offset = (point_count - 1 - k) as i64 * BACKFILL_SPACING_MS;
                generator.synthetic_reading(now_ms - offset, k as u64)
            });
            Arc::new(History::from_readings(readings))
        });

        debug!(point_count, "store backfilled");
        Self { histories }
    }

    /// Same as [`Store::create`], ending at the current wall-clock time.
    pub fn backfill(point_count: usize, generator: &mut SyntheticGenerator) -> Self {
        Self::create(point_count, generator, now_ms())
    }

    pub fn history(&self, region: Region) -> &History {
        &self.histories[region.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (Region, &History)> + '_ {
        Region::ALL
            .into_iter()
            .map(move |region| (region, self.history(region)))
    }

    /// Total readings across all regions.
    pub fn total_len(&self) -> usize {
        self.histories.iter().map(|h| h.len()).sum()
    }

    pub fn summarize(&self, region: Region) -> Result<Summary> {
        summarize(self.history(region))
    }

    /// Summaries of every region in display order.
    pub fn summaries(&self) -> Result<Vec<(Region, Summary)>> {
        self.iter()
            .map(|(region, history)| Ok((region, summarize(history)?)))
            .collect()
    }

    pub fn tick(&self, generator: &mut SyntheticGenerator, now_ms: i64) -> Store {
        self.advance(generator, now_ms).0
    }

    /// Appends one synthetic reading per region and reports what was added.
    pub fn advance(&self, generator: &mut SyntheticGenerator, now_ms: i64) -> (Store, TickReport) {
        let mut next = self.clone();
        let mut regions = Vec::with_capacity(Region::ALL.len());

        for region in Region::ALL {
            let history = Arc::make_mut(&mut next.histories[region.index()]);
            let sequence_index = history.len() as u64;

            let mut reading = generator.synthetic_reading(now_ms, sequence_index);
            let spikes = generator.inject_spikes(&mut reading);
            let evicted = history.push(reading).is_some();

            regions.push(RegionTick {
                region,
                sequence_index,
                reading,
                spikes,
                evicted,
            });
        }

        (next, TickReport { regions })
    }
}

pub fn create_store(point_count: usize, generator: &mut SyntheticGenerator, now_ms: i64) -> Store {
    Store::create(point_count, generator, now_ms)
}

pub fn tick(store: &Store, generator: &mut SyntheticGenerator, now_ms: i64) -> Store {
    store.tick(generator, now_ms)
}
