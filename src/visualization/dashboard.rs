use std::path::Path;

use tracing::{info, warn};

use super::chart::render_history_chart;
use crate::error::Result;
use crate::sensor::{classify_severity, Region, SensorKey};
use crate::store::summary::time_label;
use crate::store::{recent_events, window_stats, Store, ALERT_WINDOW_MS};

/// Text table of every region: risk, alert count and worst status.
pub fn status_board(store: &Store) -> Result<String> {
    let mut out = format!("{:<10} {:>5} {:>7}  {}\n", "REGION", "RISK", "ALERTS", "STATUS");
    for (region, summary) in store.summaries()? {
        out.push_str(&format!(
            "{:<10} {:>5} {:>7}  {}\n",
            region.label(),
            summary.risk,
            summary.alerts(),
            summary.status()
        ));
    }
    Ok(out)
}

/// Detail view of one sensor: min/avg/max over the history, last-hour
/// alert count and the most recent events.
pub fn detail_panel(
    store: &Store,
    region: Region,
    sensor: SensorKey,
    max_events: usize,
) -> Result<String> {
    let history = store.history(region);
    let stats = window_stats(history, sensor)?;
    let events = recent_events(history, ALERT_WINDOW_MS);

    let mut out = format!(
        "{} / {} ({})\nmin {:.2}  avg {:.2}  max {:.2}\nalerts (1h): {}\n",
        region.label(),
        sensor.label(),
        sensor.unit(),
        stats.min,
        stats.avg,
        stats.max,
        events.len()
    );
    for event in events.iter().take(max_events) {
        out.push_str(&format!(
            "{}  {:<12} {:>8.2}  {}\n",
            time_label(event.timestamp),
            event.sensor.label(),
            event.value,
            event.severity
        ));
    }
    Ok(out)
}

/// Current value and severity of each sensor for one region's last reading.
pub fn sensor_cards(store: &Store, region: Region) -> Result<Vec<String>> {
    let summary = store.summarize(region)?;
    Ok(SensorKey::ALL
        .iter()
        .map(|&key| {
            let value = summary.last_reading.value(key);
            format!(
                "{}: {:.2} {} [{}]",
                key.label(),
                value,
                key.unit(),
                classify_severity(key, value)
            )
        })
        .collect())
}

/// Writes one PNG per region and sensor into `dir`. Returns how many were written.
pub fn render_store_charts(store: &Store, dir: &Path) -> Result<usize> {
    std::fs::create_dir_all(dir)?;

    let mut written = 0;
    for (region, history) in store.iter() {
        for key in SensorKey::ALL {
            let path = dir.join(format!("{}-{}.png", region.id(), key.short_key()));
            match render_history_chart(region, history, key, &path) {
                Ok(()) => written += 1,
                Err(e) => warn!(%region, sensor = %key, error = %e, "chart skipped"),
            }
        }
    }
    info!(dir = %dir.display(), written, "charts rendered");
    Ok(written)
}
