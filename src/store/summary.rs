use chrono::{Local, TimeZone};
use serde::Serialize;

use super::history::History;
use crate::error::{Result, TelemetryError};
use crate::sensor::severity::{alert_count, worst_severity};
use crate::sensor::{classify_severity, Reading, SensorKey, Severity};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub last_reading: Reading,
    /// Composite of pressure and vibration, 0..=100
    pub risk: u8,
}

impl Summary {
    /// Worst severity among the last reading's sensors.
    pub fn status(&self) -> Severity {
        worst_severity(&self.last_reading)
    }

    pub fn alerts(&self) -> usize {
        alert_count(&self.last_reading)
    }
}

/// `(pressure/120)*70 + (vibration/3)*30`, clamped to 0..=100 and rounded.
pub fn risk_score(reading: &Reading) -> u8 {
    let raw = (reading.pressure / 120.0) * 70.0 + (reading.vibration / 3.0) * 30.0;
    raw.clamp(0.0, 100.0).round() as u8
}

pub fn summarize(history: &History) -> Result<Summary> {
    let last_reading = *history.last().ok_or(TelemetryError::EmptyHistory)?;
    Ok(Summary {
        last_reading,
        risk: risk_score(&last_reading),
    })
}

// ============================================================================
// WINDOW STATISTICS / EVENTS
// ============================================================================

/// Span of the "last hour" alert panel.
pub const ALERT_WINDOW_MS: i64 = 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WindowStats {
    pub min: f64,
    pub avg: f64,
    pub max: f64,
}

/// Min, mean and max of one sensor over the whole history.
pub fn window_stats(history: &History, sensor: SensorKey) -> Result<WindowStats> {
    if history.is_empty() {
        return Err(TelemetryError::EmptyHistory);
    }

    let (min, max, sum) = history.iter().map(|r| r.value(sensor)).fold(
        (f64::INFINITY, f64::NEG_INFINITY, 0.0),
        |(min, max, sum), v| (min.min(v), max.max(v), sum + v),
    );

    Ok(WindowStats {
        min,
        avg: sum / history.len() as f64,
        max,
    })
}

/// A sensor value that crossed its warn or danger threshold.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorEvent {
    pub timestamp: i64,
    pub sensor: SensorKey,
    pub value: f64,
    pub severity: Severity,
}

/// Non-`Ok` sensor values from the last `window_ms` before the newest
/// reading, newest first. An empty history has no events.
pub fn recent_events(history: &History, window_ms: i64) -> Vec<SensorEvent> {
    let Some(last) = history.last() else {
        return Vec::new();
    };
    let since = last.timestamp - window_ms.max(0);

    history
        .iter()
        .rev()
        .take_while(|r| r.timestamp >= since)
        .flat_map(|r| {
            SensorKey::ALL.into_iter().filter_map(move |sensor| {
                let value = r.value(sensor);
                let severity = classify_severity(sensor, value);
                (severity != Severity::Ok).then_some(SensorEvent {
                    timestamp: r.timestamp,
                    sensor,
                    value,
                    severity,
                })
            })
        })
        .collect()
}

// ============================================================================
// CHART POINTS
// ============================================================================

/// Display row for a trend chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartPoint {
    /// Local wall-clock time, `HH:MM`
    pub time_label: String,
    pub timestamp: i64,
    pub temperature: f64,
    pub vibration: f64,
    pub friction: f64,
    pub pressure: f64,
    pub stretch: f64,
}

pub fn time_label(timestamp_ms: i64) -> String {
    match Local.timestamp_millis_opt(timestamp_ms).single() {
        Some(t) => t.format("%H:%M").to_string(),
        None => "--:--".to_string(),
    }
}

/// One row per reading, in history order.
pub fn to_chart_points(history: &History) -> Vec<ChartPoint> {
    history
        .iter()
        .map(|r| ChartPoint {
            time_label: time_label(r.timestamp),
            timestamp: r.timestamp,
            temperature: r.temperature,
            vibration: r.vibration,
            friction: r.friction,
            pressure: r.pressure,
            stretch: r.stretch,
        })
        .collect()
}
