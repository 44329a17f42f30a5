use std::fmt;

use serde::Serialize;

use super::reading::{Reading, SensorKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Ok,
    Warn,
    Danger,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Ok => write!(f, "ok"),
            Severity::Warn => write!(f, "warn"),
            Severity::Danger => write!(f, "danger"),
        }
    }
}

/// Warn/danger pair for one sensor. Both bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    pub warn: f64,
    pub danger: f64,
}

impl Thresholds {
    pub fn for_sensor(key: SensorKey) -> Thresholds {
        let (warn, danger) = match key {
            SensorKey::Temperature => (31.0, 33.0),
            SensorKey::Vibration => (1.6, 2.2),
            SensorKey::Friction => (18.0, 24.0),
            SensorKey::Pressure => (70.0, 95.0),
            SensorKey::Stretch => (3.2, 4.2),
        };
        Thresholds { warn, danger }
    }

    pub fn classify(&self, value: f64) -> Severity {
        if value >= self.danger {
            Severity::Danger
        } else if value >= self.warn {
            Severity::Warn
        } else {
            Severity::Ok
        }
    }
}

pub fn classify_severity(key: SensorKey, value: f64) -> Severity {
    Thresholds::for_sensor(key).classify(value)
}

/// Name-based lookup; unknown sensor names classify as `Ok`.
pub fn classify_severity_by_name(name: &str, value: f64) -> Severity {
    match SensorKey::from_name(name) {
        Some(key) => classify_severity(key, value),
        None => Severity::Ok,
    }
}

/// Worst severity across all sensors of a reading.
pub fn worst_severity(reading: &Reading) -> Severity {
    SensorKey::ALL
        .iter()
        .map(|&key| classify_severity(key, reading.value(key)))
        .max()
        .unwrap_or(Severity::Ok)
}

/// Number of sensors of a reading that are not `Ok`.
pub fn alert_count(reading: &Reading) -> usize {
    SensorKey::ALL
        .iter()
        .filter(|&&key| classify_severity(key, reading.value(key)) != Severity::Ok)
        .count()
}
