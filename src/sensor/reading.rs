use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the five skin sensors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SensorKey {
    Temperature,
    Vibration,
    Friction,
    Pressure,
    Stretch,
}

impl SensorKey {
    pub const ALL: [SensorKey; 5] = [
        SensorKey::Temperature,
        SensorKey::Vibration,
        SensorKey::Friction,
        SensorKey::Pressure,
        SensorKey::Stretch,
    ];

    /// Accepts both the long name and the short wire key.
    pub fn from_name(name: &str) -> Option<SensorKey> {
        match name {
            "temperature" | "temp" => Some(SensorKey::Temperature),
            "vibration" | "vib" => Some(SensorKey::Vibration),
            "friction" | "fric" => Some(SensorKey::Friction),
            "pressure" | "press" => Some(SensorKey::Pressure),
            "stretch" | "str" => Some(SensorKey::Stretch),
            _ => None,
        }
    }

    pub fn short_key(self) -> &'static str {
        match self {
            SensorKey::Temperature => "temp",
            SensorKey::Vibration => "vib",
            SensorKey::Friction => "fric",
            SensorKey::Pressure => "press",
            SensorKey::Stretch => "str",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SensorKey::Temperature => "Temperature",
            SensorKey::Vibration => "Vibration",
            SensorKey::Friction => "Friction",
            SensorKey::Pressure => "Pressure",
            SensorKey::Stretch => "Stretch",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            SensorKey::Temperature => "°C",
            SensorKey::Vibration => "A",
            SensorKey::Friction => "arb",
            SensorKey::Pressure => "N",
            SensorKey::Stretch => "mm",
        }
    }

    /// Valid `(min, max)` range; every stored value is clamped into it.
    pub fn range(self) -> (f64, f64) {
        match self {
            SensorKey::Temperature => (24.0, 34.0),
            SensorKey::Vibration => (0.0, 3.0),
            SensorKey::Friction => (0.0, 30.0),
            SensorKey::Pressure => (0.0, 120.0),
            SensorKey::Stretch => (0.0, 10.0),
        }
    }

    pub fn clamp(self, value: f64) -> f64 {
        let (min, max) = self.range();
        value.clamp(min, max)
    }
}

impl fmt::Display for SensorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// READING
// ============================================================================

/// Timestamped sample of all five sensors for one region.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// Epoch milliseconds
    #[serde(rename = "ts", alias = "timestamp")]
    pub timestamp: i64,
    #[serde(rename = "temp", alias = "temperature")]
    pub temperature: f64,
    #[serde(rename = "vib", alias = "vibration")]
    pub vibration: f64,
    #[serde(rename = "fric", alias = "friction")]
    pub friction: f64,
    #[serde(rename = "press", alias = "pressure")]
    pub pressure: f64,
    #[serde(rename = "str", alias = "stretch")]
    pub stretch: f64,
}

impl Reading {
    pub fn value(&self, key: SensorKey) -> f64 {
        match key {
            SensorKey::Temperature => self.temperature,
            SensorKey::Vibration => self.vibration,
            SensorKey::Friction => self.friction,
            SensorKey::Pressure => self.pressure,
            SensorKey::Stretch => self.stretch,
        }
    }

    /// Clamps every value into its sensor range.
    pub fn clamped(self) -> Reading {
        Reading {
            temperature: SensorKey::Temperature.clamp(self.temperature),
            vibration: SensorKey::Vibration.clamp(self.vibration),
            friction: SensorKey::Friction.clamp(self.friction),
            pressure: SensorKey::Pressure.clamp(self.pressure),
            stretch: SensorKey::Stretch.clamp(self.stretch),
            ..self
        }
    }

    pub fn is_within_ranges(&self) -> bool {
        SensorKey::ALL.iter().all(|&key| {
            let (min, max) = key.range();
            let v = self.value(key);
            v >= min && v <= max
        })
    }
}
