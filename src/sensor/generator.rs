use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use super::reading::{Reading, SensorKey};

pub const PRESSURE_SPIKE_PROBABILITY: f64 = 0.06;
pub const VIBRATION_SPIKE_PROBABILITY: f64 = 0.04;

/// Which spikes fired on a reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpikeEvents {
    pub pressure: bool,
    pub vibration: bool,
}

impl SpikeEvents {
    pub fn any(&self) -> bool {
        self.pressure || self.vibration
    }
}

/// Waveform-plus-noise source of synthetic readings.
///
/// The base curves depend only on the sequence index, so two generators fed
/// the same index sequence trace the same waveform; only the noise differs
/// unless both were built from the same seed.
pub struct SyntheticGenerator {
    rng: StdRng,
}

impl SyntheticGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Noise-free curve values at sequence index `i`.
    pub fn baseline(timestamp: i64, i: u64) -> Reading {
        let i = i as f64;
        Reading {
            timestamp,
            temperature: 28.0 + (i / 6.0).sin() * 1.2,
            vibration: 0.4 + (i / 8.0).cos().abs() * 0.8,
            friction: 12.0 + (i / 10.0).sin() * 2.5,
            pressure: 40.0 + (i / 5.0).sin() * 10.0,
            stretch: 2.0 + (i / 7.0).sin() * 0.6,
        }
    }

    pub fn synthetic_reading(&mut self, timestamp: i64, sequence_index: u64) -> Reading {
        let base = Self::baseline(timestamp, sequence_index);

        Reading {
            timestamp,
            temperature: base.temperature + self.noise(0.2),
            vibration: base.vibration + self.noise(0.05),
            friction: base.friction + self.noise(0.3),
            pressure: base.pressure + self.noise(1.2),
            stretch: base.stretch + self.noise(0.05),
        }
        .clamped()
    }

    /// Occasionally boosts pressure and vibration, re-clamping afterwards.
    pub fn inject_spikes(&mut self, reading: &mut Reading) -> SpikeEvents {
        let mut events = SpikeEvents::default();

        if self.rng.gen_bool(PRESSURE_SPIKE_PROBABILITY) {
            let boost = self.rng.gen_range(20.0..60.0);
            reading.pressure = SensorKey::Pressure.clamp(reading.pressure + boost);
            events.pressure = true;
        }
        if self.rng.gen_bool(VIBRATION_SPIKE_PROBABILITY) {
            let boost = self.rng.gen_range(0.6..1.4);
            reading.vibration = SensorKey::Vibration.clamp(reading.vibration + boost);
            events.vibration = true;
        }

        if events.any() {
            debug!(
                pressure = events.pressure,
                vibration = events.vibration,
                "spike injected"
            );
        }
        events
    }

    fn noise(&mut self, amplitude: f64) -> f64 {
        self.rng.gen_range(-amplitude..amplitude)
    }
}
