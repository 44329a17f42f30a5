//! Sensor module - Regions, readings, synthetic generation and severity rules

pub mod generator;
pub mod reading;
pub mod region;
pub mod severity;

pub use generator::{SpikeEvents, SyntheticGenerator};
pub use reading::{Reading, SensorKey};
pub use region::Region;
pub use severity::{classify_severity, classify_severity_by_name, Severity, Thresholds};
