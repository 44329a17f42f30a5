//! Error module - Failure cases of the telemetry engine

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TelemetryError>;

#[derive(Error, Debug)]
pub enum TelemetryError {
    /// Region identifier outside the fixed set
    #[error("unknown region: {0}")]
    UnknownRegion(String),

    /// Summary requested for a history with no readings
    #[error("history is empty")]
    EmptyHistory,

    /// Backend answered with a non-success status
    #[error("failed to fetch readings: backend returned {status}")]
    Api { status: u16 },

    /// Transport or decoding failure talking to the backend
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("failed to read config: {0}")]
    ConfigRead(std::io::Error),

    #[error("failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("chart rendering failed: {0}")]
    Chart(String),
}
