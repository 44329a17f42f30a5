//! Runtime configuration loaded from TOML

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

use crate::error::{Result, TelemetryError};

pub const API_BASE_URL_ENV: &str = "SMART_SKIN_API_BASE_URL";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TelemetryConfig {
    /// Period between ticks
    pub interval_ms: u64,
    /// When false the store is never advanced
    pub realtime: bool,
    /// Readings synthesized per region at startup
    pub backfill_points: usize,
    pub api_base_url: String,
    /// Fixed RNG seed; random when absent
    pub seed: Option<u64>,
    /// Spotlight dwell per region
    pub dwell_ms: u64,
    /// Spotlight pause after a user interaction
    pub idle_ms: u64,
    pub notice_buffer: usize,
    pub run_secs: u64,
    pub chart_dir: Option<String>,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            interval_ms: 3000,
            realtime: true,
            backfill_points: 60,
            api_base_url: "http://localhost:3000/api".to_string(),
            seed: None,
            dwell_ms: 2200,
            idle_ms: 5000,
            notice_buffer: 64,
            run_secs: 30,
            chart_dir: None,
        }
    }
}

impl TelemetryConfig {
    pub fn from_toml(s: &str) -> Result<Self> {
        Ok(toml::from_str(s)?)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.max(1))
    }

    pub fn dwell(&self) -> Duration {
        Duration::from_millis(self.dwell_ms.max(1))
    }

    pub fn idle(&self) -> Duration {
        Duration::from_millis(self.idle_ms)
    }

    /// Applies `SMART_SKIN_API_BASE_URL` when set and non-empty.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(url) = std::env::var(API_BASE_URL_ENV) {
            if !url.trim().is_empty() {
                self.api_base_url = url.trim().to_string();
            }
        }
        self
    }
}

pub fn load_config(path: impl AsRef<Path>) -> Result<TelemetryConfig> {
    let text = std::fs::read_to_string(path).map_err(TelemetryError::ConfigRead)?;
    TelemetryConfig::from_toml(&text)
}

/// Like [`load_config`], but falls back to defaults on any error.
pub fn load_or_default(path: impl AsRef<Path>) -> TelemetryConfig {
    let path = path.as_ref();
    match load_config(path) {
        Ok(cfg) => cfg,
        Err(e) => {
            warn!(path = %path.display(), error = %e, "using default config");
            TelemetryConfig::default()
        }
    }
}
