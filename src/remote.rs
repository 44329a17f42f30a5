//! Remote module - Historical readings from the backend API

use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use crate::error::{Result, TelemetryError};
use crate::sensor::{Reading, Region};

/// Client for `GET {base}/readings?part=&from=&to=`.
///
/// Independent of the synthetic store; no retries.
pub struct ReadingsClient {
    client: Client,
    base_url: String,
}

impl ReadingsClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Uses a caller-configured HTTP client (proxy, TLS, timeouts).
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Readings of `region`, optionally bounded by epoch-millisecond `from`/`to`.
    pub async fn get_readings(
        &self,
        region: Region,
        from: Option<i64>,
        to: Option<i64>,
    ) -> Result<Vec<Reading>> {
        let url = format!("{}/readings", self.base_url);

        let mut query = vec![("part", region.id().to_string())];
        if let Some(from) = from {
            query.push(("from", from.to_string()));
        }
        if let Some(to) = to {
            query.push(("to", to.to_string()));
        }

        let response = self.client.get(&url).query(&query).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(TelemetryError::Api {
                status: status.as_u16(),
            });
        }

        let readings: Vec<Reading> = response.json().await?;
        debug!(%region, count = readings.len(), "fetched remote readings");
        Ok(readings)
    }
}
