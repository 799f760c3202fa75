use crate::domain::ports::HistoricalDataSource;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use tracing::debug;

/// Historical data source backed by per-instrument CSV resources over
/// HTTP.
///
/// The catalog is the fixed mapping from instrument code to resource
/// file name; an instrument outside the catalog has no data and the
/// fetch fails before any request is made.
pub struct HttpHistoricalDataSource {
    client: Client,
    base_url: String,
    catalog: HashMap<String, String>,
}

impl HttpHistoricalDataSource {
    pub fn new(client: Client, base_url: String, catalog: HashMap<String, String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            catalog,
        }
    }
}

#[async_trait]
impl HistoricalDataSource for HttpHistoricalDataSource {
    async fn fetch_series_text(&self, instrument: &str) -> Result<String> {
        let file = self
            .catalog
            .get(instrument)
            .with_context(|| format!("no data file registered for instrument '{instrument}'"))?;

        let url = format!("{}/{}", self.base_url, file);
        debug!("Fetching historical series from {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("historical data request to {url} failed"))?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("historical data request to {url} returned HTTP {status}");
        }

        response
            .text()
            .await
            .context("failed to read historical data body")
    }
}
