use anyhow::Result;
use std::collections::HashMap;
use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL the per-instrument CSV files are served from
    pub historical_data_base_url: String,
    /// Base URL of the prediction service
    pub prediction_service_url: String,
    pub http_timeout_secs: u64,
    /// Instrument code -> CSV resource name
    pub instrument_files: HashMap<String, String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let historical_data_base_url = env::var("HISTORICAL_DATA_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());

        let prediction_service_url = env::var("PREDICTION_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:5000".to_string());

        let http_timeout_secs = env::var("HTTP_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse::<u64>()
            .unwrap_or(30);

        let instrument_files = match env::var("INSTRUMENTS") {
            Ok(spec) => parse_instrument_catalog(&spec),
            Err(_) => default_instrument_catalog(),
        };

        Ok(Self {
            historical_data_base_url,
            prediction_service_url,
            http_timeout_secs,
            instrument_files,
        })
    }
}

/// Built-in instrument catalog matching the served CSV files.
fn default_instrument_catalog() -> HashMap<String, String> {
    [
        ("tcs", "tcs.csv"),
        ("infosys", "infy.csv"),
        ("itc", "itc.csv"),
        ("yesbank", "yes.csv"),
        ("hdfc", "hdfc.csv"),
    ]
    .into_iter()
    .map(|(code, file)| (code.to_string(), file.to_string()))
    .collect()
}

/// Parse an `INSTRUMENTS` override: comma-separated `code=file.csv`
/// pairs. Malformed pairs are skipped with a warning rather than
/// failing startup.
fn parse_instrument_catalog(spec: &str) -> HashMap<String, String> {
    let mut catalog = HashMap::new();
    for entry in spec.split(',') {
        let entry = entry.trim();
        if entry.is_empty() {
            continue;
        }
        match entry.split_once('=') {
            Some((code, file)) if !code.trim().is_empty() && !file.trim().is_empty() => {
                catalog.insert(code.trim().to_string(), file.trim().to_string());
            }
            _ => warn!("Ignoring malformed INSTRUMENTS entry: '{}'", entry),
        }
    }
    catalog
}
