use reqwest::Client;
use std::time::Duration;

/// Build the shared HTTP client used by both collaborators.
///
/// No retry layer: a failed request is reported once and the run
/// aborts, so transient-error retries would change user-visible
/// behavior.
pub fn build_http_client(timeout_secs: u64) -> Client {
    Client::builder()
        .pool_max_idle_per_host(5)
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(10))
        .build()
        .unwrap_or_else(|_| Client::new())
}
