use crate::domain::model::PredictionModel;
use crate::domain::ports::PredictionService;
use crate::domain::types::PredictionResponse;
use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::Client;
use tracing::debug;

/// HTTP client for the external prediction service.
///
/// Issues a single GET per run; failures are reported to the caller
/// without retry.
pub struct HttpPredictionService {
    client: Client,
    base_url: String,
}

impl HttpPredictionService {
    pub fn new(client: Client, base_url: String) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl PredictionService for HttpPredictionService {
    async fn predict(
        &self,
        instrument: &str,
        model: &PredictionModel,
        target_date: NaiveDate,
    ) -> Result<PredictionResponse> {
        let url = format!("{}/predict", self.base_url);
        debug!(
            "Requesting prediction: stock={}, model={}, date={}",
            instrument,
            model.code(),
            target_date
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("stock", instrument),
                ("model", model.code()),
                ("date", &target_date.to_string()),
            ])
            .send()
            .await
            .context("prediction service request failed")?;

        let status = response.status();
        if !status.is_success() {
            anyhow::bail!("prediction service returned HTTP {status}");
        }

        response
            .json::<PredictionResponse>()
            .await
            .context("malformed prediction service response")
    }
}
