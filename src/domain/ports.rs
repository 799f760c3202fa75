use crate::domain::model::PredictionModel;
use crate::domain::types::PredictionResponse;
use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;

// Need async_trait for async functions in traits
#[async_trait]
pub trait HistoricalDataSource: Send + Sync {
    /// Fetch the raw tabular series text for one instrument.
    ///
    /// Read-only: the source is never written to. An unknown instrument
    /// or transport failure is an error; parsing is the caller's job.
    async fn fetch_series_text(&self, instrument: &str) -> Result<String>;
}

#[async_trait]
pub trait PredictionService: Send + Sync {
    /// Request predictions for an instrument and target date.
    ///
    /// Returns the full response keyed by model identifier; the workflow
    /// extracts the entry for the selected model.
    async fn predict(
        &self,
        instrument: &str,
        model: &PredictionModel,
        target_date: NaiveDate,
    ) -> Result<PredictionResponse>;
}
