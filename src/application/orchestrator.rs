use crate::application::series_cache::SeriesCache;
use crate::application::series_parser::parse_series;
use crate::domain::chart::build_dataset;
use crate::domain::confidence::classify;
use crate::domain::errors::PredictError;
use crate::domain::model::PredictionModel;
use crate::domain::ports::{HistoricalDataSource, PredictionService};
use crate::domain::types::{PredictionOutcome, PricePoint};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Top-level prediction workflow.
///
/// One call to [`run`](Self::run) walks a single user action through
/// validation, series loading, the prediction request, and render
/// assembly. Stages are strictly sequential; the only suspension points
/// are the two collaborator calls. Overlapping runs are not coordinated:
/// the cache write is an idempotent last-writer-wins overwrite, and the
/// display collaborator sees whichever run finishes last.
pub struct PredictionOrchestrator {
    cache: SeriesCache,
    data_source: Arc<dyn HistoricalDataSource>,
    prediction_service: Arc<dyn PredictionService>,
}

impl PredictionOrchestrator {
    pub fn new(
        data_source: Arc<dyn HistoricalDataSource>,
        prediction_service: Arc<dyn PredictionService>,
    ) -> Self {
        Self {
            cache: SeriesCache::new(),
            data_source,
            prediction_service,
        }
    }

    /// Run one prediction for the given user selections.
    ///
    /// Every error aborts the run and is surfaced once; the orchestrator
    /// is immediately ready for a new run.
    pub async fn run(
        &self,
        instrument: &str,
        model_code: &str,
        date: &str,
    ) -> Result<PredictionOutcome, PredictError> {
        // Validating
        let (instrument, model, target_date) = validate_selections(instrument, model_code, date)?;
        info!(
            "Prediction run: instrument={}, model={}, date={}",
            instrument,
            model.code(),
            target_date
        );

        // Loading
        let points = self.load_series(&instrument).await?;

        // Requesting
        let response = self
            .prediction_service
            .predict(&instrument, &model, target_date)
            .await
            .map_err(|e| PredictError::PredictionService {
                reason: format!("{e:#}"),
            })?;

        let result = response.predictions.get(model.code()).copied().ok_or_else(|| {
            PredictError::PredictionService {
                reason: format!("response has no entry for model '{}'", model.code()),
            }
        })?;

        // Rendering
        let confidence = classify(result.confidence * 100.0);
        let dataset = build_dataset(&points, result.value, target_date);
        info!(
            "Prediction ready: {} via {} -> {:.2} ({})",
            instrument,
            model.full_name(),
            result.value,
            confidence
        );

        Ok(PredictionOutcome {
            instrument_name: instrument.to_uppercase(),
            model_name: model.full_name().to_string(),
            target_date_display: target_date.format("%d %b %Y").to_string(),
            predicted_value: result.value,
            confidence,
            dataset,
        })
    }

    /// Cached series for the instrument, fetching and parsing on a miss.
    ///
    /// Write-through: a freshly parsed series is stored before the run
    /// proceeds. A fetch failure leaves the cache unmodified.
    async fn load_series(&self, instrument: &str) -> Result<Vec<PricePoint>, PredictError> {
        if let Some(points) = self.cache.get(instrument) {
            debug!("SeriesCache hit for {}", instrument);
            return Ok(points);
        }

        let raw = self
            .data_source
            .fetch_series_text(instrument)
            .await
            .map_err(|e| PredictError::DataSource {
                instrument: instrument.to_string(),
                reason: format!("{e:#}"),
            })?;

        let points = parse_series(&raw);
        if points.is_empty() {
            warn!("Historical series for {} parsed to zero points", instrument);
        }
        self.cache.put(instrument.to_string(), points.clone());
        Ok(points)
    }
}

/// Check the three user selections and parse the target date.
///
/// All three must be non-empty after trimming; the date must be a valid
/// `YYYY-MM-DD` calendar date. Nothing is fetched before this passes.
fn validate_selections(
    instrument: &str,
    model_code: &str,
    date: &str,
) -> Result<(String, PredictionModel, NaiveDate), PredictError> {
    let instrument = instrument.trim();
    let model_code = model_code.trim();
    let date = date.trim();

    if instrument.is_empty() || model_code.is_empty() || date.is_empty() {
        return Err(PredictError::Validation {
            reason: "instrument, model, and date are all required".to_string(),
        });
    }

    let target_date =
        NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|_| PredictError::Validation {
            reason: format!("'{date}' is not a valid YYYY-MM-DD date"),
        })?;

    Ok((
        instrument.to_string(),
        PredictionModel::from(model_code),
        target_date,
    ))
}
