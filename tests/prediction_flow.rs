use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use stockcast::application::PredictionOrchestrator;
use stockcast::domain::confidence::ConfidenceLabel;
use stockcast::domain::errors::PredictError;
use stockcast::domain::model::PredictionModel;
use stockcast::domain::ports::{HistoricalDataSource, PredictionService};
use stockcast::domain::types::{PredictionResponse, PredictionResult};

/// In-memory historical data source counting how often it is hit.
struct MockDataSource {
    raw: Result<String, String>,
    fetches: AtomicUsize,
}

impl MockDataSource {
    fn serving(raw: &str) -> Self {
        Self {
            raw: Ok(raw.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    fn failing(reason: &str) -> Self {
        Self {
            raw: Err(reason.to_string()),
            fetches: AtomicUsize::new(0),
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl HistoricalDataSource for MockDataSource {
    async fn fetch_series_text(&self, _instrument: &str) -> Result<String> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        match &self.raw {
            Ok(raw) => Ok(raw.clone()),
            Err(reason) => Err(anyhow::anyhow!("{reason}")),
        }
    }
}

/// Prediction service stub returning a fixed keyed response.
struct MockPredictionService {
    predictions: HashMap<String, PredictionResult>,
    requests: AtomicUsize,
}

impl MockPredictionService {
    fn with_entry(model_code: &str, value: f64, confidence: f64) -> Self {
        Self {
            predictions: HashMap::from([(
                model_code.to_string(),
                PredictionResult { value, confidence },
            )]),
            requests: AtomicUsize::new(0),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PredictionService for MockPredictionService {
    async fn predict(
        &self,
        _instrument: &str,
        _model: &PredictionModel,
        _target_date: NaiveDate,
    ) -> Result<PredictionResponse> {
        self.requests.fetch_add(1, Ordering::SeqCst);
        Ok(PredictionResponse {
            predictions: self.predictions.clone(),
        })
    }
}

const RAW_SERIES: &str = "date,close\n2024-01-01,100\n2024-02-01,105\n";

/// Test: full success path produces the summary and a correctly shaped dataset
#[tokio::test]
async fn test_successful_run_builds_outcome() {
    let data_source = Arc::new(MockDataSource::serving(RAW_SERIES));
    let service = Arc::new(MockPredictionService::with_entry("rf", 110.0, 0.55));
    let orchestrator = PredictionOrchestrator::new(data_source.clone(), service.clone());

    let outcome = orchestrator.run("tcs", "rf", "2024-03-15").await.unwrap();

    assert_eq!(outcome.instrument_name, "TCS");
    assert_eq!(outcome.model_name, "Random Forest");
    assert_eq!(outcome.target_date_display, "15 Mar 2024");
    assert_eq!(outcome.predicted_value, 110.0);
    assert_eq!(outcome.confidence, ConfidenceLabel::Medium);

    let dataset = &outcome.dataset;
    assert_eq!(dataset.labels, vec!["2024-01-01", "2024-02-01", "Mar 2024"]);
    assert_eq!(dataset.historical, vec![100.0, 105.0]);
    assert_eq!(dataset.predicted, vec![None, None, Some(110.0)]);

    assert_eq!(data_source.fetch_count(), 1);
    assert_eq!(service.request_count(), 1);
}

/// Test: a missing selection fails validation before any collaborator call
#[tokio::test]
async fn test_validation_failure_attempts_no_fetches() {
    let data_source = Arc::new(MockDataSource::serving(RAW_SERIES));
    let service = Arc::new(MockPredictionService::with_entry("rf", 110.0, 0.9));
    let orchestrator = PredictionOrchestrator::new(data_source.clone(), service.clone());

    let err = orchestrator.run("", "rf", "2024-03-15").await.unwrap_err();

    assert!(matches!(err, PredictError::Validation { .. }));
    assert_eq!(data_source.fetch_count(), 0);
    assert_eq!(service.request_count(), 0);
}

/// Test: the second run for the same instrument is served from the cache
#[tokio::test]
async fn test_series_cache_avoids_second_fetch() {
    let data_source = Arc::new(MockDataSource::serving(RAW_SERIES));
    let service = Arc::new(MockPredictionService::with_entry("lr", 108.0, 0.72));
    let orchestrator = PredictionOrchestrator::new(data_source.clone(), service.clone());

    orchestrator.run("tcs", "lr", "2024-03-15").await.unwrap();
    let outcome = orchestrator.run("tcs", "lr", "2024-04-15").await.unwrap();

    assert_eq!(data_source.fetch_count(), 1);
    assert_eq!(service.request_count(), 2);
    assert_eq!(outcome.confidence, ConfidenceLabel::High);
    assert_eq!(outcome.dataset.labels.last().unwrap(), "Apr 2024");
}

/// Test: a response without the selected model's entry is a service failure
#[tokio::test]
async fn test_missing_model_key_is_service_error() {
    let data_source = Arc::new(MockDataSource::serving(RAW_SERIES));
    let service = Arc::new(MockPredictionService::with_entry("rf", 110.0, 0.9));
    let orchestrator = PredictionOrchestrator::new(data_source, service);

    let err = orchestrator.run("tcs", "dt", "2024-03-15").await.unwrap_err();

    match err {
        PredictError::PredictionService { reason } => assert!(reason.contains("dt")),
        other => panic!("expected PredictionService error, got {other:?}"),
    }
}

/// Test: a data fetch failure aborts the run and leaves nothing cached
#[tokio::test]
async fn test_fetch_failure_leaves_cache_unmodified() {
    let data_source = Arc::new(MockDataSource::failing("connection refused"));
    let service = Arc::new(MockPredictionService::with_entry("rf", 110.0, 0.9));
    let orchestrator = PredictionOrchestrator::new(data_source.clone(), service.clone());

    let err = orchestrator.run("tcs", "rf", "2024-03-15").await.unwrap_err();
    assert!(matches!(err, PredictError::DataSource { .. }));
    assert_eq!(service.request_count(), 0);

    // A second run retries the fetch: the failed run cached nothing.
    let _ = orchestrator.run("tcs", "rf", "2024-03-15").await;
    assert_eq!(data_source.fetch_count(), 2);
}

/// Test: an unrecognized model code passes through as its display name
#[tokio::test]
async fn test_unknown_model_code_passes_through() {
    let data_source = Arc::new(MockDataSource::serving(RAW_SERIES));
    let service = Arc::new(MockPredictionService::with_entry("xgb", 120.0, 0.35));
    let orchestrator = PredictionOrchestrator::new(data_source, service);

    let outcome = orchestrator.run("hdfc", "xgb", "2024-05-01").await.unwrap();

    assert_eq!(outcome.model_name, "xgb");
    assert_eq!(outcome.confidence, ConfidenceLabel::Low);
}

/// Test: malformed price rows survive as NaN points end to end
#[tokio::test]
async fn test_malformed_row_tolerated_in_dataset() {
    let raw = "date,close\n2024-01-01,100\n\n2024-01-02,bad\n";
    let data_source = Arc::new(MockDataSource::serving(raw));
    let service = Arc::new(MockPredictionService::with_entry("rf", 102.0, 0.5));
    let orchestrator = PredictionOrchestrator::new(data_source, service);

    let outcome = orchestrator.run("itc", "rf", "2024-03-15").await.unwrap();

    let dataset = &outcome.dataset;
    assert_eq!(dataset.labels, vec!["2024-01-01", "2024-01-02", "Mar 2024"]);
    assert_eq!(dataset.historical[0], 100.0);
    assert!(dataset.historical[1].is_nan());
}
