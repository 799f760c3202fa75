use crate::domain::chart::ChartDataset;
use crate::domain::confidence::ConfidenceLabel;
use serde::Deserialize;
use std::collections::HashMap;

/// A single historical closing price.
///
/// The date is kept as the raw label text from the source row (trimmed).
/// Rows are kept in source order; no re-sorting is performed, so an
/// unordered source produces an unordered series.
#[derive(Debug, Clone, PartialEq)]
pub struct PricePoint {
    pub date: String,
    pub close: f64,
}

impl PricePoint {
    pub fn new(date: impl Into<String>, close: f64) -> Self {
        Self {
            date: date.into(),
            close,
        }
    }
}

/// One model's prediction as reported by the prediction service.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PredictionResult {
    /// Predicted closing price
    pub value: f64,
    /// Model-reported certainty in [0, 1]
    pub confidence: f64,
}

/// Prediction service response, keyed by model identifier.
///
/// The workflow extracts exactly the entry for the selected model; a
/// missing key is a service-level failure, not a default.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    pub predictions: HashMap<String, PredictionResult>,
}

/// Final render instruction handed to the display collaborator.
///
/// Carries the summary fields shown next to the chart plus the dataset
/// itself. Assembled once per successful run; the display surface does
/// no further computation.
#[derive(Debug, Clone)]
pub struct PredictionOutcome {
    /// Instrument display name (upper-cased code)
    pub instrument_name: String,
    /// Full model name, e.g. "Random Forest"
    pub model_name: String,
    /// Target date formatted for display, e.g. "15 Mar 2024"
    pub target_date_display: String,
    pub predicted_value: f64,
    pub confidence: ConfidenceLabel,
    pub dataset: ChartDataset,
}
