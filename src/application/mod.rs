// Prediction workflow
pub mod orchestrator;

// Per-session parsed series cache
pub mod series_cache;

// Raw tabular text -> PricePoint sequence
pub mod series_parser;

pub use orchestrator::PredictionOrchestrator;
pub use series_cache::SeriesCache;
