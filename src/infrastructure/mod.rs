// Per-instrument CSV fetch over HTTP
pub mod historical_data;

// Shared HTTP client construction
pub mod http_client;

// Prediction service client
pub mod prediction_client;

pub use historical_data::HttpHistoricalDataSource;
pub use prediction_client::HttpPredictionService;
