// Chart dataset assembly
pub mod chart;

// Confidence classification
pub mod confidence;

// Domain-specific error types
pub mod errors;

// Prediction model vocabulary
pub mod model;

// Port interfaces
pub mod ports;

// Core price/prediction types
pub mod types;
