//! Stockcast CLI - one prediction run per invocation
//!
//! Acts as the display collaborator: collects the user's selections,
//! runs the prediction workflow once, and prints the summary and chart
//! dataset to stdout.
//!
//! # Usage
//! ```sh
//! stockcast --instrument tcs --model rf --date 2024-03-15
//! ```
//!
//! # Environment Variables
//! - `HISTORICAL_DATA_BASE_URL` - Base URL serving the per-instrument CSV files
//! - `PREDICTION_SERVICE_URL` - Prediction service base URL (default: http://localhost:5000)
//! - `INSTRUMENTS` - Catalog override, comma-separated `code=file.csv` pairs

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use stockcast::application::PredictionOrchestrator;
use stockcast::config::Config;
use stockcast::domain::types::PredictionOutcome;
use stockcast::infrastructure::http_client::build_http_client;
use stockcast::infrastructure::{HttpHistoricalDataSource, HttpPredictionService};
use tracing::{Level, info};
use tracing_subscriber::prelude::*;

#[derive(Debug, Parser)]
#[command(name = "stockcast", about = "Render a price history with one predicted point")]
struct Args {
    /// Instrument code, e.g. tcs
    #[arg(long)]
    instrument: String,

    /// Model code: lr, dt, or rf
    #[arg(long)]
    model: String,

    /// Target date, YYYY-MM-DD
    #[arg(long)]
    date: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let stdout_layer = tracing_subscriber::fmt::layer().with_target(false);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive(Level::WARN.into()))
        .with(stdout_layer)
        .init();

    let args = Args::parse();
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: data={}, prediction={}",
        config.historical_data_base_url, config.prediction_service_url
    );

    let client = build_http_client(config.http_timeout_secs);
    let data_source = Arc::new(HttpHistoricalDataSource::new(
        client.clone(),
        config.historical_data_base_url.clone(),
        config.instrument_files.clone(),
    ));
    let prediction_service = Arc::new(HttpPredictionService::new(
        client,
        config.prediction_service_url.clone(),
    ));

    let orchestrator = PredictionOrchestrator::new(data_source, prediction_service);

    let outcome = orchestrator
        .run(&args.instrument, &args.model, &args.date)
        .await?;

    print_outcome(&outcome);
    Ok(())
}

fn print_outcome(outcome: &PredictionOutcome) {
    println!("Stock:       {}", outcome.instrument_name);
    println!("Model:       {}", outcome.model_name);
    println!("Target date: {}", outcome.target_date_display);
    println!("Prediction:  {:.2}", outcome.predicted_value);
    println!("Confidence:  {}", outcome.confidence);
    println!();
    println!("{:<12} {:>12} {:>12}", "Label", "Historical", "Predicted");

    let dataset = &outcome.dataset;
    for (i, label) in dataset.labels.iter().enumerate() {
        let historical = dataset
            .historical
            .get(i)
            .map_or(String::new(), |v| format!("{v:.2}"));
        let predicted = dataset.predicted[i].map_or(String::new(), |v| format!("{v:.2}"));
        println!("{label:<12} {historical:>12} {predicted:>12}");
    }
}
