use thiserror::Error;

/// Errors a prediction run can surface to the user.
///
/// Every variant aborts the current run and is reported exactly once;
/// there are no automatic retries. Malformed price rows are not errors:
/// the parser tolerates them with a NaN sentinel.
#[derive(Debug, Error)]
pub enum PredictError {
    /// A required user selection is missing or unusable. Recovered
    /// locally: nothing is fetched and no state is mutated.
    #[error("Invalid selection: {reason}")]
    Validation { reason: String },

    /// Historical data could not be located or fetched for the
    /// instrument. The series cache is left unmodified.
    #[error("Historical data unavailable for '{instrument}': {reason}")]
    DataSource { instrument: String, reason: String },

    /// The prediction service failed: transport error, non-success
    /// response, malformed body, or a response missing the selected
    /// model's entry.
    #[error("Prediction service failure: {reason}")]
    PredictionService { reason: String },
}
