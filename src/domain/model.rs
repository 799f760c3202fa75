use std::fmt;

/// Prediction model vocabulary.
///
/// The service understands a fixed set of short codes; anything else is
/// carried through unchanged and displayed as-is rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PredictionModel {
    LinearRegression,
    DecisionTree,
    RandomForest,
    Other(String),
}

impl PredictionModel {
    /// Short code used on the wire and as the response key.
    pub fn code(&self) -> &str {
        match self {
            PredictionModel::LinearRegression => "lr",
            PredictionModel::DecisionTree => "dt",
            PredictionModel::RandomForest => "rf",
            PredictionModel::Other(code) => code,
        }
    }

    /// Human-readable model name for the summary panel.
    pub fn full_name(&self) -> &str {
        match self {
            PredictionModel::LinearRegression => "Linear Regression",
            PredictionModel::DecisionTree => "Decision Tree",
            PredictionModel::RandomForest => "Random Forest",
            PredictionModel::Other(code) => code,
        }
    }
}

impl From<&str> for PredictionModel {
    fn from(code: &str) -> Self {
        match code {
            "lr" => PredictionModel::LinearRegression,
            "dt" => PredictionModel::DecisionTree,
            "rf" => PredictionModel::RandomForest,
            other => PredictionModel::Other(other.to_string()),
        }
    }
}

impl fmt::Display for PredictionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.full_name())
    }
}
