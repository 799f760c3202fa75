use std::fmt;

/// Qualitative confidence bucket derived from a model's confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfidenceLabel {
    High,
    Medium,
    Low,
}

impl fmt::Display for ConfidenceLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfidenceLabel::High => write!(f, "High"),
            ConfidenceLabel::Medium => write!(f, "Medium"),
            ConfidenceLabel::Low => write!(f, "Low"),
        }
    }
}

/// Classify a confidence percentage into a discrete label.
///
/// Boundaries are inclusive on the upper bucket: 70 is High, 40 is
/// Medium. Total over all inputs; NaN falls through to Low.
pub fn classify(percentage: f64) -> ConfidenceLabel {
    if percentage >= 70.0 {
        ConfidenceLabel::High
    } else if percentage >= 40.0 {
        ConfidenceLabel::Medium
    } else {
        ConfidenceLabel::Low
    }
}
