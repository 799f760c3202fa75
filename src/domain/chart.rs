use crate::domain::types::PricePoint;
use chrono::NaiveDate;

/// Renderable two-series chart data over a shared label axis.
///
/// The historical series covers every historical label; the predicted
/// series is `None` everywhere except the final synthetic label, which
/// holds the single predicted value. `labels` and `predicted` are always
/// one longer than `historical`.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub labels: Vec<String>,
    pub historical: Vec<f64>,
    pub predicted: Vec<Option<f64>>,
}

/// Compose the historical series and one predicted point into a dataset.
///
/// Historical labels keep source order; the predicted label is the target
/// date reduced to month/year granularity (the prediction is a
/// monthly-horizon estimate). The predicted point is always appended
/// last, regardless of where the target date falls relative to the
/// historical range. No chronological merge is attempted; that is
/// intentional product behavior.
pub fn build_dataset(
    historical: &[PricePoint],
    predicted_value: f64,
    target_date: NaiveDate,
) -> ChartDataset {
    let mut labels: Vec<String> = historical.iter().map(|p| p.date.clone()).collect();
    labels.push(target_date.format("%b %Y").to_string());

    let prices: Vec<f64> = historical.iter().map(|p| p.close).collect();

    let mut predicted: Vec<Option<f64>> = vec![None; historical.len()];
    predicted.push(Some(predicted_value));

    ChartDataset {
        labels,
        historical: prices,
        predicted,
    }
}
