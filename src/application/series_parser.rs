use crate::domain::types::PricePoint;
use tracing::warn;

/// Parse raw line-oriented tabular text into an ordered price series.
///
/// Line 1 is a header and is dropped unconditionally. Blank and
/// whitespace-only lines are skipped. Each remaining line is split on
/// the first comma into date and close; columns beyond the second are
/// ignored. A close field that does not parse as a number yields a NaN
/// sentinel for that point rather than a failure, so the output always
/// holds exactly one point per data line, in source order.
pub fn parse_series(raw: &str) -> Vec<PricePoint> {
    raw.lines()
        .skip(1)
        .filter(|line| !line.trim().is_empty())
        .map(parse_row)
        .collect()
}

fn parse_row(line: &str) -> PricePoint {
    let (date, rest) = line.split_once(',').unwrap_or((line, ""));
    let close_field = rest.split(',').next().unwrap_or("").trim();

    let close = close_field.parse::<f64>().unwrap_or_else(|_| {
        warn!("Unparseable close price '{}' in row '{}'", close_field, line);
        f64::NAN
    });

    PricePoint::new(date.trim(), close)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_point_per_data_line_in_source_order() {
        let raw = "date,close\n2024-01-01,100\n2024-01-02,101.5\n2024-01-03,99.25\n";
        let points = parse_series(raw);

        assert_eq!(points.len(), 3);
        assert_eq!(points[0], PricePoint::new("2024-01-01", 100.0));
        assert_eq!(points[1], PricePoint::new("2024-01-02", 101.5));
        assert_eq!(points[2], PricePoint::new("2024-01-03", 99.25));
    }

    #[test]
    fn test_blank_lines_skipped_and_bad_close_becomes_nan() {
        let raw = "date,close\n2024-01-01,100\n\n2024-01-02,bad\n";
        let points = parse_series(raw);

        assert_eq!(points.len(), 2);
        assert_eq!(points[0], PricePoint::new("2024-01-01", 100.0));
        assert_eq!(points[1].date, "2024-01-02");
        assert!(points[1].close.is_nan());
    }

    #[test]
    fn test_header_dropped_unconditionally() {
        // A header that looks like data is still discarded
        let raw = "2024-01-01,100\n2024-01-02,101\n";
        let points = parse_series(raw);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2024-01-02");
    }

    #[test]
    fn test_extra_columns_ignored() {
        let raw = "date,close,open,volume\n2024-01-01,100,99,125000\n";
        let points = parse_series(raw);

        assert_eq!(points, vec![PricePoint::new("2024-01-01", 100.0)]);
    }

    #[test]
    fn test_fields_are_trimmed() {
        let raw = "date,close\n 2024-01-01 , 100.5 \n";
        let points = parse_series(raw);

        assert_eq!(points, vec![PricePoint::new("2024-01-01", 100.5)]);
    }

    #[test]
    fn test_row_without_close_field_becomes_nan() {
        let raw = "date,close\n2024-01-01\n";
        let points = parse_series(raw);

        assert_eq!(points.len(), 1);
        assert_eq!(points[0].date, "2024-01-01");
        assert!(points[0].close.is_nan());
    }

    #[test]
    fn test_empty_and_header_only_input() {
        assert!(parse_series("").is_empty());
        assert!(parse_series("date,close\n").is_empty());
    }
}
