use crate::domain::{RateRecord, RateReport};
use crate::error::AggregateError;

/// Sorts records by value and reports the extremes and the mean.
///
/// The sort is not stable: which of several equal values is reported as the
/// maximum or minimum is unspecified.
pub fn summarize(mut records: Vec<RateRecord>) -> Result<RateReport, AggregateError> {
    records.sort_unstable_by(|a, b| a.value.total_cmp(&b.value));

    let (Some(min), Some(max)) = (records.first(), records.last()) else {
        return Err(AggregateError::NoRecords);
    };

    let count = records.len();
    let sum: f64 = records.iter().map(|record| record.value).sum();

    Ok(RateReport {
        max: max.clone(),
        min: min.clone(),
        mean: sum / count as f64,
        count,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd(date: &str, value: f64) -> RateRecord {
        RateRecord::new(date, "USD", "US Dollar", value)
    }

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(summarize(Vec::new()), Err(AggregateError::NoRecords));
    }

    #[test]
    fn single_record_is_max_min_and_mean() {
        let report = summarize(vec![usd("01.03.2024", 91.25)]).expect("must summarize");

        assert_eq!(report.max, report.min);
        assert_eq!(report.max.value, 91.25);
        assert_eq!(report.mean, 91.25);
        assert_eq!(report.count, 1);
    }

    #[test]
    fn uniform_values_collapse() {
        let records = (1..=5)
            .map(|day| usd(&format!("0{day}.03.2024"), 75.5))
            .collect();

        let report = summarize(records).expect("must summarize");

        assert_eq!(report.max.value, 75.5);
        assert_eq!(report.min.value, 75.5);
        assert_eq!(report.mean, 75.5);
    }

    #[test]
    fn picks_extremes_across_currencies() {
        let records = vec![
            usd("02.03.2024", 91.0),
            RateRecord::new("02.03.2024", "KZT", "Казахстанских тенге", 20.3),
            RateRecord::new("01.03.2024", "EUR", "Евро", 99.5),
            usd("01.03.2024", 90.0),
        ];

        let report = summarize(records).expect("must summarize");

        assert_eq!(report.max.char_code, "EUR");
        assert_eq!(report.min.char_code, "KZT");
        assert_eq!(report.count, 4);
        assert!((report.mean - 75.2).abs() < 1e-9);
    }
}
