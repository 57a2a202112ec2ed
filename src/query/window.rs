//! Dataset window resolution
//!
//! Time windows are computed from the data, not from wall-clock time: the
//! anchor is always the most recent date recorded anywhere in the dataset.

use crate::query::error::{QueryError, QueryResult};
use crate::store::RecordStore;
use chrono::{Duration, NaiveDate};

/// Maximum measurement date over the entire dataset.
///
/// Fails with [`QueryError::EmptyDataset`] when no measurements exist.
pub fn most_recent_date(store: &RecordStore) -> QueryResult<NaiveDate> {
    store
        .measurement_dates()
        .max()
        .ok_or(QueryError::EmptyDataset)
}

/// Start of a fixed-length lookback window ending at `reference`.
///
/// Calendar subtraction; not clamped to any station's data.
pub fn lookback_window(reference: NaiveDate, days: i64) -> NaiveDate {
    reference - Duration::days(days)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Measurement;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_most_recent_date_is_dataset_wide() {
        let store = RecordStore::from_records(
            vec![
                Measurement::new("A", date("2017-08-23")),
                Measurement::new("B", date("2017-08-20")),
                Measurement::new("A", date("2010-01-01")),
            ],
            vec![],
        );
        assert_eq!(most_recent_date(&store).unwrap(), date("2017-08-23"));
    }

    #[test]
    fn test_most_recent_date_empty_dataset() {
        let store = RecordStore::from_records(vec![], vec![]);
        assert!(matches!(
            most_recent_date(&store),
            Err(QueryError::EmptyDataset)
        ));
    }

    #[test]
    fn test_lookback_is_calendar_subtraction() {
        // 365 calendar days back from 2017-08-23, not 365*24h
        assert_eq!(
            lookback_window(date("2017-08-23"), 365),
            date("2016-08-23")
        );
        // Crosses a leap day
        assert_eq!(
            lookback_window(date("2016-08-23"), 365),
            date("2015-08-24")
        );
    }
}
