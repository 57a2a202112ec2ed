//! Query Engine
//!
//! The four derived-view computations over the record store, plus the two
//! date-bounded aggregation entry points. Each operation is an independent
//! bounded scan over the immutable dataset; the engine holds no mutable
//! state and can serve any number of concurrent requests.
//!
//! Grouped results use `BTreeMap<NaiveDate, _>`: the underlying scan is
//! already date-ascending, so tree order equals scan/insertion order and the
//! serialized output is ascending by date.

use crate::query::error::{QueryError, QueryResult};
use crate::query::validate::{parse_date, validate_date};
use crate::query::window;
use crate::store::{RecordStore, Station};
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// One entry in the flat precipitation listing: the sequence alternates
/// date and value tokens (date, value, date, value, ...).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PrecipToken {
    Date(NaiveDate),
    Value(Option<f64>),
}

/// Per-date aggregate over temperature observations.
///
/// `station` is an arbitrary representative from the date group: grouping
/// discards per-row station identity except one survivor (here, the first
/// row scanned for the date). Consumers must not rely on which station it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateAggregate {
    pub date: NaiveDate,
    pub station: String,
    pub min: i32,
    pub max: i32,
    pub average: f64,
}

/// Query engine over an immutable record store.
///
/// The reference station and lookback length for rolling-window queries are
/// configuration, supplied at construction.
pub struct QueryEngine {
    store: Arc<RecordStore>,
    reference_station: String,
    lookback_days: i64,
}

impl QueryEngine {
    /// Create a new query engine
    pub fn new(
        store: Arc<RecordStore>,
        reference_station: impl Into<String>,
        lookback_days: i64,
    ) -> Self {
        Self {
            store,
            reference_station: reference_station.into(),
            lookback_days,
        }
    }

    /// The station code used for rolling-window queries
    pub fn reference_station(&self) -> &str {
        &self.reference_station
    }

    /// Grouped precipitation: date → ordered precipitation values recorded
    /// on that date across all stations.
    ///
    /// Raw fan-out grouping, no aggregation: duplicates are preserved in
    /// scan order and missing values stay in the sequence as `None`.
    pub fn grouped_precipitation(&self) -> BTreeMap<NaiveDate, Vec<Option<f64>>> {
        let mut grouped: BTreeMap<NaiveDate, Vec<Option<f64>>> = BTreeMap::new();
        for m in self.store.measurements() {
            grouped.entry(m.date).or_default().push(m.precipitation);
        }
        grouped
    }

    /// Flat precipitation listing: the same scan flattened into a single
    /// ordered sequence alternating date and value tokens.
    pub fn daily_precipitation(&self) -> Vec<PrecipToken> {
        let mut tokens = Vec::with_capacity(self.store.measurements().len() * 2);
        for m in self.store.measurements() {
            tokens.push(PrecipToken::Date(m.date));
            tokens.push(PrecipToken::Value(m.precipitation));
        }
        tokens
    }

    /// Station directory
    pub fn stations(&self) -> &[Station] {
        self.store.stations()
    }

    /// Rolling-window observations for the reference station: date →
    /// temperature observation over the lookback window ending at the most
    /// recent recorded date.
    ///
    /// Duplicate dates for the reference station resolve last-encountered-
    /// wins: each insert overwrites, never merges.
    pub fn rolling_window_observations(
        &self,
    ) -> QueryResult<BTreeMap<NaiveDate, Option<i32>>> {
        let recent = window::most_recent_date(&self.store)?;
        let cutoff = window::lookback_window(recent, self.lookback_days);

        let mut observations = BTreeMap::new();
        for m in self
            .store
            .measurements_for_station_from(&self.reference_station, cutoff)
        {
            observations.insert(m.date, m.temperature_observation);
        }
        Ok(observations)
    }

    /// Date-bounded aggregation with a single lower bound
    pub fn aggregates_from(&self, start: &str) -> QueryResult<Vec<DateAggregate>> {
        self.aggregate(start, None)
    }

    /// Date-bounded aggregation over an inclusive `[start, end]` range
    pub fn aggregates_between(&self, start: &str, end: &str) -> QueryResult<Vec<DateAggregate>> {
        self.aggregate(start, Some(end))
    }

    /// Shared aggregation pipeline: validate → membership check → range
    /// filter → group by date → min/avg/max over non-null observations.
    fn aggregate(&self, start: &str, end: Option<&str>) -> QueryResult<Vec<DateAggregate>> {
        // 1. Every supplied date must pass the format contract before the
        //    store is touched at all.
        for text in std::iter::once(start).chain(end) {
            if !validate_date(text) {
                return Err(QueryError::InvalidDate(text.to_string()));
            }
        }
        let start_date = parse_date(start)?;
        let end_date = end.map(parse_date).transpose()?;

        // 2. Strict membership check against the exact set of recorded
        //    dates, not a range-coverage check.
        let recorded: HashSet<NaiveDate> = self.store.measurement_dates().collect();
        let mut missing = Vec::new();
        if !recorded.contains(&start_date) {
            missing.push(start.to_string());
        }
        if let (Some(text), Some(date)) = (end, end_date) {
            if !recorded.contains(&date) {
                missing.push(text.to_string());
            }
        }
        if !missing.is_empty() {
            return Err(QueryError::DateNotFound(missing));
        }

        // 3. Group the range by date. The representative station is the
        //    first row scanned for each date.
        struct Group {
            station: String,
            observations: Vec<i32>,
        }

        let mut groups: BTreeMap<NaiveDate, Group> = BTreeMap::new();
        for m in self.store.measurements_in_range(start_date, end_date) {
            let group = groups.entry(m.date).or_insert_with(|| Group {
                station: m.station_code.clone(),
                observations: Vec::new(),
            });
            if let Some(tobs) = m.temperature_observation {
                group.observations.push(tobs);
            }
        }

        // 4. Aggregate each group, skipping dates with zero usable values.
        let aggregates = groups
            .into_iter()
            .filter_map(|(date, group)| {
                if group.observations.is_empty() {
                    return None;
                }
                let mut min = i32::MAX;
                let mut max = i32::MIN;
                let mut sum = 0i64;
                for &tobs in &group.observations {
                    min = min.min(tobs);
                    max = max.max(tobs);
                    sum += i64::from(tobs);
                }
                Some(DateAggregate {
                    date,
                    station: group.station,
                    min,
                    max,
                    average: sum as f64 / group.observations.len() as f64,
                })
            })
            .collect();

        Ok(aggregates)
    }
}
