//! RecordStore - immutable in-memory view of the dataset
//!
//! Loads the `measurement` and `station` tables from a SQLite file opened
//! read-only, then answers every query from memory. Measurements are sorted
//! by date at load time with stable original row order within a date, so
//! "scan order" is well defined for grouping semantics downstream.

use crate::store::error::{StoreError, StoreResult};
use crate::store::types::{Measurement, Station, DATE_FORMAT};
use chrono::NaiveDate;
use rusqlite::{Connection, OpenFlags};
use std::path::Path;

/// Read-only accessor over the measurement and station datasets.
///
/// Never mutated after construction; share behind an `Arc` for concurrent
/// request handling.
#[derive(Debug)]
pub struct RecordStore {
    /// All measurements, ordered by date (stable within a date)
    measurements: Vec<Measurement>,
    /// All stations, original table order
    stations: Vec<Station>,
}

impl RecordStore {
    /// Load the dataset from a SQLite file.
    ///
    /// The file is opened read-only and closed once both tables are in
    /// memory; no connection is held afterwards.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if !path.exists() {
            return Err(StoreError::MissingDataset(path.to_path_buf()));
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;

        let measurements = load_measurements(&conn)?;
        let stations = load_stations(&conn)?;

        tracing::info!(
            measurements = measurements.len(),
            stations = stations.len(),
            "Dataset loaded from {:?}",
            path
        );

        Ok(Self {
            measurements,
            stations,
        })
    }

    /// Build a store from in-memory records (fixture datasets).
    ///
    /// Measurements are sorted by date; the sort is stable so rows supplied
    /// for the same date keep their relative order.
    pub fn from_records(mut measurements: Vec<Measurement>, stations: Vec<Station>) -> Self {
        measurements.sort_by_key(|m| m.date);
        Self {
            measurements,
            stations,
        }
    }

    /// Full measurement scan, ordered by date
    pub fn measurements(&self) -> &[Measurement] {
        &self.measurements
    }

    /// All recorded measurement dates, in scan order (for membership checks)
    pub fn measurement_dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.measurements.iter().map(|m| m.date)
    }

    /// Full station scan
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Measurements for one station with `date >= min_date`, ordered by date
    pub fn measurements_for_station_from<'a>(
        &'a self,
        station_code: &'a str,
        min_date: NaiveDate,
    ) -> impl Iterator<Item = &'a Measurement> + 'a {
        self.measurements
            .iter()
            .filter(move |m| m.station_code == station_code && m.date >= min_date)
    }

    /// Measurements in the inclusive range `[min_date, max_date]`, ordered
    /// by date; an absent `max_date` leaves the range unbounded above
    pub fn measurements_in_range(
        &self,
        min_date: NaiveDate,
        max_date: Option<NaiveDate>,
    ) -> impl Iterator<Item = &Measurement> {
        self.measurements.iter().filter(move |m| {
            m.date >= min_date && max_date.map(|max| m.date <= max).unwrap_or(true)
        })
    }

    /// Number of measurements in the dataset
    pub fn len(&self) -> usize {
        self.measurements.len()
    }

    /// Whether the dataset contains zero measurements
    pub fn is_empty(&self) -> bool {
        self.measurements.is_empty()
    }
}

/// Load the measurement table ordered by date, original row order within a
/// date (rowid tiebreak).
fn load_measurements(conn: &Connection) -> StoreResult<Vec<Measurement>> {
    let mut stmt =
        conn.prepare("SELECT station, date, prcp, tobs FROM measurement ORDER BY date, id")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, Option<f64>>(2)?,
            row.get::<_, Option<f64>>(3)?,
        ))
    })?;

    let mut measurements = Vec::new();
    for row in rows {
        let (station_code, date_text, precipitation, tobs) = row?;
        let date = parse_row_date("measurement", &date_text)?;
        measurements.push(Measurement {
            station_code,
            date,
            precipitation,
            // tobs is stored as REAL in the dataset but is integral
            temperature_observation: tobs.map(|v| v.round() as i32),
        });
    }

    Ok(measurements)
}

/// Load the station table in its original order.
fn load_stations(conn: &Connection) -> StoreResult<Vec<Station>> {
    let mut stmt = conn.prepare(
        "SELECT id, station, name, latitude, longitude, elevation FROM station ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Station {
            id: row.get(0)?,
            station_code: row.get(1)?,
            name: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            elevation: row.get(5)?,
        })
    })?;

    let mut stations = Vec::new();
    for row in rows {
        stations.push(row?);
    }

    Ok(stations)
}

fn parse_row_date(table: &'static str, text: &str) -> StoreResult<NaiveDate> {
    NaiveDate::parse_from_str(text, DATE_FORMAT).map_err(|e| StoreError::CorruptRow {
        table,
        detail: format!("invalid date {:?}: {}", text, e),
    })
}
