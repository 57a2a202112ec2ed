//! Dataset record types
//!
//! Plain immutable rows as loaded from the dataset. Identity of a measurement
//! is `(station_code, date)`, but the source data does not enforce uniqueness:
//! duplicate rows per date are possible and are kept as-is.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Calendar date pattern used everywhere in the dataset and the API.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// One daily reading of precipitation and/or temperature observation
/// for a station.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    /// Code of the station that reported this reading
    #[serde(rename = "station")]
    pub station_code: String,
    /// Calendar date of the reading
    pub date: NaiveDate,
    /// Precipitation in inches, absent when not recorded
    #[serde(rename = "prcp")]
    pub precipitation: Option<f64>,
    /// Temperature observation (tobs), absent when not recorded
    #[serde(rename = "tobs")]
    pub temperature_observation: Option<i32>,
}

impl Measurement {
    /// Create a measurement with no recorded values
    pub fn new(station_code: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            station_code: station_code.into(),
            date,
            precipitation: None,
            temperature_observation: None,
        }
    }

    /// Set the precipitation value
    pub fn precipitation(mut self, inches: f64) -> Self {
        self.precipitation = Some(inches);
        self
    }

    /// Set the temperature observation
    pub fn observation(mut self, tobs: i32) -> Self {
        self.temperature_observation = Some(tobs);
        self
    }
}

/// Metadata record for a fixed physical observation point.
///
/// One row per station; `station_code` is unique in the dataset.
/// Measurements reference it by code only, never by join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    #[serde(rename = "station")]
    pub station_code: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub elevation: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, DATE_FORMAT).unwrap()
    }

    #[test]
    fn test_measurement_builder() {
        let m = Measurement::new("USC00519281", date("2012-07-12"))
            .precipitation(0.5)
            .observation(71);

        assert_eq!(m.station_code, "USC00519281");
        assert_eq!(m.precipitation, Some(0.5));
        assert_eq!(m.temperature_observation, Some(71));
    }

    #[test]
    fn test_measurement_serializes_with_dataset_field_names() {
        let m = Measurement::new("USC00519281", date("2012-07-12")).precipitation(0.5);
        let json = serde_json::to_value(&m).unwrap();

        assert_eq!(json["station"], "USC00519281");
        assert_eq!(json["date"], "2012-07-12");
        assert_eq!(json["prcp"], 0.5);
        assert!(json["tobs"].is_null());
    }

    #[test]
    fn test_station_serializes_with_dataset_field_names() {
        let station = Station {
            id: 1,
            station_code: "USC00519397".to_string(),
            name: "WAIKIKI 717.2, HI US".to_string(),
            latitude: 21.2716,
            longitude: -157.8168,
            elevation: 3.0,
        };
        let json = serde_json::to_value(&station).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["station"], "USC00519397");
        assert_eq!(json["name"], "WAIKIKI 717.2, HI US");
    }
}
