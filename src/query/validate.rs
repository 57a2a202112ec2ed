//! Date input validation
//!
//! A date string is accepted only when it parses as `%Y-%m-%d` AND
//! re-formatting the parsed date reproduces the input exactly. chrono is
//! lenient about zero padding ("2012-1-5" parses), so the round-trip check is
//! what rejects unpadded inputs.

use crate::query::error::{QueryError, QueryResult};
use crate::store::DATE_FORMAT;
use chrono::NaiveDate;

/// Check a textual date against the required calendar format.
///
/// Pure function; any parse failure or mismatch yields `false`.
pub fn validate_date(text: &str) -> bool {
    match NaiveDate::parse_from_str(text, DATE_FORMAT) {
        Ok(date) => date.format(DATE_FORMAT).to_string() == text,
        Err(_) => false,
    }
}

/// Parse a validated date string, or report which input failed.
pub fn parse_date(text: &str) -> QueryResult<NaiveDate> {
    if !validate_date(text) {
        return Err(QueryError::InvalidDate(text.to_string()));
    }
    NaiveDate::parse_from_str(text, DATE_FORMAT)
        .map_err(|_| QueryError::InvalidDate(text.to_string()))
}
