//! Time and timestamp helpers.

use chrono::NaiveDateTime;
use serde::{Deserialize, Deserializer};

/// Zone-less local date-time carried by records (`2022-01-03T00:00:00`).
pub type Timestamp = NaiveDateTime;

const WITH_SECONDS: &str = "%Y-%m-%dT%H:%M:%S%.f";
const WITHOUT_SECONDS: &str = "%Y-%m-%dT%H:%M";

/// Parse an ISO-8601 local date-time such as `2022-01-03T00:00:00`.
///
/// Seconds are optional: `2022-04-20T18:31` is accepted, as sent by
/// `datetime-local` form inputs.
///
/// # Errors
///
/// Returns a [`chrono::ParseError`] when `value` is not a valid date-time.
pub fn parse(value: &str) -> Result<Timestamp, chrono::ParseError> {
    NaiveDateTime::parse_from_str(value, WITH_SECONDS)
        .or_else(|_| NaiveDateTime::parse_from_str(value, WITHOUT_SECONDS))
}

/// Serde `deserialize_with` counterpart of [`parse`].
///
/// # Errors
///
/// Fails when the input is not a string or not a valid date-time.
pub fn deserialize<'de, D>(deserializer: D) -> Result<Timestamp, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(serde::de::Error::custom)
}
