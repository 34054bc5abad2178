//! Timestamp handling shared by the entity models.
//!
//! The API emits naive ISO-8601 timestamps (`2024-05-01T18:30:00`), sometimes
//! with fractional seconds or an offset. Forms collect the `datetime-local`
//! shape without seconds.

use std::fmt;

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serializer};

/// Wire format used when sending timestamps.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

const FORM_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Raised when a form date cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeParseError {
    input: String,
}

impl fmt::Display for DateTimeParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "`{}` is not a date-time in the form YYYY-MM-DDTHH:MM",
            self.input
        )
    }
}

impl std::error::Error for DateTimeParseError {}

/// Parse a `datetime-local` form value.
///
/// Values without seconds get `:00` appended; values that already carry
/// seconds are accepted unchanged. A space may stand in for the `T`.
///
/// # Examples
/// ```
/// use sporthub_client::domain::parse_form_datetime;
///
/// let parsed = parse_form_datetime("2024-05-01T18:30").unwrap();
/// assert_eq!(parsed.format("%Y-%m-%dT%H:%M:%S").to_string(), "2024-05-01T18:30:00");
/// ```
pub fn parse_form_datetime(input: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    let normalised = input.trim().replacen(' ', "T", 1);
    NaiveDateTime::parse_from_str(&normalised, FORM_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(&normalised, WIRE_FORMAT))
        .map_err(|_| DateTimeParseError {
            input: input.to_owned(),
        })
}

fn parse_wire_timestamp(raw: &str) -> Option<NaiveDateTime> {
    raw.parse::<NaiveDateTime>()
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(raw).ok().map(|dt| dt.naive_utc()))
        .or_else(|| NaiveDateTime::parse_from_str(raw, FORM_FORMAT).ok())
}

/// Deserialise a required API timestamp.
pub(crate) fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_wire_timestamp(&raw)
        .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`")))
}

/// Deserialise an optional API timestamp.
pub(crate) fn deserialize_optional_timestamp<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => parse_wire_timestamp(&raw)
            .map(Some)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid timestamp `{raw}`"))),
    }
}

/// Serialise a timestamp in [`WIRE_FORMAT`].
pub(crate) fn serialize_timestamp<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_str(&value.format(WIRE_FORMAT))
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::form("2024-05-01T18:30", "2024-05-01T18:30:00")]
    #[case::with_seconds("2024-05-01T18:30:15", "2024-05-01T18:30:15")]
    #[case::space_separator("2024-05-01 18:30", "2024-05-01T18:30:00")]
    #[case::padded("  2024-05-01T07:05  ", "2024-05-01T07:05:00")]
    fn form_values_gain_seconds(#[case] input: &str, #[case] expected: &str) {
        let parsed = parse_form_datetime(input).expect("form date parses");
        assert_eq!(parsed.format(WIRE_FORMAT).to_string(), expected);
    }

    #[rstest]
    #[case::empty("")]
    #[case::date_only("2024-05-01")]
    #[case::garbage("tomorrow evening")]
    fn invalid_form_values_are_rejected(#[case] input: &str) {
        assert!(parse_form_datetime(input).is_err());
    }

    #[rstest]
    #[case::naive("2024-05-01T18:30:00")]
    #[case::fractional("2024-05-01T18:30:00.123456")]
    #[case::offset("2024-05-01T18:30:00+00:00")]
    #[case::zulu("2024-05-01T18:30:00Z")]
    fn wire_timestamps_accept_common_shapes(#[case] raw: &str) {
        let parsed = parse_wire_timestamp(raw).expect("timestamp parses");
        assert_eq!(parsed.format("%Y-%m-%d %H:%M").to_string(), "2024-05-01 18:30");
    }
}
