//! Facility reservations.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::datetime::{
    deserialize_optional_timestamp, deserialize_timestamp, parse_form_datetime,
    serialize_timestamp,
};
use super::ids::entity_id;
use super::{DateTimeParseError, FacilityId, UserId};

entity_id!(
    /// Identifier of a booking.
    BookingId,
    "booking"
);

/// Validation errors for booking drafts and status changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingValidationError {
    /// Duration outside the bookable window.
    #[error("duration must be between 1 and 8 hours, got {hours}")]
    DurationOutOfRange { hours: i64 },
    #[error("{0}")]
    InvalidDate(#[from] DateTimeParseError),
    #[error("status must be one of: pending, confirmed, cancelled")]
    UnknownStatus,
}

/// Lifecycle state of a booking.
///
/// The API stores statuses in whichever case they were written; both
/// `pending` and `Pending` decode. Statuses are always sent lowercase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[serde(alias = "Pending")]
    Pending,
    #[serde(alias = "Confirmed")]
    Confirmed,
    #[serde(alias = "Cancelled")]
    Cancelled,
}

impl BookingStatus {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = BookingValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(BookingValidationError::UnknownStatus),
        }
    }
}

/// Whole hours a facility is reserved for.
///
/// ## Invariants
/// - `MIN_HOURS <= hours <= MAX_HOURS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingDuration(u8);

impl BookingDuration {
    pub const MIN_HOURS: u8 = 1;
    pub const MAX_HOURS: u8 = 8;

    /// Validate a duration in hours.
    ///
    /// # Examples
    /// ```
    /// use sporthub_client::domain::BookingDuration;
    ///
    /// assert_eq!(BookingDuration::try_from_hours(2).unwrap().hours(), 2);
    /// assert!(BookingDuration::try_from_hours(9).is_err());
    /// ```
    pub fn try_from_hours(hours: i64) -> Result<Self, BookingValidationError> {
        u8::try_from(hours)
            .ok()
            .filter(|h| (Self::MIN_HOURS..=Self::MAX_HOURS).contains(h))
            .map(Self)
            .ok_or(BookingValidationError::DurationOutOfRange { hours })
    }

    pub fn hours(self) -> u8 {
        self.0
    }
}

impl Default for BookingDuration {
    fn default() -> Self {
        Self(Self::MIN_HOURS)
    }
}

/// A reservation as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    booking_id: BookingId,
    user_id: UserId,
    facility_id: FacilityId,
    #[serde(
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    booking_date: NaiveDateTime,
    duration: i64,
    status: BookingStatus,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<NaiveDateTime>,
}

impl Booking {
    pub fn id(&self) -> BookingId {
        self.booking_id
    }

    /// Account the booking belongs to.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn facility_id(&self) -> FacilityId {
        self.facility_id
    }

    pub fn booking_date(&self) -> NaiveDateTime {
        self.booking_date
    }

    /// Duration in hours as stored by the API.
    pub fn duration(&self) -> i64 {
        self.duration
    }

    pub fn status(&self) -> BookingStatus {
        self.status
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// Copy of this booking with a new status, as applied after an admin
    /// status change succeeds.
    pub fn with_status(mut self, status: BookingStatus) -> Self {
        self.status = status;
        self
    }
}

/// Body sent when reserving a facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingDraft {
    facility_id: FacilityId,
    #[serde(serialize_with = "serialize_timestamp")]
    booking_date: NaiveDateTime,
    duration: BookingDuration,
}

impl BookingDraft {
    /// Validate a reservation form.
    pub fn try_new(
        facility_id: FacilityId,
        booking_date: &str,
        duration_hours: Option<i64>,
    ) -> Result<Self, BookingValidationError> {
        let booking_date = parse_form_datetime(booking_date)?;
        let duration = duration_hours
            .map(BookingDuration::try_from_hours)
            .transpose()?
            .unwrap_or_default();
        Ok(Self {
            facility_id,
            booking_date,
            duration,
        })
    }

    pub fn facility_id(&self) -> FacilityId {
        self.facility_id
    }

    pub fn booking_date(&self) -> NaiveDateTime {
        self.booking_date
    }

    pub fn duration(&self) -> BookingDuration {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    #[case::lower("\"pending\"", BookingStatus::Pending)]
    #[case::capitalised("\"Confirmed\"", BookingStatus::Confirmed)]
    #[case::cancelled("\"Cancelled\"", BookingStatus::Cancelled)]
    fn status_accepts_either_case(#[case] raw: &str, #[case] expected: BookingStatus) {
        let status: BookingStatus = serde_json::from_str(raw).expect("decode");
        assert_eq!(status, expected);
        assert_eq!(
            serde_json::to_string(&status).expect("encode"),
            format!("\"{}\"", expected.as_str())
        );
    }

    #[rstest]
    #[case::below(0)]
    #[case::above(9)]
    #[case::negative(-1)]
    #[case::huge(300)]
    fn duration_outside_window_is_rejected(#[case] hours: i64) {
        assert_eq!(
            BookingDuration::try_from_hours(hours),
            Err(BookingValidationError::DurationOutOfRange { hours })
        );
    }

    #[rstest]
    #[case::min(1)]
    #[case::max(8)]
    fn duration_window_is_inclusive(#[case] hours: i64) {
        let duration = BookingDuration::try_from_hours(hours).expect("in range");
        assert_eq!(i64::from(duration.hours()), hours);
    }

    #[rstest]
    fn draft_defaults_duration_to_one_hour() {
        let draft = BookingDraft::try_new(FacilityId::new(4), "2024-07-01T10:00", None)
            .expect("valid draft");
        let body = serde_json::to_value(&draft).expect("serialise");
        assert_eq!(
            body,
            json!({"facility_id": 4, "booking_date": "2024-07-01T10:00:00", "duration": 1})
        );
    }

    #[rstest]
    fn duration_error_names_the_window() {
        let err = BookingDraft::try_new(FacilityId::new(4), "2024-07-01T10:00", Some(9))
            .expect_err("duration too long");
        assert_eq!(err.to_string(), "duration must be between 1 and 8 hours, got 9");
    }

    #[rstest]
    fn booking_decodes_capitalised_status_from_api() {
        let booking: Booking = serde_json::from_value(json!({
            "booking_id": 1,
            "user_id": 42,
            "facility_id": 3,
            "booking_date": "2024-07-01T10:00:00",
            "duration": 2,
            "status": "Pending",
            "created_at": "2024-06-30T09:00:00",
        }))
        .expect("decode");
        assert_eq!(booking.status(), BookingStatus::Pending);
        assert_eq!(
            booking.with_status(BookingStatus::Confirmed).status(),
            BookingStatus::Confirmed
        );
    }
}
