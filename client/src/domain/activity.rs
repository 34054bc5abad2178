//! User-created sporting activities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::datetime::{
    deserialize_optional_timestamp, deserialize_timestamp, parse_form_datetime,
    serialize_timestamp,
};
use super::ids::entity_id;
use super::{SportId, UserId};

entity_id!(
    /// Identifier of an activity.
    ActivityId,
    "activity"
);

/// Validation errors for activity drafts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActivityValidationError {
    #[error("activity location must not be empty")]
    EmptyLocation,
    #[error("{0}")]
    InvalidDate(#[from] super::DateTimeParseError),
}

/// An activity announced by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    activity_id: ActivityId,
    user_id: UserId,
    sport_id: SportId,
    #[serde(default)]
    description: Option<String>,
    #[serde(
        deserialize_with = "deserialize_timestamp",
        serialize_with = "serialize_timestamp"
    )]
    activity_date: NaiveDateTime,
    location: String,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    created_at: Option<NaiveDateTime>,
}

impl Activity {
    pub fn id(&self) -> ActivityId {
        self.activity_id
    }

    /// Creator of the activity.
    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn sport_id(&self) -> SportId {
        self.sport_id
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn activity_date(&self) -> NaiveDateTime {
        self.activity_date
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn created_at(&self) -> Option<NaiveDateTime> {
        self.created_at
    }

    /// Whether `user` created this activity and may edit it.
    pub fn is_owned_by(&self, user: UserId) -> bool {
        self.user_id == user
    }
}

/// Split a comma-separated participant list, dropping blanks.
///
/// # Examples
/// ```
/// use sporthub_client::domain::parse_participants;
///
/// assert_eq!(parse_participants(" bob, ,carol,"), vec!["bob", "carol"]);
/// ```
pub fn parse_participants(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Body sent when creating or editing an activity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityDraft {
    sport_id: SportId,
    description: String,
    #[serde(serialize_with = "serialize_timestamp")]
    activity_date: NaiveDateTime,
    location: String,
    participant_usernames: Vec<String>,
}

impl ActivityDraft {
    /// Validate an activity form.
    ///
    /// `activity_date` uses the `YYYY-MM-DDTHH:MM` form shape and
    /// `participants` is a comma-separated username list.
    pub fn try_new(
        sport_id: SportId,
        activity_date: &str,
        location: &str,
        description: Option<&str>,
        participants: Option<&str>,
    ) -> Result<Self, ActivityValidationError> {
        let activity_date = parse_form_datetime(activity_date)?;
        let location = location.trim();
        if location.is_empty() {
            return Err(ActivityValidationError::EmptyLocation);
        }
        Ok(Self {
            sport_id,
            description: description.map(str::trim).unwrap_or_default().to_owned(),
            activity_date,
            location: location.to_owned(),
            participant_usernames: participants.map(parse_participants).unwrap_or_default(),
        })
    }

    pub fn sport_id(&self) -> SportId {
        self.sport_id
    }

    pub fn activity_date(&self) -> NaiveDateTime {
        self.activity_date
    }

    pub fn location(&self) -> &str {
        self.location.as_str()
    }

    pub fn participant_usernames(&self) -> &[String] {
        &self.participant_usernames
    }
}
