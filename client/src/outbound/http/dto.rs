//! Wire DTOs that do not map one-to-one onto domain types.
//!
//! Entities and drafts serialise directly; these cover request envelopes,
//! secret-bearing bodies and the FastAPI error shape.

use serde::{Deserialize, Serialize};

use crate::domain::{BookingId, BookingStatus, Gender, NewUser, UserUpdate};

#[derive(Debug, Deserialize)]
pub(super) struct TokenResponseDto {
    pub(super) access_token: String,
}

#[derive(Debug, Serialize)]
pub(super) struct NewUserDto<'a> {
    username: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    gender: Option<Gender>,
    #[serde(skip_serializing_if = "Option::is_none")]
    birth_date: Option<chrono::NaiveDate>,
}

impl<'a> From<&'a NewUser> for NewUserDto<'a> {
    fn from(draft: &'a NewUser) -> Self {
        Self {
            username: draft.username(),
            email: draft.email(),
            password: draft.password(),
            full_name: draft.full_name(),
            gender: draft.gender(),
            birth_date: draft.birth_date(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct UserUpdateDto<'a> {
    username: &'a str,
    email: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    password: Option<&'a str>,
}

impl<'a> From<&'a UserUpdate> for UserUpdateDto<'a> {
    fn from(update: &'a UserUpdate) -> Self {
        Self {
            username: update.username(),
            email: update.email(),
            password: update.password(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(super) struct StatusUpdateDto {
    pub(super) status: BookingStatus,
}

#[derive(Debug, Serialize)]
pub(super) struct CheckoutRequestDto {
    pub(super) booking_id: BookingId,
}

#[derive(Debug, Deserialize)]
pub(super) struct CheckoutResponseDto {
    #[serde(rename = "sessionId")]
    pub(super) session_id: String,
}

#[derive(Debug, Deserialize)]
pub(super) struct ErrorBodyDto {
    detail: Option<DetailDto>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum DetailDto {
    Text(String),
    Items(Vec<DetailItemDto>),
}

#[derive(Debug, Deserialize)]
struct DetailItemDto {
    msg: Option<String>,
}

impl ErrorBodyDto {
    /// Human-readable detail; array details are joined with `"; "`.
    pub(super) fn into_message(self) -> Option<String> {
        let message = match self.detail? {
            DetailDto::Text(text) => text,
            DetailDto::Items(items) => items
                .into_iter()
                .filter_map(|item| item.msg)
                .map(|msg| msg.trim().to_owned())
                .filter(|msg| !msg.is_empty())
                .collect::<Vec<_>>()
                .join("; "),
        };
        let trimmed = message.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_owned())
    }
}
