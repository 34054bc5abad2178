//! Bearer token held by the session.

use std::fmt;

use bearer_token::{DecodeError, decode_claims};
use chrono::{DateTime, Utc};
use thiserror::Error;
use zeroize::Zeroizing;

use super::UserId;

/// Errors raised when a token cannot be resolved to a user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// The payload could not be decoded.
    #[error(transparent)]
    Malformed(#[from] DecodeError),
    /// The subject claim is not a user identifier.
    #[error("token subject `{subject}` is not a user id")]
    SubjectNotUserId { subject: String },
    /// The expiry claim has passed.
    #[error("token expired")]
    Expired,
}

/// Opaque credential issued by `POST /token`.
///
/// The raw string is zeroed on drop and never printed by `Debug`.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(Zeroizing<String>);

impl BearerToken {
    /// Wrap a raw token string, trimming surrounding whitespace.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let trimmed = raw.trim();
        if trimmed.len() == raw.len() {
            Self(Zeroizing::new(raw))
        } else {
            Self(Zeroizing::new(trimmed.to_owned()))
        }
    }

    /// Raw token string for the `Authorization` header and storage.
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Decode the unverified claims.
    pub fn claims(&self) -> Result<SessionClaims, TokenError> {
        let claims = decode_claims(self.as_str())?;
        let subject = claims
            .subject()
            .parse::<UserId>()
            .map_err(|_| TokenError::SubjectNotUserId {
                subject: claims.subject().to_owned(),
            })?;
        let expires_at = claims
            .expires_at()
            .and_then(|secs| i64::try_from(secs).ok())
            .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0));
        Ok(SessionClaims {
            subject,
            expires_at,
        })
    }

    /// User the token was issued for.
    pub fn subject(&self) -> Result<UserId, TokenError> {
        self.claims().map(|claims| claims.subject)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(<redacted>)")
    }
}

/// Claims the client relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionClaims {
    subject: UserId,
    expires_at: Option<DateTime<Utc>>,
}

impl SessionClaims {
    /// User the token was issued for.
    pub fn subject(&self) -> UserId {
        self.subject
    }

    /// Expiry instant, when the token carries one.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        self.expires_at
    }

    /// Whether the expiry lies at or before `now`.
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}
