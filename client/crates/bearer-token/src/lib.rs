//! Unverified claim decoding for JWT bearer tokens.
//!
//! The SportHub API issues compact JWS tokens (`header.payload.signature`).
//! Clients never hold the signing key, so this crate only reads the payload
//! segment to learn who the token was issued for. A token that decodes is not
//! a valid token: the issuing server remains the sole authority and will
//! reject forged or expired credentials on use.
//!
//! # Examples
//! ```
//! use bearer_token::decode_claims;
//!
//! // {"alg":"HS256","typ":"JWT"} . {"sub":"42","exp":1700000000} . sig
//! let token = "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.\
//!              eyJzdWIiOiI0MiIsImV4cCI6MTcwMDAwMDAwMH0.c2ln";
//! let claims = decode_claims(token).expect("token decodes");
//! assert_eq!(claims.subject(), "42");
//! assert_eq!(claims.expires_at(), Some(1_700_000_000));
//! ```

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

/// Number of dot-separated segments in a compact JWS token.
pub const JWS_SEGMENTS: usize = 3;

/// Errors raised while decoding token claims.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The token string was empty after trimming whitespace.
    #[error("token must not be empty")]
    Empty,
    /// The token did not have the `header.payload.signature` shape.
    #[error("token must have 3 segments, found {segments}")]
    MalformedStructure {
        /// Number of segments found in the input.
        segments: usize,
    },
    /// The payload segment was not valid base64url.
    #[error("token payload is not valid base64url: {message}")]
    Base64 {
        /// Decoder failure description.
        message: String,
    },
    /// The payload decoded but was not a JSON object.
    #[error("token payload is not a JSON object: {message}")]
    Json {
        /// Parser failure description.
        message: String,
    },
    /// The payload has no `sub` claim.
    #[error("token payload has no subject claim")]
    MissingSubject,
    /// The `sub` claim was blank or neither a string nor an integer.
    #[error("token subject claim must be a non-empty string or integer")]
    InvalidSubject,
    /// The `exp` claim was present but not a non-negative integer.
    #[error("token expiry claim must be a non-negative integer")]
    InvalidExpiry,
}

/// Claims read from an unverified token payload.
///
/// ## Invariants
/// - `subject` is non-empty and trimmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenClaims {
    subject: String,
    expires_at: Option<u64>,
}

impl TokenClaims {
    /// Subject identifier (`sub`) the token was issued for.
    pub fn subject(&self) -> &str {
        self.subject.as_str()
    }

    /// Expiry (`exp`) in seconds since the Unix epoch, when present.
    pub fn expires_at(&self) -> Option<u64> {
        self.expires_at
    }

    /// Whether the expiry claim lies at or before `now` (seconds since epoch).
    ///
    /// Tokens without an expiry never report as expired.
    pub fn is_expired_at(&self, now: u64) -> bool {
        self.expires_at.is_some_and(|exp| exp <= now)
    }
}

#[derive(Deserialize)]
struct RawClaims {
    sub: Option<Value>,
    exp: Option<Value>,
}

/// Decode the payload claims of a compact JWS token without verifying it.
///
/// Accepts both padded and unpadded payloads, and tolerates the standard
/// base64 alphabet that some issuers emit in place of base64url.
///
/// # Errors
///
/// Returns [`DecodeError`] when the token is not three segments, the payload
/// is not base64 JSON, or the subject/expiry claims are unusable.
pub fn decode_claims(token: &str) -> Result<TokenClaims, DecodeError> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(DecodeError::Empty);
    }

    let segments: Vec<&str> = trimmed.split('.').collect();
    let payload = match segments.as_slice() {
        [_, payload, _] => *payload,
        other => {
            return Err(DecodeError::MalformedStructure {
                segments: other.len(),
            });
        }
    };

    let bytes = decode_segment(payload)?;
    let raw: RawClaims = serde_json::from_slice(&bytes).map_err(|error| DecodeError::Json {
        message: error.to_string(),
    })?;

    let subject = parse_subject(raw.sub)?;
    let expires_at = parse_expiry(raw.exp)?;
    Ok(TokenClaims {
        subject,
        expires_at,
    })
}

fn decode_segment(segment: &str) -> Result<Vec<u8>, DecodeError> {
    let normalised: String = segment
        .trim_end_matches('=')
        .chars()
        .map(|c| match c {
            '+' => '-',
            '/' => '_',
            other => other,
        })
        .collect();
    URL_SAFE_NO_PAD
        .decode(normalised.as_bytes())
        .map_err(|error| DecodeError::Base64 {
            message: error.to_string(),
        })
}

fn parse_subject(value: Option<Value>) -> Result<String, DecodeError> {
    match value {
        None | Some(Value::Null) => Err(DecodeError::MissingSubject),
        Some(Value::String(text)) => {
            let text = text.trim();
            if text.is_empty() {
                Err(DecodeError::InvalidSubject)
            } else {
                Ok(text.to_owned())
            }
        }
        Some(Value::Number(number)) if number.is_i64() || number.is_u64() => {
            Ok(number.to_string())
        }
        Some(_) => Err(DecodeError::InvalidSubject),
    }
}

fn parse_expiry(value: Option<Value>) -> Result<Option<u64>, DecodeError> {
    match value {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Number(number)) => number
            .as_u64()
            .map(Some)
            .ok_or(DecodeError::InvalidExpiry),
        Some(_) => Err(DecodeError::InvalidExpiry),
    }
}
