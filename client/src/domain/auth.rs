//! Authentication primitives such as login credentials.
//!
//! Keep CLI argument parsing outside the domain by exposing constructors
//! that validate string inputs before the gateway talks to a port.

use std::fmt;

use thiserror::Error;
use zeroize::Zeroizing;

use super::ApiError;
use super::session::SessionError;
use super::token::TokenError;

/// Message rendered for every login failure.
pub const LOGIN_FAILURE: &str = "Invalid username or password";

/// Domain error returned when login form values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username was missing or blank once trimmed.
    EmptyUsername,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for LoginValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyUsername => write!(f, "username must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for LoginValidationError {}

/// Validated login credentials exchanged for a bearer token.
///
/// ## Invariants
/// - `username` is trimmed and must not be empty after trimming.
/// - `password` is required to be non-empty but retains caller-provided
///   whitespace.
///
/// # Examples
/// ```
/// use sporthub_client::domain::LoginCredentials;
///
/// let creds = LoginCredentials::try_from_parts(" alice ", "secret").unwrap();
/// assert_eq!(creds.username(), "alice");
/// assert_eq!(creds.password(), "secret");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCredentials {
    username: String,
    password: Zeroizing<String>,
}

impl LoginCredentials {
    /// Construct credentials from raw username/password inputs.
    pub fn try_from_parts(username: &str, password: &str) -> Result<Self, LoginValidationError> {
        let normalized = username.trim();
        if normalized.is_empty() {
            return Err(LoginValidationError::EmptyUsername);
        }

        if password.is_empty() {
            return Err(LoginValidationError::EmptyPassword);
        }

        Ok(Self {
            username: normalized.to_owned(),
            password: Zeroizing::new(password.to_owned()),
        })
    }

    /// Username sent to the token endpoint.
    pub fn username(&self) -> &str {
        self.username.as_str()
    }

    /// Password string provided by the caller.
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Reasons a login attempt did not produce a session.
///
/// Every variant renders the same message to end users; the variant and its
/// source are only visible to logs and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The form values were rejected before any request was sent.
    #[error("login input rejected: {0}")]
    InvalidInput(LoginValidationError),
    /// The token endpoint refused the credentials or could not be reached.
    #[error("token request failed: {0}")]
    Rejected(ApiError),
    /// The issued token could not be decoded.
    #[error("issued token is unusable: {0}")]
    Decode(TokenError),
    /// The user named by the token could not be fetched.
    #[error("profile lookup failed: {0}")]
    Profile(ApiError),
    /// The API returned a profile for a different user than the token names.
    #[error("profile does not match token subject")]
    SubjectMismatch,
    /// The session could not be committed.
    #[error("session could not be stored: {0}")]
    Session(#[from] SessionError),
}

impl AuthError {
    /// Text to show the user; always [`LOGIN_FAILURE`].
    pub fn user_message(&self) -> &'static str {
        LOGIN_FAILURE
    }
}

impl From<LoginValidationError> for AuthError {
    fn from(value: LoginValidationError) -> Self {
        Self::InvalidInput(value)
    }
}
