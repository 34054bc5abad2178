//! Error taxonomy for calls against the SportHub API.
//!
//! These errors are transport agnostic. The HTTP adapter maps reqwest
//! failures and response statuses into them, and views render them as a
//! single alert line.

use thiserror::Error;

/// Message shown when an action fails without a remote explanation.
pub const GENERIC_FAILURE: &str = "Operation failed";

/// Failure of a single request to the remote API.
///
/// ## Variants
/// - `Network`: the request never produced a response.
/// - `Status`: the API answered with a non-2xx status.
/// - `Decode`: the response body did not have the expected shape.
/// - `Validation`: the request was rejected client-side and never sent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Transport failed before a response arrived.
    #[error("request failed: {message}")]
    Network { message: String },
    /// The API answered with a non-success status.
    #[error("API responded with status {status}{}", detail_suffix(.detail))]
    Status { status: u16, detail: Option<String> },
    /// The response body could not be decoded.
    #[error("response could not be decoded: {message}")]
    Decode { message: String },
    /// A draft failed client-side validation.
    #[error("{message}")]
    Validation { message: String },
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail
        .as_deref()
        .map(|text| format!(": {text}"))
        .unwrap_or_default()
}

impl ApiError {
    /// Helper for transport failures.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Helper for non-2xx responses.
    pub fn status(status: u16, detail: Option<String>) -> Self {
        Self::Status { status, detail }
    }

    /// Helper for body decoding failures.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Helper for client-side validation failures.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// HTTP status of the response, when one was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Remote-supplied error detail, when present.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::Status { detail, .. } => detail.as_deref(),
            _ => None,
        }
    }

    /// Text to show the user for this failure.
    ///
    /// Remote detail is shown verbatim. Client-side validation messages are
    /// shown as-is. Everything else falls back to `fallback`.
    ///
    /// # Examples
    /// ```
    /// use sporthub_client::domain::ApiError;
    ///
    /// let remote = ApiError::status(400, Some("Email already registered".into()));
    /// assert_eq!(remote.user_message("Registration failed"), "Email already registered");
    ///
    /// let bare = ApiError::status(500, None);
    /// assert_eq!(bare.user_message("Registration failed"), "Registration failed");
    /// ```
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status {
                detail: Some(detail),
                ..
            } if !detail.trim().is_empty() => detail.clone(),
            Self::Validation { message } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::remote_detail(ApiError::status(404, Some("Booking not found".into())), "Booking not found")]
    #[case::blank_detail(ApiError::status(404, Some("  ".into())), GENERIC_FAILURE)]
    #[case::no_detail(ApiError::status(500, None), GENERIC_FAILURE)]
    #[case::network(ApiError::network("connection refused"), GENERIC_FAILURE)]
    #[case::decode(ApiError::decode("missing field"), GENERIC_FAILURE)]
    #[case::validation(ApiError::validation("name must not be empty"), "name must not be empty")]
    fn user_message_prefers_remote_detail(#[case] error: ApiError, #[case] expected: &str) {
        assert_eq!(error.user_message(GENERIC_FAILURE), expected);
    }

    #[rstest]
    fn status_display_includes_detail_when_present() {
        let with_detail = ApiError::status(403, Some("Admins only".into()));
        assert_eq!(with_detail.to_string(), "API responded with status 403: Admins only");
        assert_eq!(
            ApiError::status(502, None).to_string(),
            "API responded with status 502"
        );
    }

    #[rstest]
    fn accessors_only_report_status_failures() {
        let error = ApiError::status(401, Some("Could not validate credentials".into()));
        assert_eq!(error.http_status(), Some(401));
        assert_eq!(error.detail(), Some("Could not validate credentials"));
        assert_eq!(ApiError::network("x").http_status(), None);
        assert_eq!(ApiError::network("x").detail(), None);
    }
}
