//! Reqwest-backed transport shared by every resource client.
//!
//! This adapter owns transport details only: URL resolution against the
//! configured base, bearer header attachment, HTTP error mapping and JSON
//! decoding. Requests are fire-once with no retries and no timeout.

use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use super::dto::ErrorBodyDto;
use crate::domain::{ApiError, BearerToken, SessionView};

/// Which bearer token, if any, a request carries.
#[derive(Debug, Clone, Copy)]
pub(crate) enum Credentials<'a> {
    /// Public endpoint; no `Authorization` header.
    Anonymous,
    /// Use whatever token the session holds at send time.
    Session,
    /// Use a token that is not yet part of the session.
    Token(&'a BearerToken),
}

/// HTTP client bound to one SportHub API base URL.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base: Url,
    session: SessionView,
}

impl ApiClient {
    /// Build a client for `base`, reading bearer tokens from `session`.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url, session: SessionView) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self {
            client,
            base: normalise_base(base),
            session,
        })
    }

    /// Base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path.trim_start_matches('/'))
            .map_err(|err| ApiError::validation(format!("invalid endpoint `{path}`: {err}")))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        credentials: Credentials<'_>,
    ) -> Result<RequestBuilder, ApiError> {
        let url = self.endpoint(path)?;
        let token = match credentials {
            Credentials::Anonymous => None,
            Credentials::Session => self.session.token(),
            Credentials::Token(token) => Some(token.clone()),
        };
        debug!(
            method = %method,
            path = url.path(),
            authenticated = token.is_some(),
            "sending API request"
        );
        let builder = self
            .client
            .request(method, url)
            .header(ACCEPT, "application/json");
        Ok(match token {
            Some(token) => builder.bearer_auth(token.as_str()),
            None => builder,
        })
    }

    pub(crate) async fn get_json<T>(
        &self,
        path: &str,
        credentials: Credentials<'_>,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let body = execute(self.request(Method::GET, path, credentials)?).await?;
        decode(&body)
    }

    pub(crate) async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        credentials: Credentials<'_>,
        payload: &B,
    ) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let builder = self.request(method, path, credentials)?.json(payload);
        let body = execute(builder).await?;
        decode(&body)
    }

    pub(crate) async fn send_form<T>(
        &self,
        path: &str,
        credentials: Credentials<'_>,
        form: &[(&str, &str)],
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let builder = self.request(Method::POST, path, credentials)?.form(form);
        let body = execute(builder).await?;
        decode(&body)
    }

    /// Issue a DELETE and ignore whatever body comes back.
    pub(crate) async fn delete(&self, path: &str, credentials: Credentials<'_>) -> Result<(), ApiError> {
        execute(self.request(Method::DELETE, path, credentials)?).await?;
        Ok(())
    }
}

fn normalise_base(mut base: Url) -> Url {
    if !base.path().ends_with('/') {
        let path = format!("{}/", base.path());
        base.set_path(&path);
    }
    base
}

async fn execute(builder: RequestBuilder) -> Result<Vec<u8>, ApiError> {
    let response = builder.send().await.map_err(map_transport_error)?;
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    Ok(body.to_vec())
}

fn decode<T>(body: &[u8]) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|error| {
        debug!(body = %body_preview(body), "response did not match expected shape");
        ApiError::decode(error.to_string())
    })
}

fn map_transport_error(error: reqwest::Error) -> ApiError {
    ApiError::network(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> ApiError {
    let detail = remote_detail(body);
    if detail.is_none() && !body.is_empty() {
        debug!(
            status = status.as_u16(),
            body = %body_preview(body),
            "error response carried no detail"
        );
    }
    ApiError::status(status.as_u16(), detail)
}

/// Extract the FastAPI `detail` field from an error body.
fn remote_detail(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBodyDto>(body)
        .ok()
        .and_then(ErrorBodyDto::into_message)
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for non-network mapping helpers.

    use super::*;
    use crate::domain::Session;
    use rstest::rstest;

    fn client(base: &str) -> ApiClient {
        let base = Url::parse(base).expect("base url");
        ApiClient::new(base, SessionView::fixed(Session::logged_out())).expect("client")
    }

    #[rstest]
    #[case::bare_host("http://localhost:8000", "activities/5", "http://localhost:8000/activities/5")]
    #[case::trailing_slash("http://localhost:8000/", "/users/", "http://localhost:8000/users/")]
    #[case::prefix("https://api.example/v1", "sports/", "https://api.example/v1/sports/")]
    fn endpoints_resolve_under_base(#[case] base: &str, #[case] path: &str, #[case] expected: &str) {
        let url = client(base).endpoint(path).expect("endpoint");
        assert_eq!(url.as_str(), expected);
    }

    #[rstest]
    #[case::string(br#"{"detail":"Booking not found"}"#.as_slice(), Some("Booking not found"))]
    #[case::validation_list(
        br#"{"detail":[{"loc":["body","email"],"msg":"value is not a valid email address","type":"value_error"},{"msg":"field required"}]}"#.as_slice(),
        Some("value is not a valid email address; field required")
    )]
    #[case::blank(br#"{"detail":"   "}"#.as_slice(), None)]
    #[case::no_detail(br#"{"error":"boom"}"#.as_slice(), None)]
    #[case::html(b"<html>Bad Gateway</html>".as_slice(), None)]
    #[case::empty(b"".as_slice(), None)]
    fn status_errors_carry_remote_detail(#[case] body: &[u8], #[case] expected: Option<&str>) {
        let error = map_status_error(StatusCode::BAD_REQUEST, body);
        assert_eq!(error.http_status(), Some(400));
        assert_eq!(error.detail(), expected);
    }

    #[rstest]
    fn decode_failures_map_to_decode_errors() {
        let error = decode::<Vec<u32>>(br#"{"not":"a list"}"#).expect_err("shape mismatch");
        assert!(matches!(error, ApiError::Decode { .. }));
    }

    #[rstest]
    fn long_bodies_are_truncated_in_previews() {
        let body = "x".repeat(400);
        let preview = body_preview(body.as_bytes());
        assert!(preview.ends_with("..."));
        assert_eq!(preview.chars().count(), 163);
    }
}
