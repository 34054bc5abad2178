//! Shared helpers for the integration suites.

pub mod fake_api;

use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};
use sporthub_client::domain::ports::TokenStore;
use sporthub_client::inbound::cli::CliState;
use sporthub_client::outbound::checkout::DEFAULT_CHECKOUT_BASE_URL;
use url::Url;

pub use fake_api::{FakeApi, RecordedRequest};

/// Far-future expiry for tokens that should stay valid.
pub const VALID_UNTIL: i64 = 4_102_444_800;

/// Unsigned JWT-shaped token carrying `sub` and optionally `exp`.
pub fn jwt(subject: &str, expires_at: Option<i64>) -> String {
    let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let mut claims = json!({ "sub": subject });
    if let Some(exp) = expires_at {
        claims["exp"] = json!(exp);
    }
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.c2lnbmF0dXJl")
}

pub fn user_json(id: i64, username: &str, role: &str) -> Value {
    json!({
        "user_id": id,
        "username": username,
        "email": format!("{username}@example.com"),
        "role": role,
    })
}

/// Canned token and profile routes for a successful login as `username`.
pub fn allow_login(api: &FakeApi, id: i64, username: &str, role: &str) -> String {
    let token = jwt(&id.to_string(), Some(VALID_UNTIL));
    api.respond(
        "POST",
        "/token",
        200,
        json!({ "access_token": token, "token_type": "bearer" }),
    );
    api.respond("GET", &format!("/users/{id}"), 200, user_json(id, username, role));
    token
}

pub fn cli_state(api: &FakeApi, storage: Arc<dyn TokenStore>) -> CliState {
    let checkout = Url::parse(DEFAULT_CHECKOUT_BASE_URL).expect("checkout base");
    CliState::new(api.base_url(), storage, checkout).expect("client stack")
}

pub fn runtime() -> tokio::runtime::Runtime {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .expect("tokio runtime")
}
