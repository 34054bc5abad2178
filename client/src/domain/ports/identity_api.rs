//! Driven port for the identity endpoints the auth gateway relies on.
//!
//! The gateway only needs three calls: exchange credentials for a token,
//! resolve a token subject to a profile, and register a new account.
//! Keeping them behind a trait lets gateway tests script responses without
//! an HTTP server.

use async_trait::async_trait;

use crate::domain::{ApiError, BearerToken, LoginCredentials, NewUser, User, UserId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IdentityApi: Send + Sync {
    /// Exchange credentials for a bearer token (`POST /token`).
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<BearerToken, ApiError>;

    /// Fetch the profile for `id`, authenticating with `token`.
    ///
    /// The token is passed explicitly because during login it is not yet
    /// part of the session.
    async fn fetch_user(&self, token: &BearerToken, id: UserId) -> Result<User, ApiError>;

    /// Create an account without authentication (`POST /users/`).
    async fn register(&self, draft: &NewUser) -> Result<User, ApiError>;
}
