//! Identity endpoints backing the auth gateway.

use async_trait::async_trait;
use reqwest::Method;

use super::client::{ApiClient, Credentials};
use super::dto::{NewUserDto, TokenResponseDto};
use crate::domain::ports::IdentityApi;
use crate::domain::{ApiError, BearerToken, LoginCredentials, NewUser, User, UserId};

#[async_trait]
impl IdentityApi for ApiClient {
    async fn issue_token(&self, credentials: &LoginCredentials) -> Result<BearerToken, ApiError> {
        let response: TokenResponseDto = self
            .send_form(
                "token",
                Credentials::Anonymous,
                &[
                    ("username", credentials.username()),
                    ("password", credentials.password()),
                ],
            )
            .await?;
        if response.access_token.trim().is_empty() {
            return Err(ApiError::decode("token response carried an empty access_token"));
        }
        Ok(BearerToken::new(response.access_token))
    }

    async fn fetch_user(&self, token: &BearerToken, id: UserId) -> Result<User, ApiError> {
        self.get_json(&format!("users/{id}"), Credentials::Token(token))
            .await
    }

    async fn register(&self, draft: &NewUser) -> Result<User, ApiError> {
        self.send_json(
            Method::POST,
            "users/",
            Credentials::Anonymous,
            &NewUserDto::from(draft),
        )
        .await
    }
}
