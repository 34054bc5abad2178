//! User endpoints used by registration and the admin console.

use reqwest::Method;

use super::client::{ApiClient, Credentials};
use super::dto::{NewUserDto, UserUpdateDto};
use crate::domain::{ApiError, NewUser, User, UserId, UserUpdate};

#[derive(Debug, Clone, Copy)]
pub struct UsersClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn users(&self) -> UsersClient<'_> {
        UsersClient { api: self }
    }
}

impl UsersClient<'_> {
    /// `GET /users/{id}`
    pub async fn get(&self, id: UserId) -> Result<User, ApiError> {
        self.api
            .get_json(&format!("users/{id}"), Credentials::Session)
            .await
    }

    /// `GET /users/`
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.api.get_json("users/", Credentials::Session).await
    }

    /// `POST /users/` as an admin.
    pub async fn create(&self, draft: &NewUser) -> Result<User, ApiError> {
        self.api
            .send_json(
                Method::POST,
                "users/",
                Credentials::Session,
                &NewUserDto::from(draft),
            )
            .await
    }

    /// `PUT /users/{id}`
    pub async fn update(&self, id: UserId, update: &UserUpdate) -> Result<User, ApiError> {
        self.api
            .send_json(
                Method::PUT,
                &format!("users/{id}"),
                Credentials::Session,
                &UserUpdateDto::from(update),
            )
            .await
    }

    /// `DELETE /users/{id}`
    pub async fn delete(&self, id: UserId) -> Result<(), ApiError> {
        self.api
            .delete(&format!("users/{id}"), Credentials::Session)
            .await
    }
}
