//! Activity endpoints.

use reqwest::Method;

use super::client::{ApiClient, Credentials};
use crate::domain::{Activity, ActivityDraft, ActivityId, ApiError};

/// Authenticated calls under `/activities/`.
#[derive(Debug, Clone, Copy)]
pub struct ActivitiesClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn activities(&self) -> ActivitiesClient<'_> {
        ActivitiesClient { api: self }
    }
}

impl ActivitiesClient<'_> {
    /// `GET /activities/`
    pub async fn list(&self) -> Result<Vec<Activity>, ApiError> {
        self.api.get_json("activities/", Credentials::Session).await
    }

    /// `GET /activities/my`: activities created by the signed-in user.
    pub async fn list_mine(&self) -> Result<Vec<Activity>, ApiError> {
        self.api.get_json("activities/my", Credentials::Session).await
    }

    /// `POST /activities/`
    pub async fn create(&self, draft: &ActivityDraft) -> Result<Activity, ApiError> {
        self.api
            .send_json(Method::POST, "activities/", Credentials::Session, draft)
            .await
    }

    /// `PUT /activities/{id}`
    pub async fn update(&self, id: ActivityId, draft: &ActivityDraft) -> Result<Activity, ApiError> {
        self.api
            .send_json(
                Method::PUT,
                &format!("activities/{id}"),
                Credentials::Session,
                draft,
            )
            .await
    }

    /// `DELETE /activities/{id}`
    pub async fn delete(&self, id: ActivityId) -> Result<(), ApiError> {
        self.api
            .delete(&format!("activities/{id}"), Credentials::Session)
            .await
    }
}
