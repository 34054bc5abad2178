//! Facility endpoints.
//!
//! Listing is public. Writes carry the session token, but the client does not
//! check the caller's role: the API decides who may edit facilities.

use reqwest::Method;

use super::client::{ApiClient, Credentials};
use crate::domain::{ApiError, Facility, FacilityDraft, FacilityId};

#[derive(Debug, Clone, Copy)]
pub struct FacilitiesClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn facilities(&self) -> FacilitiesClient<'_> {
        FacilitiesClient { api: self }
    }
}

impl FacilitiesClient<'_> {
    /// `GET /facilities/` (public)
    pub async fn list(&self) -> Result<Vec<Facility>, ApiError> {
        self.api.get_json("facilities/", Credentials::Anonymous).await
    }

    /// `POST /facilities/`
    pub async fn create(&self, draft: &FacilityDraft) -> Result<Facility, ApiError> {
        self.api
            .send_json(Method::POST, "facilities/", Credentials::Session, draft)
            .await
    }

    /// `PUT /facilities/{id}`
    pub async fn update(&self, id: FacilityId, draft: &FacilityDraft) -> Result<Facility, ApiError> {
        self.api
            .send_json(
                Method::PUT,
                &format!("facilities/{id}"),
                Credentials::Session,
                draft,
            )
            .await
    }

    /// `DELETE /facilities/{id}`
    pub async fn delete(&self, id: FacilityId) -> Result<(), ApiError> {
        self.api
            .delete(&format!("facilities/{id}"), Credentials::Session)
            .await
    }
}
