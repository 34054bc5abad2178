//! Sport catalogue endpoint.

use super::client::{ApiClient, Credentials};
use crate::domain::{ApiError, Sport};

#[derive(Debug, Clone, Copy)]
pub struct SportsClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn sports(&self) -> SportsClient<'_> {
        SportsClient { api: self }
    }
}

impl SportsClient<'_> {
    /// `GET /sports/` (public)
    pub async fn list(&self) -> Result<Vec<Sport>, ApiError> {
        self.api.get_json("sports/", Credentials::Anonymous).await
    }
}
