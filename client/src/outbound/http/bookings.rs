//! Booking endpoints, including the admin status change.

use reqwest::Method;

use super::client::{ApiClient, Credentials};
use super::dto::StatusUpdateDto;
use crate::domain::{ApiError, Booking, BookingDraft, BookingId, BookingStatus, UserId};

#[derive(Debug, Clone, Copy)]
pub struct BookingsClient<'a> {
    api: &'a ApiClient,
}

impl ApiClient {
    pub fn bookings(&self) -> BookingsClient<'_> {
        BookingsClient { api: self }
    }
}

impl BookingsClient<'_> {
    /// `GET /bookings/`
    pub async fn list(&self) -> Result<Vec<Booking>, ApiError> {
        self.api.get_json("bookings/", Credentials::Session).await
    }

    /// [`Self::list`] narrowed to one user's bookings.
    ///
    /// The API has no per-user listing, so the filter runs client-side.
    pub async fn list_for_user(&self, user: UserId) -> Result<Vec<Booking>, ApiError> {
        let mut bookings = self.list().await?;
        bookings.retain(|booking| booking.user_id() == user);
        Ok(bookings)
    }

    /// `POST /users/{id}/bookings/`
    pub async fn create_for_user(
        &self,
        user: UserId,
        draft: &BookingDraft,
    ) -> Result<Booking, ApiError> {
        self.api
            .send_json(
                Method::POST,
                &format!("users/{user}/bookings/"),
                Credentials::Session,
                draft,
            )
            .await
    }

    /// `PATCH /admin/bookings/{id}/status`
    pub async fn update_status(
        &self,
        id: BookingId,
        status: BookingStatus,
    ) -> Result<Booking, ApiError> {
        self.api
            .send_json(
                Method::PATCH,
                &format!("admin/bookings/{id}/status"),
                Credentials::Session,
                &StatusUpdateDto { status },
            )
            .await
    }
}
