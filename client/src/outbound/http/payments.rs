//! Checkout session endpoint.

use async_trait::async_trait;
use reqwest::Method;

use super::client::{ApiClient, Credentials};
use super::dto::{CheckoutRequestDto, CheckoutResponseDto};
use crate::domain::ports::PaymentGateway;
use crate::domain::{ApiError, BookingId, CheckoutSessionId};

#[async_trait]
impl PaymentGateway for ApiClient {
    async fn create_checkout_session(
        &self,
        booking: BookingId,
    ) -> Result<CheckoutSessionId, ApiError> {
        let response: CheckoutResponseDto = self
            .send_json(
                Method::POST,
                "payments/checkout-session",
                Credentials::Session,
                &CheckoutRequestDto {
                    booking_id: booking,
                },
            )
            .await?;
        if response.session_id.trim().is_empty() {
            return Err(ApiError::decode("checkout response carried an empty sessionId"));
        }
        Ok(CheckoutSessionId::new(response.session_id))
    }
}
