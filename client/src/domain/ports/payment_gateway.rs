//! Port for opening hosted-checkout sessions.
use async_trait::async_trait;

use crate::domain::{ApiError, BookingId, CheckoutSessionId};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Ask the API to open a checkout session paying for `booking`.
    async fn create_checkout_session(
        &self,
        booking: BookingId,
    ) -> Result<CheckoutSessionId, ApiError>;
}
