//! Paying for a booking through hosted checkout.

use std::sync::Arc;

use thiserror::Error;
use tracing::debug;
use url::Url;

use super::ports::{CheckoutRedirect, CheckoutRedirectError, PaymentGateway};
use super::{ApiError, BookingId};

/// Message shown for any checkout failure.
pub const PAYMENT_FAILURE: &str = "Payment failed";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("checkout session could not be created: {0}")]
    Session(#[from] ApiError),
    #[error(transparent)]
    Redirect(#[from] CheckoutRedirectError),
}

impl CheckoutError {
    /// Text to show the user.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session(err) => err.user_message(PAYMENT_FAILURE),
            Self::Redirect(_) => PAYMENT_FAILURE.to_owned(),
        }
    }
}

/// Opens a checkout session and resolves where to pay.
pub struct CheckoutFlow<P, R> {
    payments: Arc<P>,
    redirect: Arc<R>,
}

impl<P, R> CheckoutFlow<P, R>
where
    P: PaymentGateway,
    R: CheckoutRedirect,
{
    pub fn new(payments: Arc<P>, redirect: Arc<R>) -> Self {
        Self { payments, redirect }
    }

    /// Request a session for `booking` and return the hosted checkout URL.
    pub async fn checkout(&self, booking: BookingId) -> Result<Url, CheckoutError> {
        let session = self.payments.create_checkout_session(booking).await?;
        debug!(booking = booking.get(), "checkout session created");
        Ok(self.redirect.redirect(&session)?)
    }
}
