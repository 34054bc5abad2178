//! Port that hands a checkout session to the payment provider.
use url::Url;

use crate::domain::CheckoutSessionId;

use super::define_port_error;

define_port_error! {
    /// Errors raised while resolving the hosted checkout page.
    pub enum CheckoutRedirectError {
        /// The session identifier could not be turned into a URL.
        InvalidSession { session: String } => "checkout session `{session}` cannot be redirected to",
    }
}

#[cfg_attr(test, mockall::automock)]
pub trait CheckoutRedirect: Send + Sync {
    /// Resolve the page the user should open to pay.
    fn redirect(&self, session: &CheckoutSessionId) -> Result<Url, CheckoutRedirectError>;
}
