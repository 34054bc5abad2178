//! Hosted checkout redirect.
//!
//! The payment provider hosts the checkout page; the client only needs to
//! know where it lives. The session identifier becomes the last path segment
//! under the configured base.

use url::Url;

use crate::domain::CheckoutSessionId;
use crate::domain::ports::{CheckoutRedirect, CheckoutRedirectError};

/// Default hosted checkout base.
pub const DEFAULT_CHECKOUT_BASE_URL: &str = "https://checkout.stripe.com/c/pay/";

/// Resolves checkout sessions to pages under a fixed base URL.
#[derive(Debug, Clone)]
pub struct HostedCheckoutRedirect {
    base: Url,
}

impl HostedCheckoutRedirect {
    pub fn new(mut base: Url) -> Self {
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }
        Self { base }
    }
}

impl CheckoutRedirect for HostedCheckoutRedirect {
    fn redirect(&self, session: &CheckoutSessionId) -> Result<Url, CheckoutRedirectError> {
        let id = session.as_str().trim();
        let is_segment = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-'));
        if !is_segment {
            return Err(CheckoutRedirectError::invalid_session(session.as_str()));
        }
        self.base
            .join(id)
            .map_err(|_| CheckoutRedirectError::invalid_session(session.as_str()))
    }
}
