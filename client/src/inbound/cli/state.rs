//! Shared state handed to every command handler.

use std::sync::Arc;

use url::Url;

use crate::domain::ports::TokenStore;
use crate::domain::{AuthGateway, CheckoutFlow, Session, SessionStore};
use crate::outbound::checkout::HostedCheckoutRedirect;
use crate::outbound::http::ApiClient;

/// Dependency bundle for the command handlers.
///
/// The gateway owns the session; the API client and the checkout flow read
/// it through the gateway's view, so a login is visible to them at once.
pub struct CliState {
    pub auth: AuthGateway<ApiClient>,
    pub api: Arc<ApiClient>,
    pub checkout: CheckoutFlow<ApiClient, HostedCheckoutRedirect>,
}

impl CliState {
    /// Wire the client stack around `storage`.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be constructed.
    pub fn new(
        api_base: Url,
        storage: Arc<dyn TokenStore>,
        checkout_base: Url,
    ) -> Result<Self, reqwest::Error> {
        let sessions = SessionStore::new(storage);
        let api = Arc::new(ApiClient::new(api_base, sessions.view())?);
        let auth = AuthGateway::new(Arc::clone(&api), sessions);
        let checkout = CheckoutFlow::new(
            Arc::clone(&api),
            Arc::new(HostedCheckoutRedirect::new(checkout_base)),
        );
        Ok(Self {
            auth,
            api,
            checkout,
        })
    }

    /// Current session snapshot.
    pub fn session(&self) -> Session {
        self.auth.current()
    }
}
