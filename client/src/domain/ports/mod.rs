//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod checkout_redirect;
mod identity_api;
mod payment_gateway;
mod token_store;

#[cfg(test)]
pub use checkout_redirect::MockCheckoutRedirect;
pub use checkout_redirect::{CheckoutRedirect, CheckoutRedirectError};
#[cfg(test)]
pub use identity_api::MockIdentityApi;
pub use identity_api::IdentityApi;
#[cfg(test)]
pub use payment_gateway::MockPaymentGateway;
pub use payment_gateway::PaymentGateway;
#[cfg(test)]
pub use token_store::MockTokenStore;
pub use token_store::{InMemoryTokenStore, TOKEN_KEY, TokenStore, TokenStoreError};
