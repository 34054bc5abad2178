//! Port abstraction for persisting the bearer token between runs.
//!
//! The session keeps exactly one durable value: the raw token string under
//! the [`TOKEN_KEY`] name. Everything else is rebuilt from the API.

use std::sync::Mutex;

use crate::domain::BearerToken;

use super::define_port_error;

/// Storage name of the persisted token.
pub const TOKEN_KEY: &str = "token";

define_port_error! {
    /// Errors raised by token storage adapters.
    pub enum TokenStoreError {
        /// Stored token could not be read.
        Read { message: String } => "token storage read failed: {message}",
        /// Token could not be written or removed.
        Write { message: String } => "token storage write failed: {message}",
    }
}

/// Durable home for the session token.
#[cfg_attr(test, mockall::automock)]
pub trait TokenStore: Send + Sync {
    /// Read the persisted token, if one exists.
    fn load(&self) -> Result<Option<BearerToken>, TokenStoreError>;

    /// Persist `token`, replacing any previous value.
    fn save(&self, token: &BearerToken) -> Result<(), TokenStoreError>;

    /// Remove the persisted token. Succeeds when nothing is stored.
    fn clear(&self) -> Result<(), TokenStoreError>;
}

/// Process-local token store for tests and embedding.
#[derive(Debug, Default)]
pub struct InMemoryTokenStore {
    slot: Mutex<Option<String>>,
}

impl InMemoryTokenStore {
    /// Start with `raw` already persisted, as if written by a previous run.
    pub fn with_token(raw: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(raw.into())),
        }
    }

    /// Raw stored value, bypassing token parsing.
    pub fn raw(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }
}

impl TokenStore for InMemoryTokenStore {
    fn load(&self) -> Result<Option<BearerToken>, TokenStoreError> {
        let slot = self
            .slot
            .lock()
            .map_err(|err| TokenStoreError::read(err.to_string()))?;
        Ok(slot
            .as_deref()
            .filter(|raw| !raw.trim().is_empty())
            .map(BearerToken::new))
    }

    fn save(&self, token: &BearerToken) -> Result<(), TokenStoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|err| TokenStoreError::write(err.to_string()))?;
        *slot = Some(token.as_str().to_owned());
        Ok(())
    }

    fn clear(&self) -> Result<(), TokenStoreError> {
        let mut slot = self
            .slot
            .lock()
            .map_err(|err| TokenStoreError::write(err.to_string()))?;
        *slot = None;
        Ok(())
    }
}
