//! Session state shared by the gateway, guards and views.
//!
//! [`SessionStore`] is the only writer. It persists the token through a
//! [`TokenStore`] and publishes every change over a watch channel, so any
//! number of [`SessionView`]s observe a consistent snapshot without locking.
//!
//! ## Invariant
//! A snapshot never carries a user without a token. Setting a new token drops
//! the cached user until the caller resolves the matching profile.

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::watch;
use tracing::debug;

use super::ports::{TokenStore, TokenStoreError};
use super::{BearerToken, User};

/// Snapshot of who is signed in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    token: Option<BearerToken>,
    user: Option<User>,
}

impl Session {
    /// Session with neither token nor user.
    pub fn logged_out() -> Self {
        Self::default()
    }

    /// Session for a resolved user.
    pub fn authenticated(token: BearerToken, user: User) -> Self {
        Self {
            token: Some(token),
            user: Some(user),
        }
    }

    pub fn token(&self) -> Option<&BearerToken> {
        self.token.as_ref()
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Whether a user has been resolved for this session.
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    /// Whether the resolved user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(User::is_admin)
    }
}

/// Outcome of restoring a session at start-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rehydration {
    /// The persisted token resolved to a user.
    Restored(Session),
    /// Nothing usable was persisted; storage has been cleared.
    LoggedOut,
}

/// Writes accepted by [`SessionStore::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Persist `token` and publish it together with `user`.
    Establish { token: BearerToken, user: User },
    /// Forget the token and user.
    Clear,
}

/// Errors raised by session writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A user was set while no token was held.
    #[error("cannot set a user without a token")]
    NoToken,
    #[error(transparent)]
    Storage(#[from] TokenStoreError),
}

/// Read-only handle on the current session.
#[derive(Debug, Clone)]
pub struct SessionView {
    rx: watch::Receiver<Session>,
}

impl SessionView {
    /// Clone of the latest snapshot.
    pub fn snapshot(&self) -> Session {
        self.rx.borrow().clone()
    }

    pub fn token(&self) -> Option<BearerToken> {
        self.rx.borrow().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.rx.borrow().user.clone()
    }

    /// Wait until the session changes. Returns `false` once the store is gone.
    pub async fn changed(&mut self) -> bool {
        self.rx.changed().await.is_ok()
    }

    /// View of a fixed session with no store behind it.
    pub fn fixed(session: Session) -> Self {
        let (_tx, rx) = watch::channel(session);
        Self { rx }
    }
}

/// Single writer for the session.
pub struct SessionStore {
    storage: Arc<dyn TokenStore>,
    tx: watch::Sender<Session>,
}

impl SessionStore {
    /// Start logged out; call [`Self::persisted_token`] to rehydrate.
    pub fn new(storage: Arc<dyn TokenStore>) -> Self {
        let (tx, _rx) = watch::channel(Session::logged_out());
        Self { storage, tx }
    }

    /// Subscribe a new reader.
    pub fn view(&self) -> SessionView {
        SessionView {
            rx: self.tx.subscribe(),
        }
    }

    /// Clone of the current snapshot.
    pub fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub fn token(&self) -> Option<BearerToken> {
        self.tx.borrow().token.clone()
    }

    pub fn user(&self) -> Option<User> {
        self.tx.borrow().user.clone()
    }

    /// Token left in durable storage by a previous run.
    pub fn persisted_token(&self) -> Result<Option<BearerToken>, TokenStoreError> {
        self.storage.load()
    }

    /// Persist `token` and publish it with no user.
    ///
    /// The in-memory session is left untouched when persistence fails.
    pub fn set_token(&self, token: BearerToken) -> Result<(), SessionError> {
        self.storage.save(&token)?;
        self.tx.send_replace(Session {
            token: Some(token),
            user: None,
        });
        debug!("session token replaced");
        Ok(())
    }

    /// Forget the token in memory, then in storage.
    ///
    /// The in-memory session is always cleared; the returned error only
    /// reports the storage side.
    pub fn clear_token(&self) -> Result<(), SessionError> {
        self.tx.send_replace(Session::logged_out());
        self.storage.clear()?;
        Ok(())
    }

    /// Attach the resolved user to the held token.
    pub fn set_user(&self, user: User) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.tx.send_if_modified(|session| {
            if session.token.is_none() {
                result = Err(SessionError::NoToken);
                return false;
            }
            session.user = Some(user);
            true
        });
        result
    }

    /// Apply a command and return the resulting snapshot.
    pub fn apply(&self, command: SessionCommand) -> Result<Session, SessionError> {
        match command {
            SessionCommand::Establish { token, user } => {
                self.storage.save(&token)?;
                let session = Session::authenticated(token, user);
                self.tx.send_replace(session.clone());
                debug!("session established");
                Ok(session)
            }
            SessionCommand::Clear => {
                self.clear_token()?;
                Ok(Session::logged_out())
            }
        }
    }
}
