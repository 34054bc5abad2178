//! Login, logout, registration and start-up rehydration.
//!
//! The gateway owns the only [`SessionStore`]. Views read the session through
//! [`AuthGateway::session`] and never write it directly.

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info, warn};

use super::ports::IdentityApi;
use super::{
    ApiError, AuthError, BearerToken, LoginCredentials, NewUser, Rehydration, Session,
    SessionCommand, SessionStore, SessionView, TokenError, User,
};

/// Authentication use-cases over an [`IdentityApi`].
pub struct AuthGateway<I> {
    identity: Arc<I>,
    sessions: SessionStore,
}

impl<I> AuthGateway<I> {
    /// Create a gateway that writes to `sessions`.
    pub fn new(identity: Arc<I>, sessions: SessionStore) -> Self {
        Self {
            identity,
            sessions,
        }
    }

    /// Subscribe to session changes.
    pub fn session(&self) -> SessionView {
        self.sessions.view()
    }

    /// Current session snapshot.
    pub fn current(&self) -> Session {
        self.sessions.snapshot()
    }

    /// Forget the session. Never fails and never touches the network.
    pub fn logout(&self) {
        if let Err(err) = self.sessions.apply(SessionCommand::Clear) {
            warn!(error = %err, "stored token could not be removed on logout");
        }
    }

    fn discard_persisted(&self, reason: &dyn std::fmt::Display) {
        warn!(%reason, "discarding persisted session");
        if let Err(err) = self.sessions.apply(SessionCommand::Clear) {
            warn!(error = %err, "stored token could not be removed");
        }
    }
}

impl<I> AuthGateway<I>
where
    I: IdentityApi,
{
    /// Exchange credentials for a token and resolve the matching user.
    ///
    /// Token and user are committed together; on failure the previous
    /// session is left as it was.
    pub async fn login(&self, username: &str, password: &str) -> Result<Session, AuthError> {
        let credentials = LoginCredentials::try_from_parts(username, password)?;
        match self.authenticate(&credentials).await {
            Ok(session) => {
                info!(username = credentials.username(), "login succeeded");
                Ok(session)
            }
            Err(err) => {
                debug!(error = %err, username = credentials.username(), "login failed");
                Err(err)
            }
        }
    }

    async fn authenticate(&self, credentials: &LoginCredentials) -> Result<Session, AuthError> {
        let token = self
            .identity
            .issue_token(credentials)
            .await
            .map_err(AuthError::Rejected)?;
        let user = self.resolve_user(&token).await?;
        let session = self
            .sessions
            .apply(SessionCommand::Establish { token, user })?;
        Ok(session)
    }

    async fn resolve_user(&self, token: &BearerToken) -> Result<User, AuthError> {
        let subject = token.claims().map_err(AuthError::Decode)?.subject();
        let user = self
            .identity
            .fetch_user(token, subject)
            .await
            .map_err(AuthError::Profile)?;
        if user.id() != subject {
            return Err(AuthError::SubjectMismatch);
        }
        Ok(user)
    }

    /// Restore the session persisted by a previous run.
    ///
    /// Never fails: any problem clears the stored token and reports
    /// [`Rehydration::LoggedOut`].
    pub async fn rehydrate(&self) -> Rehydration {
        let token = match self.sessions.persisted_token() {
            Ok(Some(token)) => token,
            Ok(None) => {
                debug!("no persisted token");
                self.logout();
                return Rehydration::LoggedOut;
            }
            Err(err) => {
                self.discard_persisted(&err);
                return Rehydration::LoggedOut;
            }
        };

        // Only a stored token is judged against the local clock; a fresh
        // login trusts whatever the server just issued.
        if let Err(err) = reject_expired(&token) {
            self.discard_persisted(&err);
            return Rehydration::LoggedOut;
        }

        let user = match self.resolve_user(&token).await {
            Ok(user) => user,
            Err(err) => {
                self.discard_persisted(&err);
                return Rehydration::LoggedOut;
            }
        };

        match self.sessions.apply(SessionCommand::Establish { token, user }) {
            Ok(session) => {
                debug!("session restored");
                Rehydration::Restored(session)
            }
            Err(err) => {
                self.discard_persisted(&err);
                Rehydration::LoggedOut
            }
        }
    }

    /// Create an account. Does not sign in.
    pub async fn register(&self, draft: &NewUser) -> Result<User, ApiError> {
        self.identity.register(draft).await
    }
}

fn reject_expired(token: &BearerToken) -> Result<(), TokenError> {
    if token.claims()?.is_expired_at(Utc::now()) {
        return Err(TokenError::Expired);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{InMemoryTokenStore, MockIdentityApi, MockTokenStore, TokenStoreError};
    use crate::domain::{Role, SessionError, UserId};
    use base64::Engine as _;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;
    use rstest::rstest;

    fn token_for(payload: &str) -> BearerToken {
        let body = URL_SAFE_NO_PAD.encode(payload.as_bytes());
        BearerToken::new(format!("e30.{body}.sig"))
    }

    fn alice() -> User {
        User::new(UserId::new(42), "alice", "alice@example.com", Role::User)
    }

    fn make_gateway(
        identity: MockIdentityApi,
        storage: Arc<InMemoryTokenStore>,
    ) -> AuthGateway<MockIdentityApi> {
        AuthGateway::new(Arc::new(identity), SessionStore::new(storage))
    }

    #[rstest]
    #[tokio::test]
    async fn login_commits_token_and_user() {
        let mut identity = MockIdentityApi::new();
        identity
            .expect_issue_token()
            .times(1)
            .returning(|_| Ok(token_for(r#"{"sub":"42"}"#)));
        identity
            .expect_fetch_user()
            .withf(|_, id| *id == UserId::new(42))
            .times(1)
            .returning(|_, _| Ok(alice()));
        let storage = Arc::new(InMemoryTokenStore::default());
        let gateway = make_gateway(identity, storage.clone());

        let session = gateway.login("alice", "pw").await.expect("login succeeds");

        assert_eq!(session.user().map(User::role), Some(Role::User));
        assert!(storage.raw().is_some());
        assert_eq!(gateway.current(), session);
    }

    #[rstest]
    #[tokio::test]
    async fn login_accepts_token_already_expired_by_local_clock() {
        let mut identity = MockIdentityApi::new();
        identity
            .expect_issue_token()
            .times(1)
            .returning(|_| Ok(token_for(r#"{"sub":"42","exp":1000}"#)));
        identity
            .expect_fetch_user()
            .times(1)
            .returning(|_, _| Ok(alice()));
        let storage = Arc::new(InMemoryTokenStore::default());
        let gateway = make_gateway(identity, storage.clone());

        let session = gateway
            .login("alice", "pw")
            .await
            .expect("server-issued token is trusted at login");

        assert_eq!(session.user().map(User::id), Some(UserId::new(42)));
        assert!(storage.raw().is_some());
    }

    #[rstest]
    #[tokio::test]
    async fn blank_credentials_never_reach_the_api() {
        let mut identity = MockIdentityApi::new();
        identity.expect_issue_token().never();
        let gateway = make_gateway(identity, Arc::new(InMemoryTokenStore::default()));

        let err = gateway.login("  ", "pw").await.expect_err("blank username");
        assert!(matches!(err, AuthError::InvalidInput(_)));
    }

    #[rstest]
    #[tokio::test]
    async fn rejected_login_leaves_prior_session() {
        let mut identity = MockIdentityApi::new();
        let mut first = true;
        identity.expect_issue_token().times(2).returning(move |_| {
            if std::mem::take(&mut first) {
                Ok(token_for(r#"{"sub":"42"}"#))
            } else {
                Err(ApiError::status(401, Some("Incorrect username or password".into())))
            }
        });
        identity.expect_fetch_user().returning(|_, _| Ok(alice()));
        let gateway = make_gateway(identity, Arc::new(InMemoryTokenStore::default()));

        let before = gateway.login("alice", "pw").await.expect("first login");
        let err = gateway.login("alice", "wrong").await.expect_err("bad password");

        assert_eq!(err.user_message(), "Invalid username or password");
        assert_eq!(gateway.current(), before);
    }

    #[rstest]
    #[tokio::test]
    async fn undecodable_token_is_a_login_failure() {
        let mut identity = MockIdentityApi::new();
        identity
            .expect_issue_token()
            .returning(|_| Ok(BearerToken::new("opaque")));
        identity.expect_fetch_user().never();
        let gateway = make_gateway(identity, Arc::new(InMemoryTokenStore::default()));

        let err = gateway.login("alice", "pw").await.expect_err("opaque token");
        assert!(matches!(err, AuthError::Decode(TokenError::Malformed(_))));
        assert_eq!(gateway.current(), Session::logged_out());
    }

    #[rstest]
    #[tokio::test]
    async fn profile_for_another_user_is_rejected() {
        let mut identity = MockIdentityApi::new();
        identity
            .expect_issue_token()
            .returning(|_| Ok(token_for(r#"{"sub":"7"}"#)));
        identity.expect_fetch_user().returning(|_, _| Ok(alice()));
        let gateway = make_gateway(identity, Arc::new(InMemoryTokenStore::default()));

        let err = gateway.login("alice", "pw").await.expect_err("mismatch");
        assert_eq!(err, AuthError::SubjectMismatch);
    }

    #[rstest]
    #[tokio::test]
    async fn storage_failure_fails_login_without_committing() {
        let mut identity = MockIdentityApi::new();
        identity
            .expect_issue_token()
            .returning(|_| Ok(token_for(r#"{"sub":"42"}"#)));
        identity.expect_fetch_user().returning(|_, _| Ok(alice()));
        let mut storage = MockTokenStore::new();
        storage
            .expect_save()
            .returning(|_| Err(TokenStoreError::write("read-only file system")));
        let gateway = AuthGateway::new(Arc::new(identity), SessionStore::new(Arc::new(storage)));

        let err = gateway.login("alice", "pw").await.expect_err("storage failure");
        assert!(matches!(err, AuthError::Session(SessionError::Storage(_))));
        assert_eq!(gateway.current(), Session::logged_out());
    }

    #[rstest]
    #[tokio::test]
    async fn rehydrate_restores_persisted_session() {
        let raw = token_for(r#"{"sub":42}"#).as_str().to_owned();
        let mut identity = MockIdentityApi::new();
        identity.expect_fetch_user().times(1).returning(|_, _| Ok(alice()));
        let storage = Arc::new(InMemoryTokenStore::with_token(raw.clone()));
        let gateway = make_gateway(identity, storage.clone());

        let outcome = gateway.rehydrate().await;

        assert!(matches!(outcome, Rehydration::Restored(ref s) if s.is_authenticated()));
        assert_eq!(storage.raw(), Some(raw));
    }

    #[rstest]
    #[case::malformed("not-a-token".to_owned())]
    #[case::username_subject(token_for(r#"{"sub":"alice"}"#).as_str().to_owned())]
    #[case::expired(token_for(r#"{"sub":"42","exp":1}"#).as_str().to_owned())]
    #[tokio::test]
    async fn rehydrate_discards_unusable_tokens(#[case] raw: String) {
        let mut identity = MockIdentityApi::new();
        identity.expect_fetch_user().never();
        let storage = Arc::new(InMemoryTokenStore::with_token(raw));
        let gateway = make_gateway(identity, storage.clone());

        assert_eq!(gateway.rehydrate().await, Rehydration::LoggedOut);
        assert_eq!(gateway.rehydrate().await, Rehydration::LoggedOut);
        assert_eq!(storage.raw(), None);
    }

    #[rstest]
    #[case::unknown_subject(ApiError::status(404, Some("User not found".into())))]
    #[case::network_down(ApiError::network("connection refused"))]
    #[tokio::test]
    async fn rehydrate_discards_token_when_profile_fetch_fails(#[case] failure: ApiError) {
        let mut identity = MockIdentityApi::new();
        identity
            .expect_fetch_user()
            .times(1)
            .returning(move |_, _| Err(failure.clone()));
        let storage = Arc::new(InMemoryTokenStore::with_token(
            token_for(r#"{"sub":"42"}"#).as_str(),
        ));
        let gateway = make_gateway(identity, storage.clone());

        assert_eq!(gateway.rehydrate().await, Rehydration::LoggedOut);
        assert_eq!(storage.raw(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn rehydrate_recovers_from_storage_read_errors() {
        let mut storage = MockTokenStore::new();
        storage
            .expect_load()
            .returning(|| Err(TokenStoreError::read("permission denied")));
        storage.expect_clear().times(1).returning(|| Ok(()));
        let gateway = AuthGateway::new(
            Arc::new(MockIdentityApi::new()),
            SessionStore::new(Arc::new(storage)),
        );

        assert_eq!(gateway.rehydrate().await, Rehydration::LoggedOut);
    }

    #[rstest]
    #[tokio::test]
    async fn logout_is_idempotent_and_swallows_storage_errors() {
        let mut storage = MockTokenStore::new();
        storage
            .expect_clear()
            .times(2)
            .returning(|| Err(TokenStoreError::write("locked")));
        let gateway = AuthGateway::new(
            Arc::new(MockIdentityApi::new()),
            SessionStore::new(Arc::new(storage)),
        );

        gateway.logout();
        gateway.logout();
        assert_eq!(gateway.current(), Session::logged_out());
    }

    #[rstest]
    #[tokio::test]
    async fn register_does_not_touch_the_session() {
        let mut identity = MockIdentityApi::new();
        identity.expect_register().times(1).returning(|_| Ok(alice()));
        let gateway = make_gateway(identity, Arc::new(InMemoryTokenStore::default()));
        let draft = NewUser::try_new("alice", "alice@example.com", "pw").expect("draft");

        let user = gateway.register(&draft).await.expect("registered");
        assert_eq!(user.username(), "alice");
        assert_eq!(gateway.current(), Session::logged_out());
    }
}
