//! Route table and the guards that gate it.
//!
//! Guards are pure functions of the in-memory [`Session`]: they never touch
//! storage or the network, so a page decides whether to render before it
//! issues any request.

use std::fmt;
use std::str::FromStr;

use super::Session;

/// Pages of the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Home,
    Login,
    Register,
    Dashboard,
    Events,
    Facilities,
    Reservations,
    Forum,
    Activities,
    Admin,
}

/// Who may open a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Authenticated,
    Admin,
}

impl Route {
    /// Every route, in navigation order.
    pub const ALL: [Self; 10] = [
        Self::Home,
        Self::Login,
        Self::Register,
        Self::Dashboard,
        Self::Events,
        Self::Facilities,
        Self::Reservations,
        Self::Forum,
        Self::Activities,
        Self::Admin,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Login => "/login",
            Self::Register => "/register",
            Self::Dashboard => "/dashboard",
            Self::Events => "/events",
            Self::Facilities => "/facilities",
            Self::Reservations => "/reservations",
            Self::Forum => "/forum",
            Self::Activities => "/activities",
            Self::Admin => "/admin",
        }
    }

    pub fn access(self) -> RouteAccess {
        match self {
            Self::Home | Self::Login | Self::Register => RouteAccess::Public,
            Self::Admin => RouteAccess::Admin,
            Self::Dashboard
            | Self::Events
            | Self::Facilities
            | Self::Reservations
            | Self::Forum
            | Self::Activities => RouteAccess::Authenticated,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Raised for paths outside the route table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownRoute(pub String);

impl fmt::Display for UnknownRoute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no page at `{}`", self.0)
    }
}

impl std::error::Error for UnknownRoute {}

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let normalised = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        Self::ALL
            .into_iter()
            .find(|route| route.path() == normalised)
            .ok_or_else(|| UnknownRoute(trimmed.to_owned()))
    }
}

/// Result of evaluating a guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision {
    Allow,
    Redirect(Route),
}

impl RouteDecision {
    pub fn is_allowed(self) -> bool {
        matches!(self, Self::Allow)
    }
}

/// Allow signed-in users; send everyone else to the login page.
pub fn require_auth(session: &Session) -> RouteDecision {
    if session.is_authenticated() {
        RouteDecision::Allow
    } else {
        RouteDecision::Redirect(Route::Login)
    }
}

/// Allow admins; send anonymous users to login and other users home.
///
/// # Examples
/// ```
/// use sporthub_client::domain::{RouteDecision, Route, Session, require_admin};
///
/// assert_eq!(
///     require_admin(&Session::logged_out()),
///     RouteDecision::Redirect(Route::Login)
/// );
/// ```
pub fn require_admin(session: &Session) -> RouteDecision {
    match session.user() {
        None => RouteDecision::Redirect(Route::Login),
        Some(user) if !user.is_admin() => RouteDecision::Redirect(Route::Home),
        Some(_) => RouteDecision::Allow,
    }
}

/// Apply the guard that protects `route`.
pub fn navigate(route: Route, session: &Session) -> RouteDecision {
    match route.access() {
        RouteAccess::Public => RouteDecision::Allow,
        RouteAccess::Authenticated => require_auth(session),
        RouteAccess::Admin => require_admin(session),
    }
}

/// Navigation links offered to `session`.
pub fn visible_routes(session: &Session) -> Vec<Route> {
    match session.user() {
        None => vec![Route::Home, Route::Login, Route::Register],
        Some(user) => {
            let mut routes = vec![Route::Dashboard, Route::Facilities, Route::Activities];
            if user.is_admin() {
                routes.push(Route::Admin);
            }
            routes
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{BearerToken, Role, User, UserId};
    use rstest::rstest;

    fn session_for(role: Role) -> Session {
        Session::authenticated(
            BearerToken::new("h.p.s"),
            User::new(UserId::new(42), "alice", "alice@example.com", role),
        )
    }

    #[rstest]
    #[case::anonymous(Session::logged_out(), RouteDecision::Redirect(Route::Login))]
    #[case::user(session_for(Role::User), RouteDecision::Allow)]
    #[case::admin(session_for(Role::Admin), RouteDecision::Allow)]
    fn require_auth_cases(#[case] session: Session, #[case] expected: RouteDecision) {
        assert_eq!(require_auth(&session), expected);
    }

    #[rstest]
    #[case::anonymous(Session::logged_out(), RouteDecision::Redirect(Route::Login))]
    #[case::user(session_for(Role::User), RouteDecision::Redirect(Route::Home))]
    #[case::admin(session_for(Role::Admin), RouteDecision::Allow)]
    fn require_admin_cases(#[case] session: Session, #[case] expected: RouteDecision) {
        assert_eq!(require_admin(&session), expected);
    }

    #[rstest]
    fn token_without_user_is_not_authenticated() {
        let store = crate::domain::SessionStore::new(std::sync::Arc::new(
            crate::domain::ports::InMemoryTokenStore::default(),
        ));
        store.set_token(BearerToken::new("h.p.s")).expect("set token");
        assert_eq!(
            require_auth(&store.snapshot()),
            RouteDecision::Redirect(Route::Login)
        );
    }

    #[rstest]
    #[case::home(Route::Home, RouteDecision::Allow)]
    #[case::register(Route::Register, RouteDecision::Allow)]
    #[case::forum(Route::Forum, RouteDecision::Redirect(Route::Login))]
    #[case::admin(Route::Admin, RouteDecision::Redirect(Route::Login))]
    fn navigate_while_logged_out(#[case] route: Route, #[case] expected: RouteDecision) {
        assert_eq!(navigate(route, &Session::logged_out()), expected);
    }

    #[rstest]
    fn navigate_admin_as_user_goes_home() {
        assert_eq!(
            navigate(Route::Admin, &session_for(Role::User)),
            RouteDecision::Redirect(Route::Home)
        );
    }

    #[rstest]
    #[case::anonymous(Session::logged_out(), vec![Route::Home, Route::Login, Route::Register])]
    #[case::user(session_for(Role::User), vec![Route::Dashboard, Route::Facilities, Route::Activities])]
    #[case::admin(
        session_for(Role::Admin),
        vec![Route::Dashboard, Route::Facilities, Route::Activities, Route::Admin]
    )]
    fn visible_routes_follow_role(#[case] session: Session, #[case] expected: Vec<Route>) {
        assert_eq!(visible_routes(&session), expected);
    }

    #[rstest]
    #[case::root("/", Route::Home)]
    #[case::trailing("/admin/", Route::Admin)]
    #[case::plain("/reservations", Route::Reservations)]
    fn paths_parse_to_routes(#[case] path: &str, #[case] expected: Route) {
        assert_eq!(path.parse::<Route>(), Ok(expected));
    }

    #[rstest]
    fn unknown_paths_are_rejected() {
        assert!("/nowhere".parse::<Route>().is_err());
    }
}
