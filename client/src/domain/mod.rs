//! Domain primitives, session state and use-cases.
//!
//! Purpose: Define strongly typed SportHub entities, the session model and
//! the auth/checkout flows. Nothing here performs I/O directly; adapters in
//! `outbound` implement the ports this module declares.
//!
//! Public surface:
//! - ApiError (alias to `error::ApiError`): failure of a single API call.
//! - Session / SessionStore / SessionView: single-writer session state.
//! - AuthGateway: login, logout, rehydration and registration.
//! - Route guards: `require_auth`, `require_admin`, `navigate`.
//! - Entities and drafts: users, sports, facilities, activities, bookings.
//! - CheckoutFlow: hosted payment hand-off.

pub mod auth;
pub mod auth_gateway;
pub mod checkout;
pub mod datetime;
pub mod error;
pub mod guards;
pub mod ports;
pub mod session;
pub mod token;
pub mod user;

mod activity;
mod booking;
mod facility;
mod ids;
mod payment;
mod sport;

pub use self::activity::{
    Activity, ActivityDraft, ActivityId, ActivityValidationError, parse_participants,
};
pub use self::auth::{AuthError, LOGIN_FAILURE, LoginCredentials, LoginValidationError};
pub use self::auth_gateway::AuthGateway;
pub use self::booking::{
    Booking, BookingDraft, BookingDuration, BookingId, BookingStatus, BookingValidationError,
};
pub use self::checkout::{CheckoutError, CheckoutFlow, PAYMENT_FAILURE};
pub use self::datetime::{DateTimeParseError, WIRE_FORMAT, parse_form_datetime};
pub use self::error::{ApiError, GENERIC_FAILURE};
pub use self::facility::{Facility, FacilityDraft, FacilityId, FacilityValidationError};
pub use self::guards::{
    Route, RouteAccess, RouteDecision, UnknownRoute, navigate, require_admin, require_auth,
    visible_routes,
};
pub use self::ids::IdParseError;
pub use self::payment::CheckoutSessionId;
pub use self::session::{
    Rehydration, Session, SessionCommand, SessionError, SessionStore, SessionView,
};
pub use self::sport::{Sport, SportId};
pub use self::token::{BearerToken, SessionClaims, TokenError};
pub use self::user::{Gender, NewUser, Role, User, UserId, UserUpdate, UserValidationError};
