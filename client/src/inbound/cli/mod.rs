//! Command-line front-end.
//!
//! [`run`] checks the page guard for a command and then hands it to the
//! matching handler. Handlers never fail on API errors: every failure becomes
//! one alert line on the output, and only I/O errors writing that output are
//! returned.

mod activities;
mod admin;
mod args;
mod auth;
mod catalogue;
mod render;
mod reservations;
mod state;

use std::io::{self, Write};

use tracing::debug;

pub use self::args::{
    ActivitiesCommand, ActivityForm, AdminBookingsCommand, AdminCommand, AdminUsersCommand, Cli,
    Command, FacilitiesCommand, FacilityForm, LoginArgs, RegisterArgs, ReservationForm,
    ReservationsCommand, UserForm,
};
pub use self::state::CliState;

use crate::domain::{ApiError, RouteDecision, navigate};

pub const BOOKING_FAILURE: &str = "Booking failed";
pub const REGISTRATION_FAILURE: &str = "Registration failed";
pub const STATUS_UPDATE_FAILURE: &str = "Status update failed";
pub const ADMIN_ONLY: &str = "Only administrators can change facilities";
pub const SELF_DELETE: &str = "You cannot delete your own account";

/// Run one command against `state`, writing its output to `out`.
///
/// # Errors
///
/// Returns an error only when writing to `out` fails.
pub async fn run(state: &CliState, command: Command, out: &mut impl Write) -> io::Result<()> {
    let route = command.route();
    let session = state.session();
    if let RouteDecision::Redirect(to) = navigate(route, &session) {
        debug!(%route, %to, "guard redirected command");
        return render::redirect(out, route, to);
    }

    match command {
        Command::Login(args) => auth::login(state, args, out).await,
        Command::Logout => auth::logout(state, out),
        Command::Register(args) => auth::register(state, args, out).await,
        Command::Whoami => auth::whoami(&session, out),
        Command::Nav => auth::nav(&session, out),
        Command::Sports => catalogue::sports(state, out).await,
        Command::Facilities(command) => catalogue::facilities(state, &session, command, out).await,
        Command::Activities(command) => activities::run(state, &session, command, out).await,
        Command::Reservations(command) => reservations::run(state, &session, command, out).await,
        Command::Checkout { booking } => reservations::checkout(state, booking, out).await,
        Command::Admin(command) => admin::run(state, &session, command, out).await,
    }
}

fn failed(out: &mut impl Write, err: &ApiError, fallback: &str) -> io::Result<()> {
    debug!(error = %err, "request failed");
    render::alert(out, &err.user_message(fallback))
}
