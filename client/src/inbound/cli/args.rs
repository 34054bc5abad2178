//! Command-line surface.
//!
//! Each subcommand stands in for one page of the application; [`Command::route`]
//! names that page so the dispatcher can run its guard before anything else.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use url::Url;

use crate::domain::{
    ActivityId, BookingId, BookingStatus, FacilityId, Gender, Route, SportId, UserId,
};

/// SportHub activity and facility booking client.
#[derive(Debug, Parser)]
#[command(name = "sporthub", version, about)]
pub struct Cli {
    /// Override the configured API base URL.
    #[arg(long, global = true, value_name = "URL")]
    pub api_url: Option<Url>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in and remember the session.
    Login(LoginArgs),
    /// Forget the current session.
    Logout,
    /// Create an account.
    Register(RegisterArgs),
    /// Show the signed-in profile.
    Whoami,
    /// List the pages the current session may open.
    Nav,
    /// List sports.
    Sports,
    /// Browse and organise activities.
    #[command(subcommand)]
    Activities(ActivitiesCommand),
    /// Browse and manage facilities.
    #[command(subcommand)]
    Facilities(FacilitiesCommand),
    /// Your facility reservations.
    #[command(subcommand)]
    Reservations(ReservationsCommand),
    /// Pay for a reservation through the hosted checkout page.
    Checkout {
        /// Reservation to pay for.
        booking: BookingId,
    },
    /// Administration.
    #[command(subcommand)]
    Admin(AdminCommand),
}

impl Command {
    /// Page this command renders.
    pub fn route(&self) -> Route {
        match self {
            Self::Login(_) | Self::Logout => Route::Login,
            Self::Register(_) => Route::Register,
            Self::Whoami => Route::Dashboard,
            Self::Nav | Self::Sports => Route::Home,
            Self::Activities(_) => Route::Activities,
            Self::Facilities(_) => Route::Facilities,
            Self::Reservations(_) | Self::Checkout { .. } => Route::Reservations,
            Self::Admin(_) => Route::Admin,
        }
    }
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    pub username: String,
    #[arg(long, env = "SPORTHUB_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Debug, Args)]
pub struct RegisterArgs {
    pub username: String,
    pub email: String,
    #[arg(long, env = "SPORTHUB_PASSWORD", hide_env_values = true)]
    pub password: String,
    #[arg(long)]
    pub full_name: Option<String>,
    #[arg(long)]
    pub gender: Option<Gender>,
    /// Birth date as `YYYY-MM-DD`.
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
}

#[derive(Debug, Subcommand)]
pub enum ActivitiesCommand {
    /// Every activity.
    List,
    /// Activities you organise.
    Mine,
    /// Create an activity, or update one with `--id`.
    Save(ActivityForm),
    /// Delete an activity.
    Delete { id: ActivityId },
}

#[derive(Debug, Args)]
pub struct ActivityForm {
    #[arg(long)]
    pub id: Option<ActivityId>,
    #[arg(long)]
    pub sport: SportId,
    /// Start as `YYYY-MM-DDTHH:MM`.
    #[arg(long)]
    pub date: String,
    #[arg(long)]
    pub location: String,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated usernames to invite.
    #[arg(long)]
    pub participants: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum FacilitiesCommand {
    /// Every facility.
    List,
    /// Create a facility, or update one with `--id` (admins only).
    Save(FacilityForm),
    /// Delete a facility (admins only).
    Delete { id: FacilityId },
}

#[derive(Debug, Args)]
pub struct FacilityForm {
    #[arg(long)]
    pub id: Option<FacilityId>,
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub sport: SportId,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub contact: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum ReservationsCommand {
    /// Your reservations.
    List,
    /// Reserve a facility.
    Create(ReservationForm),
}

#[derive(Debug, Args)]
pub struct ReservationForm {
    #[arg(long)]
    pub facility: FacilityId,
    /// Start as `YYYY-MM-DDTHH:MM`.
    #[arg(long)]
    pub date: String,
    /// Length in hours, 1 to 8 (default 1).
    #[arg(long, allow_negative_numbers = true)]
    pub duration: Option<i64>,
}

#[derive(Debug, Subcommand)]
pub enum AdminCommand {
    /// Manage accounts.
    #[command(subcommand)]
    Users(AdminUsersCommand),
    /// Review reservations.
    #[command(subcommand)]
    Bookings(AdminBookingsCommand),
}

#[derive(Debug, Subcommand)]
pub enum AdminUsersCommand {
    List,
    /// Create an account, or update one with `--id`.
    Save(UserForm),
    Delete { id: UserId },
}

#[derive(Debug, Args)]
pub struct UserForm {
    #[arg(long)]
    pub id: Option<UserId>,
    #[arg(long)]
    pub username: String,
    #[arg(long)]
    pub email: String,
    /// Required when creating; left unchanged on update when omitted.
    #[arg(long)]
    pub password: Option<String>,
    #[arg(long)]
    pub full_name: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum AdminBookingsCommand {
    List,
    /// Change a reservation's status.
    SetStatus { id: BookingId, status: BookingStatus },
}
