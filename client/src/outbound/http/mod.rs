//! SportHub REST API adapter.
//!
//! [`ApiClient`] owns the transport; resource clients borrow it and map one
//! method to one endpoint. The client implements the identity and payment
//! ports consumed by the domain flows.

mod activities;
mod bookings;
mod client;
mod dto;
mod facilities;
mod identity;
mod payments;
mod sports;
mod users;

pub use activities::ActivitiesClient;
pub use bookings::BookingsClient;
pub use client::ApiClient;
pub use facilities::FacilitiesClient;
pub use sports::SportsClient;
pub use users::UsersClient;
