//! Reservations and payment.

use std::io::{self, Write};

use super::args::{ReservationForm, ReservationsCommand};
use super::{BOOKING_FAILURE, CliState, failed, render};
use crate::domain::{BookingDraft, BookingId, GENERIC_FAILURE, Route, Session, UserId};

pub(super) async fn run(
    state: &CliState,
    session: &Session,
    command: ReservationsCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    let Some(user) = session.user() else {
        return render::redirect(out, Route::Reservations, Route::Login);
    };
    let bookings = state.api.bookings();
    match command {
        ReservationsCommand::List => match bookings.list_for_user(user.id()).await {
            Ok(list) => render::bookings(out, &list, false),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        ReservationsCommand::Create(form) => create(state, user.id(), form, out).await,
    }
}

async fn create(
    state: &CliState,
    user: UserId,
    form: ReservationForm,
    out: &mut impl Write,
) -> io::Result<()> {
    // A rejected draft never reaches the network.
    let draft = match BookingDraft::try_new(form.facility, &form.date, form.duration) {
        Ok(draft) => draft,
        Err(err) => return render::alert(out, &err.to_string()),
    };
    match state.api.bookings().create_for_user(user, &draft).await {
        Ok(booking) => render::notice(
            out,
            &format!(
                "Reservation {} created ({}, {}h)",
                booking.id(),
                booking.status(),
                booking.duration()
            ),
        ),
        Err(err) => failed(out, &err, BOOKING_FAILURE),
    }
}

pub(super) async fn checkout(
    state: &CliState,
    booking: BookingId,
    out: &mut impl Write,
) -> io::Result<()> {
    match state.checkout.checkout(booking).await {
        Ok(url) => render::notice(out, &format!("Complete payment at {url}")),
        Err(err) => render::alert(out, &err.user_message()),
    }
}
