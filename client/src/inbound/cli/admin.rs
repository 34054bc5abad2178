//! Administration of accounts and reservations.

use std::io::{self, Write};

use super::args::{AdminBookingsCommand, AdminCommand, AdminUsersCommand, UserForm};
use super::{CliState, SELF_DELETE, STATUS_UPDATE_FAILURE, failed, render};
use crate::domain::{GENERIC_FAILURE, NewUser, Session, User, UserId, UserUpdate};

pub(super) async fn run(
    state: &CliState,
    session: &Session,
    command: AdminCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        AdminCommand::Users(command) => users(state, session, command, out).await,
        AdminCommand::Bookings(command) => bookings(state, command, out).await,
    }
}

async fn users(
    state: &CliState,
    session: &Session,
    command: AdminUsersCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        AdminUsersCommand::List => match state.api.users().list().await {
            Ok(users) => render::users(out, &users),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        AdminUsersCommand::Save(form) => save_user(state, form, out).await,
        AdminUsersCommand::Delete { id } => delete_user(state, session, id, out).await,
    }
}

async fn save_user(state: &CliState, form: UserForm, out: &mut impl Write) -> io::Result<()> {
    let users = state.api.users();
    let saved = match form.id {
        Some(id) => {
            let update =
                match UserUpdate::try_new(&form.username, &form.email, form.password.as_deref()) {
                    Ok(update) => update,
                    Err(err) => return render::alert(out, &err.to_string()),
                };
            users.update(id, &update).await
        }
        None => {
            let password = form.password.as_deref().unwrap_or_default();
            let draft = match NewUser::try_new(&form.username, &form.email, password) {
                Ok(draft) => draft.with_full_name(form.full_name.as_deref()),
                Err(err) => return render::alert(out, &err.to_string()),
            };
            users.create(&draft).await
        }
    };
    match saved {
        Ok(user) => render::notice(out, &format!("Saved user {} ({})", user.id(), user.username())),
        Err(err) => failed(out, &err, GENERIC_FAILURE),
    }
}

async fn delete_user(
    state: &CliState,
    session: &Session,
    id: UserId,
    out: &mut impl Write,
) -> io::Result<()> {
    if session.user().map(User::id) == Some(id) {
        return render::alert(out, SELF_DELETE);
    }
    match state.api.users().delete(id).await {
        Ok(()) => render::notice(out, &format!("User {id} deleted")),
        Err(err) => failed(out, &err, GENERIC_FAILURE),
    }
}

async fn bookings(
    state: &CliState,
    command: AdminBookingsCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    let bookings = state.api.bookings();
    match command {
        AdminBookingsCommand::List => match bookings.list().await {
            Ok(list) => render::bookings(out, &list, true),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        AdminBookingsCommand::SetStatus { id, status } => {
            match bookings.update_status(id, status).await {
                Ok(_) => render::notice(out, &format!("Reservation {id} is now {status}")),
                Err(err) => failed(out, &err, STATUS_UPDATE_FAILURE),
            }
        }
    }
}
