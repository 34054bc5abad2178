//! Sign-in, sign-out, registration and profile commands.

use std::io::{self, Write};

use super::args::{LoginArgs, RegisterArgs};
use super::{CliState, REGISTRATION_FAILURE, failed, render};
use crate::domain::{NewUser, Session, visible_routes};

pub(super) async fn login(state: &CliState, args: LoginArgs, out: &mut impl Write) -> io::Result<()> {
    match state.auth.login(&args.username, &args.password).await {
        Ok(session) => match session.user() {
            Some(user) => render::notice(
                out,
                &format!("Signed in as {} ({})", user.username(), user.role()),
            ),
            None => render::notice(out, "Signed in"),
        },
        Err(err) => render::alert(out, err.user_message()),
    }
}

pub(super) fn logout(state: &CliState, out: &mut impl Write) -> io::Result<()> {
    state.auth.logout();
    render::notice(out, "Signed out")
}

pub(super) async fn register(
    state: &CliState,
    args: RegisterArgs,
    out: &mut impl Write,
) -> io::Result<()> {
    let draft = match NewUser::try_new(&args.username, &args.email, &args.password) {
        Ok(draft) => draft
            .with_full_name(args.full_name.as_deref())
            .with_gender(args.gender)
            .with_birth_date(args.birth_date),
        Err(err) => return render::alert(out, &err.to_string()),
    };
    match state.auth.register(&draft).await {
        Ok(user) => render::notice(
            out,
            &format!(
                "Registered {}; sign in with `sporthub login {}`",
                user.username(),
                user.username()
            ),
        ),
        Err(err) => failed(out, &err, REGISTRATION_FAILURE),
    }
}

pub(super) fn whoami(session: &Session, out: &mut impl Write) -> io::Result<()> {
    match session.user() {
        Some(user) => render::profile(out, user),
        None => render::notice(out, "Not signed in"),
    }
}

pub(super) fn nav(session: &Session, out: &mut impl Write) -> io::Result<()> {
    render::routes(out, &visible_routes(session))
}
