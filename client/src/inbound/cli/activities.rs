//! Activity listing and organising.

use std::io::{self, Write};

use super::args::{ActivitiesCommand, ActivityForm};
use super::{CliState, failed, render};
use crate::domain::{ActivityDraft, GENERIC_FAILURE, Session, User};

pub(super) async fn run(
    state: &CliState,
    session: &Session,
    command: ActivitiesCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    let viewer = session.user().map(User::id);
    let activities = state.api.activities();
    match command {
        ActivitiesCommand::List => match activities.list().await {
            Ok(list) => render::activities(out, &list, viewer),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        ActivitiesCommand::Mine => match activities.list_mine().await {
            Ok(list) => render::activities(out, &list, viewer),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        ActivitiesCommand::Save(form) => save(state, form, out).await,
        ActivitiesCommand::Delete { id } => match activities.delete(id).await {
            Ok(()) => render::notice(out, &format!("Activity {id} deleted")),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
    }
}

async fn save(state: &CliState, form: ActivityForm, out: &mut impl Write) -> io::Result<()> {
    let draft = match ActivityDraft::try_new(
        form.sport,
        &form.date,
        &form.location,
        form.description.as_deref(),
        form.participants.as_deref(),
    ) {
        Ok(draft) => draft,
        Err(err) => return render::alert(out, &err.to_string()),
    };
    let activities = state.api.activities();
    match form.id {
        Some(id) => match activities.update(id, &draft).await {
            Ok(_) => render::notice(out, &format!("Activity {id} updated")),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        None => match activities.create(&draft).await {
            Ok(created) => render::notice(out, &format!("Activity {} created", created.id())),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
    }
}
