//! Sports and facilities.

use std::io::{self, Write};

use super::args::{FacilitiesCommand, FacilityForm};
use super::{ADMIN_ONLY, CliState, failed, render};
use crate::domain::{FacilityDraft, FacilityId, GENERIC_FAILURE, Session};

pub(super) async fn sports(state: &CliState, out: &mut impl Write) -> io::Result<()> {
    match state.api.sports().list().await {
        Ok(sports) => render::sports(out, &sports),
        Err(err) => failed(out, &err, GENERIC_FAILURE),
    }
}

pub(super) async fn facilities(
    state: &CliState,
    session: &Session,
    command: FacilitiesCommand,
    out: &mut impl Write,
) -> io::Result<()> {
    match command {
        FacilitiesCommand::List => match state.api.facilities().list().await {
            Ok(facilities) => render::facilities(out, &facilities),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        FacilitiesCommand::Save(form) => save(state, session, form, out).await,
        FacilitiesCommand::Delete { id } => delete(state, session, id, out).await,
    }
}

async fn save(
    state: &CliState,
    session: &Session,
    form: FacilityForm,
    out: &mut impl Write,
) -> io::Result<()> {
    if form.id.is_some() && !session.is_admin() {
        return render::alert(out, ADMIN_ONLY);
    }
    let draft = match FacilityDraft::try_new(
        &form.name,
        form.sport,
        form.address.as_deref(),
        form.contact.as_deref(),
    ) {
        Ok(draft) => draft,
        Err(err) => return render::alert(out, &err.to_string()),
    };
    let facilities = state.api.facilities();
    match form.id {
        Some(id) => match facilities.update(id, &draft).await {
            Ok(_) => render::notice(out, &format!("Facility {id} updated")),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
        None => match facilities.create(&draft).await {
            Ok(created) => render::notice(out, &format!("Facility {} created", created.id())),
            Err(err) => failed(out, &err, GENERIC_FAILURE),
        },
    }
}

async fn delete(
    state: &CliState,
    session: &Session,
    id: FacilityId,
    out: &mut impl Write,
) -> io::Result<()> {
    if !session.is_admin() {
        return render::alert(out, ADMIN_ONLY);
    }
    match state.api.facilities().delete(id).await {
        Ok(()) => render::notice(out, &format!("Facility {id} deleted")),
        Err(err) => failed(out, &err, GENERIC_FAILURE),
    }
}
