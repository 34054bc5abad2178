//! Plain-text rendering for command output.
//!
//! Lists are tab-separated, one record per line, so they pipe cleanly into
//! `cut` and friends. Alerts and notices are single lines.

use std::io::{self, Write};

use chrono::NaiveDateTime;

use crate::domain::{Activity, Booking, Facility, Route, Sport, User, UserId};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";
const BLANK: &str = "-";

fn when(at: NaiveDateTime) -> String {
    at.format(DISPLAY_FORMAT).to_string()
}

/// One failure line.
pub fn alert(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "error: {message}")
}

/// One success or status line.
pub fn notice(out: &mut impl Write, message: &str) -> io::Result<()> {
    writeln!(out, "{message}")
}

/// Explain that a guard sent the user elsewhere.
pub fn redirect(out: &mut impl Write, from: Route, to: Route) -> io::Result<()> {
    writeln!(out, "{from} is not available; redirected to {to}")
}

pub fn profile(out: &mut impl Write, user: &User) -> io::Result<()> {
    writeln!(out, "id:        {}", user.id())?;
    writeln!(out, "username:  {}", user.username())?;
    writeln!(out, "email:     {}", user.email())?;
    writeln!(out, "role:      {}", user.role())?;
    if let Some(name) = user.full_name() {
        writeln!(out, "full name: {name}")?;
    }
    if let Some(gender) = user.gender() {
        writeln!(out, "gender:    {}", gender.as_str())?;
    }
    if let Some(born) = user.birth_date() {
        writeln!(out, "born:      {born}")?;
    }
    Ok(())
}

pub fn routes(out: &mut impl Write, routes: &[Route]) -> io::Result<()> {
    routes.iter().try_for_each(|route| writeln!(out, "{route}"))
}

pub fn sports(out: &mut impl Write, sports: &[Sport]) -> io::Result<()> {
    if sports.is_empty() {
        return notice(out, "No sports yet.");
    }
    sports
        .iter()
        .try_for_each(|sport| writeln!(out, "{}\t{}", sport.id(), sport.name()))
}

pub fn facilities(out: &mut impl Write, facilities: &[Facility]) -> io::Result<()> {
    if facilities.is_empty() {
        return notice(out, "No facilities yet.");
    }
    facilities.iter().try_for_each(|facility| {
        writeln!(
            out,
            "{}\t{}\tsport {}\t{}\t{}",
            facility.id(),
            facility.name(),
            facility.sport_id(),
            facility.address().unwrap_or(BLANK),
            facility.contact_info().unwrap_or(BLANK),
        )
    })
}

/// Activities, marking the ones `viewer` organises.
pub fn activities(
    out: &mut impl Write,
    activities: &[Activity],
    viewer: Option<UserId>,
) -> io::Result<()> {
    if activities.is_empty() {
        return notice(out, "No activities yet.");
    }
    activities.iter().try_for_each(|activity| {
        let owned = viewer.is_some_and(|id| activity.is_owned_by(id));
        writeln!(
            out,
            "{}\t{}\t{}\tsport {}\t{}{}",
            activity.id(),
            when(activity.activity_date()),
            activity.location(),
            activity.sport_id(),
            activity.description().filter(|d| !d.is_empty()).unwrap_or(BLANK),
            if owned { "\t(yours)" } else { "" },
        )
    })
}

/// Reservations; `with_owner` adds the booking user's id for admin views.
pub fn bookings(out: &mut impl Write, bookings: &[Booking], with_owner: bool) -> io::Result<()> {
    if bookings.is_empty() {
        return notice(out, "No reservations yet.");
    }
    bookings.iter().try_for_each(|booking| {
        if with_owner {
            write!(out, "user {}\t", booking.user_id())?;
        }
        writeln!(
            out,
            "{}\tfacility {}\t{}\t{}h\t{}",
            booking.id(),
            booking.facility_id(),
            when(booking.booking_date()),
            booking.duration(),
            booking.status(),
        )
    })
}

pub fn users(out: &mut impl Write, users: &[User]) -> io::Result<()> {
    if users.is_empty() {
        return notice(out, "No users.");
    }
    users.iter().try_for_each(|user| {
        writeln!(
            out,
            "{}\t{}\t{}\t{}",
            user.id(),
            user.username(),
            user.email(),
            user.role(),
        )
    })
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::{Role, SportId};
    use rstest::rstest;

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).expect("write to vec");
        String::from_utf8(buf).expect("utf8 output")
    }

    #[rstest]
    fn alerts_are_prefixed() {
        assert_eq!(
            rendered(|out| alert(out, "Booking failed")),
            "error: Booking failed\n"
        );
    }

    #[rstest]
    fn redirect_names_both_pages() {
        assert_eq!(
            rendered(|out| redirect(out, Route::Admin, Route::Home)),
            "/admin is not available; redirected to /\n"
        );
    }

    #[rstest]
    fn sports_are_tab_separated() {
        let sports = [Sport::new(SportId::new(1), "Tennis")];
        assert_eq!(rendered(|out| super::sports(out, &sports)), "1\tTennis\n");
    }

    #[rstest]
    fn empty_lists_render_a_notice() {
        assert_eq!(rendered(|out| super::users(out, &[])), "No users.\n");
    }

    #[rstest]
    fn profile_skips_missing_fields() {
        let user = User::new(UserId::new(42), "alice", "alice@example.com", Role::User);
        let text = rendered(|out| profile(out, &user));
        assert!(text.contains("username:  alice"));
        assert!(text.contains("role:      user"));
        assert!(!text.contains("full name"));
    }
}
