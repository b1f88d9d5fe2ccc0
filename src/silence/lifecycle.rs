use chrono::{DateTime, Datelike, NaiveDateTime, Utc};

use crate::human;
use crate::silence::duration::parse_duration;
use crate::silence::models::{Silence, WeekdayTarget};

/// Human-readable expiry for a silence, e.g. "in 3h" or "2d ago".
///
/// Inactive silences render as the empty string so callers show nothing.
/// A duration that fails to parse collapses the expiry to the creation
/// instant, so such a silence reads as expired at creation.
pub fn expires_in(silence: &Silence, now: DateTime<Utc>) -> String {
    if !silence.active {
        return String::new();
    }
    let expiry = silence
        .created
        .saturating_add(parse_duration(&silence.duration));
    human::diff_secs(expiry.saturating_sub(now.timestamp()))
}

/// Time until the next occurrence of a weekday at a whole hour.
///
/// The scan starts at tomorrow, so the result is always 1-7 days out: a
/// "today" that matches the target weekday is never selected.
pub fn duration_till_next_day(target: WeekdayTarget, now: NaiveDateTime) -> String {
    let mut date = now.date();
    loop {
        date = match date.succ_opt() {
            Some(d) => d,
            // End of representable time.
            None => return String::new(),
        };
        if date.weekday().num_days_from_sunday() == target.day() {
            break;
        }
    }
    let Some(instant) = date.and_hms_opt(target.hour(), 0, 0) else {
        return String::new();
    };
    human::diff_date_naive(instant, now)
}
