//! Compact relative-time formatting shared by every command that renders
//! an instant, e.g. "in 2d", "3h ago".

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::silence::duration::TIME_DELTAS;

/// Renders a span of seconds in its largest whole unit, e.g. 7200 -> "2h".
/// The sign is ignored; a zero span renders as "0s".
pub fn diff_span(secs: i64) -> String {
    let secs = secs.unsigned_abs();
    for &(unit, delta) in TIME_DELTAS {
        let delta = delta as u64;
        if secs >= delta {
            return format!("{}{}", secs / delta, unit);
        }
    }
    "0s".to_string()
}

/// Renders a signed delta in seconds relative to "now".
pub fn diff_secs(delta: i64) -> String {
    if delta > 0 {
        format!("in {}", diff_span(delta))
    } else if delta < 0 {
        format!("{} ago", diff_span(delta))
    } else {
        "now".to_string()
    }
}

/// Renders an instant relative to "now".
pub fn diff_date(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    diff_secs((then - now).num_seconds())
}

/// [`diff_date`] for timezone-naive instants.
pub fn diff_date_naive(then: NaiveDateTime, now: NaiveDateTime) -> String {
    diff_secs((then - now).num_seconds())
}
