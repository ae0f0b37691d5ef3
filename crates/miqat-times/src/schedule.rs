//! Next/previous prayer selection over a day's mapping.
//!
//! Both functions treat the mapping as today's schedule and wrap across
//! midnight the way the widget does: when every prayer is already past, the
//! next one is the first entry of the same schedule shifted to tomorrow, and
//! symmetrically for the previous one.

use chrono::{Days, NaiveDateTime};

use miqat_core::Prayer;

use crate::table::DayTimes;

/// The first prayer strictly after `now`, or the day's first prayer moved to
/// tomorrow once the schedule is exhausted. `None` only for an empty mapping.
#[must_use]
pub fn next_prayer(times: &DayTimes, now: NaiveDateTime) -> Option<(Prayer, NaiveDateTime)> {
    let today = now.date();

    times
        .iter()
        .map(|(prayer, time)| (*prayer, today.and_time(*time)))
        .find(|(_, at)| *at > now)
        .or_else(|| {
            let (prayer, time) = times.first_key_value()?;
            let tomorrow = today.checked_add_days(Days::new(1))?;
            Some((*prayer, tomorrow.and_time(*time)))
        })
}

/// The last prayer strictly before `now`, or the day's last prayer moved to
/// yesterday when none has passed yet. `None` only for an empty mapping.
#[must_use]
pub fn previous_prayer(times: &DayTimes, now: NaiveDateTime) -> Option<(Prayer, NaiveDateTime)> {
    let today = now.date();

    times
        .iter()
        .rev()
        .map(|(prayer, time)| (*prayer, today.and_time(*time)))
        .find(|(_, at)| *at < now)
        .or_else(|| {
            let (prayer, time) = times.last_key_value()?;
            let yesterday = today.checked_sub_days(Days::new(1))?;
            Some((*prayer, yesterday.and_time(*time)))
        })
}
