//! # miqat-hijri
//!
//! Tabular Gregorian-to-Hijri calendar conversion.
//!
//! Implements the arithmetic (civil) Hijri calendar via a Julian Day Number
//! intermediate: a deterministic 30-year-cycle approximation, not an
//! astronomical or sighting-based calendar. It can disagree with official
//! moon-sighting dates by up to a day at month boundaries; callers that need
//! to track a local sighting apply a whole-day adjustment to the input date
//! (see `miqat-config`'s `calendar.hijri_adjustment`) rather than altering
//! the arithmetic.
//!
//! All intermediate division is `i64` division, which truncates toward zero.
//! The Julian Day formulas are written for exactly those semantics; replacing
//! them with floor division shifts January and February by a month.

use chrono::{Datelike, NaiveDate};

use miqat_core::{HijriDate, IslamicMonth};

mod error;

pub use error::ConversionError;

/// Days in one 30-year tabular cycle (19 common years of 354 days and
/// 11 leap years of 355).
const DAYS_PER_CYCLE: i64 = 10631;

/// Julian Day Number of the epoch anchor used by the tabular arithmetic.
const EPOCH_JDN: i64 = 1948440;

/// Julian Day Number for a calendar date.
///
/// Dates on or after 15 October 1582 use the Gregorian formula; earlier
/// dates use the proleptic Julian formula, reproducing the historical
/// calendar reform cutover (4 October 1582 was followed by 15 October 1582).
#[must_use]
pub fn julian_day_number(year: i64, month: i64, day: i64) -> i64 {
    if year > 1582 || (year == 1582 && month > 10) || (year == 1582 && month == 10 && day > 14) {
        (1461 * (year + 4800 + (month - 14) / 12)) / 4
            + (367 * (month - 2 - 12 * ((month - 14) / 12))) / 12
            - (3 * ((year + 4900 + (month - 14) / 12) / 100)) / 4
            + day
            - 32075
    } else {
        367 * year - (7 * (year + 5001 + (month - 9) / 7)) / 4 + (275 * month) / 9 + day + 1729777
    }
}

/// Convert a Gregorian calendar date to its tabular Hijri date.
///
/// Pure integer arithmetic with no allocation or caching; cheap enough to
/// call once per rendered calendar cell.
///
/// # Errors
///
/// [`ConversionError::InvalidMonth`] when the computed month number falls
/// outside 1..=12, which only happens for dates far before the calendar's
/// epoch.
pub fn to_hijri(date: NaiveDate) -> Result<HijriDate, ConversionError> {
    let year = i64::from(date.year());
    let month = i64::from(date.month());
    let day = i64::from(date.day());

    let jdn = julian_day_number(year, month, day);

    let mut days = jdn - EPOCH_JDN + 10632;
    let cycles = (days - 1) / DAYS_PER_CYCLE;
    days = days - DAYS_PER_CYCLE * cycles + 354;

    let year_in_cycle = ((10985 - days) / 5316) * ((50 * days) / 17719)
        + (days / 5670) * ((43 * days) / 15238);
    days = days
        - ((30 - year_in_cycle) / 15) * ((17719 * year_in_cycle) / 50)
        - (year_in_cycle / 16) * ((15238 * year_in_cycle) / 43)
        + 29;

    let hijri_month = (24 * days) / 709;
    let hijri_day = days - (709 * hijri_month) / 24;
    let hijri_year = 30 * cycles + year_in_cycle - 30;

    let month = IslamicMonth::from_number(hijri_month)
        .ok_or(ConversionError::InvalidMonth { number: hijri_month })?;

    // A valid month number bounds the day remainder to 1..=30 and the year
    // to the i32 range reachable from a NaiveDate input.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let day = hijri_day as u8;
    #[allow(clippy::cast_possible_truncation)]
    let year = hijri_year as i32;

    Ok(HijriDate::new(day, month, year))
}
