//! # miqat-times
//!
//! Prayer timetable construction, lookup, and scheduling.
//!
//! A [`PrayerTimeTable`] covers a single calendar year as a nested
//! month → day → prayer structure. Lookups never fail: any out-of-range or
//! stale-year query degrades to an empty mapping rather than an error.
//! Construction consumes pre-extracted header and cell text (the upstream
//! fetch and HTML parse are a separate concern) and skips malformed cells
//! instead of failing the whole table.

pub mod schedule;
pub mod table;

pub use schedule::{next_prayer, previous_prayer};
pub use table::{DayTimes, PrayerTimeTable, RawMonth};
