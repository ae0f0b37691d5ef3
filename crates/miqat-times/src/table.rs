//! The year timetable and its bounds-checked lookup.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use miqat_core::Prayer;

/// One day's prayer times, keyed and ordered by prayer rank.
pub type DayTimes = BTreeMap<Prayer, NaiveTime>;

/// Raw per-month text extracted from the timetable source: one header row
/// naming the columns, one row of cell text per day.
#[derive(Debug, Clone, Default)]
pub struct RawMonth {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// An immutable prayer timetable for a single calendar year.
///
/// Month and day indices are 0-based internally; the month list may hold
/// fewer than 12 entries when the source is incomplete. The table is
/// read-only after construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrayerTimeTable {
    year: i32,
    months: Vec<Vec<DayTimes>>,
}

impl PrayerTimeTable {
    /// Build a table directly from per-day mappings.
    #[must_use]
    pub const fn from_months(year: i32, months: Vec<Vec<DayTimes>>) -> Self {
        Self { year, months }
    }

    /// Build a table from raw source text, one [`RawMonth`] per month table.
    ///
    /// Header cells are matched against the six known prayer labels; columns
    /// with unrecognized headers are dropped. The recognized prayers pair
    /// positionally with each row's cells. Cells that do not parse as `HH:mm`
    /// are skipped, leaving that day's mapping partial; nothing here fails
    /// the build as a whole.
    #[must_use]
    pub fn from_raw_months(year: i32, raw_months: &[RawMonth]) -> Self {
        let months = raw_months
            .iter()
            .map(|raw| {
                let prayers: Vec<Prayer> = raw
                    .headers
                    .iter()
                    .filter_map(|header| {
                        let prayer = Prayer::from_label(header);
                        if prayer.is_none() {
                            tracing::debug!(
                                header = header.as_str(),
                                "dropping unrecognized timetable column"
                            );
                        }
                        prayer
                    })
                    .collect();

                raw.rows
                    .iter()
                    .map(|cells| Self::parse_day(&prayers, cells))
                    .collect()
            })
            .collect();

        Self { year, months }
    }

    fn parse_day(prayers: &[Prayer], cells: &[String]) -> DayTimes {
        let mut day = DayTimes::new();

        for (prayer, cell) in prayers.iter().zip(cells) {
            match NaiveTime::parse_from_str(cell.trim(), "%H:%M") {
                Ok(time) => {
                    day.insert(*prayer, time);
                }
                Err(error) => {
                    tracing::debug!(
                        %prayer,
                        cell = cell.as_str(),
                        %error,
                        "skipping unparseable time cell"
                    );
                }
            }
        }

        day
    }

    /// The calendar year this table was built for.
    #[must_use]
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Number of months present (may be fewer than 12).
    #[must_use]
    pub fn month_count(&self) -> usize {
        self.months.len()
    }

    /// The prayer times on `date`.
    ///
    /// Returns an empty mapping when `date` falls outside the table: a year
    /// other than the one the table was built for, a month beyond the months
    /// present, or a day beyond that month's rows. The table only ever covers
    /// one year, so a stale-year query yields nothing rather than wrong data.
    #[must_use]
    pub fn lookup(&self, date: NaiveDate) -> DayTimes {
        if date.year() != self.year {
            return DayTimes::new();
        }

        let month_index = date.month0() as usize;
        let day_index = date.day0() as usize;

        self.months
            .get(month_index)
            .and_then(|month| month.get(day_index))
            .cloned()
            .unwrap_or_default()
    }

    /// [`Self::lookup`] for the local date.
    #[must_use]
    pub fn lookup_today(&self) -> DayTimes {
        self.lookup(chrono::Local::now().date_naive())
    }
}
