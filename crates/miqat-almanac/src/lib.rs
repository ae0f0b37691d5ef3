//! # miqat-almanac
//!
//! Important Islamic dates keyed by Hijri day and month.
//!
//! The almanac is a flat list of commemorations loaded from a bundled JSON
//! fixture. Entries recur every Hijri year; the optional `year`/`year_type`
//! pair records the historical year of the underlying event, not a filter.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use miqat_core::HijriDate;

#[derive(Debug, Error)]
pub enum AlmanacError {
    /// The fixture is not valid JSON or does not match the entry shape.
    #[error("failed to parse almanac JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// A single commemoration on the Hijri calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ImportantDate {
    pub id: i64,
    /// Hijri day of month, 1..=30.
    pub day: u8,
    /// Hijri month number, 1..=12.
    pub month: u8,
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Historical year of the event, when known.
    #[serde(default)]
    pub year: Option<i32>,
    /// Era of `year`, e.g. "AH" or "AD".
    #[serde(default)]
    pub year_type: Option<String>,
}

/// The full set of commemorations, queryable by Hijri date.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Almanac {
    dates: Vec<ImportantDate>,
}

impl Almanac {
    /// Parse an almanac from its JSON fixture (a flat array of entries).
    ///
    /// # Errors
    ///
    /// [`AlmanacError::Parse`] when the document is not a JSON array of
    /// entries; unlike timetable cells, the fixture ships with the
    /// application and a malformed one is a packaging defect worth surfacing.
    pub fn from_json(json: &str) -> Result<Self, AlmanacError> {
        let dates = serde_json::from_str(json)?;
        Ok(Self { dates })
    }

    #[must_use]
    pub const fn new(dates: Vec<ImportantDate>) -> Self {
        Self { dates }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImportantDate> {
        self.dates.iter()
    }

    /// All commemorations falling on the given Hijri date, in fixture order.
    /// The Hijri year is ignored: entries recur annually.
    #[must_use]
    pub fn dates_on(&self, date: HijriDate) -> Vec<&ImportantDate> {
        self.dates
            .iter()
            .filter(|entry| entry.day == date.day && entry.month == date.month.number())
            .collect()
    }

    /// All commemorations in the given Hijri month, ordered by day.
    #[must_use]
    pub fn dates_in_month(&self, month_number: u8) -> Vec<&ImportantDate> {
        let mut entries: Vec<&ImportantDate> = self
            .dates
            .iter()
            .filter(|entry| entry.month == month_number)
            .collect();
        entries.sort_by_key(|entry| entry.day);
        entries
    }
}
