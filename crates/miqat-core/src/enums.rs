//! Closed enums for Miqat: Islamic months, prayers, and reminder offsets.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`.
//! Every variant set is closed and exhaustively matched so that adding a
//! variant is a compile-visible change at every use site.

use chrono::{Duration, NaiveDateTime};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// IslamicMonth
// ---------------------------------------------------------------------------

/// A month of the Hijri calendar, numbered 1..=12, plus a `None` sentinel
/// (number 0) for "no month resolved".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum IslamicMonth {
    None,
    Muharram,
    Safar,
    RabiAlAwwal,
    RabiAlThaani,
    JamaadaAlUla,
    JamaadaAlThaani,
    Rajab,
    Shabaan,
    Ramadhan,
    Shawwal,
    DhuAlQadah,
    DhuAlHijjah,
}

impl IslamicMonth {
    /// All twelve real months, in calendar order. Excludes the sentinel.
    pub const MONTHS: [Self; 12] = [
        Self::Muharram,
        Self::Safar,
        Self::RabiAlAwwal,
        Self::RabiAlThaani,
        Self::JamaadaAlUla,
        Self::JamaadaAlThaani,
        Self::Rajab,
        Self::Shabaan,
        Self::Ramadhan,
        Self::Shawwal,
        Self::DhuAlQadah,
        Self::DhuAlHijjah,
    ];

    /// Month number: 1..=12, or 0 for the sentinel.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Muharram => 1,
            Self::Safar => 2,
            Self::RabiAlAwwal => 3,
            Self::RabiAlThaani => 4,
            Self::JamaadaAlUla => 5,
            Self::JamaadaAlThaani => 6,
            Self::Rajab => 7,
            Self::Shabaan => 8,
            Self::Ramadhan => 9,
            Self::Shawwal => 10,
            Self::DhuAlQadah => 11,
            Self::DhuAlHijjah => 12,
        }
    }

    /// Resolve a month number (1..=12) to its named month.
    ///
    /// Returns `None` for anything outside 1..=12, including the sentinel's 0.
    #[must_use]
    pub fn from_number(number: i64) -> Option<Self> {
        Self::MONTHS
            .into_iter()
            .find(|month| i64::from(month.number()) == number)
    }

    /// Short label as it appears in source data (e.g. `"Rabi I"`).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi I",
            Self::RabiAlThaani => "Rabi' II",
            Self::JamaadaAlUla => "Jamada I",
            Self::JamaadaAlThaani => "Jamada II",
            Self::Rajab => "Rajab",
            Self::Shabaan => "Shabban",
            Self::Ramadhan => "Ramadan",
            Self::Shawwal => "Shawaal",
            Self::DhuAlQadah => "Thi Alqida",
            Self::DhuAlHijjah => "Thul-Hijja",
        }
    }

    /// Full display name (e.g. `"Rabi Al Awwal"`).
    #[must_use]
    pub const fn formatted(self) -> &'static str {
        match self {
            Self::None => "",
            Self::Muharram => "Muharram",
            Self::Safar => "Safar",
            Self::RabiAlAwwal => "Rabi Al Awwal",
            Self::RabiAlThaani => "Rabi Al Thaani",
            Self::JamaadaAlUla => "Jamaada Al Ula",
            Self::JamaadaAlThaani => "Jamaada Al Thaani",
            Self::Rajab => "Rajab",
            Self::Shabaan => "Shabaan",
            Self::Ramadhan => "Ramadhan",
            Self::Shawwal => "Shawwal",
            Self::DhuAlQadah => "Dhu Al Qadah",
            Self::DhuAlHijjah => "Dhu Al Hijjah",
        }
    }
}

impl fmt::Display for IslamicMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formatted())
    }
}

// ---------------------------------------------------------------------------
// Prayer
// ---------------------------------------------------------------------------

/// A daily prayer-time event.
///
/// Variants are declared in rank order (Fajr < Sunrise < Zuhr < Sunset <
/// Maghrib < Midnight), so the derived `Ord` matches the timetable order and
/// `BTreeMap<Prayer, _>` iterates chronologically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Prayer {
    Fajr,
    Sunrise,
    Zuhr,
    Sunset,
    Maghrib,
    Midnight,
}

impl Prayer {
    /// All events in rank order.
    pub const ALL: [Self; 6] = [
        Self::Fajr,
        Self::Sunrise,
        Self::Zuhr,
        Self::Sunset,
        Self::Maghrib,
        Self::Midnight,
    ];

    /// Label used by the timetable source (e.g. `"Dawn"` for Fajr).
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Fajr => "Dawn",
            Self::Sunrise => "Sunrise",
            Self::Zuhr => "Noon",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Midnight => "Midnight",
        }
    }

    /// Resolve a source label to its prayer. Labels must match exactly.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|prayer| prayer.label() == label)
    }

    /// Display name (e.g. `"Fajr"`).
    #[must_use]
    pub const fn formatted(self) -> &'static str {
        match self {
            Self::Fajr => "Fajr",
            Self::Sunrise => "Sunrise",
            Self::Zuhr => "Zuhr",
            Self::Sunset => "Sunset",
            Self::Maghrib => "Maghrib",
            Self::Midnight => "Midnight",
        }
    }

    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Fajr | Self::Zuhr | Self::Maghrib => "🕌",
            Self::Sunrise => "☀️",
            Self::Sunset => "🌙",
            Self::Midnight => "🌑",
        }
    }

    /// Whether this event is one of the three call-to-prayer events
    /// (Fajr, Zuhr, Maghrib).
    #[must_use]
    pub const fn is_prayer(self) -> bool {
        matches!(self, Self::Fajr | Self::Zuhr | Self::Maghrib)
    }

    /// Whether this event appears in the compact widget row (all but Midnight).
    #[must_use]
    pub const fn is_widget(self) -> bool {
        !matches!(self, Self::Midnight)
    }

    /// Fixed rank, 1..=6.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            Self::Fajr => 1,
            Self::Sunrise => 2,
            Self::Zuhr => 3,
            Self::Sunset => 4,
            Self::Maghrib => 5,
            Self::Midnight => 6,
        }
    }
}

impl fmt::Display for Prayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formatted())
    }
}

// ---------------------------------------------------------------------------
// ReminderOffset
// ---------------------------------------------------------------------------

/// Lead time for an event reminder, counted back from the event itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReminderOffset {
    None,
    AtTime,
    Before5Min,
    Before10Min,
    Before15Min,
    Before30Min,
    Before1Hour,
    Before2Hours,
    DayBefore,
}

impl ReminderOffset {
    pub const ALL: [Self; 9] = [
        Self::None,
        Self::AtTime,
        Self::Before5Min,
        Self::Before10Min,
        Self::Before15Min,
        Self::Before30Min,
        Self::Before1Hour,
        Self::Before2Hours,
        Self::DayBefore,
    ];

    /// Label shown when picking an offset for an event.
    #[must_use]
    pub const fn menu_label(self) -> &'static str {
        match self {
            Self::None => "Remove notification",
            Self::AtTime => "At time of event",
            Self::Before5Min => "5 minutes before",
            Self::Before10Min => "10 minutes before",
            Self::Before15Min => "15 minutes before",
            Self::Before30Min => "30 minutes before",
            Self::Before1Hour => "1 hour before",
            Self::Before2Hours => "2 hours before",
            Self::DayBefore => "Day before",
        }
    }

    /// Phrase used inside the reminder text itself.
    #[must_use]
    pub const fn notification_phrase(self) -> &'static str {
        match self {
            Self::None => "",
            Self::AtTime => "now",
            Self::Before5Min => "in 5 minutes",
            Self::Before10Min => "in 10 minutes",
            Self::Before15Min => "in 15 minutes",
            Self::Before30Min => "in 30 minutes",
            Self::Before1Hour => "in 1 hour",
            Self::Before2Hours => "in 2 hours",
            Self::DayBefore => "tomorrow",
        }
    }

    /// The moment the reminder should fire for an event at `event_time`.
    ///
    /// `None` (the variant) yields no fire time at all.
    #[must_use]
    pub fn apply_to(self, event_time: NaiveDateTime) -> Option<NaiveDateTime> {
        let lead = match self {
            Self::None => return None,
            Self::AtTime => Duration::zero(),
            Self::Before5Min => Duration::minutes(5),
            Self::Before10Min => Duration::minutes(10),
            Self::Before15Min => Duration::minutes(15),
            Self::Before30Min => Duration::minutes(30),
            Self::Before1Hour => Duration::hours(1),
            Self::Before2Hours => Duration::hours(2),
            Self::DayBefore => Duration::days(1),
        };

        Some(event_time - lead)
    }

    /// Offsets offered in the picker: the removal entry is only shown once a
    /// reminder is active.
    #[must_use]
    pub fn selectable(current: Self) -> Vec<Self> {
        if current == Self::None {
            Self::ALL
                .into_iter()
                .filter(|offset| *offset != Self::None)
                .collect()
        } else {
            Self::ALL.to_vec()
        }
    }
}
