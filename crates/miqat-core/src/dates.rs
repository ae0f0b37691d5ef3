//! Hijri date value type.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::enums::IslamicMonth;

/// A date on the tabular Hijri calendar.
///
/// Produced fresh by each conversion call; plain value semantics, no
/// lifecycle. `day` is at least 1 and at most 30, `month` is a named month
/// (the `None` sentinel never escapes a successful conversion).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct HijriDate {
    pub day: u8,
    pub month: IslamicMonth,
    pub year: i32,
}

impl HijriDate {
    #[must_use]
    pub const fn new(day: u8, month: IslamicMonth, year: i32) -> Self {
        Self { day, month, year }
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.day, self.month, self.year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn display_uses_full_month_name() {
        let date = HijriDate::new(19, IslamicMonth::JamaadaAlThaani, 1445);
        assert_eq!(date.to_string(), "19 Jamaada Al Thaani 1445");
    }
}
