//! Hijri calendar configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct CalendarConfig {
    /// Whole-day offset applied to the Gregorian input before conversion,
    /// for communities whose moon sighting runs ahead of or behind the
    /// tabular calendar. Positive pushes the Hijri date forward. The
    /// conversion arithmetic itself is never altered.
    #[serde(default)]
    pub hijri_adjustment: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_applies_no_adjustment() {
        assert_eq!(CalendarConfig::default().hijri_adjustment, 0);
    }
}
