//! Prayer-notification preferences.
//!
//! One on/off toggle per widget prayer (Midnight never notifies). Earlier
//! releases persisted these as a JSON blob keyed by prayer label,
//! `{"Dawn": false, "Sunrise": false, ...}`, which
//! [`NotificationsConfig::from_legacy_json`] still accepts for migration.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use miqat_core::Prayer;

use crate::error::ConfigError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NotificationsConfig {
    #[serde(default)]
    pub fajr: bool,
    #[serde(default)]
    pub sunrise: bool,
    #[serde(default)]
    pub zuhr: bool,
    #[serde(default)]
    pub sunset: bool,
    #[serde(default)]
    pub maghrib: bool,
}

impl NotificationsConfig {
    /// Whether notifications are enabled for `prayer`. Midnight is not a
    /// notifiable event and always reports false.
    #[must_use]
    pub const fn is_enabled(&self, prayer: Prayer) -> bool {
        match prayer {
            Prayer::Fajr => self.fajr,
            Prayer::Sunrise => self.sunrise,
            Prayer::Zuhr => self.zuhr,
            Prayer::Sunset => self.sunset,
            Prayer::Maghrib => self.maghrib,
            Prayer::Midnight => false,
        }
    }

    /// The prayers to schedule notifications for, in rank order.
    #[must_use]
    pub fn enabled_prayers(&self) -> Vec<Prayer> {
        Prayer::ALL
            .into_iter()
            .filter(|prayer| self.is_enabled(*prayer))
            .collect()
    }

    /// Parse the legacy label-keyed JSON blob. Unknown labels are dropped;
    /// prayers absent from the blob stay disabled.
    ///
    /// # Errors
    ///
    /// [`ConfigError::LegacyJson`] when the blob is not a JSON object of
    /// booleans.
    pub fn from_legacy_json(json: &str) -> Result<Self, ConfigError> {
        let toggles: BTreeMap<String, bool> = serde_json::from_str(json)?;

        let mut config = Self::default();
        for (label, enabled) in toggles {
            match Prayer::from_label(&label) {
                Some(Prayer::Fajr) => config.fajr = enabled,
                Some(Prayer::Sunrise) => config.sunrise = enabled,
                Some(Prayer::Zuhr) => config.zuhr = enabled,
                Some(Prayer::Sunset) => config.sunset = enabled,
                Some(Prayer::Maghrib) => config.maghrib = enabled,
                Some(Prayer::Midnight) | None => {}
            }
        }

        Ok(config)
    }
}
