//! Fixed observer location for Qibla computation.

use serde::{Deserialize, Serialize};

use miqat_core::{CoreError, GeoCoordinate};

use crate::error::ConfigError;

/// A configured fallback location, used when no live fix is available.
/// Both fields must be present for the location to count as configured.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct LocationConfig {
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

impl LocationConfig {
    #[must_use]
    pub const fn is_configured(&self) -> bool {
        self.latitude.is_some() && self.longitude.is_some()
    }

    /// The configured coordinate, validated.
    ///
    /// `Ok(None)` when unconfigured.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidValue`] when a configured value leaves the
    /// valid latitude/longitude range.
    pub fn coordinate(&self) -> Result<Option<GeoCoordinate>, ConfigError> {
        let (Some(latitude), Some(longitude)) = (self.latitude, self.longitude) else {
            return Ok(None);
        };

        GeoCoordinate::new(latitude, longitude)
            .map(Some)
            .map_err(|error| match error {
                CoreError::Validation(reason) => ConfigError::InvalidValue {
                    field: "location".into(),
                    reason,
                },
                CoreError::Other(other) => ConfigError::InvalidValue {
                    field: "location".into(),
                    reason: other.to_string(),
                },
            })
    }
}
