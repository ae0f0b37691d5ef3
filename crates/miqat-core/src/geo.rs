//! Geographic coordinates and the fixed Kaaba location.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;

/// The Kaaba in Mecca (WGS-84 degrees).
pub const KAABA: GeoCoordinate = GeoCoordinate::new_unchecked(21.422487, 39.826206);

/// A point on the Earth's surface in WGS-84 degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoCoordinate {
    /// Create a validated coordinate.
    ///
    /// Returns `Err(CoreError::Validation)` when latitude leaves [-90, 90]
    /// or longitude leaves [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoreError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoreError::Validation(format!(
                "latitude {latitude} out of range [-90, 90]"
            )));
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoreError::Validation(format!(
                "longitude {longitude} out of range [-180, 180]"
            )));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Create a coordinate without validation. Use with trusted inputs only.
    #[must_use]
    pub const fn new_unchecked(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}
