//! `miqat qibla`: bearing to the Kaaba from CLI args or the configured fix.

use miqat_config::MiqatConfig;
use miqat_core::GeoCoordinate;
use miqat_qibla::{initial_bearing, relative_bearing};

pub fn handle(
    lat: Option<f64>,
    lon: Option<f64>,
    heading: Option<f64>,
    config: &MiqatConfig,
) -> anyhow::Result<()> {
    let Some(observer) = resolve_observer(lat, lon, config)? else {
        println!("qibla unavailable: no observer location (pass --lat/--lon or configure one)");
        return Ok(());
    };

    match heading {
        Some(heading) => {
            if let Some(relative) = relative_bearing(Some(observer), Some(heading)) {
                println!("{relative:.2}° relative to heading {heading:.0}°");
            }
        }
        None => {
            let bearing = initial_bearing(observer);
            println!("{bearing:.2}° from true north");
        }
    }

    Ok(())
}

/// Explicit coordinates win over the configured location; a lone `--lat` or
/// `--lon` is rejected rather than silently mixed with config values.
fn resolve_observer(
    lat: Option<f64>,
    lon: Option<f64>,
    config: &MiqatConfig,
) -> anyhow::Result<Option<GeoCoordinate>> {
    match (lat, lon) {
        (Some(latitude), Some(longitude)) => {
            Ok(Some(GeoCoordinate::new(latitude, longitude)?))
        }
        (None, None) => Ok(config.location.coordinate()?),
        _ => anyhow::bail!("--lat and --lon must be given together"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use miqat_config::LocationConfig;

    fn config_with_location(latitude: f64, longitude: f64) -> MiqatConfig {
        MiqatConfig {
            location: LocationConfig {
                latitude: Some(latitude),
                longitude: Some(longitude),
            },
            ..Default::default()
        }
    }

    #[test]
    fn explicit_coordinates_win_over_config() {
        let config = config_with_location(0.0, 0.0);
        let observer = resolve_observer(Some(51.5), Some(-0.13), &config)
            .unwrap()
            .unwrap();
        assert!((observer.latitude - 51.5).abs() < f64::EPSILON);
    }

    #[test]
    fn falls_back_to_configured_location() {
        let config = config_with_location(21.0, 39.0);
        let observer = resolve_observer(None, None, &config).unwrap().unwrap();
        assert!((observer.latitude - 21.0).abs() < f64::EPSILON);
    }

    #[test]
    fn no_location_anywhere_is_none_not_an_error() {
        let config = MiqatConfig::default();
        assert!(resolve_observer(None, None, &config).unwrap().is_none());
    }

    #[test]
    fn half_a_coordinate_is_rejected() {
        let config = MiqatConfig::default();
        assert!(resolve_observer(Some(51.5), None, &config).is_err());
        assert!(resolve_observer(None, Some(-0.13), &config).is_err());
    }
}
