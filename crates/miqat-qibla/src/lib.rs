//! # miqat-qibla
//!
//! Great-circle bearing from an observer to the Kaaba.
//!
//! Cheap spherical trigonometry, recomputed on every location or heading
//! update rather than cached. Bearings come out of `atan2` in (-180, 180]
//! and are deliberately left unnormalized after heading subtraction; a UI
//! rotating an arrow consumes the signed value directly.

use miqat_core::{GeoCoordinate, KAABA};

/// Initial great-circle bearing in degrees from `observer` to the Kaaba.
///
/// 0 is true north, positive eastward, range (-180, 180]. Exact pole or
/// antipode coincidences are not special-cased; `atan2` stays defined there.
#[must_use]
pub fn initial_bearing(observer: GeoCoordinate) -> f64 {
    let observer_latitude = observer.latitude.to_radians();
    let observer_longitude = observer.longitude.to_radians();
    let kaaba_latitude = KAABA.latitude.to_radians();
    let kaaba_longitude = KAABA.longitude.to_radians();

    let longitude_difference = kaaba_longitude - observer_longitude;

    let y = longitude_difference.sin() * kaaba_latitude.cos();
    let x = observer_latitude.cos() * kaaba_latitude.sin()
        - observer_latitude.sin() * kaaba_latitude.cos() * longitude_difference.cos();

    y.atan2(x).to_degrees()
}

/// Qibla bearing relative to the device heading, in signed degrees.
///
/// Requires both a resolved location and a resolved heading; `None` until
/// both are available (a precondition, not an error). The result may leave
/// [-180, 180] after the subtraction; callers normalize if they care.
#[must_use]
pub fn relative_bearing(
    observer: Option<GeoCoordinate>,
    heading_degrees: Option<f64>,
) -> Option<f64> {
    let observer = observer?;
    let heading = heading_degrees?;

    Some(initial_bearing(observer) - heading)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    const TOLERANCE: f64 = 0.1;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < TOLERANCE,
            "expected {expected} +/- {TOLERANCE}, got {actual}"
        );
    }

    #[rstest]
    // London: matches published Qibla calculators to within 0.1 degrees.
    #[case(51.5074, -0.1278, 118.99)]
    // New York faces east-northeast.
    #[case(40.7128, -74.0060, 58.48)]
    // Jakarta faces west-northwest (negative = west of north).
    #[case(-6.2088, 106.8456, -64.85)]
    // Cape Town faces just east of north.
    #[case(-33.9249, 18.4241, 23.35)]
    // Medina faces almost due south.
    #[case(24.5247, 39.5692, 175.59)]
    fn city_bearings(#[case] latitude: f64, #[case] longitude: f64, #[case] expected: f64) {
        let observer = GeoCoordinate::new_unchecked(latitude, longitude);
        assert_close(initial_bearing(observer), expected);
    }

    #[test]
    fn due_south_of_kaaba_points_north() {
        let observer = GeoCoordinate::new_unchecked(0.0, KAABA.longitude);
        assert_close(initial_bearing(observer), 0.0);
    }

    #[test]
    fn due_north_of_kaaba_points_south() {
        let observer = GeoCoordinate::new_unchecked(60.0, KAABA.longitude);
        assert_close(initial_bearing(observer), 180.0);
    }

    #[test]
    fn heading_is_subtracted_signed() {
        let london = GeoCoordinate::new_unchecked(51.5074, -0.1278);
        let relative = relative_bearing(Some(london), Some(90.0)).unwrap();
        assert_close(relative, 118.99 - 90.0);

        // A large heading can push the result below -180; it is left as-is.
        let relative = relative_bearing(Some(london), Some(350.0)).unwrap();
        assert_close(relative, 118.99 - 350.0);
    }

    #[test]
    fn missing_inputs_yield_none() {
        let london = GeoCoordinate::new_unchecked(51.5074, -0.1278);
        assert_eq!(relative_bearing(None, Some(10.0)), None);
        assert_eq!(relative_bearing(Some(london), None), None);
        assert_eq!(relative_bearing(None, None), None);
    }
}
