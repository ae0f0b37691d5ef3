//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for safe, sandboxed filesystem and env manipulation.

use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};
use miqat_config::MiqatConfig;
use miqat_core::Prayer;

#[test]
fn loads_notifications_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[notifications]
fajr = true
zuhr = true
maghrib = true
"#,
        )?;

        let config: MiqatConfig = Figment::from(Serialized::defaults(MiqatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(
            config.notifications.enabled_prayers(),
            vec![Prayer::Fajr, Prayer::Zuhr, Prayer::Maghrib]
        );
        assert!(!config.notifications.sunrise);
        Ok(())
    });
}

#[test]
fn loads_calendar_and_location_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[calendar]
hijri_adjustment = -1

[location]
latitude = 51.5074
longitude = -0.1278
"#,
        )?;

        let config: MiqatConfig = Figment::from(Serialized::defaults(MiqatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.calendar.hijri_adjustment, -1);
        assert!(config.location.is_configured());
        let coordinate = config.location.coordinate().unwrap().unwrap();
        assert!((coordinate.latitude - 51.5074).abs() < f64::EPSILON);
        Ok(())
    });
}

#[test]
fn partial_toml_keeps_defaults_for_the_rest() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[notifications]
fajr = true
"#,
        )?;

        let config: MiqatConfig = Figment::from(Serialized::defaults(MiqatConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.notifications.enabled_prayers(), vec![Prayer::Fajr]);
        assert_eq!(config.calendar.hijri_adjustment, 0);
        assert!(!config.location.is_configured());
        Ok(())
    });
}
