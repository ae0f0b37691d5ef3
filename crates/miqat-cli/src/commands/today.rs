//! `miqat today`: the adjusted Hijri date plus almanac commemorations.

use std::path::Path;

use anyhow::Context;
use chrono::Duration;

use miqat_almanac::Almanac;
use miqat_config::MiqatConfig;

use super::shared::resolve_date;

pub fn handle(
    date: Option<&str>,
    almanac_path: Option<&Path>,
    config: &MiqatConfig,
) -> anyhow::Result<()> {
    let gregorian = resolve_date(date)?;
    let adjusted = gregorian + Duration::days(config.calendar.hijri_adjustment);
    let hijri = miqat_hijri::to_hijri(adjusted)?;

    println!("{hijri} AH");

    if let Some(path) = almanac_path {
        let json = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read almanac file {}", path.display()))?;
        let almanac = Almanac::from_json(&json)?;

        for entry in almanac.dates_on(hijri) {
            match &entry.subtitle {
                Some(subtitle) => println!("  {}: {subtitle}", entry.title),
                None => println!("  {}", entry.title),
            }
        }
    }

    Ok(())
}
