//! `miqat times`: print a day's schedule from a saved timetable.

use std::path::Path;

use anyhow::Context;

use miqat_times::{PrayerTimeTable, next_prayer};

use super::shared::resolve_date;

pub fn handle(table_path: &Path, date: Option<&str>, next_only: bool) -> anyhow::Result<()> {
    let table = load_table(table_path)?;
    tracing::debug!(
        year = table.year(),
        months = table.month_count(),
        "loaded timetable"
    );

    let date = resolve_date(date)?;
    let times = table.lookup(date);

    if times.is_empty() {
        println!("no prayer times for {date} in this timetable");
        return Ok(());
    }

    if next_only {
        let now = chrono::Local::now().naive_local();
        if let Some((prayer, at)) = next_prayer(&times, now) {
            println!(
                "{} {} {}",
                prayer.emoji(),
                prayer.formatted(),
                at.format("%H:%M")
            );
        }
        return Ok(());
    }

    for (prayer, time) in &times {
        println!(
            "{} {:<8} {}",
            prayer.emoji(),
            prayer.formatted(),
            time.format("%H:%M")
        );
    }

    Ok(())
}

fn load_table(path: &Path) -> anyhow::Result<PrayerTimeTable> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read timetable {}", path.display()))?;
    serde_json::from_str(&json)
        .with_context(|| format!("timetable {} is not valid JSON", path.display()))
}
