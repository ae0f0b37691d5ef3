//! Helpers shared by command handlers.

use anyhow::Context;
use chrono::NaiveDate;

/// Parse a `YYYY-MM-DD` argument, or fall back to the local date.
pub fn resolve_date(argument: Option<&str>) -> anyhow::Result<NaiveDate> {
    match argument {
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .with_context(|| format!("invalid date '{text}', expected YYYY-MM-DD")),
        None => Ok(chrono::Local::now().date_naive()),
    }
}
