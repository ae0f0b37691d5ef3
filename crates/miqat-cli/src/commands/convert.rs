//! `miqat convert`: raw tabular conversion of a single date.

use super::shared::resolve_date;

pub fn handle(date: &str) -> anyhow::Result<()> {
    let gregorian = resolve_date(Some(date))?;
    let hijri = miqat_hijri::to_hijri(gregorian)?;

    println!("{hijri} AH");
    Ok(())
}
