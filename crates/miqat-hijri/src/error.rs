//! Conversion error types.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConversionError {
    /// The tabular arithmetic produced a month number outside 1..=12.
    /// Happens for dates far before the calendar's epoch (16 July 622 CE);
    /// callers treat it as "no Hijri date available for this input".
    #[error("computed Hijri month {number} is outside 1..=12")]
    InvalidMonth { number: i64 },
}
