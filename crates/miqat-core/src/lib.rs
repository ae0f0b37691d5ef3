//! # miqat-core
//!
//! Core types, closed enums, and error types for Miqat.
//!
//! This crate provides the foundational types shared across all Miqat crates:
//! - `HijriDate` value type produced by the calendar converter
//! - Closed enums for Islamic months, prayers, and reminder offsets
//! - Geographic coordinates and the fixed Kaaba location
//! - Cross-cutting error types

pub mod dates;
pub mod enums;
pub mod errors;
pub mod geo;

pub use dates::HijriDate;
pub use enums::{IslamicMonth, Prayer, ReminderOffset};
pub use errors::CoreError;
pub use geo::{GeoCoordinate, KAABA};
