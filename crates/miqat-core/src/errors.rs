//! Cross-cutting error types for Miqat.
//!
//! Domain-specific errors (e.g. `ConversionError`, `AlmanacError`) are
//! defined in their respective crates; this module holds errors that can
//! originate anywhere in the system.

use thiserror::Error;

/// Errors that can be raised by any Miqat crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Data failed validation (range, format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
