// SPDX-License-Identifier: MIT
//
// Construction errors for the color value types.
//
// Every color type validates its components when built from caller input.
// A failed check names the field, the offending value, and the allowed
// maximum so the message can be shown to a user as-is.

use thiserror::Error;

/// Errors raised while building or parsing a color.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ColorError {
    /// A component is NaN, negative, or above its maximum.
    #[error("{value} for {field} is not between 0 and {max}")]
    OutOfRange {
        field: &'static str,
        value: f64,
        max: f64,
    },

    /// An unbounded component (LAB a*/b*, XYZ) is NaN or infinite.
    #[error("{value} for {field} is not a finite number")]
    NotFinite { field: &'static str, value: f64 },

    /// A hex color string with bad digits or more than 8 of them.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// An `rgb(...)` / `rgba(...)` string that could not be parsed.
    #[error("invalid rgb()/rgba() color: {0:?}")]
    InvalidFunctional(String),
}

pub type Result<T> = std::result::Result<T, ColorError>;

/// Check that `value` lies in `[0, max]`. NaN always fails.
pub(crate) fn check_range(value: f64, max: f64, field: &'static str) -> Result<f64> {
    if (0.0..=max).contains(&value) {
        Ok(value)
    } else {
        Err(ColorError::OutOfRange { field, value, max })
    }
}

/// Check that an unbounded component is a real number.
pub(crate) fn check_finite(value: f64, field: &'static str) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ColorError::NotFinite { field, value })
    }
}
