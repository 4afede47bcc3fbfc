//! Errors for palette generation and palette-level input.

use mp_color::ColorError;
use thiserror::Error;

use crate::hue::HueLabel;

/// Errors raised by the palette layer.
///
/// Generation from a valid color never fails with the built-in tables;
/// these cover caller-supplied palettes, labels and calibration data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// A palette entry is not a parseable color.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// A palette handed to the contrast selector lacks a slot.
    #[error("palette has no color for hue {0}")]
    MissingHue(HueLabel),

    /// A string that is not one of the 14 hue labels.
    #[error("unknown hue label {0:?}")]
    UnknownHue(String),

    /// The matcher was given no golden palettes to search.
    #[error("no golden palettes to match against")]
    EmptyGoldenSet,

    /// No built-in golden palette has this name.
    #[error("unknown golden palette {0:?}")]
    UnknownGoldenPalette(String),

    /// A tolerance weight that is zero, negative or not finite.
    #[error("{table} tolerance at index {index} must be positive, got {value}")]
    InvalidTolerance {
        table: &'static str,
        index: usize,
        value: f64,
    },
}

pub type Result<T> = std::result::Result<T, PaletteError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_errors_pass_through() {
        let err: PaletteError = ColorError::InvalidHex("#zz".into()).into();
        assert_eq!(err.to_string(), r##"invalid hex color: "#zz""##);
    }

    #[test]
    fn messages() {
        assert_eq!(
            PaletteError::MissingHue(HueLabel::A400).to_string(),
            "palette has no color for hue A400"
        );
        assert_eq!(
            PaletteError::InvalidTolerance { table: "chroma", index: 3, value: 0.0 }.to_string(),
            "chroma tolerance at index 3 must be positive, got 0"
        );
    }
}
