//! Text color selection for palette swatches.
//!
//! Each background gets one of two fixed text colors, a translucent black
//! or a white, whichever reads at WCAG AA (4.5:1) or better:
//!
//! - white text wins if it reaches the threshold,
//! - else black text if it does,
//! - else whichever of the two contrasts more.
//!
//! The candidates are measured as pure white and pure black; the emitted
//! color carries the emphasis opacity.

use mp_color::RgbColor;
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::hue::{ColorPalette, HueLabel};

/// WCAG 2.0 AA contrast for normal text.
pub const MIN_CONTRAST: f64 = 4.5;

// ---------------------------------------------------------------------------
// Emphasis
// ---------------------------------------------------------------------------

/// Text emphasis level, expressed as opacity of the text color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Primary text.
    #[default]
    High,
    /// Secondary text.
    Medium,
    /// Disabled text and hints.
    Disabled,
}

impl Emphasis {
    /// Black text at this emphasis: 87%, 60% or 38% opacity.
    #[must_use]
    pub const fn dark_text(self) -> RgbColor {
        let alpha = match self {
            Self::High => 0.87,
            Self::Medium => 0.60,
            Self::Disabled => 0.38,
        };
        RgbColor::new_unchecked(0.0, 0.0, 0.0, alpha)
    }

    /// White text at this emphasis: 100%, 70% or 50% opacity.
    #[must_use]
    pub const fn light_text(self) -> RgbColor {
        let alpha = match self {
            Self::High => 1.0,
            Self::Medium => 0.70,
            Self::Disabled => 0.50,
        };
        RgbColor::new_unchecked(1.0, 1.0, 1.0, alpha)
    }
}

// ---------------------------------------------------------------------------
// Selection
// ---------------------------------------------------------------------------

/// Settings for [`contrast_palette`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastOptions {
    /// Ratio a candidate must reach to be chosen outright.
    pub min_contrast: f64,
    /// Opacity level of the emitted text colors.
    pub emphasis: Emphasis,
}

impl Default for ContrastOptions {
    fn default() -> Self {
        Self { min_contrast: MIN_CONTRAST, emphasis: Emphasis::High }
    }
}

/// Pick the text color for `background`.
#[must_use]
pub fn select_text_color(background: RgbColor, options: &ContrastOptions) -> RgbColor {
    let white = background.contrast_ratio(RgbColor::WHITE);
    if white >= options.min_contrast {
        return options.emphasis.light_text();
    }

    let black = background.contrast_ratio(RgbColor::BLACK);
    if black >= options.min_contrast {
        return options.emphasis.dark_text();
    }

    debug!(
        background = %background,
        white,
        black,
        "no text color reaches minimum contrast, using the stronger one"
    );
    if white > black {
        options.emphasis.light_text()
    } else {
        options.emphasis.dark_text()
    }
}

/// Map every slot of `palette` to its text color as an `rgba(...)` string.
///
/// # Errors
///
/// [`PaletteError::MissingHue`] for the first empty slot, or
/// [`PaletteError::Color`] if a slot does not parse as a color.
pub fn contrast_palette(palette: &ColorPalette, options: &ContrastOptions) -> Result<ColorPalette> {
    HueLabel::ALL
        .into_iter()
        .map(|label| {
            let color = palette.get(label).ok_or(PaletteError::MissingHue(label))?;
            let background: RgbColor = color.parse()?;
            Ok((label, select_text_color(background, options).to_rgba_string()))
        })
        .collect::<Result<Vec<_>>>()
        .map(|entries| entries.into_iter().collect())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
