// SPDX-License-Identifier: MIT
//
// HSV, the hexagonal-cone model, for color pickers and debugging output.
// Not part of the palette pipeline.

use std::fmt;

use crate::error::{Result, check_range};
use crate::rgb::{ALPHA_ACCURACY, RgbColor};

/// A color in HSV space with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HsvColor {
    hue: f64,
    saturation: f64,
    value: f64,
    alpha: f64,
}

impl HsvColor {
    /// Create an opaque HSV color.
    ///
    /// # Errors
    ///
    /// [`crate::ColorError::OutOfRange`] for a hue outside [0, 360] or a
    /// saturation/value outside [0, 1].
    pub fn hsv(hue: f64, saturation: f64, value: f64) -> Result<Self> {
        Self::hsva(hue, saturation, value, 1.0)
    }

    /// Create an HSV color with alpha.
    ///
    /// # Errors
    ///
    /// As [`HsvColor::hsv`], plus alpha outside [0, 1].
    pub fn hsva(hue: f64, saturation: f64, value: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            hue: check_range(hue, 360.0, "hue")?,
            saturation: check_range(saturation, 1.0, "saturation")?,
            value: check_range(value, 1.0, "value")?,
            alpha: check_range(alpha, 1.0, "alpha")?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.saturation
    }

    #[inline]
    #[must_use]
    pub const fn value(self) -> f64 {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// sRGB → HSV. Hue is rounded to whole degrees; grays get hue 0.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let (r, g, b) = (rgb.red(), rgb.green(), rgb.blue());
        let value = r.max(g).max(b);
        let min = r.min(g).min(b);
        let span = value - min;

        let mut hue = 0.0;
        let mut saturation = 0.0;
        if span > ALPHA_ACCURACY {
            saturation = span / value;
            hue = if value.total_cmp(&r).is_eq() {
                60.0 * (g - b) / span
            } else if value.total_cmp(&g).is_eq() {
                60.0 * (b - r) / span + 120.0
            } else {
                60.0 * (r - g) / span + 240.0
            };
        }

        Self {
            hue: (hue + 360.0).round() % 360.0,
            saturation,
            value,
            alpha: rgb.alpha(),
        }
    }

    /// HSV → sRGB, assigning max/mid/min channel roles by 60° sextant.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        let chroma = self.value * self.saturation;
        let m = (self.value - chroma).max(0.0);
        let h = (self.hue % 360.0) / 60.0;
        // Second-largest component.
        let x = chroma * (1.0 - ((h % 2.0) - 1.0).abs());

        let (r, g, b) = match sextant(h) {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };

        RgbColor::from_parts(
            (r + m).min(1.0),
            (g + m).min(1.0),
            (b + m).min(1.0),
            self.alpha,
        )
    }
}

impl fmt::Display for HsvColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsv({},{},{},{})", self.hue, self.saturation, self.value, self.alpha)
    }
}

#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sextant(h: f64) -> u8 {
    // Safe: h is in [0, 6) after the modulo above.
    h.floor().clamp(0.0, 5.0) as u8
}
