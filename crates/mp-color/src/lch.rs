// SPDX-License-Identifier: MIT
//
// CIE L*C*h°: LAB in polar coordinates.
//
// Palette synthesis moves lightness, chroma and hue independently, which
// is only meaningful in this form. Hue is measured in degrees from the +a*
// axis toward +b* and normalized to [0, 360).

use std::f64::consts::PI;
use std::fmt;

use crate::error::{Result, check_range};
use crate::lab::LabColor;
use crate::rgb::RgbColor;

/// A color in CIE LCH space with alpha.
#[derive(Clone, Copy, PartialEq)]
pub struct LchColor {
    lightness: f64,
    chroma: f64,
    hue: f64,
    alpha: f64,
}

impl LchColor {
    /// Create an opaque LCH color.
    ///
    /// # Errors
    ///
    /// [`crate::ColorError::OutOfRange`] for negative/NaN lightness or
    /// chroma, or a hue outside [0, 360].
    pub fn lch(lightness: f64, chroma: f64, hue: f64) -> Result<Self> {
        Self::lcha(lightness, chroma, hue, 1.0)
    }

    /// Create an LCH color with alpha.
    ///
    /// # Errors
    ///
    /// As [`LchColor::lch`], plus alpha outside [0, 1].
    pub fn lcha(lightness: f64, chroma: f64, hue: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            lightness: check_range(lightness, f64::MAX, "lightness")?,
            chroma: check_range(chroma, f64::MAX, "chroma")?,
            hue: check_range(hue, 360.0, "hue")?,
            alpha: check_range(alpha, 1.0, "alpha")?,
        })
    }

    /// Build an opaque LCH color without validation.
    ///
    /// Only for values already clamped into range, such as synthesized
    /// palette tones. The caller guarantees a non-negative lightness and
    /// chroma and a hue in [0, 360); use [`LchColor::lch`] otherwise.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(lightness: f64, chroma: f64, hue: f64) -> Self {
        Self { lightness, chroma, hue, alpha: 1.0 }
    }

    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.lightness
    }

    #[inline]
    #[must_use]
    pub const fn chroma(self) -> f64 {
        self.chroma
    }

    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.hue
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// LAB → LCH. Chroma is `hypot(a*, b*)`, hue is `atan2(b*, a*)` in degrees.
    #[must_use]
    pub fn from_lab(lab: LabColor) -> Self {
        Self {
            lightness: lab.lightness(),
            chroma: lab.chroma(),
            hue: normalize_hue(180.0 * lab.b().atan2(lab.a()) / PI),
            alpha: lab.alpha(),
        }
    }

    /// LCH → LAB.
    #[must_use]
    pub fn to_lab(self) -> LabColor {
        let hr = self.hue / 360.0 * 2.0 * PI;
        LabColor::from_parts(self.lightness, self.chroma * hr.cos(), self.chroma * hr.sin(), self.alpha)
    }

    /// LCH → sRGB (gamut-clipped).
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        self.to_lab().to_rgb()
    }
}

impl fmt::Debug for LchColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LchColor({:.4}, {:.4}, {:.1}, {:.2})",
            self.lightness, self.chroma, self.hue, self.alpha
        )
    }
}

/// Normalize a hue angle to the range [0, 360).
#[inline]
#[must_use]
pub fn normalize_hue(h: f64) -> f64 {
    let h = (h + 360.0) % 360.0;
    if h < 0.0 { h + 360.0 } else { h }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn hue_is_normalized() {
        // Negative b* lands in the lower half-plane: hue in (180, 360).
        let lab = LabColor::lab(50.0, 10.0, -10.0).unwrap();
        let lch = LchColor::from_lab(lab);
        assert!(approx_eq(lch.hue(), 315.0, 1e-9), "hue: {}", lch.hue());
        assert!(approx_eq(lch.chroma(), 200f64.sqrt(), 1e-9));
    }

    #[test]
    fn lab_roundtrip() {
        let lab = LabColor::lab(61.08, 58.87, 2.10).unwrap();
        assert_eq!(LchColor::from_lab(lab).to_lab(), lab);
    }

    #[test]
    fn rgb_roundtrip() {
        for hex in ["#f44336", "#e91e63", "#3f51b5", "#9e9e9e", "#ffffff"] {
            let rgb = RgbColor::from_hex(hex).unwrap();
            assert_eq!(rgb.to_lch().to_rgb().to_hex(), hex);
        }
    }

    #[test]
    fn validation() {
        assert!(LchColor::lch(50.0, -1.0, 0.0).is_err());
        assert!(LchColor::lch(50.0, 10.0, 361.0).is_err());
        assert!(LchColor::lch(50.0, 10.0, 360.0).is_ok());
        assert!(LchColor::lcha(50.0, 10.0, 10.0, f64::NAN).is_err());
    }

    #[test]
    fn normalize_wraps_both_ways() {
        assert!(approx_eq(normalize_hue(-30.0), 330.0, 1e-12));
        assert!(approx_eq(normalize_hue(370.0), 10.0, 1e-12));
        assert!(approx_eq(normalize_hue(-750.0), 330.0, 1e-12));
    }
}
