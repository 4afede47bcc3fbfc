// SPDX-License-Identifier: MIT
//
// CIE 1931 XYZ, the linear hub between sRGB and LAB.
//
// The sRGB ↔ XYZ matrices are the D65 pair published by Bruce Lindbloom.
// Only the conversion code builds these values; they never reach a user.

use crate::error::{Result, check_finite, check_range};
use crate::rgb::{RgbColor, linear_to_srgb, srgb_to_linear};

/// A color in CIE XYZ space (D65 reference white), with alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyzColor {
    x: f64,
    y: f64,
    z: f64,
    alpha: f64,
}

impl XyzColor {
    /// Create an opaque XYZ color.
    ///
    /// # Errors
    ///
    /// [`crate::ColorError::NotFinite`] if a tristimulus value is NaN or infinite.
    pub fn xyz(x: f64, y: f64, z: f64) -> Result<Self> {
        Self::xyza(x, y, z, 1.0)
    }

    /// Create an XYZ color with alpha.
    ///
    /// # Errors
    ///
    /// [`crate::ColorError::NotFinite`] for a non-finite tristimulus value,
    /// [`crate::ColorError::OutOfRange`] for alpha outside [0, 1].
    pub fn xyza(x: f64, y: f64, z: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            x: check_finite(x, "x")?,
            y: check_finite(y, "y")?,
            z: check_finite(z, "z")?,
            alpha: check_range(alpha, 1.0, "alpha")?,
        })
    }

    #[inline]
    #[must_use]
    pub const fn x(self) -> f64 {
        self.x
    }

    #[inline]
    #[must_use]
    pub const fn y(self) -> f64 {
        self.y
    }

    #[inline]
    #[must_use]
    pub const fn z(self) -> f64 {
        self.z
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    pub(crate) const fn from_parts(x: f64, y: f64, z: f64, alpha: f64) -> Self {
        Self { x, y, z, alpha }
    }

    /// Linearize each sRGB channel, then apply the sRGB → XYZ matrix.
    #[must_use]
    pub fn from_rgb(rgb: RgbColor) -> Self {
        let r = srgb_to_linear(rgb.red());
        let g = srgb_to_linear(rgb.green());
        let b = srgb_to_linear(rgb.blue());

        Self {
            x: 0.412_456_4 * r + 0.357_576_1 * g + 0.180_437_5 * b,
            y: 0.212_672_9 * r + 0.715_152_2 * g + 0.072_175 * b,
            z: 0.019_333_9 * r + 0.119_192 * g + 0.950_304_1 * b,
            alpha: rgb.alpha(),
        }
    }

    /// Apply the XYZ → sRGB matrix and gamma, clipping to the sRGB gamut.
    ///
    /// Out-of-gamut colors come back with their channels clamped to
    /// [0, 1]. This is lossy and never reported as an error.
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        let Self { x, y, z, alpha } = self;
        let r = x * 3.240_454_2 + y * -1.537_138_5 + z * -0.498_531_4;
        let g = x * -0.969_266 + y * 1.876_010_8 + z * 0.041_556;
        let b = x * 0.055_643_4 + y * -0.204_025_9 + z * 1.057_225_2;

        RgbColor::from_parts(clip(linear_to_srgb(r)), clip(linear_to_srgb(g)), clip(linear_to_srgb(b)), alpha)
    }
}

#[inline]
fn clip(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn white_maps_to_d65() {
        let w = XyzColor::from_rgb(RgbColor::WHITE);
        assert!(approx_eq(w.x(), 0.950_47, 1e-4), "x: {}", w.x());
        assert!(approx_eq(w.y(), 1.0, 1e-4), "y: {}", w.y());
        assert!(approx_eq(w.z(), 1.088_83, 1e-4), "z: {}", w.z());
    }

    #[test]
    fn black_is_origin() {
        let k = XyzColor::from_rgb(RgbColor::BLACK);
        assert_eq!((k.x(), k.y(), k.z()), (0.0, 0.0, 0.0));
    }

    #[test]
    fn alpha_passes_through() {
        let c = RgbColor::rgba(0.2, 0.4, 0.6, 0.3).unwrap();
        assert!(approx_eq(c.to_xyz().alpha(), 0.3, 1e-12));
        assert!(approx_eq(c.to_xyz().to_rgb().alpha(), 0.3, 1e-12));
    }

    #[test]
    fn out_of_gamut_is_clipped() {
        let hot = XyzColor::xyz(2.0, 0.1, -0.5).unwrap();
        let rgb = hot.to_rgb();
        for ch in [rgb.red(), rgb.green(), rgb.blue()] {
            assert!((0.0..=1.0).contains(&ch), "channel {ch}");
        }
    }

    #[test]
    fn rejects_non_finite() {
        assert!(XyzColor::xyz(f64::NAN, 0.0, 0.0).is_err());
        assert!(XyzColor::xyza(0.0, 0.0, 0.0, 1.5).is_err());
    }
}
