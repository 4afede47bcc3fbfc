// SPDX-License-Identifier: MIT
//
// CIE 1976 L*a*b*, the space the golden palettes are calibrated in.
//
// Forward transform (XYZ → LAB), with D65 white (Xn, Yn, Zn):
//
//   L* = 116 f(Y/Yn) − 16
//   a* = 500 (f(X/Xn) − f(Y/Yn))
//   b* = 200 (f(Y/Yn) − f(Z/Zn))
//
//   f(t) = t^(1/3)              if t > (6/29)^3
//          t / (3 (6/29)^2) + 4/29   otherwise

use std::fmt;

use crate::error::{Result, check_finite, check_range};
use crate::lch::LchColor;
use crate::rgb::RgbColor;
use crate::xyz::XyzColor;

/// D65 reference white.
pub const D65_WHITE: (f64, f64, f64) = (0.950_47, 1.0, 1.088_83);

/// Component tolerance used by [`LabColor`]'s `PartialEq`.
pub const LAB_EPSILON: f64 = 1e-4;

/// A color in CIE LAB space with alpha.
///
/// Lightness is validated as non-negative (no fixed ceiling); a* and b* are
/// unbounded but must be finite.
#[derive(Clone, Copy)]
pub struct LabColor {
    lightness: f64,
    a: f64,
    b: f64,
    alpha: f64,
}

impl LabColor {
    /// Create an opaque LAB color.
    ///
    /// # Errors
    ///
    /// [`crate::ColorError::OutOfRange`] for a negative or NaN lightness,
    /// [`crate::ColorError::NotFinite`] for a non-finite a*/b*.
    pub fn lab(lightness: f64, a: f64, b: f64) -> Result<Self> {
        Self::laba(lightness, a, b, 1.0)
    }

    /// Create a LAB color with alpha.
    ///
    /// # Errors
    ///
    /// As [`LabColor::lab`], plus [`crate::ColorError::OutOfRange`] for alpha
    /// outside [0, 1].
    pub fn laba(lightness: f64, a: f64, b: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            lightness: check_range(lightness, f64::MAX, "lightness")?,
            a: check_finite(a, "a")?,
            b: check_finite(b, "b")?,
            alpha: check_range(alpha, 1.0, "alpha")?,
        })
    }

    /// Build an opaque LAB color without validation, for `const`
    /// calibration tables only.
    ///
    /// The caller guarantees a non-negative lightness and finite a*/b*; use
    /// [`LabColor::lab`] for any runtime value.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(lightness: f64, a: f64, b: f64) -> Self {
        Self { lightness, a, b, alpha: 1.0 }
    }

    pub(crate) const fn from_parts(lightness: f64, a: f64, b: f64, alpha: f64) -> Self {
        Self { lightness, a, b, alpha }
    }

    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.lightness
    }

    #[inline]
    #[must_use]
    pub const fn a(self) -> f64 {
        self.a
    }

    #[inline]
    #[must_use]
    pub const fn b(self) -> f64 {
        self.b
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Chroma in raw a*/b* space: `hypot(a*, b*)`.
    #[inline]
    #[must_use]
    pub fn chroma(self) -> f64 {
        (self.a * self.a + self.b * self.b).sqrt()
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// XYZ → LAB against the D65 white point.
    #[must_use]
    pub fn from_xyz(xyz: XyzColor) -> Self {
        let (xn, yn, zn) = D65_WHITE;
        let fx = lab_f(xyz.x() / xn);
        let fy = lab_f(xyz.y() / yn);
        let fz = lab_f(xyz.z() / zn);

        Self {
            lightness: (116.0 * fy - 16.0).max(0.0),
            a: 500.0 * (fx - fy),
            b: 200.0 * (fy - fz),
            alpha: xyz.alpha(),
        }
    }

    /// LAB → XYZ, inverting `f(t)` piecewise.
    #[must_use]
    pub fn to_xyz(self) -> XyzColor {
        let (xn, yn, zn) = D65_WHITE;
        let fy = (self.lightness + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        XyzColor::from_parts(lab_f_inv(fx) * xn, lab_f_inv(fy) * yn, lab_f_inv(fz) * zn, self.alpha)
    }

    /// Parse an sRGB hex string straight into LAB.
    ///
    /// # Errors
    ///
    /// Whatever [`RgbColor::from_hex`] rejects.
    pub fn from_hex(s: &str) -> Result<Self> {
        RgbColor::from_hex(s).map(RgbColor::to_lab)
    }

    /// Convert a packed `0xRRGGBB` integer straight into LAB.
    #[must_use]
    pub fn from_rgb_int(value: u32) -> Self {
        RgbColor::from_rgb_int(value).to_lab()
    }

    /// LAB → sRGB (gamut-clipped).
    #[must_use]
    pub fn to_rgb(self) -> RgbColor {
        self.to_xyz().to_rgb()
    }

    /// LAB → LCH (polar form).
    #[must_use]
    pub fn to_lch(self) -> LchColor {
        LchColor::from_lab(self)
    }
}

impl PartialEq for LabColor {
    /// Components within [`LAB_EPSILON`]; alpha must match exactly.
    fn eq(&self, other: &Self) -> bool {
        (self.lightness - other.lightness).abs() < LAB_EPSILON
            && (self.a - other.a).abs() < LAB_EPSILON
            && (self.b - other.b).abs() < LAB_EPSILON
            && self.alpha.total_cmp(&other.alpha).is_eq()
    }
}

impl fmt::Debug for LabColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LabColor({:.4}, {:.4}, {:.4}", self.lightness, self.a, self.b)?;
        if self.alpha < 1.0 {
            write!(f, ", {:.2}", self.alpha)?;
        }
        f.write_str(")")
    }
}

// ─── f(t) ────────────────────────────────────────────────────────────────────

fn lab_f(t: f64) -> f64 {
    let t0: f64 = 4.0 / 29.0;
    let t1: f64 = 6.0 / 29.0;
    let t2 = 3.0 * t1.powi(2);
    let t3 = t1.powi(3);

    if t > t3 { t.powf(1.0 / 3.0) } else { t / t2 + t0 }
}

fn lab_f_inv(v: f64) -> f64 {
    let cubed = v.powi(3);
    if cubed > 0.008_856 {
        cubed
    } else {
        (v - 16.0 / 116.0) / 7.787
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────
