// SPDX-License-Identifier: MIT
//
// sRGB color: the entry and exit point of every palette computation.
//
// Channels are stored as normalized f64 in [0, 1]. The type is validated at
// construction, so any `RgbColor` in hand is known to be displayable. All
// conversions into the CIE spaces go through linear light:
//
//   sRGB ──gamma──▶ linear RGB ──matrix──▶ XYZ ──f(t)──▶ LAB ──polar──▶ LCH
//
// The way back clips out-of-gamut channels to [0, 1] instead of failing.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ColorError, Result, check_range};
use crate::hsv::HsvColor;
use crate::lab::LabColor;
use crate::lch::LchColor;
use crate::xyz::XyzColor;

/// Alpha values within this distance of 1.0 are treated as fully opaque.
pub const ALPHA_ACCURACY: f64 = 1.0 / 65536.0;

static RGBA_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^rgba?\(\s*(\d{1,3})\s*,\s*(\d{1,3})\s*,\s*(\d{1,3})\s*(?:,\s*(\d*\.?\d+)\s*)?\)$",
    )
    .expect("Invalid rgba() regex")
});

// ─── RgbColor ────────────────────────────────────────────────────────────────

/// An sRGB color with straight (non-premultiplied) alpha.
///
/// # Examples
///
/// ```
/// use mp_color::RgbColor;
///
/// let red = RgbColor::from_hex("#F44336").unwrap();
/// assert_eq!(red.to_hex(), "#f44336");
/// assert_eq!(red.to_rgba_string(), "rgba(244,67,54,1)");
///
/// let pink = RgbColor::from_rgb_int(0xffe9_1e63);
/// assert_eq!(pink.to_string(), "#e91e63");
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct RgbColor {
    red: f64,
    green: f64,
    blue: f64,
    alpha: f64,
}

impl RgbColor {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Pure opaque black.
    pub const BLACK: Self = Self::from_parts(0.0, 0.0, 0.0, 1.0);

    /// Pure opaque white.
    pub const WHITE: Self = Self::from_parts(1.0, 1.0, 1.0, 1.0);

    /// Create an opaque color from normalized channels.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if a channel is NaN or outside [0, 1].
    pub fn rgb(red: f64, green: f64, blue: f64) -> Result<Self> {
        Self::rgba(red, green, blue, 1.0)
    }

    /// Create a color from normalized channels and alpha.
    ///
    /// # Errors
    ///
    /// [`ColorError::OutOfRange`] if any component is NaN or outside [0, 1].
    pub fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Result<Self> {
        Ok(Self {
            red: check_range(red, 1.0, "red")?,
            green: check_range(green, 1.0, "green")?,
            blue: check_range(blue, 1.0, "blue")?,
            alpha: check_range(alpha, 1.0, "alpha")?,
        })
    }

    /// Create an opaque color from 8-bit channels. Cannot fail.
    #[must_use]
    pub fn rgb8(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba8(red, green, blue, u8::MAX)
    }

    /// Create a color from 8-bit channels and 8-bit alpha. Cannot fail.
    #[must_use]
    pub fn rgba8(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self::from_parts(
            f64::from(red) / 255.0,
            f64::from(green) / 255.0,
            f64::from(blue) / 255.0,
            f64::from(alpha) / 255.0,
        )
    }

    /// Build a color without validation, for `const` items only.
    ///
    /// Exists so fixed colors such as text-emphasis constants can be built
    /// at compile time. The caller guarantees every component is in [0, 1];
    /// use [`RgbColor::rgba`] for any runtime value.
    #[doc(hidden)]
    #[must_use]
    pub const fn new_unchecked(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self::from_parts(red, green, blue, alpha)
    }

    /// Build from components that are already known to be in range.
    pub(crate) const fn from_parts(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self { red, green, blue, alpha }
    }

    /// Parse a hex color string, with or without a leading `#`.
    ///
    /// The digits are right-padded with `f` to eight and read as
    /// `RRGGBBAA`, so `#F44336` is opaque and `#F4433680` is half
    /// transparent. Short forms are padded the same way rather than
    /// expanded: `abc` reads as `abcfffff`.
    ///
    /// # Errors
    ///
    /// [`ColorError::InvalidHex`] for an empty string, a non-hex digit, or
    /// more than eight digits.
    pub fn from_hex(s: &str) -> Result<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.is_empty() || digits.len() > 8 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidHex(s.to_string()));
        }

        let padded = format!("{digits:f<8}");
        let value =
            u32::from_str_radix(&padded, 16).map_err(|_| ColorError::InvalidHex(s.to_string()))?;
        let [r, g, b, a] = value.to_be_bytes();
        Ok(Self::rgba8(r, g, b, a))
    }

    /// Create an opaque color from a packed `0xRRGGBB` integer.
    ///
    /// Anything above the low 24 bits is ignored, so `0xffe91e63` and
    /// `0x00e91e63` both give an opaque `#e91e63`.
    #[must_use]
    pub fn from_rgb_int(value: u32) -> Self {
        let [_, r, g, b] = value.to_be_bytes();
        Self::rgb8(r, g, b)
    }

    /// Create a color from a packed `0xAARRGGBB` integer.
    #[must_use]
    pub fn from_argb(value: u32) -> Self {
        let [a, r, g, b] = value.to_be_bytes();
        Self::rgba8(r, g, b, a)
    }

    // ─── Accessors ───────────────────────────────────────────────────────

    #[inline]
    #[must_use]
    pub const fn red(self) -> f64 {
        self.red
    }

    #[inline]
    #[must_use]
    pub const fn green(self) -> f64 {
        self.green
    }

    #[inline]
    #[must_use]
    pub const fn blue(self) -> f64 {
        self.blue
    }

    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.alpha
    }

    /// Whether alpha is close enough to 1.0 to skip compositing.
    #[inline]
    #[must_use]
    pub fn is_opaque(self) -> bool {
        1.0 - self.alpha < ALPHA_ACCURACY
    }

    /// Return a fully opaque copy (alpha dropped, channels kept).
    #[inline]
    #[must_use]
    pub const fn opaque(self) -> Self {
        Self { alpha: 1.0, ..self }
    }

    // ─── Serialization ───────────────────────────────────────────────────

    /// Round each channel to 8 bits.
    #[must_use]
    pub fn to_rgb8(self) -> (u8, u8, u8) {
        (to_u8(self.red), to_u8(self.green), to_u8(self.blue))
    }

    /// Pack into `0xAARRGGBB`, rounding every component to 8 bits.
    #[must_use]
    pub fn to_argb(self) -> u32 {
        let (r, g, b) = self.to_rgb8();
        u32::from_be_bytes([to_u8(self.alpha), r, g, b])
    }

    /// Lowercase hex: `#rrggbb`, or `#rrggbbaa` when alpha < 1.
    #[must_use]
    pub fn to_hex(self) -> String {
        let (r, g, b) = self.to_rgb8();
        if self.alpha < 1.0 {
            let a = to_u8(self.alpha);
            format!("#{r:02x}{g:02x}{b:02x}{a:02x}")
        } else {
            format!("#{r:02x}{g:02x}{b:02x}")
        }
    }

    /// CSS functional form: `rgba(r,g,b,a)` with 0–255 channels and the
    /// alpha fraction printed as-is (`rgba(0,0,0,0.87)`, `rgba(255,255,255,1)`).
    #[must_use]
    pub fn to_rgba_string(self) -> String {
        let (r, g, b) = self.to_rgb8();
        format!("rgba({r},{g},{b},{})", self.alpha)
    }

    // ─── Compositing & Contrast ──────────────────────────────────────────

    /// Composite this color (source) over `backdrop` with the "over" operator.
    ///
    /// Blending happens on the gamma-encoded channels, which is what WCAG
    /// tooling does when it flattens a translucent text color.
    #[must_use]
    pub fn blend_over(self, backdrop: Self) -> Self {
        if self.is_opaque() {
            return self;
        }

        let weight = backdrop.alpha * (1.0 - self.alpha);
        let out_alpha = self.alpha + weight;
        if out_alpha <= 0.0 {
            return Self::from_parts(0.0, 0.0, 0.0, 0.0);
        }

        let mix = |src: f64, dst: f64| ((src * self.alpha + dst * weight) / out_alpha).clamp(0.0, 1.0);
        Self::from_parts(
            mix(self.red, backdrop.red),
            mix(self.green, backdrop.green),
            mix(self.blue, backdrop.blue),
            out_alpha.min(1.0),
        )
    }

    /// Relative luminance per WCAG 2.0:
    ///   L = 0.2126 * `R_lin` + 0.7152 * `G_lin` + 0.0722 * `B_lin`
    ///
    /// Alpha is ignored; composite first if the color is translucent.
    #[must_use]
    pub fn relative_luminance(self) -> f64 {
        let r_lin = srgb_to_linear(self.red);
        let g_lin = srgb_to_linear(self.green);
        let b_lin = srgb_to_linear(self.blue);
        0.2126f64.mul_add(r_lin, 0.7152f64.mul_add(g_lin, 0.0722 * b_lin))
    }

    /// WCAG 2.0 contrast ratio of `text` drawn on this color.
    ///
    /// This color is the backdrop and is treated as opaque. A translucent
    /// `text` color is first composited over it, so `rgba(0,0,0,0.87)` is
    /// measured as the dark gray a reader actually sees.
    ///
    /// Returns a value in [1.0, 21.0] regardless of which side is lighter.
    #[must_use]
    pub fn contrast_ratio(self, text: Self) -> f64 {
        let text = text.blend_over(self.opaque());
        let lt = text.relative_luminance();
        let lb = self.relative_luminance();
        let (lighter, darker) = if lt >= lb { (lt, lb) } else { (lb, lt) };
        (lighter + 0.05) / (darker + 0.05)
    }

    // ─── Conversions ─────────────────────────────────────────────────────

    /// Convert to CIE XYZ (D65).
    #[must_use]
    pub fn to_xyz(self) -> XyzColor {
        XyzColor::from_rgb(self)
    }

    /// Convert to CIE LAB (D65).
    #[must_use]
    pub fn to_lab(self) -> LabColor {
        LabColor::from_xyz(self.to_xyz())
    }

    /// Convert to CIE LCH (polar LAB).
    #[must_use]
    pub fn to_lch(self) -> LchColor {
        LchColor::from_lab(self.to_lab())
    }

    /// Convert to HSV.
    #[must_use]
    pub fn to_hsv(self) -> HsvColor {
        HsvColor::from_rgb(self)
    }
}

impl fmt::Debug for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "RgbColor({:.4}, {:.4}, {:.4}, {:.2})",
            self.red, self.green, self.blue, self.alpha
        )
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Default for RgbColor {
    /// Default is fully opaque black.
    fn default() -> Self {
        Self::BLACK
    }
}

impl FromStr for RgbColor {
    type Err = ColorError;

    /// Accepts everything [`RgbColor::from_hex`] does, plus CSS
    /// `rgb(r,g,b)` and `rgba(r,g,b,a)` with 0–255 channels.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.starts_with("rgb") {
            parse_functional(s)
        } else {
            Self::from_hex(s)
        }
    }
}

// ─── Gamma ───────────────────────────────────────────────────────────────────

/// Convert a single sRGB component to linear light (remove gamma).
#[inline]
#[must_use]
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.040_45 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a single linear component to sRGB (apply gamma).
#[inline]
#[must_use]
pub fn linear_to_srgb(c: f64) -> f64 {
    if c > 0.003_130_8 {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    } else {
        c * 12.92
    }
}

// ─── Parsing helpers ─────────────────────────────────────────────────────────

fn parse_functional(s: &str) -> Result<RgbColor> {
    let invalid = || ColorError::InvalidFunctional(s.to_string());
    let caps = RGBA_PATTERN.captures(s).ok_or_else(invalid)?;

    let channel = |idx: usize| -> Result<f64> {
        let raw: f64 = caps[idx].parse().map_err(|_| invalid())?;
        Ok(raw / 255.0)
    };
    let alpha = match caps.get(4) {
        Some(m) => m.as_str().parse().map_err(|_| invalid())?,
        None => 1.0,
    };

    RgbColor::rgba(channel(1)?, channel(2)?, channel(3)?, alpha)
}

/// Convert a float (0.0–1.0) to a u8 (0–255), rounding half up.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
