//! # mp-palette — Material tonal palettes from a single color
//!
//! Derives a complete 14-slot Material Design palette (`50`–`900`,
//! `A100`–`A700`) from any seed color, the way Google's palette tool does:
//! by finding the closest hand-tuned reference palette and carrying the
//! seed's offset from it across every slot.
//!
//! # Architecture
//!
//! ```text
//! RgbColor (seed)
//!     │
//!     ▼
//! matcher.rs:  CIEDE2000 search over golden.rs → (palette, index)
//!     │
//!     ▼
//! palette.rs:  fold over 14 slots, LCH offsets + lightness ceiling
//!     │
//!     ▼
//! hue.rs:      ColorPalette { "50": "#ffebee", …, "A700": "#d50000" }
//!     │
//!     ▼
//! contrast.rs: text color per slot (WCAG AA) → "rgba(0,0,0,0.87)"
//! ```
//!
//! Everything is pure computation over read-only tables; palettes for
//! different seeds can be generated in parallel without coordination.
//!
//! ```
//! use mp_color::RgbColor;
//! use mp_palette::{HueLabel, generate_color_palette, generate_contrast_palette};
//!
//! let palette = generate_color_palette(RgbColor::from_hex("#F44336").unwrap());
//! assert_eq!(palette.get(HueLabel::H50), Some("#ffebee"));
//! assert_eq!(palette.get(HueLabel::A700), Some("#d50000"));
//!
//! let text = generate_contrast_palette(&palette).unwrap();
//! assert_eq!(text.get(HueLabel::H900), Some("rgba(255,255,255,1)"));
//! ```

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
// Hue/lightness/chroma variable names are inherently similar.
#![allow(clippy::similar_names)]
// Calibrated formulas keep their plain multiply-then-add order.
#![allow(clippy::suboptimal_flops)]

pub mod contrast;
pub mod error;
pub mod golden;
pub mod hue;
pub mod matcher;
pub mod palette;

pub use contrast::{ContrastOptions, Emphasis};
pub use error::{PaletteError, Result};
pub use golden::GoldenPalette;
pub use hue::{ColorPalette, HueLabel};
pub use matcher::GoldenMatch;
pub use palette::{PaletteGenerator, Tone};

use mp_color::RgbColor;

/// Generate the Material palette for `source` with the built-in tables.
///
/// The slot closest to `source` holds `source` itself; every slot is a
/// lowercase hex string.
#[must_use]
pub fn generate_color_palette(source: RgbColor) -> ColorPalette {
    let golden = matcher::find_closest_material(source.to_lab());
    let tones = PaletteGenerator::default().synthesize(source, &golden);
    palette::palette_from_tones(&tones)
}

/// Pick a readable text color for every slot of `palette`.
///
/// # Errors
///
/// [`PaletteError::MissingHue`] if a slot is empty, [`PaletteError::Color`]
/// if a slot does not parse.
pub fn generate_contrast_palette(palette: &ColorPalette) -> Result<ColorPalette> {
    contrast::contrast_palette(palette, &ContrastOptions::default())
}
