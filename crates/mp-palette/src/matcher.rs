//! Closest-golden-palette search by CIEDE2000 distance.
//!
//! Every entry of every golden palette is scored against the source color;
//! the lowest score wins. Palettes are scanned in declared order and ties
//! keep the first minimum, so the result is fully deterministic.

use std::f64::consts::PI;

use mp_color::LabColor;
use tracing::debug;

use crate::error::{PaletteError, Result};
use crate::golden::{GoldenPalette, golden_palettes};
use crate::hue::HueLabel;

/// 25^7, the chroma pivot of the G-factor and rotation term.
const POW25_7: f64 = 6_103_515_625.0;

/// Below this, a raw chroma counts as neutral and its hue is ignored.
const NEUTRAL_EPSILON: f64 = 1e-4;

// ---------------------------------------------------------------------------
// GoldenMatch
// ---------------------------------------------------------------------------

/// The golden entry closest to a source color.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenMatch<'a> {
    /// The palette the winning entry belongs to.
    pub palette: &'a GoldenPalette,
    /// Position of the winning entry within the palette (0–13).
    pub index: usize,
    /// CIEDE2000 distance between the source and the winning entry.
    pub delta_e: f64,
}

impl GoldenMatch<'_> {
    /// Hue label of the winning entry.
    #[must_use]
    pub fn hue(&self) -> HueLabel {
        HueLabel::ALL[self.index]
    }

    /// The winning golden color.
    #[must_use]
    pub fn color(&self) -> LabColor {
        self.palette.colors()[self.index]
    }
}

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Find the golden entry closest to `source` among `palettes`.
///
/// # Errors
///
/// [`PaletteError::EmptyGoldenSet`] if `palettes` is empty.
pub fn find_closest(source: LabColor, palettes: &[GoldenPalette]) -> Result<GoldenMatch<'_>> {
    let first = palettes.first().ok_or(PaletteError::EmptyGoldenSet)?;
    Ok(search(source, first, palettes))
}

/// [`find_closest`] over the built-in Material palettes, which are never empty.
#[must_use]
pub fn find_closest_material(source: LabColor) -> GoldenMatch<'static> {
    let palettes = golden_palettes();
    search(source, &palettes[0], palettes)
}

fn search<'a>(source: LabColor, first: &'a GoldenPalette, palettes: &'a [GoldenPalette]) -> GoldenMatch<'a> {
    let mut best = GoldenMatch {
        palette: first,
        index: 0,
        delta_e: ciede2000(first.colors()[0], source),
    };

    for palette in palettes {
        for (index, golden) in palette.colors().iter().enumerate() {
            // An exact hit cannot be beaten.
            if best.delta_e <= 0.0 {
                break;
            }
            let delta_e = ciede2000(*golden, source);
            if delta_e < best.delta_e {
                best = GoldenMatch { palette, index, delta_e };
            }
        }
    }

    debug!(
        palette = best.palette.name(),
        hue = %best.hue(),
        delta_e = best.delta_e,
        "matched golden palette"
    );
    best
}

// ---------------------------------------------------------------------------
// CIEDE2000
// ---------------------------------------------------------------------------

/// CIEDE2000 color difference between a `reference` and a `sample` color,
/// with unit weighting factors (kL = kC = kH = 1).
///
/// Returns 0 for identical colors; a difference around 1 is the threshold
/// of perception.
#[must_use]
pub fn ciede2000(reference: LabColor, sample: LabColor) -> f64 {
    let avg_lightness = (reference.lightness() + sample.lightness()) / 2.0;

    // a* is stretched for low-chroma pairs before anything else is measured.
    let ref_chroma = reference.chroma();
    let sample_chroma = sample.chroma();
    let avg_chroma = (ref_chroma + sample_chroma) / 2.0;
    let g = 0.5 * (1.0 - (avg_chroma.powi(7) / (avg_chroma.powi(7) + POW25_7)).sqrt());

    let ref_a = reference.a() * (1.0 + g);
    let sample_a = sample.a() * (1.0 + g);
    let ref_c = (ref_a * ref_a + reference.b() * reference.b()).sqrt();
    let sample_c = (sample_a * sample_a + sample.b() * sample.b()).sqrt();
    let delta_c = sample_c - ref_c;
    let avg_c = (ref_c + sample_c) / 2.0;

    let ref_h = lab_hue(reference.b(), ref_a);
    let sample_h = lab_hue(sample.b(), sample_a);
    let neutral = ref_chroma < NEUTRAL_EPSILON || sample_chroma < NEUTRAL_EPSILON;

    let dh = if neutral {
        0.0
    } else if (sample_h - ref_h).abs() <= 180.0 {
        sample_h - ref_h
    } else if sample_h <= ref_h {
        sample_h - ref_h + 360.0
    } else {
        sample_h - ref_h - 360.0
    };
    let delta_h = 2.0 * (ref_c * sample_c).sqrt() * radians(dh / 2.0).sin();

    let avg_h = if neutral {
        0.0
    } else if (sample_h - ref_h).abs() <= 180.0 {
        (ref_h + sample_h) / 2.0
    } else if ref_h + sample_h < 360.0 {
        (ref_h + sample_h + 360.0) / 2.0
    } else {
        (ref_h + sample_h - 360.0) / 2.0
    };

    let s_c = 1.0 + 0.045 * avg_c;
    let t = 1.0 - 0.17 * radians(avg_h - 30.0).cos()
        + 0.24 * radians(2.0 * avg_h).cos()
        + 0.32 * radians(3.0 * avg_h + 6.0).cos()
        - 0.2 * radians(4.0 * avg_h - 63.0).cos();
    let s_h = 1.0 + 0.015 * avg_c * t;
    let l50 = (avg_lightness - 50.0).powi(2);
    let s_l = 1.0 + 0.015 * l50 / (20.0 + l50).sqrt();

    let r_c = 2.0 * (avg_c.powi(7) / (avg_c.powi(7) + POW25_7)).sqrt();
    let delta_theta = 30.0 * (-((avg_h - 275.0) / 25.0).powi(2)).exp();
    let r_t = -r_c * radians(2.0 * delta_theta).sin();

    let dl = (sample.lightness() - reference.lightness()) / s_l;
    let dc = delta_c / s_c;
    let dh = delta_h / s_h;
    (dl.powi(2) + dc.powi(2) + dh.powi(2) + dc * r_t * dh).sqrt()
}

/// Hue angle in degrees of `(a, b)` as `atan2(y, x)`, in [0, 360).
/// Zero when both components are within the neutral dead zone.
fn lab_hue(y: f64, x: f64) -> f64 {
    if y.abs() < NEUTRAL_EPSILON && x.abs() < NEUTRAL_EPSILON {
        return 0.0;
    }
    let h = 180.0 * y.atan2(x) / PI;
    if h >= 0.0 { h } else { h + 360.0 }
}

#[inline]
fn radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
