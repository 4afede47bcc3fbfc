//! Palette synthesis: from one seed color to a full 14-tone palette.
//!
//! The seed is matched to its closest golden entry, and the LCH offset
//! between the two is carried over to every other slot of that golden
//! palette, weighted by per-slot tolerances:
//!
//! ```text
//! seed RGB ──▶ LAB ──▶ closest golden (palette, index)
//!                           │
//!                           ▼
//!              ΔL, ΔC, Δh = golden[index] − seed   (in LCH)
//!                           │
//!                           ▼
//!   fold over slots 0..13, threading a lightness ceiling:
//!     slot == index  →  the seed itself
//!     otherwise      →  golden[slot] − weighted deltas, capped by ceiling
//! ```
//!
//! The ceiling keeps tonal steps at least [`MIN_LIGHTNESS_STEP`] apart and
//! strictly darkening from 50 to 900. It is reset to 100 at `A100` so the
//! accents are free of the tonal run.

use std::borrow::Cow;

use mp_color::lch::normalize_hue;
use mp_color::{LchColor, RgbColor};
use tracing::trace;

use crate::error::{PaletteError, Result};
use crate::golden::{CHROMA_TOLERANCE, GoldenPalette, LIGHTNESS_TOLERANCE, golden_palettes};
use crate::hue::{ColorPalette, HueLabel};
use crate::matcher::{GoldenMatch, find_closest};

/// Minimum lightness drop between consecutive tonal slots.
pub const MIN_LIGHTNESS_STEP: f64 = 1.7;

/// Upper bound on the chroma tolerance ratio between two slots.
pub const CHROMA_RATIO_CAP: f64 = 1.25;

/// A golden palette whose `500` chroma is below this is treated as neutral:
/// chroma offsets are applied uniformly instead of tolerance-scaled.
pub const NEUTRAL_CHROMA: f64 = 30.0;

// ---------------------------------------------------------------------------
// Tone
// ---------------------------------------------------------------------------

/// One synthesized palette slot.
///
/// `lch` is the color as computed, before the sRGB gamut clip; `rgb` is what
/// gets emitted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub label: HueLabel,
    pub lch: LchColor,
    pub rgb: RgbColor,
    /// Whether this slot is the seed color passed through unchanged.
    pub is_seed: bool,
}

/// Serialize tones into a hex-string palette.
#[must_use]
pub fn palette_from_tones(tones: &[Tone]) -> ColorPalette {
    tones.iter().map(|t| (t.label, t.rgb.to_hex())).collect()
}

// ---------------------------------------------------------------------------
// PaletteGenerator
// ---------------------------------------------------------------------------

/// Palette synthesis with its calibration data.
///
/// The default generator uses the built-in Material golden palettes and
/// tolerance tables. Replace any of them to calibrate against a different
/// design system:
///
/// ```
/// use mp_palette::PaletteGenerator;
/// use mp_palette::golden::golden_palette;
/// use mp_color::RgbColor;
///
/// let teal = *golden_palette("teal").unwrap();
/// let generator = PaletteGenerator::default().with_golden_palettes(vec![teal]);
/// let palette = generator.generate(RgbColor::from_hex("#009688").unwrap()).unwrap();
/// assert_eq!(palette.get("900".parse().unwrap()), Some("#004d40"));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteGenerator {
    golden: Cow<'static, [GoldenPalette]>,
    lightness_tolerance: [f64; HueLabel::COUNT],
    chroma_tolerance: [f64; HueLabel::COUNT],
    min_lightness_step: f64,
    chroma_ratio_cap: f64,
    neutral_chroma: f64,
}

impl Default for PaletteGenerator {
    fn default() -> Self {
        Self {
            golden: Cow::Borrowed(golden_palettes()),
            lightness_tolerance: LIGHTNESS_TOLERANCE,
            chroma_tolerance: CHROMA_TOLERANCE,
            min_lightness_step: MIN_LIGHTNESS_STEP,
            chroma_ratio_cap: CHROMA_RATIO_CAP,
            neutral_chroma: NEUTRAL_CHROMA,
        }
    }
}

impl PaletteGenerator {
    /// Match against `palettes` instead of the Material set.
    ///
    /// An empty set is accepted here and reported by the first match as
    /// [`PaletteError::EmptyGoldenSet`].
    #[must_use]
    pub fn with_golden_palettes(mut self, palettes: impl Into<Vec<GoldenPalette>>) -> Self {
        self.golden = Cow::Owned(palettes.into());
        self
    }

    /// Replace the per-slot lightness weights.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidTolerance`] if a weight is not a positive
    /// finite number.
    pub fn with_lightness_tolerance(mut self, weights: [f64; HueLabel::COUNT]) -> Result<Self> {
        self.lightness_tolerance = check_weights(weights, "lightness")?;
        Ok(self)
    }

    /// Replace the per-slot chroma weights.
    ///
    /// # Errors
    ///
    /// [`PaletteError::InvalidTolerance`] if a weight is not a positive
    /// finite number.
    pub fn with_chroma_tolerance(mut self, weights: [f64; HueLabel::COUNT]) -> Result<Self> {
        self.chroma_tolerance = check_weights(weights, "chroma")?;
        Ok(self)
    }

    /// The golden palettes this generator matches against.
    #[must_use]
    pub fn golden_palettes(&self) -> &[GoldenPalette] {
        &self.golden
    }

    /// Find the golden entry closest to `source`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyGoldenSet`] if the generator has no golden palettes.
    pub fn closest_golden(&self, source: RgbColor) -> Result<GoldenMatch<'_>> {
        find_closest(source.to_lab(), &self.golden)
    }

    /// Generate the 14-slot hex palette for `source`.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyGoldenSet`] if the generator has no golden palettes.
    pub fn generate(&self, source: RgbColor) -> Result<ColorPalette> {
        Ok(palette_from_tones(&self.tones(source)?))
    }

    /// Generate the 14 tones for `source`, with their LCH values.
    ///
    /// # Errors
    ///
    /// [`PaletteError::EmptyGoldenSet`] if the generator has no golden palettes.
    pub fn tones(&self, source: RgbColor) -> Result<Vec<Tone>> {
        let golden = self.closest_golden(source)?;
        Ok(self.synthesize(source, &golden))
    }

    /// Derive all 14 tones from `source` and its golden match.
    ///
    /// Never fails: out-of-gamut results are clipped into sRGB.
    #[must_use]
    pub fn synthesize(&self, source: RgbColor, golden: &GoldenMatch<'_>) -> Vec<Tone> {
        let seed = Seed::new(source, golden, self.neutral_chroma);

        let (tones, _) = golden.palette.iter().fold(
            (Vec::with_capacity(HueLabel::COUNT), 100.0),
            |(mut tones, ceiling), (label, golden_lab)| {
                let (tone, ceiling) = self.next_tone(&seed, label, golden_lab.to_lch(), ceiling);
                tones.push(tone);
                (tones, ceiling)
            },
        );
        tones
    }

    /// Compute one slot and the lightness ceiling for the slot after it.
    fn next_tone(&self, seed: &Seed, label: HueLabel, golden: LchColor, ceiling: f64) -> (Tone, f64) {
        let i = label.index();
        if i == seed.index {
            let tone = Tone { label, lch: seed.lch, rgb: seed.rgb, is_seed: true };
            return (tone, (seed.lch.lightness() - self.min_lightness_step).max(0.0));
        }

        let ceiling = if label == HueLabel::A100 { 100.0 } else { ceiling };

        let lightness_ratio = self.lightness_tolerance[i] / self.lightness_tolerance[seed.index];
        let lightness = (golden.lightness() - lightness_ratio * seed.delta_l)
            .min(ceiling)
            .clamp(0.0, 100.0);

        let chroma = if seed.neutral {
            golden.chroma() - seed.delta_c
        } else {
            let ratio = self.chroma_tolerance[i] / self.chroma_tolerance[seed.index];
            golden.chroma() - seed.delta_c * ratio.min(self.chroma_ratio_cap)
        }
        .max(0.0);

        let hue = normalize_hue(golden.hue() - seed.delta_h);

        trace!(hue = %label, lightness, chroma, angle = hue, "synthesized tone");

        let lch = LchColor::new_unchecked(lightness, chroma, hue);
        let tone = Tone { label, lch, rgb: lch.to_rgb(), is_seed: false };
        (tone, (lightness - self.min_lightness_step).max(0.0))
    }
}

/// The seed color and its offsets from the matched golden entry.
struct Seed {
    rgb: RgbColor,
    lch: LchColor,
    index: usize,
    delta_l: f64,
    delta_c: f64,
    delta_h: f64,
    /// The golden palette's `500` slot is near-neutral.
    neutral: bool,
}

impl Seed {
    fn new(rgb: RgbColor, golden: &GoldenMatch<'_>, neutral_chroma: f64) -> Self {
        let lch = rgb.to_lch();
        let reference = golden.color().to_lch();
        Self {
            rgb,
            lch,
            index: golden.index,
            delta_l: reference.lightness() - lch.lightness(),
            delta_c: reference.chroma() - lch.chroma(),
            delta_h: reference.hue() - lch.hue(),
            neutral: golden.palette.get(HueLabel::H500).to_lch().chroma() < neutral_chroma,
        }
    }
}

fn check_weights(weights: [f64; HueLabel::COUNT], table: &'static str) -> Result<[f64; HueLabel::COUNT]> {
    match weights.iter().position(|w| !(w.is_finite() && *w > 0.0)) {
        Some(index) => Err(PaletteError::InvalidTolerance { table, index, value: weights[index] }),
        None => Ok(weights),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::golden::golden_palette;
    use mp_color::LabColor;
    use pretty_assertions::assert_eq;

    fn hex(s: &str) -> RgbColor {
        RgbColor::from_hex(s).unwrap()
    }

    fn hexes(palette: &ColorPalette) -> Vec<&str> {
        palette.iter().map(|(_, c)| c).collect()
    }

    // ── Material round trips ──────────────────────────────────

    #[test]
    fn teal_500_reproduces_teal() {
        let palette = PaletteGenerator::default().generate(hex("#009688")).unwrap();
        assert_eq!(
            hexes(&palette),
            [
                "#e0f2f1", "#b2dfdb", "#80cbc4", "#4db6ac", "#26a69a", "#009688", "#00897b",
                "#00796b", "#00695c", "#004d40", "#a7ffeb", "#64ffda", "#1de9b6", "#00bfa5",
            ]
        );
    }

    #[test]
    fn seed_is_passed_through() {
        let seed = hex("#3a7bd5");
        let tones = PaletteGenerator::default().tones(seed).unwrap();
        let seeds: Vec<_> = tones.iter().filter(|t| t.is_seed).collect();
        assert_eq!(seeds.len(), 1);
        assert_eq!(seeds[0].rgb, seed);
    }

    #[test]
    fn translucent_seed_keeps_alpha() {
        let seed = hex("#f4433680");
        let palette = PaletteGenerator::default().generate(seed).unwrap();
        assert_eq!(palette.get(HueLabel::H500), Some("#f4433680"));
        assert_eq!(palette.get(HueLabel::H50), Some("#ffebee"));
    }

    // ── Lightness ceiling ─────────────────────────────────────

    #[test]
    fn mid_gray_palette() {
        let palette = PaletteGenerator::default().generate(hex("#808080")).unwrap();
        assert_eq!(
            hexes(&palette),
            [
                "#fcfcfc", "#f7f7f7", "#f2f2f2", "#eaeaea", "#c8c8c8", "#aaaaaa", "#808080",
                "#6b6b6b", "#4c4c4c", "#2a2a2a", "#ffffff", "#fafafa", "#cbcbcb", "#6e6e6e",
            ]
        );
    }

    #[test]
    fn tonal_run_darkens_by_min_step() {
        let tones = PaletteGenerator::default().tones(hex("#ffeb3b")).unwrap();
        for pair in tones[..10].windows(2) {
            let (prev, next) = (pair[0].lch.lightness(), pair[1].lch.lightness());
            if !pair[1].is_seed && next > 0.0 {
                assert!(next <= prev - MIN_LIGHTNESS_STEP + 1e-9, "{:?} -> {:?}", pair[0], pair[1]);
            }
        }
    }

    #[test]
    fn accents_restart_below_100() {
        // A very dark seed pins the tonal run low; accents start over.
        let tones = PaletteGenerator::default().tones(hex("#1a0505")).unwrap();
        assert!(tones[10].lch.lightness() > tones[9].lch.lightness());
    }

    // ── Configuration ─────────────────────────────────────────

    #[test]
    fn custom_golden_set() {
        let indigo = *golden_palette("indigo").unwrap();
        let generator = PaletteGenerator::default().with_golden_palettes(vec![indigo]);
        let golden = generator.closest_golden(hex("#f44336")).unwrap();
        assert_eq!(golden.palette.name(), "indigo");
        assert_eq!(generator.golden_palettes().len(), 1);
    }

    #[test]
    fn empty_golden_set() {
        let generator = PaletteGenerator::default().with_golden_palettes(Vec::new());
        assert_eq!(generator.generate(RgbColor::BLACK).unwrap_err(), PaletteError::EmptyGoldenSet);
    }

    #[test]
    fn tolerance_tables_are_validated() {
        let mut weights = LIGHTNESS_TOLERANCE;
        weights[4] = 0.0;
        assert_eq!(
            PaletteGenerator::default().with_lightness_tolerance(weights).unwrap_err(),
            PaletteError::InvalidTolerance { table: "lightness", index: 4, value: 0.0 }
        );
        let mut weights = CHROMA_TOLERANCE;
        weights[13] = f64::NAN;
        assert!(PaletteGenerator::default().with_chroma_tolerance(weights).is_err());
        assert!(PaletteGenerator::default().with_chroma_tolerance([1.0; 14]).is_ok());
    }

    #[test]
    fn flat_tolerances_shift_every_slot_equally() {
        let red = *golden_palette("red").unwrap();
        let generator = PaletteGenerator::default()
            .with_lightness_tolerance([1.0; 14])
            .unwrap()
            .with_golden_palettes(vec![red]);
        let seed = hex("#f44336").to_lab();
        let darker = LabColor::lab(seed.lightness() - 5.0, seed.a(), seed.b()).unwrap().to_rgb();

        let golden = generator.closest_golden(darker).unwrap();
        let delta_l = golden.color().lightness() - darker.to_lab().lightness();
        let tones = generator.tones(darker).unwrap();
        for tone in &tones[golden.index + 1..] {
            let shift = red.get(tone.label).lightness() - tone.lch.lightness();
            assert!((shift - delta_l).abs() < 1e-9, "{tone:?}: {shift} vs {delta_l}");
        }
    }
}
