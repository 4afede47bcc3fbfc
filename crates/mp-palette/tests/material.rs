//! Reference scenarios against the published Material palettes.

use mp_color::{LabColor, RgbColor};
use mp_palette::golden::{CHROMA_TOLERANCE, golden_palette, golden_palettes};
use mp_palette::palette::CHROMA_RATIO_CAP;
use mp_palette::{
    ColorPalette, GoldenPalette, HueLabel, PaletteGenerator, generate_color_palette,
    generate_contrast_palette,
};
use pretty_assertions::assert_eq;

const DARK: &str = "rgba(0,0,0,0.87)";
const LIGHT: &str = "rgba(255,255,255,1)";

fn upper(palette: &ColorPalette) -> Vec<(String, String)> {
    palette
        .iter()
        .map(|(label, color)| (label.to_string(), color.to_uppercase()))
        .collect()
}

fn expected(hexes: [&str; 14]) -> Vec<(String, String)> {
    HueLabel::ALL
        .into_iter()
        .zip(hexes)
        .map(|(label, hex)| (label.to_string(), hex.to_string()))
        .collect()
}

// ── Color palettes ────────────────────────────────────────────

#[test]
fn red_500_from_hex() {
    let palette = generate_color_palette(RgbColor::from_hex("#F44336").unwrap());
    assert_eq!(
        upper(&palette),
        expected([
            "#FFEBEE", "#FFCDD2", "#EF9A9A", "#E57373", "#EF5350", "#F44336", "#E53935",
            "#D32F2F", "#C62828", "#B71C1C", "#FF8A80", "#FF5252", "#FF1744", "#D50000",
        ])
    );
}

#[test]
fn pink_500_from_packed_int() {
    let palette = generate_color_palette(RgbColor::from_rgb_int(0xffe9_1e63));
    assert_eq!(
        upper(&palette),
        expected([
            "#FCE4EC", "#F8BBD0", "#F48FB1", "#F06292", "#EC407A", "#E91E63", "#D81B60",
            "#C2185B", "#AD1457", "#880E4F", "#FF80AB", "#FF4081", "#F50057", "#C51162",
        ])
    );
}

#[test]
fn every_material_500_reproduces_its_family() {
    // Published values that sit closer than the minimum lightness step to
    // their neighbour; the generated tone lands just below them.
    let ceiling_bound = [
        ("yellow", HueLabel::H300),
        ("yellow", HueLabel::H400),
        ("yellow", HueLabel::A200),
        ("lime", HueLabel::A200),
    ];

    for golden in golden_palettes() {
        let seed = RgbColor::from_hex(&golden.get(HueLabel::H500).to_rgb().to_hex()).unwrap();
        let palette = generate_color_palette(seed);
        for (label, lab) in golden.iter() {
            if ceiling_bound.contains(&(golden.name(), label)) {
                continue;
            }
            assert_eq!(
                palette.get(label),
                Some(lab.to_rgb().to_hex().as_str()),
                "{} {label}",
                golden.name()
            );
        }
    }
}

#[test]
fn yellow_500_tones_below_ceiling() {
    let palette = generate_color_palette(RgbColor::from_hex("#ffeb3b").unwrap());
    assert_eq!(palette.get(HueLabel::H300), Some("#fef075"));
    assert_eq!(palette.get(HueLabel::H400), Some("#fceb55"));
    assert_eq!(palette.get(HueLabel::A200), Some("#fcfc00"));
}

#[test]
fn output_is_lowercase_hex() {
    let palette = generate_color_palette(RgbColor::from_hex("#3A7BD5").unwrap());
    assert!(palette.is_complete());
    for (_, color) in palette.iter() {
        assert_eq!(color.len(), 7, "{color}");
        assert!(color.starts_with('#'));
        assert_eq!(color, color.to_lowercase());
    }
}

// ── Contrast palettes ─────────────────────────────────────────

#[test]
fn red_500_contrast() {
    let palette = generate_color_palette(RgbColor::from_hex("#F44336").unwrap());
    let contrast = generate_contrast_palette(&palette).unwrap();
    let got: Vec<_> = contrast.iter().map(|(label, c)| (label.to_string(), c.to_string())).collect();
    assert_eq!(
        got,
        expected([
            DARK, DARK, DARK, DARK, DARK, DARK, DARK, LIGHT, LIGHT, LIGHT, DARK, DARK, DARK, LIGHT,
        ])
    );
}

#[test]
fn pink_500_contrast() {
    let palette = generate_color_palette(RgbColor::from_rgb_int(0xe9_1e63));
    let contrast = generate_contrast_palette(&palette).unwrap();
    let got: Vec<_> = contrast.iter().map(|(label, c)| (label.to_string(), c.to_string())).collect();
    assert_eq!(
        got,
        expected([
            DARK, DARK, DARK, DARK, DARK, DARK, LIGHT, LIGHT, LIGHT, LIGHT, DARK, DARK, DARK, LIGHT,
        ])
    );
}

#[test]
fn contrast_palette_as_json() {
    let palette = generate_color_palette(RgbColor::from_hex("#F44336").unwrap());
    let contrast = generate_contrast_palette(&palette).unwrap();
    let json = serde_json::to_value(&contrast).unwrap();
    assert_eq!(json["500"], DARK);
    assert_eq!(json["A700"], LIGHT);

    let back: ColorPalette = serde_json::from_value(serde_json::to_value(&palette).unwrap()).unwrap();
    assert_eq!(back, palette);
}

// ── Synthetic golden tables ───────────────────────────────────

const SYNTHETIC_LIGHTNESS: [f64; 14] =
    [95.0, 88.0, 80.0, 72.0, 64.0, 56.0, 50.0, 44.0, 38.0, 30.0, 85.0, 75.0, 60.0, 45.0];

fn synthetic(name: &'static str, ab: f64) -> GoldenPalette {
    GoldenPalette::new(name, SYNTHETIC_LIGHTNESS.map(|l| LabColor::new_unchecked(l, ab, ab)))
}

#[test]
fn neutral_table_shifts_chroma_uniformly() {
    let gray = synthetic("gray", 2.0);
    let generator = PaletteGenerator::default().with_golden_palettes(vec![gray]);
    let seed = LabColor::lab(56.0, 6.0, 6.0).unwrap().to_rgb();

    let golden = generator.closest_golden(seed).unwrap();
    assert_eq!(golden.hue(), HueLabel::H500);

    let delta_c = golden.color().chroma() - seed.to_lch().chroma();
    for tone in generator.tones(seed).unwrap().iter().filter(|t| !t.is_seed) {
        let golden_c = gray.get(tone.label).chroma();
        assert!((tone.lch.chroma() - (golden_c - delta_c)).abs() < 1e-4, "{tone:?}");
        assert!((tone.lch.lightness() - gray.get(tone.label).lightness()).abs() < 1e-4, "{tone:?}");
        assert!((tone.lch.hue() - 45.0).abs() < 1e-3, "{tone:?}");
    }
}

#[test]
fn chromatic_table_scales_chroma_by_tolerance() {
    let orange = synthetic("orange", 30.0);
    let generator = PaletteGenerator::default().with_golden_palettes(vec![orange]);
    let seed = LabColor::lab(56.0, 34.0, 34.0).unwrap().to_rgb();

    let golden = generator.closest_golden(seed).unwrap();
    assert_eq!(golden.hue(), HueLabel::H500);

    let delta_c = golden.color().chroma() - seed.to_lch().chroma();
    for tone in generator.tones(seed).unwrap().iter().filter(|t| !t.is_seed) {
        let i = tone.label.index();
        let ratio = (CHROMA_TOLERANCE[i] / CHROMA_TOLERANCE[5]).min(CHROMA_RATIO_CAP);
        let golden_c = orange.get(tone.label).chroma();
        assert!((tone.lch.chroma() - (golden_c - delta_c * ratio)).abs() < 1e-4, "{tone:?}");
    }
}

#[test]
fn named_palette_round_trip() {
    let indigo = golden_palette("indigo").unwrap();
    let seed = RgbColor::from_hex(&indigo.get(HueLabel::H900).to_rgb().to_hex()).unwrap();
    let palette = generate_color_palette(seed);
    assert_eq!(palette.get(HueLabel::H900), Some("#1a237e"));
    assert_eq!(palette.get(HueLabel::H500), Some("#3f51b5"));
}
