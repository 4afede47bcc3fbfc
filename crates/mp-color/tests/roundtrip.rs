//! Property tests for the color-space conversions.

use mp_color::{LabColor, LchColor, RgbColor};
use proptest::prelude::*;

fn channel() -> impl Strategy<Value = f64> {
    0.0..=1.0f64
}

fn rgb() -> impl Strategy<Value = RgbColor> {
    (channel(), channel(), channel()).prop_map(|(r, g, b)| RgbColor::rgb(r, g, b).unwrap())
}

fn assert_rgb_close(a: RgbColor, b: RgbColor, eps: f64) {
    for (x, y, name) in [
        (a.red(), b.red(), "red"),
        (a.green(), b.green(), "green"),
        (a.blue(), b.blue(), "blue"),
    ] {
        assert!((x - y).abs() < eps, "{name}: {x} vs {y} ({a:?} vs {b:?})");
    }
}

proptest! {
    #[test]
    fn rgb_lab_rgb(c in rgb()) {
        assert_rgb_close(c, c.to_lab().to_rgb(), 1e-4);
    }

    #[test]
    fn rgb_lch_rgb(c in rgb()) {
        assert_rgb_close(c, c.to_lch().to_rgb(), 1e-4);
    }

    #[test]
    fn lab_lch_lab(c in rgb()) {
        let lab = c.to_lab();
        prop_assert_eq!(LchColor::from_lab(lab).to_lab(), lab);
    }

    #[test]
    fn hex_roundtrip(r: u8, g: u8, b: u8) {
        let c = RgbColor::rgb8(r, g, b);
        let parsed = RgbColor::from_hex(&c.to_hex()).unwrap();
        prop_assert_eq!(parsed.to_rgb8(), (r, g, b));
    }

    #[test]
    fn argb_roundtrip(value: u32) {
        prop_assert_eq!(RgbColor::from_argb(value).to_argb(), value);
    }

    #[test]
    fn lch_is_always_valid(c in rgb()) {
        let lch = c.to_lch();
        prop_assert!(LchColor::lch(lch.lightness(), lch.chroma(), lch.hue()).is_ok());
        prop_assert!(LabColor::lab(lch.lightness(), 0.0, 0.0).is_ok());
    }

    #[test]
    fn contrast_ratio_bounds(a in rgb(), b in rgb()) {
        let ratio = a.contrast_ratio(b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio), "ratio {}", ratio);
    }

    #[test]
    fn hsv_output_is_in_gamut(c in rgb()) {
        let back = c.to_hsv().to_rgb();
        for ch in [back.red(), back.green(), back.blue()] {
            prop_assert!((0.0..=1.0).contains(&ch));
        }
    }
}
