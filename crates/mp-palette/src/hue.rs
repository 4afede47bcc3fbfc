//! Hue labels and the 14-slot palette they key.
//!
//! Every tonal palette has the same shape: ten tonal steps from the lightest
//! (`50`) to the darkest (`900`), then four accent steps (`A100`–`A700`).
//! Slot order matters: synthesis walks it, serialization preserves it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::PaletteError;

// ---------------------------------------------------------------------------
// HueLabel
// ---------------------------------------------------------------------------

/// One of the 14 palette slot names, declared in palette order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HueLabel {
    H50,
    H100,
    H200,
    H300,
    H400,
    H500,
    H600,
    H700,
    H800,
    H900,
    A100,
    A200,
    A400,
    A700,
}

impl HueLabel {
    /// All labels in palette order.
    pub const ALL: [Self; 14] = [
        Self::H50,
        Self::H100,
        Self::H200,
        Self::H300,
        Self::H400,
        Self::H500,
        Self::H600,
        Self::H700,
        Self::H800,
        Self::H900,
        Self::A100,
        Self::A200,
        Self::A400,
        Self::A700,
    ];

    /// Number of slots in a palette.
    pub const COUNT: usize = Self::ALL.len();

    /// Position of this label in palette order (0–13).
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether this is one of the four accent slots.
    #[must_use]
    pub const fn is_accent(self) -> bool {
        matches!(self, Self::A100 | Self::A200 | Self::A400 | Self::A700)
    }

    /// The conventional name: `"50"` … `"900"`, `"A100"` … `"A700"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::H50 => "50",
            Self::H100 => "100",
            Self::H200 => "200",
            Self::H300 => "300",
            Self::H400 => "400",
            Self::H500 => "500",
            Self::H600 => "600",
            Self::H700 => "700",
            Self::H800 => "800",
            Self::H900 => "900",
            Self::A100 => "A100",
            Self::A200 => "A200",
            Self::A400 => "A400",
            Self::A700 => "A700",
        }
    }
}

impl fmt::Display for HueLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HueLabel {
    type Err = PaletteError;

    /// Accent labels are matched case-insensitively (`a200` works).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|label| label.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| PaletteError::UnknownHue(s.to_string()))
    }
}

impl Serialize for HueLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for HueLabel {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ---------------------------------------------------------------------------
// ColorPalette
// ---------------------------------------------------------------------------

/// A mapping from hue label to a serialized color.
///
/// Generated palettes hold `#rrggbb` strings; contrast palettes hold
/// `rgba(r,g,b,a)` strings. A palette built from arbitrary input may have
/// empty slots; [`ColorPalette::is_complete`] tells whether all 14 are set.
///
/// Serializes as a JSON object keyed by hue label, in palette order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "BTreeMap<HueLabel, String>", into = "BTreeMap<HueLabel, String>")]
pub struct ColorPalette {
    slots: [Option<String>; HueLabel::COUNT],
}

impl ColorPalette {
    /// An empty palette.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the color for `label`, returning the previous one.
    pub fn insert(&mut self, label: HueLabel, color: impl Into<String>) -> Option<String> {
        self.slots[label.index()].replace(color.into())
    }

    /// The color at `label`, if set.
    #[must_use]
    pub fn get(&self, label: HueLabel) -> Option<&str> {
        self.slots[label.index()].as_deref()
    }

    /// Set slots in palette order.
    pub fn iter(&self) -> impl Iterator<Item = (HueLabel, &str)> {
        HueLabel::ALL
            .into_iter()
            .zip(&self.slots)
            .filter_map(|(label, slot)| slot.as_deref().map(|color| (label, color)))
    }

    /// Number of set slots.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether every one of the 14 slots is set.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }
}

impl FromIterator<(HueLabel, String)> for ColorPalette {
    fn from_iter<I: IntoIterator<Item = (HueLabel, String)>>(iter: I) -> Self {
        let mut palette = Self::new();
        for (label, color) in iter {
            palette.insert(label, color);
        }
        palette
    }
}

impl From<BTreeMap<HueLabel, String>> for ColorPalette {
    fn from(map: BTreeMap<HueLabel, String>) -> Self {
        map.into_iter().collect()
    }
}

impl From<ColorPalette> for BTreeMap<HueLabel, String> {
    fn from(palette: ColorPalette) -> Self {
        HueLabel::ALL
            .into_iter()
            .zip(palette.slots)
            .filter_map(|(label, slot)| slot.map(|color| (label, color)))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn labels_are_in_palette_order() {
        for (i, label) in HueLabel::ALL.into_iter().enumerate() {
            assert_eq!(label.index(), i);
        }
        assert!(HueLabel::H900 < HueLabel::A100);
    }

    #[test]
    fn accent_slots() {
        let accents: Vec<_> = HueLabel::ALL.into_iter().filter(|l| l.is_accent()).collect();
        assert_eq!(accents, [HueLabel::A100, HueLabel::A200, HueLabel::A400, HueLabel::A700]);
    }

    #[test]
    fn parse_and_display() {
        for label in HueLabel::ALL {
            assert_eq!(label.to_string().parse::<HueLabel>().unwrap(), label);
        }
        assert_eq!("a700".parse::<HueLabel>().unwrap(), HueLabel::A700);
        assert!(matches!("550".parse::<HueLabel>(), Err(PaletteError::UnknownHue(s)) if s == "550"));
    }

    #[test]
    fn insert_and_get() {
        let mut palette = ColorPalette::new();
        assert!(palette.is_empty());
        assert_eq!(palette.insert(HueLabel::H500, "#f44336"), None);
        assert_eq!(palette.insert(HueLabel::H500, "#e91e63").as_deref(), Some("#f44336"));
        assert_eq!(palette.get(HueLabel::H500), Some("#e91e63"));
        assert_eq!(palette.get(HueLabel::H50), None);
        assert_eq!(palette.len(), 1);
        assert!(!palette.is_complete());
    }

    #[test]
    fn iter_skips_empty_slots_in_order() {
        let palette: ColorPalette = [
            (HueLabel::A700, "#d50000".to_string()),
            (HueLabel::H50, "#ffebee".to_string()),
        ]
        .into_iter()
        .collect();
        let got: Vec<_> = palette.iter().collect();
        assert_eq!(got, [(HueLabel::H50, "#ffebee"), (HueLabel::A700, "#d50000")]);
    }

    #[test]
    fn json_object_in_palette_order() {
        let palette: ColorPalette = HueLabel::ALL
            .into_iter()
            .rev()
            .map(|label| (label, format!("#{}", label.as_str().to_lowercase())))
            .collect();
        assert!(palette.is_complete());

        let json = serde_json::to_string(&palette).unwrap();
        assert!(json.starts_with(r##"{"50":"#50","100":"#100","##), "{json}");
        assert!(json.ends_with(r##""A400":"#a400","A700":"#a700"}"##), "{json}");

        let back: ColorPalette = serde_json::from_str(&json).unwrap();
        assert_eq!(back, palette);
    }

    #[test]
    fn json_rejects_unknown_label() {
        let err = serde_json::from_str::<ColorPalette>(r##"{"50":"#fff","B100":"#000"}"##);
        assert!(err.is_err());
    }
}
