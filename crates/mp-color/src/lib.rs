// SPDX-License-Identifier: MIT
//
// mp-color — color spaces for material-palette.
//
// Small immutable value types for sRGB, CIE XYZ, CIE LAB, CIE LCH and HSV,
// connected by pairwise conversion functions:
//
//   HSV ↔ sRGB ↔ XYZ ↔ LAB ↔ LCH
//
// Each type validates its components when built from caller input and
// reports a `ColorError` naming the field, value and bound. Conversions
// between valid colors never fail: the way back into sRGB clips
// out-of-gamut channels to [0, 1].
//
// The matrices and the f(t) thresholds are the values the Material golden
// palettes were calibrated with. The arithmetic deliberately keeps the
// plain multiply-then-add order of the calibration so a Material color
// converts to exactly its table entry.

// Single-char math variables are standard in color science.
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::suboptimal_flops)]

pub mod error;
pub mod hsv;
pub mod lab;
pub mod lch;
pub mod rgb;
pub mod xyz;

pub use error::{ColorError, Result};
pub use hsv::HsvColor;
pub use lab::LabColor;
pub use lch::LchColor;
pub use rgb::RgbColor;
pub use xyz::XyzColor;
