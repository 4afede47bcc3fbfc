// SPDX-License-Identifier: MIT
//
// Subcommand implementations. Each one returns its rendered output so
// `main` decides where it goes and tests can inspect it.

use std::fmt::Write as _;

use anyhow::{Context, Result};
use mp_color::RgbColor;
use mp_palette::contrast::{ContrastOptions, contrast_palette, select_text_color};
use mp_palette::golden::{golden_palette, golden_palettes};
use mp_palette::palette::palette_from_tones;
use mp_palette::{ColorPalette, GoldenPalette, HueLabel, PaletteGenerator};
use serde_json::{Value, json};
use tracing::info;

use crate::cli::{ContrastArgs, GenerateArgs, GoldenArgs, OutputFormatArg};

fn parse_color(input: &str) -> Result<RgbColor> {
    input.parse().with_context(|| format!("cannot read {input:?} as a color"))
}

// ─── generate ───────────────────────────────────────────────────────────────

pub fn run_generate(args: &GenerateArgs) -> Result<String> {
    let seed = parse_color(&args.color)?;
    let generator = PaletteGenerator::default();
    let golden = generator.closest_golden(seed)?;
    info!(
        seed = %seed,
        palette = golden.palette.name(),
        hue = %golden.hue(),
        "generating palette"
    );

    let tones = generator.synthesize(seed, &golden);
    let palette = palette_from_tones(&tones);
    let contrast = if args.contrast {
        let options = ContrastOptions { emphasis: args.emphasis.into(), ..ContrastOptions::default() };
        Some(contrast_palette(&palette, &options)?)
    } else {
        None
    };

    match args.format {
        OutputFormatArg::Json => {
            let mut out = json!({
                "seed": seed.to_hex(),
                "golden": {
                    "palette": golden.palette.name(),
                    "hue": golden.hue(),
                    "delta_e": golden.delta_e,
                },
                "palette": palette,
            });
            if let Some(contrast) = &contrast {
                out["contrast"] = serde_json::to_value(contrast)?;
            }
            Ok(format!("{}\n", serde_json::to_string_pretty(&out)?))
        }
        OutputFormatArg::Table => {
            let mut out = String::new();
            writeln!(
                out,
                "{} {} (delta E {:.3})",
                golden.palette.name(),
                golden.hue(),
                golden.delta_e
            )?;
            let mut in_accents = false;
            for tone in &tones {
                if tone.label.is_accent() && !in_accents {
                    in_accents = true;
                    out.push('\n');
                }
                let hex = tone.rgb.to_hex();
                let marker = if tone.is_seed { "*" } else { " " };
                write!(out, "{marker} {:<5} {hex:<9}", tone.label.as_str())?;
                if let Some(text) = contrast.as_ref().and_then(|c| c.get(tone.label)) {
                    write!(out, " {text}")?;
                }
                out.push('\n');
            }
            Ok(out)
        }
    }
}

// ─── contrast ───────────────────────────────────────────────────────────────

pub fn run_contrast(args: &ContrastArgs) -> Result<String> {
    let background = parse_color(&args.color)?;
    let options = ContrastOptions { emphasis: args.emphasis.into(), ..ContrastOptions::default() };
    let text = select_text_color(background, &options);
    let white = background.contrast_ratio(RgbColor::WHITE);
    let black = background.contrast_ratio(RgbColor::BLACK);

    Ok(match args.format {
        OutputFormatArg::Json => {
            let out = json!({
                "background": background.to_hex(),
                "text": text.to_rgba_string(),
                "white_ratio": white,
                "black_ratio": black,
            });
            format!("{}\n", serde_json::to_string_pretty(&out)?)
        }
        OutputFormatArg::Table => format!(
            "background  {}\ntext        {}\nwhite       {white:.2}:1\nblack       {black:.2}:1\n",
            background.to_hex(),
            text.to_rgba_string(),
        ),
    })
}

// ─── golden ─────────────────────────────────────────────────────────────────

pub fn run_golden(args: &GoldenArgs) -> Result<String> {
    let palettes: Vec<&GoldenPalette> = match &args.name {
        Some(name) => vec![golden_palette(name)?],
        None => golden_palettes().iter().collect(),
    };

    match args.format {
        OutputFormatArg::Json => {
            let out: serde_json::Map<String, Value> = palettes
                .iter()
                .map(|p| Ok((p.name().to_string(), serde_json::to_value(hex_palette(p))?)))
                .collect::<Result<_>>()?;
            Ok(format!("{}\n", serde_json::to_string_pretty(&out)?))
        }
        OutputFormatArg::Table => {
            let mut out = String::new();
            if let [palette] = palettes.as_slice() {
                let colors = hex_palette(palette);
                let (accents, tonal): (Vec<_>, Vec<_>) = colors.iter().partition(|(l, _)| l.is_accent());
                for (label, color) in tonal {
                    writeln!(out, "{:<5} {color}", label.as_str())?;
                }
                out.push('\n');
                for (label, color) in accents {
                    writeln!(out, "{:<5} {color}", label.as_str())?;
                }
            } else {
                for palette in &palettes {
                    let row: Vec<_> = hex_palette(palette).iter().map(|(_, c)| c.to_string()).collect();
                    writeln!(out, "{:<12} {}", palette.name(), row.join(" "))?;
                }
            }
            Ok(out)
        }
    }
}

fn hex_palette(palette: &GoldenPalette) -> ColorPalette {
    palette.iter().map(|(label, lab): (HueLabel, _)| (label, lab.to_rgb().to_hex())).collect()
}
