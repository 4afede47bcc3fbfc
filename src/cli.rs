// SPDX-License-Identifier: MIT
//
// Command-line argument definitions.

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use mp_palette::Emphasis;

#[derive(Parser)]
#[command(
    name = "material-palette",
    version,
    about = "Generate Material Design tonal palettes from a single color",
    long_about = "Generate a 14-tone Material Design palette (50-900, A100-A700) from any \
                  seed color.\n\n\
                  The seed is matched to the closest Material reference palette by \
                  CIEDE2000 distance and its offset is carried across every tone."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q to silence).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Log output format on stderr.
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate the palette for a seed color.
    Generate(GenerateArgs),

    /// Pick the text color for a single background.
    Contrast(ContrastArgs),

    /// List the built-in golden palettes.
    Golden(GoldenArgs),
}

#[derive(Parser)]
pub struct GenerateArgs {
    /// Seed color: `#rrggbb`, `rrggbbaa`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Also print the text color for every tone.
    #[arg(long = "contrast")]
    pub contrast: bool,

    /// Text emphasis used with `--contrast`.
    #[arg(long = "emphasis", value_enum, default_value = "high")]
    pub emphasis: EmphasisArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct ContrastArgs {
    /// Background color.
    #[arg(value_name = "COLOR")]
    pub color: String,

    /// Text emphasis level.
    #[arg(long = "emphasis", value_enum, default_value = "high")]
    pub emphasis: EmphasisArg,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Parser)]
pub struct GoldenArgs {
    /// Family name (e.g. `deep-purple`); all families when omitted.
    #[arg(value_name = "NAME")]
    pub name: Option<String>,

    /// Output format.
    #[arg(long = "format", value_enum, default_value = "table")]
    pub format: OutputFormatArg,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    Table,
    Json,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EmphasisArg {
    High,
    Medium,
    Disabled,
}

impl From<EmphasisArg> for Emphasis {
    fn from(arg: EmphasisArg) -> Self {
        match arg {
            EmphasisArg::High => Self::High,
            EmphasisArg::Medium => Self::Medium,
            EmphasisArg::Disabled => Self::Disabled,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn generate_flags() {
        let cli = Cli::try_parse_from([
            "material-palette",
            "generate",
            "#f44336",
            "--contrast",
            "--format",
            "json",
        ])
        .unwrap();
        let Command::Generate(args) = cli.command else {
            panic!("expected generate");
        };
        assert_eq!(args.color, "#f44336");
        assert!(args.contrast);
        assert_eq!(args.format, OutputFormatArg::Json);
        assert_eq!(args.emphasis, EmphasisArg::High);
    }

    #[test]
    fn global_log_format() {
        let cli =
            Cli::try_parse_from(["material-palette", "golden", "--log-format", "json", "-vv"]).unwrap();
        assert_eq!(cli.log_format, LogFormatArg::Json);
        assert!(matches!(cli.command, Command::Golden(GoldenArgs { name: None, .. })));
    }

    #[test]
    fn color_is_required() {
        assert!(Cli::try_parse_from(["material-palette", "contrast"]).is_err());
    }
}
