// SPDX-License-Identifier: MIT
//
// material-palette — Material Design tonal palettes from one seed color.
//
// This is the binary that wires the library crates to a command line:
//
//   mp-color   → color spaces, hex/rgba parsing, WCAG contrast
//   mp-palette → golden palettes, CIEDE2000 matching, tone synthesis
//
// Each subcommand renders to a String; main prints it on stdout and sends
// errors and logs to stderr:
//
//   argv → clap → run_* → table / JSON → stdout
//                  └──── tracing ─────→ stderr

use std::io::{self, IsTerminal};
use std::process;

use clap::Parser;

mod cli;
mod commands;
mod logging;

use crate::cli::{Cli, Command, LogFormatArg};
use crate::commands::{run_contrast, run_generate, run_golden};
use crate::logging::{LogConfig, LogFormat, init_logging};

fn main() {
    let cli = Cli::parse();
    if let Err(error) = init_logging(&log_config_from_cli(&cli)) {
        eprintln!("error: failed to initialize logging: {error}");
        process::exit(1);
    }

    let result = match &cli.command {
        Command::Generate(args) => run_generate(args),
        Command::Contrast(args) => run_contrast(args),
        Command::Golden(args) => run_golden(args),
    };

    match result {
        Ok(output) => print!("{output}"),
        Err(error) => {
            eprintln!("error: {error:#}");
            process::exit(1);
        }
    }
}

/// `-v`/`-q` win over `RUST_LOG`; without them the environment decides.
fn log_config_from_cli(cli: &Cli) -> LogConfig {
    LogConfig {
        level_filter: cli.verbosity.tracing_level_filter(),
        use_env_filter: !cli.verbosity.is_present(),
        with_ansi: io::stderr().is_terminal(),
        format: match cli.log_format {
            LogFormatArg::Pretty => LogFormat::Pretty,
            LogFormatArg::Compact => LogFormat::Compact,
            LogFormatArg::Json => LogFormat::Json,
        },
        ..LogConfig::default()
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
