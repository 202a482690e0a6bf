//! alch - adaptive OKLCh color conversion CLI
//!
//! Converts between hex, sRGB, OKLab and OKLCh, evaluates the brightness
//! curves, and shows the sample palette on the configured display.

use alch_color::AlchConfig;
use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

#[derive(Parser)]
#[command(name = "alch")]
#[command(author, version, about = "Adaptive OKLCh color conversion")]
#[command(long_about = "
Converts colors between hex, sRGB, OKLab and OKLCh and evaluates the
luminance-adaptive brightness curves.

Examples:
  alch hex '#336699'                 # Decode a hex color
  alch lch 0.7 0.15 140              # OKLCh -> RGB/hex with gamut flag
  alch --wide-gamut lab 0.92 -0.2 0.14
  alch lch 0.5 0.1 30 --nits 400     # Lightness as a brightness slider
  alch curve 0.5 --max 1000          # PQ and adaptive curves at t=0.5
  alch --json palette                # Sample palette as JSON
")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (debug logging)
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Machine-readable output (JSON)
    #[arg(long, global = true)]
    json: bool,

    /// Display supports a wide color gamut (P3 or wider)
    #[arg(long, global = true)]
    wide_gamut: bool,

    /// Display white level in cd/m2
    #[arg(long, global = true)]
    max_luminance: Option<f64>,

    /// YAML config file (wide_gamut, max_luminance)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a hex color (#rgb or #rrggbb)
    #[command(visible_alias = "x")]
    Hex(HexArgs),

    /// Convert OKLCh to RGB and hex
    Lch(LchArgs),

    /// Convert OKLab to RGB and hex
    Lab(LabArgs),

    /// Evaluate the brightness curves
    Curve(CurveArgs),

    /// Show the sample palette
    #[command(visible_alias = "p")]
    Palette,
}

#[derive(Args)]
pub(crate) struct HexArgs {
    /// Hex color, e.g. '#336699' or '#f00'
    hex: String,
}

#[derive(Args)]
pub(crate) struct LchArgs {
    /// Lightness, 0..1 (slider position when --nits is given)
    #[arg(allow_hyphen_values = true)]
    l: f64,

    /// Chroma
    #[arg(allow_hyphen_values = true)]
    c: f64,

    /// Hue in degrees
    #[arg(allow_hyphen_values = true)]
    h: f64,

    /// Target brightness in cd/m2; runs lightness through the adaptive curve
    #[arg(short, long)]
    nits: Option<f64>,
}

#[derive(Args)]
pub(crate) struct LabArgs {
    /// Lightness, 0..1
    #[arg(allow_hyphen_values = true)]
    l: f64,

    /// Green (-) to red (+)
    #[arg(allow_hyphen_values = true)]
    a: f64,

    /// Blue (-) to yellow (+)
    #[arg(allow_hyphen_values = true)]
    b: f64,
}

#[derive(Args)]
pub(crate) struct CurveArgs {
    /// Normalized brightness, 0..1
    t: f64,

    /// Display white in cd/m2 (defaults to the configured max luminance)
    #[arg(short, long)]
    max: Option<f64>,
}

/// Options every command sees.
pub(crate) struct Session {
    pub config: AlchConfig,
    pub json: bool,
}

fn init_logging(verbose: bool) {
    let default = if verbose { "alch=debug" } else { "alch=warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default.into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(cli: &Cli) -> Result<AlchConfig> {
    let mut config = match &cli.config {
        Some(path) => AlchConfig::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()))?,
        None => AlchConfig::default(),
    };

    // Flags override the file
    if cli.wide_gamut {
        config.wide_gamut = true;
    }
    if let Some(max) = cli.max_luminance {
        config.max_luminance = max;
    }
    config.validate().context("Invalid display settings")?;

    tracing::debug!(
        policy = %config.policy(),
        max_luminance = config.max_luminance,
        "session configured"
    );
    Ok(config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let session = Session {
        config: load_config(&cli)?,
        json: cli.json,
    };

    match cli.command {
        Commands::Hex(args) => commands::hex::run(args, &session),
        Commands::Lch(args) => commands::convert::run_lch(args, &session),
        Commands::Lab(args) => commands::convert::run_lab(args, &session),
        Commands::Curve(args) => commands::curve::run(args, &session),
        Commands::Palette => commands::palette::run(&session),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_negative_lab_args() {
        let cli = Cli::try_parse_from(["alch", "lab", "0.9", "-0.2", "0.14"]).unwrap();
        match cli.command {
            Commands::Lab(args) => assert_eq!(args.a, -0.2),
            _ => panic!("expected lab"),
        }
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = Cli::try_parse_from(["alch", "--wide-gamut", "--max-luminance", "400", "palette"])
            .unwrap();
        let config = load_config(&cli).unwrap();
        assert!(config.wide_gamut);
        assert_eq!(config.max_luminance, 400.0);
    }

    #[test]
    fn test_rejects_bad_luminance() {
        let cli = Cli::try_parse_from(["alch", "--max-luminance", "0", "palette"]).unwrap();
        assert!(load_config(&cli).is_err());
    }
}
