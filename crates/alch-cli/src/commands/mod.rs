//! CLI command implementations

pub mod convert;
pub mod curve;
pub mod hex;
pub mod palette;

use alch_core::GamutRgb;
use anyhow::Result;
use serde_json::Value;

/// Prints a JSON document to stdout.
pub fn print_json(value: &Value) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Human-readable gamut flag.
pub fn gamut_label(out: &GamutRgb) -> &'static str {
    if out.in_gamut { "in gamut" } else { "out of gamut" }
}
