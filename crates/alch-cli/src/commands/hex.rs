//! Hex decode command.
//!
//! Prints the RGB, OKLab and OKLCh coordinates of a `#rgb` / `#rrggbb`
//! color. Malformed input is an error and exits non-zero.

use crate::{HexArgs, Session};
use anyhow::{Context, Result};
use serde_json::json;

pub fn run(args: HexArgs, session: &Session) -> Result<()> {
    let conv = session.config.converter();
    let rgb = conv
        .from_hex(&args.hex)
        .with_context(|| format!("Invalid hex color '{}'", args.hex))?;
    let lab = conv.rgb_to_oklab(rgb);
    let lch = conv.rgb_to_oklch(rgb);
    let canonical = conv.to_hex(rgb);

    if session.json {
        return super::print_json(&json!({
            "hex": canonical,
            "rgb": rgb,
            "oklab": lab,
            "oklch": lch,
        }));
    }

    println!("{canonical}");
    println!("  sRGB:   {rgb}");
    println!("  OKLab:  {lab}");
    println!("  OKLCh:  {lch}");
    Ok(())
}
