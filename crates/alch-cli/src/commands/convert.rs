//! OKLab / OKLCh to RGB commands.
//!
//! With `--nits`, `lch` treats L as a brightness slider and runs it
//! through the adaptive curve for that display before converting.

use crate::{LabArgs, LchArgs, Session};
use alch_core::{AdaptiveLch, GamutRgb, Lab, Lch};
use alch_color::oklch::{lab_to_lch, lch_to_lab};
use anyhow::Result;
use serde_json::json;
use tracing::debug;

pub fn run_lch(args: LchArgs, session: &Session) -> Result<()> {
    let conv = session.config.converter();
    let (lch, out) = match args.nits {
        Some(nits) => {
            anyhow::ensure!(
                nits.is_finite() && nits > 0.0,
                "--nits must be a positive number of cd/m2, got {nits}"
            );
            let swatch = AdaptiveLch::new(nits, args.l, args.c, args.h);
            let lch = alch_color::swatch::swatch_lch(&swatch);
            debug!(nits, slider = args.l, l = lch.l, "adaptive lightness");
            (lch, conv.display(&swatch))
        }
        None => {
            let lch = Lch::new(args.l, args.c, args.h);
            (lch, conv.oklch_to_rgb(lch))
        }
    };
    report(session, conv.to_hex(out.rgb), lch_to_lab(lch), lch, out)
}

pub fn run_lab(args: LabArgs, session: &Session) -> Result<()> {
    let conv = session.config.converter();
    let lab = Lab::new(args.l, args.a, args.b);
    let out = conv.oklab_to_rgb(lab);
    report(session, conv.to_hex(out.rgb), lab, lab_to_lch(lab), out)
}

fn report(session: &Session, hex: String, lab: Lab, lch: Lch, out: GamutRgb) -> Result<()> {
    let policy = session.config.policy();
    if session.json {
        return super::print_json(&json!({
            "hex": hex,
            "rgb": out,
            "oklab": lab,
            "oklch": lch,
            "policy": policy,
        }));
    }

    println!("{hex}");
    println!("  sRGB:   {} ({}, {policy})", out.rgb, super::gamut_label(&out));
    println!("  OKLab:  {lab}");
    println!("  OKLCh:  {lch}");
    Ok(())
}
