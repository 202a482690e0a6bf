//! Brightness curve command.
//!
//! Evaluates the PQ, simplified PQ and adaptive curves at one normalized
//! brightness for a display white level.

use crate::{CurveArgs, Session};
use alch_transfer::{PqCurve, adaptive_luminosity, inverse_adaptive_luminosity, simplified_pq};
use anyhow::{Result, ensure};
use serde_json::json;

pub fn run(args: CurveArgs, session: &Session) -> Result<()> {
    let max = args.max.unwrap_or(session.config.max_luminance);
    ensure!(
        max.is_finite() && max > 0.0,
        "--max must be a positive number of cd/m2, got {max}"
    );
    ensure!(args.t.is_finite(), "t must be a finite number");

    let pq = PqCurve::new(max);
    let nits = pq.luminance(args.t);
    let pq_value = pq.apply(args.t);
    let simplified = simplified_pq(args.t);
    let adaptive = adaptive_luminosity(args.t, max);
    let inverse = inverse_adaptive_luminosity(args.t, max);

    if session.json {
        return super::print_json(&json!({
            "t": args.t,
            "max_luminance": max,
            "nits": nits,
            "pq": pq_value,
            "simplified_pq": simplified,
            "adaptive": adaptive,
            "inverse_adaptive": inverse,
        }));
    }

    println!("t = {} at {max} cd/m2", args.t);
    println!("  Luminance:         {nits:.4} cd/m2");
    println!("  PQ (normalized):   {pq_value:.6}");
    println!("  Simplified PQ:     {simplified:.6}");
    println!("  Adaptive L:        {adaptive:.6}");
    println!("  Inverse adaptive:  {inverse:.6}");
    Ok(())
}
