//! Nits-aware display of swatches.
//!
//! A swatch's `lightness` is a brightness slider position. Turning it into
//! a displayable color composes two stages:
//!
//! ```text
//! (nits, lightness) --adaptive_luminosity--> OKLCh L
//! (L, chroma, hue)  --oklch_to_rgb---------> RGB + gamut flag
//! ```
//!
//! [`swatch_from_rgb`] runs the same path backwards for a given target
//! brightness, so picking a color and re-displaying it is stable.

use alch_core::{AdaptiveLch, GamutRgb, Lch, Rgb};
use alch_transfer::adaptive::AdaptiveCurve;

use crate::gamut::GamutPolicy;
use crate::hex::rgb_to_hex;
use crate::oklch::{oklch_to_rgb, rgb_to_oklch};

/// OKLCh coordinates a swatch resolves to on its target display.
pub fn swatch_lch(swatch: &AdaptiveLch) -> Lch {
    let curve = AdaptiveCurve::new(swatch.nits);
    Lch::new(curve.forward(swatch.lightness), swatch.chroma, swatch.hue)
}

/// Displayable RGB for a swatch.
pub fn swatch_to_rgb(swatch: &AdaptiveLch, policy: GamutPolicy) -> GamutRgb {
    oklch_to_rgb(swatch_lch(swatch), policy)
}

/// `#rrggbb` for a swatch; out-of-range channels are clamped.
pub fn swatch_to_hex(swatch: &AdaptiveLch, policy: GamutPolicy) -> String {
    rgb_to_hex(swatch_to_rgb(swatch, policy).rgb)
}

/// Picks `rgb` as a swatch targeting `nits`.
///
/// # Example
///
/// ```rust
/// use alch_core::Rgb;
/// use alch_color::{GamutPolicy, swatch::{swatch_from_rgb, swatch_to_rgb}};
///
/// let picked = Rgb::new(0.2, 0.6, 0.4);
/// let swatch = swatch_from_rgb(picked, 400.0);
/// let shown = swatch_to_rgb(&swatch, GamutPolicy::Srgb);
/// assert!(shown.rgb.max_diff(picked) < 1e-6);
/// ```
pub fn swatch_from_rgb(rgb: Rgb, nits: f64) -> AdaptiveLch {
    let lch = rgb_to_oklch(rgb);
    let curve = AdaptiveCurve::new(nits);
    AdaptiveLch::new(nits, curve.inverse(lch.l), lch.c, lch.h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alch_core::Palette;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_lightness_goes_through_curve() {
        let s = AdaptiveLch::new(100.0, 0.4, 0.1, 200.0);
        let lch = swatch_lch(&s);
        assert_abs_diff_eq!(lch.l, 0.4_f64.powf(0.125 / 0.22), epsilon = 1e-12);
        assert_eq!(lch.c, 0.1);
        assert_eq!(lch.h, 200.0);
    }

    #[test]
    fn test_full_lightness_is_white() {
        let s = AdaptiveLch::new(1000.0, 1.0, 0.0, 0.0);
        assert_eq!(swatch_to_hex(&s, GamutPolicy::Srgb), "#ffffff");
    }

    #[test]
    fn test_brighter_display_brighter_color() {
        let dim = AdaptiveLch::new(50.0, 0.5, 0.05, 120.0);
        let bright = AdaptiveLch { nits: 1000.0, ..dim };
        let a = swatch_to_rgb(&dim, GamutPolicy::Srgb).rgb;
        let b = swatch_to_rgb(&bright, GamutPolicy::Srgb).rgb;
        assert!(b.g > a.g);
    }

    #[test]
    fn test_sample_palette_displays() {
        for color in Palette::sample().colors() {
            let hex = swatch_to_hex(&color.lch(), GamutPolicy::Srgb);
            assert_eq!(hex.len(), 7, "{}: {hex}", color.name);
        }
    }

    #[test]
    fn test_pick_roundtrip_gray() {
        let s = swatch_from_rgb(Rgb::new(0.5, 0.5, 0.5), 100.0);
        assert_eq!(s.hue, 0.0);
        assert!(s.chroma < 1e-6);
        let back = swatch_to_rgb(&s, GamutPolicy::Srgb).rgb;
        assert!(back.max_diff(Rgb::new(0.5, 0.5, 0.5)) < 1e-6);
    }
}
