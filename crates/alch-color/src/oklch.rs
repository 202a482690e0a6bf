//! OKLCh <-> OKLab <-> sRGB conversion.
//!
//! OKLCh is OKLab in polar form: `a` is the horizontal axis (cosine, green to
//! red), `b` the vertical one (sine, blue to yellow).
//!
//! # Achromatic hue
//!
//! Hue is undefined when chroma vanishes. Any color with chroma below
//! [`ACHROMATIC_CHROMA`] reports hue `0.0`. The threshold sits above the
//! `~4e-8` residual chroma that the published matrices leave on pure grays,
//! so every sRGB gray lands on hue 0.

use alch_core::{GamutRgb, Lab, Lch, Rgb};

use crate::gamut::GamutPolicy;
use crate::oklab::{oklab_to_rgb, rgb_to_oklab};

/// Chroma below which a color counts as achromatic and gets hue `0.0`.
pub const ACHROMATIC_CHROMA: f64 = 1e-6;

/// Hue reported for achromatic colors.
pub const ACHROMATIC_HUE: f64 = 0.0;

/// Wraps an angle in degrees into `[0, 360)`.
#[inline]
pub fn normalize_hue(h: f64) -> f64 {
    let h = h.rem_euclid(360.0);
    // rem_euclid rounds tiny negative angles up to exactly 360
    if h >= 360.0 { 0.0 } else { h }
}

/// Rectangular to polar.
pub fn lab_to_lch(lab: Lab) -> Lch {
    let c = lab.a.hypot(lab.b);
    let h = if c < ACHROMATIC_CHROMA {
        ACHROMATIC_HUE
    } else {
        normalize_hue(lab.b.atan2(lab.a).to_degrees())
    };
    Lch::new(lab.l, c, h)
}

/// Polar to rectangular.
pub fn lch_to_lab(lch: Lch) -> Lab {
    let (sin, cos) = lch.h.to_radians().sin_cos();
    Lab::new(lch.l, lch.c * cos, lch.c * sin)
}

/// Display-encoded sRGB to OKLCh.
///
/// # Example
///
/// ```rust
/// use alch_core::Rgb;
/// use alch_color::oklch::rgb_to_oklch;
///
/// let gray = rgb_to_oklch(Rgb::new(0.5, 0.5, 0.5));
/// assert_eq!(gray.h, 0.0);
/// ```
pub fn rgb_to_oklch(rgb: Rgb) -> Lch {
    lab_to_lch(rgb_to_oklab(rgb))
}

/// OKLCh to display-encoded sRGB under `policy`.
///
/// # Example
///
/// ```rust
/// use alch_core::Lch;
/// use alch_color::{GamutPolicy, oklch::oklch_to_rgb};
///
/// let gray = oklch_to_rgb(Lch::new(0.5, 0.0, 0.0), GamutPolicy::Srgb).rgb;
/// assert!((gray.r - gray.g).abs() < 1e-6 && (gray.g - gray.b).abs() < 1e-6);
/// ```
pub fn oklch_to_rgb(lch: Lch, policy: GamutPolicy) -> GamutRgb {
    oklab_to_rgb(lch_to_lab(lch), policy)
}
