//! Gamut policies.
//!
//! The host tells us once, at startup, whether the display can show colors
//! beyond sRGB. That answer selects a [`GamutPolicy`]:
//!
//! | Policy | In gamut when every channel is in | Output |
//! |--------|-----------------------------------|--------|
//! | [`GamutPolicy::Srgb`] | `[0, 1]` | clamped to `[0, 1]` |
//! | [`GamutPolicy::Wide`] | `[-0.1, 1.4]` (approximate P3 reach) | unclamped |
//!
//! Classification always looks at the unclamped, gamma-encoded channels.

use alch_core::{GamutRgb, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Lower edge of the wide-gamut tolerance window.
pub const WIDE_MIN: f64 = -0.1;

/// Upper edge of the wide-gamut tolerance window.
pub const WIDE_MAX: f64 = 1.4;

/// How RGB results are classified and clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamutPolicy {
    /// sRGB-only display: strict window, clamped output.
    #[default]
    Srgb,
    /// Wide-gamut display (e.g. P3): relaxed window, unclamped output.
    Wide,
}

impl GamutPolicy {
    /// Selects the policy from the host's wide-gamut capability flag.
    #[inline]
    pub const fn from_wide_gamut(supported: bool) -> Self {
        if supported { Self::Wide } else { Self::Srgb }
    }

    /// True for [`GamutPolicy::Wide`].
    #[inline]
    pub const fn is_wide(self) -> bool {
        matches!(self, Self::Wide)
    }

    /// Inclusive channel window `(lo, hi)` counted as in gamut.
    #[inline]
    pub const fn window(self) -> (f64, f64) {
        match self {
            Self::Srgb => (0.0, 1.0),
            Self::Wide => (WIDE_MIN, WIDE_MAX),
        }
    }

    /// Whether unclamped, gamma-encoded `rgb` fits the window.
    #[inline]
    pub fn contains(self, rgb: Rgb) -> bool {
        let (lo, hi) = self.window();
        rgb.within(lo, hi)
    }

    /// Classifies `unclamped` and produces the displayable triple.
    #[inline]
    pub fn resolve(self, unclamped: Rgb) -> GamutRgb {
        let in_gamut = self.contains(unclamped);
        let rgb = match self {
            Self::Srgb => unclamped.clamp01(),
            Self::Wide => unclamped,
        };
        GamutRgb::new(rgb, in_gamut)
    }
}

impl fmt::Display for GamutPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Srgb => f.write_str("srgb"),
            Self::Wide => f.write_str("wide"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(GamutPolicy::from_wide_gamut(false), GamutPolicy::Srgb);
        assert_eq!(GamutPolicy::from_wide_gamut(true), GamutPolicy::Wide);
        assert_eq!(GamutPolicy::default(), GamutPolicy::Srgb);
    }

    #[test]
    fn test_srgb_window_is_exact() {
        let p = GamutPolicy::Srgb;
        assert!(p.contains(Rgb::new(0.0, 1.0, 0.5)));
        assert!(!p.contains(Rgb::new(-1e-9, 0.5, 0.5)));
        assert!(!p.contains(Rgb::new(0.5, 1.0 + 1e-9, 0.5)));
    }

    #[test]
    fn test_wide_window_edges_inclusive() {
        let p = GamutPolicy::Wide;
        assert!(p.contains(Rgb::new(-0.1, 1.4, 0.0)));
        assert!(!p.contains(Rgb::new(-0.11, 0.5, 0.5)));
        assert!(!p.contains(Rgb::new(0.5, 1.41, 0.5)));
    }

    #[test]
    fn test_srgb_resolve_clamps() {
        let out = GamutPolicy::Srgb.resolve(Rgb::new(1.2, -0.05, 0.5));
        assert!(!out.in_gamut);
        assert_eq!(out.rgb, Rgb::new(1.0, 0.0, 0.5));
    }

    #[test]
    fn test_wide_resolve_passes_through() {
        let raw = Rgb::new(1.2, -0.05, 0.5);
        let out = GamutPolicy::Wide.resolve(raw);
        assert!(out.in_gamut);
        assert_eq!(out.rgb, raw);
    }

    #[test]
    fn test_nan_is_out_of_gamut() {
        assert!(!GamutPolicy::Wide.contains(Rgb::new(f64::NAN, 0.5, 0.5)));
    }
}
