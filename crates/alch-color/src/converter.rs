//! Conversion front end bound to one gamut policy.
//!
//! The display's wide-gamut capability is known once per session. Binding
//! it into a [`Converter`] at startup turns it into an explicit dependency
//! instead of a global that every call re-reads.
//!
//! # Example
//!
//! ```rust
//! use alch_core::{Lch, Rgb};
//! use alch_color::Converter;
//!
//! let conv = Converter::from_wide_gamut(false);
//! let out = conv.oklch_to_rgb(Lch::new(0.7, 0.1, 140.0));
//! assert!(out.in_gamut);
//! assert_eq!(conv.to_hex(Rgb::new(1.0, 0.0, 0.0)), "#ff0000");
//! ```

use alch_core::{AdaptiveLch, GamutRgb, Lab, Lch, Rgb};
use tracing::trace;

use crate::error::HexError;
use crate::gamut::GamutPolicy;
use crate::{hex, oklab, oklch, swatch};

/// Color conversions under a fixed [`GamutPolicy`].
///
/// `Copy` and stateless beyond the policy, so it can be shared freely
/// across threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Converter {
    policy: GamutPolicy,
}

impl Converter {
    /// Binds `policy`.
    #[inline]
    pub const fn new(policy: GamutPolicy) -> Self {
        Self { policy }
    }

    /// Binds the policy matching the host's capability flag.
    #[inline]
    pub const fn from_wide_gamut(supported: bool) -> Self {
        Self::new(GamutPolicy::from_wide_gamut(supported))
    }

    /// Active policy.
    #[inline]
    pub const fn policy(&self) -> GamutPolicy {
        self.policy
    }

    /// See [`oklab::oklab_to_rgb`].
    pub fn oklab_to_rgb(&self, lab: Lab) -> GamutRgb {
        let out = oklab::oklab_to_rgb(lab, self.policy);
        if !out.in_gamut {
            trace!(policy = %self.policy, %lab, "out of gamut");
        }
        out
    }

    /// See [`oklch::oklch_to_rgb`].
    pub fn oklch_to_rgb(&self, lch: Lch) -> GamutRgb {
        self.oklab_to_rgb(oklch::lch_to_lab(lch))
    }

    /// See [`oklab::rgb_to_oklab`].
    #[inline]
    pub fn rgb_to_oklab(&self, rgb: Rgb) -> Lab {
        oklab::rgb_to_oklab(rgb)
    }

    /// See [`oklch::rgb_to_oklch`].
    #[inline]
    pub fn rgb_to_oklch(&self, rgb: Rgb) -> Lch {
        oklch::rgb_to_oklch(rgb)
    }

    /// Displayable RGB for a swatch, see [`swatch::swatch_to_rgb`].
    pub fn display(&self, swatch: &AdaptiveLch) -> GamutRgb {
        self.oklch_to_rgb(swatch::swatch_lch(swatch))
    }

    /// `#rrggbb` for a swatch.
    pub fn display_hex(&self, swatch: &AdaptiveLch) -> String {
        hex::rgb_to_hex(self.display(swatch).rgb)
    }

    /// See [`hex::rgb_to_hex`].
    #[inline]
    pub fn to_hex(&self, rgb: Rgb) -> String {
        hex::rgb_to_hex(rgb)
    }

    /// See [`hex::hex_to_rgb`].
    #[inline]
    pub fn from_hex(&self, hex: &str) -> Result<Rgb, HexError> {
        hex::hex_to_rgb(hex)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_policy_binding() {
        assert_eq!(Converter::from_wide_gamut(true).policy(), GamutPolicy::Wide);
        assert_eq!(Converter::default().policy(), GamutPolicy::Srgb);
    }

    #[test]
    fn test_policies_disagree_on_p3_green() {
        // Saturated green beyond sRGB but inside the relaxed window
        let lab = Lab::new(0.92, -0.2, 0.14);
        let narrow = Converter::new(GamutPolicy::Srgb).oklab_to_rgb(lab);
        let wide = Converter::new(GamutPolicy::Wide).oklab_to_rgb(lab);
        assert!(!narrow.in_gamut);
        assert!(wide.in_gamut);
        assert!(narrow.rgb.within(0.0, 1.0));
        assert!(!wide.rgb.within(0.0, 1.0));
    }

    #[test]
    fn test_display_matches_free_function() {
        let conv = Converter::default();
        let s = AdaptiveLch::new(300.0, 0.6, 0.12, 250.0);
        assert_eq!(conv.display(&s), swatch::swatch_to_rgb(&s, GamutPolicy::Srgb));
        assert_eq!(conv.display_hex(&s), swatch::swatch_to_hex(&s, GamutPolicy::Srgb));
    }

    #[test]
    fn test_hex_passthrough() {
        let conv = Converter::default();
        assert_eq!(conv.from_hex("#f00"), Ok(Rgb::new(1.0, 0.0, 0.0)));
        assert!(conv.from_hex("#GG0000").is_err());
    }
}
