//! Coordinate types for the supported color spaces.
//!
//! # Types
//!
//! - [`Rgb`] - display-encoded sRGB, nominally `[0, 1]` per channel
//! - [`Lab`] - OKLab, rectangular
//! - [`Lch`] - OKLCh, polar (hue in degrees)
//! - [`GamutRgb`] - [`Rgb`] plus the `in_gamut` classification
//!
//! Values are plain tuples: converting one into another never keeps a link
//! back to the source.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Display-encoded RGB triple.
///
/// Components carry the sRGB transfer curve (they are not linear light).
/// Under the wide-gamut policy a component may sit outside `[0, 1]` until
/// it is clamped for display.
///
/// # Example
///
/// ```
/// use alch_core::Rgb;
///
/// let c = Rgb::new(1.2, 0.5, -0.1).clamp01();
/// assert_eq!(c, Rgb::new(1.0, 0.5, 0.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rgb {
    /// Red
    pub r: f64,
    /// Green
    pub g: f64,
    /// Blue
    pub b: f64,
}

impl Rgb {
    /// Black.
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);

    /// White.
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Creates a new triple.
    #[inline]
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Creates a triple from 8-bit channel values.
    #[inline]
    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Self::new(f64::from(r) / 255.0, f64::from(g) / 255.0, f64::from(b) / 255.0)
    }

    /// Returns the channels as an array `[r, g, b]`.
    #[inline]
    pub const fn to_array(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Creates a triple from an array `[r, g, b]`.
    #[inline]
    pub const fn from_array(c: [f64; 3]) -> Self {
        Self::new(c[0], c[1], c[2])
    }

    /// Applies `f` to every channel.
    #[inline]
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(f(self.r), f(self.g), f(self.b))
    }

    /// Clamps every channel to `[0, 1]`.
    #[inline]
    pub fn clamp01(self) -> Self {
        self.map(|c| c.clamp(0.0, 1.0))
    }

    /// True when every channel lies in `[lo, hi]` (inclusive).
    #[inline]
    pub fn within(self, lo: f64, hi: f64) -> bool {
        self.to_array().iter().all(|c| (lo..=hi).contains(c))
    }

    /// Largest absolute per-channel difference to `other`.
    #[inline]
    pub fn max_diff(self, other: Self) -> f64 {
        (self.r - other.r)
            .abs()
            .max((self.g - other.g).abs())
            .max((self.b - other.b).abs())
    }
}

impl From<[f64; 3]> for Rgb {
    fn from(c: [f64; 3]) -> Self {
        Self::from_array(c)
    }
}

impl From<Rgb> for [f64; 3] {
    fn from(c: Rgb) -> Self {
        c.to_array()
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({:.4}, {:.4}, {:.4})", self.r, self.g, self.b)
    }
}

/// OKLab coordinates.
///
/// `l` runs from 0 (black) to about 1 (reference white). `a` is the
/// green-red axis, `b` the blue-yellow axis; both are signed and unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lab {
    /// Perceptual lightness
    #[serde(rename = "L")]
    pub l: f64,
    /// Green (-) to red (+)
    pub a: f64,
    /// Blue (-) to yellow (+)
    pub b: f64,
}

impl Lab {
    /// Creates OKLab coordinates.
    #[inline]
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl fmt::Display for Lab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklab({:.4} {:.4} {:.4})", self.l, self.a, self.b)
    }
}

/// OKLCh coordinates.
///
/// `c` is chroma (non-negative), `h` the hue angle in degrees within `[0, 360)`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Lch {
    /// Perceptual lightness
    #[serde(rename = "L")]
    pub l: f64,
    /// Chroma
    #[serde(rename = "C")]
    pub c: f64,
    /// Hue in degrees
    pub h: f64,
}

impl Lch {
    /// Creates OKLCh coordinates.
    #[inline]
    pub const fn new(l: f64, c: f64, h: f64) -> Self {
        Self { l, c, h }
    }
}

impl fmt::Display for Lch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "oklch({:.4} {:.4} {:.2})", self.l, self.c, self.h)
    }
}

/// RGB produced by a conversion, tagged with gamut membership.
///
/// `in_gamut` classifies the *unclamped* result against the active gamut
/// policy; `rgb` is whatever the policy hands out for display.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GamutRgb {
    /// Channel values as returned for display
    #[serde(flatten)]
    pub rgb: Rgb,
    /// Whether the unclamped values fit the gamut policy's window
    #[serde(rename = "inGamut")]
    pub in_gamut: bool,
}

impl GamutRgb {
    /// Wraps a triple with its gamut flag.
    #[inline]
    pub const fn new(rgb: Rgb, in_gamut: bool) -> Self {
        Self { rgb, in_gamut }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp01() {
        let c = Rgb::new(1.5, -0.2, 0.5).clamp01();
        assert_eq!(c.r, 1.0);
        assert_eq!(c.g, 0.0);
        assert_eq!(c.b, 0.5);
    }

    #[test]
    fn test_within() {
        assert!(Rgb::new(0.0, 0.5, 1.0).within(0.0, 1.0));
        assert!(!Rgb::new(0.0, 0.5, 1.0001).within(0.0, 1.0));
        assert!(Rgb::new(-0.1, 1.4, 0.2).within(-0.1, 1.4));
    }

    #[test]
    fn test_from_u8() {
        let c = Rgb::from_u8(0x33, 0x66, 0x99);
        assert_eq!(c, Rgb::new(0.2, 0.4, 0.6));
    }

    #[test]
    fn test_max_diff() {
        let a = Rgb::new(0.1, 0.2, 0.3);
        let b = Rgb::new(0.1, 0.25, 0.29);
        assert!((a.max_diff(b) - 0.05).abs() < 1e-12);
    }

    #[test]
    fn test_gamut_rgb_serializes_flat() {
        let g = GamutRgb::new(Rgb::new(1.0, 0.0, 0.0), false);
        let json = serde_json::to_string(&g).unwrap();
        assert_eq!(json, r#"{"r":1.0,"g":0.0,"b":0.0,"inGamut":false}"#);
    }

    #[test]
    fn test_lch_field_names() {
        let json = serde_json::to_string(&Lch::new(0.5, 0.1, 30.0)).unwrap();
        assert_eq!(json, r#"{"L":0.5,"C":0.1,"h":30.0}"#);
    }
}
