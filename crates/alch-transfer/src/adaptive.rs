//! Luminance-adaptive perceptual brightness curves.
//!
//! At the 100 cd/m2 SDR reference, normalized PQ is well approximated by
//! `t^0.22` ([`simplified_pq`]). Re-expressing that exponent as
//! `(1/8) / gamma` gives `t^0.568` at `gamma = 0.22`, which falls between
//! the text and non-text exponents of the APCA contrast model. Letting
//! `gamma` follow the display's max luminance linearly keeps one brightness
//! slider usable both for absolute-brightness and contrast judgments.
//!
//! ```text
//! lum      = clamp(max_luminance, 0.01, 10000)
//! gamma    = 0.205 + 0.015 * (lum - 30) / 70
//! forward  = t ^ (0.125 / gamma)
//! inverse  = L ^ (gamma / 0.125)
//! ```
//!
//! Forward and inverse share [`adaptive_gamma`]; retuning the curve there
//! keeps the pair exact inverses.

/// SDR reference white in cd/m2.
pub const DEFAULT_MAX_LUMINANCE: f64 = 100.0;

/// Lower bound applied to `max_luminance`.
pub const MIN_LUMINANCE: f64 = 0.01;

/// Upper bound applied to `max_luminance` (the PQ ceiling).
pub const MAX_LUMINANCE: f64 = 10000.0;

/// Exponent of [`simplified_pq`].
pub const SIMPLIFIED_PQ_EXPONENT: f64 = 0.22;

// Curve shape: gamma at the 30 nit pivot, and its growth per 70 nits.
const PIVOT_NITS: f64 = 30.0;
const PIVOT_SPAN: f64 = 70.0;
const GAMMA_AT_PIVOT: f64 = 0.205;
const GAMMA_SLOPE: f64 = 0.015;
const CONTRAST_EXPONENT: f64 = 0.125;

/// Fixed power-law approximation of normalized PQ at 100 cd/m2: `t^0.22`.
///
/// Not luminance-adaptive.
#[inline]
pub fn simplified_pq(t: f64) -> f64 {
    t.powf(SIMPLIFIED_PQ_EXPONENT)
}

/// Shape parameter for a display whose white is `max_luminance` cd/m2.
///
/// `max_luminance` is clamped to `[0.01, 10000]` first. Grows linearly
/// with luminance: `0.205` at 30 nits, `0.22` at 100 nits.
#[inline]
pub fn adaptive_gamma(max_luminance: f64) -> f64 {
    let lum = max_luminance.clamp(MIN_LUMINANCE, MAX_LUMINANCE);
    let t_interp = (lum - PIVOT_NITS) / PIVOT_SPAN;
    GAMMA_AT_PIVOT + t_interp * GAMMA_SLOPE
}

/// Slider position `t` in `[0, 1]` to a perceptual lightness target.
///
/// # Example
///
/// ```rust
/// use alch_transfer::adaptive::adaptive_luminosity;
///
/// assert_eq!(adaptive_luminosity(0.0, 100.0), 0.0);
/// assert_eq!(adaptive_luminosity(1.0, 100.0), 1.0);
/// ```
#[inline]
pub fn adaptive_luminosity(t: f64, max_luminance: f64) -> f64 {
    AdaptiveCurve::new(max_luminance).forward(t)
}

/// Inverse of [`adaptive_luminosity`] for the same `max_luminance`.
#[inline]
pub fn inverse_adaptive_luminosity(l: f64, max_luminance: f64) -> f64 {
    AdaptiveCurve::new(max_luminance).inverse(l)
}

/// The adaptive curve bound to one display luminance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdaptiveCurve {
    gamma: f64,
}

impl AdaptiveCurve {
    /// Binds the curve to `max_luminance` cd/m2.
    #[inline]
    pub fn new(max_luminance: f64) -> Self {
        Self {
            gamma: adaptive_gamma(max_luminance),
        }
    }

    /// Shape parameter in use.
    #[inline]
    pub fn gamma(&self) -> f64 {
        self.gamma
    }

    /// `t ^ (0.125 / gamma)`
    #[inline]
    pub fn forward(&self, t: f64) -> f64 {
        t.powf(CONTRAST_EXPONENT / self.gamma)
    }

    /// `l ^ (gamma / 0.125)`
    #[inline]
    pub fn inverse(&self, l: f64) -> f64 {
        l.powf(self.gamma / CONTRAST_EXPONENT)
    }
}

impl Default for AdaptiveCurve {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_LUMINANCE)
    }
}
