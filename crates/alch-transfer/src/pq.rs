//! SMPTE ST 2084 Perceptual Quantizer (PQ) transfer function.
//!
//! PQ encodes absolute luminance up to 10,000 cd/m2 so that equal code
//! steps are roughly equally visible.
//!
//! Besides the absolute curve ([`oetf`], [`eotf`]) this module provides
//! [`perceptual_quantizer`], which maps a normalized brightness `t` onto a
//! display whose white sits at `max_luminance` and renormalizes so that
//! `t = 1` always yields exactly `1.0`.
//!
//! # Range
//!
//! - Encoded: [0, 1]
//! - Linear: [0, 10000] cd/m2 (nits)
//!
//! # Reference
//!
//! SMPTE ST 2084:2014
//!
//! # Usage
//!
//! ```rust
//! use alch_transfer::pq;
//!
//! // 100 nits sits near the middle of the code range
//! let signal = pq::oetf(100.0);
//! assert!((signal - 0.508).abs() < 0.01);
//!
//! // Normalized to a 1000 nit display
//! let curve = pq::PqCurve::new(1000.0);
//! assert_eq!(curve.apply(1.0), 1.0);
//! ```

/// Maximum luminance in cd/m2 (nits).
pub const L_MAX: f64 = 10000.0;

/// Luminance assigned to `t = 0` by [`perceptual_quantizer`].
///
/// True black would put the curve's steepest region at the origin.
pub const FLOOR_NITS: f64 = 0.01;

// PQ constants from SMPTE ST 2084
const M1: f64 = 2610.0 / 16384.0; // 0.1593017578125
const M2: f64 = 2523.0 / 4096.0 * 128.0; // 78.84375
const C1: f64 = 3424.0 / 4096.0; // 0.8359375
const C2: f64 = 2413.0 / 4096.0 * 32.0; // 18.8515625
const C3: f64 = 2392.0 / 4096.0 * 32.0; // 18.6875

/// Forward curve without range checks.
#[inline]
fn encode(l: f64) -> f64 {
    let lp = (l / L_MAX).powf(M1);
    ((C1 + C2 * lp) / (1.0 + C3 * lp)).powf(M2)
}

/// Inverse curve without range checks.
#[inline]
fn decode(v: f64) -> f64 {
    let vp = v.powf(1.0 / M2);
    let num = (vp - C1).max(0.0);
    let den = C2 - C3 * vp;
    L_MAX * (num / den).powf(1.0 / M1)
}

/// PQ OETF: encodes absolute luminance (cd/m2) to a PQ signal.
///
/// Input is clamped to `[0, 10000]`.
///
/// # Example
///
/// ```rust
/// use alch_transfer::pq::oetf;
///
/// assert!((oetf(10000.0) - 1.0).abs() < 1e-12);
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0 {
        return 0.0;
    }
    encode(l.min(L_MAX))
}

/// PQ EOTF: decodes a PQ signal to absolute luminance (cd/m2).
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.0 {
        return 0.0;
    }
    decode(v.min(1.0))
}

/// PQ normalized to a display white of `max_luminance` cd/m2.
///
/// Holds the white-point encoding so repeated evaluations at the same
/// `max_luminance` cost one power curve instead of two. Results are
/// bit-identical to [`perceptual_quantizer`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PqCurve {
    max_luminance: f64,
    white: f64,
}

impl PqCurve {
    /// Precomputes the white-point encoding for `max_luminance`.
    ///
    /// `max_luminance` must be positive; it is not validated.
    #[inline]
    pub fn new(max_luminance: f64) -> Self {
        Self {
            max_luminance,
            white: encode(max_luminance),
        }
    }

    /// Display white in cd/m2.
    #[inline]
    pub fn max_luminance(&self) -> f64 {
        self.max_luminance
    }

    /// Absolute luminance that `t` stands for: `0.01` at `t = 0`,
    /// `max_luminance` at `t = 1`.
    #[inline]
    pub fn luminance(&self, t: f64) -> f64 {
        // Written as a two-sided blend so that t = 1 lands on max_luminance exactly.
        (1.0 - t) * FLOOR_NITS + t * self.max_luminance
    }

    /// Normalized PQ value for brightness `t` in `[0, 1]`.
    #[inline]
    pub fn apply(&self, t: f64) -> f64 {
        encode(self.luminance(t)) / self.white
    }

    /// Recovers `t` from a value produced by [`PqCurve::apply`].
    #[inline]
    pub fn invert(&self, v: f64) -> f64 {
        let nits = decode(v * self.white);
        (nits - FLOOR_NITS) / (self.max_luminance - FLOOR_NITS)
    }
}

/// Normalized PQ: brightness `t` on a display whose white is `max_luminance`.
///
/// 1. `L = 0.01 + t * (max_luminance - 0.01)`
/// 2. `result = PQ(L) / PQ(max_luminance)`
///
/// Monotonically increasing in `t`; `t = 1` maps to exactly `1.0` for any
/// positive `max_luminance`. Use `100.0` for SDR.
///
/// # Example
///
/// ```rust
/// use alch_transfer::pq::perceptual_quantizer;
///
/// let mid = perceptual_quantizer(0.5, 100.0);
/// assert!(mid > 0.5 && mid < 1.0);
/// ```
#[inline]
pub fn perceptual_quantizer(t: f64, max_luminance: f64) -> f64 {
    PqCurve::new(max_luminance).apply(t)
}
