//! sRGB transfer function.
//!
//! The sRGB standard uses a piecewise function combining a linear segment
//! near black with a 2.4 power curve for the rest.
//!
//! Both directions are defined on all reals and never clamp; negative inputs
//! fall on the linear segment. Callers clamp for display.
//!
//! # Reference
//!
//! IEC 61966-2-1:1999

use alch_core::Rgb;

/// sRGB EOTF: decodes display-encoded values to linear light.
///
/// # Formula
///
/// ```text
/// if V <= 0.04045:
///     L = V / 12.92
/// else:
///     L = ((V + 0.055) / 1.055)^2.4
/// ```
///
/// # Example
///
/// ```rust
/// use alch_transfer::srgb::eotf;
///
/// let linear = eotf(0.5);
/// assert!((linear - 0.214).abs() < 0.01);
/// ```
#[inline]
pub fn eotf(v: f64) -> f64 {
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

/// sRGB OETF: encodes linear light for display.
///
/// # Formula
///
/// ```text
/// if L <= 0.0031308:
///     V = L * 12.92
/// else:
///     V = 1.055 * L^(1/2.4) - 0.055
/// ```
#[inline]
pub fn oetf(l: f64) -> f64 {
    if l <= 0.0031308 {
        l * 12.92
    } else {
        1.055 * l.powf(1.0 / 2.4) - 0.055
    }
}

/// Applies the sRGB EOTF to every channel.
#[inline]
pub fn eotf_rgb(rgb: Rgb) -> Rgb {
    rgb.map(eotf)
}

/// Applies the sRGB OETF to every channel.
#[inline]
pub fn oetf_rgb(rgb: Rgb) -> Rgb {
    rgb.map(oetf)
}
