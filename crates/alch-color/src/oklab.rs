//! OKLab <-> sRGB conversion.
//!
//! ```text
//! sRGB --eotf--> linear sRGB --M1--> LMS --cbrt--> LMS' --M2--> OKLab
//! sRGB <--oetf-- linear sRGB <--M1^-1-- LMS <--cube-- LMS' <--M2^-1-- OKLab
//! ```
//!
//! The four matrices are the published OKLab constants (Ottosson, 2020).
//! The forward and inverse pairs are mutual inverses up to the rounding of
//! the published digits, so round trips hold to well below `1e-6`.
//!
//! # Convention
//!
//! Constants are written row by row (as published) and applied as
//! `matrix * column`.

use alch_core::{GamutRgb, Lab, Rgb};
use alch_transfer::srgb;
use glam::{DMat3, DVec3};

use crate::gamut::GamutPolicy;

/// Builds a [`DMat3`] from rows (glam stores columns).
const fn from_rows(m: [[f64; 3]; 3]) -> DMat3 {
    DMat3::from_cols(
        DVec3::new(m[0][0], m[1][0], m[2][0]),
        DVec3::new(m[0][1], m[1][1], m[2][1]),
        DVec3::new(m[0][2], m[1][2], m[2][2]),
    )
}

/// Linear sRGB -> LMS cone response.
pub const LINEAR_SRGB_TO_LMS: DMat3 = from_rows([
    [0.4122214708, 0.5363325363, 0.0514459929],
    [0.2119034982, 0.6806995451, 0.1073969566],
    [0.0883024619, 0.2817188376, 0.6299787005],
]);

/// Cube-rooted LMS -> OKLab.
pub const LMS_CBRT_TO_OKLAB: DMat3 = from_rows([
    [0.2104542553, 0.7936177850, -0.0040720468],
    [1.9779984951, -2.4285922050, 0.4505937099],
    [0.0259040371, 0.7827717662, -0.8086757660],
]);

/// OKLab -> cube-rooted LMS.
pub const OKLAB_TO_LMS_CBRT: DMat3 = from_rows([
    [1.0, 0.3963377774, 0.2158037573],
    [1.0, -0.1055613458, -0.0638541728],
    [1.0, -0.0894841775, -1.2914855480],
]);

/// LMS cone response -> linear sRGB.
pub const LMS_TO_LINEAR_SRGB: DMat3 = from_rows([
    [4.0767416621, -3.3077115913, 0.2309699292],
    [-1.2684380046, 2.6097574011, -0.3413193965],
    [-0.0041960863, -0.7034186147, 1.7076147010],
]);

#[inline]
fn to_vec(rgb: Rgb) -> DVec3 {
    DVec3::new(rgb.r, rgb.g, rgb.b)
}

#[inline]
fn from_vec(v: DVec3) -> Rgb {
    Rgb::new(v.x, v.y, v.z)
}

/// Linear-light sRGB to OKLab.
pub fn linear_srgb_to_oklab(linear: Rgb) -> Lab {
    let lms = LINEAR_SRGB_TO_LMS * to_vec(linear);
    let lms_ = DVec3::new(lms.x.cbrt(), lms.y.cbrt(), lms.z.cbrt());
    let lab = LMS_CBRT_TO_OKLAB * lms_;
    Lab::new(lab.x, lab.y, lab.z)
}

/// OKLab to linear-light sRGB, unclamped.
pub fn oklab_to_linear_srgb(lab: Lab) -> Rgb {
    let lms_ = OKLAB_TO_LMS_CBRT * DVec3::new(lab.l, lab.a, lab.b);
    let lms = lms_ * lms_ * lms_;
    from_vec(LMS_TO_LINEAR_SRGB * lms)
}

/// Display-encoded sRGB to OKLab.
///
/// Any input is accepted; there is no gamut test in this direction.
///
/// # Example
///
/// ```rust
/// use alch_core::Rgb;
/// use alch_color::oklab::rgb_to_oklab;
///
/// let white = rgb_to_oklab(Rgb::WHITE);
/// assert!((white.l - 1.0).abs() < 1e-6);
/// assert!(white.a.abs() < 1e-6 && white.b.abs() < 1e-6);
/// ```
pub fn rgb_to_oklab(rgb: Rgb) -> Lab {
    linear_srgb_to_oklab(srgb::eotf_rgb(rgb))
}

/// OKLab to display-encoded sRGB without classification or clamping.
///
/// These are the probe values the gamut test looks at.
pub fn oklab_to_rgb_unclamped(lab: Lab) -> Rgb {
    srgb::oetf_rgb(oklab_to_linear_srgb(lab))
}

/// OKLab to display-encoded sRGB under `policy`.
///
/// `in_gamut` classifies the unclamped channels; the returned channels are
/// clamped to `[0, 1]` under [`GamutPolicy::Srgb`] and passed through under
/// [`GamutPolicy::Wide`].
///
/// # Example
///
/// ```rust
/// use alch_core::Lab;
/// use alch_color::{GamutPolicy, oklab::oklab_to_rgb};
///
/// let out = oklab_to_rgb(Lab::new(1.0, 0.5, 0.0), GamutPolicy::Srgb);
/// assert!(!out.in_gamut);
/// assert!(out.rgb.within(0.0, 1.0));
/// ```
pub fn oklab_to_rgb(lab: Lab, policy: GamutPolicy) -> GamutRgb {
    policy.resolve(oklab_to_rgb_unclamped(lab))
}
