//! # alch-transfer
//!
//! Transfer functions and perceptual brightness curves.
//!
//! # Terminology
//!
//! - **OETF** (Opto-Electronic Transfer Function): Linear -> Encoded
//! - **EOTF** (Electro-Optical Transfer Function): Encoded -> Linear
//! - **Nits**: luminance in cd/m2
//!
//! # Contents
//!
//! | Module | Purpose | Domain |
//! |--------|---------|--------|
//! | [`srgb`] | Piecewise sRGB gamma | Reals (unclamped) |
//! | [`pq`] | SMPTE ST 2084, absolute and normalized to a white level | [0, 10000] cd/m2 |
//! | [`adaptive`] | Power-law brightness curve that follows max luminance | [0, 1] |
//!
//! # Usage
//!
//! ```rust
//! use alch_transfer::{srgb, pq, adaptive};
//!
//! // Decode sRGB to linear
//! let linear = srgb::eotf(0.5);
//! assert!((srgb::oetf(linear) - 0.5).abs() < 1e-12);
//!
//! // PQ normalized to a 400 nit display
//! assert_eq!(pq::perceptual_quantizer(1.0, 400.0), 1.0);
//!
//! // Slider position -> lightness target on a 400 nit display, and back
//! let l = adaptive::adaptive_luminosity(0.3, 400.0);
//! let t = adaptive::inverse_adaptive_luminosity(l, 400.0);
//! assert!((t - 0.3).abs() < 1e-12);
//! ```
//!
//! All functions are pure and total over `f64`; none clamp their inputs
//! unless documented otherwise.
//!
//! # Used By
//!
//! - `alch-color` - OKLab conversions and nits-aware swatch display

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod adaptive;
pub mod pq;
pub mod srgb;

// Re-export common functions
pub use adaptive::{
    AdaptiveCurve, DEFAULT_MAX_LUMINANCE, adaptive_luminosity, inverse_adaptive_luminosity,
    simplified_pq,
};
pub use pq::{PqCurve, eotf as pq_eotf, oetf as pq_oetf, perceptual_quantizer};
pub use srgb::{eotf as srgb_to_linear, oetf as linear_to_srgb};
