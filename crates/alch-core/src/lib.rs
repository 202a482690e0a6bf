//! # alch-core
//!
//! Core types for adaptive OKLCh color editing.
//!
//! This crate provides the value types shared by every other alch crate:
//!
//! - [`Rgb`] - Display-encoded (gamma-applied) RGB triple
//! - [`Lab`], [`Lch`] - OKLab and OKLCh coordinates
//! - [`GamutRgb`] - RGB result tagged with a gamut-membership flag
//! - [`AdaptiveLch`] - The four editable axes: nits, lightness, chroma, hue
//! - [`AdaptiveLchColor`] - A named, identified swatch record
//! - [`Palette`] - An ordered list of swatches with a selection cursor
//!
//! ## Design
//!
//! All coordinate types are small `Copy` values with no links between them.
//! Conversions live in `alch-color`; brightness curves in `alch-transfer`.
//! Nothing here performs color math beyond trivial clamping.
//!
//! ```text
//! alch-core (this crate)
//!    ^
//!    |
//!    +-- alch-transfer (gamma, PQ, adaptive luminosity)
//!    +-- alch-color (OKLab/OKLCh, gamut policy, hex)
//!    +-- alch-cli
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod palette;
pub mod swatch;
pub mod types;

pub use error::{Error, Result};
pub use palette::Palette;
pub use swatch::{AdaptiveLch, AdaptiveLchColor};
pub use types::{GamutRgb, Lab, Lch, Rgb};

/// Prelude module for convenient imports.
///
/// ```
/// use alch_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::palette::Palette;
    pub use crate::swatch::{AdaptiveLch, AdaptiveLchColor};
    pub use crate::types::{GamutRgb, Lab, Lch, Rgb};
}
