//! # alch-color
//!
//! Perceptual color conversion for an OKLCh color editor.
//!
//! - **OKLab / OKLCh** - round-trip conversion with display-encoded sRGB
//! - **Gamut policy** - sRGB-only or wide-gamut classification and clamping
//! - **Hex I/O** - `#rgb` / `#rrggbb` decode, `#rrggbb` encode
//! - **Swatch display** - nits-aware lightness through the adaptive curve
//! - **Config** - YAML session configuration
//!
//! # Architecture
//!
//! ```text
//!                 alch-color
//!                     |
//!        +------------+------------+
//!        |                         |
//!  alch-transfer               glam (DMat3)
//!        |
//!    alch-core
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use alch_core::{AdaptiveLch, Rgb};
//! use alch_color::{AlchConfig, hex::hex_to_rgb};
//!
//! let conv = AlchConfig::default().converter();
//!
//! let rgb = hex_to_rgb("#336699").unwrap();
//! let lch = conv.rgb_to_oklch(rgb);
//! let back = conv.oklch_to_rgb(lch);
//! assert!(back.in_gamut);
//! assert_eq!(conv.to_hex(back.rgb), "#336699");
//!
//! let swatch = AdaptiveLch::new(400.0, 0.6, 0.1, 30.0);
//! println!("{}", conv.display_hex(&swatch));
//! ```
//!
//! # Dependencies
//!
//! - [`alch-core`] - Coordinate and swatch types
//! - [`alch-transfer`] - sRGB gamma and adaptive luminosity
//!
//! # Used By
//!
//! - `alch-cli`

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod config;
pub mod converter;
pub mod gamut;
pub mod hex;
pub mod oklab;
pub mod oklch;
pub mod swatch;

pub use config::AlchConfig;
pub use converter::Converter;
pub use error::{ColorError, ColorResult, HexError};
pub use gamut::GamutPolicy;
pub use hex::{hex_to_rgb, rgb_to_hex};
pub use oklab::{oklab_to_rgb, rgb_to_oklab};
pub use oklch::{oklch_to_rgb, rgb_to_oklch};

// Re-export sub-crate for convenience
pub use alch_transfer as transfer;

/// Prelude with commonly used types
pub mod prelude {
    pub use crate::{
        AlchConfig, ColorError, ColorResult, Converter, GamutPolicy, HexError, hex_to_rgb,
        oklab_to_rgb, oklch_to_rgb, rgb_to_hex, rgb_to_oklab, rgb_to_oklch,
    };

    pub use alch_core::{AdaptiveLch, AdaptiveLchColor, GamutRgb, Lab, Lch, Palette, Rgb};
    pub use alch_transfer::{
        adaptive_luminosity, inverse_adaptive_luminosity, linear_to_srgb, perceptual_quantizer,
        simplified_pq, srgb_to_linear,
    };
}
