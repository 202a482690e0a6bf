//! Error types for alch-core operations.
//!
//! Only the [`Palette`](crate::Palette) list can fail here; coordinate types
//! are infallible.
//!
//! # Usage
//!
//! ```rust
//! use alch_core::{Error, Palette};
//!
//! let mut palette = Palette::sample();
//! let err = palette.rename(42, "Nope").unwrap_err();
//! assert!(matches!(err, Error::IndexOutOfRange { index: 42, .. }));
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing a palette.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Index does not name a palette entry.
    #[error("index {index} out of range for palette of {len} colors")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Palette length
        len: usize,
    },

    /// A palette needs at least one color.
    #[error("palette must contain at least one color")]
    Empty,

    /// Removing the entry would leave the palette empty.
    #[error("cannot delete the last color of a palette")]
    LastColor,

    /// Entry is already at the requested edge of the list.
    #[error("color {index} cannot move {direction}")]
    AtEdge {
        /// Index of the entry
        index: usize,
        /// "up" or "down"
        direction: &'static str,
    },
}
