//! Error types for color operations.
//!
//! Numeric conversions are total and never fail. Errors come from the two
//! user-facing parse boundaries: hex strings and configuration files.

use thiserror::Error;

/// Hex color string could not be decoded.
///
/// Recoverable input validation: callers fall back to a default or reject
/// the input inline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HexError {
    /// String does not start with `#`.
    #[error("hex color must start with '#'")]
    MissingPrefix,

    /// Digit count after `#` is neither 3 nor 6.
    #[error("hex color must have 3 or 6 digits, got {0}")]
    WrongLength(usize),

    /// Character is not a hexadecimal digit.
    #[error("invalid hex digit {ch:?} at position {index}")]
    InvalidDigit {
        /// Offending character
        ch: char,
        /// Character position within the input, counting the `#`
        index: usize,
    },
}

/// Color operation error.
#[derive(Debug, Error)]
pub enum ColorError {
    /// Hex string rejected.
    #[error("hex error: {0}")]
    Hex(#[from] HexError),

    /// Configuration value is invalid.
    #[error("invalid value: {0}")]
    InvalidValue(String),

    /// Configuration could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
