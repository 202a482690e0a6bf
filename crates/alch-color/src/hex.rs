//! Hex color strings.
//!
//! Output is always `#rrggbb` in lowercase. Input accepts `#rgb` shorthand
//! (each digit doubled) and `#rrggbb`, case-insensitive, with a mandatory
//! leading `#`. No alpha channel.
//!
//! Encoding is lossy: channels are clamped to `[0, 1]` and quantized to
//! 8 bits, so a round trip is exact only to within `1/255`.

use alch_core::Rgb;
use tracing::debug;

use crate::error::HexError;

/// Quantizes one channel to 8 bits.
#[inline]
fn to_byte(c: f64) -> u8 {
    // NaN saturates to 0 in the cast.
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encodes `rgb` as `#rrggbb`.
///
/// # Example
///
/// ```rust
/// use alch_core::Rgb;
/// use alch_color::hex::rgb_to_hex;
///
/// assert_eq!(rgb_to_hex(Rgb::new(1.0, 0.0, 0.0)), "#ff0000");
/// assert_eq!(rgb_to_hex(Rgb::new(1.5, -2.0, 0.2)), "#ff0033");
/// ```
pub fn rgb_to_hex(rgb: Rgb) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        to_byte(rgb.r),
        to_byte(rgb.g),
        to_byte(rgb.b)
    )
}

/// Decodes `#rgb` or `#rrggbb`.
///
/// # Errors
///
/// [`HexError`] when the `#` is missing, the digit count is not 3 or 6,
/// or a character is not a hex digit.
///
/// # Example
///
/// ```rust
/// use alch_core::Rgb;
/// use alch_color::{HexError, hex::hex_to_rgb};
///
/// assert_eq!(hex_to_rgb("#f00"), Ok(Rgb::new(1.0, 0.0, 0.0)));
/// assert_eq!(hex_to_rgb("#12345"), Err(HexError::WrongLength(5)));
/// ```
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, HexError> {
    let result = decode(hex);
    if let Err(ref e) = result {
        debug!(input = hex, error = %e, "rejected hex color");
    }
    result
}

fn decode(hex: &str) -> Result<Rgb, HexError> {
    let digits = hex.strip_prefix('#').ok_or(HexError::MissingPrefix)?;

    let nibbles = digits
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            ch.to_digit(16)
                .map(|d| d as u8)
                .ok_or(HexError::InvalidDigit { ch, index: i + 1 })
        })
        .collect::<Result<Vec<u8>, _>>()?;

    match nibbles.as_slice() {
        &[r, g, b] => Ok(Rgb::from_u8(r * 17, g * 17, b * 17)),
        &[r1, r0, g1, g0, b1, b0] => Ok(Rgb::from_u8(
            (r1 << 4) | r0,
            (g1 << 4) | g0,
            (b1 << 4) | b0,
        )),
        other => Err(HexError::WrongLength(other.len())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_primaries() {
        assert_eq!(rgb_to_hex(Rgb::new(1.0, 0.0, 0.0)), "#ff0000");
        assert_eq!(rgb_to_hex(Rgb::BLACK), "#000000");
        assert_eq!(rgb_to_hex(Rgb::WHITE), "#ffffff");
    }

    #[test]
    fn test_encode_rounds_to_nearest() {
        // 0.5 * 255 = 127.5 -> 128
        assert_eq!(rgb_to_hex(Rgb::new(0.5, 0.5, 0.5)), "#808080");
        assert_eq!(rgb_to_hex(Rgb::new(0.2, 0.4, 0.6)), "#336699");
    }

    #[test]
    fn test_encode_clamps() {
        assert_eq!(rgb_to_hex(Rgb::new(1.4, -0.1, 0.0)), "#ff0000");
        assert_eq!(rgb_to_hex(Rgb::new(f64::NAN, 0.0, 0.0)), "#000000");
    }

    #[test]
    fn test_decode_full() {
        assert_eq!(
            hex_to_rgb("#336699"),
            Ok(Rgb::new(51.0 / 255.0, 102.0 / 255.0, 153.0 / 255.0))
        );
    }

    #[test]
    fn test_decode_shorthand() {
        assert_eq!(hex_to_rgb("#f00"), Ok(Rgb::new(1.0, 0.0, 0.0)));
        assert_eq!(hex_to_rgb("#369"), hex_to_rgb("#336699"));
    }

    #[test]
    fn test_decode_case_insensitive() {
        assert_eq!(hex_to_rgb("#AbCdEf"), hex_to_rgb("#abcdef"));
    }

    #[test]
    fn test_decode_failures() {
        assert_eq!(hex_to_rgb("bad"), Err(HexError::MissingPrefix));
        assert_eq!(hex_to_rgb("336699"), Err(HexError::MissingPrefix));
        assert_eq!(
            hex_to_rgb("#GG0000"),
            Err(HexError::InvalidDigit { ch: 'G', index: 1 })
        );
        assert_eq!(hex_to_rgb("#"), Err(HexError::WrongLength(0)));
        assert_eq!(hex_to_rgb("#1234"), Err(HexError::WrongLength(4)));
        assert_eq!(hex_to_rgb("#1234567"), Err(HexError::WrongLength(7)));
        assert_eq!(
            hex_to_rgb("#12 456"),
            Err(HexError::InvalidDigit { ch: ' ', index: 3 })
        );
    }

    #[test]
    fn test_decode_non_ascii() {
        assert_eq!(
            hex_to_rgb("#ffé"),
            Err(HexError::InvalidDigit { ch: 'é', index: 3 })
        );
    }

    #[test]
    fn test_roundtrip_within_quantization() {
        for i in 0..=100 {
            let v = i as f64 / 100.0;
            let rgb = Rgb::new(v, 1.0 - v, (v * 7.0) % 1.0);
            let back = hex_to_rgb(&rgb_to_hex(rgb)).unwrap();
            assert!(back.max_diff(rgb) <= 0.5 / 255.0 + 1e-12, "{rgb:?} -> {back:?}");
        }
    }
}
