//! Reference OKLab / OKLCh coordinates for well-known sRGB colors.
//!
//! Values were produced independently from the published OKLab matrices
//! in double precision and rounded to 6 decimals.

use alch_color::{hex_to_rgb, rgb_to_oklab, rgb_to_oklch};
use approx::assert_abs_diff_eq;

/// (hex, L, a, b)
const OKLAB_REFERENCE: &[(&str, f64, f64, f64)] = &[
    ("#ffffff", 1.000000, 0.000000, 0.000000),
    ("#808080", 0.599871, 0.000000, 0.000000),
    ("#ff0000", 0.627955, 0.224863, 0.125846),
    ("#00ff00", 0.866440, -0.233888, 0.179498),
    ("#0000ff", 0.452014, -0.032457, -0.311528),
    ("#336699", 0.499314, -0.033043, -0.092967),
    ("#ffcc00", 0.865209, -0.001178, 0.176824),
];

/// (hex, C, h)
const OKLCH_REFERENCE: &[(&str, f64, f64)] = &[
    ("#ff0000", 0.257683, 29.2339),
    ("#00ff00", 0.294827, 142.4953),
    ("#0000ff", 0.313214, 264.0520),
    ("#336699", 0.098664, 250.4331),
    ("#ffcc00", 0.176828, 90.3816),
];

#[test]
fn test_oklab_reference() {
    for &(hex, l, a, b) in OKLAB_REFERENCE {
        let lab = rgb_to_oklab(hex_to_rgb(hex).unwrap());
        assert_abs_diff_eq!(lab.l, l, epsilon = 2e-6);
        assert_abs_diff_eq!(lab.a, a, epsilon = 2e-6);
        assert_abs_diff_eq!(lab.b, b, epsilon = 2e-6);
    }
}

#[test]
fn test_oklch_reference() {
    for &(hex, c, h) in OKLCH_REFERENCE {
        let lch = rgb_to_oklch(hex_to_rgb(hex).unwrap());
        assert_abs_diff_eq!(lch.c, c, epsilon = 2e-6);
        assert_abs_diff_eq!(lch.h, h, epsilon = 1e-3);
    }
}

#[test]
fn test_reference_grays_are_achromatic() {
    for hex in ["#000000", "#808080", "#ffffff"] {
        let lch = rgb_to_oklch(hex_to_rgb(hex).unwrap());
        assert_eq!(lch.h, 0.0, "{hex}");
    }
}
