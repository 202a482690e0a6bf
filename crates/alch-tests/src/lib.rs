//! Integration tests for alch crates.
//!
//! End-to-end properties that span the core types, the transfer curves
//! and the color conversions.

#[cfg(test)]
mod reference;

/// Evenly spaced samples of `[0, 1]`, both ends included.
#[cfg(test)]
fn unit_samples(n: usize) -> impl Iterator<Item = f64> + Clone {
    (0..n).map(move |i| i as f64 / (n - 1) as f64)
}

/// `n^3` RGB triples covering the unit cube.
#[cfg(test)]
fn rgb_grid(n: usize) -> Vec<alch_core::Rgb> {
    let s = unit_samples(n);
    let mut out = Vec::with_capacity(n * n * n);
    for r in s.clone() {
        for g in s.clone() {
            for b in s.clone() {
                out.push(alch_core::Rgb::new(r, g, b));
            }
        }
    }
    out
}
