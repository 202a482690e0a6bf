//! Swatch records: the editable perceptual color and its named, identified form.
//!
//! [`AdaptiveLch`] is the "current color" an editor manipulates: target peak
//! brightness in nits plus OKLCh coordinates. [`AdaptiveLchColor`] adds an
//! opaque id and a display name so it can live in a [`Palette`](crate::Palette).
//!
//! Conversion code only reads and writes the four numeric fields; `id` and
//! `name` belong to the host.

use rand::Rng;
use rand::distributions::Alphanumeric;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Default target brightness (SDR reference white), in cd/m2.
pub const DEFAULT_NITS: f64 = 100.0;

/// Default lightness slider position.
pub const DEFAULT_LIGHTNESS: f64 = 0.5;

/// Default chroma.
pub const DEFAULT_CHROMA: f64 = 0.1;

/// Default hue, in degrees.
pub const DEFAULT_HUE: f64 = 0.0;

static NAME_COUNTER: AtomicU64 = AtomicU64::new(1);
static ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// The four editable axes of a color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveLch {
    /// Target peak brightness in cd/m2
    pub nits: f64,
    /// OKLCh lightness, conventionally `[0, 1]`
    pub lightness: f64,
    /// OKLCh chroma
    pub chroma: f64,
    /// OKLCh hue in degrees
    pub hue: f64,
}

impl AdaptiveLch {
    /// Creates a new set of axes.
    #[inline]
    pub const fn new(nits: f64, lightness: f64, chroma: f64, hue: f64) -> Self {
        Self { nits, lightness, chroma, hue }
    }
}

impl Default for AdaptiveLch {
    fn default() -> Self {
        Self::new(DEFAULT_NITS, DEFAULT_LIGHTNESS, DEFAULT_CHROMA, DEFAULT_HUE)
    }
}

/// A named swatch.
///
/// Created through [`AdaptiveLchColor::new`] (or [`AdaptiveLchColor::from_lch`]),
/// which assigns a process-unique `id`.
///
/// # Example
///
/// ```
/// use alch_core::AdaptiveLchColor;
///
/// let red = AdaptiveLchColor::new(100.0, 0.3, 0.15, 0.0, Some("Red"));
/// let other = AdaptiveLchColor::default();
/// assert_ne!(red.id, other.id);
/// assert!(other.name.starts_with("Color "));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveLchColor {
    /// Opaque process-unique identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Target peak brightness in cd/m2
    pub nits: f64,
    /// OKLCh lightness
    pub lightness: f64,
    /// OKLCh chroma
    pub chroma: f64,
    /// OKLCh hue in degrees
    pub hue: f64,
}

impl AdaptiveLchColor {
    /// Creates a swatch with a fresh id.
    ///
    /// Without a name (or with an empty one) the swatch is called
    /// `Color {n}`, where `n` counts up from 1 for the whole process.
    pub fn new(nits: f64, lightness: f64, chroma: f64, hue: f64, name: Option<&str>) -> Self {
        let name = match name {
            Some(n) if !n.is_empty() => n.to_owned(),
            _ => format!("Color {}", NAME_COUNTER.fetch_add(1, Ordering::Relaxed)),
        };

        Self {
            id: next_id(),
            name,
            nits,
            lightness,
            chroma,
            hue,
        }
    }

    /// Creates a swatch from a set of axes.
    pub fn from_lch(lch: AdaptiveLch, name: Option<&str>) -> Self {
        Self::new(lch.nits, lch.lightness, lch.chroma, lch.hue, name)
    }

    /// Returns the numeric axes.
    #[inline]
    pub fn lch(&self) -> AdaptiveLch {
        AdaptiveLch::new(self.nits, self.lightness, self.chroma, self.hue)
    }

    /// Overwrites the numeric axes, leaving `id` and `name` untouched.
    #[inline]
    pub fn set_lch(&mut self, lch: AdaptiveLch) {
        self.nits = lch.nits;
        self.lightness = lch.lightness;
        self.chroma = lch.chroma;
        self.hue = lch.hue;
    }
}

impl Default for AdaptiveLchColor {
    fn default() -> Self {
        Self::from_lch(AdaptiveLch::default(), None)
    }
}

/// `color-{unix millis}-{sequence}-{7 random alphanumerics}`.
///
/// The sequence alone keeps ids unique within a process.
fn next_id() -> String {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or_default();
    let seq = ID_COUNTER.fetch_add(1, Ordering::Relaxed);
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(7)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect();
    format!("color-{millis}-{seq}-{suffix}")
}
