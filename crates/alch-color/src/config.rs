//! Session configuration.
//!
//! Loaded once at startup from YAML:
//!
//! ```yaml
//! # display can show colors beyond sRGB (P3 or wider)
//! wide_gamut: true
//! # white level of the display in cd/m2
//! max_luminance: 400
//! ```
//!
//! Both keys are optional; missing keys take their defaults (sRGB policy,
//! 100 cd/m2).

use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

use alch_transfer::DEFAULT_MAX_LUMINANCE;

use crate::converter::Converter;
use crate::error::{ColorError, ColorResult};
use crate::gamut::GamutPolicy;

/// Display capabilities for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AlchConfig {
    /// The display can show colors beyond sRGB.
    pub wide_gamut: bool,
    /// Display white in cd/m2; default target for new swatches and curves.
    pub max_luminance: f64,
}

impl Default for AlchConfig {
    fn default() -> Self {
        Self {
            wide_gamut: false,
            max_luminance: DEFAULT_MAX_LUMINANCE,
        }
    }
}

impl AlchConfig {
    /// Parses and validates a YAML document.
    pub fn from_yaml(yaml: &str) -> ColorResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a YAML file.
    pub fn from_file(path: impl AsRef<Path>) -> ColorResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_yaml(&text)?;
        debug!(
            path = %path.display(),
            wide_gamut = config.wide_gamut,
            max_luminance = config.max_luminance,
            "loaded config"
        );
        Ok(config)
    }

    /// Rejects a non-finite or non-positive `max_luminance`.
    pub fn validate(&self) -> ColorResult<()> {
        if !self.max_luminance.is_finite() || self.max_luminance <= 0.0 {
            return Err(ColorError::InvalidValue(format!(
                "max_luminance must be a positive number of cd/m2, got {}",
                self.max_luminance
            )));
        }
        Ok(())
    }

    /// Gamut policy for this display.
    #[inline]
    pub fn policy(&self) -> GamutPolicy {
        GamutPolicy::from_wide_gamut(self.wide_gamut)
    }

    /// Converter bound to this display's policy.
    #[inline]
    pub fn converter(&self) -> Converter {
        Converter::new(self.policy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let c = AlchConfig::default();
        assert!(!c.wide_gamut);
        assert_eq!(c.max_luminance, 100.0);
        assert_eq!(c.policy(), GamutPolicy::Srgb);
    }

    #[test]
    fn test_partial_yaml() {
        let c = AlchConfig::from_yaml("wide_gamut: true\n").unwrap();
        assert!(c.wide_gamut);
        assert_eq!(c.max_luminance, 100.0);
        assert_eq!(c.converter().policy(), GamutPolicy::Wide);
    }

    #[test]
    fn test_full_yaml() {
        let c = AlchConfig::from_yaml("wide_gamut: false\nmax_luminance: 400\n").unwrap();
        assert_eq!(c.max_luminance, 400.0);
    }

    #[test]
    fn test_rejects_unknown_key() {
        let err = AlchConfig::from_yaml("wide_gamat: true\n").unwrap_err();
        assert!(matches!(err, ColorError::Config(_)), "{err}");
    }

    #[test]
    fn test_rejects_bad_luminance() {
        for yaml in ["max_luminance: 0", "max_luminance: -10", "max_luminance: .nan"] {
            let err = AlchConfig::from_yaml(yaml).unwrap_err();
            assert!(matches!(err, ColorError::InvalidValue(_)), "{yaml}: {err}");
        }
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "wide_gamut: true\nmax_luminance: 1000").unwrap();
        let c = AlchConfig::from_file(file.path()).unwrap();
        assert!(c.wide_gamut);
        assert_eq!(c.max_luminance, 1000.0);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = AlchConfig::from_file(dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, ColorError::Io(_)));
    }
}
