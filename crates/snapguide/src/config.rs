#![forbid(unsafe_code)]

//! Engine configuration.
//!
//! [`SnapConfig`] gathers every tunable the engine recognizes. Defaults
//! match the documented behavior (capture at 3 units, release at 1.5x), so
//! `SnapConfig::default()` is always valid and ready to use.
//!
//! # Loading
//!
//! With the `config-file` feature enabled, a config can be loaded from TOML
//! or JSON at startup:
//!
//! ```toml
//! # snapguide.toml
//! tolerance = 4.0
//! release_factor = 2.0
//! sources = "EDGES | CENTERS"
//! constrain_to_container = true
//! grid_step = 10.0
//! ```
//!
//! ```rust,ignore
//! let config = SnapConfig::from_toml_file("snapguide.toml")?;
//! ```
//!
//! Loaded configs are validated before they are returned; a file that
//! parses but carries an out-of-range value is rejected.

use std::fmt;

#[cfg(feature = "config-file")]
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::guide::GuideSources;

/// Default capture distance in device-independent units.
pub const DEFAULT_TOLERANCE: f64 = 3.0;

/// Default release factor. A held guide lets go only once its distance
/// exceeds `tolerance * release_factor`.
pub const DEFAULT_RELEASE_FACTOR: f64 = 1.5;

// ---------------------------------------------------------------------------
// SnapConfig
// ---------------------------------------------------------------------------

/// Tunable parameters for guide snapping.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SnapConfig {
    /// Maximum distance at which a guide captures the moving rect.
    /// Finite and non-negative.
    pub tolerance: f64,

    /// Hysteresis multiplier, strictly greater than 1. The release
    /// threshold is `tolerance * release_factor`; the gap between capture
    /// and release is what keeps a held guide from chattering.
    pub release_factor: f64,

    /// Which container features produce guides.
    pub sources: GuideSources,

    /// Keep the dragged rect inside the container (applied before
    /// snapping).
    pub constrain_to_container: bool,

    /// Optional grid: when set, the proposed origin is rounded to the
    /// nearest multiple of this step before snapping. Finite and positive.
    pub grid_step: Option<f64>,
}

impl Default for SnapConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            release_factor: DEFAULT_RELEASE_FACTOR,
            sources: GuideSources::all(),
            constrain_to_container: true,
            grid_step: None,
        }
    }
}

impl SnapConfig {
    /// Create a config with explicit thresholds, validating them.
    pub fn new(tolerance: f64, release_factor: f64) -> Result<Self, ConfigError> {
        let config = Self {
            tolerance,
            release_factor,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the capture tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Set the release factor.
    #[must_use]
    pub fn with_release_factor(mut self, release_factor: f64) -> Self {
        self.release_factor = release_factor;
        self
    }

    /// Select guide sources.
    #[must_use]
    pub fn with_sources(mut self, sources: GuideSources) -> Self {
        self.sources = sources;
        self
    }

    /// Enable or disable constrain-to-container clamping.
    #[must_use]
    pub fn with_constrain_to_container(mut self, constrain: bool) -> Self {
        self.constrain_to_container = constrain;
        self
    }

    /// Enable grid rounding with the given step.
    #[must_use]
    pub fn with_grid_step(mut self, step: f64) -> Self {
        self.grid_step = Some(step);
        self
    }

    /// The distance past which a held guide is released.
    #[inline]
    #[must_use]
    pub fn release_distance(&self) -> f64 {
        self.tolerance * self.release_factor
    }

    /// Check every parameter is within its documented range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.tolerance.is_finite() {
            return Err(ConfigError::NonFiniteTolerance {
                value: self.tolerance,
            });
        }
        if self.tolerance < 0.0 {
            return Err(ConfigError::NegativeTolerance {
                value: self.tolerance,
            });
        }
        if !self.release_factor.is_finite() || self.release_factor <= 1.0 {
            return Err(ConfigError::ReleaseFactorOutOfRange {
                value: self.release_factor,
            });
        }
        if let Some(step) = self.grid_step {
            if !step.is_finite() || step <= 0.0 {
                return Err(ConfigError::GridStepOutOfRange { value: step });
            }
        }
        Ok(())
    }

    /// Load from a TOML string.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigFileError> {
        let config: Self = toml::from_str(s).map_err(ConfigFileError::Toml)?;
        config.validate().map_err(ConfigFileError::Invalid)?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigFileError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config-file")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigFileError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigFileError::Json)?;
        config.validate().map_err(ConfigFileError::Invalid)?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config-file")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigFileError::Io)?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Parameter validation errors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError {
    NonFiniteTolerance { value: f64 },
    NegativeTolerance { value: f64 },
    ReleaseFactorOutOfRange { value: f64 },
    GridStepOutOfRange { value: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFiniteTolerance { value } => {
                write!(f, "tolerance must be finite, got {value}")
            }
            Self::NegativeTolerance { value } => {
                write!(f, "tolerance must be >= 0, got {value}")
            }
            Self::ReleaseFactorOutOfRange { value } => {
                write!(f, "release_factor must be finite and > 1, got {value}")
            }
            Self::GridStepOutOfRange { value } => {
                write!(f, "grid_step must be finite and > 0, got {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Errors that can occur when loading a config from a file.
#[cfg(feature = "config-file")]
#[derive(Debug)]
pub enum ConfigFileError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// The file parsed, but a parameter is out of range.
    Invalid(ConfigError),
}

#[cfg(feature = "config-file")]
impl fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Invalid(e) => write!(f, "invalid config: {e}"),
        }
    }
}

#[cfg(feature = "config-file")]
impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_documented_values() {
        let config = SnapConfig::default();
        assert_eq!(config.tolerance, DEFAULT_TOLERANCE);
        assert_eq!(config.release_factor, DEFAULT_RELEASE_FACTOR);
        assert_eq!(config.sources, GuideSources::all());
        assert!(config.constrain_to_container);
        assert_eq!(config.grid_step, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn new_validates_thresholds() {
        assert!(SnapConfig::new(3.0, 1.5).is_ok());
        assert_eq!(
            SnapConfig::new(-1.0, 1.5),
            Err(ConfigError::NegativeTolerance { value: -1.0 })
        );
        assert!(matches!(
            SnapConfig::new(f64::NAN, 1.5),
            Err(ConfigError::NonFiniteTolerance { .. })
        ));
        assert_eq!(
            SnapConfig::new(3.0, 1.0),
            Err(ConfigError::ReleaseFactorOutOfRange { value: 1.0 })
        );
        assert!(matches!(
            SnapConfig::new(3.0, f64::INFINITY),
            Err(ConfigError::ReleaseFactorOutOfRange { .. })
        ));
    }

    #[test]
    fn zero_tolerance_is_allowed() {
        // Disables snapping without disabling the pipeline.
        assert!(SnapConfig::new(0.0, 1.5).is_ok());
    }

    #[test]
    fn grid_step_validation() {
        let bad = SnapConfig::default().with_grid_step(0.0);
        assert_eq!(
            bad.validate(),
            Err(ConfigError::GridStepOutOfRange { value: 0.0 })
        );
        let bad = SnapConfig::default().with_grid_step(f64::NAN);
        assert!(matches!(
            bad.validate(),
            Err(ConfigError::GridStepOutOfRange { .. })
        ));
        assert!(SnapConfig::default().with_grid_step(10.0).validate().is_ok());
    }

    #[test]
    fn builders_compose() {
        let config = SnapConfig::default()
            .with_tolerance(5.0)
            .with_release_factor(2.0)
            .with_sources(GuideSources::EDGES)
            .with_constrain_to_container(false)
            .with_grid_step(8.0);
        assert_eq!(config.tolerance, 5.0);
        assert_eq!(config.release_factor, 2.0);
        assert_eq!(config.sources, GuideSources::EDGES);
        assert!(!config.constrain_to_container);
        assert_eq!(config.grid_step, Some(8.0));
    }

    #[test]
    fn release_distance_is_scaled_tolerance() {
        let config = SnapConfig::default()
            .with_tolerance(4.0)
            .with_release_factor(1.5);
        assert_eq!(config.release_distance(), 6.0);
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SnapConfig = serde_json::from_str("{\"tolerance\": 5.0}").unwrap();
        assert_eq!(config.tolerance, 5.0);
        assert_eq!(config.release_factor, DEFAULT_RELEASE_FACTOR);
        assert_eq!(config.sources, GuideSources::all());
    }

    #[test]
    fn error_display_names_the_range() {
        let err = ConfigError::ReleaseFactorOutOfRange { value: 0.5 };
        assert_eq!(err.to_string(), "release_factor must be finite and > 1, got 0.5");
        let err = ConfigError::GridStepOutOfRange { value: -2.0 };
        assert_eq!(err.to_string(), "grid_step must be finite and > 0, got -2");
    }
}
