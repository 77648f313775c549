//! Layered configuration for classification and grading thresholds.
//!
//! Values are merged from built-in defaults, an optional TOML file and
//! `THEMECOLOR_`-prefixed environment variables, in that order.

use std::path::Path;

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::contrast::{DEFAULT_THRESHOLD, thresholds};

/// Environment variable prefix, nested keys split on `__`.
pub const ENV_PREFIX: &str = "THEMECOLOR_";

/// Error type for configuration operations.
#[derive(Debug)]
pub enum ConfigError {
    /// IO error writing file
    Io(std::io::Error),
    /// Merging or deserializing providers failed
    Extract(Box<figment::Error>),
    /// TOML serialization error
    Serialize(toml::ser::Error),
    /// Luminance threshold outside 0.0-1.0 or not finite
    InvalidThreshold(f64),
    /// Minimum ratio outside 1.0-21.0 or not finite
    InvalidRatio(f64),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Extract(e) => write!(f, "Configuration error: {}", e),
            Self::Serialize(e) => write!(f, "TOML serialize error: {}", e),
            Self::InvalidThreshold(v) => {
                write!(f, "Invalid luminance threshold {} (expected 0.0-1.0)", v)
            }
            Self::InvalidRatio(v) => {
                write!(f, "Invalid minimum contrast ratio {} (expected 1.0-21.0)", v)
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Extract(e) => Some(e.as_ref()),
            Self::Serialize(e) => Some(e),
            Self::InvalidThreshold(_) | Self::InvalidRatio(_) => None,
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        Self::Extract(Box::new(e))
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(e: toml::ser::Error) -> Self {
        Self::Serialize(e)
    }
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeColorConfig {
    /// Light/dark split
    pub classification: ClassificationConfig,
    /// Contrast requirements
    pub contrast: ContrastConfig,
}

/// Light/dark classification settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassificationConfig {
    /// Luminance above which a background gets black text (0.0-1.0)
    pub threshold: f64,
}

impl Default for ClassificationConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

/// Contrast requirement settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContrastConfig {
    /// Ratio a foreground/background pair must reach to pass a check
    pub minimum_ratio: f64,
}

impl Default for ContrastConfig {
    fn default() -> Self {
        Self {
            minimum_ratio: thresholds::AA_NORMAL_TEXT.min_ratio,
        }
    }
}

impl ThemeColorConfig {
    /// Load configuration, layering an optional TOML file under the
    /// environment.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = path {
            debug!(path = %path.display(), "loading configuration file");
            figment = figment.merge(Toml::file(path));
        }
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));
        Self::from_figment(&figment)
    }

    /// Extract and validate configuration from a figment.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        info!(
            threshold = config.classification.threshold,
            minimum_ratio = config.contrast.minimum_ratio,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check that every value lies in its meaningful range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let threshold = self.classification.threshold;
        if !threshold.is_finite() || !(0.0..=1.0).contains(&threshold) {
            warn!(threshold, "rejecting luminance threshold");
            return Err(ConfigError::InvalidThreshold(threshold));
        }

        let ratio = self.contrast.minimum_ratio;
        if !ratio.is_finite() || !(1.0..=21.0).contains(&ratio) {
            warn!(ratio, "rejecting minimum contrast ratio");
            return Err(ConfigError::InvalidRatio(ratio));
        }

        Ok(())
    }
}
