//! Configured classification and contrast checks.

#[cfg(debug_assertions)]
use tracing::instrument;

use crate::color::Color;
use crate::config::{ConfigError, ThemeColorConfig};
use crate::contrast::{
    self, ContrastColor, ContrastLevel, Threshold, contrast_color_at, is_dark_at,
};

/// Outcome of checking a foreground against a background.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContrastCheck {
    pub ratio: f64,
    pub level: ContrastLevel,
    /// Whether the ratio meets the configured minimum
    pub passes: bool,
}

/// Light/dark classification with thresholds taken from configuration.
///
/// With [`ThemeColorConfig::default`] every method agrees with the free
/// functions in [`crate::contrast`].
#[derive(Debug, Clone, PartialEq)]
pub struct Classifier {
    threshold: f64,
    minimum: Threshold,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::from_validated(&ThemeColorConfig::default())
    }
}

impl Classifier {
    /// Build a classifier, validating the configuration first.
    pub fn new(config: &ThemeColorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    fn from_validated(config: &ThemeColorConfig) -> Self {
        Self {
            threshold: config.classification.threshold,
            minimum: Threshold {
                min_ratio: config.contrast.minimum_ratio,
                description: "Configured minimum",
            },
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn minimum_ratio(&self) -> f64 {
        self.minimum.min_ratio
    }

    /// Black text above the threshold, white at or below it.
    pub fn contrast_color(&self, background: Color) -> ContrastColor {
        contrast_color_at(background, self.threshold)
    }

    /// Dark strictly below the threshold.
    pub fn is_dark(&self, color: Color) -> bool {
        is_dark_at(color, self.threshold)
    }

    pub fn contrast_ratio(&self, color1: Color, color2: Color) -> f64 {
        contrast::contrast_ratio(color1, color2)
    }

    /// Grade a foreground/background pair and test it against the minimum.
    #[cfg_attr(debug_assertions, instrument(level = "debug", skip(self)))]
    pub fn check(&self, foreground: Color, background: Color) -> ContrastCheck {
        let ratio = contrast::contrast_ratio(foreground, background);
        ContrastCheck {
            ratio,
            level: ContrastLevel::from_ratio(ratio),
            passes: self.minimum.passes(ratio),
        }
    }
}
