//! WCAG 2.x contrast ratio and light/dark classification.

use float_cmp::approx_eq;
use tracing::warn;

use crate::color::Color;
use crate::luminance::luminance;

/// Luminance split used by [`contrast_color`] and [`is_dark_color`].
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Flare offset added to both luminances before dividing.
const FLARE: f64 = 0.05;

/// Tolerance when comparing a ratio against a threshold.
const RATIO_EPSILON: f64 = 1e-9;

/// Text color that stays readable on a given background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContrastColor {
    Black,
    White,
}

impl ContrastColor {
    /// Hex literal for this token, `#000000` or `#ffffff`.
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Black => "#000000",
            Self::White => "#ffffff",
        }
    }

    pub const fn color(self) -> Color {
        match self {
            Self::Black => Color::BLACK,
            Self::White => Color::WHITE,
        }
    }
}

impl std::fmt::Display for ContrastColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.hex())
    }
}

/// Contrast ratio from two pre-computed luminances.
///
/// Argument order does not matter.
pub fn ratio_from_luminances(l1: f64, l2: f64) -> f64 {
    let lighter = l1.max(l2);
    let darker = l1.min(l2);
    (lighter + FLARE) / (darker + FLARE)
}

/// WCAG contrast ratio between two colors.
///
/// Ranges from 1.0 (identical luminance) to 21.0 (black against white) for
/// channels within 0.0-1.0.
///
/// # Example
///
/// ```
/// use approx::assert_relative_eq;
/// use themecolor::{Color, contrast_ratio};
///
/// assert_relative_eq!(contrast_ratio(Color::WHITE, Color::BLACK), 21.0, epsilon = 1e-9);
/// ```
pub fn contrast_ratio(color1: Color, color2: Color) -> f64 {
    ratio_from_luminances(luminance(color1), luminance(color2))
}

/// Text color for a background, split at `threshold`.
///
/// Black only when luminance is strictly above the threshold.
pub(crate) fn contrast_color_at(background: Color, threshold: f64) -> ContrastColor {
    if luminance(background) > threshold {
        ContrastColor::Black
    } else {
        ContrastColor::White
    }
}

/// Whether a color counts as dark at `threshold`. Strictly below is dark.
pub(crate) fn is_dark_at(color: Color, threshold: f64) -> bool {
    luminance(color) < threshold
}

/// Black or white text, whichever reads better on `background`.
///
/// A background with luminance exactly 0.5 gets white text.
pub fn contrast_color(background: Color) -> ContrastColor {
    contrast_color_at(background, DEFAULT_THRESHOLD)
}

/// Whether a color's luminance is below 0.5.
pub fn is_dark_color(color: Color) -> bool {
    is_dark_at(color, DEFAULT_THRESHOLD)
}

/// Minimum contrast ratio for a WCAG success criterion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Threshold {
    pub min_ratio: f64,
    pub description: &'static str,
}

impl Threshold {
    /// True when `ratio` meets the threshold, allowing for float error.
    pub fn passes(&self, ratio: f64) -> bool {
        ratio > self.min_ratio || approx_eq!(f64, ratio, self.min_ratio, epsilon = RATIO_EPSILON)
    }
}

/// Predefined WCAG 2.x thresholds
pub mod thresholds {
    use super::Threshold;

    /// Large text, level AA - 3:1
    pub const AA_LARGE_TEXT: Threshold = Threshold {
        min_ratio: 3.0,
        description: "Large text (AA)",
    };

    /// Normal text, level AA - 4.5:1
    pub const AA_NORMAL_TEXT: Threshold = Threshold {
        min_ratio: 4.5,
        description: "Normal text (AA)",
    };

    /// Large text, level AAA - 4.5:1
    pub const AAA_LARGE_TEXT: Threshold = Threshold {
        min_ratio: 4.5,
        description: "Large text (AAA)",
    };

    /// Normal text, level AAA - 7:1
    pub const AAA_NORMAL_TEXT: Threshold = Threshold {
        min_ratio: 7.0,
        description: "Normal text (AAA)",
    };
}

/// Highest WCAG level a contrast ratio satisfies for normal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContrastLevel {
    Fail,
    /// Sufficient for large text only
    AaLarge,
    Aa,
    Aaa,
}

impl ContrastLevel {
    pub fn from_ratio(ratio: f64) -> Self {
        if ratio.is_nan() {
            warn!("contrast ratio is NaN, grading as fail");
            return Self::Fail;
        }
        if thresholds::AAA_NORMAL_TEXT.passes(ratio) {
            Self::Aaa
        } else if thresholds::AA_NORMAL_TEXT.passes(ratio) {
            Self::Aa
        } else if thresholds::AA_LARGE_TEXT.passes(ratio) {
            Self::AaLarge
        } else {
            Self::Fail
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Fail => "fail",
            Self::AaLarge => "AA large",
            Self::Aa => "AA",
            Self::Aaa => "AAA",
        }
    }
}

impl std::fmt::Display for ContrastLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
