//! WCAG relative luminance.
//!
//! Uses the sRGB transfer function with the 0.03928 breakpoint from the
//! WCAG 2.x text and the ITU-R BT.709 channel weights.

use crate::color::Color;

/// Breakpoint between the linear and power segments of the transfer curve.
const LINEAR_THRESHOLD: f64 = 0.03928;
const LINEAR_SLOPE: f64 = 12.92;
const OFFSET: f64 = 0.055;
const SCALE: f64 = 1.055;
const GAMMA: f64 = 2.4;

/// BT.709 luminance coefficients
const COEF_R: f64 = 0.2126;
const COEF_G: f64 = 0.7152;
const COEF_B: f64 = 0.0722;

/// Decode one gamma-encoded sRGB channel to linear light.
#[inline]
pub fn linearize(channel: f64) -> f64 {
    if channel <= LINEAR_THRESHOLD {
        channel / LINEAR_SLOPE
    } else {
        ((channel + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Relative luminance of a color, 0.0 for black and 1.0 for white.
///
/// Inputs are not validated. NaN channels fall through to the power segment
/// and yield NaN.
///
/// # Example
///
/// ```
/// use themecolor::{Color, luminance};
///
/// assert_eq!(luminance(Color::BLACK), 0.0);
/// assert!(luminance(Color::gray(0.5)) < 0.25);
/// ```
#[inline]
pub fn luminance(color: Color) -> f64 {
    COEF_R * linearize(color.r) + COEF_G * linearize(color.g) + COEF_B * linearize(color.b)
}
