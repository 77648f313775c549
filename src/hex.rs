//! `#rrggbb` formatting.

use crate::color::Color;

/// Round to the nearest integer, halves toward positive infinity.
///
/// `f64::round` sends negative halves away from zero, so those are nudged
/// back up. Adding 0.5 before flooring would misround 0.49999999999999994.
fn round_half_up(x: f64) -> f64 {
    let rounded = x.round();
    if rounded - x == -0.5 { rounded + 1.0 } else { rounded }
}

/// Format one 8-bit component as lowercase hex, padded to two characters.
///
/// Components outside 0-255 are not clamped: larger values print all their
/// digits, negative values print a minus sign before the magnitude.
/// Magnitudes beyond `u64::MAX` (about 1.8e19) are capped at `u64::MAX`
/// and print as `ffffffffffffffff`.
fn component_to_hex(channel: f64) -> String {
    let rounded = round_half_up(channel * 255.0);

    let digits = if rounded.is_nan() {
        "NaN".to_string()
    } else if rounded == f64::INFINITY {
        "Infinity".to_string()
    } else if rounded == f64::NEG_INFINITY {
        "-Infinity".to_string()
    } else if rounded < 0.0 {
        format!("-{:x}", (-rounded) as u64)
    } else {
        format!("{:x}", rounded as u64)
    };

    format!("{digits:0>2}")
}

/// Convert a color to a lowercase `#rrggbb` string.
///
/// # Example
///
/// ```
/// use themecolor::{Color, color_to_hex};
///
/// assert_eq!(color_to_hex(Color::new(1.0, 0.0, 0.0)), "#ff0000");
/// assert_eq!(color_to_hex(Color::gray(0.5)), "#808080");
/// ```
pub fn color_to_hex(color: Color) -> String {
    let [r, g, b] = color.channels().map(component_to_hex);
    format!("#{r}{g}{b}")
}
