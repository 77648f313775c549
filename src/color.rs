//! Normalized RGB color value.

use palette::Srgb;
use serde::{Deserialize, Serialize};

/// An sRGB color with channels normalized to 0.0-1.0.
///
/// Construction through [`Color::new`] performs no validation: channels
/// outside the unit range or NaN flow through every computation and produce
/// extrapolated results. Use [`Color::try_new`] to reject such values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

/// Identifies a single channel in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Red => "red",
            Self::Green => "green",
            Self::Blue => "blue",
        };
        f.write_str(name)
    }
}

/// Error type for checked color construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColorError {
    /// Channel is NaN or infinite
    NotFinite { channel: Channel },
    /// Channel lies outside 0.0-1.0
    OutOfRange { channel: Channel, value: f64 },
}

impl std::fmt::Display for ColorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFinite { channel } => write!(f, "{} channel is not finite", channel),
            Self::OutOfRange { channel, value } => {
                write!(f, "{} channel {} is outside 0.0-1.0", channel, value)
            }
        }
    }
}

impl std::error::Error for ColorError {}

impl Color {
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a color without validating the channels.
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    /// Create a neutral gray with all three channels set to `value`.
    pub const fn gray(value: f64) -> Self {
        Self::new(value, value, value)
    }

    /// Create a color, rejecting non-finite or out-of-range channels.
    pub fn try_new(r: f64, g: f64, b: f64) -> Result<Self, ColorError> {
        for (channel, value) in [(Channel::Red, r), (Channel::Green, g), (Channel::Blue, b)] {
            if !value.is_finite() {
                return Err(ColorError::NotFinite { channel });
            }
            if !(0.0..=1.0).contains(&value) {
                return Err(ColorError::OutOfRange { channel, value });
            }
        }
        Ok(Self::new(r, g, b))
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    /// Relative luminance of this color. See [`crate::luminance::luminance`].
    pub fn luminance(self) -> f64 {
        crate::luminance::luminance(self)
    }

    /// `#rrggbb` form of this color. See [`crate::hex::color_to_hex`].
    pub fn to_hex(self) -> String {
        crate::hex::color_to_hex(self)
    }
}

impl From<Srgb<f64>> for Color {
    fn from(color: Srgb<f64>) -> Self {
        Self::new(color.red, color.green, color.blue)
    }
}

impl From<Srgb<f32>> for Color {
    fn from(color: Srgb<f32>) -> Self {
        Self::from(color.into_format::<f64>())
    }
}

impl From<Srgb<u8>> for Color {
    fn from(color: Srgb<u8>) -> Self {
        Self::from(color.into_format::<f64>())
    }
}

impl From<Color> for Srgb<f64> {
    fn from(color: Color) -> Self {
        Srgb::new(color.r, color.g, color.b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn try_new_accepts_unit_range() {
        let color = Color::try_new(0.0, 0.5, 1.0).unwrap();
        assert_eq!(color, Color::new(0.0, 0.5, 1.0));
    }

    #[test]
    fn try_new_names_offending_channel() {
        assert_eq!(
            Color::try_new(0.2, 1.5, 0.0),
            Err(ColorError::OutOfRange {
                channel: Channel::Green,
                value: 1.5
            })
        );
        assert_eq!(
            Color::try_new(0.2, 0.3, f64::NAN),
            Err(ColorError::NotFinite {
                channel: Channel::Blue
            })
        );
    }

    #[test]
    fn u8_conversion_normalizes() {
        let color = Color::from(Srgb::new(255u8, 0, 51));
        assert_relative_eq!(color.r, 1.0);
        assert_relative_eq!(color.g, 0.0);
        assert_relative_eq!(color.b, 0.2, epsilon = 1e-12);
    }
}
