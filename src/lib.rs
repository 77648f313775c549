//! Perceptual color math for UI theming.
//!
//! Computes WCAG relative luminance, contrast ratios and a binary light/dark
//! classification for colors with normalized `f64` channels.
//!
//! ```
//! use themecolor::{Color, ContrastColor, contrast_color, contrast_ratio, is_dark_color};
//!
//! let background = Color::new(0.1, 0.1, 0.18);
//! assert!(is_dark_color(background));
//! assert_eq!(contrast_color(background), ContrastColor::White);
//! assert!(contrast_ratio(Color::WHITE, background) > 7.0);
//! ```

pub mod classify;
pub mod color;
pub mod config;
pub mod contrast;
pub mod hex;
pub mod luminance;

pub use classify::{Classifier, ContrastCheck};
pub use color::{Channel, Color, ColorError};
pub use config::{ConfigError, ThemeColorConfig};
pub use contrast::{
    ContrastColor, ContrastLevel, Threshold, contrast_color, contrast_ratio, is_dark_color,
};
pub use hex::color_to_hex;
pub use luminance::luminance;
