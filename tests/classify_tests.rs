use themecolor::config::ThemeColorConfig;
use themecolor::{
    Classifier, Color, ConfigError, ContrastColor, ContrastLevel, contrast_color, is_dark_color,
    luminance,
};

#[test]
fn test_default_matches_free_functions() {
    let classifier = Classifier::default();
    assert_eq!(classifier.threshold(), 0.5);

    for step in 0..=50 {
        let gray = Color::gray(step as f64 / 50.0);
        assert_eq!(classifier.contrast_color(gray), contrast_color(gray));
        assert_eq!(classifier.is_dark(gray), is_dark_color(gray));
    }
}

#[test]
fn test_exact_boundary_is_light_with_white_text() {
    // A threshold equal to the gray's own luminance puts it exactly on the split
    let gray = Color::gray(0.6);
    let mut config = ThemeColorConfig::default();
    config.classification.threshold = luminance(gray);

    let classifier = Classifier::new(&config).unwrap();
    assert_eq!(classifier.contrast_color(gray), ContrastColor::White);
    assert!(!classifier.is_dark(gray));
}

#[test]
fn test_lower_threshold_flips_mid_gray() {
    let mut config = ThemeColorConfig::default();
    config.classification.threshold = 0.2;
    let classifier = Classifier::new(&config).unwrap();

    // luminance of 0.5 gray is about 0.214
    let gray = Color::gray(0.5);
    assert!(is_dark_color(gray));
    assert!(!classifier.is_dark(gray));
    assert_eq!(classifier.contrast_color(gray), ContrastColor::Black);
}

#[test]
fn test_new_rejects_invalid_config() {
    let mut config = ThemeColorConfig::default();
    config.classification.threshold = -0.1;
    assert!(matches!(
        Classifier::new(&config),
        Err(ConfigError::InvalidThreshold(_))
    ));
}

#[test]
fn test_check_passes_black_on_white() {
    let check = Classifier::default().check(Color::BLACK, Color::WHITE);
    assert!(check.passes);
    assert_eq!(check.level, ContrastLevel::Aaa);
    assert!((check.ratio - 21.0).abs() < 1e-9);
}

#[test]
fn test_check_uses_configured_minimum() {
    let red = Color::new(1.0, 0.0, 0.0);

    // Red on white is just under 4:1
    let default_check = Classifier::default().check(red, Color::WHITE);
    assert!(!default_check.passes);
    assert_eq!(default_check.level, ContrastLevel::AaLarge);

    let mut config = ThemeColorConfig::default();
    config.contrast.minimum_ratio = 3.0;
    let relaxed = Classifier::new(&config).unwrap();
    assert_eq!(relaxed.minimum_ratio(), 3.0);
    assert!(relaxed.check(red, Color::WHITE).passes);
}

#[test]
fn test_contrast_ratio_is_symmetric() {
    let classifier = Classifier::default();
    let a = Color::new(0.231, 0.51, 0.965);
    let b = Color::gray(0.1);
    assert_eq!(classifier.contrast_ratio(a, b), classifier.contrast_ratio(b, a));
}
