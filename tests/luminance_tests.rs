use approx::assert_relative_eq;
use palette::Srgb;
use themecolor::luminance::linearize;
use themecolor::{Color, luminance};

#[test]
fn test_black_is_zero() {
    assert_eq!(luminance(Color::BLACK), 0.0);
}

#[test]
fn test_white_is_one() {
    assert_relative_eq!(luminance(Color::WHITE), 1.0, epsilon = 1e-12);
}

#[test]
fn test_primaries_match_coefficients() {
    assert_relative_eq!(luminance(Color::new(1.0, 0.0, 0.0)), 0.2126, epsilon = 1e-12);
    assert_relative_eq!(luminance(Color::new(0.0, 1.0, 0.0)), 0.7152, epsilon = 1e-12);
    assert_relative_eq!(luminance(Color::new(0.0, 0.0, 1.0)), 0.0722, epsilon = 1e-12);
}

#[test]
fn test_linear_segment_below_breakpoint() {
    assert_relative_eq!(linearize(0.03928), 0.03928 / 12.92);
    assert_relative_eq!(linearize(0.02), 0.02 / 12.92);
}

#[test]
fn test_power_segment_above_breakpoint() {
    let c = 0.5;
    assert_relative_eq!(linearize(c), ((c + 0.055) / 1.055_f64).powf(2.4));
    assert_relative_eq!(luminance(Color::gray(0.5)), 0.214_041_140_482_232_55, epsilon = 1e-12);
}

#[test]
fn test_monotonic_over_gray_ramp() {
    let mut previous = -1.0;
    for step in 0..=255u8 {
        let l = luminance(Color::from(Srgb::new(step, step, step)));
        assert!(l > previous, "luminance should increase at step {}", step);
        previous = l;
    }
}

#[test]
fn test_out_of_range_extrapolates() {
    // No clamping: values beyond white are brighter than white
    assert!(luminance(Color::gray(1.2)) > 1.0);
    assert!(luminance(Color::gray(-0.5)) < 0.0);
}

#[test]
fn test_nan_propagates() {
    assert!(luminance(Color::new(f64::NAN, 0.0, 0.0)).is_nan());
}

#[test]
fn test_method_matches_free_function() {
    let color = Color::new(0.231, 0.51, 0.965);
    assert_eq!(color.luminance(), luminance(color));
}
