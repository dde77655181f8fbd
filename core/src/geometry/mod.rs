pub mod angle_interval;
pub mod shadow_cast;

pub use angle_interval::AngleInterval;
pub use shadow_cast::ShadowCast;

/// Relative tolerance used by the `about_*` comparisons.
pub const RELATIVE_EPSILON: f64 = 1e-12;

/// Tolerance floor of the `about_*` comparisons, so that values close to 0 still
/// compare with some slack. Angles are in degrees, hence far above it.
pub const ABSOLUTE_EPSILON: f64 = 1e-9;

/// Equality within `max(ABSOLUTE_EPSILON, RELATIVE_EPSILON * max(|left|, |right|))`.
pub fn about_equal(left: f64, right: f64) -> bool {
    let tolerance = f64::max(
        ABSOLUTE_EPSILON,
        left.abs().max(right.abs()) * RELATIVE_EPSILON,
    );
    (left - right).abs() <= tolerance
}

pub fn about_ge(left: f64, right: f64) -> bool {
    left > right || about_equal(left, right)
}

pub fn about_le(left: f64, right: f64) -> bool {
    left < right || about_equal(left, right)
}

/// Maps any finite angle in degrees into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let normalized = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs.
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

pub fn to_radians(degrees: f64) -> f64 {
    degrees.to_radians()
}

#[cfg(test)]
use assert_approx_eq::assert_approx_eq;

#[test]
fn test_about_equal() {
    assert!(about_equal(1.0, 1.0));
    assert!(about_equal(180.0, 180.0 + 1e-13));
    assert!(!about_equal(180.0, 180.001));
    assert!(about_equal(0.0, 0.0));
    assert!(about_equal(0.0, 1e-300));
    assert!(about_equal(-1e-12, 1e-12));
    assert!(!about_equal(0.0, 1e-6));
    assert!(about_equal(1e6, 1e6 + 1e-7));
}

#[test]
fn test_about_ge_le() {
    assert!(about_ge(2.0, 1.0));
    assert!(about_ge(1.0, 1.0 - 1e-15));
    assert!(!about_ge(1.0, 2.0));
    assert!(about_le(1.0, 2.0));
    assert!(about_le(1.0 + 1e-15, 1.0));
    assert!(!about_le(2.0, 1.0));
    assert!(about_le(1e-10, 0.0));
    assert!(about_ge(-1e-10, 0.0));
    assert!(!about_ge(-1e-6, 0.0));
}

#[test]
fn test_normalize_angle() {
    assert_approx_eq!(normalize_angle(0.0), 0.0);
    assert_approx_eq!(normalize_angle(360.0), 0.0);
    assert_approx_eq!(normalize_angle(-15.0), 345.0);
    assert_approx_eq!(normalize_angle(725.0), 5.0);
    assert_approx_eq!(normalize_angle(-725.0), 355.0);
    assert!(normalize_angle(-1e-20) < 360.0);
}

#[test]
fn test_to_radians() {
    assert_approx_eq!(to_radians(180.0), std::f64::consts::PI);
    assert_approx_eq!(to_radians(-90.0), -std::f64::consts::FRAC_PI_2);
}
