//! Degree-based angle helpers.
//!
//! All angles here are measured counter-clockwise from the positive x axis.

/// Reduces an angle in degrees to `[0, 360)`.
#[must_use]
pub fn normalize_degrees(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    // rem_euclid can round tiny negative inputs up to exactly 360.
    if a >= 360.0 {
        0.0
    } else {
        a
    }
}

/// Canonical horizontal angle of the vector `(dx, dy)`, in degrees `[0, 360)`.
///
/// A zero vector yields `0`.
#[must_use]
pub fn horizontal_angle(dx: f64, dy: f64) -> f64 {
    normalize_degrees(dy.atan2(dx).to_degrees())
}

/// Tests whether `angle` (degrees, any range) lies in the span `from → to`.
///
/// When `from <= to` the span is `[from, to]` on the unwrapped axis, so
/// `to` may exceed 360. When `from > to` the span runs counter-clockwise
/// from `from` through 0° to `to`. Spans of a full turn or more accept
/// every angle.
#[must_use]
pub fn angle_in_span(angle: f64, from: f64, to: f64, tolerance: f64) -> bool {
    if !(angle.is_finite() && from.is_finite() && to.is_finite()) {
        return false;
    }
    let (lo, hi) = if from <= to { (from, to) } else { (from, to + 360.0) };
    if hi - lo >= 360.0 - tolerance {
        return true;
    }
    let shift = lo - normalize_degrees(lo);
    let (lo, hi) = (lo - shift, hi - shift);
    let a = normalize_degrees(angle);
    [a - 360.0, a, a + 360.0]
        .iter()
        .any(|&x| x >= lo - tolerance && x <= hi + tolerance)
}
