use nalgebra::Rotation2;

use super::{Point2, Vector2, TOLERANCE};

/// Orthogonal projection of `point` onto the infinite line through `a→b`.
///
/// A zero-length line projects every point onto `a`.
#[must_use]
pub fn project(point: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let d = b - a;
    let len_sq = d.norm_squared();
    if len_sq < TOLERANCE * TOLERANCE {
        return *a;
    }
    let t = (point - a).dot(&d) / len_sq;
    a + d * t
}

/// Mirror image of `point` across the infinite line through `a→b`.
#[must_use]
pub fn reflect(point: &Point2, a: &Point2, b: &Point2) -> Point2 {
    let foot = project(point, a, b);
    foot + (foot - point)
}

/// Rotates `point` counter-clockwise by `angle_deg` degrees around `pivot`.
#[must_use]
pub fn rotate_point(angle_deg: f64, point: &Point2, pivot: &Point2) -> Point2 {
    let rotation = Rotation2::new(angle_deg.to_radians());
    pivot + rotation * (point - pivot)
}

/// Moves `point` by `offset`.
#[must_use]
pub fn translate_point(point: &Point2, offset: &Vector2) -> Point2 {
    point + offset
}

/// Scales the distance of `point` from `pivot` by `scale`.
#[must_use]
pub fn dilate(scale: f64, point: &Point2, pivot: &Point2) -> Point2 {
    pivot + (point - pivot) * scale
}

/// Signed angle at `vertex` from the ray `vertex→p1` to the ray `vertex→p3`.
///
/// Degrees in `(-180, 180]`, positive counter-clockwise.
#[must_use]
pub fn angle(p1: &Point2, vertex: &Point2, p3: &Point2) -> f64 {
    let u = p1 - vertex;
    let v = p3 - vertex;
    let cross = u.x * v.y - u.y * v.x;
    cross.atan2(u.dot(&v)).to_degrees()
}
