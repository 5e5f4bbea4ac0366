use super::{Point2, TOLERANCE};

/// Parameters `(t, u)` where the infinite lines `p1→p2` and `p3→p4` meet.
///
/// `t` is measured along `p1→p2` and `u` along `p3→p4`. Returns `None`
/// when the determinant magnitude is below [`TOLERANCE`].
fn line_line_params(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<(f64, f64)> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;
    let det = d1.x * d2.y - d1.y * d2.x;
    if !det.is_finite() || det.abs() < TOLERANCE {
        return None;
    }
    let dx = p3.x - p1.x;
    let dy = p3.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / det;
    let u = (dx * d1.y - dy * d1.x) / det;
    Some((t, u))
}

/// Intersection of the infinite lines through `p1→p2` and `p3→p4`.
///
/// Returns `None` for parallel or coincident lines.
#[must_use]
pub fn intersect_lines(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let (t, _) = line_line_params(p1, p2, p3, p4)?;
    Some(p1 + (p2 - p1) * t)
}

/// Bounded intersection of segments `p1→p2` and `p3→p4`.
///
/// Both parameters must lie in `[0, 1]` up to [`TOLERANCE`], so shared
/// endpoints count as intersections.
#[must_use]
pub fn intersect_segments(p1: &Point2, p2: &Point2, p3: &Point2, p4: &Point2) -> Option<Point2> {
    let (t, u) = line_line_params(p1, p2, p3, p4)?;
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        Some(p1 + (p2 - p1) * t.clamp(0.0, 1.0))
    } else {
        None
    }
}

/// Intersection of a circle with the infinite line through `p1→p2`.
///
/// Substitutes `p1 + t * (p2 - p1)` into the circle equation and keeps the
/// real roots. Points come back in ascending `t`; a tangent line yields a
/// single point and a zero-length line yields none.
#[must_use]
pub fn intersect_circle_and_line(
    center: &Point2,
    radius: f64,
    p1: &Point2,
    p2: &Point2,
) -> Vec<Point2> {
    let d = p2 - p1;
    let f = p1 - center;
    let a = d.norm_squared();
    if !a.is_finite() || a < TOLERANCE * TOLERANCE {
        return Vec::new();
    }
    let b = 2.0 * f.dot(&d);
    let c = f.norm_squared() - radius * radius;
    let discriminant = b * b - 4.0 * a * c;

    if !discriminant.is_finite() || discriminant < -TOLERANCE {
        return Vec::new();
    }
    let disc_sqrt = discriminant.max(0.0).sqrt();

    if disc_sqrt < TOLERANCE * 100.0 {
        let t = -b / (2.0 * a);
        return vec![p1 + d * t];
    }
    let t1 = (-b - disc_sqrt) / (2.0 * a);
    let t2 = (-b + disc_sqrt) / (2.0 * a);
    vec![p1 + d * t1, p1 + d * t2]
}

/// Intersection of two circles via the radical line.
///
/// With `m` the foot of the radical line on `c1→c2` and `perp` the unit
/// left normal of `c1→c2`, points come back as `m + h·perp` then
/// `m - h·perp`. Concentric circles yield nothing, tangent circles a single
/// point.
#[must_use]
pub fn intersect_circle_and_circle(c1: &Point2, r1: f64, c2: &Point2, r2: f64) -> Vec<Point2> {
    let delta = c2 - c1;
    let dist_sq = delta.norm_squared();
    let dist = dist_sq.sqrt();

    if !dist.is_finite() || dist < TOLERANCE {
        return Vec::new();
    }

    let sum = r1 + r2;
    let diff = (r1 - r2).abs();
    if dist > sum + TOLERANCE || dist < diff - TOLERANCE {
        return Vec::new();
    }

    // Distance from c1 along c1→c2 to the radical line.
    let a = (r1 * r1 - r2 * r2 + dist_sq) / (2.0 * dist);
    let h_sq = r1 * r1 - a * a;
    if h_sq < -TOLERANCE {
        return Vec::new();
    }
    let h = h_sq.max(0.0).sqrt();

    let unit = delta / dist;
    let mid = c1 + unit * a;
    let perp = nalgebra::Vector2::new(-unit.y, unit.x);

    if h < TOLERANCE {
        vec![mid]
    } else {
        vec![mid + perp * h, mid - perp * h]
    }
}
